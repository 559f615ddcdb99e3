//! Configuration loading and typed config structures for the Soulvan core.
//!
//! The canonical configuration lives in `soulvan-config.yaml` at the
//! project root. This module defines strongly-typed structs mirroring the
//! YAML structure and provides a loader that reads the file. Every field
//! has a default matching the shipped tuning, so a missing file or a
//! partial file is never an error at the section level.

use std::path::Path;

use serde::Deserialize;
use soulvan_types::ThreatWeights;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Soulvan core configuration.
///
/// Mirrors the structure of `soulvan-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoreConfig {
    /// Threat scoring weights and speed normalization.
    #[serde(default)]
    pub threat: ThreatWeights,

    /// Evaluation cadence settings.
    #[serde(default)]
    pub cadence: CadenceConfig,

    /// Wallet stub settings.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The environment variable `SOULVAN_RPC_URL` overrides
    /// `wallet.rpc_url` so deployments can point at a different node
    /// without editing the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.wallet.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.wallet.apply_env_overrides();
        Ok(config)
    }
}

/// Evaluation cadence configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CadenceConfig {
    /// Base interval between threat evaluations, in time-units.
    #[serde(default = "default_base_interval")]
    pub base_interval: f64,

    /// Maximum uniform deviation added to each interval.
    #[serde(default = "default_max_deviation")]
    pub max_deviation: f64,

    /// Seed for the deterministic jitter sequence.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            base_interval: default_base_interval(),
            max_deviation: default_max_deviation(),
            seed: default_seed(),
        }
    }
}

/// Wallet stub configuration.
///
/// The stub only logs these values; they exist so the surface matches a
/// real deployment's expectations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the chain node.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Chain identifier.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Address of the Soulvan coin contract.
    #[serde(default)]
    pub coin_address: String,

    /// Address of the NFT contract.
    #[serde(default)]
    pub nft_address: String,

    /// Address of the governance contract.
    #[serde(default)]
    pub governance_address: String,
}

impl WalletConfig {
    /// Override the RPC URL with `SOULVAN_RPC_URL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SOULVAN_RPC_URL") {
            self.rpc_url = val;
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            chain_id: default_chain_id(),
            coin_address: String::new(),
            nft_address: String::new(),
            governance_address: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_base_interval() -> f64 {
    0.5
}

const fn default_max_deviation() -> f64 {
    0.1
}

const fn default_seed() -> u64 {
    42
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_owned()
}

const fn default_chain_id() -> u64 {
    31337
}

fn default_log_level() -> String {
    "info".to_owned()
}
