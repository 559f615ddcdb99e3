//! Demo host loop for the Soulvan core.
//!
//! Wires the threat service, blackboard, motif selector, and wallet stub
//! into one synchronous frame loop fed by a seeded synthetic drive. The
//! host owns the clock: it polls the threat cadence, pushes presentation
//! through a logging sink, and pumps the wallet's task queue, playing the
//! role the game thread plays in production.
//!
//! ```text
//! DriveWorld --> ThreatService --> Blackboard --> MotifSelector --> sink
//!                                        wallet script --> WalletSubsystem
//! ```

mod drive;
mod sink;

use std::path::{Path, PathBuf};

use anyhow::bail;
use soulvan_core::{
    Blackboard, ConfigError, CoreConfig, EvaluationCadence, MotifSelector, ThreatService,
};
use soulvan_types::{Motif, VoteChoice};
use soulvan_wallet::WalletSubsystem;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::drive::DriveWorld;
use crate::sink::{TracingSink, TracingWalletObserver};

/// Frame step of the demo loop, in time-units.
const FRAME_DT: f64 = 1.0 / 30.0;
/// Number of frames the demo runs for (20 time-units).
const FRAME_COUNT: u32 = 600;

/// Application entry point.
///
/// Loads configuration, initializes structured logging, then runs the
/// fixed-length demo drive.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be parsed.
fn main() -> anyhow::Result<()> {
    let path = config_path();
    let (config, load_note) = load_config(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!("soulvan-host starting");
    if let Some(note) = load_note {
        warn!(path = %path.display(), note, "config not read, using defaults");
    }
    info!(
        base_interval = config.cadence.base_interval,
        max_deviation = config.cadence.max_deviation,
        seed = config.cadence.seed,
        rpc_url = config.wallet.rpc_url,
        chain_id = config.wallet.chain_id,
        "configuration loaded"
    );

    run_demo(&config);
    info!("soulvan-host finished");
    Ok(())
}

/// Resolve the config path from `SOULVAN_CONFIG`, defaulting to the
/// project-root file.
fn config_path() -> PathBuf {
    std::env::var_os("SOULVAN_CONFIG")
        .map_or_else(|| PathBuf::from("soulvan-config.yaml"), PathBuf::from)
}

/// Load configuration, degrading a missing file to defaults.
///
/// A file that exists but fails to parse is fatal; shipping with a silently
/// ignored tuning file would be worse than not starting.
fn load_config(path: &Path) -> anyhow::Result<(CoreConfig, Option<String>)> {
    match CoreConfig::from_file(path) {
        Ok(config) => Ok((config, None)),
        Err(ConfigError::Io { source }) => Ok((CoreConfig::default(), Some(source.to_string()))),
        Err(err) => {
            let path = path.display();
            bail!("failed to parse config {path}: {err}")
        }
    }
}

/// Run the fixed-length synthetic drive.
fn run_demo(config: &CoreConfig) {
    let cadence = EvaluationCadence::new(
        config.cadence.base_interval,
        config.cadence.max_deviation,
        config.cadence.seed,
    );
    let mut service = ThreatService::new(config.threat, cadence);
    let mut blackboard = Blackboard::new();
    let mut selector = MotifSelector::new();
    let mut sink = TracingSink;
    let mut world = DriveWorld::new(config.cadence.seed);

    let mut wallet = WalletSubsystem::new(config.wallet.clone());
    wallet.register_observer(Box::new(TracingWalletObserver));
    wallet.unlock(0.0, &passphrase());

    let mut script_step = 0;
    let mut now = 0.0;
    for _ in 0..FRAME_COUNT {
        let inputs = world.advance(now);
        if let Some(result) = service.tick(now, inputs, &mut blackboard) {
            info!(
                threat = result.threat_level,
                speed_kmh = result.speed_kmh,
                intensity = result.motif_intensity,
                "threat assessed"
            );
        }

        let intensity = blackboard.motif_intensity().unwrap_or(0.5);
        selector.drive(motif_for_phase(now), intensity, &mut sink);

        script_step = run_wallet_script(script_step, now, &mut wallet);
        wallet.tick(now);
        now += FRAME_DT;
    }
}

fn passphrase() -> String {
    std::env::var("SOULVAN_PASSPHRASE").unwrap_or_else(|_| "soulvan-demo".to_owned())
}

/// Narrative motif for each phase of the scripted demo drive.
const fn motif_for_phase(now: f64) -> Motif {
    if now < 5.0 {
        Motif::Calm
    } else if now < 12.0 {
        Motif::Storm
    } else if now < 16.0 {
        Motif::Cosmic
    } else {
        Motif::Oracle
    }
}

/// Advance the scripted wallet interactions; returns the next step.
fn run_wallet_script(step: u32, now: f64, wallet: &mut WalletSubsystem) -> u32 {
    match step {
        0 if now >= 2.0 => {
            wallet.queue_reward("ipfs://soulvan/rewards/chase-escape.json");
            1
        }
        1 if now >= 4.0 => {
            if let Err(err) =
                wallet.mint_reward_nft(now, "ipfs://soulvan/rewards/chase-escape.json")
            {
                warn!(%err, "mint rejected");
            }
            2
        }
        2 if now >= 6.0 => {
            if let Err(err) = wallet.cast_vote(now, 1, VoteChoice::For) {
                warn!(%err, "vote rejected");
            }
            3
        }
        3 if now >= 8.0 => {
            if let Err(err) = wallet.send_transaction(
                now,
                "0x00000000000000000000000000000000000000AA",
                25.0,
            ) {
                warn!(%err, "transfer rejected");
            }
            4
        }
        4 if now >= 18.0 => {
            wallet.lock();
            5
        }
        _ => step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_phases_cover_the_demo() {
        assert_eq!(motif_for_phase(0.0), Motif::Calm);
        assert_eq!(motif_for_phase(5.0), Motif::Storm);
        assert_eq!(motif_for_phase(12.0), Motif::Cosmic);
        assert_eq!(motif_for_phase(19.9), Motif::Oracle);
    }

    #[test]
    fn wallet_script_waits_for_its_cue() {
        let mut wallet = WalletSubsystem::new(soulvan_core::WalletConfig::default());
        assert_eq!(run_wallet_script(0, 1.0, &mut wallet), 0);
        assert_eq!(run_wallet_script(0, 2.0, &mut wallet), 1);
        assert_eq!(wallet.pending_rewards().len(), 1);
    }
}
