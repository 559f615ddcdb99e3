//! Decision and rating core for the Soulvan drive experience.
//!
//! Two loosely coupled engines live here. The threat side scores how
//! dangerous the current moment is from rival proximity, pursuer proximity,
//! speed, and damage, on a jittered rate-limited cadence, publishing results
//! through a three-slot blackboard. The motif side maps a narrative motif
//! plus a continuous intensity to the full presentation parameter bundle
//! consumed by the effects and audio collaborator.
//!
//! # Modules
//!
//! - [`threat`] -- Pure threat scoring and intensity derivation
//! - [`motif`] -- Motif selection, presentation computation, sink seam
//! - [`blackboard`] -- Three-slot store for the latest assessment
//! - [`cadence`] -- Deterministic jittered rate limiter
//! - [`scheduler`] -- Due-time task queue drained by the host tick
//! - [`service`] -- Cadence + evaluation + blackboard in one tick call
//! - [`config`] -- YAML configuration loading

pub mod blackboard;
pub mod cadence;
pub mod config;
pub mod motif;
pub mod scheduler;
pub mod service;
pub mod threat;

// Re-export the main entry points at crate root for convenience.
pub use blackboard::Blackboard;
pub use cadence::EvaluationCadence;
pub use config::{CadenceConfig, ConfigError, CoreConfig, LoggingConfig, WalletConfig};
pub use motif::{
    MotifProfile, MotifSelector, PresentationSink, compute_presentation, profile_for,
};
pub use scheduler::{ScheduledTask, TaskQueue};
pub use service::ThreatService;
pub use threat::{evaluate, motif_intensity_for};
