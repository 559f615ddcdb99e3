//! Shared type definitions for the Soulvan core.
//!
//! This crate is the single source of truth for the value types used across
//! the Soulvan workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the companion dashboard and launcher UI.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for tasks and wallet requests
//! - [`motif`] -- Motif enumeration, track identifiers, presentation bundle
//! - [`threat`] -- Threat evaluation inputs, weights, and result
//! - [`wallet`] -- Wallet balances, NFTs, proposals, and observer events

pub mod ids;
pub mod motif;
pub mod threat;
pub mod wallet;

// Re-export all public types at crate root for convenience.
pub use ids::{RequestId, TaskId};
pub use motif::{Motif, MotifPresentation, OverlayChannel, TrackId};
pub use threat::{ThreatInputs, ThreatResult, ThreatWeights, Vec3};
pub use wallet::{
    BalanceState, NftData, NftType, ProposalData, ProposalState, VoteChoice, WalletEvent,
};
