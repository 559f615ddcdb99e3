//! Stub non-custodial wallet subsystem for the Soulvan core.
//!
//! Chain access is faked end to end. Requests validate against the lock
//! state synchronously, completions arrive later through the host-pumped
//! task queue, and all installed data is canned. The observable surface
//! (guarded operations, delayed typed events, cache lifecycle) matches
//! what a real chain facade will provide.
//!
//! # Modules
//!
//! - [`wallet`] -- The subsystem: lock state, guarded operations, canned data
//! - [`events`] -- Observer trait and synchronous dispatch registry
//! - [`error`] -- Wallet error types

pub mod error;
pub mod events;
pub mod wallet;

pub use error::WalletError;
pub use events::{ObserverRegistry, WalletObserver};
pub use wallet::WalletSubsystem;
