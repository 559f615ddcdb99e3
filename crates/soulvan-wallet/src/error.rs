//! Error types for the wallet subsystem.
//!
//! The stub is deliberately permissive: most malformed requests degrade to
//! logged no-ops the way the chain facade will eventually report failures
//! asynchronously. The one hard precondition is the lock state, which every
//! chain-facing operation checks synchronously.

/// Errors that can occur during wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// A chain-facing operation was attempted while the wallet is locked.
    #[error("wallet is locked: {operation} requires an unlocked wallet")]
    Locked {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
