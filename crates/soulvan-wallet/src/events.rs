//! Observer seam for wallet lifecycle events.
//!
//! Completed operations notify interested collaborators through a typed
//! event enum rather than per-operation callbacks. Dispatch is synchronous
//! and single-shot: each registered observer sees each event exactly once,
//! in registration order, and observers registered after an event fired
//! never see it retroactively.

use soulvan_types::WalletEvent;

/// A collaborator interested in wallet lifecycle events.
///
/// Implementors receive every event emitted after their registration.
pub trait WalletObserver {
    /// Called once per emitted event, in emission order.
    fn on_wallet_event(&mut self, event: &WalletEvent);
}

/// Ordered registry of wallet observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn WalletObserver>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the registry has no observers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Add an observer. It will see events emitted from now on.
    pub fn register(&mut self, observer: Box<dyn WalletObserver>) {
        self.observers.push(observer);
    }

    /// Deliver `event` to every registered observer, in registration order.
    pub fn dispatch(&mut self, event: &WalletEvent) {
        for observer in &mut self.observers {
            observer.on_wallet_event(event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
