//! Out-of-band change notification.
//!
//! The ledgers never announce their own writes. When some other process
//! changes the underlying store, whoever detects it calls
//! [`ChangeNotifier::notify`] with the affected key, and subscribed
//! listeners react by reloading their state from the store. Listeners get
//! the key only, never the value: reload, don't merge.

use std::sync::{Arc, RwLock};

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// Fan-out of storage change signals to subscribed listeners.
///
/// Delivery is synchronous and in subscription order: `notify` returns
/// once every listener has run. Clones share the listener list.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl ChangeNotifier {
    /// Creates a notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for storage change signals.
    ///
    /// The listener receives the changed key and stays registered for the
    /// lifetime of the notifier.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut listeners = match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(Box::new(listener));
    }

    /// Delivers a change signal for `key` to every listener.
    pub fn notify(&self, key: &str) {
        let listeners = match self.listeners.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        tracing::debug!(key, count = listeners.len(), "Notifying storage listeners");
        for listener in listeners.iter() {
            listener(key);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        match self.listeners.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
