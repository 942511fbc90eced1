//! Host lifecycle signals and the bus that delivers them.

use crate::registry::RequestContext;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A lifecycle event emitted by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// The platform finished loading and is about to serve this request.
    PlatformReady(RequestContext),
    /// The add-on went from inactive to active.
    Activated,
    /// The add-on went from active to inactive.
    Deactivated,
}

/// Signal discriminant used for subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    PlatformReady,
    Activated,
    Deactivated,
}

impl HostSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            HostSignal::PlatformReady(_) => SignalKind::PlatformReady,
            HostSignal::Activated => SignalKind::Activated,
            HostSignal::Deactivated => SignalKind::Deactivated,
        }
    }
}

/// Something that reacts to host signals.
#[async_trait]
pub trait SignalHandler: Send + Sync {
    async fn on_signal(&self, signal: HostSignal);
}

/// Delivers host signals to subscribed handlers, in subscription order.
#[derive(Default)]
pub struct SignalBus {
    subscribers: Mutex<Vec<(SignalKind, Arc<dyn SignalHandler>)>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kind: SignalKind, handler: Arc<dyn SignalHandler>) {
        debug!(?kind, "Handler subscribed");
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((kind, handler));
    }

    /// Total number of subscriptions across all kinds.
    pub fn subscription_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Delivers `signal` to every handler subscribed to its kind and returns how many
    /// handlers ran.
    pub async fn emit(&self, signal: HostSignal) -> usize {
        // Snapshot so handlers may subscribe while being notified.
        let handlers: Vec<_> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(kind, _)| *kind == signal.kind())
            .map(|(_, handler)| handler.clone())
            .collect();

        debug!(?signal, handlers = handlers.len(), "Emitting signal");
        for handler in &handlers {
            handler.on_signal(signal).await;
        }
        handlers.len()
    }
}
