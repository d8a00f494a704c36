//! In-process change notification: a publisher with an ordered observer
//! list. Constructed once at the composition root and injected where
//! needed; there is no module-level singleton.

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Transport-agnostic event change broadcast to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventChange {
    Published {
        id: Uuid,
        title: String,
        shareable_link: String,
    },
    Updated {
        id: Uuid,
        title: String,
    },
    Cancelled {
        id: Uuid,
    },
    Completed {
        id: Uuid,
    },
}

/// Observer of event changes. Delivery is synchronous and in-process;
/// implementations should be quick and must tolerate repeated delivery
/// of the same change.
pub trait EventObserver: Send + Sync {
    /// Stable name used in delivery-failure logs.
    fn name(&self) -> &'static str;

    fn on_event(&self, change: &EventChange) -> anyhow::Result<()>;
}

/// Broadcasts changes to observers in registration order. Each delivery
/// is individually guarded: a failing observer is logged and skipped,
/// later observers still receive the change.
#[derive(Default)]
pub struct ChangePublisher {
    observers: RwLock<Vec<Arc<dyn EventObserver>>>,
}

impl ChangePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn EventObserver>) {
        self.observers.write().push(observer);
    }

    pub fn notify(&self, change: &EventChange) {
        for observer in self.observers.read().iter() {
            if let Err(e) = observer.on_event(change) {
                tracing::warn!(
                    observer = observer.name(),
                    error = %e,
                    "event observer failed, continuing with remaining observers"
                );
            }
        }
    }
}
