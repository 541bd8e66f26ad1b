use std::any::{Any, TypeId};

use flume::Sender;

/// Publishes replacement values for registered states and computes back to
/// the owning [`crate::StateCtx`].
///
/// Values are queued on an unbounded channel and applied by
/// [`crate::StateCtx::sync_computes`] on the UI thread; `set` never blocks
/// and is safe to call from spawned command futures.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    /// Queue `value` as the new content of its registered slot.
    pub fn set<T: Any + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            log::warn!(
                "updater: dropping {} result, StateCtx is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
