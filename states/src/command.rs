use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// A manual-only side effect dispatched explicitly via
/// [`crate::StateCtx::dispatch`].
///
/// `run` receives a snapshot of the registered states/computes taken at
/// dispatch time, an [`Updater`] to publish results, and a cancellation
/// token. The returned future is spawned on the context's runtime; the UI
/// thread never blocks on it.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snapshot: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
