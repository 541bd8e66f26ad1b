use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// Declared dependencies of a compute: `(state deps, compute deps)`.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived or command-updated cache stored in a [`crate::StateCtx`].
///
/// Derived computes declare `deps()` and recompute whenever a dependency
/// changes. Command-updated caches declare no deps and implement `compute`
/// as a no-op; their content arrives through [`Updater::set`] from a
/// [`crate::Command`]. Side effects must never run inside `compute` because
/// computes run implicitly (startup, dirty propagation).
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    /// Recompute from `deps` and publish the replacement via `updater`.
    fn compute(&self, deps: Dep, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone-boxed copy handed to command snapshots and dependent computes.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value published through an [`Updater`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body for computes: downcast and overwrite in place.
pub fn assign_impl<T: 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::error!(
            "assign_box: published value is not a {}",
            std::any::type_name::<T>()
        ),
    }
}
