use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view of a compute's declared dependencies.
///
/// Built from `snapshot()` clones right before `compute()` runs, so the
/// compute sees a consistent picture without borrowing the context.
pub struct Dep {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl Dep {
    pub(crate) fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// # Panics
    /// Panics if `T` is not among the compute's declared state deps.
    pub fn state<T: State>(&self) -> &T {
        self.try_get::<T>()
            .unwrap_or_else(|| panic!("dep state {} is missing", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` is not among the compute's declared compute deps.
    pub fn compute<T: Compute>(&self) -> &T {
        self.try_get::<T>()
            .unwrap_or_else(|| panic!("dep compute {} is missing", type_name::<T>()))
    }

    fn try_get<T: Any>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}
