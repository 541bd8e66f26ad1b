use std::any::Any;

/// A unit of mutable application state stored in a [`crate::StateCtx`].
///
/// States are looked up by `TypeId`, so each concrete type can be registered
/// at most once per context.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone-boxed copy handed to command snapshots and compute deps.
    ///
    /// States that are not cheaply cloneable may return `None`; they are then
    /// invisible to commands and derived computes.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value published through an [`crate::Updater`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body: downcast and overwrite in place.
pub fn state_assign_impl<T: 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::error!(
            "assign_box: published value is not a {}",
            std::any::type_name::<T>()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[test]
    fn assign_box_overwrites_in_place() {
        let mut counter = Counter { value: 1 };
        counter.assign_box(Box::new(Counter { value: 7 }));
        assert_eq!(counter.value, 7);
    }

    #[test]
    fn assign_box_ignores_mismatched_type() {
        let mut counter = Counter { value: 1 };
        counter.assign_box(Box::new("not a counter"));
        assert_eq!(counter.value, 1);
    }

    #[test]
    fn snapshot_round_trips() {
        let counter = Counter { value: 3 };
        let snap = counter.snapshot().unwrap();
        let restored = snap.downcast::<Counter>().unwrap();
        assert_eq!(*restored, counter);
    }
}
