//! In-flight command tracking.
//!
//! Every dispatch gets a [`TaskHandle`] combining a [`TaskId`] (command type
//! + generation counter), a `CancellationToken` for cooperative cancellation,
//! and a completion flag the runtime sets when the spawned future finishes.
//! The dispatch latch in [`crate::StateCtx`] consults the completion flag to
//! refuse a second dispatch of the same command while one is in flight.

use std::any::TypeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned command task.
///
/// Combines the command's `TypeId` with a generation counter so successive
/// dispatches of the same command are distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned command future.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
    done: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self {
            id,
            cancel_token,
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Token clone for the spawned future to observe.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Shared completion flag; the runtime stores `true` when the future
    /// finishes (normally or cancelled).
    pub fn done_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.done)
    }

    /// Request cooperative cancellation. The task must check the token; it
    /// is not forcibly aborted.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_distinguishes_generations() {
        let type_id = TypeId::of::<String>();
        let first = TaskId::new(type_id, 1);
        let second = TaskId::new(type_id, 2);

        assert_eq!(first.type_id(), second.type_id());
        assert_ne!(first, second);
    }

    #[test]
    fn handle_starts_live() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );

        assert!(!handle.is_done());
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn cancel_is_shared_between_clones() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let clone = handle.clone();

        handle.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn done_flag_is_shared() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let flag = handle.done_flag();

        assert!(!handle.is_done());
        flag.store(true, Ordering::Release);
        assert!(handle.is_done());
    }
}
