//! Transient notification queue.
//!
//! The create workflow pushes a loading toast when the mutation starts and
//! resolves it in place to success/error when the promise settles. Settled
//! toasts expire against the virtual [`depot_states::Time`] clock; loading
//! toasts stay until resolved.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use depot_states::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ToastsState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
            created_at: now,
        });
        self.next_id
    }

    pub fn push_loading(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.push(ToastKind::Loading, message, now)
    }

    /// Settle a loading toast in place. Unknown ids push a fresh toast.
    pub fn resolve(
        &mut self,
        id: u64,
        kind: ToastKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message.into();
                toast.created_at = now;
            }
            None => {
                self.push(kind, message, now);
            }
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop settled toasts older than `ttl`. Loading toasts never expire.
    pub fn expire(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.toasts
            .retain(|toast| toast.kind == ToastKind::Loading || now - toast.created_at < ttl);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl State for ToastsState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        depot_states::state_assign_impl(self, new_self);
    }
}
