use std::any::Any;

use chrono::{DateTime, Utc};

use crate::{State, state_assign_impl};

/// Virtual clock carried in the context.
///
/// The app refreshes it once per frame; tests set it explicitly, which keeps
/// time-dependent behavior (toast expiry) deterministic.
#[derive(Debug, Default, Clone)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.virt = now;
    }
}

impl State for Time {
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

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}
