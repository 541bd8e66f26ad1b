use std::any::Any;

use depot_states::{State, state_assign_impl};

use crate::ViewMode;

/// Console preferences. Ephemeral like everything else; reset on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsState {
    /// Tighter table row heights.
    pub compact_tables: bool,
    /// Show archived products in the catalog views.
    pub show_archived: bool,
    /// Initial view mode of the products page.
    pub default_view: ViewMode,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            compact_tables: false,
            show_archived: true,
            default_view: ViewMode::Grid,
        }
    }
}

impl State for SettingsState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything() {
        let settings = SettingsState::default();
        assert!(settings.show_archived);
        assert!(!settings.compact_tables);
        assert_eq!(settings.default_view, ViewMode::Grid);
    }
}
