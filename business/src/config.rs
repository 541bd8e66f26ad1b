use std::any::Any;

use depot_states::{State, state_assign_impl};
use serde::Deserialize;

/// Application configuration, loaded from `DEPOT_*` environment variables
/// with sensible defaults. Carried in the `StateCtx` so widgets and commands
/// read one consistent copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name shown in the shell's top bar and the sidebar brand.
    pub org_name: String,
    /// Currency symbol used for money cells.
    pub currency: String,
    /// Seconds before a settled toast disappears.
    pub toast_ttl_secs: i64,
    /// Initials shown in the top-bar avatar.
    pub operator_initials: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            org_name: "Depot Admin".to_owned(),
            currency: "$".to_owned(),
            toast_ttl_secs: 4,
            operator_initials: "JD".to_owned(),
        }
    }
}

impl AppConfig {
    /// Read `DEPOT_ORG_NAME`, `DEPOT_CURRENCY`, ... falling back to defaults
    /// on any parse problem.
    pub fn from_env() -> Self {
        match serde_env::from_env_with_prefix("DEPOT") {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: falling back to defaults: {err}");
                Self::default()
            }
        }
    }
}

impl State for AppConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.org_name, "Depot Admin");
        assert_eq!(config.currency, "$");
        assert!(config.toast_ttl_secs > 0);
    }

    #[test]
    fn from_env_never_panics() {
        // With no DEPOT_* variables set this must quietly produce defaults.
        let config = AppConfig::from_env();
        assert!(!config.org_name.is_empty());
    }
}
