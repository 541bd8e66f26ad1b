//! Build-time version info, re-exported from `depot-utils` for UI widgets.

pub use depot_utils::version_info::{
    build_commit, build_date, build_version, env_version_info, format_env_version,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_label_is_known() {
        let (env_name, info) = env_version_info();
        assert!(matches!(env_name, "dev" | "stable"));
        assert!(!info.is_empty());
    }
}
