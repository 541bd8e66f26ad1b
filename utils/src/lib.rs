//! Shared build-time utilities for the Depot workspace.

pub mod version_info;
