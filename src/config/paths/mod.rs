//! Platform directories for configuration and state.

pub mod project_dirs;

pub use project_dirs::{global_config_path, state_dir};
