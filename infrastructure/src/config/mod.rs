//! Configuration file loading for minwon-desk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `MINWON_`
//! 2. `--config <path>` specified file
//! 3. Project root: `./minwon.toml` or `./.minwon.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/minwon-desk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAuditConfig, FileBackendConfig, FileConfig, FileOutputConfig,
    FileWorkflowConfig,
};
pub use loader::ConfigLoader;
