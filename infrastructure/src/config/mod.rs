//! Configuration file loading for zenbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ZENBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./zenbot.toml` or `./.zenbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/zenbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileModelsConfig, FileOrchestrationConfig, FileProviderConfig,
    FileServerConfig, FileStreamingConfig, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
