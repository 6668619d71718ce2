//! # nfw configuration
//!
//! Layered configuration for the `nfw` command line: built-in defaults,
//! `~/.nfw/config.*`, `./.nfw/config.*`, then `NFW_*` environment
//! variables.

mod discovery;
mod error;
mod provider;
mod settings;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use settings::{
    ConfirmThreshold, NfwConfig, OutputFormat, DEFAULT_REGION, DEFAULT_TARGET_PREFIX,
    DEFAULT_TIMEOUT_SECS,
};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load the configuration from the default locations
pub fn load_config() -> ConfigResult<NfwConfig> {
    ConfigProvider::new().load()
}
