//! Configuration provider using Figment

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::settings::NfwConfig;
use crate::ConfigResult;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use tracing::{debug, trace};

/// Prefix of environment variables that override configuration keys
pub const ENV_PREFIX: &str = "NFW_";

/// Loads [`NfwConfig`] from all sources
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. Configuration files, global then project
/// 3. `NFW_` environment variables
///
/// Command line flags are applied by the caller on top of the result.
#[derive(Debug, Default, Clone)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> ConfigResult<NfwConfig> {
        let config: NfwConfig = self.build_figment().extract()?;
        config.validate()?;
        debug!(
            region = %config.region,
            endpoint_url = config.endpoint_url.as_deref().unwrap_or("-"),
            "loaded configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(NfwConfig::default()));
        for file in self.discovery.discover_all() {
            figment = figment.merge(load_config_file(&file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

fn load_config_file(file: &ConfigFile) -> Figment {
    trace!("Loading config file: {} ({:?})", file.path.display(), file.format);
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
        ConfigFormat::Json => Figment::from(Json::file(&file.path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ConfirmThreshold, OutputFormat};
    use crate::ConfigError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    const ENV_KEYS: &[&str] = &[
        "NFW_ENDPOINT_URL",
        "NFW_REGION",
        "NFW_TARGET_PREFIX",
        "NFW_TIMEOUT_SECS",
        "NFW_OUTPUT",
        "NFW_CONFIRM_THRESHOLD",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn provider(global: &TempDir, project: &TempDir) -> ConfigProvider {
        ConfigProvider::with_discovery(FileDiscovery::with_dirs(
            Some(global.path().to_path_buf()),
            Some(project.path().to_path_buf()),
        ))
    }

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        clear_env();
        let (global, project) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let config = provider(&global, &project).load().unwrap();
        assert_eq!(config, NfwConfig::default());
    }

    #[test]
    #[serial]
    fn test_project_file_overrides_global_file() {
        clear_env();
        let (global, project) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(
            global.path().join("config.yaml"),
            "region: eu-west-1\ntimeout_secs: 5\n",
        )
        .unwrap();
        fs::write(
            project.path().join("config.toml"),
            "region = \"eu-central-1\"\noutput = \"yaml\"\n",
        )
        .unwrap();

        let config = provider(&global, &project).load().unwrap();

        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.output, OutputFormat::Yaml);
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        clear_env();
        let (global, project) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(
            project.path().join("config.json"),
            r#"{"region": "eu-west-1", "confirm_threshold": "low"}"#,
        )
        .unwrap();
        std::env::set_var("NFW_REGION", "ap-southeast-2");
        std::env::set_var("NFW_ENDPOINT_URL", "http://localhost:4566");
        std::env::set_var("NFW_CONFIRM_THRESHOLD", "none");

        let config = provider(&global, &project).load();
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.confirm_threshold, ConfirmThreshold::None);
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_env();
        let (global, project) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        std::env::set_var("NFW_TIMEOUT_SECS", "0");
        let zero = provider(&global, &project).load();
        std::env::set_var("NFW_TIMEOUT_SECS", "soon");
        let unparsable = provider(&global, &project).load();
        clear_env();

        assert!(matches!(zero, Err(ConfigError::InvalidValue { .. })));
        assert!(matches!(unparsable, Err(ConfigError::ParseError { .. })));
    }
}
