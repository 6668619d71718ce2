//! The nfw configuration record

use crate::{ConfigError, ConfigResult};
use nfw_operations::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TARGET_PREFIX: &str = "NetworkFirewall_20201112";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

/// Lowest impact that triggers a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmThreshold {
    /// Never prompt
    None,
    Low,
    Medium,
    #[default]
    High,
}

impl ConfirmThreshold {
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::None => None,
            Self::Low => Some(Severity::Low),
            Self::Medium => Some(Severity::Medium),
            Self::High => Some(Severity::High),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NfwConfig {
    /// Explicit service endpoint; derived from `region` when unset
    pub endpoint_url: Option<String>,
    pub region: String,
    /// `X-Amz-Target` prefix naming the API version
    pub target_prefix: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub output: OutputFormat,
    pub confirm_threshold: ConfirmThreshold,
}

impl Default for NfwConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: DEFAULT_REGION.to_string(),
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: OutputFormat::default(),
            confirm_threshold: ConfirmThreshold::default(),
        }
    }
}

impl NfwConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::invalid_value("region", "must not be empty"));
        }
        if self.target_prefix.trim().is_empty() {
            return Err(ConfigError::invalid_value("target_prefix", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value("timeout_secs", "must be at least 1"));
        }
        if matches!(&self.endpoint_url, Some(url) if url.trim().is_empty()) {
            return Err(ConfigError::invalid_value("endpoint_url", "must not be empty"));
        }
        Ok(())
    }
}
