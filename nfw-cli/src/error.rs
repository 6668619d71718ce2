//! Error handling for the nfw CLI
//!
//! Errors carry the exit code they map to, and keep their source so the full
//! cause chain can be reported.

use std::error::Error;
use std::fmt;

use crate::exit_codes::{EXIT_CONFIG, EXIT_ERROR};
use nfw_config::ConfigError;
use nfw_network_firewall::ClientError;
use nfw_operations::{ConfigurationError, TransportFailure};

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
    /// Extra guidance printed after the error chain
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
            hint: None,
        }
    }

    /// An invocation problem detected before anything was sent
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(message, EXIT_CONFIG)
    }

    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            let text = err.to_string();
            if text != self.message {
                result.push_str(&format!("\n  Caused by: {text}"));
            }
            current_source = err.source();
        }

        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  Hint: {hint}"));
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<ConfigurationError> for CliError {
    fn from(error: ConfigurationError) -> Self {
        Self::config(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::config("Failed to load configuration").with_source(error)
    }
}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        Self::config(error.to_string())
    }
}

impl From<TransportFailure> for CliError {
    fn from(failure: TransportFailure) -> Self {
        let message = match &failure.code {
            Some(code) => format!("{code}: {}", failure.message),
            None => failure.message.clone(),
        };
        let mut error = Self::new(message, EXIT_ERROR);
        error.hint = failure.hint.clone();
        error
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(exit_code = e.exit_code, "command failed");
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_exit_2() {
        let error: CliError = ConfigurationError::missing_parameter("delete firewall", "FirewallArn").into();
        assert_eq!(error.exit_code, EXIT_CONFIG);
        assert!(error.message.contains("FirewallArn"));
    }

    #[test]
    fn test_transport_failure_keeps_code_and_hint() {
        let failure = TransportFailure::new("dns error: failed to lookup address information").diagnosed();
        let error: CliError = failure.into();
        assert_eq!(error.exit_code, EXIT_ERROR);
        assert!(error.full_chain().contains("Hint:"));

        let failure = TransportFailure::new("Update token mismatch").with_code("InvalidTokenException");
        let error: CliError = failure.into();
        assert_eq!(error.message, "InvalidTokenException: Update token mismatch");
    }

    #[test]
    fn test_full_chain_includes_source() {
        let source = std::io::Error::other("disk on fire");
        let error = CliError::new("Failed to read file", EXIT_CONFIG).with_source(source);
        assert_eq!(error.full_chain(), "Failed to read file\n  Caused by: disk on fire");
    }

    #[test]
    fn test_handle_cli_result() {
        assert_eq!(handle_cli_result(Ok(3)), 3);
        assert_eq!(handle_cli_result(Err(CliError::config("bad"))), EXIT_CONFIG);
    }
}
