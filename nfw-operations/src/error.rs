//! Configuration errors raised before any remote call

use thiserror::Error;

/// Result type for invocation setup
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Errors detected while resolving an invocation, before dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required parameter was not supplied
    #[error("missing required parameter '{parameter}' for '{op}'")]
    MissingParameter { op: String, parameter: String },

    /// The operation does not declare this parameter
    #[error("unknown parameter '{parameter}' for '{op}'")]
    UnknownParameter { op: String, parameter: String },

    /// The value does not have the declared type
    #[error("invalid value for '{parameter}': expected {expected}, got {got}")]
    InvalidType {
        parameter: String,
        expected: &'static str,
        got: String,
    },

    /// The value is outside the parameter's enumeration
    #[error("invalid value '{value}' for '{parameter}': expected one of {allowed}")]
    NotInEnumeration {
        parameter: String,
        value: String,
        allowed: String,
    },

    /// A JSON document parameter could not be parsed
    #[error("invalid JSON for '{parameter}': {message}")]
    InvalidJson { parameter: String, message: String },

    /// The select expression is malformed
    #[error("invalid select expression '{expression}': {message}")]
    InvalidSelect { expression: String, message: String },

    /// The select expression names a field the response does not have
    #[error("select expression '{expression}' names unknown response field '{field}' of '{op}'")]
    UnknownResponseField {
        op: String,
        expression: String,
        field: String,
    },

    /// The select expression echoes a parameter the operation does not declare
    #[error("select expression '{expression}' names unknown parameter '{parameter}' of '{op}'")]
    UnknownEchoParameter {
        op: String,
        expression: String,
        parameter: String,
    },

    /// The invocation context was built for a different operation
    #[error("'{expected}' was given an invocation context built for '{actual}'")]
    ContextMismatch { expected: String, actual: String },
}

impl ConfigurationError {
    /// Create a missing parameter error
    pub fn missing_parameter(op: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            op: op.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(op: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::UnknownParameter {
            op: op.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        parameter: impl Into<String>,
        expected: &'static str,
        got: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            parameter: parameter.into(),
            expected,
            got: got.into(),
        }
    }

    /// Create an invalid select error
    pub fn invalid_select(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelect {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// The parameter this error is about, if any
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { parameter, .. }
            | Self::UnknownParameter { parameter, .. }
            | Self::InvalidType { parameter, .. }
            | Self::NotInEnumeration { parameter, .. }
            | Self::InvalidJson { parameter, .. } => Some(parameter.as_str()),
            Self::InvalidSelect { .. }
            | Self::UnknownResponseField { .. }
            | Self::UnknownEchoParameter { .. } => Some("Select"),
            Self::ContextMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigurationError::missing_parameter("delete firewall", "FirewallArn");
        assert_eq!(
            err.to_string(),
            "missing required parameter 'FirewallArn' for 'delete firewall'"
        );
    }

    #[test]
    fn test_parameter_names_offender() {
        let err = ConfigurationError::invalid_type("MaxResults", "integer", "ten");
        assert_eq!(err.parameter(), Some("MaxResults"));

        let err = ConfigurationError::invalid_select("", "expression is empty");
        assert_eq!(err.parameter(), Some("Select"));
    }
}
