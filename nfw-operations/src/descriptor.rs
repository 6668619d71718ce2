//! Static operation descriptors

use crate::error::Result;
use crate::parameter::ParamSpec;
use crate::projection::Projection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact of an operation, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Where a paginated operation carries its continuation token and page bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Request parameter receiving the continuation token
    pub token_param: &'static str,
    /// Response field returning the continuation token
    pub token_field: &'static str,
    /// Request parameter bounding the page size
    pub max_param: Option<&'static str>,
}

impl Pagination {
    /// The `NextToken`/`MaxResults` convention shared by the service
    pub const fn standard() -> Self {
        Self {
            token_param: "NextToken",
            token_field: "NextToken",
            max_param: Some("MaxResults"),
        }
    }
}

/// Definition of one remote operation
///
/// Descriptors are `const` data: they are defined once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Remote operation name, e.g. `DeleteFirewall`
    pub name: &'static str,
    pub verb: &'static str,
    pub noun: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
    /// Top-level fields of the response, used to validate `select` paths
    pub response_fields: &'static [&'static str],
    /// Default projection expression (`*`, a field path or `^Param`)
    pub default_select: &'static str,
    /// Confirmation impact; `None` for operations without side effects
    pub confirm_impact: Option<Severity>,
    pub pagination: Option<Pagination>,
}

impl OperationDescriptor {
    pub const fn new(name: &'static str, verb: &'static str, noun: &'static str) -> Self {
        Self {
            name,
            verb,
            noun,
            description: "",
            parameters: &[],
            response_fields: &[],
            default_select: "*",
            confirm_impact: None,
            pagination: None,
        }
    }

    pub const fn description(mut self, desc: &'static str) -> Self {
        self.description = desc;
        self
    }

    pub const fn parameters(mut self, params: &'static [ParamSpec]) -> Self {
        self.parameters = params;
        self
    }

    pub const fn response_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.response_fields = fields;
        self
    }

    pub const fn select(mut self, expr: &'static str) -> Self {
        self.default_select = expr;
        self
    }

    pub const fn confirm(mut self, impact: Severity) -> Self {
        self.confirm_impact = Some(impact);
        self
    }

    pub const fn paginated(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Canonical op string, e.g. `"delete firewall"`
    pub fn op_string(&self) -> String {
        format!("{} {}", self.verb, self.noun)
    }

    /// Look up a parameter by name or alias
    pub fn parameter(&self, name: &str) -> Option<&'static ParamSpec> {
        self.parameters.iter().find(|p| p.matches(name))
    }

    /// Look up a declared response field, ignoring case
    pub fn response_field(&self, name: &str) -> Option<&'static str> {
        self.response_fields
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(name))
    }

    /// Destructive operations delete or irreversibly alter a remote resource
    pub fn is_destructive(&self) -> bool {
        self.confirm_impact == Some(Severity::High)
    }

    /// Whether a prompt is needed under the given threshold (`None` never prompts)
    pub fn requires_confirmation(&self, threshold: Option<Severity>) -> bool {
        match (self.confirm_impact, threshold) {
            (Some(impact), Some(threshold)) => impact >= threshold,
            _ => false,
        }
    }

    /// Parse and validate the descriptor's own default projection
    pub fn default_projection(&self) -> Result<Projection> {
        Projection::parse(self.default_select, self)
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.noun)
    }
}
