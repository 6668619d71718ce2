//! Projection of a response onto the value returned to the caller

use crate::context::InvocationContext;
use crate::descriptor::OperationDescriptor;
use crate::error::{ConfigurationError, Result};
use serde_json::Value;
use std::fmt;

/// Which part of a call is returned to the caller
///
/// Parsed from a select expression:
/// - `*` returns the whole response
/// - `Field` or `Field.Nested` returns one response field
/// - `^Param` echoes the value of an input parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    WholeResponse,
    NamedField(Vec<String>),
    EchoParameter(&'static str),
}

impl Projection {
    /// Parse and validate `expr` against the operation's declared fields and parameters
    pub fn parse(expr: &str, descriptor: &OperationDescriptor) -> Result<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(ConfigurationError::invalid_select(expr, "expression is empty"));
        }

        if expr == "*" {
            return Ok(Self::WholeResponse);
        }

        if let Some(name) = expr.strip_prefix('^') {
            if name.is_empty() {
                return Err(ConfigurationError::invalid_select(
                    expr,
                    "'^' must be followed by a parameter name",
                ));
            }
            return descriptor
                .parameter(name)
                .map(|spec| Self::EchoParameter(spec.name))
                .ok_or_else(|| ConfigurationError::UnknownEchoParameter {
                    op: descriptor.op_string(),
                    expression: expr.to_string(),
                    parameter: name.to_string(),
                });
        }

        let mut segments = Vec::new();
        for segment in expr.split('.') {
            if segment.is_empty() {
                return Err(ConfigurationError::invalid_select(expr, "empty path segment"));
            }
            if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigurationError::invalid_select(
                    expr,
                    format!("invalid path segment '{segment}'"),
                ));
            }
            segments.push(segment.to_string());
        }

        let head = descriptor.response_field(&segments[0]).ok_or_else(|| {
            ConfigurationError::UnknownResponseField {
                op: descriptor.op_string(),
                expression: expr.to_string(),
                field: segments[0].clone(),
            }
        })?;
        segments[0] = head.to_string();

        Ok(Self::NamedField(segments))
    }

    /// Whether this projection is answered without calling the service
    pub fn is_echo(&self) -> bool {
        matches!(self, Self::EchoParameter(_))
    }

    /// Echo the input parameter; `None` unless this is an echo projection
    pub fn echo(&self, context: &InvocationContext) -> Option<Value> {
        match self {
            Self::EchoParameter(name) => Some(
                context
                    .get(name)
                    .map(|value| value.to_json())
                    .unwrap_or(Value::Null),
            ),
            _ => None,
        }
    }

    /// Project a response; a path missing from the response yields `null`
    pub fn apply(&self, response: &Value, context: &InvocationContext) -> Value {
        match self {
            Self::WholeResponse => response.clone(),
            Self::NamedField(path) => lookup(response, path).cloned().unwrap_or(Value::Null),
            Self::EchoParameter(_) => self.echo(context).unwrap_or(Value::Null),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeResponse => f.write_str("*"),
            Self::NamedField(path) => f.write_str(&path.join(".")),
            Self::EchoParameter(name) => write!(f, "^{name}"),
        }
    }
}

fn lookup<'a>(value: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| {
        let object = current.as_object()?;
        object.get(segment).or_else(|| {
            object
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(segment))
                .map(|(_, v)| v)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParamSpec;
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::new("FirewallArn").aliases(&["Arn"]),
        ParamSpec::new("FirewallName"),
    ];

    static DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("DescribeFirewall", "describe", "firewall")
            .parameters(PARAMS)
            .response_fields(&["Firewall", "FirewallStatus", "UpdateToken"]);

    fn context() -> InvocationContext {
        InvocationContext::builder(&DESCRIPTOR)
            .set("FirewallArn", "arn:x")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            Projection::parse("*", &DESCRIPTOR).unwrap(),
            Projection::WholeResponse
        );
        assert_eq!(
            Projection::parse("firewall.FirewallName", &DESCRIPTOR).unwrap(),
            Projection::NamedField(vec!["Firewall".into(), "FirewallName".into()])
        );
        assert_eq!(
            Projection::parse("^arn", &DESCRIPTOR).unwrap(),
            Projection::EchoParameter("FirewallArn")
        );
    }

    #[test]
    fn test_parse_rejects_unresolvable_names() {
        assert!(matches!(
            Projection::parse("Firewalls", &DESCRIPTOR),
            Err(ConfigurationError::UnknownResponseField { .. })
        ));
        assert!(matches!(
            Projection::parse("^Bogus", &DESCRIPTOR),
            Err(ConfigurationError::UnknownEchoParameter { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_expressions() {
        for expr in ["", "  ", "^", "Firewall..Name", "Firewall.Name[0]", "Fire wall"] {
            assert!(
                matches!(
                    Projection::parse(expr, &DESCRIPTOR),
                    Err(ConfigurationError::InvalidSelect { .. })
                ),
                "expected '{expr}' to be rejected"
            );
        }
    }

    #[test]
    fn test_apply() {
        let response = json!({
            "Firewall": {"FirewallName": "fw", "FirewallArn": "arn:x"},
            "UpdateToken": "t1"
        });
        let ctx = context();

        assert_eq!(Projection::WholeResponse.apply(&response, &ctx), response);
        assert_eq!(
            Projection::parse("Firewall.FirewallName", &DESCRIPTOR)
                .unwrap()
                .apply(&response, &ctx),
            json!("fw")
        );
        assert_eq!(
            Projection::parse("FirewallStatus", &DESCRIPTOR)
                .unwrap()
                .apply(&response, &ctx),
            Value::Null
        );
        assert_eq!(
            Projection::EchoParameter("FirewallArn").apply(&response, &ctx),
            json!("arn:x")
        );
        assert_eq!(
            Projection::EchoParameter("FirewallName").apply(&response, &ctx),
            Value::Null
        );
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        let projection = Projection::parse("firewall.FirewallName", &DESCRIPTOR).unwrap();
        assert_eq!(projection.to_string(), "Firewall.FirewallName");
        assert_eq!(Projection::EchoParameter("FirewallArn").to_string(), "^FirewallArn");
    }
}
