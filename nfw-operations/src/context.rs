//! Resolved argument values for one invocation

use crate::descriptor::OperationDescriptor;
use crate::error::{ConfigurationError, Result};
use crate::parameter::{ParamSpec, ParamType};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A typed argument value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    String(String),
    StringList(Vec<String>),
    Integer(i64),
    Boolean(bool),
    Json(Value),
}

impl ArgValue {
    /// JSON form written into requests
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::StringList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Integer(n) => Value::from(*n),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Json(v) => v.clone(),
        }
    }

    /// Display form for prompts and logs
    pub fn display(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::StringList(items) => items.join(","),
            Self::Integer(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Json(v) => v.to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::StringList(_) => "string list",
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Json(_) => "JSON document",
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(items: Vec<String>) -> Self {
        Self::StringList(items)
    }
}

impl From<Vec<&str>> for ArgValue {
    fn from(items: Vec<&str>) -> Self {
        Self::StringList(items.into_iter().map(String::from).collect())
    }
}

/// The resolved, validated argument values for one call
///
/// Only supplied values are present. Built through [`ContextBuilder`]; immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext {
    operation: &'static str,
    values: IndexMap<&'static str, ArgValue>,
}

impl InvocationContext {
    /// Start building a context for `descriptor`
    pub fn builder(descriptor: &'static OperationDescriptor) -> ContextBuilder {
        ContextBuilder {
            descriptor,
            values: IndexMap::new(),
        }
    }

    /// Build a context from a JSON object keyed by parameter name or alias
    pub fn from_json(
        descriptor: &'static OperationDescriptor,
        input: &serde_json::Map<String, Value>,
    ) -> Result<Self> {
        input
            .iter()
            .try_fold(Self::builder(descriptor), |builder, (name, value)| {
                builder.set_json(name, value.clone())
            })?
            .build()
    }

    /// Remote operation this context was built for
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Supplied value of a parameter, by canonical name
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether the parameter was supplied
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Supplied values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON view of the supplied values, keyed by parameter name
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect(),
        )
    }
}

/// Collects and type-checks argument values against a descriptor
#[derive(Debug)]
pub struct ContextBuilder {
    descriptor: &'static OperationDescriptor,
    values: IndexMap<&'static str, ArgValue>,
}

impl ContextBuilder {
    /// Set a typed value
    pub fn set(mut self, name: &str, value: impl Into<ArgValue>) -> Result<Self> {
        let spec = self.resolve(name)?;
        let value = check_value(spec, value.into())?;
        self.values.insert(spec.name, value);
        Ok(self)
    }

    /// Set a value from its command-line text form
    pub fn set_text(self, name: &str, text: &str) -> Result<Self> {
        let spec = self.resolve(name)?;
        let value = parse_text(spec, text)?;
        self.set(name, value)
    }

    /// Set a value from JSON, converting according to the declared type
    pub fn set_json(self, name: &str, value: Value) -> Result<Self> {
        let spec = self.resolve(name)?;
        let value = from_json(spec, value)?;
        self.set(name, value)
    }

    /// Finish, checking that every required parameter was supplied
    pub fn build(self) -> Result<InvocationContext> {
        if let Some(missing) = self
            .descriptor
            .parameters
            .iter()
            .find(|p| p.required && !self.values.contains_key(p.name))
        {
            return Err(ConfigurationError::missing_parameter(
                self.descriptor.op_string(),
                missing.name,
            ));
        }

        // Keep declaration order regardless of the order values were set in.
        let descriptor = self.descriptor;
        let mut values = self.values;
        let order = |name: &&'static str| {
            descriptor
                .parameters
                .iter()
                .position(|p| p.name == *name)
                .unwrap_or(usize::MAX)
        };
        values.sort_by(|a, _, b, _| order(a).cmp(&order(b)));

        Ok(InvocationContext {
            operation: descriptor.name,
            values,
        })
    }

    fn resolve(&self, name: &str) -> Result<&'static ParamSpec> {
        self.descriptor
            .parameter(name)
            .ok_or_else(|| ConfigurationError::unknown_parameter(self.descriptor.op_string(), name))
    }
}

fn check_value(spec: &ParamSpec, value: ArgValue) -> Result<ArgValue> {
    match (spec.param_type, value) {
        (ParamType::String, v @ ArgValue::String(_))
        | (ParamType::StringList, v @ ArgValue::StringList(_))
        | (ParamType::Integer, v @ ArgValue::Integer(_))
        | (ParamType::Boolean, v @ ArgValue::Boolean(_))
        | (ParamType::Json, v @ ArgValue::Json(_)) => Ok(v),
        (ParamType::StringList, ArgValue::String(s)) => Ok(ArgValue::StringList(vec![s])),
        (ParamType::Enum(allowed), ArgValue::String(s)) => allowed
            .iter()
            .find(|a| a.eq_ignore_ascii_case(&s))
            .map(|a| ArgValue::String(a.to_string()))
            .ok_or_else(|| ConfigurationError::NotInEnumeration {
                parameter: spec.name.to_string(),
                value: s,
                allowed: allowed.join(", "),
            }),
        (expected, got) => Err(ConfigurationError::invalid_type(
            spec.name,
            expected.type_name(),
            got.kind(),
        )),
    }
}

fn parse_text(spec: &ParamSpec, text: &str) -> Result<ArgValue> {
    match spec.param_type {
        ParamType::String | ParamType::Enum(_) => Ok(ArgValue::String(text.to_string())),
        ParamType::StringList => Ok(ArgValue::StringList(
            text.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )),
        ParamType::Integer => text
            .trim()
            .parse::<i64>()
            .map(ArgValue::Integer)
            .map_err(|_| ConfigurationError::invalid_type(spec.name, "integer", text)),
        ParamType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(ArgValue::Boolean(true)),
            "false" | "no" | "0" => Ok(ArgValue::Boolean(false)),
            _ => Err(ConfigurationError::invalid_type(spec.name, "boolean", text)),
        },
        ParamType::Json => serde_json::from_str(text).map(ArgValue::Json).map_err(|e| {
            ConfigurationError::InvalidJson {
                parameter: spec.name.to_string(),
                message: e.to_string(),
            }
        }),
    }
}

fn from_json(spec: &ParamSpec, value: Value) -> Result<ArgValue> {
    let mismatch = |got: &Value| {
        let kind = match got {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        ConfigurationError::invalid_type(spec.name, spec.param_type.type_name(), kind)
    };

    match (spec.param_type, value) {
        (ParamType::Json, v) => Ok(ArgValue::Json(v)),
        (ParamType::String | ParamType::Enum(_), Value::String(s)) => Ok(ArgValue::String(s)),
        (ParamType::StringList, Value::String(s)) => Ok(ArgValue::StringList(vec![s])),
        (ParamType::StringList, Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(mismatch(&other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(ArgValue::StringList),
        (ParamType::Integer, Value::Number(n)) => {
            n.as_i64().map(ArgValue::Integer).ok_or_else(|| {
                ConfigurationError::invalid_type(spec.name, "integer", n.to_string())
            })
        }
        (ParamType::Integer | ParamType::Boolean, Value::String(s)) => parse_text(spec, &s),
        (ParamType::Boolean, Value::Bool(b)) => Ok(ArgValue::Boolean(b)),
        (_, other) => Err(mismatch(&other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::OperationDescriptor;
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::new("FirewallName").aliases(&["Name"]).position(0),
        ParamSpec::new("FirewallArn").required(),
        ParamSpec::new("SubnetIds").param_type(ParamType::StringList),
        ParamSpec::new("MaxResults").param_type(ParamType::Integer),
        ParamSpec::new("DeleteProtection").param_type(ParamType::Boolean),
        ParamSpec::new("Scope").param_type(ParamType::Enum(&["MANAGED", "ACCOUNT"])),
        ParamSpec::new("Policy").param_type(ParamType::Json),
    ];

    static DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("DoThing", "do", "thing").parameters(PARAMS);

    #[test]
    fn test_missing_required_parameter() {
        let err = InvocationContext::builder(&DESCRIPTOR)
            .set("FirewallName", "fw")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::missing_parameter("do thing", "FirewallArn")
        );
    }

    #[test]
    fn test_alias_resolves_to_canonical_name() {
        let ctx = InvocationContext::builder(&DESCRIPTOR)
            .set("name", "fw")
            .unwrap()
            .set("FirewallArn", "arn:x")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(ctx.get("FirewallName"), Some(&ArgValue::from("fw")));
        assert!(!ctx.contains("SubnetIds"));
        assert_eq!(ctx.operation(), "DoThing");
    }

    #[test]
    fn test_unknown_parameter() {
        let err = InvocationContext::builder(&DESCRIPTOR)
            .set("Bogus", "x")
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownParameter { .. }));
    }

    #[test]
    fn test_type_mismatch() {
        let err = InvocationContext::builder(&DESCRIPTOR)
            .set("MaxResults", "ten")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::invalid_type("MaxResults", "integer", "string")
        );

        let err = InvocationContext::builder(&DESCRIPTOR)
            .set_text("MaxResults", "ten")
            .unwrap_err();
        assert_eq!(err.parameter(), Some("MaxResults"));
    }

    #[test]
    fn test_enum_normalizes_case() {
        let ctx = InvocationContext::builder(&DESCRIPTOR)
            .set("FirewallArn", "arn:x")
            .unwrap()
            .set("Scope", "managed")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(ctx.get("Scope"), Some(&ArgValue::from("MANAGED")));

        let err = InvocationContext::builder(&DESCRIPTOR)
            .set("Scope", "everything")
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::NotInEnumeration { .. }));
    }

    #[test]
    fn test_text_parsing() {
        let ctx = InvocationContext::builder(&DESCRIPTOR)
            .set_text("FirewallArn", "arn:x")
            .unwrap()
            .set_text("SubnetIds", "subnet-1, subnet-2")
            .unwrap()
            .set_text("MaxResults", "25")
            .unwrap()
            .set_text("DeleteProtection", "yes")
            .unwrap()
            .set_text("Policy", r#"{"Version":"2012-10-17"}"#)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            ctx.get("SubnetIds"),
            Some(&ArgValue::from(vec!["subnet-1", "subnet-2"]))
        );
        assert_eq!(ctx.get("MaxResults"), Some(&ArgValue::Integer(25)));
        assert_eq!(ctx.get("DeleteProtection"), Some(&ArgValue::Boolean(true)));
        assert_eq!(
            ctx.get("Policy"),
            Some(&ArgValue::Json(json!({"Version": "2012-10-17"})))
        );
    }

    #[test]
    fn test_invalid_json_document() {
        let err = InvocationContext::builder(&DESCRIPTOR)
            .set_text("Policy", "{not json")
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidJson { .. }));
    }

    #[test]
    fn test_from_json_keeps_declaration_order() {
        let input = json!({
            "MaxResults": 5,
            "SubnetIds": ["a", "b"],
            "FirewallArn": "arn:x",
        });
        let ctx = InvocationContext::from_json(&DESCRIPTOR, input.as_object().unwrap()).unwrap();
        let names: Vec<_> = ctx.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["FirewallArn", "SubnetIds", "MaxResults"]);
        assert_eq!(
            ctx.to_json(),
            json!({"FirewallArn": "arn:x", "SubnetIds": ["a", "b"], "MaxResults": 5})
        );
    }
}
