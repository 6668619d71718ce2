//! Parameter metadata for request construction and CLI generation
//!
//! Every operation declares its parameters once as a `'static` slice of
//! [`ParamSpec`]. The dispatcher uses them to build requests, the CLI uses
//! them to build flags.

/// Value type accepted by a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    StringList,
    Integer,
    Boolean,
    /// One of a closed set of values, matched case-insensitively
    Enum(&'static [&'static str]),
    /// Structured document passed through as JSON
    Json,
}

impl ParamType {
    /// Short human readable name used in error messages and help text
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringList => "string list",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Enum(_) => "enumerated value",
            Self::Json => "JSON document",
        }
    }
}

/// Metadata about one operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name, also the request field name unless `field` is set
    pub name: &'static str,
    /// Description shown in help
    pub description: &'static str,
    /// Parameter type
    pub param_type: ParamType,
    /// Whether the parameter must be supplied
    pub required: bool,
    /// Positional index; `None` binds by name only
    pub position: Option<usize>,
    /// Alternative names
    pub aliases: &'static [&'static str],
    /// Dotted request path when the parameter populates a nested structure
    pub field: Option<&'static str>,
}

impl ParamSpec {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            param_type: ParamType::String,
            required: false,
            position: None,
            aliases: &[],
            field: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn description(mut self, desc: &'static str) -> Self {
        self.description = desc;
        self
    }

    pub const fn position(mut self, index: usize) -> Self {
        self.position = Some(index);
        self
    }

    pub const fn aliases(mut self, a: &'static [&'static str]) -> Self {
        self.aliases = a;
        self
    }

    pub const fn param_type(mut self, t: ParamType) -> Self {
        self.param_type = t;
        self
    }

    pub const fn field(mut self, path: &'static str) -> Self {
        self.field = Some(path);
        self
    }

    /// Dotted request path this parameter writes to
    pub fn request_field(&self) -> &'static str {
        self.field.unwrap_or(self.name)
    }

    /// Whether `name` refers to this parameter, by name or alias, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}
