//! Parameter flags and their conversion back into an invocation context

use crate::error::{CliError, CliResult};
use clap::{Arg, ArgAction, ArgMatches};
use nfw_operations::{InvocationContext, OperationDescriptor, ParamSpec, ParamType};

/// Kebab-case flag name for a parameter, keeping acronyms together
///
/// `TLSInspectionConfigurationArn` becomes `tls-inspection-configuration-arn`.
pub fn flag_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut flag = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !flag.ends_with('-') {
                flag.push('-');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !flag.ends_with('-') {
                flag.push('-');
            }
        }
        flag.push(c.to_ascii_lowercase());
    }
    flag
}

/// Argument id of the positional form of a parameter
pub fn positional_id(spec: &ParamSpec) -> String {
    format!("{}@{}", spec.name, spec.position.unwrap_or_default())
}

fn help_text(spec: &ParamSpec) -> String {
    let mut help = spec.description.to_string();
    if let ParamType::Enum(allowed) = spec.param_type {
        help.push_str(&format!(" [possible values: {}]", allowed.join(", ")));
    }
    if spec.required {
        help.push_str(" (required)");
    }
    help.trim().to_string()
}

/// Clap arguments for one parameter: its flag, and its positional form if it has one
///
/// Required parameters are not enforced by clap so that a missing value is
/// reported the same way from every entry point.
pub fn parameter_args(spec: &ParamSpec) -> Vec<Arg> {
    let mut flag = Arg::new(spec.name)
        .long(flag_name(spec.name))
        .help(help_text(spec));
    for alias in spec.aliases {
        flag = flag.visible_alias(flag_name(alias));
    }
    flag = match spec.param_type {
        ParamType::StringList => flag
            .action(ArgAction::Append)
            .value_delimiter(',')
            .value_name("VALUE,..."),
        ParamType::Boolean => flag
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_name("BOOL"),
        ParamType::Integer => flag.value_name("INT"),
        ParamType::Json => flag.value_name("JSON|@FILE"),
        ParamType::String | ParamType::Enum(_) => flag.value_name("VALUE"),
    };

    let mut args = vec![flag];
    if let Some(position) = spec.position {
        args.push(
            Arg::new(positional_id(spec))
                .index(position + 1)
                .value_name(spec.name)
                .help(format!("Same as --{}", flag_name(spec.name)))
                .conflicts_with(spec.name),
        );
    }
    args
}

/// Build the invocation context from parsed matches
pub fn context_from_matches(
    descriptor: &'static OperationDescriptor,
    matches: &ArgMatches,
) -> CliResult<InvocationContext> {
    let mut builder = InvocationContext::builder(descriptor);

    for spec in descriptor.parameters {
        let Some(values) = supplied_values(spec, matches) else {
            continue;
        };
        builder = match spec.param_type {
            ParamType::StringList => builder.set(spec.name, values)?,
            ParamType::Json => {
                let text = values.last().map(String::as_str).unwrap_or_default();
                builder.set_text(spec.name, &read_json_argument(spec, text)?)?
            }
            _ => {
                let text = values.last().map(String::as_str).unwrap_or_default();
                builder.set_text(spec.name, text)?
            }
        };
    }

    Ok(builder.build()?)
}

fn supplied_values(spec: &ParamSpec, matches: &ArgMatches) -> Option<Vec<String>> {
    let flag = matches
        .try_get_many::<String>(spec.name)
        .ok()
        .flatten()
        .map(|values| values.cloned().collect());
    flag.or_else(|| {
        spec.position?;
        matches
            .try_get_many::<String>(&positional_id(spec))
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
    })
}

/// Inline JSON text, or the contents of the file named after `@`
fn read_json_argument(spec: &ParamSpec, text: &str) -> CliResult<String> {
    match text.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!(
                "Failed to read '{path}' for --{}",
                flag_name(spec.name)
            ))
            .with_source(e)
        }),
        None => Ok(text.to_string()),
    }
}
