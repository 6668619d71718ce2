//! Dynamic CLI builder
//!
//! Generates the clap command tree from the operation registry, so every
//! registered operation is reachable as `nfw <noun> <verb>` without a
//! hand-written command.
//!
//! ```text
//! nfw
//! ├── firewall
//! │   ├── create
//! │   ├── delete
//! │   ├── describe
//! │   └── list
//! ├── rule-group
//! │   └── ...
//! └── transit-gateway-attachment
//!     ├── accept
//!     ├── delete
//!     └── reject
//! ```

use crate::parameter_cli::parameter_args;
use clap::{Arg, ArgAction, ArgMatches, Command};
use nfw_network_firewall::Registry;
use nfw_operations::OperationDescriptor;

pub const SELECT_ARG: &str = "select";
pub const FORCE_ARG: &str = "force";
pub const OUTPUT_ARG: &str = "output";
pub const ENDPOINT_URL_ARG: &str = "endpoint_url";
pub const REGION_ARG: &str = "region";
pub const VERBOSE_ARG: &str = "verbose";
pub const DEBUG_ARG: &str = "debug";
pub const QUIET_ARG: &str = "quiet";

/// Builds the `nfw` command tree from a registry
pub struct CliBuilder {
    registry: &'static Registry,
}

impl CliBuilder {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    /// Build the complete CLI application
    pub fn build_cli(&self) -> Command {
        let cli = Command::new("nfw")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Manage Network Firewall resources")
            .long_about(
                "
nfw drives the Network Firewall control plane: firewalls, firewall policies,
rule groups, TLS inspection, logging, proxy configurations, VPC endpoint
associations and transit gateway attachments.

Example usage:
  nfw firewall describe --firewall-name prod
  nfw rule-group list --scope MANAGED
  nfw firewall delete arn:aws:network-firewall:... --force
",
            )
            .subcommand_required(true)
            .arg_required_else_help(true)
            .args(global_args());

        self.registry
            .nouns()
            .into_iter()
            .fold(cli, |cli, noun| cli.subcommand(self.build_noun_command(noun)))
    }

    fn build_noun_command(&self, noun: &'static str) -> Command {
        let verbs = self
            .registry
            .for_noun(noun)
            .map(|d| d.verb)
            .collect::<Vec<_>>()
            .join(", ");
        let cmd = Command::new(noun)
            .about(format!("{noun} commands ({verbs})"))
            .subcommand_required(true)
            .arg_required_else_help(true);

        self.registry
            .for_noun(noun)
            .fold(cmd, |cmd, descriptor| {
                cmd.subcommand(build_operation_command(descriptor))
            })
    }

    /// Find the descriptor and leaf matches of the selected `<noun> <verb>`
    pub fn resolve<'a>(
        &self,
        matches: &'a ArgMatches,
    ) -> Option<(&'static OperationDescriptor, &'a ArgMatches)> {
        let (noun, noun_matches) = matches.subcommand()?;
        let (verb, op_matches) = noun_matches.subcommand()?;
        let descriptor = self.registry.find(verb, noun)?;
        Some((descriptor, op_matches))
    }
}

fn global_args() -> Vec<Arg> {
    vec![
        Arg::new(OUTPUT_ARG)
            .long("output")
            .short('o')
            .global(true)
            .value_parser(["json", "yaml"])
            .help("Output format [default: from configuration, else json]"),
        Arg::new(ENDPOINT_URL_ARG)
            .long("endpoint-url")
            .global(true)
            .value_name("URL")
            .help("Service endpoint, e.g. a local emulator or signing proxy"),
        Arg::new(REGION_ARG)
            .long("region")
            .global(true)
            .value_name("REGION")
            .help("Region used to derive the service endpoint"),
        Arg::new(VERBOSE_ARG)
            .long("verbose")
            .short('v')
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Log completed calls"),
        Arg::new(DEBUG_ARG)
            .long("debug")
            .short('d')
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Log requests and responses"),
        Arg::new(QUIET_ARG)
            .long("quiet")
            .short('q')
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Only log errors"),
    ]
}

/// Build the leaf command for one operation
pub fn build_operation_command(descriptor: &'static OperationDescriptor) -> Command {
    let mut cmd = Command::new(descriptor.verb)
        .about(descriptor.description)
        .long_about(format!(
            "{}\n\nService operation: {}",
            descriptor.description, descriptor.name
        ))
        .args(descriptor.parameters.iter().flat_map(parameter_args))
        .arg(
            Arg::new(SELECT_ARG)
                .long("select")
                .value_name("EXPR")
                .help(format!(
                    "Output projection: '*' for the whole response, a response field such as \
                     '{}', or '^Parameter' to echo an input [default: {}]",
                    descriptor.response_fields.first().copied().unwrap_or("Field"),
                    descriptor.default_select
                )),
        );

    if let Some(impact) = descriptor.confirm_impact {
        cmd = cmd.arg(
            Arg::new(FORCE_ARG)
                .long("force")
                .action(ArgAction::SetTrue)
                .help(format!("Do not ask for confirmation (impact: {impact})")),
        );
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfw_network_firewall::registry;

    fn cli() -> Command {
        CliBuilder::new(registry()).build_cli()
    }

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_every_operation_is_reachable() {
        let builder = CliBuilder::new(registry());
        for descriptor in registry().operations() {
            let matches = builder
                .build_cli()
                .try_get_matches_from(["nfw", descriptor.noun, descriptor.verb])
                .unwrap_or_else(|e| panic!("{descriptor}: {e}"));
            let (resolved, _) = builder.resolve(&matches).unwrap();
            assert_eq!(resolved.name, descriptor.name);
        }
    }

    #[test]
    fn test_force_only_on_confirmed_operations() {
        let delete = cli()
            .try_get_matches_from(["nfw", "firewall", "delete", "arn:x", "--force"])
            .unwrap();
        let (_, noun) = delete.subcommand().unwrap();
        let (_, leaf) = noun.subcommand().unwrap();
        assert!(leaf.get_flag(FORCE_ARG));

        assert!(cli()
            .try_get_matches_from(["nfw", "firewall", "describe", "--force"])
            .is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from([
                "nfw",
                "rule-group",
                "list",
                "--scope",
                "MANAGED",
                "--output",
                "yaml",
                "--endpoint-url",
                "http://localhost:4566",
            ])
            .unwrap();
        let (_, leaf) = CliBuilder::new(registry()).resolve(&matches).unwrap();
        assert_eq!(leaf.get_one::<String>(OUTPUT_ARG).map(String::as_str), Some("yaml"));
        assert_eq!(
            leaf.get_one::<String>(ENDPOINT_URL_ARG).map(String::as_str),
            Some("http://localhost:4566")
        );
    }
}
