//! Execution of a resolved `<noun> <verb>` command

use crate::confirm::DialoguerConfirm;
use crate::dynamic_cli::{
    CliBuilder, ENDPOINT_URL_ARG, FORCE_ARG, OUTPUT_ARG, REGION_ARG, SELECT_ARG,
};
use crate::error::{CliError, CliResult};
use crate::exit_codes::{EXIT_CANCELLED, EXIT_SKIPPED, EXIT_SUCCESS};
use crate::output::render;
use crate::parameter_cli::{context_from_matches, flag_name};
use clap::ArgMatches;
use nfw_config::{NfwConfig, OutputFormat};
use nfw_network_firewall::{ClientSettings, HttpClient};
use nfw_operations::{
    CancellationToken, Dispatcher, Failure, Invocation, OperationDescriptor, Outcome,
};
use std::sync::Arc;
use tracing::debug;

/// What a command prints, and the status it exits with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Option<String>,
    /// Messages for stderr
    pub notes: Vec<String>,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn print(&self) {
        if let Some(stdout) = &self.stdout {
            println!("{stdout}");
        }
        for note in &self.notes {
            eprintln!("{note}");
        }
    }
}

/// Runs parsed commands through a [`Dispatcher`]
pub struct CommandExecutor {
    dispatcher: Dispatcher,
    format: OutputFormat,
}

impl CommandExecutor {
    pub fn new(dispatcher: Dispatcher, format: OutputFormat) -> Self {
        Self { dispatcher, format }
    }

    /// Dispatch `descriptor` with the arguments in its leaf matches
    pub async fn execute(
        &self,
        descriptor: &'static OperationDescriptor,
        matches: &ArgMatches,
        cancel: &CancellationToken,
    ) -> CliResult<CommandOutput> {
        let context = context_from_matches(descriptor, matches)?;
        let mut invocation = Invocation::new(context);
        if let Some(select) = matches.try_get_one::<String>(SELECT_ARG).ok().flatten() {
            invocation = invocation.with_select(select.clone());
        }
        let force = matches
            .try_get_one::<bool>(FORCE_ARG)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);
        invocation = invocation.with_force(force);

        let outcome = self.dispatcher.execute(descriptor, invocation, cancel).await?;
        self.output(descriptor, outcome)
    }

    fn output(
        &self,
        descriptor: &'static OperationDescriptor,
        outcome: Outcome,
    ) -> CliResult<CommandOutput> {
        let mut notes = Vec::new();
        if let Some(note) = continuation_note(descriptor, &outcome) {
            notes.push(note);
        }

        match outcome {
            Outcome::Completed { value, .. } | Outcome::Echoed { value } => Ok(CommandOutput {
                stdout: Some(render(&value, self.format)?),
                notes,
                exit_code: EXIT_SUCCESS,
            }),
            Outcome::Skipped { op } => Ok(CommandOutput {
                stdout: None,
                notes: vec![format!("Skipped '{op}': not confirmed")],
                exit_code: EXIT_SKIPPED,
            }),
            Outcome::Failed {
                failure: Failure::Transport(failure),
                ..
            } => Err(failure.into()),
            Outcome::Failed { failure, .. } => Err(CliError::new(failure.to_string(), EXIT_CANCELLED)),
        }
    }
}

/// Tells the user how to fetch the next page when the projection hid the token
fn continuation_note(descriptor: &OperationDescriptor, outcome: &Outcome) -> Option<String> {
    let token = outcome.next_token(descriptor)?;
    let pagination = descriptor.pagination?;
    let shown = outcome.value().is_some_and(|value| {
        value.as_str() == Some(token) || value.get(pagination.token_field).is_some()
    });
    if shown {
        return None;
    }
    Some(format!(
        "More results available; pass --{} {token}",
        flag_name(pagination.token_param)
    ))
}

/// Client settings from configuration, with command-line flags taking precedence
pub fn client_settings(config: &NfwConfig, matches: &ArgMatches) -> ClientSettings {
    let flag = |id: &str| matches.try_get_one::<String>(id).ok().flatten().cloned();
    ClientSettings {
        endpoint_url: flag(ENDPOINT_URL_ARG).or_else(|| config.endpoint_url.clone()),
        region: flag(REGION_ARG).unwrap_or_else(|| config.region.clone()),
        target_prefix: config.target_prefix.clone(),
        timeout: config.timeout(),
    }
}

/// Output format from `--output`, falling back to configuration
pub fn output_format(config: &NfwConfig, matches: &ArgMatches) -> OutputFormat {
    match matches
        .try_get_one::<String>(OUTPUT_ARG)
        .ok()
        .flatten()
        .map(String::as_str)
    {
        Some("yaml") => OutputFormat::Yaml,
        Some("json") => OutputFormat::Json,
        _ => config.output,
    }
}

/// Run the operation selected in `matches` against the configured service
pub async fn run(builder: &CliBuilder, matches: &ArgMatches) -> CliResult<i32> {
    let Some((descriptor, op_matches)) = builder.resolve(matches) else {
        return Err(CliError::config("No operation selected; see 'nfw --help'"));
    };

    let config = nfw_config::load_config()?;
    let settings = client_settings(&config, op_matches);
    let client = HttpClient::new(&settings)?;
    debug!(endpoint = %client.endpoint(), "using endpoint");

    let dispatcher = Dispatcher::new(Arc::new(client), Arc::new(DialoguerConfirm))
        .with_confirm_threshold(config.confirm_threshold.severity());
    let executor = CommandExecutor::new(dispatcher, output_format(&config, op_matches));

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };
    let result = executor.execute(descriptor, op_matches, &cancel).await;
    interrupt.abort();

    let output = result?;
    output.print();
    Ok(output.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic_cli::build_operation_command;
    use crate::exit_codes::{EXIT_CONFIG, EXIT_ERROR};
    use nfw_network_firewall::registry;
    use nfw_operations::mock::MockClient;
    use nfw_operations::{FixedAnswer, Severity, TransportFailure};
    use serde_json::json;

    fn op(name: &str) -> &'static OperationDescriptor {
        registry().by_operation_name(name).unwrap()
    }

    fn matches(descriptor: &'static OperationDescriptor, args: &[&str]) -> ArgMatches {
        build_operation_command(descriptor)
            .try_get_matches_from(std::iter::once(descriptor.verb).chain(args.iter().copied()))
            .unwrap()
    }

    fn executor(client: Arc<MockClient>, confirm: bool) -> CommandExecutor {
        let dispatcher = Dispatcher::new(client, Arc::new(FixedAnswer(confirm)))
            .with_confirm_threshold(Some(Severity::High));
        CommandExecutor::new(dispatcher, OutputFormat::Json)
    }

    #[tokio::test]
    async fn test_list_reports_hidden_next_token() {
        let client = Arc::new(MockClient::responding(json!({
            "Firewalls": [{"FirewallName": "prod"}],
            "NextToken": "page-2"
        })));
        let list = op("ListFirewalls");

        let output = executor(client.clone(), false)
            .execute(list, &matches(list, &[]), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(output.exit_code, EXIT_SUCCESS);
        let stdout: serde_json::Value = serde_json::from_str(output.stdout.as_deref().unwrap()).unwrap();
        assert_eq!(stdout, json!([{"FirewallName": "prod"}]));
        assert_eq!(output.notes, vec!["More results available; pass --next-token page-2"]);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_whole_response_keeps_token_in_stdout() {
        let client = Arc::new(MockClient::responding(json!({"Firewalls": [], "NextToken": "t"})));
        let list = op("ListFirewalls");

        let output = executor(client, false)
            .execute(list, &matches(list, &["--select", "*"]), &CancellationToken::new())
            .await
            .unwrap();

        assert!(output.notes.is_empty());
        assert!(output.stdout.unwrap().contains("\"NextToken\": \"t\""));
    }

    #[tokio::test]
    async fn test_selected_token_is_not_repeated_on_stderr() {
        let client = Arc::new(MockClient::responding(json!({"Firewalls": [], "NextToken": "tok"})));
        let list = op("ListFirewalls");

        let output = executor(client, false)
            .execute(list, &matches(list, &["--select", "NextToken"]), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(output.stdout.as_deref(), Some("tok"));
        assert!(output.notes.is_empty(), "{:?}", output.notes);
    }

    #[tokio::test]
    async fn test_declined_delete_exits_skipped() {
        let client = Arc::new(MockClient::new());
        let delete = op("DeleteFirewall");

        let output = executor(client.clone(), false)
            .execute(delete, &matches(delete, &["arn:x"]), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(output.exit_code, EXIT_SKIPPED);
        assert_eq!(output.stdout, None);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_force_bypasses_prompt() {
        let client = Arc::new(MockClient::responding(json!({"Firewall": {"FirewallName": "fw"}})));
        let delete = op("DeleteFirewall");

        let output = executor(client.clone(), false)
            .execute(delete, &matches(delete, &["arn:x", "--force"]), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(output.exit_code, EXIT_SUCCESS);
        let (operation, request) = &client.calls()[0];
        assert_eq!(operation, "DeleteFirewall");
        assert_eq!(request.get("FirewallArn"), Some(&json!("arn:x")));
    }

    #[tokio::test]
    async fn test_echo_prints_raw_parameter() {
        let client = Arc::new(MockClient::new());
        let describe = op("DescribeFirewall");

        let output = executor(client.clone(), false)
            .execute(
                describe,
                &matches(describe, &["--firewall-arn", "arn:x", "--select", "^FirewallArn"]),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(output.stdout.as_deref(), Some("arn:x"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failures_map_to_exit_codes() {
        let describe = op("DescribeFirewall");
        let args = matches(describe, &["--firewall-name", "fw"]);

        let failing = Arc::new(MockClient::failing(
            TransportFailure::new("Firewall not found")
                .with_code("ResourceNotFoundException")
                .with_status(400),
        ));
        let err = executor(failing, false)
            .execute(describe, &args, &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert_eq!(err.message, "ResourceNotFoundException: Firewall not found");

        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = executor(Arc::new(MockClient::hanging()), false)
            .execute(describe, &args, &cancel)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code, EXIT_CANCELLED);

        let err = executor(Arc::new(MockClient::new()), false)
            .execute(describe, &matches(describe, &["--select", "Nope"]), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code, EXIT_CONFIG);
    }

    #[test]
    fn test_flags_override_configuration() {
        let config = NfwConfig {
            endpoint_url: Some("http://from-config:4566".into()),
            region: "eu-west-1".into(),
            output: OutputFormat::Yaml,
            ..Default::default()
        };
        let cli = CliBuilder::new(registry()).build_cli();

        let plain = cli
            .clone()
            .try_get_matches_from(["nfw", "firewall", "list"])
            .unwrap();
        let (_, leaf) = CliBuilder::new(registry()).resolve(&plain).unwrap();
        let settings = client_settings(&config, leaf);
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://from-config:4566"));
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(output_format(&config, leaf), OutputFormat::Yaml);

        let flagged = cli
            .try_get_matches_from([
                "nfw",
                "firewall",
                "list",
                "--endpoint-url",
                "http://localhost:9000",
                "--region",
                "us-west-2",
                "-o",
                "json",
            ])
            .unwrap();
        let (_, leaf) = CliBuilder::new(registry()).resolve(&flagged).unwrap();
        let settings = client_settings(&config, leaf);
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(settings.region, "us-west-2");
        assert_eq!(output_format(&config, leaf), OutputFormat::Json);
    }
}
