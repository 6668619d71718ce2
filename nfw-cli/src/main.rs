use nfw_cli::dynamic_cli::{CliBuilder, DEBUG_ARG, QUIET_ARG, VERBOSE_ARG};
use nfw_cli::dynamic_execution::run;
use nfw_cli::error::handle_cli_result;
use nfw_cli::exit_codes::{EXIT_CONFIG, EXIT_SUCCESS};
use nfw_cli::logging::configure_logging;
use nfw_network_firewall::registry;
use std::process;

#[tokio::main]
async fn main() {
    let builder = CliBuilder::new(registry());

    let matches = match builder.build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help and version are reported as "errors" on stdout
            let _ = e.print();
            let code = if e.use_stderr() { EXIT_CONFIG } else { EXIT_SUCCESS };
            process::exit(code);
        }
    };

    configure_logging(
        matches.get_flag(VERBOSE_ARG),
        matches.get_flag(DEBUG_ARG),
        matches.get_flag(QUIET_ARG),
    );

    process::exit(handle_cli_result(run(&builder, &matches).await));
}
