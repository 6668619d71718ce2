//! Terminal confirmation prompts

use anyhow::Context;
use async_trait::async_trait;
use is_terminal::IsTerminal;
use nfw_operations::{confirmation_target, Confirm, InvocationContext, OperationDescriptor};
use tracing::warn;

/// Asks on the terminal before a destructive operation runs
///
/// Without an interactive stdin every prompt is declined.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirm;

#[async_trait]
impl Confirm for DialoguerConfirm {
    async fn confirm(&self, descriptor: &OperationDescriptor, context: &InvocationContext) -> bool {
        if !std::io::stdin().is_terminal() {
            warn!(
                op = %descriptor.op_string(),
                "stdin is not a terminal; declining. Pass --force to run without a prompt"
            );
            return false;
        }

        let prompt = prompt_text(descriptor, context);
        let answer = tokio::task::spawn_blocking(move || ask(&prompt))
            .await
            .context("confirmation prompt panicked")
            .and_then(|answer| answer);
        match answer {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!("{e:#}");
                false
            }
        }
    }
}

fn ask(prompt: &str) -> anyhow::Result<bool> {
    let answer = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_opt()
        .context("failed to read confirmation")?;
    Ok(answer.unwrap_or(false))
}

/// Prompt naming the operation and its target
pub fn prompt_text(descriptor: &OperationDescriptor, context: &InvocationContext) -> String {
    let impact = descriptor
        .confirm_impact
        .map(|impact| format!(" [{impact} impact]"))
        .unwrap_or_default();
    match confirmation_target(descriptor, context) {
        Some(target) => format!("{} '{target}'?{impact}", descriptor.name),
        None => format!("{}?{impact}", descriptor.name),
    }
}
