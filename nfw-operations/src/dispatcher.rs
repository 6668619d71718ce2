//! The generic command dispatcher

use crate::client::Client;
use crate::confirm::Confirm;
use crate::context::InvocationContext;
use crate::descriptor::{OperationDescriptor, Severity};
use crate::error::{ConfigurationError, Result};
use crate::outcome::{Failure, Outcome};
use crate::projection::Projection;
use crate::request::build_request;
use crate::LogEntry;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Everything the caller supplies for one call
#[derive(Debug, Clone)]
pub struct Invocation {
    pub context: InvocationContext,
    /// Select expression overriding the descriptor's default projection
    pub select: Option<String>,
    /// Skip the confirmation prompt
    pub force: bool,
}

impl Invocation {
    pub fn new(context: InvocationContext) -> Self {
        Self {
            context,
            select: None,
            force: false,
        }
    }

    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Turns invocations into at most one remote call each
///
/// The dispatcher holds only injected, immutable handles, so one instance can
/// serve concurrent invocations as long as the client allows it.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn Client>,
    confirm: Arc<dyn Confirm>,
    confirm_threshold: Option<Severity>,
}

impl Dispatcher {
    /// Create a dispatcher that prompts for high impact operations
    pub fn new(client: Arc<dyn Client>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            client,
            confirm,
            confirm_threshold: Some(Severity::High),
        }
    }

    /// Prompt for operations at or above `threshold`; `None` never prompts
    pub fn with_confirm_threshold(mut self, threshold: Option<Severity>) -> Self {
        self.confirm_threshold = threshold;
        self
    }

    pub fn confirm_threshold(&self) -> Option<Severity> {
        self.confirm_threshold
    }

    /// Dispatch one invocation
    ///
    /// Configuration errors are returned before any prompt or remote call.
    /// Remote failures and cancellation are reported inside the [`Outcome`].
    pub async fn execute(
        &self,
        descriptor: &OperationDescriptor,
        invocation: Invocation,
        cancel: &CancellationToken,
    ) -> Result<Outcome> {
        let Invocation {
            context,
            select,
            force,
        } = invocation;
        let op = descriptor.op_string();

        if context.operation() != descriptor.name {
            return Err(ConfigurationError::ContextMismatch {
                expected: descriptor.name.to_string(),
                actual: context.operation().to_string(),
            });
        }

        let projection = match select.as_deref() {
            Some(expr) => Projection::parse(expr, descriptor)?,
            None => descriptor.default_projection()?,
        };

        if !force && descriptor.requires_confirmation(self.confirm_threshold) {
            if !self.confirm.confirm(descriptor, &context).await {
                info!(op = %op, "confirmation declined, skipping");
                return Ok(Outcome::Skipped { op });
            }
        }

        if let Some(value) = projection.echo(&context) {
            debug!(op = %op, select = %projection, "echoing input parameter");
            return Ok(Outcome::Echoed { value });
        }

        let request = build_request(descriptor, &context);
        let request_json = Value::Object(request.clone());
        debug!(op = %op, operation = descriptor.name, request = %request_json, "dispatching");

        let started = Instant::now();
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = self.client.call(descriptor.name, request) => Some(result),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            None => {
                warn!(op = %op, "cancelled");
                Ok(Outcome::Failed {
                    failure: Failure::Cancelled { op },
                    log_entry: None,
                })
            }
            Some(Ok(response)) => {
                let value = projection.apply(&response, &context);
                let log_entry =
                    LogEntry::new(&op, descriptor.name, request_json, response.clone(), duration_ms);
                info!(op = %op, duration_ms, "completed");
                debug!(log_entry = %json!(log_entry), "invocation");
                Ok(Outcome::Completed {
                    value,
                    response,
                    log_entry,
                })
            }
            Some(Err(failure)) => {
                let failure = failure.diagnosed();
                warn!(
                    op = %op,
                    code = failure.code.as_deref().unwrap_or("-"),
                    status = failure.status,
                    "failed: {}",
                    failure.message
                );
                let log_entry = LogEntry::new(
                    &op,
                    descriptor.name,
                    request_json,
                    json!({
                        "error": failure.message,
                        "code": failure.code,
                        "status": failure.status,
                    }),
                    duration_ms,
                );
                Ok(Outcome::Failed {
                    failure: Failure::Transport(failure),
                    log_entry: Some(log_entry),
                })
            }
        }
    }
}
