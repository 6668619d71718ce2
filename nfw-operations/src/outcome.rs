//! Outcome of dispatching one invocation

use crate::client::TransportFailure;
use crate::descriptor::OperationDescriptor;
use crate::LogEntry;
use serde_json::Value;
use thiserror::Error;

/// Why a dispatched call did not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The remote call failed
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    /// The caller cancelled the call before it completed
    #[error("'{op}' was cancelled")]
    Cancelled { op: String },
}

impl Failure {
    /// Diagnostic hint, when one is known
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Transport(failure) => failure.hint.as_deref(),
            Self::Cancelled { .. } => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Result of dispatching an invocation
///
/// Distinguishes between:
/// - Completed: the remote call succeeded and its response was projected
/// - Echoed: an input parameter was echoed without calling the service
/// - Skipped: confirmation was declined, nothing was sent
/// - Failed: the remote call failed or was cancelled
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The remote call succeeded
    Completed {
        value: Value,
        response: Value,
        log_entry: LogEntry,
    },
    /// Answered from the invocation context alone
    Echoed { value: Value },
    /// Confirmation was declined
    Skipped { op: String },
    /// The remote call failed
    Failed {
        failure: Failure,
        log_entry: Option<LogEntry>,
    },
}

impl Outcome {
    /// The projected value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Completed { value, .. } | Self::Echoed { value } => Some(value),
            Self::Skipped { .. } | Self::Failed { .. } => None,
        }
    }

    /// The raw response, if the service was called successfully
    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::Completed { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Extract the projected value (Ok), the failure (Err), or `None` when skipped
    pub fn into_result(self) -> Option<Result<Value, Failure>> {
        match self {
            Self::Completed { value, .. } | Self::Echoed { value } => Some(Ok(value)),
            Self::Skipped { .. } => None,
            Self::Failed { failure, .. } => Some(Err(failure)),
        }
    }

    /// Get the log entry, if a remote call was made
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Completed { log_entry, .. } => Some(log_entry),
            Self::Failed { log_entry, .. } => log_entry.as_ref(),
            _ => None,
        }
    }

    /// Continuation token returned by a paginated operation
    pub fn next_token(&self, descriptor: &OperationDescriptor) -> Option<&str> {
        let pagination = descriptor.pagination?;
        self.response()?
            .get(pagination.token_field)?
            .as_str()
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Pagination;
    use serde_json::json;

    const LIST: OperationDescriptor = OperationDescriptor::new("ListThings", "list", "thing")
        .response_fields(&["Things", "NextToken"])
        .select("Things")
        .paginated(Pagination::standard());

    fn completed(response: Value) -> Outcome {
        Outcome::Completed {
            value: response["Things"].clone(),
            log_entry: LogEntry::new("list thing", "ListThings", json!({}), response.clone(), 1),
            response,
        }
    }

    #[test]
    fn test_next_token() {
        let outcome = completed(json!({"Things": [], "NextToken": "abc"}));
        assert_eq!(outcome.next_token(&LIST), Some("abc"));

        let outcome = completed(json!({"Things": [], "NextToken": null}));
        assert_eq!(outcome.next_token(&LIST), None);

        let outcome = completed(json!({"Things": [], "NextToken": ""}));
        assert_eq!(outcome.next_token(&LIST), None);
    }

    #[test]
    fn test_skipped_has_no_value() {
        let outcome = Outcome::Skipped {
            op: "delete thing".into(),
        };
        assert!(outcome.is_skipped());
        assert!(outcome.value().is_none());
        assert!(outcome.into_result().is_none());
    }

    #[test]
    fn test_failed_into_result() {
        let outcome = Outcome::Failed {
            failure: Failure::Cancelled {
                op: "list thing".into(),
            },
            log_entry: None,
        };
        assert!(outcome.failure().unwrap().is_cancelled());
        assert!(matches!(outcome.into_result(), Some(Err(Failure::Cancelled { .. }))));
    }
}
