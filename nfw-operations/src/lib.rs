//! # nfw operations
//!
//! Declarative operation descriptors and the generic dispatcher that turns a
//! caller's invocation into at most one remote call.
//!
//! An operation is plain `const` data: its remote name, its `verb noun` op
//! string, its parameters and response fields, its default projection, its
//! confirmation impact and its pagination convention. The dispatcher is the
//! only code that acts on a descriptor.
//!
//! ## Example
//!
//! ```ignore
//! use nfw_operations::*;
//!
//! const PARAMS: &[ParamSpec] = &[
//!     ParamSpec::new("FirewallName"),
//!     ParamSpec::new("FirewallArn").position(0),
//! ];
//!
//! static DELETE_FIREWALL: OperationDescriptor =
//!     OperationDescriptor::new("DeleteFirewall", "delete", "firewall")
//!         .description("Delete a firewall")
//!         .parameters(PARAMS)
//!         .response_fields(&["Firewall", "FirewallStatus"])
//!         .confirm(Severity::High);
//!
//! let context = InvocationContext::builder(&DELETE_FIREWALL)
//!     .set("FirewallArn", "arn:aws:network-firewall:...")?
//!     .build()?;
//! let outcome = dispatcher
//!     .execute(&DELETE_FIREWALL, Invocation::new(context), &cancel)
//!     .await?;
//! ```

mod client;
mod confirm;
mod context;
mod descriptor;
mod dispatcher;
mod error;
mod log;
mod outcome;
mod parameter;
mod projection;
mod request;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use client::{Client, Request, TransportFailure};
pub use confirm::{confirmation_target, Confirm, FixedAnswer};
pub use context::{ArgValue, ContextBuilder, InvocationContext};
pub use descriptor::{OperationDescriptor, Pagination, Severity};
pub use dispatcher::{Dispatcher, Invocation};
pub use error::{ConfigurationError, Result};
pub use log::LogEntry;
pub use outcome::{Failure, Outcome};
pub use parameter::{ParamSpec, ParamType};
pub use projection::Projection;
pub use request::build_request;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
pub use tokio_util::sync::CancellationToken;
