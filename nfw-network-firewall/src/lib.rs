//! # nfw Network Firewall
//!
//! The operation table of the Network Firewall control plane, the registry
//! that looks descriptors up by op string, and [`HttpClient`], the bundled
//! [`nfw_operations::Client`] speaking the service's JSON protocol.
//!
//! ```ignore
//! use nfw_network_firewall::{registry, ClientSettings, HttpClient};
//!
//! let descriptor = registry().get("list rule-group").unwrap();
//! let client = HttpClient::new(&ClientSettings::default())?;
//! ```

mod client;
mod error;
pub mod operations;
mod registry;

pub use client::{
    endpoint_for_region, ClientSettings, HttpClient, DEFAULT_REGION, DEFAULT_TIMEOUT, TARGET_PREFIX,
};
pub use error::{ClientError, Result};
pub use registry::{registry, Registry};
