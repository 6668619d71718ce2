//! # nfw CLI
//!
//! Command-line front end for Network Firewall operations. The command tree
//! is generated from the operation registry; each leaf command builds an
//! invocation and hands it to the shared dispatcher.

pub mod confirm;
pub mod dynamic_cli;
pub mod dynamic_execution;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod parameter_cli;
