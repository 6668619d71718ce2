//! Logging configuration commands

use super::common::{FIREWALL_ARN, FIREWALL_NAME};
use nfw_operations::{OperationDescriptor, ParamSpec, ParamType, Severity};

const RESPONSE: &[&str] = &[
    "FirewallArn",
    "FirewallName",
    "LoggingConfiguration",
    "EnableMonitoringDashboard",
];

const DESCRIBE_PARAMS: &[ParamSpec] = &[FIREWALL_ARN, FIREWALL_NAME];

pub const DESCRIBE_LOGGING_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "DescribeLoggingConfiguration",
    "describe",
    "logging-configuration",
)
.description("Describe where a firewall sends its logs")
.parameters(DESCRIBE_PARAMS)
.response_fields(RESPONSE);

const UPDATE_PARAMS: &[ParamSpec] = &[
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("LogDestinationConfigs")
        .description("JSON array of log destinations; change one destination per call")
        .param_type(ParamType::Json)
        .field("LoggingConfiguration.LogDestinationConfigs"),
    ParamSpec::new("EnableMonitoringDashboard")
        .description("Enable the detailed monitoring dashboard")
        .param_type(ParamType::Boolean),
];

pub const UPDATE_LOGGING_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "UpdateLoggingConfiguration",
    "update",
    "logging-configuration",
)
.description("Change a firewall's log destinations")
.parameters(UPDATE_PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::Medium);

pub const OPERATIONS: &[OperationDescriptor] =
    &[DESCRIBE_LOGGING_CONFIGURATION, UPDATE_LOGGING_CONFIGURATION];
