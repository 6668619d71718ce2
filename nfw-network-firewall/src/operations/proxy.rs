//! Proxy configuration commands

use super::common::{DESCRIPTION, MAX_RESULTS, NEXT_TOKEN, TAGS};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const PROXY_ARN: ParamSpec = ParamSpec::new("ProxyConfigurationArn")
    .description("ARN of the proxy configuration")
    .position(0);

const PROXY_NAME: ParamSpec = ParamSpec::new("ProxyConfigurationName")
    .description("Descriptive name of the proxy configuration");

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("ProxyConfigurationName")
        .description("Descriptive name of the proxy configuration")
        .required()
        .position(0),
    DESCRIPTION,
    ParamSpec::new("RuleGroupNames")
        .description("Proxy rule groups to attach, by name")
        .param_type(ParamType::StringList),
    ParamSpec::new("RuleGroupArns")
        .description("Proxy rule groups to attach, by ARN")
        .param_type(ParamType::StringList),
    ParamSpec::new("DefaultRulePhaseActions")
        .description("JSON object of default actions per rule phase")
        .param_type(ParamType::Json)
        .required(),
    TAGS,
];

pub const CREATE_PROXY_CONFIGURATION: OperationDescriptor =
    OperationDescriptor::new("CreateProxyConfiguration", "create", "proxy-configuration")
        .description("Create a proxy configuration")
        .parameters(CREATE_PARAMS)
        .response_fields(&["ProxyConfiguration", "UpdateToken"])
        .confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[PROXY_NAME, PROXY_ARN];

pub const DELETE_PROXY_CONFIGURATION: OperationDescriptor =
    OperationDescriptor::new("DeleteProxyConfiguration", "delete", "proxy-configuration")
        .description("Delete a proxy configuration")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["ProxyConfigurationName", "ProxyConfigurationArn"])
        .confirm(Severity::High);

pub const DESCRIBE_PROXY_CONFIGURATION: OperationDescriptor =
    OperationDescriptor::new("DescribeProxyConfiguration", "describe", "proxy-configuration")
        .description("Describe a proxy configuration")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["ProxyConfiguration", "UpdateToken"]);

const LIST_PARAMS: &[ParamSpec] = &[NEXT_TOKEN, MAX_RESULTS];

pub const LIST_PROXY_CONFIGURATIONS: OperationDescriptor =
    OperationDescriptor::new("ListProxyConfigurations", "list", "proxy-configuration")
        .description("List proxy configuration metadata")
        .parameters(LIST_PARAMS)
        .response_fields(&["ProxyConfigurations", "NextToken"])
        .select("ProxyConfigurations")
        .paginated(Pagination::standard());

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_PROXY_CONFIGURATION,
    DELETE_PROXY_CONFIGURATION,
    DESCRIBE_PROXY_CONFIGURATION,
    LIST_PROXY_CONFIGURATIONS,
];
