//! Firewall policy commands

use super::common::{
    DESCRIPTION, DRY_RUN, ENCRYPTION_KEY_ID, ENCRYPTION_TYPE, MAX_RESULTS, NEXT_TOKEN,
    REQUIRED_UPDATE_TOKEN, TAGS,
};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const POLICY_ARN: ParamSpec = ParamSpec::new("FirewallPolicyArn")
    .description("ARN of the firewall policy")
    .position(0);

const POLICY_NAME: ParamSpec =
    ParamSpec::new("FirewallPolicyName").description("Descriptive name of the firewall policy");

const POLICY_DOCUMENT: ParamSpec = ParamSpec::new("FirewallPolicy")
    .description("Policy definition as JSON (stateless and stateful rule group references, default actions)")
    .param_type(ParamType::Json)
    .required();

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("FirewallPolicyName")
        .description("Descriptive name of the firewall policy")
        .required()
        .position(0),
    POLICY_DOCUMENT,
    DESCRIPTION,
    TAGS,
    DRY_RUN,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
];

pub const CREATE_FIREWALL_POLICY: OperationDescriptor =
    OperationDescriptor::new("CreateFirewallPolicy", "create", "firewall-policy")
        .description("Create a firewall policy")
        .parameters(CREATE_PARAMS)
        .response_fields(&["UpdateToken", "FirewallPolicyResponse"])
        .confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[POLICY_NAME, POLICY_ARN];

pub const DELETE_FIREWALL_POLICY: OperationDescriptor =
    OperationDescriptor::new("DeleteFirewallPolicy", "delete", "firewall-policy")
        .description("Delete a firewall policy that no firewall uses")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["FirewallPolicyResponse"])
        .select("FirewallPolicyResponse")
        .confirm(Severity::High);

pub const DESCRIBE_FIREWALL_POLICY: OperationDescriptor =
    OperationDescriptor::new("DescribeFirewallPolicy", "describe", "firewall-policy")
        .description("Describe a firewall policy and its definition")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["UpdateToken", "FirewallPolicyResponse", "FirewallPolicy"]);

const LIST_PARAMS: &[ParamSpec] = &[NEXT_TOKEN, MAX_RESULTS];

pub const LIST_FIREWALL_POLICIES: OperationDescriptor =
    OperationDescriptor::new("ListFirewallPolicies", "list", "firewall-policy")
        .description("List firewall policy metadata")
        .parameters(LIST_PARAMS)
        .response_fields(&["NextToken", "FirewallPolicies"])
        .select("FirewallPolicies")
        .paginated(Pagination::standard());

const UPDATE_PARAMS: &[ParamSpec] = &[
    REQUIRED_UPDATE_TOKEN,
    POLICY_ARN,
    POLICY_NAME,
    POLICY_DOCUMENT,
    DESCRIPTION,
    DRY_RUN,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
];

pub const UPDATE_FIREWALL_POLICY: OperationDescriptor =
    OperationDescriptor::new("UpdateFirewallPolicy", "update", "firewall-policy")
        .description("Replace the definition of a firewall policy")
        .parameters(UPDATE_PARAMS)
        .response_fields(&["UpdateToken", "FirewallPolicyResponse"])
        .confirm(Severity::Medium);

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_FIREWALL_POLICY,
    DELETE_FIREWALL_POLICY,
    DESCRIBE_FIREWALL_POLICY,
    LIST_FIREWALL_POLICIES,
    UPDATE_FIREWALL_POLICY,
];
