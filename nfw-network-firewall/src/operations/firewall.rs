//! Firewall commands

use super::common::{
    DESCRIPTION, ENCRYPTION_KEY_ID, ENCRYPTION_TYPE, FIREWALL_ARN, FIREWALL_NAME, MAX_RESULTS,
    NEXT_TOKEN, TAGS, UPDATE_TOKEN,
};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const FIREWALL_RESPONSE: &[&str] = &["Firewall", "FirewallStatus"];

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("FirewallName")
        .description("Descriptive name of the firewall")
        .required()
        .position(0),
    ParamSpec::new("FirewallPolicyArn")
        .description("ARN of the firewall policy to use")
        .required(),
    ParamSpec::new("VpcId").description("VPC the firewall protects"),
    ParamSpec::new("SubnetMappings")
        .description("JSON array of {\"SubnetId\":...,\"IPAddressType\":...} objects")
        .param_type(ParamType::Json)
        .aliases(&["SubnetMapping"]),
    ParamSpec::new("DeleteProtection")
        .description("Protect the firewall against deletion")
        .param_type(ParamType::Boolean),
    ParamSpec::new("SubnetChangeProtection")
        .description("Protect the firewall's subnet associations against changes")
        .param_type(ParamType::Boolean),
    ParamSpec::new("FirewallPolicyChangeProtection")
        .description("Protect the firewall's policy association against changes")
        .param_type(ParamType::Boolean),
    DESCRIPTION,
    TAGS,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
    ParamSpec::new("EnabledAnalysisTypes")
        .description("Traffic analysis types to enable")
        .param_type(ParamType::StringList),
    ParamSpec::new("TransitGatewayId").description("Transit gateway to attach the firewall to"),
    ParamSpec::new("AvailabilityZoneMappings")
        .description("JSON array of {\"AvailabilityZone\":...} objects for transit gateway firewalls")
        .param_type(ParamType::Json),
    ParamSpec::new("AvailabilityZoneChangeProtection")
        .description("Protect the availability zone mappings against changes")
        .param_type(ParamType::Boolean),
];

pub const CREATE_FIREWALL: OperationDescriptor =
    OperationDescriptor::new("CreateFirewall", "create", "firewall")
        .description("Create a firewall that filters traffic with a firewall policy")
        .parameters(CREATE_PARAMS)
        .response_fields(FIREWALL_RESPONSE)
        .confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[FIREWALL_NAME, FIREWALL_ARN];

pub const DELETE_FIREWALL: OperationDescriptor =
    OperationDescriptor::new("DeleteFirewall", "delete", "firewall")
        .description("Delete a firewall; delete protection must be off")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(FIREWALL_RESPONSE)
        .confirm(Severity::High);

pub const DESCRIBE_FIREWALL: OperationDescriptor =
    OperationDescriptor::new("DescribeFirewall", "describe", "firewall")
        .description("Describe a firewall and its current status")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["UpdateToken", "Firewall", "FirewallStatus"]);

const LIST_PARAMS: &[ParamSpec] = &[
    NEXT_TOKEN,
    ParamSpec::new("VpcIds")
        .description("Only list firewalls in these VPCs")
        .param_type(ParamType::StringList)
        .aliases(&["VpcId"]),
    MAX_RESULTS,
];

pub const LIST_FIREWALLS: OperationDescriptor =
    OperationDescriptor::new("ListFirewalls", "list", "firewall")
        .description("List firewall metadata")
        .parameters(LIST_PARAMS)
        .response_fields(&["NextToken", "Firewalls"])
        .select("Firewalls")
        .paginated(Pagination::standard());

const DELETE_PROTECTION_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("DeleteProtection")
        .description("Protect the firewall against deletion")
        .param_type(ParamType::Boolean)
        .required(),
];

pub const UPDATE_FIREWALL_DELETE_PROTECTION: OperationDescriptor = OperationDescriptor::new(
    "UpdateFirewallDeleteProtection",
    "update",
    "firewall-delete-protection",
)
.description("Turn deletion protection on or off")
.parameters(DELETE_PROTECTION_PARAMS)
.response_fields(&["FirewallArn", "FirewallName", "DeleteProtection", "UpdateToken"])
.confirm(Severity::Medium);

const DESCRIPTION_PARAMS: &[ParamSpec] = &[UPDATE_TOKEN, FIREWALL_ARN, FIREWALL_NAME, DESCRIPTION];

pub const UPDATE_FIREWALL_DESCRIPTION: OperationDescriptor =
    OperationDescriptor::new("UpdateFirewallDescription", "update", "firewall-description")
        .description("Change the description of a firewall")
        .parameters(DESCRIPTION_PARAMS)
        .response_fields(&["FirewallArn", "FirewallName", "Description", "UpdateToken"])
        .confirm(Severity::Medium);

const POLICY_PROTECTION_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("FirewallPolicyChangeProtection")
        .description("Protect the firewall's policy association against changes")
        .param_type(ParamType::Boolean)
        .required(),
];

pub const UPDATE_FIREWALL_POLICY_CHANGE_PROTECTION: OperationDescriptor = OperationDescriptor::new(
    "UpdateFirewallPolicyChangeProtection",
    "update",
    "firewall-policy-change-protection",
)
.description("Turn firewall policy change protection on or off")
.parameters(POLICY_PROTECTION_PARAMS)
.response_fields(&[
    "UpdateToken",
    "FirewallArn",
    "FirewallName",
    "FirewallPolicyChangeProtection",
])
.confirm(Severity::Medium);

const SUBNET_PROTECTION_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("SubnetChangeProtection")
        .description("Protect the firewall's subnet associations against changes")
        .param_type(ParamType::Boolean)
        .required(),
];

pub const UPDATE_SUBNET_CHANGE_PROTECTION: OperationDescriptor = OperationDescriptor::new(
    "UpdateSubnetChangeProtection",
    "update",
    "subnet-change-protection",
)
.description("Turn subnet change protection on or off")
.parameters(SUBNET_PROTECTION_PARAMS)
.response_fields(&[
    "UpdateToken",
    "FirewallArn",
    "FirewallName",
    "SubnetChangeProtection",
])
.confirm(Severity::Medium);

const ASSOCIATE_POLICY_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("FirewallPolicyArn")
        .description("ARN of the firewall policy to associate")
        .required(),
];

pub const ASSOCIATE_FIREWALL_POLICY: OperationDescriptor =
    OperationDescriptor::new("AssociateFirewallPolicy", "associate", "firewall-policy")
        .description("Associate a firewall policy with a firewall")
        .parameters(ASSOCIATE_POLICY_PARAMS)
        .response_fields(&["FirewallArn", "FirewallName", "FirewallPolicyArn", "UpdateToken"])
        .confirm(Severity::Medium);

const SUBNET_RESPONSE: &[&str] = &["FirewallArn", "FirewallName", "SubnetMappings", "UpdateToken"];

const ASSOCIATE_SUBNETS_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("SubnetMappings")
        .description("JSON array of {\"SubnetId\":...,\"IPAddressType\":...} objects")
        .param_type(ParamType::Json)
        .required()
        .aliases(&["SubnetMapping"]),
];

pub const ASSOCIATE_SUBNETS: OperationDescriptor =
    OperationDescriptor::new("AssociateSubnets", "associate", "subnets")
        .description("Associate subnets with a firewall, creating a firewall endpoint in each")
        .parameters(ASSOCIATE_SUBNETS_PARAMS)
        .response_fields(SUBNET_RESPONSE)
        .confirm(Severity::Medium);

const DISASSOCIATE_SUBNETS_PARAMS: &[ParamSpec] = &[
    UPDATE_TOKEN,
    FIREWALL_ARN,
    FIREWALL_NAME,
    ParamSpec::new("SubnetIds")
        .description("Subnets to remove from the firewall")
        .param_type(ParamType::StringList)
        .required()
        .aliases(&["SubnetId"]),
];

pub const DISASSOCIATE_SUBNETS: OperationDescriptor =
    OperationDescriptor::new("DisassociateSubnets", "disassociate", "subnets")
        .description("Remove subnets from a firewall, deleting their firewall endpoints")
        .parameters(DISASSOCIATE_SUBNETS_PARAMS)
        .response_fields(SUBNET_RESPONSE)
        .confirm(Severity::High);

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_FIREWALL,
    DELETE_FIREWALL,
    DESCRIBE_FIREWALL,
    LIST_FIREWALLS,
    UPDATE_FIREWALL_DELETE_PROTECTION,
    UPDATE_FIREWALL_DESCRIPTION,
    UPDATE_FIREWALL_POLICY_CHANGE_PROTECTION,
    UPDATE_SUBNET_CHANGE_PROTECTION,
    ASSOCIATE_FIREWALL_POLICY,
    ASSOCIATE_SUBNETS,
    DISASSOCIATE_SUBNETS,
];
