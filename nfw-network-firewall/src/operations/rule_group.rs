//! Rule group commands

use super::common::{
    DESCRIPTION, DRY_RUN, ENCRYPTION_KEY_ID, ENCRYPTION_TYPE, MAX_RESULTS, NEXT_TOKEN,
    REQUIRED_UPDATE_TOKEN, RULE_GROUP_TYPE, TAGS,
};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const RULE_GROUP_ARN: ParamSpec = ParamSpec::new("RuleGroupArn")
    .description("ARN of the rule group")
    .position(0);

const RULE_GROUP_NAME: ParamSpec =
    ParamSpec::new("RuleGroupName").description("Descriptive name of the rule group");

const RULE_GROUP_DOCUMENT: ParamSpec = ParamSpec::new("RuleGroup")
    .description("Rule group definition as JSON")
    .param_type(ParamType::Json);

const RULES: ParamSpec = ParamSpec::new("Rules")
    .description("Stateful rules in Suricata-compatible format, instead of RuleGroup");

const ANALYZE: ParamSpec = ParamSpec::new("AnalyzeRuleGroup")
    .description("Analyze the rule group for rules that may cause unintended behavior")
    .param_type(ParamType::Boolean);

const SOURCE_ARN: ParamSpec = ParamSpec::new("SourceMetadataSourceArn")
    .description("ARN of the rule group this one was copied from")
    .field("SourceMetadata.SourceArn");

const SOURCE_UPDATE_TOKEN: ParamSpec = ParamSpec::new("SourceMetadataSourceUpdateToken")
    .description("Update token of the source rule group when it was copied")
    .field("SourceMetadata.SourceUpdateToken");

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("RuleGroupName")
        .description("Descriptive name of the rule group")
        .required()
        .position(0),
    RULE_GROUP_DOCUMENT,
    RULES,
    RULE_GROUP_TYPE.required(),
    ParamSpec::new("Capacity")
        .description("Maximum operating resources the rule group can use; cannot change later")
        .param_type(ParamType::Integer)
        .required(),
    DESCRIPTION,
    TAGS,
    DRY_RUN,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
    SOURCE_ARN,
    SOURCE_UPDATE_TOKEN,
    ANALYZE,
    ParamSpec::new("SummaryConfigurationRuleOptions")
        .description("Rule options to include in the rule group summary")
        .param_type(ParamType::StringList)
        .field("SummaryConfiguration.RuleOptions"),
];

pub const CREATE_RULE_GROUP: OperationDescriptor =
    OperationDescriptor::new("CreateRuleGroup", "create", "rule-group")
        .description("Create a stateless or stateful rule group")
        .parameters(CREATE_PARAMS)
        .response_fields(&["UpdateToken", "RuleGroupResponse"])
        .confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[RULE_GROUP_NAME, RULE_GROUP_ARN, RULE_GROUP_TYPE];

pub const DELETE_RULE_GROUP: OperationDescriptor =
    OperationDescriptor::new("DeleteRuleGroup", "delete", "rule-group")
        .description("Delete a rule group that no firewall policy uses")
        .parameters(IDENTIFY_PARAMS)
        .response_fields(&["RuleGroupResponse"])
        .select("RuleGroupResponse")
        .confirm(Severity::High);

const DESCRIBE_PARAMS: &[ParamSpec] = &[RULE_GROUP_NAME, RULE_GROUP_ARN, RULE_GROUP_TYPE, ANALYZE];

pub const DESCRIBE_RULE_GROUP: OperationDescriptor =
    OperationDescriptor::new("DescribeRuleGroup", "describe", "rule-group")
        .description("Describe a rule group and its rules")
        .parameters(DESCRIBE_PARAMS)
        .response_fields(&["UpdateToken", "RuleGroup", "RuleGroupResponse"]);

pub const DESCRIBE_RULE_GROUP_METADATA: OperationDescriptor = OperationDescriptor::new(
    "DescribeRuleGroupMetadata",
    "describe",
    "rule-group-metadata",
)
.description("Describe a rule group's high-level information without its rules")
.parameters(IDENTIFY_PARAMS)
.response_fields(&[
    "RuleGroupArn",
    "RuleGroupName",
    "Description",
    "Type",
    "Capacity",
    "StatefulRuleOptions",
    "LastModifiedTime",
    "VendorName",
    "ProductId",
    "ListingName",
]);

const LIST_PARAMS: &[ParamSpec] = &[
    NEXT_TOKEN,
    MAX_RESULTS,
    ParamSpec::new("Scope")
        .description("MANAGED lists managed rule groups, ACCOUNT lists your own")
        .param_type(ParamType::Enum(&["MANAGED", "ACCOUNT"])),
    ParamSpec::new("ManagedType")
        .description("Kind of managed rule groups to list")
        .param_type(ParamType::Enum(&[
            "AWS_MANAGED_THREAT_SIGNATURES",
            "AWS_MANAGED_DOMAIN_LISTS",
            "ACTIVE_THREAT_DEFENSE",
            "PARTNER_MANAGED",
        ])),
    ParamSpec::new("SubscriptionStatus")
        .description("Filter partner managed rule groups by subscription")
        .param_type(ParamType::Enum(&["NOT_SUBSCRIBED", "SUBSCRIBED"])),
    RULE_GROUP_TYPE,
];

pub const LIST_RULE_GROUPS: OperationDescriptor =
    OperationDescriptor::new("ListRuleGroups", "list", "rule-group")
        .description("List rule group metadata")
        .parameters(LIST_PARAMS)
        .response_fields(&["NextToken", "RuleGroups"])
        .select("RuleGroups")
        .paginated(Pagination::standard());

const UPDATE_PARAMS: &[ParamSpec] = &[
    REQUIRED_UPDATE_TOKEN,
    RULE_GROUP_ARN,
    RULE_GROUP_NAME,
    RULE_GROUP_DOCUMENT,
    RULES,
    RULE_GROUP_TYPE,
    DESCRIPTION,
    DRY_RUN,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
    SOURCE_ARN,
    SOURCE_UPDATE_TOKEN,
    ANALYZE,
];

pub const UPDATE_RULE_GROUP: OperationDescriptor =
    OperationDescriptor::new("UpdateRuleGroup", "update", "rule-group")
        .description("Replace the rules of a rule group")
        .parameters(UPDATE_PARAMS)
        .response_fields(&["UpdateToken", "RuleGroupResponse"])
        .confirm(Severity::Medium);

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_RULE_GROUP,
    DELETE_RULE_GROUP,
    DESCRIBE_RULE_GROUP,
    DESCRIBE_RULE_GROUP_METADATA,
    LIST_RULE_GROUPS,
    UPDATE_RULE_GROUP,
];
