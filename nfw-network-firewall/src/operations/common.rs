//! Parameters shared by several operations

use nfw_operations::{ParamSpec, ParamType};

pub const FIREWALL_ARN: ParamSpec = ParamSpec::new("FirewallArn")
    .description("ARN of the firewall")
    .position(0);

pub const FIREWALL_NAME: ParamSpec =
    ParamSpec::new("FirewallName").description("Descriptive name of the firewall");

pub const UPDATE_TOKEN: ParamSpec = ParamSpec::new("UpdateToken")
    .description("Token from the last describe call; the service rejects stale tokens");

pub const REQUIRED_UPDATE_TOKEN: ParamSpec = UPDATE_TOKEN.required();

pub const DESCRIPTION: ParamSpec = ParamSpec::new("Description").description("Description of the resource");

pub const TAGS: ParamSpec = ParamSpec::new("Tags")
    .description("Tags as a JSON array of {\"Key\":...,\"Value\":...} objects")
    .param_type(ParamType::Json);

pub const DRY_RUN: ParamSpec = ParamSpec::new("DryRun")
    .description("Validate the request without creating or changing anything")
    .param_type(ParamType::Boolean);

pub const ENCRYPTION_KEY_ID: ParamSpec = ParamSpec::new("EncryptionConfigurationKeyId")
    .description("KMS key ID, ARN or alias used to encrypt the resource")
    .field("EncryptionConfiguration.KeyId");

pub const ENCRYPTION_TYPE: ParamSpec = ParamSpec::new("EncryptionConfigurationType")
    .description("Type of KMS key used for encryption")
    .param_type(ParamType::Enum(&["CUSTOMER_KMS", "AWS_OWNED_KMS_KEY"]))
    .field("EncryptionConfiguration.Type");

pub const NEXT_TOKEN: ParamSpec =
    ParamSpec::new("NextToken").description("Continuation token from a previous page");

pub const MAX_RESULTS: ParamSpec = ParamSpec::new("MaxResults")
    .description("Maximum number of items to return in one page")
    .param_type(ParamType::Integer);

pub const RULE_GROUP_TYPE: ParamSpec = ParamSpec::new("Type")
    .description("Whether the rule group is stateless or stateful")
    .param_type(ParamType::Enum(&["STATELESS", "STATEFUL"]));
