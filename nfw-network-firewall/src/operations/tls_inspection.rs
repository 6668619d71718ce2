//! TLS inspection configuration commands

use super::common::{
    DESCRIPTION, ENCRYPTION_KEY_ID, ENCRYPTION_TYPE, MAX_RESULTS, NEXT_TOKEN,
    REQUIRED_UPDATE_TOKEN, TAGS,
};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const CONFIGURATION_ARN: ParamSpec = ParamSpec::new("TLSInspectionConfigurationArn")
    .description("ARN of the TLS inspection configuration")
    .position(0);

const CONFIGURATION_NAME: ParamSpec = ParamSpec::new("TLSInspectionConfigurationName")
    .description("Descriptive name of the TLS inspection configuration");

const CONFIGURATION_DOCUMENT: ParamSpec = ParamSpec::new("TLSInspectionConfiguration")
    .description("Server certificate configurations as JSON")
    .param_type(ParamType::Json)
    .required();

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("TLSInspectionConfigurationName")
        .description("Descriptive name of the TLS inspection configuration")
        .required()
        .position(0),
    CONFIGURATION_DOCUMENT,
    DESCRIPTION,
    TAGS,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
];

pub const CREATE_TLS_INSPECTION_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "CreateTLSInspectionConfiguration",
    "create",
    "tls-inspection-configuration",
)
.description("Create a TLS inspection configuration")
.parameters(CREATE_PARAMS)
.response_fields(&["UpdateToken", "TLSInspectionConfigurationResponse"])
.confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[CONFIGURATION_ARN, CONFIGURATION_NAME];

pub const DELETE_TLS_INSPECTION_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "DeleteTLSInspectionConfiguration",
    "delete",
    "tls-inspection-configuration",
)
.description("Delete a TLS inspection configuration that no firewall policy uses")
.parameters(IDENTIFY_PARAMS)
.response_fields(&["TLSInspectionConfigurationResponse"])
.select("TLSInspectionConfigurationResponse")
.confirm(Severity::High);

pub const DESCRIBE_TLS_INSPECTION_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "DescribeTLSInspectionConfiguration",
    "describe",
    "tls-inspection-configuration",
)
.description("Describe a TLS inspection configuration")
.parameters(IDENTIFY_PARAMS)
.response_fields(&[
    "UpdateToken",
    "TLSInspectionConfiguration",
    "TLSInspectionConfigurationResponse",
]);

const LIST_PARAMS: &[ParamSpec] = &[NEXT_TOKEN, MAX_RESULTS];

pub const LIST_TLS_INSPECTION_CONFIGURATIONS: OperationDescriptor = OperationDescriptor::new(
    "ListTLSInspectionConfigurations",
    "list",
    "tls-inspection-configuration",
)
.description("List TLS inspection configuration metadata")
.parameters(LIST_PARAMS)
.response_fields(&["NextToken", "TLSInspectionConfigurations"])
.select("TLSInspectionConfigurations")
.paginated(Pagination::standard());

const UPDATE_PARAMS: &[ParamSpec] = &[
    CONFIGURATION_ARN,
    CONFIGURATION_NAME,
    CONFIGURATION_DOCUMENT,
    DESCRIPTION,
    ENCRYPTION_KEY_ID,
    ENCRYPTION_TYPE,
    REQUIRED_UPDATE_TOKEN,
];

pub const UPDATE_TLS_INSPECTION_CONFIGURATION: OperationDescriptor = OperationDescriptor::new(
    "UpdateTLSInspectionConfiguration",
    "update",
    "tls-inspection-configuration",
)
.description("Replace a TLS inspection configuration")
.parameters(UPDATE_PARAMS)
.response_fields(&["UpdateToken", "TLSInspectionConfigurationResponse"])
.confirm(Severity::Medium);

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_TLS_INSPECTION_CONFIGURATION,
    DELETE_TLS_INSPECTION_CONFIGURATION,
    DESCRIBE_TLS_INSPECTION_CONFIGURATION,
    LIST_TLS_INSPECTION_CONFIGURATIONS,
    UPDATE_TLS_INSPECTION_CONFIGURATION,
];
