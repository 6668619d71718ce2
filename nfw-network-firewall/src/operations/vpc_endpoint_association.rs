//! VPC endpoint association commands

use super::common::{DESCRIPTION, MAX_RESULTS, NEXT_TOKEN, TAGS};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const RESPONSE: &[&str] = &["VpcEndpointAssociation", "VpcEndpointAssociationStatus"];

const ASSOCIATION_ARN: ParamSpec = ParamSpec::new("VpcEndpointAssociationArn")
    .description("ARN of the VPC endpoint association")
    .required()
    .position(0);

const CREATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("FirewallArn")
        .description("Firewall that receives the endpoint")
        .required()
        .position(0),
    ParamSpec::new("VpcId")
        .description("VPC to create the endpoint in")
        .required(),
    ParamSpec::new("SubnetMapping")
        .description("JSON object {\"SubnetId\":...,\"IPAddressType\":...}")
        .param_type(ParamType::Json)
        .required(),
    DESCRIPTION,
    TAGS,
];

pub const CREATE_VPC_ENDPOINT_ASSOCIATION: OperationDescriptor = OperationDescriptor::new(
    "CreateVpcEndpointAssociation",
    "create",
    "vpc-endpoint-association",
)
.description("Create an additional firewall endpoint in a VPC")
.parameters(CREATE_PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::Medium);

const IDENTIFY_PARAMS: &[ParamSpec] = &[ASSOCIATION_ARN];

pub const DELETE_VPC_ENDPOINT_ASSOCIATION: OperationDescriptor = OperationDescriptor::new(
    "DeleteVpcEndpointAssociation",
    "delete",
    "vpc-endpoint-association",
)
.description("Delete a VPC endpoint association")
.parameters(IDENTIFY_PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::High);

pub const DESCRIBE_VPC_ENDPOINT_ASSOCIATION: OperationDescriptor = OperationDescriptor::new(
    "DescribeVpcEndpointAssociation",
    "describe",
    "vpc-endpoint-association",
)
.description("Describe a VPC endpoint association")
.parameters(IDENTIFY_PARAMS)
.response_fields(RESPONSE);

const LIST_PARAMS: &[ParamSpec] = &[
    NEXT_TOKEN,
    MAX_RESULTS,
    ParamSpec::new("FirewallArn").description("Only list associations of this firewall"),
];

pub const LIST_VPC_ENDPOINT_ASSOCIATIONS: OperationDescriptor = OperationDescriptor::new(
    "ListVpcEndpointAssociations",
    "list",
    "vpc-endpoint-association",
)
.description("List VPC endpoint association metadata")
.parameters(LIST_PARAMS)
.response_fields(&["NextToken", "VpcEndpointAssociations"])
.select("VpcEndpointAssociations")
.paginated(Pagination::standard());

pub const OPERATIONS: &[OperationDescriptor] = &[
    CREATE_VPC_ENDPOINT_ASSOCIATION,
    DELETE_VPC_ENDPOINT_ASSOCIATION,
    DESCRIBE_VPC_ENDPOINT_ASSOCIATION,
    LIST_VPC_ENDPOINT_ASSOCIATIONS,
];
