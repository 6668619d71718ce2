//! Transit gateway attachment commands

use nfw_operations::{OperationDescriptor, ParamSpec, Severity};

const RESPONSE: &[&str] = &["TransitGatewayAttachmentId", "TransitGatewayAttachmentStatus"];

const PARAMS: &[ParamSpec] = &[ParamSpec::new("TransitGatewayAttachmentId")
    .description("ID of the transit gateway attachment")
    .required()
    .position(0)];

pub const ACCEPT_TRANSIT_GATEWAY_ATTACHMENT: OperationDescriptor = OperationDescriptor::new(
    "AcceptNetworkFirewallTransitGatewayAttachment",
    "accept",
    "transit-gateway-attachment",
)
.description("Accept a firewall's transit gateway attachment request")
.parameters(PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::Medium);

pub const REJECT_TRANSIT_GATEWAY_ATTACHMENT: OperationDescriptor = OperationDescriptor::new(
    "RejectNetworkFirewallTransitGatewayAttachment",
    "reject",
    "transit-gateway-attachment",
)
.description("Reject a firewall's transit gateway attachment request")
.parameters(PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::High);

pub const DELETE_TRANSIT_GATEWAY_ATTACHMENT: OperationDescriptor = OperationDescriptor::new(
    "DeleteNetworkFirewallTransitGatewayAttachment",
    "delete",
    "transit-gateway-attachment",
)
.description("Delete a firewall's transit gateway attachment")
.parameters(PARAMS)
.response_fields(RESPONSE)
.confirm(Severity::High);

pub const OPERATIONS: &[OperationDescriptor] = &[
    ACCEPT_TRANSIT_GATEWAY_ATTACHMENT,
    REJECT_TRANSIT_GATEWAY_ATTACHMENT,
    DELETE_TRANSIT_GATEWAY_ATTACHMENT,
];
