//! Resource policy commands

use nfw_operations::{OperationDescriptor, ParamSpec, Severity};

const RESOURCE_ARN: ParamSpec = ParamSpec::new("ResourceArn")
    .description("ARN of the rule group or firewall policy to share")
    .required()
    .position(0);

const ARN_PARAMS: &[ParamSpec] = &[RESOURCE_ARN];

pub const DESCRIBE_RESOURCE_POLICY: OperationDescriptor =
    OperationDescriptor::new("DescribeResourcePolicy", "describe", "resource-policy")
        .description("Show the IAM policy that shares a resource")
        .parameters(ARN_PARAMS)
        .response_fields(&["Policy"])
        .select("Policy");

const PUT_PARAMS: &[ParamSpec] = &[
    RESOURCE_ARN,
    ParamSpec::new("Policy")
        .description("IAM policy statement as JSON text")
        .required(),
];

pub const PUT_RESOURCE_POLICY: OperationDescriptor =
    OperationDescriptor::new("PutResourcePolicy", "put", "resource-policy")
        .description("Attach an IAM policy that shares a resource with other accounts")
        .parameters(PUT_PARAMS)
        .confirm(Severity::Medium);

pub const DELETE_RESOURCE_POLICY: OperationDescriptor =
    OperationDescriptor::new("DeleteResourcePolicy", "delete", "resource-policy")
        .description("Remove the sharing policy from a resource")
        .parameters(ARN_PARAMS)
        .confirm(Severity::High);

pub const OPERATIONS: &[OperationDescriptor] = &[
    DESCRIBE_RESOURCE_POLICY,
    PUT_RESOURCE_POLICY,
    DELETE_RESOURCE_POLICY,
];
