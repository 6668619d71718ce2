//! Resource tag commands

use super::common::{MAX_RESULTS, NEXT_TOKEN};
use nfw_operations::{OperationDescriptor, Pagination, ParamSpec, ParamType, Severity};

const RESOURCE_ARN: ParamSpec = ParamSpec::new("ResourceArn")
    .description("ARN of the tagged resource")
    .required()
    .position(0)
    .aliases(&["Arn"]);

const LIST_PARAMS: &[ParamSpec] = &[NEXT_TOKEN, MAX_RESULTS, RESOURCE_ARN];

pub const LIST_TAGS_FOR_RESOURCE: OperationDescriptor =
    OperationDescriptor::new("ListTagsForResource", "list", "resource-tag")
        .description("List the tags of a resource")
        .parameters(LIST_PARAMS)
        .response_fields(&["NextToken", "Tags"])
        .select("Tags")
        .paginated(Pagination::standard());

const TAG_PARAMS: &[ParamSpec] = &[
    RESOURCE_ARN,
    ParamSpec::new("Tags")
        .description("Tags as a JSON array of {\"Key\":...,\"Value\":...} objects")
        .param_type(ParamType::Json)
        .required()
        .aliases(&["Tag"]),
];

pub const TAG_RESOURCE: OperationDescriptor =
    OperationDescriptor::new("TagResource", "add", "resource-tag")
        .description("Add or overwrite tags on a resource")
        .parameters(TAG_PARAMS)
        .confirm(Severity::Medium);

const UNTAG_PARAMS: &[ParamSpec] = &[
    RESOURCE_ARN,
    ParamSpec::new("TagKeys")
        .description("Keys of the tags to remove")
        .param_type(ParamType::StringList)
        .required()
        .aliases(&["TagKey"]),
];

pub const UNTAG_RESOURCE: OperationDescriptor =
    OperationDescriptor::new("UntagResource", "remove", "resource-tag")
        .description("Remove tags from a resource")
        .parameters(UNTAG_PARAMS)
        .confirm(Severity::High);

pub const OPERATIONS: &[OperationDescriptor] =
    &[LIST_TAGS_FOR_RESOURCE, TAG_RESOURCE, UNTAG_RESOURCE];
