//! Descriptor tables, one module per resource

mod common;
pub mod firewall;
pub mod firewall_policy;
pub mod logging;
pub mod proxy;
pub mod resource_policy;
pub mod rule_group;
pub mod tag;
pub mod tls_inspection;
pub mod transit_gateway;
pub mod vpc_endpoint_association;

use nfw_operations::OperationDescriptor;

/// Every table, in help order
pub(crate) const TABLES: &[&[OperationDescriptor]] = &[
    firewall::OPERATIONS,
    firewall_policy::OPERATIONS,
    rule_group::OPERATIONS,
    tls_inspection::OPERATIONS,
    logging::OPERATIONS,
    proxy::OPERATIONS,
    vpc_endpoint_association::OPERATIONS,
    transit_gateway::OPERATIONS,
    resource_policy::OPERATIONS,
    tag::OPERATIONS,
];
