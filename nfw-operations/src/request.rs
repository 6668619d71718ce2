//! Request construction from an invocation context

use crate::client::Request;
use crate::context::InvocationContext;
use crate::descriptor::OperationDescriptor;
use serde_json::{Map, Value};

/// Build the request for `descriptor` from the supplied values
///
/// A field is written only when its parameter was supplied. Dotted request
/// paths create their parent objects on demand, so omitted values leave no
/// empty structures behind.
pub fn build_request(descriptor: &OperationDescriptor, context: &InvocationContext) -> Request {
    let mut request = Map::new();
    for spec in descriptor.parameters {
        if let Some(value) = context.get(spec.name) {
            insert_path(&mut request, spec.request_field(), value.to_json());
        }
    }
    request
}

fn insert_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                insert_path(child, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{ParamSpec, ParamType};
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::new("FirewallArn"),
        ParamSpec::new("FirewallName"),
        ParamSpec::new("LogDestinationConfigs")
            .param_type(ParamType::Json)
            .field("LoggingConfiguration.LogDestinationConfigs"),
        ParamSpec::new("EnableMonitoringDashboard")
            .param_type(ParamType::Boolean)
            .field("LoggingConfiguration.EnableMonitoringDashboard"),
    ];

    static DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("UpdateLoggingConfiguration", "update", "logging-configuration")
            .parameters(PARAMS);

    #[test]
    fn test_omitted_values_are_absent() {
        let ctx = InvocationContext::builder(&DESCRIPTOR)
            .set("FirewallArn", "arn:x")
            .unwrap()
            .build()
            .unwrap();
        let request = build_request(&DESCRIPTOR, &ctx);
        assert_eq!(Value::Object(request), json!({"FirewallArn": "arn:x"}));
    }

    #[test]
    fn test_nested_paths_share_parent() {
        let ctx = InvocationContext::builder(&DESCRIPTOR)
            .set("FirewallName", "fw")
            .unwrap()
            .set_json("LogDestinationConfigs", json!([{"LogType": "FLOW"}]))
            .unwrap()
            .set("EnableMonitoringDashboard", true)
            .unwrap()
            .build()
            .unwrap();
        let request = build_request(&DESCRIPTOR, &ctx);
        assert_eq!(
            Value::Object(request),
            json!({
                "FirewallName": "fw",
                "LoggingConfiguration": {
                    "LogDestinationConfigs": [{"LogType": "FLOW"}],
                    "EnableMonitoringDashboard": true
                }
            })
        );
    }

    #[test]
    fn test_every_absent_subset_leaves_no_trace() {
        let names = ["FirewallArn", "FirewallName", "EnableMonitoringDashboard"];
        for mask in 0u8..8 {
            let mut builder = InvocationContext::builder(&DESCRIPTOR);
            for (i, name) in names.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    builder = if *name == "EnableMonitoringDashboard" {
                        builder.set(name, false).unwrap()
                    } else {
                        builder.set(name, "v").unwrap()
                    };
                }
            }
            let ctx = builder.build().unwrap();
            let request = build_request(&DESCRIPTOR, &ctx);

            assert_eq!(request.contains_key("FirewallArn"), mask & 1 != 0);
            assert_eq!(request.contains_key("FirewallName"), mask & 2 != 0);
            assert_eq!(request.contains_key("LoggingConfiguration"), mask & 4 != 0);
        }
    }
}
