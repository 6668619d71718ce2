//! Confirmation gate for destructive operations

use crate::context::InvocationContext;
use crate::descriptor::OperationDescriptor;
use async_trait::async_trait;

/// Source of yes/no decisions, supplied by the caller's environment
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Return `true` to proceed with the operation
    async fn confirm(&self, descriptor: &OperationDescriptor, context: &InvocationContext) -> bool;
}

/// Answers every prompt the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&self, _descriptor: &OperationDescriptor, _context: &InvocationContext) -> bool {
        self.0
    }
}

/// The value a prompt should name as the target of the operation
///
/// This is the first supplied required parameter, falling back to the first
/// supplied parameter.
pub fn confirmation_target(descriptor: &OperationDescriptor, context: &InvocationContext) -> Option<String> {
    descriptor
        .parameters
        .iter()
        .filter(|p| p.required)
        .chain(descriptor.parameters.iter())
        .find_map(|p| context.get(p.name))
        .map(|value| value.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParamSpec;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::new("UpdateToken"),
        ParamSpec::new("FirewallArn").required(),
        ParamSpec::new("SubnetIds"),
    ];

    static DISASSOCIATE: OperationDescriptor =
        OperationDescriptor::new("DisassociateSubnets", "disassociate", "subnet").parameters(PARAMS);

    #[test]
    fn test_target_prefers_required_parameter() {
        let ctx = InvocationContext::builder(&DISASSOCIATE)
            .set("UpdateToken", "t1")
            .unwrap()
            .set("FirewallArn", "arn:x")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(confirmation_target(&DISASSOCIATE, &ctx).as_deref(), Some("arn:x"));
    }

    #[tokio::test]
    async fn test_fixed_answer() {
        let ctx = InvocationContext::builder(&DISASSOCIATE)
            .set("FirewallArn", "arn:x")
            .unwrap()
            .build()
            .unwrap();
        assert!(FixedAnswer(true).confirm(&DISASSOCIATE, &ctx).await);
        assert!(!FixedAnswer(false).confirm(&DISASSOCIATE, &ctx).await);
    }
}
