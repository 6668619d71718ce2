//! Lookup of operation descriptors

use crate::operations::TABLES;
use nfw_operations::OperationDescriptor;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Registry of all supported operations
pub struct Registry {
    operations: Vec<&'static OperationDescriptor>,
    /// Map from canonical op string to descriptor
    by_op: HashMap<String, &'static OperationDescriptor>,
    /// Map from remote operation name to descriptor
    by_name: HashMap<&'static str, &'static OperationDescriptor>,
}

impl Registry {
    fn new() -> Self {
        let operations: Vec<&'static OperationDescriptor> =
            TABLES.iter().flat_map(|table| table.iter()).collect();

        let mut by_op = HashMap::new();
        let mut by_name = HashMap::new();
        for descriptor in &operations {
            by_op.insert(descriptor.op_string(), *descriptor);
            by_name.insert(descriptor.name, *descriptor);
        }

        Self {
            operations,
            by_op,
            by_name,
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: Lazy<Registry> = Lazy::new(Registry::new);
        &INSTANCE
    }

    /// Look up by canonical op string, e.g. `"delete firewall"`
    ///
    /// Case and repeated whitespace are ignored.
    pub fn get(&self, op: &str) -> Option<&'static OperationDescriptor> {
        let normalized = op
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        self.by_op.get(&normalized).copied()
    }

    /// Look up by verb and noun
    pub fn find(&self, verb: &str, noun: &str) -> Option<&'static OperationDescriptor> {
        self.get(&format!("{verb} {noun}"))
    }

    /// Look up by remote operation name, e.g. `"DeleteFirewall"`
    pub fn by_operation_name(&self, name: &str) -> Option<&'static OperationDescriptor> {
        self.by_name.get(name).copied()
    }

    /// All descriptors, in table order
    pub fn operations(&self) -> &[&'static OperationDescriptor] {
        &self.operations
    }

    /// Descriptors acting on `noun`, in table order
    pub fn for_noun<'a>(
        &'a self,
        noun: &'a str,
    ) -> impl Iterator<Item = &'static OperationDescriptor> + 'a {
        self.operations
            .iter()
            .copied()
            .filter(move |d| d.noun == noun)
    }

    /// Sorted set of nouns
    pub fn nouns(&self) -> Vec<&'static str> {
        self.operations
            .iter()
            .map(|d| d.noun)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// The global registry
pub fn registry() -> &'static Registry {
    Registry::global()
}
