//! Global name environment.
//!
//! Maps names to expression nodes, never to values: binding is lazy, so a
//! name may be referenced before it is defined and may refer to itself.
//! Rebinding a name only affects references that have not been forced yet;
//! forced references keep their memoized value.

use rustc_hash::FxHashMap;

use gx_ir::{Name, NodeId};

/// Name-to-node bindings of one interpreter.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, NodeId>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the node it was previously bound to.
    pub fn define(&mut self, name: Name, node: NodeId) -> Option<NodeId> {
        self.bindings.insert(name, node)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<NodeId> {
        self.bindings.get(&name).copied()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
