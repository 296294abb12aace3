//! Arena allocation for the lazy expression graph.
//!
//! - Contiguous storage for all nodes of one interpreter
//! - Child references use `NodeId` indices
//! - One write-once memo cell per node
//!
//! Nodes are created by the parser and by combinators that synthesize new
//! applications (`s`, `b`). They are never freed individually; the graph is
//! dropped with its interpreter.

use crate::{Name, NodeId, Value};

/// The syntactic shape of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// An immutable value, never re-evaluated.
    Literal(Value),
    /// A name resolved against the environment on first force.
    Reference(Name),
    /// Function position applied to an unevaluated argument.
    Apply { func: NodeId, arg: NodeId },
}

/// Memoization state of a node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Memo {
    /// Not forced yet (or the last attempt failed).
    #[default]
    Pending,
    /// Currently being forced; forcing it again is a cycle.
    Forcing,
    /// Forced; the value is final.
    Ready(Value),
}

/// Contiguous storage for all nodes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    kinds: Vec<NodeKind>,
    memos: Vec<Memo>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on script size.
    /// Heuristic: ~1 node per 4 bytes of source (`ap x` is 4 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 4;
        Graph {
            kinds: Vec::with_capacity(estimated),
            memos: Vec::with_capacity(estimated),
        }
    }

    /// Allocate a node, return its ID.
    ///
    /// # Panics
    /// Panics if the graph outgrows `u32` indices.
    #[inline]
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let index = u32::try_from(self.kinds.len())
            .unwrap_or_else(|_| panic!("expression graph exceeded {} nodes", u32::MAX));
        self.kinds.push(kind);
        self.memos.push(Memo::Pending);
        NodeId::new(index)
    }

    #[inline]
    pub fn literal(&mut self, value: Value) -> NodeId {
        self.alloc(NodeKind::Literal(value))
    }

    #[inline]
    pub fn reference(&mut self, name: Name) -> NodeId {
        self.alloc(NodeKind::Reference(name))
    }

    #[inline]
    pub fn apply(&mut self, func: NodeId, arg: NodeId) -> NodeId {
        self.alloc(NodeKind::Apply { func, arg })
    }

    /// Get a node's shape.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    /// Get a node's memo state.
    #[inline]
    #[track_caller]
    pub fn memo(&self, id: NodeId) -> &Memo {
        &self.memos[id.index()]
    }

    /// The node's value if it needs no further work.
    ///
    /// Literals answer immediately; other nodes answer once settled.
    pub fn cached(&self, id: NodeId) -> Option<&Value> {
        match (&self.kinds[id.index()], &self.memos[id.index()]) {
            (NodeKind::Literal(value), _) | (_, Memo::Ready(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_forcing(&self, id: NodeId) -> bool {
        matches!(self.memos[id.index()], Memo::Forcing)
    }

    /// Mark a pending node as in progress.
    pub fn begin_forcing(&mut self, id: NodeId) {
        debug_assert!(matches!(self.memos[id.index()], Memo::Pending));
        self.memos[id.index()] = Memo::Forcing;
    }

    /// Record the final value of a node. Each node settles at most once.
    pub fn settle(&mut self, id: NodeId, value: Value) {
        debug_assert!(
            !matches!(self.memos[id.index()], Memo::Ready(_)),
            "{id:?} settled twice"
        );
        self.memos[id.index()] = Memo::Ready(value);
    }

    /// Return an in-progress node to pending after a failed force.
    pub fn abandon(&mut self, id: NodeId) {
        if matches!(self.memos[id.index()], Memo::Forcing) {
            self.memos[id.index()] = Memo::Pending;
        }
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests;
