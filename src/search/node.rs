//! Search tree nodes for the iterative strategy.
//!
//! A flat arena of nodes with index handles, the explicit counterpart of
//! the recursive call tree. Each node owns a private queue snapshot, a pair
//! of children that is absent until the node expands, and a score that is
//! absent until the node resolves. Nodes never outlive the search invocation
//! that allocated them.

use smallvec::SmallVec;

use super::Score;

/// Index into a `SearchTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One snapshot in the iterative search.
#[derive(Clone, Debug)]
pub struct SearchNode<Q> {
    /// Private queue snapshot; never shared with another node.
    pub queue: Q,

    /// Reachable next-states in action order; `None` until expanded.
    pub children: Option<SmallVec<[NodeId; 2]>>,

    /// Resolved score; `None` until computed, never changed afterwards.
    pub score: Option<Score>,
}

impl<Q> SearchNode<Q> {
    /// A fresh, unexpanded, unresolved node.
    pub fn new(queue: Q) -> Self {
        Self {
            queue,
            children: None,
            score: None,
        }
    }

    /// Whether the node's score has been computed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }
}

/// Arena of search nodes.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices,
/// which keeps the explicit stack to plain integers.
#[derive(Clone, Debug)]
pub struct SearchTree<Q> {
    nodes: Vec<SearchNode<Q>>,
}

impl<Q> SearchTree<Q> {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<Q>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<Q> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<Q> {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<Q> Default for SearchTree<Q> {
    fn default() -> Self {
        Self::new()
    }
}
