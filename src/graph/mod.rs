//! Shared graph primitives: node identity, edge storage, and lazy node
//! creation. Nodes are two disjoint kinds — classes and methods — stored in
//! an append-only [`petgraph::graph::DiGraph`] and never removed, matching
//! the monotonic-growth lifecycle described for the reachability engine.
//!
//! Strong and weak edges are not separate adjacency structures; they are
//! distinguished by [`EdgeKind`] on each petgraph edge. At most one edge of
//! each kind exists between an ordered pair of nodes (duplicates collapse on
//! insertion) so "strong dominates" falls out of traversal visiting every
//! edge rather than needing an explicit merge step.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// A method's identity: the owner class, its name, and its descriptor.
pub type MethodKey = (String, String, String);

/// A node in the dependency graph — a class or one of its methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Class {
        name: String,
    },
    Method {
        owner: String,
        name: String,
        desc: String,
        weakly_linked: bool,
        strongly_linked: bool,
    },
}

impl NodeKind {
    pub fn is_class(&self) -> bool {
        matches!(self, NodeKind::Class { .. })
    }

    pub fn method_name(&self) -> Option<&str> {
        match self {
            NodeKind::Method { name, .. } => Some(name),
            NodeKind::Class { .. } => None,
        }
    }

    pub fn weakly_linked(&self) -> bool {
        matches!(self, NodeKind::Method { weakly_linked: true, .. })
    }

    pub fn strongly_linked(&self) -> bool {
        matches!(self, NodeKind::Method { strongly_linked: true, .. })
    }
}

/// Whether an edge must be followed unconditionally (`Strong`) or only when
/// the target's link attributes and the active policy permit it (`Weak`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Weak,
    Strong,
}

impl EdgeKind {
    pub fn from_weak_flag(is_weak: bool) -> Self {
        if is_weak {
            EdgeKind::Weak
        } else {
            EdgeKind::Strong
        }
    }
}

/// The class/method dependency graph. Nodes are created lazily on first
/// reference (as a dependency source or target) and live for the graph's
/// lifetime; only edges and link flags ever change after creation.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    inner: DiGraph<NodeKind, EdgeKind>,
    classes: HashMap<String, NodeIndex>,
    methods: HashMap<MethodKey, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &DiGraph<NodeKind, EdgeKind> {
        &self.inner
    }

    pub fn node(&self, idx: NodeIndex) -> &NodeKind {
        &self.inner[idx]
    }

    pub fn class_index(&self, name: &str) -> Option<NodeIndex> {
        self.classes.get(name).copied()
    }

    pub fn method_index(&self, owner: &str, name: &str, desc: &str) -> Option<NodeIndex> {
        self.methods
            .get(&(owner.to_string(), name.to_string(), desc.to_string()))
            .copied()
    }

    /// Names of every class node ever created, in ascending lexicographic
    /// order.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve the `ClassNode` for `name`, creating it if this is the first
    /// reference.
    pub fn resolve_class(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.classes.get(name) {
            return *idx;
        }
        let idx = self.inner.add_node(NodeKind::Class {
            name: name.to_string(),
        });
        self.classes.insert(name.to_string(), idx);
        idx
    }

    /// Resolve the `MethodNode` for `(owner, name, desc)`, creating it (and
    /// its owner `ClassNode`, if not already present) on first reference.
    /// Creating the owner here does not add the method->class back edge —
    /// that edge is only added when the owner's own `add()` call ingests
    /// this method, per the engine's edge-type table.
    pub fn resolve_method(&mut self, owner: &str, name: &str, desc: &str) -> NodeIndex {
        let key = (owner.to_string(), name.to_string(), desc.to_string());
        if let Some(idx) = self.methods.get(&key) {
            return *idx;
        }
        self.resolve_class(owner);
        let idx = self.inner.add_node(NodeKind::Method {
            owner: owner.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
            weakly_linked: false,
            strongly_linked: false,
        });
        self.methods.insert(key, idx);
        idx
    }

    /// Monotonically OR the method's link flags with newly observed values.
    pub fn merge_method_links(&mut self, idx: NodeIndex, weakly_linked: bool, strongly_linked: bool) {
        if let NodeKind::Method {
            weakly_linked: w,
            strongly_linked: s,
            ..
        } = &mut self.inner[idx]
        {
            *w = *w || weakly_linked;
            *s = *s || strongly_linked;
        }
    }

    /// Add an edge `src -> dst` of the given kind. Duplicate `(src, dst,
    /// kind)` triples collapse into one edge — edges are unlabeled sets, not
    /// a multiset.
    pub fn add_edge(&mut self, src: NodeIndex, dst: NodeIndex, kind: EdgeKind) {
        let already_present = self
            .inner
            .edges_connecting(src, dst)
            .any(|e| *e.weight() == kind);
        if !already_present {
            self.inner.add_edge(src, dst, kind);
        }
    }
}
