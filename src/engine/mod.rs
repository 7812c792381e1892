//! The incremental reachability engine: ingests compiled class descriptors,
//! builds the dependency graph described in [`crate::graph`], and answers
//! policy-parameterized reachable-set queries.

use crate::graph::{DependencyGraph, EdgeKind, NodeKind};
use crate::model::{Clazz, ClazzInfo, Dependency, MethodInfo, TreeShakerMode};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;
use tracing::debug;

/// A reachable method triple, as returned by
/// [`Engine::find_reachable_methods`].
pub type MethodTriple = (String, String, String);

/// Incremental class/method dependency graph pinned to one tree-shaker
/// policy. Not internally synchronized — a host ingesting from multiple
/// workers must serialize calls to `add` and to the query methods.
pub struct Engine {
    graph: DependencyGraph,
    roots: HashSet<NodeIndex>,
    mode: TreeShakerMode,
    reachable_cache: Option<HashSet<NodeIndex>>,
}

impl Engine {
    pub fn new(mode: TreeShakerMode) -> Self {
        Self {
            graph: DependencyGraph::new(),
            roots: HashSet::new(),
            mode,
            reachable_cache: None,
        }
    }

    pub fn mode(&self) -> TreeShakerMode {
        self.mode
    }

    /// Ingest one compiled class. Invalidates the reachable-set cache
    /// unconditionally, per the graph invariant that any `add` clears it.
    pub fn add(&mut self, class: &Clazz, is_root: bool) {
        self.reachable_cache = None;

        let class_idx = self.graph.resolve_class(&class.internal_name);
        if is_root {
            self.roots.insert(class_idx);
        }

        for dep in &class.clazz_info.dependencies {
            self.add_class_dependency_edge(class_idx, dep);
        }

        for method in &class.clazz_info.methods {
            let strong_pin = is_strong_class_to_method(
                &class.internal_name,
                &class.clazz_info,
                method,
                is_root,
            );
            let method_idx =
                self.graph
                    .resolve_method(&class.internal_name, &method.name, &method.desc);
            self.graph.merge_method_links(
                method_idx,
                method.is_weakly_linked,
                method.is_strongly_linked,
            );

            self.graph.add_edge(
                class_idx,
                method_idx,
                EdgeKind::from_weak_flag(!strong_pin),
            );
            // A method implies keeping its declaring class.
            self.graph.add_edge(method_idx, class_idx, EdgeKind::Strong);

            for dep in &method.dependencies {
                self.add_method_dependency_edge(class_idx, method_idx, dep);
            }
        }

        debug!(
            class = %class.internal_name,
            is_root,
            methods = class.clazz_info.methods.len(),
            "ingested class"
        );
    }

    /// Names of every class node ever created, in ascending lexicographic
    /// order — including classes referenced only as a dependency target or
    /// as the owner of a referenced method, never themselves `add()`-ed.
    pub fn get_all_classes(&self) -> Vec<String> {
        self.graph.class_names()
    }

    /// Reachable class internal names under the engine's pinned policy.
    pub fn find_reachable_classes(&mut self) -> HashSet<String> {
        self.ensure_cache();
        self.reachable_cache
            .as_ref()
            .expect("cache populated by ensure_cache")
            .iter()
            .filter_map(|idx| match self.graph.node(*idx) {
                NodeKind::Class { name } => Some(name.clone()),
                NodeKind::Method { .. } => None,
            })
            .collect()
    }

    /// Reachable `(owner, name, descriptor)` method triples under the
    /// engine's pinned policy.
    pub fn find_reachable_methods(&mut self) -> HashSet<MethodTriple> {
        self.ensure_cache();
        self.reachable_cache
            .as_ref()
            .expect("cache populated by ensure_cache")
            .iter()
            .filter_map(|idx| match self.graph.node(*idx) {
                NodeKind::Method {
                    owner, name, desc, ..
                } => Some((owner.clone(), name.clone(), desc.clone())),
                NodeKind::Class { .. } => None,
            })
            .collect()
    }

    fn ensure_cache(&mut self) {
        if self.reachable_cache.is_none() {
            let reachable = self.traverse();
            debug!(reachable = reachable.len(), "traversal complete");
            self.reachable_cache = Some(reachable);
        }
    }

    /// Depth-first reachability over the graph from every root, using an
    /// explicit worklist rather than recursion — traversal depth can reach
    /// the node count, which may be tens of thousands.
    fn traverse(&self) -> HashSet<NodeIndex> {
        let inner = self.graph.inner();
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<NodeIndex> = self.roots.iter().copied().collect();

        while let Some(n) = stack.pop() {
            if !visited.insert(n) {
                continue;
            }

            for edge in inner.edges(n) {
                let target = edge.target();
                if visited.contains(&target) {
                    continue;
                }
                let admit = match edge.weight() {
                    EdgeKind::Strong => true,
                    EdgeKind::Weak => admits_weak_edge(self.mode, self.graph.node(target)),
                };
                if admit {
                    stack.push(target);
                }
            }
        }

        visited
    }

    fn add_class_dependency_edge(&mut self, src: NodeIndex, dep: &Dependency) {
        match dep {
            Dependency::Plain { class_name, is_weak } => {
                let tgt = self.graph.resolve_class(class_name);
                self.graph.add_edge(src, tgt, EdgeKind::from_weak_flag(*is_weak));
            }
            Dependency::InvokeMethod {
                class_name,
                method_name,
                method_desc,
                is_weak,
            } => {
                let tgt = self.graph.resolve_method(class_name, method_name, method_desc);
                self.graph.add_edge(src, tgt, EdgeKind::from_weak_flag(*is_weak));
            }
            // Class-level super-method dependencies are NOT reversed — only
            // method-level ones are (see add_method_dependency_edge).
            Dependency::SuperMethod {
                class_name,
                method_name,
                method_desc,
                is_weak,
            } => {
                let tgt = self.graph.resolve_method(class_name, method_name, method_desc);
                self.graph.add_edge(src, tgt, EdgeKind::from_weak_flag(*is_weak));
            }
        }
    }

    fn add_method_dependency_edge(&mut self, class_idx: NodeIndex, method_idx: NodeIndex, dep: &Dependency) {
        let _ = class_idx; // the edge always originates at the method, not its owner
        match dep {
            Dependency::Plain { class_name, is_weak } => {
                let tgt = self.graph.resolve_class(class_name);
                self.graph
                    .add_edge(method_idx, tgt, EdgeKind::from_weak_flag(*is_weak));
            }
            Dependency::InvokeMethod {
                class_name,
                method_name,
                method_desc,
                is_weak,
            } => {
                let tgt = self.graph.resolve_method(class_name, method_name, method_desc);
                self.graph
                    .add_edge(method_idx, tgt, EdgeKind::from_weak_flag(*is_weak));
            }
            // "If the super method is reached, the overriding method must be
            // reached too" — reverse the edge and pin it strong, ignoring
            // `is_weak`, so virtual dispatch survives pruning.
            Dependency::SuperMethod {
                class_name,
                method_name,
                method_desc,
                ..
            } => {
                let tgt = self.graph.resolve_method(class_name, method_name, method_desc);
                self.graph.add_edge(tgt, method_idx, EdgeKind::Strong);
            }
        }
    }
}

/// Whether the class->method edge is strong: it survives tree-shaking
/// without regard to the active policy. This pin never affects the
/// method's own `weakly_linked`/`strongly_linked` bits, only this one edge.
fn is_strong_class_to_method(
    owner: &str,
    info: &ClazzInfo,
    method: &MethodInfo,
    is_root: bool,
) -> bool {
    if is_root {
        return true;
    }
    if method.is_callback {
        return true;
    }
    if method.is_static && method.name == "<clinit>" && method.desc == "()V" {
        return true;
    }
    if info.is_enum
        && method.is_static
        && method.name == "values"
        && method.desc == format!("()[L{};", owner)
    {
        return true;
    }
    if info.is_struct && method.is_static && method.name == "sizeOf" && method.desc == "()I" {
        return true;
    }
    false
}

/// Weak-edge admission rule for the active policy (spec §4.1.3). `none`
/// follows everything; `conservative` drops weakly-linked method targets;
/// `aggressive` only follows methods, and only strongly-linked ones or
/// unmarked constructors — weak edges to classes are never admitted.
fn admits_weak_edge(mode: TreeShakerMode, child: &NodeKind) -> bool {
    match mode {
        TreeShakerMode::None => true,
        TreeShakerMode::Conservative => !child.weakly_linked(),
        TreeShakerMode::Aggressive => match child {
            NodeKind::Method {
                strongly_linked,
                weakly_linked,
                name,
                ..
            } => *strongly_linked || (!*weakly_linked && name == "<init>"),
            NodeKind::Class { .. } => false,
        },
    }
}
