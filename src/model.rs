//! Ingress descriptors fed into the [`crate::engine::Engine`] by the surrounding
//! compiler driver, plus the policy enum that parameterizes traversal.
//!
//! Class-file parsing and the AOT compilation pipeline that produce these
//! values are out of scope here; this module only shapes the wire contract.

use serde::Deserialize;

/// One compiled class, as handed to [`crate::engine::Engine::add`].
#[derive(Debug, Clone, Deserialize)]
pub struct Clazz {
    pub internal_name: String,
    pub clazz_info: ClazzInfo,
}

/// Per-class metadata: its shape (enum/struct), class-level dependencies, and
/// the methods it declares.
#[derive(Debug, Clone, Deserialize)]
pub struct ClazzInfo {
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub is_struct: bool,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

/// One method declared by a class.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_callback: bool,
    #[serde(default)]
    pub is_weakly_linked: bool,
    #[serde(default)]
    pub is_strongly_linked: bool,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// A dependency edge originating from a class or a method.
///
/// `Plain` always targets a class; `InvokeMethod`/`SuperMethod` target a
/// method identified by `(class_name, method_name, method_desc)`. Whether a
/// `SuperMethod` dependency is reversed at insertion depends on whether it
/// came from a method's own dependency list or a class's — see
/// `Engine::add_class_dependency_edge` vs. `add_method_dependency_edge`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum Dependency {
    Plain {
        class_name: String,
        #[serde(default)]
        is_weak: bool,
    },
    InvokeMethod {
        class_name: String,
        method_name: String,
        method_desc: String,
        #[serde(default)]
        is_weak: bool,
    },
    SuperMethod {
        class_name: String,
        method_name: String,
        method_desc: String,
        #[serde(default)]
        is_weak: bool,
    },
}

/// The tree-shaking policy an [`crate::engine::Engine`] is pinned to at
/// construction. Affects traversal only, never graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeShakerMode {
    /// All weak edges are followed (no shaking).
    None,
    /// Weak edges to weakly-linked methods are dropped unless also strong.
    #[default]
    Conservative,
    /// Weak edges are admitted only through strongly-linked or constructor
    /// methods; weak edges to classes are never admitted.
    Aggressive,
}
