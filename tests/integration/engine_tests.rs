//! End-to-end tests over the public `Engine` API, covering the testable
//! properties and scenarios from the specification.

use std::collections::HashSet;
use treeshake_reach::{Clazz, ClazzInfo, Dependency, Engine, MethodInfo, TreeShakerMode};

fn clazz(name: &str, is_enum: bool, is_struct: bool, methods: Vec<MethodInfo>, deps: Vec<Dependency>) -> Clazz {
    Clazz {
        internal_name: name.to_string(),
        clazz_info: ClazzInfo {
            is_enum,
            is_struct,
            dependencies: deps,
            methods,
        },
    }
}

fn method(name: &str, desc: &str) -> MethodInfo {
    MethodInfo {
        name: name.to_string(),
        desc: desc.to_string(),
        is_static: false,
        is_callback: false,
        is_weakly_linked: false,
        is_strongly_linked: false,
        dependencies: vec![],
    }
}

#[test]
fn p1_monotone_membership_across_repeated_adds() {
    let mut engine = Engine::new(TreeShakerMode::None);
    let mut m = method("m", "()V");
    m.dependencies.push(Dependency::InvokeMethod {
        class_name: "B".into(),
        method_name: "n".into(),
        method_desc: "()V".into(),
        is_weak: false,
    });
    let a = clazz("A", false, false, vec![m], vec![]);

    engine.add(&a, true);
    let first = engine.get_all_classes();
    engine.add(&a, true);
    let second = engine.get_all_classes();

    assert_eq!(first, second);
    assert!(first.contains(&"A".to_string()));
    assert!(first.contains(&"B".to_string()));
}

#[test]
fn p2_every_root_is_reachable_under_every_policy() {
    for mode in [
        TreeShakerMode::None,
        TreeShakerMode::Conservative,
        TreeShakerMode::Aggressive,
    ] {
        let mut engine = Engine::new(mode);
        engine.add(&clazz("Root", false, false, vec![], vec![]), true);
        let reachable = engine.find_reachable_classes();
        assert!(reachable.contains("Root"), "mode {mode:?}");
    }
}

#[test]
fn p4_cache_consistency() {
    let mut engine = Engine::new(TreeShakerMode::Conservative);
    engine.add(&clazz("A", false, false, vec![], vec![]), true);

    let q1 = engine.find_reachable_classes();
    let q2 = engine.find_reachable_classes();
    assert_eq!(q1, q2);

    // Re-adding the same class still invalidates the cache.
    engine.add(&clazz("A", false, false, vec![], vec![]), true);
    let q3 = engine.find_reachable_classes();
    assert_eq!(q1, q3);
}

#[test]
fn p5_policy_containment() {
    let mut weak_ctor = method("<init>", "()V");
    weak_ctor.is_weakly_linked = false;

    let mut m = method("m", "()V");
    m.dependencies.push(Dependency::InvokeMethod {
        class_name: "B".into(),
        method_name: "<init>".into(),
        method_desc: "()V".into(),
        is_weak: true,
    });

    let build = |mode: TreeShakerMode| -> HashSet<String> {
        let mut engine = Engine::new(mode);
        engine.add(&clazz("A", false, false, vec![m.clone()], vec![]), true);
        engine.add(&clazz("B", false, false, vec![weak_ctor.clone()], vec![]), false);
        engine.find_reachable_classes()
    };

    let none = build(TreeShakerMode::None);
    let conservative = build(TreeShakerMode::Conservative);
    let aggressive = build(TreeShakerMode::Aggressive);

    assert!(conservative.is_subset(&none));
    assert!(aggressive.is_subset(&conservative));
}

#[test]
fn p6_reachable_method_implies_reachable_owner() {
    let mut engine = Engine::new(TreeShakerMode::None);
    let mut root_method = method("m", "()V");
    root_method.dependencies.push(Dependency::InvokeMethod {
        class_name: "B".into(),
        method_name: "n".into(),
        method_desc: "()V".into(),
        is_weak: false,
    });
    engine.add(&clazz("A", false, false, vec![root_method], vec![]), true);
    engine.add(&clazz("B", false, false, vec![method("n", "()V")], vec![]), false);

    let methods = engine.find_reachable_methods();
    let classes = engine.find_reachable_classes();
    for (owner, _, _) in &methods {
        assert!(classes.contains(owner), "owner {owner} of reachable method must be reachable");
    }
}

#[test]
fn p8_strong_pins_survive_regardless_of_policy() {
    for mode in [
        TreeShakerMode::None,
        TreeShakerMode::Conservative,
        TreeShakerMode::Aggressive,
    ] {
        let mut engine = Engine::new(mode);
        let mut clinit = method("<clinit>", "()V");
        clinit.is_static = true;
        let mut callback = method("onEvent", "()V");
        callback.is_callback = true;
        engine.add(
            &clazz("A", false, false, vec![clinit, callback], vec![]),
            true,
        );

        let methods = engine.find_reachable_methods();
        assert!(methods.contains(&("A".to_string(), "<clinit>".to_string(), "()V".to_string())));
        assert!(methods.contains(&("A".to_string(), "onEvent".to_string(), "()V".to_string())));
    }
}

#[test]
fn scenario_struct_size_of_pinned() {
    let mut engine = Engine::new(TreeShakerMode::Aggressive);
    let mut size_of = method("sizeOf", "()I");
    size_of.is_static = true;
    engine.add(&clazz("S", false, true, vec![size_of], vec![]), true);

    let methods = engine.find_reachable_methods();
    assert!(methods.contains(&("S".to_string(), "sizeOf".to_string(), "()I".to_string())));
}

#[test]
fn large_graph_traversal_does_not_overflow_the_stack() {
    let mut engine = Engine::new(TreeShakerMode::None);
    // A long chain of strong invoke edges, deep enough that a naive
    // recursive DFS would overflow the call stack.
    let depth = 50_000;
    for i in 0..depth {
        let mut m = method("m", "()V");
        if i + 1 < depth {
            m.dependencies.push(Dependency::InvokeMethod {
                class_name: format!("C{}", i + 1),
                method_name: "m".into(),
                method_desc: "()V".into(),
                is_weak: false,
            });
        }
        engine.add(
            &clazz(&format!("C{i}"), false, false, vec![m], vec![]),
            i == 0,
        );
    }

    let reachable = engine.find_reachable_classes();
    assert_eq!(reachable.len(), depth);
}
