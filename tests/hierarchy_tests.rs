//! Hierarchy Walk Tests
//!
//! Tests for:
//! - SceneNode::walk: pre-order, depth bookkeeping, single visit per node
//! - Laziness: partial consumption, independent concurrent walks

use glam::Mat4;
use rigscope::SceneNode;

fn node(name: &str) -> SceneNode {
    SceneNode::new(name, Mat4::IDENTITY)
}

fn names_and_depths(root: &SceneNode) -> Vec<(String, usize)> {
    root.walk().map(|(n, d)| (n.name.clone(), d)).collect()
}

// ============================================================================
// Walk Order
// ============================================================================

#[test]
fn walk_root_with_two_leaves() {
    // Root "Scene" with children "A" and "B": [(Scene,0), (A,1), (B,1)].
    let mut root = node("Scene");
    root.children.push(node("A"));
    root.children.push(node("B"));

    assert_eq!(
        names_and_depths(&root),
        vec![
            ("Scene".to_string(), 0),
            ("A".to_string(), 1),
            ("B".to_string(), 1),
        ]
    );
}

#[test]
fn walk_is_preorder() {
    let mut left = node("L");
    left.children.push(node("L1"));
    left.children.push(node("L2"));
    let mut right = node("R");
    right.children.push(node("R1"));
    let mut root = node("Scene");
    root.children.push(left);
    root.children.push(right);

    let names: Vec<_> = root.walk().map(|(n, _)| n.name.as_str()).collect();
    assert_eq!(names, vec!["Scene", "L", "L1", "L2", "R", "R1"]);
}

#[test]
fn depth_equals_ancestor_count() {
    let mut chain = node("d3");
    for name in ["d2", "d1", "d0"] {
        let mut parent = node(name);
        parent.children.push(chain);
        chain = parent;
    }

    let depths: Vec<_> = chain.walk().map(|(n, d)| (n.name.clone(), d)).collect();
    assert_eq!(
        depths,
        vec![
            ("d0".to_string(), 0),
            ("d1".to_string(), 1),
            ("d2".to_string(), 2),
            ("d3".to_string(), 3),
        ]
    );
}

#[test]
fn every_node_visited_exactly_once() {
    let mut root = node("Scene");
    for i in 0..3 {
        let mut child = node(&format!("c{i}"));
        for j in 0..2 {
            child.children.push(node(&format!("c{i}_{j}")));
        }
        root.children.push(child);
    }

    let mut names: Vec<_> = root.walk().map(|(n, _)| n.name.clone()).collect();
    assert_eq!(names.len(), 10);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 10, "a node was visited more than once");
}

// ============================================================================
// Laziness & Re-entrancy
// ============================================================================

#[test]
fn walk_can_be_consumed_partially() {
    let mut root = node("Scene");
    root.children.push(node("A"));
    root.children.push(node("B"));

    let first_two: Vec<_> = root.walk().take(2).map(|(n, _)| n.name.clone()).collect();
    assert_eq!(first_two, vec!["Scene".to_string(), "A".to_string()]);
}

#[test]
fn concurrent_walks_do_not_interfere() {
    let mut root = node("Scene");
    root.children.push(node("A"));
    root.children.push(node("B"));

    let mut outer = root.walk();
    outer.next();
    // A second walk started mid-flight sees the whole tree from the top.
    let inner: Vec<_> = root.walk().map(|(_, d)| d).collect();
    assert_eq!(inner, vec![0, 1, 1]);
    // And the first walk continues where it left off.
    let rest: Vec<_> = outer.map(|(n, _)| n.name.clone()).collect();
    assert_eq!(rest, vec!["A".to_string(), "B".to_string()]);
}
