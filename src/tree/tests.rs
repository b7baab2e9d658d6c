//! Tests for the forest operations and structural equality

use std::collections::HashSet;

use super::*;
use crate::models::{Node, NodeKind, Status};

fn node(id: u64, kind: NodeKind, status: Status) -> Node {
    Node::new(id, format!("node-{id}"), kind, status)
}

fn with_children(mut parent: Node, children: Vec<Node>) -> Node {
    parent.children = children;
    parent
}

/// Three features; the first nests a story with a task plus a second story.
///
///   1 Feature (Backlog)
///   ├── 2 User Story
///   │   └── 3 Task
///   └── 4 User Story
///   5 Feature (In Progress)
///   └── 6 User Story
///   7 Feature (Done)
fn sample_forest() -> Vec<Node> {
    vec![
        with_children(
            node(1, NodeKind::Feature, Status::Backlog),
            vec![
                with_children(
                    node(2, NodeKind::UserStory, Status::ToDo),
                    vec![node(3, NodeKind::Task, Status::ToDo)],
                ),
                node(4, NodeKind::UserStory, Status::Backlog),
            ],
        ),
        with_children(
            node(5, NodeKind::Feature, Status::InProgress),
            vec![node(6, NodeKind::UserStory, Status::InProgress)],
        ),
        node(7, NodeKind::Feature, Status::Done),
    ]
}

fn ids(set: &[u64]) -> HashSet<u64> {
    set.iter().copied().collect()
}

#[test]
fn test_find_at_every_depth() {
    let forest = sample_forest();

    assert_eq!(find(&forest, 1).map(|n| n.id), Some(1));
    assert_eq!(find(&forest, 3).map(|n| n.id), Some(3));
    assert_eq!(find(&forest, 7).map(|n| n.id), Some(7));
    assert!(find(&forest, 99).is_none());
}

#[test]
fn test_find_index_is_sibling_local() {
    let forest = sample_forest();

    // Roots: 1, 5, 7.
    assert_eq!(find_index(&forest, 5), Some(1));
    assert_eq!(find_index(&forest, 7), Some(2));
    // Node 4 is the second child of node 1.
    assert_eq!(find_index(&forest, 4), Some(1));
    // Node 3 is the only child of node 2.
    assert_eq!(find_index(&forest, 3), Some(0));
    assert_eq!(find_index(&forest, 99), None);
}

#[test]
fn test_find_parent() {
    let forest = sample_forest();

    assert_eq!(find_parent(&forest, 3).map(|n| n.id), Some(2));
    assert_eq!(find_parent(&forest, 4).map(|n| n.id), Some(1));
    assert!(find_parent(&forest, 1).is_none());
    assert!(find_parent(&forest, 99).is_none());
}

#[test]
fn test_depth_of() {
    let forest = sample_forest();

    assert_eq!(depth_of(&forest, 1), Some(0));
    assert_eq!(depth_of(&forest, 2), Some(1));
    assert_eq!(depth_of(&forest, 3), Some(2));
    assert_eq!(depth_of(&forest, 99), None);
}

#[test]
fn test_contains_and_is_root() {
    let forest = sample_forest();

    assert!(contains(&forest, 3));
    assert!(!contains(&forest, 99));
    assert!(is_root(&forest, 5));
    assert!(!is_root(&forest, 2));
}

#[test]
fn test_update_patches_matches_at_multiple_depths() {
    let forest = sample_forest();

    let updated = update(&forest, &ids(&[1, 3]), &|_| {
        NodePatch::status(Status::Done)
    });

    assert_eq!(find(&updated, 1).unwrap().status, Status::Done);
    assert_eq!(find(&updated, 3).unwrap().status, Status::Done);
    // Intermediate node between the two matches is untouched.
    assert_eq!(find(&updated, 2).unwrap().status, Status::ToDo);
}

#[test]
fn test_update_preserves_unaffected_branches() {
    let forest = sample_forest();

    let updated = update(&forest, &ids(&[3]), &|_| NodePatch::status(Status::Done));

    // Branches without a match are structurally identical to the input.
    assert!(nodes_equal(
        std::slice::from_ref(&updated[1]),
        std::slice::from_ref(&forest[1])
    ));
    assert!(nodes_equal(
        std::slice::from_ref(&updated[2]),
        std::slice::from_ref(&forest[2])
    ));
    assert!(!nodes_equal(
        std::slice::from_ref(&updated[0]),
        std::slice::from_ref(&forest[0])
    ));
}

#[test]
fn test_update_missing_id_is_noop() {
    let forest = sample_forest();

    let updated = update(&forest, &ids(&[99]), &|_| NodePatch::status(Status::Done));

    assert!(nodes_equal(&updated, &forest));
}

#[test]
fn test_update_never_mutates_input() {
    let forest = sample_forest();
    let before = forest.clone();

    let _ = update(&forest, &ids(&[1, 2, 3]), &|_| {
        NodePatch::status(Status::Done)
    });

    assert_eq!(forest, before);
}

#[test]
fn test_toggle_twice_round_trips() {
    let forest = sample_forest();
    let toggle = |node: &Node| NodePatch::expanded(!node.expanded);

    let once = update(&forest, &ids(&[2]), &toggle);
    assert!(find(&once, 2).unwrap().expanded);

    let twice = update(&once, &ids(&[2]), &toggle);
    assert!(nodes_equal(&twice, &forest));
}

#[test]
fn test_update_all_applies_everywhere() {
    let forest = sample_forest();

    let expanded = update_all(&forest, &NodePatch::expanded(true));

    assert!(find(&expanded, 1).unwrap().expanded);
    assert!(find(&expanded, 3).unwrap().expanded);
    assert!(find(&expanded, 7).unwrap().expanded);
}

#[test]
fn test_delete_removes_whole_subtree() {
    let forest = sample_forest();

    let remaining = delete(&forest, 2);

    assert!(find(&remaining, 2).is_none());
    // Descendant of the deleted node is gone too.
    assert!(find(&remaining, 3).is_none());
    // Sibling shifted up.
    assert_eq!(find(&remaining, 1).unwrap().children[0].id, 4);
    // Other roots untouched.
    assert!(nodes_equal(
        std::slice::from_ref(&remaining[1]),
        std::slice::from_ref(&forest[1])
    ));
}

#[test]
fn test_delete_root_shifts_siblings() {
    let forest = sample_forest();

    let remaining = delete(&forest, 1);

    let root_ids: Vec<u64> = remaining.iter().map(|n| n.id).collect();
    assert_eq!(root_ids, vec![5, 7]);
}

#[test]
fn test_delete_missing_id_is_noop() {
    let forest = sample_forest();

    let remaining = delete(&forest, 99);

    assert!(nodes_equal(&remaining, &forest));
}

#[test]
fn test_add_child_appends_to_parent() {
    let forest = sample_forest();
    let story = node(10, NodeKind::UserStory, Status::ToDo);

    let added = add_child(&forest, Some(5), &story);

    let parent = find(&added, 5).unwrap();
    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[1].id, 10);
}

#[test]
fn test_add_child_without_parent_appends_root() {
    let forest = sample_forest();
    let feature = node(10, NodeKind::Feature, Status::Backlog);

    let added = add_child(&forest, None, &feature);

    assert_eq!(added.len(), 4);
    assert_eq!(added[3].id, 10);
}

#[test]
fn test_add_child_missing_parent_is_noop() {
    let forest = sample_forest();
    let story = node(10, NodeKind::UserStory, Status::ToDo);

    let added = add_child(&forest, Some(99), &story);

    assert!(nodes_equal(&added, &forest));
}

#[test]
fn test_add_then_delete_is_inverse() {
    let forest = sample_forest();
    let story = node(10, NodeKind::UserStory, Status::ToDo);

    let round_trip = delete(&add_child(&forest, Some(2), &story), 10);

    assert!(nodes_equal(&round_trip, &forest));
}

#[test]
fn test_insert_above_and_below_target() {
    let forest = sample_forest();
    let feature = node(10, NodeKind::Feature, Status::Backlog);

    let above = insert_at(&forest, Some(5), &feature, true);
    let above_ids: Vec<u64> = above.iter().map(|n| n.id).collect();
    assert_eq!(above_ids, vec![1, 10, 5, 7]);

    let below = insert_at(&forest, Some(5), &feature, false);
    let below_ids: Vec<u64> = below.iter().map(|n| n.id).collect();
    assert_eq!(below_ids, vec![1, 5, 10, 7]);
}

#[test]
fn test_insert_into_nested_sibling_list() {
    let forest = sample_forest();
    let story = node(10, NodeKind::UserStory, Status::ToDo);

    let inserted = insert_at(&forest, Some(4), &story, true);

    let child_ids: Vec<u64> = find(&inserted, 1)
        .unwrap()
        .children
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(child_ids, vec![2, 10, 4]);
    // Depth of the new node matches the target's depth.
    assert_eq!(depth_of(&inserted, 10), Some(1));
}

#[test]
fn test_insert_without_target_appends_root() {
    let forest = sample_forest();
    let feature = node(10, NodeKind::Feature, Status::Backlog);

    // `above` is ignored when there is no target.
    let inserted = insert_at(&forest, None, &feature, true);

    assert_eq!(inserted.len(), 4);
    assert_eq!(inserted[3].id, 10);
}

#[test]
fn test_nodes_equal_reflexive() {
    let forest = sample_forest();
    assert!(nodes_equal(&forest, &forest));
}

#[test]
fn test_nodes_equal_detects_scalar_change() {
    let forest = sample_forest();
    let mut changed = forest.clone();
    changed[2].status = Status::Backlog;

    assert!(!nodes_equal(&changed, &forest));
}

#[test]
fn test_nodes_equal_detects_nested_change() {
    let forest = sample_forest();
    let mut changed = forest.clone();
    changed[0].children[0].children[0].name = "renamed".to_string();

    assert!(!nodes_equal(&changed, &forest));
}

#[test]
fn test_nodes_equal_detects_length_change() {
    let forest = sample_forest();
    let shorter = delete(&forest, 7);

    assert!(!nodes_equal(&shorter, &forest));
}

#[test]
fn test_nodes_equal_ignores_ids() {
    let forest = sample_forest();
    let mut renumbered = forest.clone();
    renumbered[2].id = 70;

    // Positional comparison: same fields at the same path compare equal.
    assert!(nodes_equal(&renumbered, &forest));
}
