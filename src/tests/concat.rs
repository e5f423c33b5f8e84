use itertools::Itertools;
use pretty_assertions::assert_eq;
use tap::Pipe;

use crate::{
    JoinWith,
    JoinWithView,
    joining_with,
    tests::init_tracing,
};

#[test]
fn joins_inner_sequences_with_pattern() {
    init_tracing();
    let view = vec![vec!["a", "b"], vec!["c"]].join_with(vec![","]);
    assert_eq!(view.into_cursor().collect_vec(), ["a", "b", ",", "c"]);
}

#[test]
fn single_inner_sequence_emits_no_pattern() {
    let view = vec![vec!["x"]].join_with(vec![","]);
    assert_eq!(view.into_cursor().collect_vec(), ["x"]);
}

#[test]
fn empty_outer_sequence_is_empty() {
    let view: JoinWithView<Vec<Vec<&str>>, Vec<&str>> = vec![].join_with(vec!["-"]);
    let mut cursor = view.into_cursor();
    assert!(cursor.at_end());
    assert_eq!(cursor.next(), None);
}

#[test]
fn empty_leading_inner_sequence_still_separates() {
    // the pattern separates sequence positions, not non-empty contents
    let view = vec![vec![], vec!["y"]].join_with(vec![","]);
    assert_eq!(view.into_cursor().collect_vec(), [",", "y"]);
}

#[test]
fn empty_pattern_concatenates() {
    let view = vec![vec!["p", "q"], vec!["r", "s"]].join_with(Vec::new());
    assert_eq!(view.into_cursor().collect_vec(), ["p", "q", "r", "s"]);
}

#[test]
fn consecutive_empty_inner_sequences_collapse_to_separators() {
    let view = vec![vec![], vec![], vec![]].join_with(vec![0]);
    assert_eq!(view.into_cursor().collect_vec(), [0, 0]);
}

#[test]
fn multi_element_pattern_is_emitted_whole() {
    let view = vec![vec![1], vec![2]].join_with(vec![7, 8, 9]);
    assert_eq!(view.into_cursor().collect_vec(), [1, 7, 8, 9, 2]);
}

#[test]
fn single_separator_element_convenience() {
    let view = vec![vec![1, 2], vec![3]].join_with_item(0);
    assert_eq!(view.into_cursor().collect_vec(), [1, 2, 0, 3]);
}

#[test]
fn curried_form_composes_in_pipelines() {
    let out = vec![vec![1], vec![2], vec![3]]
        .pipe(joining_with(vec![0]))
        .into_cursor()
        .collect_vec();
    assert_eq!(out, [1, 0, 2, 0, 3]);
}

#[test]
fn borrowed_traversal_is_idempotent() {
    let view = vec![vec![1, 2], vec![3]].join_with(vec![0]);
    let first = view.cursor().copied().collect_vec();
    let second = view.cursor().copied().collect_vec();
    assert_eq!(first, [1, 2, 0, 3]);
    assert_eq!(first, second);
}

#[test]
fn shared_view_iterates_by_reference() {
    let view = vec![vec![1], vec![2]].join_with(vec![0]);
    let mut out = Vec::new();
    for item in &view {
        out.push(*item);
    }
    assert_eq!(out, [1, 0, 2]);
}

#[test]
fn single_pass_outer_resumes_from_view() {
    init_tracing();
    let mut view =
        JoinWithView::new(vec![vec![1], vec![2], vec![3]].into_iter(), vec![0]);
    let head = view.cursor_mut().take(2).collect_vec();
    assert_eq!(head, [1, 0]);
    // resumes at the first outer element not yet pulled; the inner
    // sequence [2] was already claimed by the dropped cursor
    let tail = view.cursor_mut().collect_vec();
    assert_eq!(tail, [3]);
}

#[test]
fn exclusive_view_iterates_by_reference() {
    let mut view = JoinWithView::new(vec![vec![1], vec![2]].into_iter(), vec![0]);
    let mut out = Vec::new();
    for item in &mut view {
        out.push(item);
    }
    assert_eq!(out, [1, 0, 2]);
}

#[test]
fn fused_after_end() {
    let view = vec![vec![1]].join_with(vec![0]);
    let mut cursor = view.into_cursor();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}
