//! Tests for KOptDescriptor, cycle decomposition and reversal planning.

use super::*;

const N: usize = 10;

fn successor(node: usize) -> usize {
    (node + 1) % N
}

fn sequential(removed: &[usize]) -> KOptDescriptor<usize> {
    KOptDescriptor::sequential(removed, successor, cyclic_between)
}

#[test]
fn sequential_two_opt() {
    let d = sequential(&[0, 1, 3, 2]);
    assert_eq!(d.k(), 2);
    assert_eq!(d.tour_order(), &[0, 1, 2, 4, 3]);
    assert_eq!(d.inverse_tour_order(), &[0, 1, 2, 4, 3]);
    assert_eq!(d.added_edge_to_other_endpoint(), &[0, 4, 3, 2, 1]);
    assert!(d.is_feasible());

    let plan = plan_reversals(&d, N, |node| node);
    assert_eq!(plan.flips, vec![FlipSublistAction::new(1, 3)]);
    assert_eq!(plan.post_shift, 0);
}

#[test]
fn sequential_two_opt_wrong_orientation_splits_tour() {
    let d = sequential(&[0, 1, 2, 3]);
    assert!(!d.is_feasible());

    let cycles = d.decompose_cycles();
    assert_eq!(cycles.cycle_count(), 2);
    assert_eq!(cycles.cycle_of(2), cycles.cycle_of(3));
    assert_ne!(cycles.cycle_of(1), cycles.cycle_of(2));
}

#[test]
fn tour_order_sorts_edges_along_the_tour() {
    let d = sequential(&[4, 5, 0, 1, 7, 8]);
    assert_eq!(d.tour_order(), &[0, 1, 2, 5, 6, 3, 4]);
    assert_eq!(d.inverse_tour_order(), &[0, 1, 2, 5, 6, 3, 4]);
    assert!(d.is_feasible());

    let plan = plan_reversals(&d, N, |node| node);
    assert_eq!(
        plan.flips,
        vec![
            FlipSublistAction::new(5, 8),
            FlipSublistAction::new(5, 1),
            FlipSublistAction::new(5, 8),
        ]
    );
    assert_eq!(plan.post_shift, -7);
}

#[test]
fn reversed_edge_endpoints_are_reordered() {
    let d = sequential(&[1, 0, 5, 4, 8, 7]);
    assert_eq!(d.tour_order(), &[0, 2, 1, 4, 3, 6, 5]);
    assert!(d.is_feasible());

    let plan = plan_reversals(&d, N, |node| node);
    assert_eq!(
        plan.flips,
        vec![
            FlipSublistAction::new(1, 5),
            FlipSublistAction::new(1, 8),
            FlipSublistAction::new(1, 4),
        ]
    );
}

#[test]
fn three_cycles() {
    let d = sequential(&[0, 1, 4, 5, 7, 8]);
    assert!(!d.is_feasible());

    let cycles = d.decompose_cycles();
    assert_eq!(cycles.cycle_count(), 3);
    assert_eq!(cycles.endpoint_to_cycle(), &[0, 0, 1, 1, 2, 2, 0]);
}

#[test]
fn two_cycles_after_segment_loop() {
    let d = sequential(&[0, 1, 5, 4, 7, 8]);
    assert!(!d.is_feasible());
    assert_eq!(d.decompose_cycles().endpoint_to_cycle(), &[0, 0, 1, 1, 1, 1, 0]);
}

#[test]
fn segments_follow_tour_order() {
    let d = sequential(&[4, 5, 0, 1, 7, 8]);
    let segments: Vec<_> = d.segments().collect();
    assert_eq!(segments, vec![(2, 5), (6, 3), (4, 1)]);
    let nodes: Vec<_> = segments
        .iter()
        .map(|&(s, e)| (d.removed_edge(s), d.removed_edge(e)))
        .collect();
    assert_eq!(nodes, vec![(5, 7), (8, 0), (1, 4)]);
}

#[test]
fn explicit_added_edges() {
    let director = create_director(vec![(1..=8).collect()]);
    let (d, _) = TourMove::descriptor_from_edges(
        &director,
        &[(1, 2), (4, 3), (7, 8), (6, 5)],
        &[(2, 4), (3, 7), (8, 6), (5, 1)],
    )
    .unwrap();

    assert_eq!(d.removed_edges(), &[1, 2, 4, 3, 7, 8, 6, 5]);
    assert_eq!(d.tour_order(), &[0, 1, 2, 4, 3, 8, 7, 5, 6]);
    assert_eq!(d.inverse_tour_order(), &[0, 1, 2, 4, 3, 7, 8, 6, 5]);
    assert_eq!(d.added_edge_to_other_endpoint(), &[0, 8, 3, 2, 5, 4, 7, 6, 1]);
    assert!(d.is_feasible());
}

#[test]
fn infeasible_explicit_exchange_has_two_cycles() {
    let director = create_director(vec![vec![1, 2, 3, 4, 8, 7, 5, 6]]);
    let (d, _) = TourMove::descriptor_from_edges(
        &director,
        &[(1, 2), (3, 4), (7, 8), (6, 5)],
        &[(2, 3), (4, 7), (8, 6), (5, 1)],
    )
    .unwrap();

    assert!(!d.is_feasible());
    let cycles = d.decompose_cycles();
    assert_eq!(cycles.cycle_count(), 2);
    assert_eq!(cycles.endpoint_to_cycle(), &[0, 0, 1, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn display_lists_edges() {
    let d = sequential(&[0, 1, 3, 2]);
    assert_eq!(d.to_string(), "2-opt(removed: [0-1, 3-2], added: [0-2, 1-3])");
}

#[test]
#[should_panic(expected = "not paired")]
fn unpaired_added_table_panics() {
    KOptDescriptor::new(&[0usize, 1, 3, 2], &[0, 2, 1, 4, 4], successor, cyclic_between);
}
