//! Tests for KOptListMove across several lists.

use super::*;
use tourforge_test::NotificationLog;

#[test]
fn two_opt_across_two_routes() {
    let routes = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
    let director = create_director(routes.clone());
    let m = build_move(&director, &[(2, 3), (6, 7)], &[(2, 6), (3, 7)]);

    assert_eq!(m.affected_entities(), &[0, 1]);
    assert_eq!(m.flips(), &[FlipSublistAction::new(2, 6)]);
    assert_eq!(m.post_shift(), 0);
    assert_do_undo(routes, &m, vec![vec![1, 2, 6, 5, 4], vec![3, 7, 8]]);
}

#[test]
fn three_opt_across_two_routes() {
    let routes = vec![vec![1, 2, 3, 6], vec![4, 5]];
    let director = create_director(routes.clone());
    let m = build_move(
        &director,
        &[(6, 1), (2, 3), (4, 5)],
        &[(1, 3), (2, 5), (4, 6)],
    );

    assert_eq!(
        m.flips(),
        &[
            FlipSublistAction::new(0, 2),
            FlipSublistAction::new(1, 5),
            FlipSublistAction::new(1, 3),
        ]
    );
    assert_eq!(m.post_shift(), -4);
    assert_do_undo(routes, &m, vec![vec![1, 5], vec![2, 6, 4, 3]]);
}

#[test]
fn four_opt_across_three_routes() {
    let routes = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
    let director = create_director(routes.clone());
    let m = build_move(
        &director,
        &[(2, 3), (7, 8), (9, 10), (11, 12)],
        &[(11, 3), (12, 7), (2, 9), (10, 8)],
    );

    assert_eq!(
        m.flips(),
        &[
            FlipSublistAction::new(2, 9),
            FlipSublistAction::new(4, 11),
            FlipSublistAction::new(4, 6),
        ]
    );
    assert_do_undo(
        routes,
        &m,
        vec![vec![1, 2, 9, 8], vec![10, 11, 3, 4], vec![5, 6, 7, 12]],
    );
}

#[test]
fn entity_order_follows_first_endpoint() {
    let routes = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
    let director = create_director(routes.clone());
    let m = build_move(&director, &[(6, 7), (2, 3)], &[(6, 2), (7, 3)]);

    assert_eq!(m.affected_entities(), &[1, 0]);
    assert!(m.is_executable());
    assert_do_undo(routes, &m, vec![vec![7, 3, 4], vec![5, 6, 2, 1, 8]]);
}

#[test]
fn unrelated_routes_are_untouched() {
    let routes = vec![vec![1, 2, 3, 4], vec![20, 21], vec![5, 6, 7, 8]];
    let director = create_director(routes.clone());
    let m = build_move(&director, &[(2, 3), (6, 7)], &[(2, 6), (3, 7)]);

    assert_eq!(m.affected_entities(), &[0, 2]);
    assert_do_undo(
        routes,
        &m,
        vec![vec![1, 2, 6, 5, 4], vec![20, 21], vec![3, 7, 8]],
    );
}

#[test]
fn redistribution_notifies_every_entity() {
    let mut director = create_director(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    let m = build_move(&director, &[(2, 3), (6, 7)], &[(2, 6), (3, 7)]);
    {
        let mut log = NotificationLog::new(&mut director);
        m.execute(&mut log);
        assert_eq!(log.befores(), vec![(0, 2, 4), (1, 0, 2), (0, 0, 4), (1, 0, 4)]);
        assert_eq!(log.afters(), vec![(0, 2, 4), (1, 0, 2), (0, 0, 5), (1, 0, 3)]);
    }
    assert_positions_consistent(&director);
}

#[test]
fn undo_registers_on_recording_director() {
    let mut director = create_director(vec![vec![1, 2, 3, 6], vec![4, 5]]);
    let m = build_move(
        &director,
        &[(6, 1), (2, 3), (4, 5)],
        &[(1, 3), (2, 5), (4, 6)],
    );
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        m.do_move(&mut recording);
        assert_eq!(recording.change_count(), 1);
        assert_eq!(recording.modified_entities(), &[0, 1]);
        recording.undo_changes();
    }
    assert_eq!(
        director.working_solution().routes,
        vec![vec![1, 2, 3, 6], vec![4, 5]]
    );
    assert_positions_consistent(&director);
}

#[test]
fn rebase_follows_entities_to_their_new_indices() {
    let director = create_director(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    let m = build_move(&director, &[(2, 3), (6, 7)], &[(2, 6), (3, 7)]);

    let mut destination = create_director(vec![vec![5, 6, 7, 8], vec![20], vec![1, 2, 3, 4]]);
    let rebased = m.rebase(&destination).unwrap();
    assert_eq!(rebased.affected_entities(), &[2, 0]);
    rebased.execute(&mut destination);
    assert_eq!(
        destination.working_solution().routes,
        vec![vec![3, 7, 8], vec![20], vec![1, 2, 6, 5, 4]]
    );
    assert_positions_consistent(&destination);

    let merged = create_director(vec![(1..=8).collect()]);
    assert!(matches!(m.rebase(&merged), Err(TourForgeError::InvalidState(_))));
}

#[test]
fn rebased_undo_restores_swapped_layout() {
    let mut director = create_director(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    let m = build_move(&director, &[(2, 3), (6, 7)], &[(2, 6), (3, 7)]);
    m.execute(&mut director);
    assert_eq!(
        director.working_solution().routes,
        vec![vec![1, 2, 6, 5, 4], vec![3, 7, 8]]
    );

    let mut swapped = create_director(vec![vec![3, 7, 8], vec![1, 2, 6, 5, 4]]);
    let undo = m.undo_move().rebase(&swapped).unwrap();
    assert_eq!(undo.affected_entities(), &[1, 0]);
    undo.execute(&mut swapped);
    assert_eq!(
        swapped.working_solution().routes,
        vec![vec![5, 6, 7, 8], vec![1, 2, 3, 4]]
    );
}
