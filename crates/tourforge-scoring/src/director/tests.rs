//! Tests for the director module.

use tourforge_core::score::SimpleScore;
use tourforge_core::domain::ElementPosition;
use tourforge_test::{tour_length, TourSolution};

use crate::director::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};

fn director(
    routes: Vec<Vec<u32>>,
) -> SimpleScoreDirector<TourSolution, fn(&TourSolution) -> SimpleScore> {
    SimpleScoreDirector::new(TourSolution::new(routes), tour_length)
}

#[test]
fn simple_director_caches_until_notified() {
    let mut sd = director(vec![vec![0, 1, 2, 3]]);

    // 1 + 1 + 1 + 3 back to the start
    assert_eq!(sd.calculate_score(), SimpleScore::of(-6));
    assert_eq!(sd.working_solution().score, Some(SimpleScore::of(-6)));

    sd.before_list_range_changed(0, 1, 3);
    sd.working_solution_mut().routes[0].swap(1, 2);
    sd.after_list_range_changed(0, 1, 3);

    // 2 + 1 + 2 + 3
    assert_eq!(sd.calculate_score(), SimpleScore::of(-8));
}

#[test]
fn simple_director_tracks_positions_across_entities() {
    let mut sd = director(vec![vec![1, 2, 3], vec![4, 5]]);
    assert_eq!(sd.element_position(&4), Some(ElementPosition::new(1, 0)));

    sd.before_list_range_changed(0, 0, 3);
    sd.before_list_range_changed(1, 0, 2);
    sd.working_solution_mut().routes = vec![vec![1, 2], vec![3, 4, 5]];
    sd.after_list_range_changed(0, 0, 2);
    sd.after_list_range_changed(1, 0, 3);

    assert_eq!(sd.element_position(&3), Some(ElementPosition::new(1, 0)));
    assert_eq!(sd.element_position(&5), Some(ElementPosition::new(1, 2)));
    assert_eq!(sd.list_state().len(), 5);
    assert_eq!(sd.lookup_working_element(5), Some(5));
    assert_eq!(sd.lookup_working_element(9), None);
}

#[test]
fn removed_elements_lose_their_position() {
    let mut sd = director(vec![vec![1, 2, 3], vec![4]]);

    sd.before_list_range_changed(0, 0, 3);
    sd.working_solution_mut().routes[0] = vec![3, 1];
    sd.after_list_range_changed(0, 0, 2);

    assert_eq!(sd.element_position(&2), None);
    assert_eq!(sd.lookup_working_element(2), None);
    assert_eq!(sd.element_position(&1), Some(ElementPosition::new(0, 1)));
    assert_eq!(sd.element_position(&4), Some(ElementPosition::new(1, 0)));
    assert_eq!(sd.list_state().len(), 3);

    let solution = sd.into_working_solution();
    assert_eq!(solution.routes, vec![vec![3, 1], vec![4]]);
}

#[test]
fn reset_rebuilds_positions() {
    let mut sd = director(vec![vec![1, 2, 3]]);
    sd.working_solution_mut().routes[0].reverse();
    assert_eq!(sd.element_position(&1), Some(ElementPosition::new(0, 0)));

    sd.reset();
    assert_eq!(sd.element_position(&1), Some(ElementPosition::new(0, 2)));
}

#[test]
fn recording_undo_restores_lists_and_positions() {
    let mut sd = director(vec![vec![1, 2, 3, 4], vec![5, 6]]);
    let original_score = sd.calculate_score();

    {
        let mut recording = RecordingScoreDirector::new(&mut sd);

        recording.before_list_range_changed(0, 0, 4);
        recording.before_list_range_changed(1, 0, 2);
        let old_first = recording
            .working_solution_mut()
            .routes[0]
            .split_off(2);
        recording.working_solution_mut().routes[1].extend(old_first);
        recording.after_list_range_changed(0, 0, 2);
        recording.after_list_range_changed(1, 0, 4);
        recording.register_undo(Box::new(|s: &mut TourSolution| {
            let moved = s.routes[1].split_off(2);
            s.routes[0].extend(moved);
        }));

        assert_eq!(recording.change_count(), 1);
        assert_eq!(recording.modified_entities(), &[0, 1]);
        assert_eq!(recording.working_solution().routes, vec![vec![1, 2], vec![5, 6, 3, 4]]);
        assert_eq!(recording.element_position(&4), Some(ElementPosition::new(1, 3)));

        recording.undo_changes();
        assert!(recording.is_empty());
        assert!(recording.modified_entities().is_empty());
    }

    assert_eq!(sd.working_solution().routes, vec![vec![1, 2, 3, 4], vec![5, 6]]);
    assert_eq!(sd.element_position(&4), Some(ElementPosition::new(0, 3)));
    assert_eq!(sd.calculate_score(), original_score);
}

#[test]
fn recording_runs_undo_in_reverse_order() {
    let mut sd = director(vec![vec![1, 2, 3]]);

    {
        let mut recording = RecordingScoreDirector::new(&mut sd);
        for value in [7, 8] {
            recording.before_list_range_changed(0, 0, 1);
            let old = std::mem::replace(&mut recording.working_solution_mut().routes[0][0], value);
            recording.after_list_range_changed(0, 0, 1);
            recording.register_undo(Box::new(move |s: &mut TourSolution| {
                s.routes[0][0] = old;
            }));
        }
        assert_eq!(recording.working_solution().routes[0][0], 8);

        recording.undo_changes();
    }

    assert_eq!(sd.working_solution().routes[0], vec![1, 2, 3]);
}
