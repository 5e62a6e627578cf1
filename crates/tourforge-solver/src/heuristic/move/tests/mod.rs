//! Tests for the move module.

use super::*;
use tourforge_core::domain::ListVariableSolution;
use tourforge_core::TourForgeError;
use tourforge_scoring::{RecordingScoreDirector, ScoreDirector};
use tourforge_test::{create_director, TourDirector, TourSolution};

mod descriptor;
mod multi_entity;

type TourMove = KOptListMove<TourSolution>;

fn build_move(director: &TourDirector, removed: &[(u32, u32)], added: &[(u32, u32)]) -> TourMove {
    TourMove::from_removed_and_added_edges(director, removed, added).unwrap()
}

// Applies the move, checks the result, then undoes it and checks the
// original lists are back.
fn assert_do_undo(routes: Vec<Vec<u32>>, m: &TourMove, expected: Vec<Vec<u32>>) {
    let mut director = create_director(routes.clone());
    assert!(m.is_doable(&director));
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        m.do_move(&mut recording);
        assert_eq!(recording.working_solution().routes, expected);
        recording.undo_changes();
    }
    assert_eq!(director.working_solution().routes, routes);
}

// Element positions reported by the director match the lists.
fn assert_positions_consistent(director: &TourDirector) {
    let solution = director.working_solution();
    for entity in 0..solution.entity_count() {
        for (i, element) in solution.routes[entity].iter().enumerate() {
            let position = director.element_position(element).unwrap();
            assert_eq!((position.entity_idx, position.list_idx), (entity, i));
        }
    }
}
