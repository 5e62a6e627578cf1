//! Tests for the list state supply.

use super::*;
use crate::domain::{ListVariableSolution, PlanningSolution};
use crate::score::SimpleScore;

#[derive(Clone, Debug)]
struct Routes {
    lists: Vec<Vec<u32>>,
}

impl PlanningSolution for Routes {
    type Score = SimpleScore;
    fn score(&self) -> Option<Self::Score> {
        None
    }
    fn set_score(&mut self, _score: Option<Self::Score>) {}
}

impl ListVariableSolution for Routes {
    type Element = u32;

    fn entity_count(&self) -> usize {
        self.lists.len()
    }
    fn list_len(&self, entity_idx: usize) -> usize {
        self.lists[entity_idx].len()
    }
    fn list_get(&self, entity_idx: usize, position: usize) -> u32 {
        self.lists[entity_idx][position]
    }
    fn list_set(&mut self, entity_idx: usize, position: usize, elem: u32) -> u32 {
        std::mem::replace(&mut self.lists[entity_idx][position], elem)
    }
    fn list_replace(&mut self, entity_idx: usize, elems: Vec<u32>) -> Vec<u32> {
        std::mem::replace(&mut self.lists[entity_idx], elems)
    }
}

#[test]
fn from_solution_indexes_every_list() {
    let routes = Routes {
        lists: vec![vec![1, 2, 3], vec![], vec![7, 8]],
    };
    let supply = ListStateSupply::from_solution(&routes);

    assert_eq!(supply.len(), 5);
    assert_eq!(supply.get_position(&3), Some(ElementPosition::new(0, 2)));
    assert_eq!(supply.get_position(&7), Some(ElementPosition::new(2, 0)));
    assert_eq!(supply.get_entity(&8), Some(2));
    assert!(!supply.is_assigned(&4));
}

#[test]
fn reindex_follows_moved_elements() {
    let mut routes = Routes {
        lists: vec![vec![1, 2, 3], vec![4, 5]],
    };
    let mut supply = ListStateSupply::from_solution(&routes);

    // Element 3 moves to the front of the second list.
    routes.list_replace(0, vec![1, 2]);
    routes.list_replace(1, vec![3, 4, 5]);
    supply.reindex_entity(&routes, 0);
    supply.reindex_entity(&routes, 1);

    assert_eq!(supply.get_position(&3), Some(ElementPosition::new(1, 0)));
    assert_eq!(supply.get_list_index(&5), Some(2));
    assert_eq!(supply.len(), 5);
}

#[test]
fn unassign_and_clear() {
    let mut supply: ListStateSupply<u32> = ListStateSupply::new();
    supply.assign(1, 0, 0);
    supply.assign(2, 0, 1);

    assert_eq!(supply.unassign(&1), Some(ElementPosition::new(0, 0)));
    assert_eq!(supply.unassign(&1), None);
    assert_eq!(supply.len(), 1);

    supply.clear();
    assert!(supply.is_empty());
}

#[test]
fn default_list_reverse_uses_get_and_set() {
    let mut routes = Routes {
        lists: vec![vec![1, 2, 3, 4, 5]],
    };
    routes.list_reverse(0, 1, 4);
    assert_eq!(routes.lists[0], vec![1, 4, 3, 2, 5]);
    routes.list_reverse(0, 2, 2);
    assert_eq!(routes.list_to_vec(0), vec![1, 4, 3, 2, 5]);
}
