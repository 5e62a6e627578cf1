//! Core domain traits

use std::fmt::Debug;
use std::hash::Hash;

use crate::score::Score;

/// Marker trait for planning solutions.
///
/// A planning solution holds both the problem definition and its current
/// assignment, together with the last calculated score.
///
/// # Example
///
/// ```
/// use tourforge_core::{PlanningSolution, SimpleScore};
///
/// #[derive(Clone)]
/// struct Tour {
///     cities: Vec<u32>,
///     score: Option<SimpleScore>,
/// }
///
/// impl PlanningSolution for Tour {
///     type Score = SimpleScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score of this solution, if calculated.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);
}

/// Trait for solutions with list variables.
///
/// Each entity (a vehicle, a salesman) owns one ordered list of elements.
/// K-opt moves only ever overwrite positions or redistribute the contents
/// of a fixed set of lists, so the accessor is positional: there is no
/// insert or remove.
///
/// # Example
///
/// ```
/// use tourforge_core::{ListVariableSolution, PlanningSolution, SimpleScore};
///
/// #[derive(Clone)]
/// struct Fleet {
///     routes: Vec<Vec<u32>>,
///     score: Option<SimpleScore>,
/// }
///
/// impl PlanningSolution for Fleet {
///     type Score = SimpleScore;
///     fn score(&self) -> Option<Self::Score> { self.score }
///     fn set_score(&mut self, score: Option<Self::Score>) { self.score = score; }
/// }
///
/// impl ListVariableSolution for Fleet {
///     type Element = u32;
///
///     fn entity_count(&self) -> usize {
///         self.routes.len()
///     }
///
///     fn list_len(&self, entity_idx: usize) -> usize {
///         self.routes[entity_idx].len()
///     }
///
///     fn list_get(&self, entity_idx: usize, position: usize) -> u32 {
///         self.routes[entity_idx][position]
///     }
///
///     fn list_set(&mut self, entity_idx: usize, position: usize, elem: u32) -> u32 {
///         std::mem::replace(&mut self.routes[entity_idx][position], elem)
///     }
///
///     fn list_replace(&mut self, entity_idx: usize, elems: Vec<u32>) -> Vec<u32> {
///         std::mem::replace(&mut self.routes[entity_idx], elems)
///     }
/// }
///
/// let mut fleet = Fleet { routes: vec![vec![1, 2, 3, 4]], score: None };
/// fleet.list_reverse(0, 1, 3);
/// assert_eq!(fleet.routes[0], vec![1, 3, 2, 4]);
/// ```
pub trait ListVariableSolution: PlanningSolution {
    /// The type of elements in the lists (typically an index or ID).
    type Element: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the number of entities (list owners).
    fn entity_count(&self) -> usize;

    /// Returns the length of the list for the given entity.
    fn list_len(&self, entity_idx: usize) -> usize;

    /// Returns the element at the given position in the entity's list.
    fn list_get(&self, entity_idx: usize, position: usize) -> Self::Element;

    /// Overwrites the element at the given position, returning the previous one.
    fn list_set(&mut self, entity_idx: usize, position: usize, elem: Self::Element)
        -> Self::Element;

    /// Replaces the whole list of an entity, returning the previous contents.
    fn list_replace(&mut self, entity_idx: usize, elems: Vec<Self::Element>) -> Vec<Self::Element>;

    /// Reverses the elements in the range [start, end) of the entity's list.
    fn list_reverse(&mut self, entity_idx: usize, start: usize, end: usize) {
        let (mut i, mut j) = (start, end);
        while i + 1 < j {
            j -= 1;
            let left = self.list_get(entity_idx, i);
            let right = self.list_set(entity_idx, j, left);
            self.list_set(entity_idx, i, right);
            i += 1;
        }
    }

    /// Collects the entity's list into a vector.
    fn list_to_vec(&self, entity_idx: usize) -> Vec<Self::Element> {
        (0..self.list_len(entity_idx))
            .map(|i| self.list_get(entity_idx, i))
            .collect()
    }
}
