//! Combined ordering of the entities touched by a k-opt move.
//!
//! A move over several lists treats them as one cyclic tour: the lists are
//! concatenated in a fixed entity order, the last element of one list is
//! followed by the first element of the next, and the last list wraps back
//! to the first.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use tourforge_core::domain::{ElementPosition, ListVariableSolution};
use tourforge_core::{Result, TourForgeError};
use tourforge_scoring::ScoreDirector;

/// Entity order, offsets and sizes of a combined tour.
///
/// The sizes are captured when the info is built; it describes the lists as
/// they were at that moment.
pub struct EntityOrderInfo<S: ListVariableSolution> {
    entities: SmallVec<[usize; 4]>,
    offsets: SmallVec<[usize; 4]>,
    sizes: SmallVec<[usize; 4]>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S: ListVariableSolution> Clone for EntityOrderInfo<S> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
            offsets: self.offsets.clone(),
            sizes: self.sizes.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S: ListVariableSolution> fmt::Debug for EntityOrderInfo<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityOrderInfo")
            .field("entities", &self.entities)
            .field("offsets", &self.offsets)
            .field("sizes", &self.sizes)
            .finish()
    }
}

impl<S: ListVariableSolution> EntityOrderInfo<S> {
    /// Builds the order of the given entities. Duplicates and empty lists are skipped.
    pub fn from_entities(solution: &S, entities: &[usize]) -> Self {
        let mut info = Self {
            entities: SmallVec::new(),
            offsets: SmallVec::new(),
            sizes: SmallVec::new(),
            _phantom: PhantomData,
        };
        let mut offset = 0;
        for &entity in entities {
            let size = solution.list_len(entity);
            if size == 0 || info.entities.contains(&entity) {
                continue;
            }
            info.entities.push(entity);
            info.offsets.push(offset);
            info.sizes.push(size);
            offset += size;
        }
        info
    }

    /// Builds the order of a single entity's list.
    pub fn for_entity(solution: &S, entity: usize) -> Self {
        Self::from_entities(solution, &[entity])
    }

    /// Builds the order of the entities owning `elements`, in order of first
    /// appearance.
    ///
    /// Fails with `InvalidState` if an element is not in any list.
    pub fn of<D>(score_director: &D, elements: &[S::Element]) -> Result<Self>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let mut entities: SmallVec<[usize; 4]> = SmallVec::new();
        for element in elements {
            let position = score_director.element_position(element).ok_or_else(|| {
                TourForgeError::InvalidState(format!(
                    "element {element:?} is not assigned to any list"
                ))
            })?;
            if !entities.contains(&position.entity_idx) {
                entities.push(position.entity_idx);
            }
        }
        Ok(Self::from_entities(
            score_director.working_solution(),
            &entities,
        ))
    }

    /// Entities in combined order.
    pub fn entities(&self) -> &[usize] {
        &self.entities
    }

    /// Start of each entity's list within the combined tour.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Size of each entity's list.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of entities in the order.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Total number of elements in the combined tour.
    pub fn total_len(&self) -> usize {
        self.offsets.last().zip(self.sizes.last()).map_or(0, |(o, s)| o + s)
    }

    /// Combined index of the last element of each entity.
    pub fn end_indices(&self) -> SmallVec<[usize; 4]> {
        self.offsets
            .iter()
            .zip(&self.sizes)
            .map(|(offset, size)| offset + size - 1)
            .collect()
    }

    /// Maps a list position to its combined index, if its entity is part of the order.
    pub fn combined_index(&self, position: ElementPosition) -> Option<usize> {
        let slot = self
            .entities
            .iter()
            .position(|&e| e == position.entity_idx)?;
        (position.list_idx < self.sizes[slot]).then(|| self.offsets[slot] + position.list_idx)
    }

    /// Maps a combined index back to a list position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.total_len()`.
    pub fn position_at(&self, index: usize) -> ElementPosition {
        assert!(index < self.total_len(), "combined index {index} out of bounds");
        let slot = self.offsets.partition_point(|&offset| offset <= index) - 1;
        ElementPosition::new(self.entities[slot], index - self.offsets[slot])
    }

    /// Returns the element at a combined index.
    pub fn element_at(&self, solution: &S, index: usize) -> S::Element {
        let position = self.position_at(index);
        solution.list_get(position.entity_idx, position.list_idx)
    }

    /// Returns the combined index of an element.
    pub fn index_of<D>(&self, score_director: &D, element: &S::Element) -> Option<usize>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        self.combined_index(score_director.element_position(element)?)
    }

    /// Returns the element following `element` in the combined tour.
    pub fn successor<D>(&self, score_director: &D, element: S::Element) -> Option<S::Element>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let index = self.index_of(score_director, &element)?;
        let next = (index + 1) % self.total_len();
        Some(self.element_at(score_director.working_solution(), next))
    }

    /// Returns the element preceding `element` in the combined tour.
    pub fn predecessor<D>(&self, score_director: &D, element: S::Element) -> Option<S::Element>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let index = self.index_of(score_director, &element)?;
        let total = self.total_len();
        let previous = (index + total - 1) % total;
        Some(self.element_at(score_director.working_solution(), previous))
    }

    /// Returns true if walking forward from `start` reaches `middle` no later
    /// than `end`. Elements outside the order are never between.
    pub fn between<D>(
        &self,
        score_director: &D,
        start: S::Element,
        middle: S::Element,
        end: S::Element,
    ) -> bool
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let lookup = |element: &S::Element| self.index_of(score_director, element);
        match (lookup(&start), lookup(&middle), lookup(&end)) {
            (Some(s), Some(m), Some(e)) => cyclic_between(s, m, e),
            _ => false,
        }
    }
}

/// Cyclic betweenness on indices: `m` lies on the forward walk from `s` to `e`.
pub fn cyclic_between(s: usize, m: usize, e: usize) -> bool {
    if s <= e {
        s <= m && m <= e
    } else {
        m >= s || m <= e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge_test::{create_director, TourSolution};

    #[test]
    fn order_follows_first_appearance() {
        let director = create_director(vec![vec![1, 2], vec![3, 4, 5], vec![6]]);
        let order = EntityOrderInfo::<TourSolution>::of(&director, &[4, 1, 5]).unwrap();

        assert_eq!(order.entities(), &[1, 0]);
        assert_eq!(order.offsets(), &[0, 3]);
        assert_eq!(order.total_len(), 5);
        assert_eq!(order.end_indices().as_slice(), &[2, 4]);
    }

    #[test]
    fn successor_and_predecessor_cross_entities() {
        let director = create_director(vec![vec![1, 2], vec![3, 4, 5]]);
        let order = EntityOrderInfo::<TourSolution>::of(&director, &[1, 3]).unwrap();

        assert_eq!(order.successor(&director, 2), Some(3));
        assert_eq!(order.successor(&director, 5), Some(1));
        assert_eq!(order.predecessor(&director, 1), Some(5));
        assert_eq!(order.predecessor(&director, 3), Some(2));
    }

    #[test]
    fn between_wraps() {
        let director = create_director(vec![vec![1, 2, 3, 4, 5]]);
        let order = EntityOrderInfo::<TourSolution>::for_entity(director.working_solution(), 0);

        assert!(order.between(&director, 2, 3, 4));
        assert!(!order.between(&director, 2, 5, 4));
        assert!(order.between(&director, 4, 1, 2));
        assert!(order.between(&director, 4, 4, 2));
        assert!(!order.between(&director, 4, 3, 2));
    }

    #[test]
    fn unknown_element_is_rejected() {
        let director = create_director(vec![vec![1, 2]]);
        let result = EntityOrderInfo::<TourSolution>::of(&director, &[9]);
        assert!(matches!(result, Err(TourForgeError::InvalidState(_))));
    }
}
