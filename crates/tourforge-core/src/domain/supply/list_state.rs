//! List variable state supply for tracking element positions.
//!
//! - **Index-based**: entity owners and list positions are plain indices
//! - **Owned**: no `Arc` or interior mutability, updates take `&mut self`

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::ListVariableSolution;

/// Position of an element within a list variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementPosition {
    /// The entity index that owns the list containing this element.
    pub entity_idx: usize,
    /// The index of this element within the entity's list.
    pub list_idx: usize,
}

impl ElementPosition {
    /// Creates a position.
    #[inline]
    pub const fn new(entity_idx: usize, list_idx: usize) -> Self {
        Self {
            entity_idx,
            list_idx,
        }
    }
}

/// Index-based list variable state supply.
///
/// Tracks which entity owns each element and at what position.
///
/// # Example
///
/// ```
/// use tourforge_core::domain::{ElementPosition, ListStateSupply};
///
/// let mut supply: ListStateSupply<u32> = ListStateSupply::new();
/// supply.assign(10, 0, 0);
/// supply.assign(11, 0, 1);
/// supply.assign(20, 1, 0);
///
/// assert_eq!(supply.get_position(&11), Some(ElementPosition::new(0, 1)));
/// assert_eq!(supply.get_entity(&20), Some(1));
/// assert_eq!(supply.get_list_index(&99), None);
/// ```
#[derive(Debug, Clone)]
pub struct ListStateSupply<E>
where
    E: Eq + Hash,
{
    position_map: HashMap<E, ElementPosition>,
}

impl<E> Default for ListStateSupply<E>
where
    E: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ListStateSupply<E>
where
    E: Eq + Hash,
{
    /// Creates a new empty list state supply.
    pub fn new() -> Self {
        Self {
            position_map: HashMap::new(),
        }
    }

    /// Builds a supply indexing every list of the solution.
    pub fn from_solution<S>(solution: &S) -> Self
    where
        S: ListVariableSolution<Element = E>,
    {
        let mut supply = Self::new();
        for entity_idx in 0..solution.entity_count() {
            supply.reindex_entity(solution, entity_idx);
        }
        supply
    }

    /// Records the position of every element currently in the entity's list.
    ///
    /// Elements that left the list are not forgotten here; they are
    /// overwritten when the list that received them is re-indexed.
    pub fn reindex_entity<S>(&mut self, solution: &S, entity_idx: usize)
    where
        S: ListVariableSolution<Element = E>,
    {
        for list_idx in 0..solution.list_len(entity_idx) {
            self.assign(solution.list_get(entity_idx, list_idx), entity_idx, list_idx);
        }
    }

    /// Assigns an element to a position in an entity's list.
    #[inline]
    pub fn assign(&mut self, element: E, entity_idx: usize, list_idx: usize) {
        self.position_map
            .insert(element, ElementPosition::new(entity_idx, list_idx));
    }

    /// Unassigns an element (removes it from any list).
    #[inline]
    pub fn unassign(&mut self, element: &E) -> Option<ElementPosition> {
        self.position_map.remove(element)
    }

    /// Gets the full position of an element.
    #[inline]
    pub fn get_position(&self, element: &E) -> Option<ElementPosition> {
        self.position_map.get(element).copied()
    }

    /// Gets the entity index that owns this element.
    #[inline]
    pub fn get_entity(&self, element: &E) -> Option<usize> {
        self.position_map.get(element).map(|p| p.entity_idx)
    }

    /// Gets the list index of this element within its entity's list.
    #[inline]
    pub fn get_list_index(&self, element: &E) -> Option<usize> {
        self.position_map.get(element).map(|p| p.list_idx)
    }

    /// Returns true if the element is assigned to a list.
    #[inline]
    pub fn is_assigned(&self, element: &E) -> bool {
        self.position_map.contains_key(element)
    }

    /// Returns the count of tracked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.position_map.len()
    }

    /// Returns true if no element is tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position_map.is_empty()
    }

    /// Clears all position data.
    #[inline]
    pub fn clear(&mut self) {
        self.position_map.clear();
    }
}
