//! A view over several entity lists concatenated into one sequence.

use std::fmt;

use smallvec::SmallVec;

use tourforge_core::domain::ListVariableSolution;

use super::flip::IndexedSequence;

/// Mutable view over the lists of a fixed set of entities, in the given
/// order, behaving as one contiguous sequence.
///
/// Index `i` of the view maps to the entity whose offset is the greatest
/// offset not exceeding `i`. Empty lists occupy no index.
///
/// # Example
///
/// ```
/// use tourforge_solver::heuristic::r#move::MultipleDelegateList;
/// use tourforge_test::TourSolution;
///
/// let mut solution = TourSolution::new(vec![vec![1, 2, 3], vec![4, 5]]);
/// let mut view = MultipleDelegateList::new(&mut solution, &[1, 0]);
///
/// assert_eq!(view.len(), 5);
/// assert_eq!(view.get(0), 4);
/// assert_eq!(view.get(2), 1);
///
/// view.rotate(1);
/// assert_eq!(view.to_vec(), vec![3, 4, 5, 1, 2]);
/// assert_eq!(solution.routes, vec![vec![5, 1, 2], vec![3, 4]]);
/// ```
pub struct MultipleDelegateList<'a, S: ListVariableSolution> {
    solution: &'a mut S,
    entities: SmallVec<[usize; 4]>,
    offsets: SmallVec<[usize; 4]>,
    delegate_sizes: SmallVec<[usize; 4]>,
    total_size: usize,
}

impl<'a, S: ListVariableSolution> MultipleDelegateList<'a, S> {
    /// Creates a view over the lists of `entities`, in that order.
    pub fn new(solution: &'a mut S, entities: &[usize]) -> Self {
        let mut view = Self {
            solution,
            entities: SmallVec::from_slice(entities),
            offsets: SmallVec::new(),
            delegate_sizes: SmallVec::new(),
            total_size: 0,
        };
        view.refresh_sizes();
        view
    }

    fn refresh_sizes(&mut self) {
        self.offsets.clear();
        self.delegate_sizes.clear();
        let mut offset = 0;
        for &entity in &self.entities {
            let size = self.solution.list_len(entity);
            self.offsets.push(offset);
            self.delegate_sizes.push(size);
            offset += size;
        }
        self.total_size = offset;
    }

    /// Returns the total number of elements across all delegates.
    pub fn len(&self) -> usize {
        self.total_size
    }

    /// Returns true if every delegate list is empty.
    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    /// The entities backing this view, in order.
    pub fn entities(&self) -> &[usize] {
        &self.entities
    }

    /// Start index of each delegate within the view.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Current size of each delegate.
    pub fn delegate_sizes(&self) -> &[usize] {
        &self.delegate_sizes
    }

    /// Maps a view index to `(delegate, index within that delegate's list)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn delegate_for_index(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.total_size,
            "index {index} out of bounds for view of length {}",
            self.total_size
        );
        let delegate = self.offsets.partition_point(|&offset| offset <= index) - 1;
        (delegate, index - self.offsets[delegate])
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> S::Element {
        let (delegate, local) = self.delegate_for_index(index);
        self.solution.list_get(self.entities[delegate], local)
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, element: S::Element) -> S::Element {
        let (delegate, local) = self.delegate_for_index(index);
        self.solution
            .list_set(self.entities[delegate], local, element)
    }

    /// Copies the elements of `[from, to)`.
    pub fn sub_range(&self, from: usize, to: usize) -> Vec<S::Element> {
        (from..to).map(|i| self.get(i)).collect()
    }

    /// Copies the whole view.
    pub fn to_vec(&self) -> Vec<S::Element> {
        self.entities
            .iter()
            .flat_map(|&entity| self.solution.list_to_vec(entity))
            .collect()
    }

    /// Rotates the view so that the element at index `i` moves to
    /// `(i + shift) mod len`. Delegate sizes are kept.
    pub fn rotate(&mut self, shift: isize) {
        if self.total_size == 0 {
            return;
        }
        let mut all = self.to_vec();
        all.rotate_right(shift.rem_euclid(self.total_size as isize) as usize);
        let sizes = self.delegate_sizes.clone();
        self.write_back(all, &sizes);
    }

    /// Redistributes the view across the delegates so that delegate `j`
    /// ends (inclusive) at `end_indices[j]`. The element order is kept.
    ///
    /// # Panics
    ///
    /// Panics unless there is one strictly increasing end index per delegate
    /// and the last one is `len - 1`.
    pub fn move_elements_of_delegates(&mut self, end_indices: &[usize]) {
        assert_eq!(end_indices.len(), self.entities.len());
        assert!(
            end_indices.last().map(|&e| e + 1) == Some(self.total_size),
            "last end index must close the view"
        );
        let mut sizes: SmallVec<[usize; 4]> = SmallVec::with_capacity(end_indices.len());
        let mut start = 0;
        for &end in end_indices {
            assert!(end + 1 >= start, "end indices must be increasing");
            sizes.push(end + 1 - start);
            start = end + 1;
        }
        let all = self.to_vec();
        self.write_back(all, &sizes);
    }

    fn write_back(&mut self, all: Vec<S::Element>, sizes: &[usize]) {
        let mut rest = all.as_slice();
        for (&entity, &size) in self.entities.iter().zip(sizes) {
            let (chunk, tail) = rest.split_at(size);
            self.solution.list_replace(entity, chunk.to_vec());
            rest = tail;
        }
        self.refresh_sizes();
    }
}

impl<S: ListVariableSolution> IndexedSequence for MultipleDelegateList<'_, S> {
    type Item = S::Element;

    fn len(&self) -> usize {
        self.total_size
    }

    fn get(&self, index: usize) -> S::Element {
        MultipleDelegateList::get(self, index)
    }

    fn set(&mut self, index: usize, item: S::Element) -> S::Element {
        MultipleDelegateList::set(self, index, item)
    }
}

impl<S: ListVariableSolution> fmt::Debug for MultipleDelegateList<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleDelegateList")
            .field("entities", &self.entities)
            .field("offsets", &self.offsets)
            .field("delegate_sizes", &self.delegate_sizes)
            .field("elements", &self.to_vec())
            .finish()
    }
}
