//! Cyclic sub-array reversal.
//!
//! A flip `(from, to)` reverses the half-open range `[from, to)` of a
//! sequence. When `from >= to` the range wraps: it covers `[from, len)`
//! followed by `[0, to)`, and the reversal is done as if those two pieces
//! were one contiguous run.

use smallvec::SmallVec;
use tracing::trace;

use tourforge_core::domain::ListVariableSolution;
use tourforge_scoring::ScoreDirector;

use super::multi_list::MultipleDelegateList;

/// Positional access to a sequence of copyable items.
///
/// Implemented for slices, vectors and [`MultipleDelegateList`], so the same
/// flip routine works on a plain index array and on a view spanning several
/// entity lists.
pub trait IndexedSequence {
    /// The item type.
    type Item: Copy;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Self::Item;

    /// Overwrites the item at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: Self::Item) -> Self::Item;

    /// Returns true if the sequence has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the items at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            let left = self.get(a);
            let right = self.set(b, left);
            self.set(a, right);
        }
    }
}

impl<T: Copy> IndexedSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn set(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T: Copy> IndexedSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn set(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self[index], item)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

/// Reverses `[from, to)` of `seq`, wrapping around the end when `from >= to`.
///
/// Applying the same flip twice restores the sequence.
///
/// # Example
///
/// ```
/// use tourforge_solver::heuristic::r#move::flip_subarray;
///
/// let mut tour = vec![0, 1, 2, 3, 4, 5, 6];
/// flip_subarray(&mut tour, 5, 2);
/// assert_eq!(tour, vec![6, 5, 2, 3, 4, 1, 0]);
///
/// flip_subarray(&mut tour, 1, 4);
/// assert_eq!(tour, vec![6, 3, 2, 5, 4, 1, 0]);
/// ```
pub fn flip_subarray<Q>(seq: &mut Q, from: usize, to: usize)
where
    Q: IndexedSequence + ?Sized,
{
    if from < to {
        let (mut i, mut j) = (from, to);
        while i + 1 < j {
            j -= 1;
            seq.swap(i, j);
            i += 1;
        }
        return;
    }

    let len = seq.len();
    let tail = len - from;
    let head = to;
    for i in 0..(tail + head) / 2 {
        let a = if i < tail { from + i } else { i - tail };
        let b = if i < head {
            to - i - 1
        } else {
            len - (i - head) - 1
        };
        seq.swap(a, b);
    }
}

/// A flip on the combined sequence of a fixed set of entity lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipSublistAction {
    from: usize,
    to: usize,
}

impl FlipSublistAction {
    /// Creates a flip of the combined range `[from, to)` (wrapping if `from >= to`).
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Start of the flipped range (inclusive).
    pub fn from(&self) -> usize {
        self.from
    }

    /// End of the flipped range (exclusive).
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the physical ranges this flip touches as
    /// `(entity, from, to)` triples, given the entity order and list sizes.
    pub fn affected_ranges(&self, entities: &[usize], sizes: &[usize]) -> Vec<(usize, usize, usize)> {
        let total: usize = sizes.iter().sum();
        let combined: SmallVec<[(usize, usize); 2]> = if self.from < self.to {
            smallvec::smallvec![(self.from, self.to)]
        } else {
            smallvec::smallvec![(self.from, total), (0, self.to)]
        };

        let mut ranges = Vec::new();
        for (start, end) in combined {
            let mut offset = 0;
            for (&entity, &size) in entities.iter().zip(sizes) {
                let lo = start.max(offset);
                let hi = end.min(offset + size);
                if lo < hi {
                    ranges.push((entity, lo - offset, hi - offset));
                }
                offset += size;
            }
        }
        ranges
    }

    /// Flips the combined list of `entities` in place, without notifications.
    pub fn apply<S: ListVariableSolution>(&self, solution: &mut S, entities: &[usize]) {
        let mut view = MultipleDelegateList::new(solution, entities);
        flip_subarray(&mut view, self.from, self.to);
    }

    /// Flips the combined list of `entities` through the score director.
    ///
    /// Every touched piece of every entity list is bracketed by a
    /// before/after range notification.
    pub fn execute<S, D>(&self, score_director: &mut D, entities: &[usize])
    where
        S: ListVariableSolution,
        D: ScoreDirector<S> + ?Sized,
    {
        let sizes: SmallVec<[usize; 4]> = entities
            .iter()
            .map(|&e| score_director.working_solution().list_len(e))
            .collect();
        let ranges = self.affected_ranges(entities, &sizes);
        trace!(
            event = "flip",
            from = self.from,
            to = self.to,
            ranges = ranges.len()
        );

        for &(entity, from, to) in &ranges {
            score_director.before_list_range_changed(entity, from, to);
        }
        self.apply(score_director.working_solution_mut(), entities);
        for &(entity, from, to) in &ranges {
            score_director.after_list_range_changed(entity, from, to);
        }
    }
}
