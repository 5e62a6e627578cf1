//! Stable sorting of an index sub-range.

use std::cmp::Ordering;

/// Stably sorts `array[from..to]` with `compare`, leaving the rest untouched.
///
/// Items that compare equal keep their relative order.
///
/// # Panics
///
/// Panics if `from > to` or `to > array.len()`.
pub fn stable_sort_range<T, F>(array: &mut [T], from: usize, to: usize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    array[from..to].sort_by(compare);
}

/// Orders nodes by how soon they are reached walking forward from `anchor`.
///
/// Identical nodes compare equal, which keeps the ordering total for the
/// stable sort.
pub fn tour_position_order<N, B>(anchor: N, between: B) -> impl Fn(&N, &N) -> Ordering
where
    N: Copy + PartialEq,
    B: Fn(N, N, N) -> bool,
{
    move |&a, &b| {
        if a == b {
            Ordering::Equal
        } else if between(anchor, a, b) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::heuristic::r#move::k_opt::order::cyclic_between;

    #[test]
    fn sorts_only_the_range() {
        let mut values = [9, 5, 3, 4, 1, 0];
        stable_sort_range(&mut values, 1, 5, |a, b| a.cmp(b));
        assert_eq!(values, [9, 1, 3, 4, 5, 0]);
    }

    #[test]
    fn tour_position_order_starts_at_anchor() {
        let mut nodes = [2, 7, 5, 0];
        let order = tour_position_order(4usize, cyclic_between);
        nodes.sort_by(|a, b| order(a, b));
        assert_eq!(nodes, [5, 7, 0, 2]);
    }

    proptest! {
        #[test]
        fn equal_keys_keep_their_order(
            mut keyed in prop::collection::vec((0u8..4, any::<u32>()), 0..40),
            from in 0usize..40,
            len in 0usize..40,
        ) {
            let from = from.min(keyed.len());
            let to = (from + len).min(keyed.len());
            let original = keyed.clone();
            stable_sort_range(&mut keyed, from, to, |a, b| a.0.cmp(&b.0));

            prop_assert_eq!(&keyed[..from], &original[..from]);
            prop_assert_eq!(&keyed[to..], &original[to..]);
            for key in 0u8..4 {
                let before: Vec<_> = original[from..to].iter().filter(|e| e.0 == key).collect();
                let after: Vec<_> = keyed[from..to].iter().filter(|e| e.0 == key).collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
