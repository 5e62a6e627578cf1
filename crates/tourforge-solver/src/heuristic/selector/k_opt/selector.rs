//! KOptListMoveSelector - random k-opt moves within one entity's list.

use std::fmt;
use std::marker::PhantomData;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use tourforge_core::domain::ListVariableSolution;
use tourforge_scoring::ScoreDirector;

use super::config::KOptConfig;
use super::picker::KOptPicker;
use crate::heuristic::r#move::{EntityOrderInfo, KOptListMove};
use crate::heuristic::selector::MoveSelector;

/// Generates random k-opt moves.
///
/// Each move picks `k` uniformly in `min_k..=max_k`, then the next entity
/// (round-robin) whose list holds at least `2k` elements, lowering `k`
/// while no list is long enough. Edges are picked within that entity's
/// closed tour.
///
/// Up to `moves_per_step` moves are generated per call; picks that fail
/// their attempt budget are skipped.
///
/// # Example
///
/// ```
/// use tourforge_solver::heuristic::r#move::Move;
/// use tourforge_solver::heuristic::selector::{KOptConfig, KOptListMoveSelector, MoveSelector};
/// use tourforge_test::{create_director, TourSolution};
///
/// let director = create_director(vec![(1..=20).collect()]);
/// let selector = KOptListMoveSelector::<TourSolution>::new(
///     KOptConfig::with_range(2, 3).with_seed(7),
/// );
///
/// for m in selector.iter_moves(&director) {
///     assert!(m.is_doable(&director));
/// }
/// ```
pub struct KOptListMoveSelector<S> {
    config: KOptConfig,
    _phantom: PhantomData<fn() -> S>,
}

impl<S> fmt::Debug for KOptListMoveSelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KOptListMoveSelector")
            .field("config", &self.config)
            .finish()
    }
}

impl<S: ListVariableSolution> KOptListMoveSelector<S> {
    /// Creates a new k-opt move selector.
    pub fn new(config: KOptConfig) -> Self {
        Self {
            config,
            _phantom: PhantomData,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &KOptConfig {
        &self.config
    }

    fn create_rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    // Next entity, starting at `cursor`, whose list holds at least `min_len` elements.
    fn next_entity(solution: &S, cursor: &mut usize, min_len: usize) -> Option<usize> {
        let count = solution.entity_count();
        (0..count)
            .map(|offset| (*cursor + offset) % count)
            .find(|&entity| solution.list_len(entity) >= min_len)
            .inspect(|&entity| *cursor = entity + 1)
    }

    fn pick_move<D, R>(&self, score_director: &D, rng: &mut R, cursor: &mut usize) -> Option<KOptListMove<S>>
    where
        D: ScoreDirector<S> + ?Sized,
        R: Rng,
    {
        let solution = score_director.working_solution();
        let mut k = rng.random_range(self.config.min_k..=self.config.max_k);
        let entity = loop {
            if k < 2 {
                return None;
            }
            if let Some(entity) = Self::next_entity(solution, cursor, 2 * k) {
                break entity;
            }
            k -= 1;
        };

        let order = EntityOrderInfo::for_entity(solution, entity);
        let mut picker = KOptPicker::new(
            score_director,
            order.clone(),
            rng,
            self.config.max_cycles_patched,
        );
        let Some(descriptor) = picker.pick_descriptor(k) else {
            trace!(event = "k_opt_pick_failed", k, entity);
            return None;
        };

        match KOptListMove::from_descriptor(score_director, &descriptor, &order) {
            Ok(m) if m.is_executable() => Some(m),
            Ok(_) => None,
            Err(err) => {
                trace!(event = "k_opt_pick_failed", k, entity, error = %err);
                None
            }
        }
    }
}

impl<S: ListVariableSolution> MoveSelector<S, KOptListMove<S>> for KOptListMoveSelector<S> {
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> impl Iterator<Item = KOptListMove<S>> + 'a {
        let mut rng = self.create_rng();
        let mut cursor = 0;
        let moves: Vec<_> = (0..self.config.moves_per_step)
            .filter_map(|_| self.pick_move(score_director, &mut rng, &mut cursor))
            .collect();
        moves.into_iter()
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let solution = score_director.working_solution();
        let has_route = (0..solution.entity_count()).any(|entity| solution.list_len(entity) >= 4);
        if has_route {
            self.config.moves_per_step
        } else {
            0
        }
    }

    fn is_never_ending(&self) -> bool {
        false
    }
}
