//! K-opt configuration.

use tourforge_config::EngineConfig;

/// Configuration for k-opt move generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KOptConfig {
    /// Smallest k picked.
    pub min_k: usize,
    /// Largest k picked.
    pub max_k: usize,
    /// Largest cycle count of an infeasible pick that is still patched.
    pub max_cycles_patched: usize,
    /// Number of moves generated per step.
    pub moves_per_step: usize,
    /// Random seed for reproducible picking.
    pub seed: Option<u64>,
}

impl KOptConfig {
    /// Creates a configuration picking exactly `k` edges.
    ///
    /// # Panics
    ///
    /// Panics if k < 2.
    pub fn new(k: usize) -> Self {
        Self::with_range(k, k)
    }

    /// Creates a configuration picking between `min_k` and `max_k` edges.
    ///
    /// # Panics
    ///
    /// Panics if min_k < 2 or max_k < min_k.
    pub fn with_range(min_k: usize, max_k: usize) -> Self {
        assert!(min_k >= 2, "min_k must be at least 2");
        assert!(max_k >= min_k, "max_k must not be below min_k");
        Self {
            min_k,
            max_k,
            max_cycles_patched: max_k,
            moves_per_step: 10,
            seed: None,
        }
    }

    /// Builds the runtime configuration from an engine configuration.
    ///
    /// Reproducible mode always seeds the selector.
    ///
    /// # Panics
    ///
    /// Panics if the k range is invalid; configurations loaded through
    /// `EngineConfig` are validated already.
    pub fn from_selector_config(config: &EngineConfig) -> Self {
        let k_opt = &config.k_opt;
        Self {
            max_cycles_patched: k_opt.max_cycles_patched(),
            moves_per_step: k_opt.moves_per_step,
            seed: config.effective_seed(),
            ..Self::with_range(k_opt.min_k, k_opt.max_k)
        }
    }

    /// Sets the largest patchable cycle count.
    pub fn with_max_cycles_patched(mut self, cycles: usize) -> Self {
        self.max_cycles_patched = cycles;
        self
    }

    /// Sets the number of moves generated per step.
    pub fn with_moves_per_step(mut self, moves: usize) -> Self {
        self.moves_per_step = moves;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for KOptConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
