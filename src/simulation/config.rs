// src/simulation/config.rs

use crate::error::{ForecastError, Result};

/// Pool-size scale used when no explicit pool size is configured:
/// `floor(num_runs * LEGACY_POOL_SCALE)`.
pub const LEGACY_POOL_SCALE: f64 = 0.001;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of Monte Carlo runs, and the number of draws taken within each run.
    pub num_runs: usize,
    /// Distinct values drawn from the sampling range per run.
    /// `None` derives it from `num_runs` via [`LEGACY_POOL_SCALE`].
    pub pool_size: Option<usize>,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_runs: 10_000,
            pool_size: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_runs(num_runs: usize) -> Self {
        Self {
            num_runs,
            ..Self::default()
        }
    }

    pub fn pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The pool size a run will actually use.
    pub fn resolved_pool_size(&self) -> usize {
        self.pool_size
            .unwrap_or_else(|| (self.num_runs as f64 * LEGACY_POOL_SCALE).floor() as usize)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            return Err(ForecastError::invalid("num_runs must be at least 1"));
        }
        if self.resolved_pool_size() == 0 {
            return Err(ForecastError::invalid(format!(
                "pool size resolves to 0 for {} runs; set an explicit pool size or use at least {} runs",
                self.num_runs,
                (1.0 / LEGACY_POOL_SCALE) as usize
            )));
        }
        Ok(())
    }
}
