// src/strategy/traits.rs

use crate::error::Result;
use crate::model::inputs::SamplingRange;
use crate::model::results::ResultsTable;
use std::fmt::Debug;

/// Source of randomness for the simulation engine.
///
/// Swapping implementations lets tests pin the draws, and a seeded source makes
/// whole simulations reproducible. `Send` lets an engine move to a worker thread.
pub trait RandomSource: Debug + Send {
    /// Draws `count` distinct integers from the inclusive `range` (without replacement).
    ///
    /// Fails with `RangeExhausted` when the range holds fewer than `count` values.
    fn sample_distinct(&mut self, range: SamplingRange, count: usize) -> Result<Vec<i64>>;

    /// Draws `count` values from `pool` with replacement, uniformly.
    ///
    /// `pool` is never empty when called by the engine.
    fn draw_with_replacement(&mut self, pool: &[i64], count: usize) -> Vec<i64>;
}

/// Hook invoked with the finished results table, e.g. to plot it.
///
/// Observers only see complete tables; a failed simulation never reaches them.
pub trait ResultsObserver: Debug + Send {
    fn observe(&mut self, table: &ResultsTable);
}
