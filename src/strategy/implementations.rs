// src/strategy/implementations.rs

use crate::error::{ForecastError, Result};
use crate::model::inputs::SamplingRange;
use crate::strategy::traits::RandomSource;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// `RandomSource` backed by rand's `StdRng`.
///
/// Built from a seed it replays the same draws every time; built from entropy
/// it behaves like an ordinary thread RNG.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn sample_distinct(&mut self, range: SamplingRange, count: usize) -> Result<Vec<i64>> {
        let available = range.len();
        if (count as u64) > available {
            return Err(ForecastError::RangeExhausted {
                requested: count,
                available,
                start: range.start,
                end: range.end,
            });
        }

        let length = usize::try_from(available).map_err(|_| {
            ForecastError::invalid(format!(
                "sampling range [{}, {}] is too wide for this platform",
                range.start, range.end
            ))
        })?;

        Ok(index::sample(&mut self.rng, length, count)
            .into_iter()
            // offset < len, so the sum never passes range.end
            .map(|offset| (range.start as i128 + offset as i128) as i64)
            .collect())
    }

    fn draw_with_replacement(&mut self, pool: &[i64], count: usize) -> Vec<i64> {
        if pool.is_empty() {
            return Vec::new();
        }
        let pick = Uniform::new(0, pool.len());
        (0..count)
            .map(|_| pool[pick.sample(&mut self.rng)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn distinct_sample_stays_in_range_without_repeats() {
        let mut source = SeededSource::from_seed(7);
        let range = SamplingRange { start: 40, end: 60 };
        let pool = source.sample_distinct(range, 21).unwrap();

        assert_eq!(pool.len(), 21);
        let unique: HashSet<_> = pool.iter().copied().collect();
        assert_eq!(unique.len(), 21);
        assert!(pool.iter().all(|v| (40..=60).contains(v)));
    }

    #[test]
    fn oversized_pool_exhausts_range() {
        let mut source = SeededSource::from_seed(7);
        let range = SamplingRange { start: 10, end: 12 };
        let err = source.sample_distinct(range, 4).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::RangeExhausted {
                requested: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn draws_only_come_from_pool() {
        let mut source = SeededSource::from_seed(11);
        let pool = [3, 9, 27];
        let draws = source.draw_with_replacement(&pool, 500);

        assert_eq!(draws.len(), 500);
        assert!(draws.iter().all(|v| pool.contains(v)));
        // 500 draws over three values will hit each of them
        for value in pool {
            assert!(draws.contains(&value));
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let range = SamplingRange {
            start: 0,
            end: 1_000_000,
        };
        let mut a = SeededSource::from_seed(42);
        let mut b = SeededSource::from_seed(42);

        let pool_a = a.sample_distinct(range, 10).unwrap();
        let pool_b = b.sample_distinct(range, 10).unwrap();
        assert_eq!(pool_a, pool_b);
        assert_eq!(
            a.draw_with_replacement(&pool_a, 100),
            b.draw_with_replacement(&pool_b, 100)
        );
    }
}
