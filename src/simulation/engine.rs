// src/simulation/engine.rs

use crate::error::Result;
use crate::model::inputs::{ForecastInputs, SamplingRange};
use crate::model::results::{round_cents, ResultsTable, RunResult};
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::SeededSource;
use crate::strategy::traits::{RandomSource, ResultsObserver};
use tracing::{debug, info};

/// Monte Carlo forecast of sales and cost of sales.
///
/// Each run draws a pool of distinct integers from the sampling range, resamples
/// `num_runs` values from that pool with replacement, and records the sample's
/// mean sales and mean cost of sales.
pub struct SalesSimulation {
    config: SimulationConfig,
    inputs: ForecastInputs,
    source: Box<dyn RandomSource>,
    observers: Vec<Box<dyn ResultsObserver>>,
}

impl SalesSimulation {
    pub fn new(
        config: SimulationConfig,
        inputs: ForecastInputs,
        source: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            inputs,
            source,
            observers: Vec::new(),
        }
    }

    /// Engine whose random source follows `config.seed`.
    pub fn from_config(config: SimulationConfig, inputs: ForecastInputs) -> Self {
        let source = SeededSource::from_optional_seed(config.seed);
        Self::new(config, inputs, Box::new(source))
    }

    /// Registers a hook that receives the finished table (plotting, logging, ...).
    pub fn with_observer(mut self, observer: Box<dyn ResultsObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn inputs(&self) -> &ForecastInputs {
        &self.inputs
    }

    /// Runs every simulation and returns the complete table.
    ///
    /// Nothing is returned, and no observer is called, if any run fails.
    pub fn run(&mut self) -> Result<ResultsTable> {
        self.inputs.validate()?;
        self.config.validate()?;

        let num_runs = self.config.num_runs;
        let pool_size = self.config.resolved_pool_size();
        let range = self.inputs.sampling_range()?;
        info!(
            num_runs,
            pool_size,
            baseline = self.inputs.baseline_target(),
            start = range.start,
            end = range.end,
            "starting sales simulation"
        );

        let mut table = ResultsTable::with_capacity(num_runs);
        for run in 0..num_runs {
            let row = self.step(range, pool_size)?;
            if run % 1000 == 0 {
                debug!(run, sales = row.sales, cos = row.cost_of_sales, "run complete");
            }
            table.push(row);
        }

        info!(rows = table.len(), "sales simulation finished");

        for observer in &mut self.observers {
            observer.observe(&table);
        }
        Ok(table)
    }

    fn step(&mut self, range: SamplingRange, pool_size: usize) -> Result<RunResult> {
        let num_runs = self.config.num_runs;
        let cost_ratio = self.inputs.cost_ratio;

        let pool = self.source.sample_distinct(range, pool_size)?;
        let projections = self.source.draw_with_replacement(&pool, num_runs);

        let sales = mean(projections.iter().map(|&v| v as f64));
        let cost_of_sales = mean(projections.iter().map(|&v| v as f64 * cost_ratio));

        Ok(RunResult {
            sales: round_cents(sales),
            cost_of_sales: round_cents(cost_of_sales),
        })
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    debug_assert!(n > 0, "mean of an empty sample");
    values.sum::<f64>() / n as f64
}

/// Runs a forecast with an entropy-seeded source and the legacy pool size
/// (`floor(num_runs * 0.001)`).
pub fn simulate(
    units: &[f64],
    prices: &[f64],
    std_dev: f64,
    cost_ratio: f64,
    num_runs: usize,
) -> Result<ResultsTable> {
    let inputs = ForecastInputs::new(units.to_vec(), prices.to_vec(), std_dev, cost_ratio);
    SalesSimulation::from_config(SimulationConfig::with_runs(num_runs), inputs).run()
}
