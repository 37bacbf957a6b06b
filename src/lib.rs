//! Monte Carlo forecasting of sales revenue and cost of sales.
//!
//! The simulation engine turns unit/price projections, a historical volatility
//! and a cost ratio into a table of per-run mean sales and cost of sales; the
//! summarizer turns that table into mean +/- 2 standard deviation bounds.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{ForecastError, Result};
pub use model::inputs::{ForecastInputs, Projection, SamplingRange, MAX_STD_DEV};
pub use model::results::{ResultsTable, RunResult};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{simulate, SalesSimulation};
pub use simulation::summary::{confidence_bounds, ColumnBounds, IntervalBounds};
pub use strategy::implementations::SeededSource;
pub use strategy::traits::{RandomSource, ResultsObserver};
