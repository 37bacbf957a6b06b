use clap::Parser;
use sales_montecarlo::io::histogram::HistogramObserver;
use sales_montecarlo::io::{products, reporting};
use sales_montecarlo::{confidence_bounds, ForecastInputs, SalesSimulation, SimulationConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Forecast sales and cost of sales with Monte Carlo simulation.
#[derive(Debug, Parser)]
#[command(name = "sales-mc", version)]
struct Cli {
    /// CSV of product lines with `product,units,price` headers
    #[arg(long, conflicts_with_all = ["units", "prices"])]
    products: Option<PathBuf>,

    /// Projected units per product, comma separated
    #[arg(long, value_delimiter = ',', requires = "prices")]
    units: Vec<f64>,

    /// Unit price per product, comma separated
    #[arg(long, value_delimiter = ',', requires = "units")]
    prices: Vec<f64>,

    /// Historical volatility as a fraction of the mean (0.1 = 10%)
    #[arg(long)]
    std_dev: f64,

    /// Cost of sales to sales ratio
    #[arg(long)]
    cost_ratio: f64,

    /// Number of simulation runs
    #[arg(long, default_value_t = 10_000)]
    runs: usize,

    /// Distinct values drawn per run (defaults to runs / 1000)
    #[arg(long)]
    pool_size: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the results table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Histogram bins
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// Skip the histograms
    #[arg(long)]
    no_plot: bool,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SALES_MC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> sales_montecarlo::Result<()> {
    let (units, prices) = match &cli.products {
        Some(path) => products::split_units_and_prices(&products::read_product_lines(path)?),
        None => (cli.units.clone(), cli.prices.clone()),
    };
    let inputs = ForecastInputs::new(units, prices, cli.std_dev, cli.cost_ratio);

    let config = SimulationConfig {
        num_runs: cli.runs,
        pool_size: cli.pool_size,
        seed: cli.seed,
    };

    let mut sim = SalesSimulation::from_config(config, inputs);
    if !cli.no_plot {
        sim = sim.with_observer(Box::new(HistogramObserver::new(cli.bins)));
    }

    println!("Running {} simulations...", sim.config().num_runs);
    let results = sim.run()?;

    if let Some(path) = &cli.output {
        reporting::write_results_csv(path, &results)?;
        println!("Results written to {}", path.display());
    }

    let mut out = std::io::stdout();
    reporting::write_projection_report(&mut out, &sim.inputs().projection())?;

    println!("Upper and lower limits of projected sales and COS: ");
    let bounds = confidence_bounds(&results)?;
    reporting::write_bounds_report(&mut out, &bounds)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
