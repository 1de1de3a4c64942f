use std::io;
use std::path::PathBuf;

use clap::Parser;
use parabolic_report::core::ballistics::{simulate, summaries};
use parabolic_report::core::chart::{ChartPresenter, DEFAULT_CHART_PATH};
use parabolic_report::core::console;
use parabolic_report::core::error::SimError;
use parabolic_report::core::input::{ArgsCollector, InputCollector, PromptCollector};
use parabolic_report::core::report::{
    DEFAULT_RESULTS_PATH, JsonFileStore, Presenter, ResultStore, TextPresenter,
};

#[derive(Parser)]
#[command(name = "parabolic_report")]
#[command(
    about = "Ideal projectile trajectories: summary text, JSON record and chart",
    long_about = None
)]
struct Cli {
    /// Unit system for labels with --projectile (SI or US); numbers are never converted
    #[arg(short = 'u', long, default_value = "US")]
    units: String,

    /// Projectile as <velocity>,<angle_deg>,<gravity>; repeat for more. Prompts when omitted.
    #[arg(short = 'p', long = "projectile", allow_hyphen_values = true)]
    projectiles: Vec<String>,

    /// Where to write the JSON record
    #[arg(short = 'o', long, default_value = DEFAULT_RESULTS_PATH)]
    output: PathBuf,

    /// Where to write the SVG chart
    #[arg(short = 'c', long, default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,
}

fn run() -> Result<(), SimError> {
    let cli = Cli::parse();

    let request = if cli.projectiles.is_empty() {
        PromptCollector::stdio().collect()?
    } else {
        ArgsCollector::new(cli.units, cli.projectiles).collect()?
    };

    let flights = simulate(&request.projectiles);
    for flight in flights.iter().filter(|f| f.summary.is_degenerate()) {
        console::info(&format!(
            "projectile {} never leaves the ground; plotting launch point only",
            flight.summary.projectile_index
        ));
    }

    TextPresenter::new(io::stdout().lock()).present(request.units, &flights)?;

    let mut store = JsonFileStore::new(cli.output);
    store.persist(&summaries(&flights))?;
    console::info(&format!("wrote results to {}", store.path().display()));

    if !cli.no_chart {
        let mut chart = ChartPresenter::new(cli.chart);
        chart.present(request.units, &flights)?;
        console::info(&format!("wrote chart to {}", chart.path().display()));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        console::error(&err.to_string());
        std::process::exit(1);
    }
}
