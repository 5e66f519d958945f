// File: crates/eicplot/src/main.rs
// Summary: CLI that prints axis tick layouts and fills 2-D grids from CSV samples,
// writing per-cell mean (pull) or standard deviation (resolution) as CSV.

mod input;
mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eicplot_core::{Axis, GridAccumulator, GridShape, HeatMap, Statistic, TickGenerator, DEFAULT_MIN_SAMPLES};
use std::path::PathBuf;

use report::{CellRow, TickRow};

#[derive(Parser, Debug)]
#[command(name = "eicplot", version, about = "Axis ticks and binned grid statistics for event-analysis plots")]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print major and minor ticks for an axis range
    Ticks {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
        /// Suggested number of major ticks (0 = default of 4)
        #[arg(long, default_value = "5")]
        count: usize,
        /// Output CSV file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bin (x, y, value) samples from a CSV file and report one statistic per cell
    Grid(GridArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// CSV with a header row and x/eta, y/pt, value columns
    input: PathBuf,

    #[arg(long, default_value = "10")]
    nbins_x: usize,
    #[arg(long, default_value = "-4", allow_negative_numbers = true)]
    x_low: f64,
    #[arg(long, default_value = "4", allow_negative_numbers = true)]
    x_high: f64,

    #[arg(long, default_value = "10")]
    nbins_y: usize,
    #[arg(long, default_value = "0.5", allow_negative_numbers = true)]
    y_low: f64,
    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    y_high: f64,

    /// Cell statistic: mean (pull map) or stddev (resolution map)
    #[arg(long, value_enum, default_value_t = StatArg::Mean)]
    stat: StatArg,

    /// Value for cells below the sample floor (default: 0 for mean, 1 for stddev)
    #[arg(long, allow_negative_numbers = true)]
    sentinel: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_MIN_SAMPLES)]
    min_samples: u64,

    /// Worker threads for the fill (1 = sequential, 0 = rayon default)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Output CSV file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatArg {
    Mean,
    Stddev,
}

impl From<StatArg> for Statistic {
    fn from(s: StatArg) -> Self {
        match s {
            StatArg::Mean => Statistic::Mean,
            StatArg::Stddev => Statistic::StdDev,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Ticks { min, max, count, output } => cmd_ticks(min, max, count, output),
        Commands::Grid(args) => cmd_grid(args),
    }
}

fn cmd_ticks(min: f64, max: f64, count: usize, output: Option<PathBuf>) -> Result<()> {
    let layout = TickGenerator::new(count)
        .layout(min, max)
        .with_context(|| format!("generating ticks for [{min}, {max}]"))?;
    tracing::info!(
        majors = layout.majors().count(),
        minors = layout.minors().count(),
        major_step = layout.major_step,
        minor_step = layout.minor_step,
        "tick layout"
    );
    let out = report::open_output(output.as_deref())?;
    report::write_rows(out, layout.ticks.iter().map(TickRow::from))
}

fn cmd_grid(args: GridArgs) -> Result<()> {
    let shape = GridShape::new(args.nbins_x, args.x_low, args.x_high, args.nbins_y, args.y_low, args.y_high)
        .context("invalid grid shape")?;

    let samples = input::load_samples(&args.input)
        .with_context(|| format!("failed to load samples from '{}'", args.input.display()))?;
    tracing::info!(samples = samples.len(), input = %args.input.display(), "loaded samples");

    let filled = if args.threads == 1 {
        let mut g = GridAccumulator::new(shape);
        g.extend(samples.iter().copied());
        g
    } else {
        if args.threads > 1 {
            rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global().ok();
        }
        GridAccumulator::from_samples_par(shape, &samples)
    };
    let grid = filled.with_min_samples(args.min_samples);

    let binned = grid.total_count();
    tracing::info!(binned, discarded = samples.len() as u64 - binned, "filled grid");

    for axis in [Axis::from_binning("x", &shape.x), Axis::from_binning("y", &shape.y)] {
        let ticks = axis.ticks()?;
        let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
        tracing::debug!(axis = %axis.label, ?labels, "axis ticks");
    }

    let statistic = Statistic::from(args.stat);
    let sentinel = args.sentinel.unwrap_or_else(|| statistic.default_sentinel());
    let map = HeatMap::new(&grid, statistic, sentinel);
    let rows: Vec<CellRow> = report::cell_rows(&map);
    let reliable = rows.iter().filter(|r| r.count >= args.min_samples).count();
    tracing::info!(cells = rows.len(), reliable, ?statistic, sentinel, "cell statistics");

    let out = report::open_output(args.output.as_deref())?;
    report::write_rows(out, rows)
}
