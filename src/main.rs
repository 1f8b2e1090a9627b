use analysis::{Pipeline, Scenario};
use anyhow::Context;
use cache::ResultCache;
use clap::{Args, Parser, Subcommand};
use configuration::{Config, Language};
use export::CsvExporter;
use session::Session;
use std::io;
use std::path::PathBuf;

mod analysis;
mod cache;
mod logging;
mod presentation;
mod session;

/// The main entry point for the BusinessGraph profit/cost analyzer.
fn main() -> anyhow::Result<()> {
    // Load BUSINESSGRAPH__* overrides and RUST_LOG from a .env file, if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => configuration::load_config_from(path),
        None => configuration::load_config(),
    }
    .context("Failed to load configuration")?;
    if let Some(language) = cli.lang {
        config.language = language;
    }

    let _log_guard = logging::init(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &mut config),
        Commands::Export(args) => handle_export(args, &mut config),
        Commands::Session(args) => handle_session(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Revenue, cost and profit analysis with break-even point for a single product.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./businessgraph.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language of the report.
    #[arg(long, global = true, value_enum)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the curves, the break-even point and advice, and print a report.
    Analyze(AnalyzeArgs),
    /// Compute the curves and write them to a CSV file.
    Export(ExportArgs),
    /// Read scenarios from stdin, one `price unit_cost fixed_cost max_quantity` per line.
    Session(SessionArgs),
}

/// Product inputs. Any value left out falls back to the configured default.
#[derive(Args, Debug, Clone, Default)]
struct InputArgs {
    /// Selling price per item.
    #[arg(long, allow_negative_numbers = true)]
    price: Option<f64>,

    /// Cost per item produced and sold.
    #[arg(long, allow_negative_numbers = true)]
    unit_cost: Option<f64>,

    /// Cost independent of quantity.
    #[arg(long, allow_negative_numbers = true)]
    fixed_cost: Option<f64>,

    /// Upper bound of the quantity range.
    #[arg(long, allow_negative_numbers = true)]
    max_quantity: Option<f64>,

    /// Number of sampled quantity points.
    #[arg(long)]
    points: Option<usize>,
}

impl InputArgs {
    /// Resolves the scenario and applies the sampling override to `config`.
    fn resolve(&self, config: &mut Config) -> anyhow::Result<Scenario> {
        if let Some(points) = self.points {
            config.sampling.num_points = points;
        }
        let defaults = &config.inputs;
        session::build_scenario(
            self.price.unwrap_or(defaults.price),
            self.unit_cost.unwrap_or(defaults.unit_cost),
            self.fixed_cost.unwrap_or(defaults.fixed_cost),
            self.max_quantity.unwrap_or(defaults.max_quantity),
            &defaults.quantity_slider,
        )
    }
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// How many rows of the sampled series to preview (0 hides the table).
    #[arg(long, default_value_t = 11)]
    rows: usize,

    /// Print the full analysis as JSON instead of the text report.
    #[arg(long, conflicts_with = "chart")]
    json: bool,

    /// Print the labelled chart series and break-even marker as JSON.
    #[arg(long)]
    chart: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Directory to write into (default from configuration).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Destination file name (default from configuration).
    #[arg(long)]
    file_name: Option<String>,
}

#[derive(Args)]
struct SessionArgs {
    /// How many rows of the sampled series to preview per scenario.
    #[arg(long, default_value_t = 0)]
    rows: usize,

    /// Maximum number of distinct scenarios kept in memory.
    #[arg(long, default_value_t = 64)]
    cache_size: usize,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_analyze(args: AnalyzeArgs, config: &mut Config) -> anyhow::Result<()> {
    let scenario = args.inputs.resolve(config)?;
    let pipeline = Pipeline::from_config(config)?;
    let analysis = pipeline.run(&scenario)?;

    let messages = config.messages.for_language(config.language);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else if args.chart {
        let payload = presentation::chart_payload(&analysis, messages);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", presentation::render_analysis(&analysis, messages, args.rows));
    }
    Ok(())
}

fn handle_export(args: ExportArgs, config: &mut Config) -> anyhow::Result<()> {
    let scenario = args.inputs.resolve(config)?;
    let pipeline = Pipeline::from_config(config)?;
    let analysis = pipeline.run(&scenario)?;

    let output_dir = args.output_dir.unwrap_or_else(|| config.export.output_dir.clone());
    let file_name = args.file_name.unwrap_or_else(|| config.export.file_name.clone());
    let path = CsvExporter::new()
        .export(&analysis.report.sample, &output_dir, &file_name)
        .with_context(|| format!("Failed to export to {}", output_dir.display()))?;

    let messages = config.messages.for_language(config.language);
    println!("{}", presentation::break_even_line(&analysis, messages));
    println!("{}: {}", messages.export_done, path.display());
    Ok(())
}

fn handle_session(args: SessionArgs, config: &Config) -> anyhow::Result<()> {
    let pipeline = Pipeline::from_config(config)?;
    let mut session = Session {
        pipeline: &pipeline,
        messages: config.messages.for_language(config.language),
        slider: config.inputs.quantity_slider,
        preview_rows: args.rows,
        cache: ResultCache::new(args.cache_size),
    };

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())
}
