use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smelt_core::{calculate, Compound, SmeltingConstants};
use smelt_world::{apply_overrides, load_batch, load_constants, parse_override};

mod entry;
mod report;

use report::{write_report, Format};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "smelt_cli", about = "Copper smelting mass-balance calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProcessArgs {
    /// Directory holding constants.json.
    #[arg(long, default_value = "./content")]
    content_dir: String,
    /// Override one process constant, e.g. --set fe_to_stein=0.4. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, f64)>,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Print the aggregated feed composition before the results.
    #[arg(long)]
    show_feed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the mass balance for a batch file of compounds.
    Run {
        /// JSON array of compound records.
        #[arg(long)]
        batch: PathBuf,
        #[command(flatten)]
        process: ProcessArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Enter compounds interactively, then calculate.
    Enter {
        /// Preload compounds from a batch file before prompting.
        #[arg(long)]
        batch: Option<PathBuf>,
        #[command(flatten)]
        process: ProcessArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the effective process constants as JSON.
    Constants {
        #[command(flatten)]
        process: ProcessArgs,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn resolve_constants(process: &ProcessArgs) -> Result<SmeltingConstants> {
    let mut constants = load_constants(&process.content_dir)?;
    apply_overrides(&mut constants, &process.overrides)?;
    Ok(constants)
}

fn calculate_and_print(
    compounds: &[Compound],
    constants: &SmeltingConstants,
    output: &OutputArgs,
) -> Result<()> {
    let report = calculate(compounds, constants).context("calculating mass balance")?;
    tracing::info!(
        compounds = report.compound_count,
        total_weight = report.total_weight,
        stein_weight = report.stein.weight,
        slag_weight = report.slag.weight,
        "calculation finished"
    );
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &report, output.format, output.show_feed)
}

fn run(batch: &Path, process: &ProcessArgs, output: &OutputArgs) -> Result<()> {
    let constants = resolve_constants(process)?;
    let compounds = load_batch(batch)?;
    calculate_and_print(&compounds, &constants, output)
}

fn enter(batch: Option<&Path>, process: &ProcessArgs, output: &OutputArgs) -> Result<()> {
    let constants = resolve_constants(process)?;
    let mut compounds = match batch {
        Some(path) => load_batch(path)?,
        None => Vec::new(),
    };
    if !compounds.is_empty() {
        println!("Loaded {} compounds from batch file.", compounds.len());
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    compounds.extend(entry::prompt_compounds(
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?);
    calculate_and_print(&compounds, &constants, output)
}

fn print_constants(process: &ProcessArgs) -> Result<()> {
    let constants = resolve_constants(process)?;
    let json = serde_json::to_string_pretty(&constants).context("serializing constants")?;
    println!("{json}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            batch,
            process,
            output,
        } => run(&batch, &process, &output),
        Commands::Enter {
            batch,
            process,
            output,
        } => enter(batch.as_deref(), &process, &output),
        Commands::Constants { process } => print_constants(&process),
    }
}
