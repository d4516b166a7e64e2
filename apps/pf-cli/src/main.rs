use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use pf_catalog::EspCatalog;
use pf_engine::{DocumentEngine, RawSimulationResults, RecordingEngine, SimulationEngine};
use pf_model::{ESP_LIFT_MARKER, build_model, run_profile};
use pf_report::{parse, validate_records};
use pf_results::SimulationResult;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "petroflow CLI - well model automation for the production simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List wells found in a tech-regime report
    Wells {
        /// Path to the report file
        report_path: PathBuf,
    },
    /// Build simulation models for the wells in a report
    MakeModels {
        /// Path to the report file
        report_path: PathBuf,
        /// Directory the models are created in
        #[arg(long)]
        out_dir: PathBuf,
        /// Path to the ESP catalog JSON
        #[arg(long)]
        catalog: PathBuf,
        /// Only build models for the first N wells
        #[arg(long)]
        wells: Option<usize>,
        /// Record and count engine calls instead of writing model documents
        #[arg(long)]
        dry_run: bool,
    },
    /// Run a pressure/temperature profile on a persisted model
    CalcPt {
        /// Path to the model file
        model_path: PathBuf,
        /// Producer well name
        #[arg(long)]
        well: String,
        /// Wellhead (outlet) pressure, atm
        #[arg(long)]
        p_wh: Option<f64>,
        /// Liquid rate, m3/day
        #[arg(long)]
        q_liq: Option<f64>,
        /// Raw engine results JSON to replay instead of a live engine run,
        /// for checking result reshaping
        #[arg(long)]
        replay: Option<PathBuf>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Report(#[from] pf_report::ReportError),

    #[error(transparent)]
    Catalog(#[from] pf_catalog::CatalogError),

    #[error(transparent)]
    Model(#[from] pf_model::ModelError),

    #[error("Replay file error: {0}")]
    Replay(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Wells { report_path } => cmd_wells(&report_path),
        Commands::MakeModels {
            report_path,
            out_dir,
            catalog,
            wells,
            dry_run,
        } => cmd_make_models(&report_path, &out_dir, &catalog, wells, dry_run),
        Commands::CalcPt {
            model_path,
            well,
            p_wh,
            q_liq,
            replay,
        } => cmd_calc_pt(&model_path, &well, p_wh, q_liq, replay.as_deref()),
    }
}

fn cmd_wells(report_path: &Path) -> CliResult<()> {
    let records = parse(report_path)?;
    validate_records(&records)?;

    if records.is_empty() {
        println!("No wells found in report");
        return Ok(());
    }

    println!("Wells in report:");
    for record in &records {
        let lift = match record.al_type.as_deref() {
            Some(ESP_LIFT_MARKER) => "ESP",
            Some(other) => other,
            None => "-",
        };
        println!(
            "  {} - {} ({})",
            record.well_name,
            record.field.as_deref().unwrap_or("-"),
            lift
        );
    }
    println!("{} wells total", records.len());
    Ok(())
}

fn cmd_make_models(
    report_path: &Path,
    out_dir: &Path,
    catalog_path: &Path,
    wells: Option<usize>,
    dry_run: bool,
) -> CliResult<()> {
    let mut records = parse(report_path)?;
    validate_records(&records)?;
    if let Some(n) = wells {
        records.truncate(n);
    }

    let catalog = EspCatalog::load(catalog_path)?;
    fs::create_dir_all(out_dir)?;

    let document = DocumentEngine;
    let recording = RecordingEngine::new();
    let engine: &dyn SimulationEngine = if dry_run { &recording } else { &document };

    let mut planned = 0;
    for record in &records {
        println!("Building model for well: {}", record.well_name);
        let model_path = out_dir.join(format!("{}.pips.yaml", record.well_name));
        build_model(engine, record, &model_path, &catalog)?;

        if dry_run {
            let total = recording.calls().len();
            println!("  {} engine calls planned", total - planned);
            planned = total;
        }
    }

    if dry_run {
        println!("✓ Dry run: {} wells, {} engine calls", records.len(), planned);
    } else {
        println!(
            "✓ Built {} models in {}",
            records.len(),
            out_dir.display()
        );
    }
    Ok(())
}

fn cmd_calc_pt(
    model_path: &Path,
    well: &str,
    p_wh: Option<f64>,
    q_liq: Option<f64>,
    replay: Option<&Path>,
) -> CliResult<()> {
    let result = match replay {
        Some(replay_path) => {
            let raw: RawSimulationResults = serde_json::from_str(&fs::read_to_string(replay_path)?)?;
            run_profile(
                &RecordingEngine::with_results(raw),
                model_path,
                well,
                None,
                p_wh,
                q_liq,
            )?
        }
        None => run_profile(&DocumentEngine, model_path, well, None, p_wh, q_liq)?,
    };

    print_result(&result);
    Ok(())
}

fn print_result(result: &SimulationResult) {
    println!("System results:");
    print!("{}", result.system);

    for (case, table) in &result.nodal {
        println!("\nNodal results [{case}]:");
        print!("{table}");
    }
    for (case, table) in &result.profile {
        println!("\nProfile results [{case}]:");
        print!("{table}");
    }
}
