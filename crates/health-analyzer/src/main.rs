//! CLI entry point for the diabetes dataset analyzer.

use anyhow::Result;
use clap::Parser;
use health_analyzer::{AnalyzerConfig, AnalyzerError, AnalyzerResult, driver};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    author = "Health Analyzer Team",
    version,
    about = "Exploratory analysis of the Pima Indians Diabetes dataset",
    long_about = "Loads diabetes.csv, prints descriptive statistics and flags \
                  data-quality issues.\n\n\
                  Without --input the dataset is looked up, in order, at:\n  \
                  ../data/diabetes.csv\n  \
                  data/diabetes.csv\n  \
                  ../../data/diabetes.csv\n\n\
                  EXAMPLES:\n  \
                  # Search the default locations\n  \
                  health-analyzer\n\n  \
                  # Analyze a specific file and show 10 rows\n  \
                  health-analyzer -i pima.csv --head-rows 10"
)]
struct Args {
    /// Path to the dataset, replacing the default search locations
    #[arg(short, long)]
    input: Option<String>,

    /// Directory the search locations are resolved against
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Number of rows shown in the "First Rows" section
    #[arg(long, default_value = "5")]
    head_rows: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_config(args: &Args) -> AnalyzerResult<AnalyzerConfig> {
    let mut builder = AnalyzerConfig::builder().head_rows(args.head_rows);

    if let Some(ref input) = args.input {
        builder = builder.input(input);
    }
    if let Some(ref dir) = args.base_dir {
        builder = builder.base_dir(dir);
    }

    Ok(builder.build()?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);

    println!("Starting Diabetes Dataset Analysis...\n");

    // Every failure, rejected flags included, is reported here and the
    // process still exits normally.
    let outcome = build_config(&args)
        .and_then(|config| driver::run(&config))
        .and_then(|analysis| analysis.render());

    match outcome {
        Ok(report) => println!("{report}"),
        Err(e) => report_failure(&e),
    }

    Ok(())
}

fn report_failure(err: &AnalyzerError) {
    error!("Analysis failed [{}]", err.error_code());

    if err.is_not_found() {
        println!("\nError: {err}");
        println!("\nPlease ensure diabetes.csv is in the data/ folder.");
    } else {
        println!("\nUnexpected error: {err}");
    }
}
