//! Command-line interface for seqgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Float progression
//! seqgen float-range --from -2 --to 2 --step 0.5
//!
//! # Collection of strings
//! seqgen collection "3;" "2;" "1;"
//!
//! # Scenario file from the environment
//! SEQGEN_CONFIG=scenarios.yaml seqgen run
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use seqgen::runner::{emit, run_float_range, run_int_range};
use seqgen::{demo, run_scenario, RunOpts, ScenarioFile};
use seqgen_core::CollectionGenerator;

#[derive(Parser)]
#[command(name = "seqgen")]
#[command(about = "Drive lazy sequence generators from the command line")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration of every generator shape
    Demo,

    /// Yield an integer progression from..=to
    IntRange {
        /// First value
        #[arg(long, allow_negative_numbers = true)]
        from: i64,

        /// Inclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        to: i64,

        /// Increment between values (0 yields nothing)
        #[arg(long, allow_negative_numbers = true, default_value = "1")]
        step: i64,

        #[command(flatten)]
        opts: RunOpts,
    },

    /// Yield a floating-point progression from..=to
    FloatRange {
        /// First value
        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        /// Inclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        /// Increment between values (0 yields nothing)
        #[arg(long, allow_negative_numbers = true)]
        step: f64,

        #[command(flatten)]
        opts: RunOpts,
    },

    /// Yield the given items in order
    Collection {
        /// Items to yield
        #[arg(required = true, allow_hyphen_values = true)]
        items: Vec<String>,

        /// Stop after this many items
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Run every scenario of a YAML scenario file
    Run {
        /// Path to the scenario file
        #[arg(long, env = "SEQGEN_CONFIG", value_name = "PATH")]
        config: std::path::PathBuf,

        /// Only run the scenario with this name
        #[arg(long)]
        only: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => demo::run(&mut out)?,
        Commands::IntRange {
            from,
            to,
            step,
            opts,
        } => {
            run_int_range(from, to, step, &opts, &mut out)?;
        }
        Commands::FloatRange {
            from,
            to,
            step,
            opts,
        } => {
            run_float_range(from, to, step, &opts, &mut out)?;
        }
        Commands::Collection { items, limit } => {
            emit(CollectionGenerator::owned(items), limit, &mut out)?;
        }
        Commands::Run { config, only } => {
            let file = ScenarioFile::from_file(&config)
                .with_context(|| format!("Failed to load scenarios from {config:?}"))?;

            let scenarios: Vec<_> = match &only {
                Some(name) => vec![file
                    .get_scenario(name)
                    .with_context(|| format!("No scenario named {name:?} in {config:?}"))?],
                None => file.scenarios.iter().collect(),
            };

            for scenario in scenarios {
                let report = run_scenario(scenario, &mut out)
                    .with_context(|| format!("Scenario {:?} failed", scenario.name))?;
                if let Some(total) = &report.total {
                    tracing::debug!(name = %scenario.name, %total, "Scenario total");
                }
            }
            tracing::info!("All scenarios completed");
        }
    }

    Ok(())
}
