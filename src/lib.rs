//! seqgen
//!
//! Command-line front end for the [`seqgen_core`] generators.
//!
//! # CLI Usage
//!
//! ```bash
//! # Built-in demonstration of every generator shape
//! seqgen demo
//!
//! # Integer progression, summed through the driver
//! seqgen int-range --from 1 --to 15 --step 3 --sum
//!
//! # A step that never reaches the bound needs a limit
//! seqgen int-range --from 0 --to 10 --step -1 --limit 5
//!
//! # Scenarios from a YAML file
//! seqgen run --config scenarios.yaml
//! ```

use clap::Args;

pub mod config;
pub mod demo;
pub mod runner;

pub use config::{ConfigError, GeneratorConfig, Item, Scenario, ScenarioFile};
pub use runner::{run_scenario, RunReport, Total};

#[derive(Args, Clone, Debug, Default)]
pub struct RunOpts {
    /// Stop after this many values and force the generator to complete
    #[arg(long)]
    pub limit: Option<usize>,

    /// Feed the values through the driver and print their sum
    #[arg(long)]
    pub sum: bool,
}
