//! Scenario files.
//!
//! A scenario file lists generators to run, one per scenario:
//!
//! ```yaml
//! scenarios:
//!   - name: countdown
//!     generator:
//!       type: collection
//!       items: ["3;", "2;", "1;"]
//!   - name: odd
//!     sum: true
//!     generator:
//!       type: int_range
//!       from: 1
//!       to: 15
//!       step: 3
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for scenario file loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading scenario file
    #[error("Failed to read scenario file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File parsed but describes something that cannot run
    #[error("Invalid scenario file: {0}")]
    Invalid(String),
}

/// Top-level content of a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub scenarios: Vec<Scenario>,
}

/// One generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Stop after this many values even if the generator has more
    #[serde(default)]
    pub limit: Option<usize>,

    /// Fold the values into a total instead of only printing them
    #[serde(default)]
    pub sum: bool,

    pub generator: GeneratorConfig,
}

/// Which generator shape a scenario runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Yield the listed items in order
    Collection { items: Vec<Item> },

    /// Integer progression
    IntRange {
        from: i64,
        /// Inclusive upper bound
        to: i64,
        step: i64,
    },

    /// Floating-point progression
    FloatRange {
        from: f64,
        /// Inclusive upper bound
        to: f64,
        step: f64,
    },
}

/// A scalar collection item, kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(v) => write!(f, "{v}"),
            Item::Float(v) => write!(f, "{v}"),
            Item::Bool(v) => write!(f, "{v}"),
            Item::Text(v) => f.write_str(v),
        }
    }
}

impl ScenarioFile {
    /// Load and validate a scenario file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate scenarios from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: ScenarioFile = serde_yaml::from_str(yaml)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::Invalid("no scenarios defined".to_string()));
        }

        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(ConfigError::Invalid("scenario name is empty".to_string()));
            }
            if !names.insert(scenario.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate scenario name: {}",
                    scenario.name
                )));
            }
            let is_collection = matches!(scenario.generator, GeneratorConfig::Collection { .. });
            if scenario.sum && is_collection && scenario.integer_items().is_none() {
                return Err(ConfigError::Invalid(format!(
                    "scenario {}: sum needs every collection item to be an integer",
                    scenario.name
                )));
            }
        }
        Ok(())
    }

    pub fn get_scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

impl Scenario {
    /// Collection items as integers, if the generator is a collection of them.
    pub fn integer_items(&self) -> Option<Vec<i64>> {
        match &self.generator {
            GeneratorConfig::Collection { items } => items
                .iter()
                .map(|item| match item {
                    Item::Int(v) => Some(*v),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}
