use anyhow::{Context, Result};
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::PathBuf;

pub type Number = f64;

pub const CONFIG_FILE: &str = "embedding_diff_config";
pub const ENV_PREFIX: &str = "EMBEDDING_DIFF";

pub const DEFAULT_LEFT_PATH: &str = "llama.json";
pub const DEFAULT_RIGHT_PATH: &str = "ollama.json";
pub const DEFAULT_REPORT_PATH: &str = "vector_comparison_report.md";

#[derive(Deserialize, Default)]
pub struct CompareConfig {
    pub left_path: Option<String>,
    pub right_path: Option<String>,
    pub report_path: Option<String>,
    pub verbose: Option<bool>,
}

/// Resolved settings for a single comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub left_path: PathBuf,
    pub right_path: PathBuf,
    pub report_path: PathBuf,
    pub verbose: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::from_compare_config(CompareConfig::default())
    }
}

impl State {
    /// Layer the optional config file and `EMBEDDING_DIFF_*` variables over the fixed
    /// default locations.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .add_source(ConfigFile::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load configuration")?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let compare_config: CompareConfig = config
            .clone()
            .try_deserialize()
            .context("Invalid configuration values")?;
        Ok(Self::from_compare_config(compare_config))
    }

    fn from_compare_config(config: CompareConfig) -> Self {
        Self {
            left_path: config
                .left_path
                .unwrap_or_else(|| DEFAULT_LEFT_PATH.to_string())
                .into(),
            right_path: config
                .right_path
                .unwrap_or_else(|| DEFAULT_RIGHT_PATH.to_string())
                .into(),
            report_path: config
                .report_path
                .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string())
                .into(),
            verbose: config.verbose.unwrap_or(false),
        }
    }

    pub fn print_config(&self) {
        println!("left_path={}", self.left_path.display());
        println!("right_path={}", self.right_path.display());
        println!("report_path={}", self.report_path.display());
        println!("verbose={}", self.verbose);
    }
}
