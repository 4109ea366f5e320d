//! Configuration loading from shiftbench.toml
//!
//! Configuration can be specified in a `shiftbench.toml` file, discovered
//! by walking up from the current directory. CLI flags override file
//! values; defaults match the original observed benchmark: sizes 500 to
//! 9500 in steps of 1000, 50 trials per size, 10 warm-up passes.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shiftbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for the benchmark passes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunnerConfig {
    /// Input sizes, in the order they are benchmarked
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Trials per input size (each trial = one dataset, sorted once per variant)
    #[serde(default = "default_trials")]
    pub trials_per_size: usize,
    /// Full discarded benchmark passes before the measured pass
    #[serde(default = "default_warmup")]
    pub warmup_runs: usize,
    /// Pin the process to this CPU core before measuring
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            trials_per_size: default_trials(),
            warmup_runs: default_warmup(),
            pin_cpu: None,
        }
    }
}

fn default_sizes() -> Vec<usize> {
    (500..=9500).step_by(1000).collect()
}
fn default_trials() -> usize {
    50
}
fn default_warmup() -> usize {
    10
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Directory for raw data files
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: default_format(),
        }
    }
}

fn default_directory() -> String {
    "target/shiftbench".to_string()
}
fn default_format() -> String {
    "human".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("shiftbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Reject configurations the harness cannot run.
    ///
    /// Sizes must be non-empty; trials per size must be at least 2, since
    /// the sample standard deviation is undefined below that and the run
    /// would only fail at aggregation time, after all the measuring.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.runner.sizes.is_empty() {
            anyhow::bail!("no input sizes configured");
        }
        if self.runner.sizes.iter().any(|&n| n == 0) {
            anyhow::bail!("input sizes must be positive");
        }
        if self.runner.trials_per_size < 2 {
            anyhow::bail!(
                "trials_per_size must be at least 2 for aggregation, got {}",
                self.runner.trials_per_size
            );
        }
        Ok(())
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Shiftbench Configuration

[runner]
# Input sizes, benchmarked in order
sizes = [500, 1500, 2500, 3500, 4500, 5500, 6500, 7500, 8500, 9500]
# Trials per input size
trials_per_size = 50
# Full discarded benchmark passes before the measured pass
warmup_runs = 10
# Pin the process to one CPU core (uncomment to enable)
# pin_cpu = 0

[output]
# Directory for raw data files
directory = "target/shiftbench"
# Default output format: human or json
format = "human"
"#
        .to_string()
    }
}
