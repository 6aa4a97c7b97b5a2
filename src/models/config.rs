use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "frobenius.toml";

/// Configuration loaded from frobenius.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of nonzero generators per row
    #[serde(default = "default_max_generators")]
    pub max_generators: usize,
    /// Maximum anchor value, which is also the residue table size
    #[serde(default = "default_max_anchor")]
    pub max_anchor: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_generators: default_max_generators(),
            max_anchor: default_max_anchor(),
        }
    }
}

fn default_max_generators() -> usize {
    25
}

fn default_max_anchor() -> u64 {
    10_000_000
}

/// How results are rendered on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence per row
    #[default]
    Text,
    /// A JSON array of row reports
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Batch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Rows solved at once (0 = all rows at once)
    #[serde(default)]
    pub max_concurrent: usize,
    /// Stop after the first failing row
    #[serde(default)]
    pub stop_on_error: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from frobenius.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        max_concurrent: Option<usize>,
        stop_on_error: bool,
    ) -> Self {
        if let Some(f) = format {
            self.output.format = f;
        }
        if let Some(n) = max_concurrent {
            self.batch.max_concurrent = n;
        }
        if stop_on_error {
            self.batch.stop_on_error = true;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
