//! Run configuration loaded from `crown.toml`

use crate::error::{CrownError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "crown.toml";

/// Default crown (force-into-cover) output file
pub const CROWN_OUTPUT: &str = "crownOutput.txt";

/// Default reduced graph output file
pub const REDUCED_OUTPUT: &str = "reductionOutput.txt";

/// Order in which the greedy maximal matching scans the edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOrder {
    /// Ascending `(u, v)` order.
    #[default]
    Sorted,
    /// Storage order, which is input order for a freshly parsed graph.
    Insertion,
}

impl std::str::FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sorted" => Ok(ScanOrder::Sorted),
            "insertion" => Ok(ScanOrder::Insertion),
            other => Err(format!("unknown scan order: {} (expected sorted|insertion)", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub scan_order: ScanOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Keep finding crowns in the residual graph until none is left.
    pub exhaustive: bool,
    /// Upper bound on rounds in exhaustive mode.
    pub max_rounds: usize,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            exhaustive: false,
            max_rounds: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub crown_path: PathBuf,
    pub reduced_path: PathBuf,
    /// Optional JSON run summary.
    pub report_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            crown_path: PathBuf::from(CROWN_OUTPUT),
            reduced_path: PathBuf::from(REDUCED_OUTPUT),
            report_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub reduction: ReductionConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Parse a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CrownError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CrownError::FileUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| CrownError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else `crown.toml` under `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config: {}", path.display());
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Loading config: {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
