//! Error type shared by every stage of the pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Vertex;

pub type Result<T> = std::result::Result<T, CrownError>;

#[derive(Debug, Error)]
pub enum CrownError {
    #[error("{source_name}:{line}: malformed edge line {content:?}: {reason}")]
    MalformedInputLine {
        source_name: String,
        line: usize,
        content: String,
        reason: String,
    },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vertex {vertex} is not in the graph")]
    InvalidVertex { vertex: Vertex },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: Vertex },

    #[error("invariant violated ({invariant}): {detail}")]
    InvariantViolation {
        invariant: &'static str,
        detail: String,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CrownError {
    pub(crate) fn invariant(invariant: &'static str, detail: impl Into<String>) -> Self {
        CrownError::InvariantViolation {
            invariant,
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed(
        source_name: &str,
        line: usize,
        content: &str,
        reason: impl Into<String>,
    ) -> Self {
        CrownError::MalformedInputLine {
            source_name: source_name.to_string(),
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
