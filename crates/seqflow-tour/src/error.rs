use std::path::PathBuf;

use thiserror::Error;

use seqflow_core::error::SeqflowError;

/// Errors raised while loading or running the tour.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("Tour config error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Seqflow(#[from] SeqflowError),
}

pub type Result<T> = std::result::Result<T, TourError>;
