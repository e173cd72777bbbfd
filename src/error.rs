use std::fmt;
use thiserror::Error;

/// Which lineup construction ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionStage {
    RandomLineup,
    CrossOver,
}

impl fmt::Display for ConstructionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionStage::RandomLineup => write!(f, "random lineup"),
            ConstructionStage::CrossOver => write!(f, "crossover"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infeasible gene pool: no viable {stage} after {attempts} attempts")]
    Infeasible {
        stage: ConstructionStage,
        attempts: usize,
    },

    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl LineupError {
    pub fn is_infeasible(&self) -> bool {
        matches!(self, LineupError::Infeasible { .. })
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
