use crate::types::Pair;
use mentis_symbolic::SymbolicError;

/// Errors from Mentis operations.
#[derive(Debug, thiserror::Error)]
pub enum MentisError {
    #[error("evaluation failed for pair {pair}: {source}")]
    Evaluation { pair: Pair, source: SymbolicError },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
