use thiserror::Error;

/// Errors emitted by the generation engine and the output writers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidRequest(#[from] payeeforge_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
