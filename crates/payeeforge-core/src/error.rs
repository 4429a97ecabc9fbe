use thiserror::Error;

/// Core error type shared across Payeeforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The request violates its input contract.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Convenience alias for results returned by Payeeforge crates.
pub type Result<T> = std::result::Result<T, Error>;
