//! The error taxonomy.

/// Convenience result type used across primbench.
pub type BenchResult<T> = Result<T, BenchError>;

/// Top-level error taxonomy used by harness APIs.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// Invalid configuration: degenerate layout, bad dimensions or parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure surfaced by the drawing collaborator (resource exhaustion).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BenchError {
    /// Build a [`BenchError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BenchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
