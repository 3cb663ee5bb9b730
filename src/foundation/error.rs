/// Convenience result type used across the crate.
pub type CircleResult<T> = Result<T, CircleError>;

/// Top-level error taxonomy used by the container APIs.
///
/// Steady-state rendering and routing recover silently; these errors only surface at API
/// boundaries (configuration, weights, mismatched targets).
#[derive(thiserror::Error, Debug)]
pub enum CircleError {
    /// Invalid user-provided configuration or layout parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when parsing or serializing configuration documents.
    #[error("config error: {0}")]
    Config(String),

    /// Errors raised by the draw path (mismatched target surfaces, buffer limits).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CircleError {
    /// Build a [`CircleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CircleError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CircleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
