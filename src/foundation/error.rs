/// Convenience result type used across ringtimer.
pub type RingTimerResult<T> = Result<T, RingTimerError>;

/// Top-level error taxonomy used by fallible APIs.
///
/// Scheduler operations are deliberately absent here: they never fail, unknown ids are no-ops.
#[derive(thiserror::Error, Debug)]
pub enum RingTimerError {
    /// Invalid user-provided input (time strings, settings, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or encoding a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingTimerError {
    /// Build a [`RingTimerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RingTimerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for RingTimerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
