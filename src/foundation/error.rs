/// Convenience result type used at the document and CLI boundary.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Snapshot resolution itself is total and never produces one of these.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid caller-provided arguments or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced timeline, filter or primitive does not exist.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
