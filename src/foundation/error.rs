/// Convenience result type used across the crate.
pub type RemapResult<T> = Result<T, RemapError>;

/// Top-level error taxonomy used by library APIs.
///
/// Every variant is fatal: nothing in the pipeline retries or emits partial output.
#[derive(thiserror::Error, Debug)]
pub enum RemapError {
    /// Malformed input: wrong channel count, empty dimensions, bad timing parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A file could not be read, written, or its directory created.
    #[error("io error: {0}")]
    Io(String),

    /// Image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RemapError {
    /// Build a [`RemapError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`RemapError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`RemapError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
