/// Convenience result type used across the crate.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Error taxonomy for the fallible surfaces of the crate.
///
/// The placement math itself is total; errors only come from parsing user
/// input, validating configuration and building host documents.
#[derive(thiserror::Error, Debug)]
pub enum PlacementError {
    /// Invalid user-provided configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A placement, position, alignment or CSS keyword could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacementError {
    /// Build a [`PlacementError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlacementError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for PlacementError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
