use std::path::{Path, PathBuf};

/// Convenience result type used across storeframe.
pub type MockupResult<T> = Result<T, MockupError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for mockup rendering.
pub enum MockupError {
    /// A required input file does not exist.
    #[error("not found: missing {what}: {}", path.display())]
    NotFound {
        /// Human-readable role of the file ("base mockup", "screenshot").
        what: &'static str,
        /// Path that was checked.
        path: PathBuf,
    },

    /// Invalid layout, manifest or image geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable title font could be resolved or loaded.
    #[error("font error: {0}")]
    Font(String),

    /// Manifest (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error (IO, decode, encode).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockupError {
    /// Build a [`MockupError::NotFound`] for `path`.
    pub fn not_found(what: &'static str, path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            what,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build a [`MockupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MockupError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`MockupError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Path of the missing file, if this is a [`MockupError::NotFound`].
    pub fn missing_path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
