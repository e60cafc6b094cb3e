//! Domain errors for the namespace directory.

use thiserror::Error;

use super::models::NamespaceId;

/// Errors surfaced at the directory boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Namespace missing from request context")]
    MissingNamespace,

    #[error("Namespace not found: {0}")]
    NamespaceNotFound(NamespaceId),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failure reported by one application of a per-namespace sweep.
///
/// Carries a status message alongside the underlying error so the sweep can
/// log both before moving on to the next namespace.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct NamespaceTaskError {
    pub message: String,
    #[source]
    pub source: anyhow::Error,
}

impl NamespaceTaskError {
    pub fn new(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }
}
