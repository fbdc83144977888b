//! Error types for the core domain crate.

use thiserror::Error;

/// Errors returned by core parsing operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Project status string is not one of the closed set.
    #[error("unknown project status: {0}")]
    UnknownStatus(String),
    /// Template category string is not one of the closed set.
    #[error("unknown template category: {0}")]
    UnknownCategory(String),
    /// Content kind string is not one of the closed set.
    #[error("unknown content kind: {0}")]
    UnknownContentKind(String),
    /// Content style string is not one of the closed set.
    #[error("unknown content style: {0}")]
    UnknownContentStyle(String),
}
