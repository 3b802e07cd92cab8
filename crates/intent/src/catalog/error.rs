//! Error types for catalog loading.

/// Errors that can occur while loading or validating an intent catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Catalog validation error (duplicate ids, conflicting effects, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
