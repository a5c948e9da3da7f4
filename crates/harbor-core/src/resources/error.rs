//! Error types for the shared resource registry.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("resource is locked: {0}")]
    Locked(String),
}

/// Shorthand for results produced by resource registry operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
