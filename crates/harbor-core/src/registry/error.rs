//! Error types for the per-plugin registries.

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("variable not found: {0}")]
    VariableNotFound(String),

    #[error("variable already registered: {0}")]
    AlreadyRegistered(String),

    #[error(
        "invalid number of arguments for command '{command}': expected {expected}, \
         defaults {defaults}, provided {provided}"
    )]
    ArityMismatch {
        command: String,
        expected: usize,
        defaults: usize,
        provided: usize,
    },

    #[error("too many default arguments for command '{command}': {defaults} defaults for {expected} parameters")]
    TooManyDefaults {
        command: String,
        expected: usize,
        defaults: usize,
    },
}

/// Shorthand for results produced by registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
