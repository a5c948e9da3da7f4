//! Error types for the plugin system.

use std::path::PathBuf;

use crate::plugin_system::version::{Version, VersionError};

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("failed to load plugin library '{path}': {message}")]
    LoadingError { path: PathBuf, message: String },

    #[error("plugin library '{path}' is missing required symbol '{symbol}'")]
    MissingSymbol { path: PathBuf, symbol: String },

    #[error("plugin factory in '{path}' returned a null instance")]
    NullInstance { path: PathBuf },

    #[error(
        "plugin '{plugin}' targets host version {plugin_target} which is \
         incompatible with host version {host}"
    )]
    IncompatibleVersion {
        plugin: String,
        plugin_target: Version,
        host: Version,
    },

    #[error("plugin '{plugin}' failed to initialize: {message}")]
    InitializationError { plugin: String, message: String },

    #[error("plugin '{plugin}' failed to shut down: {message}")]
    ShutdownError { plugin: String, message: String },

    #[error("version parsing error: {0}")]
    VersionParsing(#[from] VersionError),
}

/// Shorthand for results produced by plugin system operations.
pub type Result<T> = std::result::Result<T, PluginSystemError>;
