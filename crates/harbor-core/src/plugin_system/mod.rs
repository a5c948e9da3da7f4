//! Plugin system: contract, ABI boundary and lifecycle management.
//!
//! ## Submodules
//!
//! - [`version`]: host/plugin version type and the major-equality
//!   compatibility rule.
//! - [`descriptor`]: immutable plugin metadata ([`PluginDescriptor`]).
//! - [`traits`]: the [`Plugin`] contract every loadable module implements,
//!   plus the [`HostServices`] bundle injected before `init`.
//! - [`abi`]: the two-symbol dynamic-library contract (`create`/`destroy`)
//!   and the [`declare_plugin!`](crate::declare_plugin) export macro.
//! - [`loader`]: directory discovery and single-candidate library loading.
//! - [`manager`]: the [`PluginManager`] driving load → init → shutdown →
//!   unload as best-effort batch passes.
//! - [`error`]: [`PluginSystemError`](error::PluginSystemError).

pub mod version;
pub mod descriptor;
pub mod traits;
pub mod abi;
pub mod loader;
pub mod manager;
pub mod error;

pub use version::{Version, VersionError};
pub use descriptor::{PluginCategory, PluginDescriptor};
pub use traits::{HostServices, Plugin, PluginBase};
pub use manager::{BatchSummary, LoadedPlugin, PluginManager, PluginState};
pub use error::PluginSystemError;

#[cfg(test)]
mod tests;
