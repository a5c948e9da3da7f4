//! # Harbor Core
//!
//! Core library for the Harbor plugin host: a host process discovers
//! shared-library modules in a configured directory, loads them at runtime,
//! validates version compatibility, orders them by declared priority and
//! drives each through an init → operate → shutdown lifecycle.
//!
//! ## Subsystems
//!
//! - [`value`]: the tagged [`Value`](value::Value) exchange type used by every
//!   registry and command.
//! - [`utils`]: general-purpose helpers, notably the [`Shared`](utils::Shared)
//!   ownership handle.
//! - [`registry`]: per-plugin command and variable registries.
//! - [`resources`]: the process-wide, lock-guarded resource registry.
//! - [`plugin_system`]: the plugin contract, the dynamic-library ABI boundary
//!   and the lifecycle manager.

pub mod value;
pub mod utils;
pub mod registry;
pub mod resources;
pub mod plugin_system;

// Re-export key public types for the binary and for plugin crates.
pub use value::Value;
pub use utils::Shared;
pub use registry::{CommandRegistry, VariableRegistry};
pub use resources::ResourceRegistry;
pub use plugin_system::{
    HostServices, Plugin, PluginBase, PluginCategory, PluginDescriptor, PluginManager, Version,
};
