//! Per-plugin command and variable registries.
//!
//! Every plugin owns one [`CommandRegistry`] and one [`VariableRegistry`].
//! Both keep entries in registration order and resolve lookups against the
//! first match. Neither carries internal locking: a registry is owned by a
//! single plugin instance and accessed on the lifecycle caller's thread, so
//! any cross-thread use must be synchronized by the owner.

pub mod command;
pub mod variable;
pub mod error;

pub use command::{CommandEntry, CommandFn, CommandRegistry};
pub use variable::{VariableEntry, VariableRegistry};
pub use error::{RegistryError, Result};

#[cfg(test)]
mod tests;
