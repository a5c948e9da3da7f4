//! General-purpose utilities shared across subsystems.

pub mod shared;

pub use shared::Shared;
