//! Process-wide resource registry.
//!
//! One [`ResourceRegistry`] exists per host process. The host constructs it
//! before any plugin loads and hands every plugin a [`Shared`] handle to the
//! same instance through [`HostServices`](crate::plugin_system::HostServices).
//! It is the only cross-thread-shared component of the core: every public
//! operation holds the registry-wide mutex for its full duration, with no
//! reader/writer distinction. Callers must not re-enter the registry from
//! within one of its own operations.

pub mod error;

pub use error::{ResourceError, Result};

use std::sync::Mutex;

use log::warn;

use crate::utils::Shared;
use crate::value::Value;

/// One registered resource.
#[derive(Debug)]
struct ResourceEntry {
    name: String,
    value: Shared<Value>,
    locked: bool,
}

/// Lock-guarded map from name to tagged value with an advisory per-entry
/// lock flag.
///
/// Names are not enforced unique: registration appends unconditionally and
/// lookups resolve against the first match, the same first-match policy as
/// the per-plugin registries.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: Mutex<Vec<ResourceEntry>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under `name`. Duplicate names are accepted; the
    /// new entry is unreachable behind the first match and a warning is
    /// logged.
    pub fn register(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let mut resources = self.resources.lock().unwrap();
        if resources.iter().any(|res| res.name == name) {
            warn!("resource '{}' registered twice; later entry is shadowed", name);
        }
        resources.push(ResourceEntry {
            name,
            value: Shared::new(value),
            locked: false,
        });
    }

    /// Fetch a handle to a resource's value.
    ///
    /// Fails with [`ResourceError::NotFound`] if no entry matches and with
    /// [`ResourceError::Locked`] if the entry's advisory lock flag is set.
    /// The registry mutex is held only for the lookup, not for the returned
    /// handle's lifetime: a caller may keep the handle while another party
    /// locks the entry. This weak-consistency policy is deliberate.
    pub fn get(&self, name: &str) -> Result<Shared<Value>> {
        let resources = self.resources.lock().unwrap();
        let entry = Self::find(&resources, name)?;
        if entry.locked {
            return Err(ResourceError::Locked(name.to_string()));
        }
        Ok(entry.value.clone())
    }

    /// Set the advisory lock flag on the first entry matching `name`.
    pub fn lock(&self, name: &str) -> Result<()> {
        let mut resources = self.resources.lock().unwrap();
        Self::find_mut(&mut resources, name)?.locked = true;
        Ok(())
    }

    /// Clear the advisory lock flag on the first entry matching `name`.
    pub fn unlock(&self, name: &str) -> Result<()> {
        let mut resources = self.resources.lock().unwrap();
        Self::find_mut(&mut resources, name)?.locked = false;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources
            .lock()
            .unwrap()
            .iter()
            .any(|res| res.name == name)
    }

    /// Names of all registered resources, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.resources
            .lock()
            .unwrap()
            .iter()
            .map(|res| res.name.clone())
            .collect()
    }

    fn find<'a>(resources: &'a [ResourceEntry], name: &str) -> Result<&'a ResourceEntry> {
        resources
            .iter()
            .find(|res| res.name == name)
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn find_mut<'a>(
        resources: &'a mut [ResourceEntry],
        name: &str,
    ) -> Result<&'a mut ResourceEntry> {
        resources
            .iter_mut()
            .find(|res| res.name == name)
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests;
