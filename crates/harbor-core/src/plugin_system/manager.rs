//! Plugin lifecycle manager.
//!
//! [`PluginManager`] discovers candidate libraries, loads and version-gates
//! them, stable-sorts the survivors by ascending priority and drives the
//! init → shutdown → unload passes. Every pass is a best-effort batch: one
//! failing plugin is logged and excluded from later phases, never aborting
//! the rest. Only aggregate [`BatchSummary`] counts surface to the caller.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use libloading::Library;
use log::{debug, error, info, warn};

use crate::plugin_system::abi::PluginDtor;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::{PluginSystemError, Result};
use crate::plugin_system::loader;
use crate::plugin_system::traits::{HostServices, Plugin};
use crate::plugin_system::version::Version;
use crate::registry;
use crate::value::Value;

/// Aggregate outcome of one lifecycle pass, displayed as "succeeded/total".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.total)
    }
}

/// Lifecycle state of one recorded plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    /// Loaded, compatible and bound; `init` not yet called.
    Loaded,
    /// `init` succeeded.
    Initialized,
    /// `init` failed or panicked; the plugin still gets a shutdown call.
    InitFailed,
    /// `shutdown` was attempted.
    ShutDown,
    /// Instance destroyed and library closed.
    Unloaded,
}

/// Owned plugin instance: either resident (linked into the host) or backed
/// by a dynamic library, in which case the instance must be released through
/// the module's own destroyer.
enum PluginInstance {
    Resident(Box<dyn Plugin>),
    Dynamic {
        raw: *mut Box<dyn Plugin>,
        dtor: PluginDtor,
    },
}

impl PluginInstance {
    fn plugin(&self) -> &dyn Plugin {
        match self {
            PluginInstance::Resident(plugin) => plugin.as_ref(),
            // Valid from `create` until the destroyer runs; the record drops
            // the instance before closing the library.
            PluginInstance::Dynamic { raw, .. } => unsafe { &***raw },
        }
    }

    fn plugin_mut(&mut self) -> &mut dyn Plugin {
        match self {
            PluginInstance::Resident(plugin) => plugin.as_mut(),
            PluginInstance::Dynamic { raw, .. } => unsafe { &mut ***raw },
        }
    }
}

/// One recorded plugin: library handle, instance and descriptor snapshot.
pub struct LoadedPlugin {
    /// `None` for resident plugins.
    library: Option<Library>,
    instance: Option<PluginInstance>,
    descriptor: PluginDescriptor,
    state: PluginState,
}

impl LoadedPlugin {
    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    /// The live instance, if not yet unloaded.
    pub fn plugin(&self) -> Option<&dyn Plugin> {
        self.instance.as_ref().map(PluginInstance::plugin)
    }

    pub fn plugin_mut(&mut self) -> Option<&mut dyn Plugin> {
        self.instance.as_mut().map(PluginInstance::plugin_mut)
    }

    /// Destroy the instance (through its module's destroyer for dynamic
    /// plugins) and close the library. Returns false if already released.
    fn release(&mut self) -> bool {
        let released = match self.instance.take() {
            Some(PluginInstance::Dynamic { raw, dtor }) => {
                unsafe { dtor(raw) };
                true
            }
            Some(PluginInstance::Resident(plugin)) => {
                drop(plugin);
                true
            }
            None => false,
        };
        // The destroyer must have run before its code is unmapped.
        drop(self.library.take());
        if released {
            self.state = PluginState::Unloaded;
        }
        released
    }
}

impl Drop for LoadedPlugin {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for LoadedPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedPlugin")
            .field("descriptor", &self.descriptor)
            .field("state", &self.state)
            .field("dynamic", &self.library.is_some())
            .finish()
    }
}

/// Discovers, loads, version-gates, orders and drives plugins through their
/// lifecycle; mediates cross-plugin variable access by plugin name.
pub struct PluginManager {
    plugin_dir: PathBuf,
    host_version: Version,
    services: HostServices,
    plugins: Vec<LoadedPlugin>,
}

impl PluginManager {
    /// Create a manager for the given plugin directory and host version.
    /// Fails if the directory does not exist.
    pub fn new(
        plugin_dir: impl Into<PathBuf>,
        host_version: Version,
        services: HostServices,
    ) -> Result<Self> {
        let plugin_dir = plugin_dir.into();
        if !plugin_dir.is_dir() {
            return Err(PluginSystemError::LoadingError {
                path: plugin_dir,
                message: "plugin directory does not exist".to_string(),
            });
        }
        Ok(Self {
            plugin_dir,
            host_version,
            services,
            plugins: Vec::new(),
        })
    }

    pub fn host_version(&self) -> Version {
        self.host_version
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Iterate over the recorded plugins in priority order.
    pub fn plugins(&self) -> impl Iterator<Item = &LoadedPlugin> {
        self.plugins.iter()
    }

    /// Load every candidate library in the plugin directory.
    ///
    /// A candidate that cannot be opened, lacks a required symbol, returns a
    /// null instance or fails the compatibility gate is rejected and logged;
    /// the remaining candidates are still processed. Survivors are
    /// stable-sorted by ascending priority, ties keeping discovery order.
    pub fn load_plugins(&mut self) -> Result<BatchSummary> {
        let candidates = loader::discover_candidates(&self.plugin_dir)?;
        let total = candidates.len();
        let mut loaded = 0;

        for path in &candidates {
            match self.load_candidate(path) {
                Ok(name) => {
                    debug!("loaded plugin '{}' from {}", name, path.display());
                    loaded += 1;
                }
                Err(e) => error!("rejected plugin candidate {}: {}", path.display(), e),
            }
        }

        self.sort_by_priority();
        let summary = BatchSummary { succeeded: loaded, total };
        info!("{} plugins loaded and sorted by priority", summary);
        Ok(summary)
    }

    fn load_candidate(&mut self, path: &Path) -> Result<String> {
        let module = loader::open_module(path)?;
        let raw = module.instantiate(path)?;
        // Valid until the destroyer runs; released below on rejection or by
        // the record on unload.
        let plugin: &mut dyn Plugin = unsafe { &mut **raw };

        if !plugin.is_compatible(&self.host_version) {
            let err = PluginSystemError::IncompatibleVersion {
                plugin: plugin.descriptor().name().to_string(),
                plugin_target: plugin.descriptor().target_host_version(),
                host: self.host_version,
            };
            unsafe { (module.dtor)(raw) };
            drop(module.library);
            return Err(err);
        }

        plugin.bind(self.services.clone());
        let descriptor = plugin.descriptor().clone();
        let name = descriptor.name().to_string();
        self.plugins.push(LoadedPlugin {
            library: Some(module.library),
            instance: Some(PluginInstance::Dynamic { raw, dtor: module.dtor }),
            descriptor,
            state: PluginState::Loaded,
        });
        Ok(name)
    }

    /// Record an in-process plugin, subject to the same compatibility gate
    /// and service injection as a dynamically loaded one.
    pub fn insert_resident(&mut self, mut plugin: Box<dyn Plugin>) -> Result<()> {
        if !plugin.is_compatible(&self.host_version) {
            return Err(PluginSystemError::IncompatibleVersion {
                plugin: plugin.descriptor().name().to_string(),
                plugin_target: plugin.descriptor().target_host_version(),
                host: self.host_version,
            });
        }
        plugin.bind(self.services.clone());
        let descriptor = plugin.descriptor().clone();
        self.plugins.push(LoadedPlugin {
            library: None,
            instance: Some(PluginInstance::Resident(plugin)),
            descriptor,
            state: PluginState::Loaded,
        });
        Ok(())
    }

    /// Stable sort by ascending priority; ties keep insertion order.
    fn sort_by_priority(&mut self) {
        self.plugins.sort_by_key(|record| record.descriptor.priority());
    }

    /// Initialize every loaded plugin in priority order.
    ///
    /// One plugin's failure (or panic) is recorded and logged without
    /// blocking the rest. Only records still in the `Loaded` state count
    /// toward the summary, so a repeated pass reports 0/0 instead of
    /// re-counting plugins that already ran.
    pub fn init_plugins(&mut self, host_args: &[String]) -> BatchSummary {
        self.sort_by_priority();
        let mut total = 0;
        let mut initialized = 0;

        for record in &mut self.plugins {
            if record.state != PluginState::Loaded {
                continue;
            }
            total += 1;
            let name = record.descriptor.name().to_string();
            let Some(plugin) = record.plugin_mut() else {
                continue;
            };
            match panic::catch_unwind(AssertUnwindSafe(|| plugin.init(host_args))) {
                Ok(Ok(())) => {
                    record.state = PluginState::Initialized;
                    initialized += 1;
                }
                Ok(Err(e)) => {
                    record.state = PluginState::InitFailed;
                    error!("failed to initialize plugin '{}': {}", name, e);
                }
                Err(payload) => {
                    record.state = PluginState::InitFailed;
                    error!(
                        "plugin '{}' panicked during init: {}",
                        name,
                        panic_message(&payload)
                    );
                }
            }
        }

        let summary = BatchSummary { succeeded: initialized, total };
        info!("{} plugins initialized", summary);
        summary
    }

    /// Shut down every initialized plugin, in the same priority order as
    /// initialization (not reversed). Plugins whose init failed still get
    /// their shutdown call; failures are logged and non-fatal.
    pub fn shutdown_plugins(&mut self) -> BatchSummary {
        let mut total = 0;
        let mut shut_down = 0;

        for record in &mut self.plugins {
            if !matches!(record.state, PluginState::Initialized | PluginState::InitFailed) {
                continue;
            }
            total += 1;
            let name = record.descriptor.name().to_string();
            let Some(plugin) = record.plugin_mut() else {
                continue;
            };
            match panic::catch_unwind(AssertUnwindSafe(|| plugin.shutdown())) {
                Ok(Ok(())) => {
                    record.state = PluginState::ShutDown;
                    shut_down += 1;
                }
                Ok(Err(e)) => {
                    record.state = PluginState::ShutDown;
                    error!("failed to shut down plugin '{}': {}", name, e);
                }
                Err(payload) => {
                    record.state = PluginState::ShutDown;
                    error!(
                        "plugin '{}' panicked during shutdown: {}",
                        name,
                        panic_message(&payload)
                    );
                }
            }
        }

        let summary = BatchSummary { succeeded: shut_down, total };
        info!("{} plugins shut down", summary);
        summary
    }

    /// Destroy every recorded instance via its destroyer, close every
    /// library and clear the records. A no-op reporting 0/0 when nothing is
    /// loaded.
    pub fn unload_plugins(&mut self) -> BatchSummary {
        let total = self.plugins.len();
        let mut unloaded = 0;

        for record in &mut self.plugins {
            if record.release() {
                unloaded += 1;
            }
        }
        self.plugins.clear();

        let summary = BatchSummary { succeeded: unloaded, total };
        info!("{} plugins unloaded", summary);
        summary
    }

    /// Read a variable from the named plugin.
    ///
    /// An unknown plugin name is logged and yields [`Value::default()`]
    /// rather than an error: a missing peer is an expected condition in a
    /// best-effort batch host. A known plugin without such a variable is a
    /// registry-level lookup failure and propagates.
    pub fn get_variable(
        &self,
        plugin_name: &str,
        var_name: &str,
    ) -> std::result::Result<Value, registry::RegistryError> {
        match self.find_plugin(plugin_name) {
            Some(plugin) => plugin.variables().get(var_name),
            None => {
                error!("plugin '{}' not found", plugin_name);
                Ok(Value::default())
            }
        }
    }

    /// Write a variable on the named plugin. Logged no-op if either the
    /// plugin or the variable does not exist; never creates the variable.
    pub fn set_variable(&mut self, plugin_name: &str, var_name: &str, value: Value) {
        let Some(plugin) = self.find_plugin_mut(plugin_name) else {
            error!("plugin '{}' not found", plugin_name);
            return;
        };
        if let Err(e) = plugin.variables_mut().set(var_name, value) {
            warn!("cannot set variable on plugin '{}': {}", plugin_name, e);
        }
    }

    fn find_plugin(&self, plugin_name: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|record| record.descriptor.name() == plugin_name)
            .and_then(LoadedPlugin::plugin)
    }

    fn find_plugin_mut(&mut self, plugin_name: &str) -> Option<&mut dyn Plugin> {
        self.plugins
            .iter_mut()
            .find(|record| record.descriptor.name() == plugin_name)
            .and_then(LoadedPlugin::plugin_mut)
    }
}

impl Drop for PluginManager {
    /// Safety net: whatever the host did not unload explicitly is released
    /// here, destroyers first, libraries after.
    fn drop(&mut self) {
        if !self.plugins.is_empty() {
            self.unload_plugins();
        }
    }
}

impl fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugin_dir", &self.plugin_dir)
            .field("host_version", &self.host_version)
            .field("plugins", &self.plugins)
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
