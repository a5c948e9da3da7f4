//! The plugin contract.
//!
//! Every loadable module implements [`Plugin`]: a fixed descriptor, a
//! command registry, a variable registry and the init/shutdown lifecycle
//! hooks. [`PluginBase`] carries the state all of those need so a concrete
//! plugin can delegate the boilerplate to an embedded field.

use log::{LevelFilter, Log};

use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::version::Version;
use crate::registry::{CommandRegistry, VariableRegistry};
use crate::resources::ResourceRegistry;
use crate::utils::Shared;

/// Shared host facilities injected into every plugin before `init` runs.
///
/// A dynamically loaded module has its own copy of the `log` crate's global
/// state, so the host's logger instance and active level are passed across
/// the boundary explicitly; [`install_logger`](HostServices::install_logger)
/// wires them up on the plugin side.
#[derive(Clone)]
pub struct HostServices {
    logger: &'static dyn Log,
    log_level: LevelFilter,
    resources: Shared<ResourceRegistry>,
}

impl HostServices {
    /// Capture the host's current logger and the given resource registry.
    pub fn new(resources: Shared<ResourceRegistry>) -> Self {
        Self {
            logger: log::logger(),
            log_level: log::max_level(),
            resources,
        }
    }

    /// The process-wide resource registry.
    pub fn resources(&self) -> &Shared<ResourceRegistry> {
        &self.resources
    }

    /// Route this module's `log` macros to the host's sink.
    ///
    /// No-op if a logger is already installed in this module, which is the
    /// case for statically linked plugins sharing the host's `log` state.
    pub fn install_logger(&self) {
        if log::set_logger(self.logger).is_ok() {
            log::set_max_level(self.log_level);
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("log_level", &self.log_level)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

/// Contract implemented by every loadable module.
///
/// The manager calls `bind` exactly once after a successful load and
/// compatibility check, `init` exactly once afterwards, and `shutdown`
/// exactly once before the instance is destroyed. `init` typically registers
/// the plugin's own commands and variables on its registries.
pub trait Plugin: Send {
    /// The plugin's fixed metadata.
    fn descriptor(&self) -> &PluginDescriptor;

    /// The plugin's command registry.
    fn commands(&self) -> &CommandRegistry;
    fn commands_mut(&mut self) -> &mut CommandRegistry;

    /// The plugin's variable registry.
    fn variables(&self) -> &VariableRegistry;
    fn variables_mut(&mut self) -> &mut VariableRegistry;

    /// Receive the shared host facilities. Called once, before `init`.
    fn bind(&mut self, services: HostServices);

    /// Initialize the plugin with the host's arguments.
    fn init(&mut self, host_args: &[String]) -> Result<(), PluginSystemError>;

    /// Stop the plugin before it is destroyed.
    fn shutdown(&mut self) -> Result<(), PluginSystemError>;

    /// Whether the plugin can run against the given host version.
    fn is_compatible(&self, host_version: &Version) -> bool {
        self.descriptor()
            .target_host_version()
            .is_compatible_with(host_version)
    }
}

/// State common to every plugin implementation: descriptor, registries and
/// the bound host services. Concrete plugins embed one and delegate the
/// `Plugin` accessors to it.
#[derive(Debug)]
pub struct PluginBase {
    descriptor: PluginDescriptor,
    commands: CommandRegistry,
    variables: VariableRegistry,
    services: Option<HostServices>,
}

impl PluginBase {
    pub fn new(descriptor: PluginDescriptor) -> Self {
        Self {
            descriptor,
            commands: CommandRegistry::new(),
            variables: VariableRegistry::new(),
            services: None,
        }
    }

    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandRegistry {
        &mut self.commands
    }

    pub fn variables(&self) -> &VariableRegistry {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariableRegistry {
        &mut self.variables
    }

    /// Store the injected services and route logging to the host sink.
    pub fn bind(&mut self, services: HostServices) {
        services.install_logger();
        self.services = Some(services);
    }

    /// The bound host services. `None` until the manager calls `bind`.
    pub fn services(&self) -> Option<&HostServices> {
        self.services.as_ref()
    }
}
