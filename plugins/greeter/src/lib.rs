//! Demo plugin: registers one command and one variable, and publishes a
//! resource into the shared registry.

use log::info;

use harbor_core::declare_plugin;
use harbor_core::plugin_system::{
    HostServices, Plugin, PluginBase, PluginCategory, PluginDescriptor, PluginSystemError, Version,
};
use harbor_core::registry::{CommandRegistry, VariableRegistry};
use harbor_core::value::Value;

pub struct GreeterPlugin {
    base: PluginBase,
}

impl GreeterPlugin {
    pub fn new() -> Self {
        let descriptor = PluginDescriptor::new(
            "greeter",
            "Harbor Developers",
            "Greets whoever asks",
            Version::new(0, 1, 0),
            Version::new(1, 0, 0),
            10,
            PluginCategory::Module,
        );
        Self {
            base: PluginBase::new(descriptor),
        }
    }
}

impl Default for GreeterPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for GreeterPlugin {
    fn descriptor(&self) -> &PluginDescriptor {
        self.base.descriptor()
    }

    fn commands(&self) -> &CommandRegistry {
        self.base.commands()
    }

    fn commands_mut(&mut self) -> &mut CommandRegistry {
        self.base.commands_mut()
    }

    fn variables(&self) -> &VariableRegistry {
        self.base.variables()
    }

    fn variables_mut(&mut self) -> &mut VariableRegistry {
        self.base.variables_mut()
    }

    fn bind(&mut self, services: HostServices) {
        self.base.bind(services);
    }

    fn init(&mut self, host_args: &[String]) -> Result<(), PluginSystemError> {
        info!("greeter starting with {} host argument(s)", host_args.len());

        let to_error = |e: harbor_core::registry::RegistryError| PluginSystemError::InitializationError {
            plugin: "greeter".to_string(),
            message: e.to_string(),
        };

        self.base
            .commands_mut()
            .register(
                "greet",
                "Builds a greeting for the given name",
                1,
                1,
                Box::new(|args| vec![Value::from(format!("Hello, {}!", args[0]))]),
                vec![Value::from("world")],
            )
            .map_err(to_error)?;
        self.base.commands_mut().set_alias("greet", "g");

        self.base
            .variables_mut()
            .add("greeting_count", "Number of greetings produced", Value::U64(0))
            .map_err(to_error)?;

        if let Some(services) = self.base.services() {
            services
                .resources()
                .register("greeter.motd", Value::from("Welcome aboard"));
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PluginSystemError> {
        info!("greeter shutting down");
        Ok(())
    }
}

declare_plugin!(GreeterPlugin::new());
