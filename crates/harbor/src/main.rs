mod cli;

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{error, info};

use harbor_core::plugin_system::{HostServices, PluginManager, Version};
use harbor_core::resources::ResourceRegistry;
use harbor_core::utils::Shared;

use crate::cli::CliArgs;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    let host_version = match Version::from_str(&args.host_version) {
        Ok(version) => version,
        Err(e) => {
            error!("invalid --host-version '{}': {}", args.host_version, e);
            return ExitCode::FAILURE;
        }
    };

    // The one resource registry of this process; every plugin gets a handle.
    let resources = Shared::new(ResourceRegistry::new());
    let services = HostServices::new(resources.clone());

    let mut manager = match PluginManager::new(&args.plugin_dir, host_version, services) {
        Ok(manager) => manager,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = manager.load_plugins() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    manager.init_plugins(&args.plugin_args);

    for record in manager.plugins() {
        info!("{}", record.descriptor());
        info!("  description: {}", record.descriptor().description());
        if let Some(plugin) = record.plugin() {
            info!("  variables: {:?}", plugin.variables().names());
            info!("  commands: {:?}", plugin.commands().names());
        }
    }

    manager.shutdown_plugins();
    manager.unload_plugins();

    ExitCode::SUCCESS
}
