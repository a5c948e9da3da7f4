use std::path::PathBuf;

use clap::Parser;

/// Harbor: a dynamically-loaded plugin host
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory to scan for plugin libraries
    #[arg(long, default_value = "./plugins")]
    pub plugin_dir: PathBuf,

    /// Host version advertised to plugins for the compatibility gate
    #[arg(long, default_value = "1.0.0")]
    pub host_version: String,

    /// Arguments forwarded to every plugin's init hook
    #[arg(trailing_var_arg = true)]
    pub plugin_args: Vec<String>,
}
