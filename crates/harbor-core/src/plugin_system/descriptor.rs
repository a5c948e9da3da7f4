use std::fmt;

use crate::plugin_system::version::Version;

/// Coarse plugin classification, used for diagnostics and host policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCategory {
    /// System-level plugin.
    System,
    /// Plugin backing a base service of the host.
    Core,
    /// Feature module.
    Module,
    /// Anything else.
    Default,
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluginCategory::System => "system",
            PluginCategory::Core => "core",
            PluginCategory::Module => "module",
            PluginCategory::Default => "default",
        };
        write!(f, "{}", name)
    }
}

/// Immutable metadata a plugin declares about itself.
///
/// The descriptor is fixed at construction; the manager snapshots it at load
/// time and keeps the snapshot for the record's whole lifetime.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    name: String,
    author: String,
    description: String,
    version: Version,
    target_host_version: Version,
    priority: i32,
    category: PluginCategory,
}

impl PluginDescriptor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        version: Version,
        target_host_version: Version,
        priority: i32,
        category: PluginCategory,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            description: description.into(),
            version,
            target_host_version,
            priority,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Host version the plugin was built against.
    pub fn target_host_version(&self) -> Version {
        self.target_host_version
    }

    /// Initialization ordering key; lower priority initializes first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn category(&self) -> PluginCategory {
        self.category
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} by {} (category: {}, priority: {}, targets host {})",
            self.name,
            self.version,
            self.author,
            self.category,
            self.priority,
            self.target_host_version,
        )
    }
}
