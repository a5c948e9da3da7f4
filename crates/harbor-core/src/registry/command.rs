//! Command registry: named invocables with declared arity.

use log::warn;

use crate::registry::error::{RegistryError, Result};
use crate::value::Value;

/// Bound invocable of a command. Receives the effective argument list (the
/// provided arguments completed with trailing defaults) and returns the
/// command's result sequence.
pub type CommandFn = Box<dyn Fn(&[Value]) -> Vec<Value> + Send>;

/// One registered command.
pub struct CommandEntry {
    name: String,
    alias: Option<String>,
    description: String,
    arg_count: usize,
    return_count: usize,
    defaults: Vec<Value>,
    handler: CommandFn,
}

impl CommandEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    pub fn return_count(&self) -> usize {
        self.return_count
    }

    pub fn defaults(&self) -> &[Value] {
        &self.defaults
    }

    fn matches(&self, name_or_alias: &str) -> bool {
        self.name == name_or_alias || self.alias.as_deref() == Some(name_or_alias)
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("arg_count", &self.arg_count)
            .field("return_count", &self.return_count)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of commands owned by one plugin.
///
/// Lookups resolve against the first entry whose name or alias matches.
/// Registering a name twice is accepted; the second entry is unreachable
/// until the first is removed (a warning is logged at registration time).
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    ///
    /// `defaults` are trailing default arguments: a command declared with
    /// `arg_count` parameters and `n` defaults can be invoked with anywhere
    /// from `arg_count - n` to `arg_count` arguments.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        arg_count: usize,
        return_count: usize,
        handler: CommandFn,
        defaults: Vec<Value>,
    ) -> Result<()> {
        let name = name.into();
        if defaults.len() > arg_count {
            return Err(RegistryError::TooManyDefaults {
                command: name,
                expected: arg_count,
                defaults: defaults.len(),
            });
        }
        if self.commands.iter().any(|cmd| cmd.name == name) {
            warn!("command '{}' registered twice; later entry is shadowed", name);
        }
        self.commands.push(CommandEntry {
            name,
            alias: None,
            description: description.into(),
            arg_count,
            return_count,
            defaults,
            handler,
        });
        Ok(())
    }

    /// Attach an alias to the command with the given exact name.
    /// Returns false if no such command exists.
    pub fn set_alias(&mut self, name: &str, alias: impl Into<String>) -> bool {
        for cmd in &mut self.commands {
            if cmd.name == name {
                cmd.alias = Some(alias.into());
                return true;
            }
        }
        false
    }

    /// Whether `alias` is registered as an alias of some command.
    pub fn is_alias(&self, alias: &str) -> bool {
        self.commands.iter().any(|cmd| cmd.alias.as_deref() == Some(alias))
    }

    /// Alias of the command with the given exact name, if any.
    pub fn alias_of(&self, name: &str) -> Result<Option<&str>> {
        self.commands
            .iter()
            .find(|cmd| cmd.name == name)
            .map(|cmd| cmd.alias.as_deref())
            .ok_or_else(|| RegistryError::CommandNotFound(name.to_string()))
    }

    /// Remove the first command matching the given name or alias.
    /// Returns false if nothing matched.
    pub fn remove(&mut self, name_or_alias: &str) -> bool {
        match self.commands.iter().position(|cmd| cmd.matches(name_or_alias)) {
            Some(index) => {
                self.commands.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name_or_alias: &str) -> bool {
        self.find(name_or_alias).is_ok()
    }

    /// Names of all registered commands, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|cmd| cmd.name.as_str()).collect()
    }

    pub fn describe(&self, name_or_alias: &str) -> Result<&str> {
        self.find(name_or_alias).map(|cmd| cmd.description.as_str())
    }

    pub fn arg_count(&self, name_or_alias: &str) -> Result<usize> {
        self.find(name_or_alias).map(|cmd| cmd.arg_count)
    }

    pub fn return_count(&self, name_or_alias: &str) -> Result<usize> {
        self.find(name_or_alias).map(|cmd| cmd.return_count)
    }

    /// First entry whose name or alias matches.
    pub fn find(&self, name_or_alias: &str) -> Result<&CommandEntry> {
        self.commands
            .iter()
            .find(|cmd| cmd.matches(name_or_alias))
            .ok_or_else(|| RegistryError::CommandNotFound(name_or_alias.to_string()))
    }

    /// Invoke a command by name or alias.
    ///
    /// The effective argument list is the provided arguments followed by the
    /// trailing defaults needed to reach the declared arity. Providing more
    /// than `arg_count` arguments, or too few for the defaults to cover, is
    /// an arity mismatch.
    pub fn invoke(&self, name_or_alias: &str, args: &[Value]) -> Result<Vec<Value>> {
        let cmd = self.find(name_or_alias)?;

        if args.len() > cmd.arg_count || args.len() + cmd.defaults.len() < cmd.arg_count {
            return Err(RegistryError::ArityMismatch {
                command: name_or_alias.to_string(),
                expected: cmd.arg_count,
                defaults: cmd.defaults.len(),
                provided: args.len(),
            });
        }

        let mut effective = Vec::with_capacity(cmd.arg_count);
        effective.extend_from_slice(args);
        // Fill the tail from the trailing defaults.
        let skip = args.len() + cmd.defaults.len() - cmd.arg_count;
        effective.extend_from_slice(&cmd.defaults[skip..]);

        Ok((cmd.handler)(&effective))
    }
}
