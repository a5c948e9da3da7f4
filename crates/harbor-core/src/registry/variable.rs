//! Variable registry: named mutable values owned by one plugin.

use crate::registry::error::{RegistryError, Result};
use crate::value::Value;

/// One registered variable.
#[derive(Debug, Clone)]
pub struct VariableEntry {
    name: String,
    description: String,
    value: Value,
}

impl VariableEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Ordered collection of variables owned by one plugin.
///
/// Names are unique within a registry: [`add`](VariableRegistry::add) rejects
/// duplicates and [`set`](VariableRegistry::set) never auto-creates.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    variables: Vec<VariableEntry>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable. Fails with `AlreadyRegistered` if the name exists.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        value: Value,
    ) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.variables.push(VariableEntry {
            name,
            description: description.into(),
            value,
        });
        Ok(())
    }

    /// Remove the variable with the given name. Returns false if absent.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.variables.iter().position(|var| var.name == name) {
            Some(index) => {
                self.variables.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrite an existing variable's value. Fails with `VariableNotFound`
    /// if the name was never added; this never creates the variable.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        for var in &mut self.variables {
            if var.name == name {
                var.value = value;
                return Ok(());
            }
        }
        Err(RegistryError::VariableNotFound(name.to_string()))
    }

    /// Current value of a variable.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value.clone())
            .ok_or_else(|| RegistryError::VariableNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.iter().any(|var| var.name == name)
    }

    /// Names of all variables, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|var| var.name.as_str()).collect()
    }

    pub fn describe(&self, name: &str) -> Result<&str> {
        self.variables
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.description.as_str())
            .ok_or_else(|| RegistryError::VariableNotFound(name.to_string()))
    }
}
