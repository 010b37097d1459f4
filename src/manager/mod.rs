// Command manager: named command catalog and invoker registry
//
// The manager is the application-wide hub commands and components meet at.
// It owns two maps: command name -> command, and component type -> invoker.
// Hosts construct one (or several; there is no global instance), register an
// invoker per widget type at startup, and add commands as features come up.
//
// Architecture:
// - CommandManager: the two catalogs, shared as ManagerRef
// - ComponentCommand: a command wrapper that fans checked/enabled state out
//   to every component instance bound to it (see component_command.rs)

pub mod component_command;

pub use component_command::ComponentCommand;

use crate::command::trait_def::{CommandError, CommandRef, CommandResult};
use crate::component::{ComponentRef, ComponentType};
use crate::invoker::CommandInvoker;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a command manager
///
/// Component commands hold this weakly; the application decides when the
/// manager dies.
pub type ManagerRef = Rc<RefCell<CommandManager>>;

/// Catalog of named commands plus the invoker registry
pub struct CommandManager {
    commands: HashMap<String, CommandRef>,
    invokers: HashMap<ComponentType, Box<dyn CommandInvoker>>,
}

impl CommandManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            invokers: HashMap::new(),
        }
    }

    /// Create an empty manager already wrapped in the shared handle
    pub fn shared() -> ManagerRef {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Add a command to the catalog under a unique name
    ///
    /// Fails with [`CommandError::CommandExists`] when the name is taken; the
    /// existing entry is untouched.
    pub fn add_command(
        &mut self,
        name: impl Into<String>,
        command: CommandRef,
    ) -> CommandResult<()> {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(CommandError::CommandExists(name));
        }
        self.commands.insert(name, command);
        Ok(())
    }

    /// Look up a command by name
    pub fn get_command(&self, name: &str) -> CommandResult<CommandRef> {
        self.commands
            .get(name)
            .cloned()
            .ok_or_else(|| CommandError::CommandNotFound(name.to_string()))
    }

    /// Remove a command from the catalog, returning the evicted handle
    ///
    /// Other owners of the handle (bindings, histories) are unaffected.
    pub fn remove_command(&mut self, name: &str) -> CommandResult<CommandRef> {
        self.commands
            .remove(name)
            .ok_or_else(|| CommandError::CommandNotFound(name.to_string()))
    }

    /// Number of commands in the catalog
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Register an invoker for the component type it serves
    ///
    /// At most one invoker per component type: the first registration wins
    /// and later ones are dropped with a debug log.
    pub fn register_command_invoker(&mut self, invoker: Box<dyn CommandInvoker>) {
        let component_type = invoker.component_type();
        if self.invokers.contains_key(&component_type) {
            tracing::debug!("an invoker for {} is already registered, ignoring", component_type);
            return;
        }
        self.invokers.insert(component_type, invoker);
    }

    /// The invoker serving a component instance's runtime type
    pub fn get_command_invoker(
        &mut self,
        component: &ComponentRef,
    ) -> CommandResult<&mut dyn CommandInvoker> {
        let component_type = component.borrow().component_type();
        self.invoker_for_type(component_type)
    }

    /// The invoker registered for a component type
    pub fn invoker_for_type(
        &mut self,
        component_type: ComponentType,
    ) -> CommandResult<&mut dyn CommandInvoker> {
        match self.invokers.get_mut(&component_type) {
            Some(invoker) => Ok(invoker.as_mut()),
            None => Err(CommandError::InvokerNotFound(component_type)),
        }
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}
