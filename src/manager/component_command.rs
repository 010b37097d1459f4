// Component command: a command carrying checked/enabled state for its components

use crate::command::trait_def::{Command, CommandError, CommandRef, CommandResult};
use crate::component::{Component, ComponentRef};
use crate::invoker::CommandInvoker;
use crate::manager::{CommandManager, ManagerRef};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A command that drives the visual state of the components bound to it
///
/// Wraps any [`Command`] in a shared cell and keeps a checked flag, an enabled
/// flag, and the list of component instances the command was bound to. Writing
/// a flag fans the new value out to every live instance through the invoker
/// registered for that instance's type, so a "Play" entry in a menu, a toolbar
/// and a context menu all grey out together.
///
/// The manager is held weakly: a `ComponentCommand` outliving its manager
/// fails with [`CommandError::ManagerDropped`] instead of keeping the manager
/// alive through a reference cycle. Component instances are held weakly too
/// and pruned once dropped by the host.
///
/// [`as_command`](Self::as_command) hands out the shared handle; the catalog
/// entry, every component binding, and this wrapper all alias one command
/// object. The wrapped command must not call back into this wrapper from its
/// `execute`; hosts push visual state after execution returns.
pub struct ComponentCommand<C: Command + 'static> {
    state: Rc<RefCell<ComponentState<C>>>,
}

struct ComponentState<C: Command> {
    manager: Weak<RefCell<CommandManager>>,
    command: C,
    checked: bool,
    enabled: bool,
    instances: Vec<Weak<RefCell<dyn Component>>>,
}

impl<C: Command + 'static> ComponentCommand<C> {
    /// Wrap a command; initial state is unchecked and enabled
    pub fn new(manager: &ManagerRef, command: C) -> Self {
        Self {
            state: Rc::new(RefCell::new(ComponentState {
                manager: Rc::downgrade(manager),
                command,
                checked: false,
                enabled: true,
                instances: Vec::new(),
            })),
        }
    }

    /// The shared command handle, for catalog registration and execution
    pub fn as_command(&self) -> CommandRef {
        self.state.clone()
    }

    /// Bind a component instance to this command
    ///
    /// Resolves the invoker for the instance's runtime type through the
    /// manager, binds, and immediately pushes the current checked and enabled
    /// values to that one component. The instance is recorded only after the
    /// invoker accepted the binding; on failure nothing is recorded.
    pub fn add_instance(&mut self, component: &ComponentRef) -> CommandResult<()> {
        let manager = self.upgrade_manager()?;
        let (checked, enabled) = {
            let state = self.state.borrow();
            (state.checked, state.enabled)
        };
        {
            let mut manager = manager.borrow_mut();
            let invoker = manager.get_command_invoker(component)?;
            invoker.add_instance(component, self.as_command())?;
            invoker.update_checked_state(component, checked);
            invoker.update_enabled_state(component, enabled);
        }
        self.state
            .borrow_mut()
            .instances
            .push(Rc::downgrade(component));
        Ok(())
    }

    /// Set the checked state and fan it out to every live bound instance
    ///
    /// The stored flag is updated only after the fan-out succeeded.
    pub fn set_checked(&mut self, checked: bool) -> CommandResult<()> {
        self.fan_out(|invoker, component| invoker.update_checked_state(component, checked))?;
        self.state.borrow_mut().checked = checked;
        Ok(())
    }

    /// Set the enabled state and fan it out to every live bound instance
    pub fn set_enabled(&mut self, enabled: bool) -> CommandResult<()> {
        self.fan_out(|invoker, component| invoker.update_enabled_state(component, enabled))?;
        self.state.borrow_mut().enabled = enabled;
        Ok(())
    }

    /// The stored checked state
    pub fn checked(&self) -> bool {
        self.state.borrow().checked
    }

    /// The stored enabled state
    pub fn enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    /// Number of recorded component instances, dead ones included until the
    /// next fan-out prunes them
    pub fn instance_count(&self) -> usize {
        self.state.borrow().instances.len()
    }

    fn upgrade_manager(&self) -> CommandResult<ManagerRef> {
        self.state
            .borrow()
            .manager
            .upgrade()
            .ok_or(CommandError::ManagerDropped)
    }

    fn fan_out(
        &mut self,
        mut push: impl FnMut(&mut dyn CommandInvoker, &ComponentRef),
    ) -> CommandResult<()> {
        let manager = self.upgrade_manager()?;
        let instances = self.state.borrow().instances.clone();
        let mut live = Vec::with_capacity(instances.len());
        {
            let mut manager = manager.borrow_mut();
            for weak in instances {
                let Some(component) = weak.upgrade() else {
                    tracing::debug!("pruning a dropped component instance from fan-out");
                    continue;
                };
                let invoker = manager.get_command_invoker(&component)?;
                push(invoker, &component);
                live.push(weak);
            }
        }
        self.state.borrow_mut().instances = live;
        Ok(())
    }
}

impl<C: Command + 'static> Command for ComponentCommand<C> {
    fn execute(&mut self) -> CommandResult<()> {
        self.state.borrow_mut().execute()
    }

    fn description(&self) -> String {
        self.state.borrow().description()
    }
}

impl<C: Command> Command for ComponentState<C> {
    fn execute(&mut self) -> CommandResult<()> {
        self.command.execute()
    }

    fn description(&self) -> String {
        self.command.description()
    }
}
