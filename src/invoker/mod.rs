// Invokers: adapters that wire commands to component triggers
//
// An invoker owns the bindings between component instances of one concrete
// type and the commands they trigger. The CommandManager routes components to
// the invoker registered for their runtime type; TypedCommandInvoker is the
// ready-made implementation and custom invokers can implement CommandInvoker
// directly when a toolkit needs bespoke wiring.

use crate::command::trait_def::{CommandError, CommandRef, CommandResult};
use crate::component::{Component, ComponentId, ComponentRef, ComponentType, TriggerHandler};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

/// Adapter between commands and component instances of one runtime type
///
/// Object-safe so the manager can hold a registry of `Box<dyn CommandInvoker>`
/// keyed by [`ComponentType`].
pub trait CommandInvoker {
    /// The component type this invoker serves; the registry key
    fn component_type(&self) -> ComponentType;

    /// Bind a command to a component instance and connect its trigger
    ///
    /// The component is type-checked first; a component of another runtime
    /// type fails with [`CommandError::TypeMismatch`] and nothing is
    /// connected. Binding a component that is already bound is ignored, even
    /// with a different command.
    ///
    /// Once bound, each trigger firing executes the bound command. Execution
    /// failures are logged and not rethrown into the host's event dispatch.
    fn add_instance(
        &mut self,
        component: &ComponentRef,
        command: CommandRef,
    ) -> CommandResult<()>;

    /// Disconnect a component's trigger and drop its binding
    ///
    /// For components of the served type the trigger is disconnected
    /// unconditionally, even if the component was never bound. Components of
    /// another runtime type are skipped silently: their triggers belong to a
    /// different invoker and are left untouched.
    fn remove_instance(&mut self, component: &ComponentRef) -> CommandResult<()>;

    /// Push an enabled state onto the component's visuals
    ///
    /// Components of another runtime type are skipped silently.
    fn update_enabled_state(&mut self, component: &ComponentRef, enabled: bool);

    /// Push a checked state onto the component's visuals
    ///
    /// Components of another runtime type are skipped silently.
    fn update_checked_state(&mut self, component: &ComponentRef, checked: bool);
}

/// Ready-made invoker for any [`Component`] implementation
///
/// Bindings live behind a shared cell so each connected trigger handler can
/// look its command up at fire time; a command swapped in for a component id
/// by a later binding would be picked up without re-wiring the trigger.
pub struct TypedCommandInvoker<C: Component + 'static> {
    bindings: Rc<RefCell<HashMap<ComponentId, CommandRef>>>,
    _component: PhantomData<C>,
}

impl<C: Component + 'static> TypedCommandInvoker<C> {
    /// Create an invoker with no bindings
    pub fn new() -> Self {
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
            _component: PhantomData,
        }
    }

    /// The command currently bound to a component instance
    ///
    /// # Panics
    /// Panics when no command is bound to `id`: asking for a binding that was
    /// never made is a programming error, not a recoverable condition.
    pub fn command_for_instance(&self, id: ComponentId) -> CommandRef {
        self.bindings
            .borrow()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| panic!("no command is bound to component {id}"))
    }

    /// Whether a component instance currently has a bound command
    pub fn is_bound(&self, id: ComponentId) -> bool {
        self.bindings.borrow().contains_key(&id)
    }

    /// Number of bound component instances
    pub fn instance_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    fn checked_id(&self, component: &ComponentRef) -> CommandResult<ComponentId> {
        let (id, actual) = {
            let component = component.borrow();
            (component.id(), component.component_type())
        };
        let expected = ComponentType::of::<C>();
        if actual != expected {
            return Err(CommandError::TypeMismatch { expected, actual });
        }
        Ok(id)
    }
}

impl<C: Component + 'static> Default for TypedCommandInvoker<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component + 'static> CommandInvoker for TypedCommandInvoker<C> {
    fn component_type(&self) -> ComponentType {
        ComponentType::of::<C>()
    }

    fn add_instance(
        &mut self,
        component: &ComponentRef,
        command: CommandRef,
    ) -> CommandResult<()> {
        let id = self.checked_id(component)?;
        if self.bindings.borrow().contains_key(&id) {
            tracing::debug!("component {} is already bound to a command, ignoring re-bind", id);
            return Ok(());
        }
        self.bindings.borrow_mut().insert(id, command);

        // The handler resolves its command at fire time so it never outlives
        // the binding: after remove_instance the map entry is gone and a stale
        // handler could only be reached through a trigger the component failed
        // to disconnect.
        let bindings = Rc::clone(&self.bindings);
        let handler: TriggerHandler = Rc::new(move || {
            let command = bindings
                .borrow()
                .get(&id)
                .cloned()
                .expect("trigger fired for a component with no bound command");
            if let Err(e) = command.borrow_mut().execute() {
                tracing::warn!("command bound to component {} failed: {}", id, e);
            }
        });
        component.borrow_mut().connect_trigger(handler);
        Ok(())
    }

    fn remove_instance(&mut self, component: &ComponentRef) -> CommandResult<()> {
        let Ok(id) = self.checked_id(component) else {
            tracing::debug!("removal skipped for a component of another type");
            return Ok(());
        };
        component.borrow_mut().disconnect_trigger();
        if self.bindings.borrow_mut().remove(&id).is_none() {
            tracing::debug!("component {} was never bound, nothing to remove", id);
        }
        Ok(())
    }

    fn update_enabled_state(&mut self, component: &ComponentRef, enabled: bool) {
        if self.checked_id(component).is_ok() {
            component.borrow_mut().set_enabled(enabled);
        }
    }

    fn update_checked_state(&mut self, component: &ComponentRef, checked: bool) {
        if self.checked_id(component).is_ok() {
            component.borrow_mut().set_checked(checked);
        }
    }
}
