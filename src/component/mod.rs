// UI component abstraction: identity types and the Component trait
//
// Commands are bound to components (buttons, menu items, toolbar entries)
// through invokers. The crate never talks to a real widget toolkit; it sees
// components only through this trait, so any toolkit can participate by
// wrapping its widgets in an implementation.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier for a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Generate a new unique component id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime type descriptor for a component
///
/// Invokers are registered per component type; this is the registry key. Two
/// components report the same `ComponentType` exactly when they are the same
/// Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
    id: TypeId,
    name: &'static str,
}

impl ComponentType {
    /// The type descriptor of a concrete component type
    pub fn of<C: Component + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    /// The component type's name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Callback a component runs when the user activates it
pub type TriggerHandler = Rc<dyn Fn()>;

/// Shared handle to a component
pub type ComponentRef = Rc<RefCell<dyn Component>>;

/// A UI element that can trigger a command and reflect command state
///
/// A component carries one trigger (click, menu selection) and two visual
/// states (enabled, checked). Invokers connect the trigger to command
/// execution and push visual state onto the component; the component itself
/// knows nothing about commands.
///
/// # Sharing and re-entrancy
///
/// Components are shared as [`ComponentRef`]. A host that fires the trigger
/// must clone the handler out of the component and release its borrow before
/// invoking it: trigger handlers re-enter the command system and may call back
/// into the component, for example to push a new checked state. For the same
/// reason the visual setters must never fire the trigger.
pub trait Component {
    /// The component's runtime type descriptor
    ///
    /// Implementations return `ComponentType::of::<Self>()`.
    fn component_type(&self) -> ComponentType;

    /// The component's unique id
    fn id(&self) -> ComponentId;

    /// Install the trigger handler, replacing any previous one
    fn connect_trigger(&mut self, handler: TriggerHandler);

    /// Remove the trigger handler, if any
    fn disconnect_trigger(&mut self);

    /// Push the enabled state onto the component's visuals
    fn set_enabled(&mut self, enabled: bool);

    /// Push the checked state onto the component's visuals
    ///
    /// Components without a checked visual ignore this.
    fn set_checked(&mut self, _checked: bool) {}

    /// The component as [`Any`], for invokers that need the concrete type
    fn as_any(&self) -> &dyn Any;

    /// Mutable access to the component as [`Any`]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
