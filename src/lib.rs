// uicommand - Command pattern toolkit for UI applications

pub mod command;
pub mod component;
pub mod invoker;
pub mod manager;
pub mod undo;

// Re-export commonly used types for convenience
pub use command::{
    AggregateCommand, Arguments, Command, CommandError, CommandRef, CommandResult,
    ParameterisedCommand, RevertableCommand, RevertableRef,
};
pub use component::{Component, ComponentId, ComponentRef, ComponentType, TriggerHandler};
pub use invoker::{CommandInvoker, TypedCommandInvoker};
pub use manager::{CommandManager, ComponentCommand, ManagerRef};
pub use undo::UndoStack;
