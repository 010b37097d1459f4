// Command Pattern core: traits, argument bag, and composition
//
// This module defines the command abstractions the rest of the crate builds
// on. Everything an application triggers through the UI goes through Command.
//
// Architecture:
// - Command trait: Defines execute() and description()
// - ParameterisedCommand trait: execute_with() for commands that take arguments
// - RevertableCommand trait: undo()/redo() for commands the history can revert
// - Arguments: ordered name/value bag for dynamically assembled parameters
// - AggregateCommand: runs a sequence of commands as one action

pub mod aggregate;
pub mod arguments;
pub mod trait_def;

pub use aggregate::AggregateCommand;
pub use arguments::Arguments;
pub use trait_def::{
    Command, CommandError, CommandRef, CommandResult, ParameterisedCommand, RevertableCommand,
    RevertableRef,
};
