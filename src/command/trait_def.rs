// Command trait definitions and the crate-wide error type

use crate::component::ComponentType;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while executing, binding, or reverting commands
///
/// Every failure in the crate surfaces as one of these variants; nothing is
/// swallowed except the documented idempotent no-ops (duplicate invoker
/// registration, re-binding an already bound component, removing an unbound
/// component).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("undo failed: {0}")]
    UndoFailed(String),

    /// The command cannot synthesize arguments for argument-free execution
    #[error("execution without arguments is not implemented for this command")]
    NotImplemented,

    /// A command with the same name is already in the catalog
    #[error("a command named '{0}' has already been added")]
    CommandExists(String),

    /// No command with the given name exists in the catalog
    #[error("a command named '{0}' could not be found")]
    CommandNotFound(String),

    /// No invoker is registered for the component's runtime type
    #[error("no command invoker is registered for component type {0}")]
    InvokerNotFound(ComponentType),

    /// The component's runtime type does not match the invoker's declared type
    #[error("expected a component of type {expected}, got {actual}")]
    TypeMismatch {
        expected: ComponentType,
        actual: ComponentType,
    },

    /// The manager behind a component command has already been dropped
    #[error("the command manager backing this command no longer exists")]
    ManagerDropped,

    /// An argument with the same name is already in the bag
    #[error("an argument named '{0}' has already been added")]
    ArgumentExists(String),

    /// No argument with the given name exists in the bag
    #[error("an argument named '{0}' could not be found")]
    ArgumentNotFound(String),

    /// The argument exists but holds a value of a different type
    #[error("the argument named '{0}' does not hold a value of the requested type")]
    ArgumentType(String),

    /// Undo was requested while the undo history was empty
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo was requested while the redo history was empty
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Shared handle to a command
///
/// Commands are shared between their owners (the catalog, component bindings,
/// aggregates, application code) through this handle and dropped when the last
/// owner lets go. The crate is single-threaded: handles are `Rc<RefCell<_>>`
/// and are neither `Send` nor `Sync`.
pub type CommandRef = Rc<RefCell<dyn Command>>;

/// Shared handle to a revertable command, as stored by the undo history
pub type RevertableRef = Rc<RefCell<dyn RevertableCommand>>;

/// An invokable action bound to the receiver it mutates
///
/// A concrete command owns a shared handle to its receiver, fixed at
/// construction; `execute` performs the action against it. Side effects are
/// entirely receiver-defined and the command system makes no idempotence
/// guarantee of its own.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use uicommand::{Command, CommandResult};
///
/// struct Document {
///     text: String,
/// }
///
/// struct AppendCommand {
///     document: Rc<RefCell<Document>>,
///     text: String,
/// }
///
/// impl Command for AppendCommand {
///     fn execute(&mut self) -> CommandResult<()> {
///         self.document.borrow_mut().text.push_str(&self.text);
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         format!("Append {:?}", self.text)
///     }
/// }
///
/// let document = Rc::new(RefCell::new(Document { text: String::new() }));
/// let mut command = AppendCommand {
///     document: Rc::clone(&document),
///     text: "hello".into(),
/// };
/// command.execute().unwrap();
/// assert_eq!(document.borrow().text, "hello");
/// ```
pub trait Command {
    /// Execute the command against its receiver
    fn execute(&mut self) -> CommandResult<()>;

    /// Get a human-readable description of the command
    ///
    /// Used for UI display (e.g. "Undo: Append Text").
    fn description(&self) -> String;
}

/// A command whose action depends on a caller-supplied argument value
///
/// The argument-free [`Command::execute`] remains part of the contract.
/// Implementations that re-apply the most recently supplied arguments may
/// honor it; those that cannot synthesize arguments must return
/// [`CommandError::NotImplemented`] rather than silently doing nothing.
pub trait ParameterisedCommand: Command {
    /// The type of the arguments this command requires
    type Arguments;

    /// Execute the command with the arguments provided
    fn execute_with(&mut self, arguments: Self::Arguments) -> CommandResult<()>;
}

/// A command that supports undo and redo
///
/// The crate never derives `undo` from `execute`; implementors supply both
/// directions and must ensure that `undo` followed by `redo` leaves the
/// receiver's observable state where the last execution put it. Typically
/// `execute` stores whatever previous state `undo` needs to restore.
pub trait RevertableCommand: Command {
    /// Reverse the effect of the last execution
    fn undo(&mut self) -> CommandResult<()>;

    /// Re-apply the effect that the last undo reversed
    fn redo(&mut self) -> CommandResult<()>;
}
