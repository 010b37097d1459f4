// UndoStack - linear undo/redo history over revertable commands

use crate::command::trait_def::{CommandError, CommandResult, RevertableRef};
use std::collections::VecDeque;

/// Linear undo/redo history
///
/// The UndoStack maintains two stacks:
/// - Undo stack: Commands that have been executed and can be undone
/// - Redo stack: Commands that have been undone and can be redone
///
/// Recording is decoupled from execution: callers execute a command first and
/// then [`add`](Self::add) it. Adding a command:
/// 1. Pushes it onto the undo stack
/// 2. Clears the redo stack (the history is on a new timeline)
/// 3. Trims the oldest entry past the configured limit, if any
///
/// # Memory Management
/// [`UndoStack::new`] keeps the entire history, so `undo_count`/`redo_count`
/// are exact at all times. [`UndoStack::with_limit`] caps the undo stack to
/// prevent unbounded growth in long-lived applications; when the limit is
/// reached the oldest command is dropped.
pub struct UndoStack {
    /// Stack of commands that can be undone (most recent at the back)
    undo_stack: VecDeque<RevertableRef>,

    /// Stack of commands that can be redone (most recent at the back)
    redo_stack: VecDeque<RevertableRef>,

    /// Maximum number of commands to keep, `None` for unbounded
    limit: Option<usize>,
}

impl UndoStack {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` undoable commands
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(limit),
            redo_stack: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Record an already-executed command as the most recent undoable action
    ///
    /// Never executes the command. Any redoable commands are discarded: after
    /// a new action the old redo timeline is unreachable.
    pub fn add(&mut self, command: RevertableRef) {
        self.undo_stack.push_back(command);
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }

    /// Undo the most recent command
    ///
    /// Pops the command, calls its `undo`, moves it to the redo stack, and
    /// returns its description for UI display.
    ///
    /// # Errors
    /// [`CommandError::NothingToUndo`] when the history is empty. A failing
    /// `undo` propagates the command's own error and drops the command from
    /// the history; its state is no longer trustworthy on either stack.
    pub fn undo(&mut self) -> CommandResult<String> {
        let command = self
            .undo_stack
            .pop_back()
            .ok_or(CommandError::NothingToUndo)?;

        let description = command.borrow().description();
        command.borrow_mut().undo()?;
        self.redo_stack.push_back(command);

        Ok(description)
    }

    /// Redo the most recently undone command
    ///
    /// Pops the command, calls its `redo`, moves it back to the undo stack,
    /// and returns its description.
    ///
    /// # Errors
    /// [`CommandError::NothingToRedo`] when there is nothing to redo. A
    /// failing `redo` propagates the command's own error and drops the
    /// command from the history.
    pub fn redo(&mut self) -> CommandResult<String> {
        let command = self
            .redo_stack
            .pop_back()
            .ok_or(CommandError::NothingToRedo)?;

        let description = command.borrow().description();
        command.borrow_mut().redo()?;
        self.undo_stack.push_back(command);

        Ok(description)
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack
            .back()
            .map(|command| command.borrow().description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack
            .back()
            .map(|command| command.borrow().description())
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
