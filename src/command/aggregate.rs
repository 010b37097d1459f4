// Aggregate command: composes commands into one

use crate::command::trait_def::{Command, CommandRef, CommandResult};

/// A command that executes a sequence of child commands as one action
///
/// Children run in insertion order. Execution is fail-fast: the first child
/// error is returned as the aggregate's own error and the remaining children
/// are not executed. Already-executed children are not rolled back, so a
/// failed aggregate may leave receivers partially updated.
///
/// An empty aggregate executes successfully as a no-op.
pub struct AggregateCommand {
    commands: Vec<CommandRef>,
}

impl AggregateCommand {
    /// Create an aggregate with no children
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create an aggregate from an existing sequence of commands
    pub fn with_commands(commands: impl IntoIterator<Item = CommandRef>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Append a command to the end of the sequence
    pub fn add(&mut self, command: CommandRef) {
        self.commands.push(command);
    }

    /// Number of child commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the aggregate has no children
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for AggregateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CommandRef> for AggregateCommand {
    fn from_iter<I: IntoIterator<Item = CommandRef>>(iter: I) -> Self {
        Self::with_commands(iter)
    }
}

impl Command for AggregateCommand {
    fn execute(&mut self) -> CommandResult<()> {
        for command in &self.commands {
            command.borrow_mut().execute()?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Aggregate of {} commands", self.commands.len())
    }
}
