// Named argument bag for parameterised commands

use crate::command::trait_def::{CommandError, CommandResult};
use indexmap::IndexMap;
use std::any::Any;

/// An ordered collection of named, heterogeneously typed argument values
///
/// Useful as the argument type of a [`ParameterisedCommand`] whose parameters
/// are assembled dynamically, e.g. gathered from a form before submission.
/// Names are unique and iterate in insertion order; values are stored behind
/// [`Any`] and recovered by downcasting to the type the caller expects.
///
/// [`ParameterisedCommand`]: crate::command::ParameterisedCommand
///
/// # Example
/// ```
/// use uicommand::Arguments;
///
/// let mut arguments = Arguments::new();
/// arguments.add("username", "admin".to_string()).unwrap();
/// arguments.add("attempts", 3u32).unwrap();
///
/// assert_eq!(arguments.get::<String>("username").unwrap(), "admin");
/// assert_eq!(*arguments.get::<u32>("attempts").unwrap(), 3);
/// ```
#[derive(Default)]
pub struct Arguments {
    entries: IndexMap<String, Box<dyn Any>>,
}

impl Arguments {
    /// Create an empty argument bag
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add a named value to the bag
    ///
    /// Fails with [`CommandError::ArgumentExists`] if a value was already
    /// added under the same name; the bag is left unchanged in that case.
    pub fn add(&mut self, name: impl Into<String>, value: impl Any) -> CommandResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(CommandError::ArgumentExists(name));
        }
        self.entries.insert(name, Box::new(value));
        Ok(())
    }

    /// Look up a value by name, downcast to the requested type
    ///
    /// Fails with [`CommandError::ArgumentNotFound`] if no value was added
    /// under `name`, and with [`CommandError::ArgumentType`] if the stored
    /// value is not a `T`.
    pub fn get<T: Any>(&self, name: &str) -> CommandResult<&T> {
        let value = self
            .entries
            .get(name)
            .ok_or_else(|| CommandError::ArgumentNotFound(name.to_string()))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| CommandError::ArgumentType(name.to_string()))
    }

    /// Look up a value by name without committing to its type
    ///
    /// Fails with [`CommandError::ArgumentNotFound`] if no value was added
    /// under `name`.
    pub fn get_any(&self, name: &str) -> CommandResult<&dyn Any> {
        self.entries
            .get(name)
            .map(|value| value.as_ref())
            .ok_or_else(|| CommandError::ArgumentNotFound(name.to_string()))
    }

    /// Whether a value was added under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The argument names, in the order they were added
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of arguments in the bag
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no arguments
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
