//! Parsed command output model.
//!
//! These types hold the result of a successful parse: positional values
//! bound to argument descriptors, option values resolved by id or alias,
//! and the final immutable [`ParsedCommand`]. They own their values and
//! only reference the long-lived descriptors through [`Arc`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hierarchy::CommandHierarchy;
use crate::types::CommandDescriptor;

/// Value carried by a parsed option.
///
/// A valueless option is a [`Switch`](OptionValue::Switch), rendered as
/// `"true"` by [`as_str`](OptionValue::as_str).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Option supplied without a value (boolean true).
    Switch,
    /// Option supplied with a textual value.
    Text(String),
}

impl OptionValue {
    /// Returns the value as text (`"true"` for a switch).
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::OptionValue;
    ///
    /// assert_eq!(OptionValue::Switch.as_str(), "true");
    /// assert_eq!(OptionValue::Text("John".into()).as_str(), "John");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::Switch => "true",
            Self::Text(value) => value,
        }
    }
}

/// A single option resolved against the executing command's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOption {
    /// Identifier of the matched option descriptor.
    pub id: String,
    /// Whether the key matched the descriptor's alias rather than its id.
    pub by_alias: bool,
    /// The option's value.
    pub value: OptionValue,
}

/// Ordered collection of resolved options.
///
/// # Examples
///
/// ```
/// use command_router_core::{OptionValue, Options, ResolvedOption};
///
/// let options = Options::new(vec![ResolvedOption {
///     id: "verbose".into(),
///     by_alias: true,
///     value: OptionValue::Switch,
/// }]);
/// assert!(options.is_set("verbose"));
/// assert_eq!(options.value_of("verbose"), Some("true"));
/// assert_eq!(options.value_of("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options(Vec<ResolvedOption>);

impl Options {
    /// Wraps a list of resolved options.
    pub fn new(options: Vec<ResolvedOption>) -> Self {
        Self(options)
    }

    /// Finds an option by descriptor id.
    pub fn get(&self, id: &str) -> Option<&ResolvedOption> {
        self.0.iter().find(|o| o.id == id)
    }

    /// Returns the textual value of an option, if present.
    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|o| o.value.as_str())
    }

    /// Returns `true` when the option was supplied.
    pub fn is_set(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of options supplied.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the options in the order they appeared.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedOption> {
        self.0.iter()
    }
}

/// A positional value bound to an argument descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArgument {
    /// Identifier of the argument descriptor this value was bound to.
    pub id: String,
    /// The captured value.
    pub value: String,
}

/// Ordered collection of resolved positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arguments(Vec<ResolvedArgument>);

impl Arguments {
    /// Wraps a list of resolved arguments.
    pub fn new(arguments: Vec<ResolvedArgument>) -> Self {
        Self(arguments)
    }

    /// Finds an argument by descriptor id.
    pub fn get(&self, id: &str) -> Option<&ResolvedArgument> {
        self.0.iter().find(|a| a.id == id)
    }

    /// Returns the value of an argument, if present.
    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|a| a.value.as_str())
    }

    /// Number of arguments supplied.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the arguments in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedArgument> {
        self.0.iter()
    }
}

/// The executing command: descriptor plus bound arguments and options.
#[derive(Debug, Clone)]
pub struct Command {
    /// Descriptor of the command to execute.
    pub descriptor: Arc<CommandDescriptor>,
    /// Positional arguments, when any were supplied.
    pub arguments: Option<Arguments>,
    /// Options, when any were supplied.
    pub options: Option<Options>,
}

impl Command {
    /// Creates a command with no arguments or options.
    pub fn new(descriptor: Arc<CommandDescriptor>) -> Self {
        Self {
            descriptor,
            arguments: None,
            options: None,
        }
    }

    /// Id of the command descriptor.
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }
}

/// Final immutable result of parsing a request string.
///
/// Created once per request. Owns its arguments and options; descriptors
/// are shared with the store through [`Arc`].
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    /// The original request string.
    pub raw: String,
    /// The executing command.
    pub command: Command,
    /// Hierarchy tree, present only when hierarchy parsing is enabled.
    pub hierarchy: Option<CommandHierarchy>,
}
