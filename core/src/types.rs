//! Descriptor type definitions for command routing.
//!
//! This module defines the long-lived metadata describing commands: their
//! place in the Root/Group/SubCommand hierarchy, the owners they may nest
//! under, and the arguments and options they accept. Descriptors are
//! registered once at startup, shared as [`Arc<CommandDescriptor>`], and
//! serialized with [`serde`] for file-based registration tables.
//!
//! [`Arc<CommandDescriptor>`]: std::sync::Arc

use serde::{Deserialize, Serialize};

use crate::TextComparison;

/// Position of a command in the routing hierarchy.
///
/// The grammar is `Root? Group* SubCommand?`: a root may own a chain of
/// groups, and a subcommand is always terminal. The enum is closed and
/// matched exhaustively, so a new position cannot fall through unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    /// Top of a hierarchy; at most one per request.
    Root,
    /// Intermediate grouping command; groups form a singly linked chain.
    Group,
    /// Terminal command that actually executes.
    SubCommand,
}

/// Value type declared for an argument or option.
///
/// Metadata only — the routing pipeline binds values as text and leaves
/// interpretation to the execution layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Free-form text.
    Text,
    /// Numeric value.
    Number,
    /// Boolean switch.
    Boolean,
    /// Unconstrained (the default).
    #[default]
    Any,
}

/// Descriptor for a command option.
///
/// An option is keyed by its identifier (matched under the option prefix)
/// and optionally by an alias (matched under the alias prefix). Use the
/// constructors [`switch`](OptionDescriptor::switch) and
/// [`with_value`](OptionDescriptor::with_value), then chain builder methods.
///
/// # Examples
///
/// ```
/// use command_router_core::{OptionDescriptor, ValueKind};
///
/// let verbose = OptionDescriptor::switch("verbose")
///     .with_alias("v")
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.id, "verbose");
/// assert_eq!(verbose.alias.as_deref(), Some("v"));
///
/// let name = OptionDescriptor::with_value("name", ValueKind::Text);
/// assert_eq!(name.value_kind, ValueKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Identifier matched under the option prefix (e.g., `verbose`).
    pub id: String,
    /// Alias matched under the alias prefix (e.g., `v`).
    pub alias: Option<String>,
    /// Declared value type.
    pub value_kind: ValueKind,
    /// Description for help rendering.
    pub description: Option<String>,
    /// Whether the option must be supplied.
    pub required: bool,
}

impl OptionDescriptor {
    /// Creates a boolean switch option (no value).
    pub fn switch(id: &str) -> Self {
        Self {
            id: id.to_string(),
            alias: None,
            value_kind: ValueKind::Boolean,
            description: None,
            required: false,
        }
    }

    /// Creates an option that takes a value.
    pub fn with_value(id: &str, value_kind: ValueKind) -> Self {
        Self {
            id: id.to_string(),
            alias: None,
            value_kind,
            description: None,
            required: false,
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Marks the option as required.
    pub fn require(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Descriptor for a positional argument.
///
/// Arguments are bound to captured values strictly by position.
///
/// # Examples
///
/// ```
/// use command_router_core::{ArgumentDescriptor, ValueKind};
///
/// let src = ArgumentDescriptor::required("source", ValueKind::Text);
/// assert!(src.required);
///
/// let dest = ArgumentDescriptor::optional("dest", ValueKind::Text);
/// assert!(!dest.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Name of the argument (e.g., `source`).
    pub id: String,
    /// Declared value type.
    pub value_kind: ValueKind,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Description for help rendering.
    pub description: Option<String>,
}

impl ArgumentDescriptor {
    /// Creates a required positional argument.
    pub fn required(id: &str, value_kind: ValueKind) -> Self {
        Self {
            id: id.to_string(),
            value_kind,
            required: true,
            description: None,
        }
    }

    /// Creates an optional positional argument.
    pub fn optional(id: &str, value_kind: ValueKind) -> Self {
        Self {
            id: id.to_string(),
            value_kind,
            required: false,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// Registered, long-lived metadata describing a command.
///
/// A descriptor names the command, places it in the hierarchy, lists the
/// owner ids it may nest under (empty = top-level), and declares the
/// arguments and options it accepts.
///
/// # Examples
///
/// ```
/// use command_router_core::*;
///
/// let greet = CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
///     .with_option(OptionDescriptor::with_value("name", ValueKind::Text))
///     .with_option(OptionDescriptor::switch("verbose").with_alias("v"));
///
/// let cmp = TextComparison::Exact;
/// assert!(greet.find_option_by_id("name", cmp).is_some());
/// assert!(greet.find_option_by_alias("v", cmp).is_some());
/// assert!(greet.is_top_level());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Unique identifier matched against request segments.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position in the hierarchy.
    pub kind: CommandKind,
    /// Description for help rendering.
    pub description: Option<String>,
    /// Ids of the commands this one may nest under (empty = top-level).
    pub owners: Vec<String>,
    /// Ordered positional argument descriptors.
    pub arguments: Vec<ArgumentDescriptor>,
    /// Option descriptors, looked up by id or alias.
    pub options: Vec<OptionDescriptor>,
}

impl CommandDescriptor {
    /// Creates a descriptor with no owners, arguments, or options.
    pub fn new(id: &str, name: &str, kind: CommandKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            description: None,
            owners: Vec::new(),
            arguments: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an owner id this command may nest under.
    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owners.push(owner.to_string());
        self
    }

    /// Appends a positional argument descriptor.
    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Appends an option descriptor.
    pub fn with_option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    /// Returns `true` when the command has no owners and may start a chain.
    pub fn is_top_level(&self) -> bool {
        self.owners.is_empty()
    }

    /// Returns `true` when `owner` is in this command's owner set.
    pub fn is_owned_by(&self, owner: &str, comparison: TextComparison) -> bool {
        self.owners.iter().any(|o| comparison.eq(o, owner))
    }

    /// Finds a declared option by its identifier.
    pub fn find_option_by_id(
        &self,
        id: &str,
        comparison: TextComparison,
    ) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| comparison.eq(&o.id, id))
    }

    /// Finds a declared option by its alias.
    pub fn find_option_by_alias(
        &self,
        alias: &str,
        comparison: TextComparison,
    ) -> Option<&OptionDescriptor> {
        self.options
            .iter()
            .find(|o| o.alias.as_deref().is_some_and(|a| comparison.eq(a, alias)))
    }

    /// Finds a declared option by identifier first, then alias.
    ///
    /// The identifier takes precedence when a string is both some option's
    /// id and another's alias.
    pub fn find_option(&self, key: &str, comparison: TextComparison) -> Option<&OptionDescriptor> {
        self.find_option_by_id(key, comparison)
            .or_else(|| self.find_option_by_alias(key, comparison))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let desc = CommandDescriptor::new("copy", "Copy", CommandKind::SubCommand)
            .with_owner("fs")
            .with_argument(ArgumentDescriptor::required("source", ValueKind::Text))
            .with_argument(ArgumentDescriptor::optional("dest", ValueKind::Text))
            .with_option(OptionDescriptor::switch("force").with_alias("f"));

        assert!(!desc.is_top_level());
        assert!(desc.is_owned_by("fs", TextComparison::Exact));
        assert!(!desc.is_owned_by("net", TextComparison::Exact));
        assert_eq!(desc.arguments.len(), 2);
        assert_eq!(desc.options.len(), 1);
    }

    #[test]
    fn test_option_lookup_by_id_and_alias() {
        let desc = CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
            .with_option(OptionDescriptor::with_value("name", ValueKind::Text))
            .with_option(OptionDescriptor::switch("verbose").with_alias("v"));

        let cmp = TextComparison::Exact;
        assert_eq!(
            desc.find_option_by_id("verbose", cmp).unwrap().id,
            "verbose"
        );
        assert_eq!(desc.find_option_by_alias("v", cmp).unwrap().id, "verbose");
        assert!(desc.find_option_by_alias("verbose", cmp).is_none());
        assert!(desc.find_option_by_id("v", cmp).is_none());
    }

    #[test]
    fn test_find_option_prefers_id_over_alias() {
        // "x" is both the id of one option and the alias of another.
        let desc = CommandDescriptor::new("cmd", "Cmd", CommandKind::SubCommand)
            .with_option(OptionDescriptor::switch("other").with_alias("x"))
            .with_option(OptionDescriptor::switch("x"));

        let found = desc.find_option("x", TextComparison::Exact).unwrap();
        assert_eq!(found.id, "x");
    }

    #[test]
    fn test_case_insensitive_owner_match() {
        let desc = CommandDescriptor::new("g", "G", CommandKind::Group).with_owner("Root");
        assert!(desc.is_owned_by("root", TextComparison::IgnoreCase));
        assert!(!desc.is_owned_by("root", TextComparison::Exact));
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let desc = CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
            .with_description("Greets someone")
            .with_option(
                OptionDescriptor::with_value("name", ValueKind::Text)
                    .with_description("Who to greet")
                    .require(),
            );

        let json = serde_json::to_string(&desc).expect("failed to serialize");
        let back: CommandDescriptor = serde_json::from_str(&json).expect("failed to deserialize");
        assert_eq!(back, desc);
    }
}
