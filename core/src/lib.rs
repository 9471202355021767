//! Core types and shared routing primitives.
//!
//! This crate defines the foundational types for command routing:
//!
//! - [`CommandDescriptor`] — long-lived metadata for a command (kind,
//!   owners, arguments, options).
//! - [`ParsedCommand`] — the immutable result of parsing a request string.
//! - [`CommandHierarchy`] — the typed `Root → Group* → SubCommand` tree.
//! - [`ParseError`] / [`ErrorKind`] — the unified failure taxonomy.
//! - [`ParserConfig`] — delimiter tokens, prefixes, and pipeline switches.
//! - [`TextComparison`] — the comparison mode used for all matching.
//! - [`CommandStore`] / [`InMemoryCommandStore`] — async descriptor lookup.
//!
//! # Example
//!
//! ```
//! use command_router_core::*;
//!
//! // Register a descriptor table at startup.
//! let store = InMemoryCommandStore::new(TextComparison::Exact)
//!     .with_command(
//!         CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
//!             .with_option(OptionDescriptor::with_value("name", ValueKind::Text))
//!             .with_option(OptionDescriptor::switch("verbose").with_alias("v")),
//!     )
//!     .expect("duplicate command id");
//! assert_eq!(store.len(), 1);
//! ```

mod command;
mod comparer;
mod config;
mod error;
mod hierarchy;
mod store;
mod types;

pub use command::{
    Arguments, Command, OptionValue, Options, ParsedCommand, ResolvedArgument, ResolvedOption,
};
pub use comparer::TextComparison;
pub use config::ParserConfig;
pub use error::{ConfigError, ErrorKind, ParseError, Result, StoreError};
pub use hierarchy::{CommandHierarchy, GroupNode, RootNode, SubCommandNode};
pub use store::{CommandStore, InMemoryCommandStore, StoreLookup};
pub use types::{
    ArgumentDescriptor, CommandDescriptor, CommandKind, OptionDescriptor, ValueKind,
};
