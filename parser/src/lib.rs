//! Parsing pipeline turning raw request strings into validated commands.
//!
//! The pipeline runs in fixed stages over a private segment cursor:
//!
//! 1. **Tokenizer** ([`tokenize`]) — splits the request into
//!    delimiter-tagged [`Segment`]s.
//! 2. **Resolver** — matches leading segments against the descriptor
//!    store, validating the ownership chain and capturing positional
//!    arguments (quoted values may span segments).
//! 3. **Option collector** — consumes the remainder into raw key/value
//!    pairs.
//! 4. **Binder** — cross-checks captured counts against the executing
//!    descriptor and assembles the final command.
//! 5. **Hierarchy builder** — when enabled in configuration, assembles the
//!    `Root → Group* → SubCommand` tree.
//!
//! Each parse is a single synchronous pass; the only suspension point is
//! the store lookup. Parses share no mutable state and may run fully
//! concurrently. Failures abort immediately with a typed
//! [`ParseError`](command_router_core::ParseError) and no partial result.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use command_router_core::*;
//! use command_router_parser::CommandParser;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = InMemoryCommandStore::new(TextComparison::Exact)
//!     .with_command(
//!         CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand)
//!             .with_option(OptionDescriptor::with_value("name", ValueKind::Text))
//!             .with_option(OptionDescriptor::switch("verbose").with_alias("v")),
//!     )
//!     .expect("duplicate command id");
//!
//! let parser = CommandParser::new(Arc::new(store), ParserConfig::default());
//! let parsed = parser.parse("greet --name=\"John Doe\" -v").await.unwrap();
//!
//! assert_eq!(parsed.command.id(), "greet");
//! let options = parsed.command.options.as_ref().unwrap();
//! assert_eq!(options.value_of("name"), Some("John Doe"));
//! assert_eq!(options.value_of("verbose"), Some("true"));
//! # }
//! ```

mod binder;
mod hierarchy;
mod options;
mod resolver;
mod segment;
mod tokenizer;
mod value;

use std::sync::Arc;

use command_router_core::{CommandStore, ParseError, ParsedCommand, ParserConfig, Result};
use tracing::debug;

pub use segment::{Segment, SegmentCursor, Terminator};
pub use tokenizer::tokenize;

/// Parses raw request strings against a descriptor store.
///
/// The store and configuration are long-lived and read-only; a single
/// parser may serve concurrent parses. Cancellation and deadlines are the
/// caller's concern — wrap [`parse`](CommandParser::parse) as needed.
pub struct CommandParser {
    store: Arc<dyn CommandStore>,
    config: ParserConfig,
}

impl CommandParser {
    /// Creates a parser over a store and configuration.
    pub fn new(store: Arc<dyn CommandStore>, config: ParserConfig) -> Self {
        Self { store, config }
    }

    /// The parser's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a request string into a [`ParsedCommand`].
    ///
    /// # Errors
    ///
    /// Any failure rejects the input outright; see
    /// [`ParseError`](command_router_core::ParseError) for the taxonomy.
    /// Parsing mutates no external state, so re-invoking on the same input
    /// is always safe.
    pub async fn parse(&self, raw: &str) -> Result<ParsedCommand> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let segments = tokenize(raw, &self.config);
        debug!(segments = segments.len(), "tokenized request");
        let mut cursor = SegmentCursor::new(segments);

        let resolution = resolver::resolve(&mut cursor, self.store.as_ref(), &self.config).await?;
        let Some(executing) = resolution.chain.last().cloned() else {
            return Err(ParseError::NoCommand {
                raw: raw.to_string(),
            });
        };

        let raw_options = options::collect(&mut cursor, &self.config)?;
        debug!(
            command = %executing.id,
            arguments = resolution.arguments.len(),
            options = raw_options.len(),
            "resolved request"
        );

        let command = binder::bind(executing, resolution.arguments, raw_options, &self.config)?;

        let hierarchy = if self.config.parse_hierarchy {
            Some(hierarchy::build(&resolution.chain, &command)?)
        } else {
            None
        };

        Ok(ParsedCommand {
            raw: raw.to_string(),
            command,
            hierarchy,
        })
    }
}
