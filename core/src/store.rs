//! Descriptor store.
//!
//! Commands are registered once at startup and looked up by id during
//! parsing. The lookup is asynchronous so that stores backed by remote or
//! lazily-loaded sources can plug in; the bundled [`InMemoryCommandStore`]
//! resolves immediately. Stores are read-only during parsing and must be
//! safe for concurrent reads.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::TextComparison;
use crate::error::StoreError;
use crate::types::CommandDescriptor;

/// Outcome of a descriptor lookup.
///
/// Carries an explicit found flag alongside the descriptor. A store that
/// reports `found` without supplying a descriptor has violated its
/// contract, which the parser surfaces as a server-side error rather than
/// a user-input error.
#[derive(Debug, Clone, Default)]
pub struct StoreLookup {
    /// Whether the store recognized the id.
    pub found: bool,
    /// The descriptor, when found.
    pub descriptor: Option<Arc<CommandDescriptor>>,
}

impl StoreLookup {
    /// A successful lookup.
    pub fn hit(descriptor: Arc<CommandDescriptor>) -> Self {
        Self {
            found: true,
            descriptor: Some(descriptor),
        }
    }

    /// An unsuccessful lookup.
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Asynchronous lookup of command descriptors by id.
///
/// Implementations must be safe for concurrent reads; the parser never
/// writes to the store.
#[async_trait]
pub trait CommandStore: Send + Sync {
    /// Looks up a descriptor by command id.
    async fn try_find_by_id(&self, id: &str) -> StoreLookup;
}

/// In-memory registration table of command descriptors.
///
/// Populated explicitly at process start with
/// [`register`](InMemoryCommandStore::register) or the chaining
/// [`with_command`](InMemoryCommandStore::with_command). Under
/// [`TextComparison::IgnoreCase`] ids are stored case-folded so lookups
/// match regardless of request casing.
///
/// # Examples
///
/// ```
/// use command_router_core::*;
///
/// let store = InMemoryCommandStore::new(TextComparison::IgnoreCase)
///     .with_command(CommandDescriptor::new("greet", "Greet", CommandKind::SubCommand))
///     .expect("duplicate id");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCommandStore {
    comparison: TextComparison,
    commands: HashMap<String, Arc<CommandDescriptor>>,
}

impl InMemoryCommandStore {
    /// Creates an empty store with the given comparison mode.
    pub fn new(comparison: TextComparison) -> Self {
        Self {
            comparison,
            commands: HashMap::new(),
        }
    }

    fn key(&self, id: &str) -> String {
        match self.comparison {
            TextComparison::Exact => id.to_string(),
            TextComparison::IgnoreCase => id.to_ascii_lowercase(),
        }
    }

    /// Registers a descriptor, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] when the id is already taken.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), StoreError> {
        let key = self.key(&descriptor.id);
        if self.commands.contains_key(&key) {
            return Err(StoreError::DuplicateId { id: descriptor.id });
        }
        self.commands.insert(key, Arc::new(descriptor));
        Ok(())
    }

    /// Registers a descriptor, chaining for table-style setup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] when the id is already taken.
    pub fn with_command(mut self, descriptor: CommandDescriptor) -> Result<Self, StoreError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` when no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[async_trait]
impl CommandStore for InMemoryCommandStore {
    async fn try_find_by_id(&self, id: &str) -> StoreLookup {
        match self.commands.get(&self.key(id)) {
            Some(descriptor) => StoreLookup::hit(Arc::clone(descriptor)),
            None => StoreLookup::miss(),
        }
    }
}
