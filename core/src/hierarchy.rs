//! Typed command hierarchy tree.
//!
//! A parsed request may be assembled into a `Root → Group* → SubCommand`
//! tree. The tree is immutable and owned top-down: the root holds the first
//! group, each group boxes its child, and the subcommand is always a leaf.
//! It is constructed bottom-up by the hierarchy builder once the full
//! descriptor chain is known, so no node ever needs a mutable back-reference.

use std::sync::Arc;

use crate::command::Command;
use crate::types::CommandDescriptor;

/// Terminal node carrying the executing command.
#[derive(Debug, Clone)]
pub struct SubCommandNode {
    /// The command that will execute.
    pub command: Command,
}

/// A group in the chain between the root and the subcommand.
#[derive(Debug, Clone)]
pub struct GroupNode {
    /// Descriptor of the group command.
    pub descriptor: Arc<CommandDescriptor>,
    /// Next group in the chain, if any.
    pub child: Option<Box<GroupNode>>,
    /// Terminal subcommand, set only on the innermost group.
    pub subcommand: Option<SubCommandNode>,
}

/// Top of the hierarchy.
///
/// `descriptor` is `None` for a synthesized default root, created when a
/// request consists of a lone subcommand with no root or group above it.
#[derive(Debug, Clone)]
pub struct RootNode {
    /// Descriptor of the root command, or `None` for a default root.
    pub descriptor: Option<Arc<CommandDescriptor>>,
    /// First group in the chain, if any.
    pub group: Option<GroupNode>,
    /// Terminal subcommand, set only when no groups are present.
    pub subcommand: Option<SubCommandNode>,
}

impl RootNode {
    /// Returns `true` for a synthesized default root.
    pub fn is_default(&self) -> bool {
        self.descriptor.is_none()
    }
}

/// The assembled hierarchy of a parsed request.
#[derive(Debug, Clone)]
pub struct CommandHierarchy {
    /// The single root of the tree.
    pub root: RootNode,
}

impl CommandHierarchy {
    /// Number of groups in the chain.
    pub fn group_count(&self) -> usize {
        let mut count = 0;
        let mut next = self.root.group.as_ref();
        while let Some(group) = next {
            count += 1;
            next = group.child.as_deref();
        }
        count
    }

    /// Innermost group of the chain, if any.
    pub fn innermost_group(&self) -> Option<&GroupNode> {
        let mut current = self.root.group.as_ref()?;
        while let Some(child) = current.child.as_deref() {
            current = child;
        }
        Some(current)
    }

    /// The terminal subcommand, wherever it attaches.
    pub fn subcommand(&self) -> Option<&SubCommandNode> {
        match self.innermost_group() {
            Some(group) => group.subcommand.as_ref(),
            None => self.root.subcommand.as_ref(),
        }
    }
}
