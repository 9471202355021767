//! Hierarchy assembly.
//!
//! Walks the resolved descriptor chain and builds the typed
//! `Root → Group* → SubCommand` tree. The chain must match the grammar
//! `Root? Group* SubCommand?`; anything else is rejected with the error the
//! violation deserves. The tree is constructed bottom-up: the subcommand
//! node first, then the group chain from innermost to outermost, then the
//! root.

use std::sync::Arc;

use command_router_core::{
    Command, CommandDescriptor, CommandHierarchy, CommandKind, GroupNode, ParseError, Result,
    RootNode, SubCommandNode,
};

/// Builds the hierarchy for a resolved chain.
///
/// `executing` is the already-bound command of the chain's terminal
/// descriptor; it is carried by the subcommand node when one exists. A
/// chain consisting of a lone subcommand synthesizes a default root.
pub(crate) fn build(
    chain: &[Arc<CommandDescriptor>],
    executing: &Command,
) -> Result<CommandHierarchy> {
    let mut root: Option<Arc<CommandDescriptor>> = None;
    let mut groups: Vec<Arc<CommandDescriptor>> = Vec::new();
    let mut seen_subcommand = false;

    for descriptor in chain {
        if seen_subcommand {
            return Err(ParseError::CommandAfterSubCommand {
                id: descriptor.id.clone(),
            });
        }
        match descriptor.kind {
            CommandKind::Root => {
                // A root after a group is also a second root: groups only
                // appear once a root has been seen.
                if root.is_some() {
                    return Err(ParseError::MultipleRoots {
                        id: descriptor.id.clone(),
                    });
                }
                root = Some(Arc::clone(descriptor));
            }
            CommandKind::Group => {
                if root.is_none() {
                    return Err(ParseError::GroupWithoutRoot {
                        id: descriptor.id.clone(),
                    });
                }
                groups.push(Arc::clone(descriptor));
            }
            CommandKind::SubCommand => {
                seen_subcommand = true;
            }
        }
    }

    let mut subcommand = seen_subcommand.then(|| SubCommandNode {
        command: executing.clone(),
    });

    // Fold the group chain from the innermost group outward; only the
    // innermost carries the subcommand.
    let mut group_chain: Option<GroupNode> = None;
    for descriptor in groups.into_iter().rev() {
        group_chain = Some(GroupNode {
            descriptor,
            child: group_chain.take().map(Box::new),
            subcommand: subcommand.take(),
        });
    }

    Ok(CommandHierarchy {
        root: RootNode {
            descriptor: root,
            group: group_chain,
            subcommand,
        },
    })
}
