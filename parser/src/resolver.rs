//! Command and argument resolution.
//!
//! Consumes leading segments until the first option marker, matching each
//! against the descriptor store. Matches extend the ownership-validated
//! descriptor chain; non-matches become positional arguments, with quoted
//! values allowed to span segments. Once an argument has been captured, no
//! later segment may resolve to a command.

use std::sync::Arc;

use command_router_core::{CommandDescriptor, CommandStore, ParseError, ParserConfig, Result};
use tracing::trace;

use crate::options::is_option_marker;
use crate::segment::SegmentCursor;
use crate::value;

/// The resolver's output: the root-to-leaf descriptor chain and the
/// positional argument values, in order of appearance.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    pub(crate) chain: Vec<Arc<CommandDescriptor>>,
    pub(crate) arguments: Vec<String>,
}

/// Resolves commands and positional arguments from the front of the cursor.
///
/// Stops (without consuming) at the first option marker. Empty and
/// bare-separator segments are skipped without side effect.
pub(crate) async fn resolve(
    cursor: &mut SegmentCursor,
    store: &dyn CommandStore,
    config: &ParserConfig,
) -> Result<Resolution> {
    let cmp = config.comparison;
    let mut resolution = Resolution::default();

    while let Some(next) = cursor.peek() {
        if is_option_marker(&next.text, config) {
            break;
        }
        let Some(segment) = cursor.advance() else {
            break;
        };
        let text = segment.text;
        if text.is_empty() || cmp.eq(&text, &config.separator) {
            continue;
        }

        let lookup = store.try_find_by_id(&text).await;
        if lookup.found {
            let descriptor = lookup
                .descriptor
                .ok_or_else(|| ParseError::StoreContract { id: text.clone() })?;
            if !resolution.arguments.is_empty() {
                return Err(ParseError::CommandAfterArguments {
                    id: descriptor.id.clone(),
                });
            }
            match resolution.chain.last() {
                Some(previous) => {
                    if !descriptor.is_owned_by(&previous.id, cmp) {
                        return Err(ParseError::InvalidOwner {
                            id: descriptor.id.clone(),
                            owner: previous.id.clone(),
                        });
                    }
                }
                None => {
                    if !descriptor.is_top_level() {
                        return Err(ParseError::MissingOwner {
                            id: descriptor.id.clone(),
                        });
                    }
                }
            }
            trace!(command = %descriptor.id, "resolved command");
            resolution.chain.push(descriptor);
        } else {
            let argument = value::capture(text, cursor, config)?;
            trace!(argument = %argument, "captured positional argument");
            resolution.arguments.push(argument);
        }
    }

    Ok(resolution)
}
