//! Request tokenizer.
//!
//! Splits a raw request string into delimiter-tagged [`Segment`]s by
//! repeatedly finding the earliest next occurrence of the separator or the
//! value separator. Both tokens may be multi-character, and all scanning
//! honors the configured [`TextComparison`]. Zero-length segments between
//! adjacent delimiters are emitted so the original string can be
//! reconstructed exactly from the segment sequence.

use command_router_core::ParserConfig;

use crate::segment::{Segment, Terminator};

/// Tokenizes `raw` into delimiter-tagged segments.
///
/// Linear in the input length times the two delimiter kinds. When both
/// delimiters occur at the same position, the separator wins.
///
/// # Examples
///
/// ```
/// use command_router_core::ParserConfig;
/// use command_router_parser::{Terminator, tokenize};
///
/// let segments = tokenize("greet --name=John", &ParserConfig::default());
/// let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, vec!["greet", "--name", "John"]);
/// assert_eq!(segments[1].terminator, Terminator::ValueSeparator);
/// assert_eq!(segments[2].terminator, Terminator::End);
/// ```
pub fn tokenize(raw: &str, config: &ParserConfig) -> Vec<Segment> {
    let cmp = config.comparison;
    let mut segments = Vec::new();
    let mut cursor = 0;

    loop {
        let next_separator = cmp.find(raw, &config.separator, cursor);
        let next_value_separator = cmp.find(raw, &config.value_separator, cursor);

        let winner = match (next_separator, next_value_separator) {
            (Some(sep), Some(val)) if sep <= val => Some((sep, Terminator::Separator)),
            (Some(_), Some(val)) => Some((val, Terminator::ValueSeparator)),
            (Some(sep), None) => Some((sep, Terminator::Separator)),
            (None, Some(val)) => Some((val, Terminator::ValueSeparator)),
            (None, None) => None,
        };

        match winner {
            Some((at, terminator)) => {
                segments.push(Segment::new(&raw[cursor..at], terminator));
                let token_len = if terminator == Terminator::Separator {
                    config.separator.len()
                } else {
                    config.value_separator.len()
                };
                cursor = at + token_len;
            }
            None => {
                segments.push(Segment::new(&raw[cursor..], Terminator::End));
                return segments;
            }
        }
    }
}
