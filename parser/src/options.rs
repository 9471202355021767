//! Option collection.
//!
//! Consumes everything from the first option marker onward, producing an
//! ordered list of raw key/value pairs. Keys keep their prefixes; the
//! binder strips and classifies them later. Values come in three forms:
//! absent (boolean option), quoted (may span segments), and unquoted (runs
//! until the next option marker).

use command_router_core::{ParserConfig, Result};
use tracing::trace;

use crate::segment::SegmentCursor;
use crate::value;

/// An option as captured from the request, before descriptor binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawOption {
    /// The key segment, prefix still attached.
    pub(crate) key: String,
    /// The value, or `None` for a boolean option.
    pub(crate) value: Option<String>,
}

/// Returns `true` when a segment starts an option (option prefix or alias
/// prefix under the configured comparison).
pub(crate) fn is_option_marker(text: &str, config: &ParserConfig) -> bool {
    let cmp = config.comparison;
    cmp.starts_with(text, &config.option_prefix) || cmp.starts_with(text, &config.alias_prefix)
}

/// Collects all remaining segments into raw options.
pub(crate) fn collect(cursor: &mut SegmentCursor, config: &ParserConfig) -> Result<Vec<RawOption>> {
    let cmp = config.comparison;
    let mut options = Vec::new();

    while let Some(segment) = cursor.advance() {
        let key = segment.text;
        if key.is_empty() || cmp.eq(&key, &config.separator) {
            continue;
        }

        // Skip filler before the value so `--a  b` and `--a b` read alike.
        while cursor
            .peek()
            .is_some_and(|s| s.text.is_empty() || cmp.eq(&s.text, &config.separator))
        {
            cursor.advance();
        }

        let value = match cursor.peek() {
            None => None,
            Some(next) if is_option_marker(&next.text, config) => None,
            Some(next) if cmp.starts_with(&next.text, &config.value_delimiter) => {
                let Some(first) = cursor.advance() else {
                    break;
                };
                Some(value::capture(first.text, cursor, config)?)
            }
            Some(_) => {
                let mut parts = Vec::new();
                while let Some(next) = cursor.peek() {
                    if is_option_marker(&next.text, config) {
                        break;
                    }
                    let Some(part) = cursor.advance() else {
                        break;
                    };
                    parts.push(part.text);
                }
                Some(parts.join(&config.separator))
            }
        };

        trace!(key = %key, valued = value.is_some(), "captured option");
        options.push(RawOption { key, value });
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use command_router_core::ParseError;

    use crate::tokenizer::tokenize;

    use super::*;

    fn run(raw: &str) -> Result<Vec<RawOption>> {
        let config = ParserConfig::default();
        let mut cursor = SegmentCursor::new(tokenize(raw, &config));
        collect(&mut cursor, &config)
    }

    fn option(key: &str, value: Option<&str>) -> RawOption {
        RawOption {
            key: key.to_string(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn test_boolean_options() {
        let options = run("--force -v").unwrap();
        assert_eq!(
            options,
            vec![option("--force", None), option("-v", None)]
        );
    }

    #[test]
    fn test_trailing_boolean() {
        let options = run("--force").unwrap();
        assert_eq!(options, vec![option("--force", None)]);
    }

    #[test]
    fn test_simple_value() {
        let options = run("--name=John").unwrap();
        assert_eq!(options, vec![option("--name", Some("John"))]);
    }

    #[test]
    fn test_quoted_value_spans_segments() {
        let options = run("--name=\"John Doe\" -v").unwrap();
        assert_eq!(
            options,
            vec![option("--name", Some("John Doe")), option("-v", None)]
        );
    }

    #[test]
    fn test_unquoted_value_runs_to_next_marker() {
        let options = run("--msg=hello there world --force").unwrap();
        assert_eq!(
            options,
            vec![
                option("--msg", Some("hello there world")),
                option("--force", None)
            ]
        );
    }

    #[test]
    fn test_unquoted_value_runs_to_exhaustion() {
        let options = run("--msg hello there").unwrap();
        assert_eq!(options, vec![option("--msg", Some("hello there"))]);
    }

    #[test]
    fn test_empty_segments_between_key_and_value() {
        let options = run("--name=  John").unwrap();
        assert_eq!(options, vec![option("--name", Some("John"))]);
    }

    #[test]
    fn test_unterminated_quoted_value() {
        let err = run("--name=\"John Doe").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedValue { .. }));
    }

    #[test]
    fn test_marker_detection_uses_both_prefixes() {
        let config = ParserConfig::default();
        assert!(is_option_marker("--name", &config));
        assert!(is_option_marker("-v", &config));
        assert!(!is_option_marker("name", &config));
    }
}
