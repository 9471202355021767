//! Quoted value capture shared by the resolver and the option collector.
//!
//! A value that opens with the configured value delimiter may span several
//! segments; the separators the tokenizer consumed between them are
//! re-inserted while scanning for the closing delimiter.

use command_router_core::{ParseError, ParserConfig, Result};

use crate::segment::SegmentCursor;

/// Returns `true` when `text` opens a quoted value that is not already
/// closed within the same segment.
///
/// A segment that is exactly the delimiter counts as open: its single
/// occurrence is the opening quote.
pub(crate) fn opens_quoted(text: &str, config: &ParserConfig) -> bool {
    let delimiter = &config.value_delimiter;
    let cmp = config.comparison;
    cmp.starts_with(text, delimiter)
        && (!cmp.ends_with(text, delimiter) || text.len() == delimiter.len())
}

/// Captures a value starting at `first`, consuming further segments until
/// the closing delimiter when the value is quoted across segments.
///
/// The wrapping delimiters are stripped from the result. Exhausting the
/// cursor before the closing delimiter is a failure.
pub(crate) fn capture(
    first: String,
    cursor: &mut SegmentCursor,
    config: &ParserConfig,
) -> Result<String> {
    let delimiter = &config.value_delimiter;
    let cmp = config.comparison;

    if opens_quoted(&first, config) {
        let mut value = first;
        loop {
            let Some(segment) = cursor.advance() else {
                return Err(ParseError::UnterminatedValue {
                    delimiter: delimiter.clone(),
                    value,
                });
            };
            value.push_str(&config.separator);
            value.push_str(&segment.text);
            if cmp.ends_with(&segment.text, delimiter) {
                return Ok(strip_delimiters(&value, config));
            }
        }
    }

    if cmp.starts_with(&first, delimiter) {
        // Opened and closed within one segment.
        return Ok(strip_delimiters(&first, config));
    }

    Ok(first)
}

/// Strips one leading and one trailing value delimiter, if present.
pub(crate) fn strip_delimiters(value: &str, config: &ParserConfig) -> String {
    let delimiter = &config.value_delimiter;
    let cmp = config.comparison;
    let mut stripped = value;
    if cmp.starts_with(stripped, delimiter) {
        stripped = &stripped[delimiter.len()..];
    }
    if cmp.ends_with(stripped, delimiter) {
        stripped = &stripped[..stripped.len() - delimiter.len()];
    }
    stripped.to_string()
}
