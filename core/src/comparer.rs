//! Text comparison service.
//!
//! All string matching in the routing pipeline — delimiter scanning, option
//! prefix detection, and descriptor id matching — goes through
//! [`TextComparison`] so that case sensitivity is decided once, in
//! configuration, instead of ad hoc at each call site.
//!
//! # Examples
//!
//! ```
//! use command_router_core::TextComparison;
//!
//! let cmp = TextComparison::IgnoreCase;
//! assert!(cmp.eq("Greet", "greet"));
//! assert!(cmp.starts_with("--Name", "--"));
//! assert_eq!(cmp.find("say HELLO world", "hello", 0), Some(4));
//! ```

use serde::{Deserialize, Serialize};

/// String comparison mode used throughout tokenizing and matching.
///
/// `IgnoreCase` folds ASCII case only; command identifiers and delimiter
/// tokens are ASCII in practice, and locale-dependent folding would make
/// matching results depend on the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextComparison {
    /// Byte-exact comparison (the default).
    #[default]
    Exact,
    /// ASCII case-insensitive comparison.
    IgnoreCase,
}

impl TextComparison {
    /// Compares two strings for equality under this mode.
    pub fn eq(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a.eq_ignore_ascii_case(b),
        }
    }

    /// Returns `true` if `text` starts with `prefix` under this mode.
    pub fn starts_with(&self, text: &str, prefix: &str) -> bool {
        match self {
            Self::Exact => text.starts_with(prefix),
            Self::IgnoreCase => text
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }

    /// Returns `true` if `text` ends with `suffix` under this mode.
    pub fn ends_with(&self, text: &str, suffix: &str) -> bool {
        match self {
            Self::Exact => text.ends_with(suffix),
            Self::IgnoreCase => text
                .len()
                .checked_sub(suffix.len())
                .and_then(|start| text.get(start..))
                .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix)),
        }
    }

    /// Finds the earliest occurrence of `needle` in `haystack` at or after
    /// byte offset `from`, returning its byte offset.
    ///
    /// Returns `None` when `needle` does not occur, when it is empty, or
    /// when `from` is past the end of `haystack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::TextComparison;
    ///
    /// assert_eq!(TextComparison::Exact.find("a=b=c", "=", 2), Some(3));
    /// assert_eq!(TextComparison::Exact.find("a=b", "=", 2), None);
    /// ```
    pub fn find(&self, haystack: &str, needle: &str, from: usize) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let tail = haystack.get(from..)?;
        match self {
            Self::Exact => tail.find(needle).map(|i| from + i),
            Self::IgnoreCase => {
                for (i, _) in tail.char_indices() {
                    // get() rejects non-boundary ends, which also skips
                    // windows that split a multi-byte character.
                    if tail
                        .get(i..i + needle.len())
                        .is_some_and(|window| window.eq_ignore_ascii_case(needle))
                    {
                        return Some(from + i);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        let cmp = TextComparison::Exact;
        assert!(cmp.eq("greet", "greet"));
        assert!(!cmp.eq("Greet", "greet"));
        assert!(!cmp.starts_with("Name", "na"));
        assert_eq!(cmp.find("aXa", "x", 0), None);
    }

    #[test]
    fn test_ignore_case_folds_ascii() {
        let cmp = TextComparison::IgnoreCase;
        assert!(cmp.eq("GREET", "greet"));
        assert!(cmp.starts_with("--NAME", "--name"));
        assert!(cmp.ends_with("value\"", "\""));
        assert_eq!(cmp.find("say HELLO", "hello", 0), Some(4));
    }

    #[test]
    fn test_find_respects_start_offset() {
        let cmp = TextComparison::Exact;
        assert_eq!(cmp.find("a b c", " ", 0), Some(1));
        assert_eq!(cmp.find("a b c", " ", 2), Some(3));
        assert_eq!(cmp.find("a b c", " ", 4), None);
    }

    #[test]
    fn test_find_multi_character_needle() {
        let cmp = TextComparison::Exact;
        assert_eq!(cmp.find("a::b::c", "::", 0), Some(1));
        assert_eq!(cmp.find("a::b::c", "::", 2), Some(4));
    }

    #[test]
    fn test_find_past_end_is_none() {
        assert_eq!(TextComparison::Exact.find("ab", "a", 5), None);
        assert_eq!(TextComparison::IgnoreCase.find("ab", "a", 5), None);
    }

    #[test]
    fn test_find_skips_split_multibyte_windows() {
        let cmp = TextComparison::IgnoreCase;
        assert_eq!(cmp.find("é=x", "=", 0), Some(2));
    }
}
