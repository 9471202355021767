//! Delimiter-tagged segments and the cursor that consumes them.
//!
//! The tokenizer produces one [`Segment`] per delimiter-bounded slice of
//! the request. Segments are held in an ordered arena and consumed through
//! a [`SegmentCursor`] — an advancing index with peek/advance semantics, so
//! consumption never destroys the underlying sequence.

/// The delimiter that terminated a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The primary separator followed this segment.
    Separator,
    /// The option-value separator followed this segment.
    ValueSeparator,
    /// Nothing followed; this is the final segment.
    End,
}

/// A delimiter-bounded slice of the request string.
///
/// Zero-length segments between adjacent delimiters are kept: they carry no
/// content, but their terminator tag is needed to reconstruct the request
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The slice text, possibly empty.
    pub text: String,
    /// The delimiter that followed the slice.
    pub terminator: Terminator,
}

impl Segment {
    /// Creates a segment.
    pub fn new(text: impl Into<String>, terminator: Terminator) -> Self {
        Self {
            text: text.into(),
            terminator,
        }
    }
}

/// Forward-only view over a segment sequence.
///
/// # Examples
///
/// ```
/// use command_router_parser::{Segment, SegmentCursor, Terminator};
///
/// let mut cursor = SegmentCursor::new(vec![
///     Segment::new("greet", Terminator::Separator),
///     Segment::new("--name", Terminator::End),
/// ]);
/// assert_eq!(cursor.peek().unwrap().text, "greet");
/// assert_eq!(cursor.advance().unwrap().text, "greet");
/// assert_eq!(cursor.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentCursor {
    segments: Vec<Segment>,
    index: usize,
}

impl SegmentCursor {
    /// Wraps a segment sequence.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments, index: 0 }
    }

    /// The next unconsumed segment, without advancing.
    pub fn peek(&self) -> Option<&Segment> {
        self.segments.get(self.index)
    }

    /// Consumes and returns the next segment.
    ///
    /// Returns a clone so the caller holds no borrow while continuing to
    /// drive the cursor.
    pub fn advance(&mut self) -> Option<Segment> {
        let segment = self.segments.get(self.index)?.clone();
        self.index += 1;
        Some(segment)
    }

    /// Number of unconsumed segments.
    pub fn remaining(&self) -> usize {
        self.segments.len() - self.index
    }

    /// Returns `true` when every segment has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.segments.len()
    }
}
