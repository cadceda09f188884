//! Spanned tokens.

use crate::tag::TokenTag;

/// An immutable lexical unit: a tag plus its byte span in the source.
///
/// Tokens are produced by [`lex`](crate::lex) and only ever read after
/// that. Positions are `u32`, which bounds a single document at 4 GiB —
/// the same bound the rest of the editor stack assumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    tag: TokenTag,
    start: u32,
    end: u32,
}

impl Token {
    /// Create a token.
    ///
    /// # Contract
    ///
    /// `start <= end`, and the span must lie within the source the token
    /// was lexed from. Guaranteed when tokens come from [`lex`](crate::lex).
    pub fn new(tag: TokenTag, start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "token span start {start} exceeds end {end}");
        Self { tag, start, end }
    }

    /// The lexical tag.
    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.tag
    }

    /// Byte offset of the first byte of the token.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Span length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty. Lexed tokens never are; hand-built
    /// test fixtures may be.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
