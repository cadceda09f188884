//! Seekable token sequence for one document.
//!
//! [`TokenStream`] is the view editor features walk: seek to a byte
//! offset, then step token by token in either direction. There is no
//! notion of a position *between* tokens — the stream always rests on a
//! concrete token, and movement simply fails at the ends. Callers that
//! need a boundary-insensitive position normalize with a
//! previous-then-next double move after seeking.
//!
//! # Seek tie-break
//!
//! Whitespace is not tokenized, so an offset can fall inside a gap or
//! exactly on a token boundary. `seek` resolves this deterministically:
//! the token whose span contains the offset wins; at an exact boundary
//! the token *ending* there wins over the token starting there; offsets
//! past the last token clamp to the last token (a caret at end of buffer
//! still has a structural context behind it).

use crate::lexer::lex;
use crate::token::Token;

/// Ordered, randomly seekable view over a document's tokens.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Index of the current token. Always `< tokens.len()` when the
    /// stream is non-empty; meaningless (0) when it is empty.
    index: usize,
}

impl TokenStream {
    /// Build a stream from pre-lexed tokens.
    ///
    /// # Contract
    ///
    /// Tokens must be ordered by span and non-overlapping, as produced
    /// by [`lex`](crate::lex).
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.windows(2).all(|w| w[0].end() <= w[1].start()),
            "tokens must be ordered and non-overlapping"
        );
        Self { tokens, index: 0 }
    }

    /// Lex `source` and build a stream over it.
    ///
    /// Returns `None` when the source yields no tokens at all (empty or
    /// whitespace-only input) — the absent-sequence case a token provider
    /// reports when there is nothing to consult at an offset.
    pub fn for_source(source: &str) -> Option<Self> {
        let tokens = lex(source);
        if tokens.is_empty() {
            return None;
        }
        Some(Self::from_tokens(tokens))
    }

    /// Position the stream at `offset`.
    ///
    /// Returns `false` only when the stream is empty. See the module
    /// docs for the boundary tie-break.
    pub fn seek(&mut self, offset: usize) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        // First token whose end reaches the offset: a token ending exactly
        // at `offset` wins over one starting there.
        let idx = self
            .tokens
            .partition_point(|t| (t.end() as usize) < offset);
        self.index = idx.min(self.tokens.len() - 1);
        true
    }

    /// Step to the previous token. Returns `false` at the start of the
    /// stream (or on an empty stream); the position is unchanged then.
    pub fn move_previous(&mut self) -> bool {
        if self.tokens.is_empty() || self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step to the next token. Returns `false` at the end of the stream
    /// (or on an empty stream); the position is unchanged then.
    pub fn move_next(&mut self) -> bool {
        if self.tokens.is_empty() || self.index + 1 >= self.tokens.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// The token at the current position, or `None` on an empty stream.
    #[inline]
    pub fn token(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    /// Number of tokens in the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
