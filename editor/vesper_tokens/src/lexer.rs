//! Source-to-token scanning.
//!
//! A thin driver over the `logos` scanner derived on
//! [`TokenTag`](crate::TokenTag). Lexing is total: bytes the scanner
//! cannot place are emitted as [`TokenTag::Error`] tokens with ordinary
//! spans, so downstream editor features never see a lex failure — they
//! run continuously against half-typed, syntactically broken input.

use logos::Logos;

use crate::tag::TokenTag;
use crate::token::Token;

/// Lex `source` into spanned tokens.
///
/// Whitespace is skipped; every returned token carries the byte span it
/// was read from. Unrecognized input degrades to [`TokenTag::Error`]
/// tokens instead of an error return.
#[allow(
    clippy::cast_possible_truncation,
    reason = "spans come from a &str, whose length fits the u32 document bound"
)]
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenTag::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let tag = result.unwrap_or(TokenTag::Error);
        tokens.push(Token::new(tag, span.start as u32, span.end as u32));
    }
    tokens
}
