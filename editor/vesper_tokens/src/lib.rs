//! Lexical tokens for Vesper editor support.
//!
//! This crate owns the flat token layer that editor features (indentation,
//! highlighting) operate on: the [`TokenTag`] tag set, spanned [`Token`]s,
//! a [`lex`] function producing them from source text, and [`TokenStream`],
//! a randomly seekable view over one document's tokens.
//!
//! No syntax tree is built here. Editor features that must stay responsive
//! on malformed, half-typed input work directly on this token layer, so
//! lexing never fails: unrecognized input becomes [`TokenTag::Error`]
//! tokens with ordinary spans.

pub mod lexer;
pub mod stream;
pub mod tag;
pub mod token;

pub use lexer::lex;
pub use stream::TokenStream;
pub use tag::TokenTag;
pub use token::Token;
