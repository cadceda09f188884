//! The brace-context indent resolver.
//!
//! [`resolve_indent`] computes one line's indentation from the token
//! stream behind a caret offset. Every failure path degrades to the
//! supplied baseline — there is nothing fatal here, because the engine
//! runs continuously while the user types through syntactically broken
//! states.
//!
//! The walk has two phases. Phase one scans backward for the nearest
//! structural token; only an open brace means "a block body may indent
//! here" — a semicolon or an open paren/bracket means the caret sits in
//! a statement list or an expression, which contributes nothing. Phase
//! two walks further back from the brace to the construct that owns it,
//! and the owner's [`BracePlacement`] decides whether one indent unit is
//! added.
//!
//! One call contributes at most one unit. Hosts resolve line by line,
//! threading each result in as the next baseline, which is how nesting
//! accumulates.

use tracing::trace;
use vesper_tokens::{TokenStream, TokenTag};

use crate::classify::construct_category;
use crate::style::{BraceCategory, BracePlacement, CodeStyle};

/// Where the backward scan for a structural context stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanStop {
    /// An opening curly brace: a block body may start here.
    OpenBrace,
    /// A statement terminator: the caret is in a statement list.
    StatementEnd,
    /// An opening parenthesis: inside an argument or condition list.
    OpenParen,
    /// An opening bracket: inside an array or index expression.
    OpenBracket,
    /// Ran out of tokens without finding any structural context.
    Exhausted,
}

/// Compute the indentation for the line behind `offset`.
///
/// `previous_indent` is the already-resolved indentation of the
/// preceding line and is the floor of the result: the return value is
/// either `previous_indent` unchanged or `previous_indent +
/// style.indent_size`, never less.
pub fn resolve_indent(
    stream: &mut TokenStream,
    offset: usize,
    previous_indent: usize,
    style: &CodeStyle,
) -> usize {
    if !stream.seek(offset) {
        trace!(offset, "seek failed, keeping baseline");
        return previous_indent;
    }

    // Normalize the seek position at token boundaries: step back, then
    // forward. Failure of either step means the caret sits before the
    // first token, where no structural context exists behind it.
    if !stream.move_previous() || !stream.move_next() {
        trace!(offset, "caret before first token, keeping baseline");
        return previous_indent;
    }

    let stop = scan_to_structural_stop(stream);
    let ScanStop::OpenBrace = stop else {
        trace!(?stop, "no open brace behind caret, keeping baseline");
        return previous_indent;
    };

    let category = scan_brace_owner(stream).unwrap_or(BraceCategory::Other);
    let placement = style.placement(category);
    trace!(?category, ?placement, "classified governing brace");

    match placement {
        BracePlacement::NewLineIndented => previous_indent + style.indent_size,
        BracePlacement::SameLine => previous_indent,
    }
}

/// Phase one: walk backward from the current token to the nearest
/// structural token.
///
/// The movement-failure arm is the guard that bounds the walk: scanning
/// never runs past the start of the stream.
fn scan_to_structural_stop(stream: &mut TokenStream) -> ScanStop {
    loop {
        let Some(token) = stream.token() else {
            return ScanStop::Exhausted;
        };
        if token.tag().is_scan_stop() {
            // is_scan_stop admits exactly these four tags.
            return match token.tag() {
                TokenTag::LBrace => ScanStop::OpenBrace,
                TokenTag::Semicolon => ScanStop::StatementEnd,
                TokenTag::LParen => ScanStop::OpenParen,
                _ => ScanStop::OpenBracket,
            };
        }
        if !stream.move_previous() {
            return ScanStop::Exhausted;
        }
    }
}

/// Phase two: from an open brace, walk backward to the construct-start
/// token that owns it.
///
/// Returns `None` when the stream is exhausted first; the caller falls
/// back to [`BraceCategory::Other`], treating an unclassifiable leading
/// brace as a generic block.
fn scan_brace_owner(stream: &mut TokenStream) -> Option<BraceCategory> {
    while stream.move_previous() {
        let tag = stream.token()?.tag();
        if let Some(category) = construct_category(tag) {
            return Some(category);
        }
    }
    None
}

#[cfg(test)]
mod tests;
