//! Whole-file reindenting.
//!
//! The engine answers one question per line: given the previous line's
//! indentation, how deep is this one? This module supplies the rest of
//! the editing protocol around it: lexing the file once, walking lines
//! in order, feeding each result in as the next line's baseline, and
//! rewriting leading whitespace.
//!
//! Closing-delimiter lines are host policy, not engine behavior: the
//! resolver only ever keeps a baseline or adds one unit, so a closer is
//! aligned here, with the line that holds its matching opener. An
//! unbalanced closer falls back to giving one unit back and letting the
//! resolver confirm.

use tracing::debug;
use vesper_indent::{indent_string, resolve_indent, CodeStyle};
use vesper_tokens::{TokenStream, TokenTag};

/// Rewrite every line's leading whitespace according to `style`.
///
/// Line endings and line content are preserved; only leading spaces and
/// tabs change. Whitespace-only lines are emptied rather than indented.
/// A source with no tokens at all comes back unchanged.
pub fn reindent(source: &str, style: &CodeStyle) -> String {
    let Some(mut stream) = TokenStream::for_source(source) else {
        return source.to_owned();
    };

    let mut out = String::with_capacity(source.len());
    // (line start, resolved indent) of every non-blank line so far;
    // closer lines look their opener's line up in here.
    let mut resolved_lines: Vec<(usize, usize)> = Vec::new();
    let mut previous: usize = 0;
    let mut line_start = 0;
    for line in source.split_inclusive('\n') {
        let body = line.trim_start_matches([' ', '\t']);
        if body.trim_end_matches(['\n', '\r']).is_empty() {
            // Keep the line break, drop trailing-whitespace-only content.
            out.push_str(body);
        } else {
            let offset = line_start + (line.len() - body.len());
            let resolved = line_indent(&mut stream, offset, previous, &resolved_lines, style);
            debug!(offset, previous, resolved, "reindented line");
            out.push_str(&indent_string(resolved, style.expand_tabs, style.tab_size));
            out.push_str(body);
            resolved_lines.push((line_start, resolved));
            previous = resolved;
        }
        line_start += line.len();
    }
    out
}

/// Indent for the non-blank line whose first token starts at `offset`.
///
/// A line headed by a closing delimiter aligns with the line of its
/// matching opener. Every other line (and a closer with no opener) asks
/// the resolver, with `previous` as the baseline.
fn line_indent(
    stream: &mut TokenStream,
    offset: usize,
    previous: usize,
    resolved_lines: &[(usize, usize)],
    style: &CodeStyle,
) -> usize {
    let heads_closer = stream.seek(offset)
        && stream
            .token()
            .is_some_and(|t| t.start() as usize == offset && t.tag().is_close_delim());
    if !heads_closer {
        return resolve_indent(stream, offset, previous, style);
    }
    if let Some(indent) =
        matching_opener(stream, offset).and_then(|opener| indent_of_line_at(resolved_lines, opener))
    {
        return indent;
    }
    // Unbalanced closer: give one unit back and let the resolver keep
    // or restore it.
    resolve_indent(
        stream,
        offset,
        previous.saturating_sub(style.indent_size),
        style,
    )
}

/// Walk backward from the closing delimiter at `offset` to its matching
/// opener, counting nesting of the same delimiter kind. Returns the
/// opener's start offset, or `None` when the closer is unbalanced.
fn matching_opener(stream: &mut TokenStream, offset: usize) -> Option<usize> {
    if !stream.seek(offset) {
        return None;
    }
    let closer = stream.token()?.tag();
    let opener = match closer {
        TokenTag::RBrace => TokenTag::LBrace,
        TokenTag::RParen => TokenTag::LParen,
        TokenTag::RBracket => TokenTag::LBracket,
        _ => return None,
    };
    let mut depth = 1usize;
    while stream.move_previous() {
        let tag = stream.token()?.tag();
        if tag == closer {
            depth += 1;
        } else if tag == opener {
            depth -= 1;
            if depth == 0 {
                return stream.token().map(|t| t.start() as usize);
            }
        }
    }
    None
}

/// Resolved indent of the line containing byte `offset`.
fn indent_of_line_at(resolved_lines: &[(usize, usize)], offset: usize) -> Option<usize> {
    let idx = resolved_lines.partition_point(|&(start, _)| start <= offset);
    idx.checked_sub(1).map(|i| resolved_lines[i].1)
}
