//! Vesper Indentation Engine
//!
//! Incremental, token-aware indentation for the Vesper language: given a
//! document's token stream, a caret offset, and the indentation of the
//! preceding line, compute the indentation for the current line.
//!
//! # Architecture
//!
//! One resolution is a backward walk over the flat token stream — no AST
//! is built, so the engine stays fast and tolerant of the syntactically
//! broken code a user is in the middle of typing:
//!
//! 1. Find the governing structural context behind the caret: an open
//!    brace, a statement terminator, or an open paren/bracket.
//! 2. For an open brace, walk further back to the construct that owns it
//!    (class, function, `if`, loop, `switch`, visibility-scoped member).
//! 3. Consult the [`CodeStyle`] brace-placement policy for that construct
//!    to decide whether the line indents one unit deeper.
//!
//! Nesting is never accumulated in a single call: hosts resolve one line
//! at a time, feeding each line's result in as the next line's baseline.
//!
//! # Modules
//!
//! - [`resolve`]: the brace-context indent resolver
//! - [`classify`]: construct-start token to brace category mapping
//! - [`style`]: brace placement policy and indent sizing
//! - [`cache`]: memoized whitespace strings for materializing indents
//! - [`measure`]: visual width of existing leading whitespace

pub mod cache;
pub mod classify;
pub mod measure;
pub mod resolve;
pub mod style;

pub use cache::indent_string;
pub use classify::construct_category;
pub use measure::line_indent_width;
pub use resolve::resolve_indent;
pub use style::{BraceCategory, BracePlacement, CodeStyle};
