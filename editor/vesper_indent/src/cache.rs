//! Memoized whitespace strings for materializing indentation.
//!
//! Resolved indentation is a number; inserting it into the document
//! needs an actual whitespace string. Widths and tab sizes cluster in a
//! tiny range in practice, so the bounded key space (widths 0–80, tab
//! sizes 1–8) is built once and served as `'static` borrows; anything
//! outside the bounds is built fresh.
//!
//! The all-space path slices a single 80-column string, which pays for
//! every smaller entry at once. The tab-mixed table is built eagerly on
//! first use behind a `OnceLock`, so concurrent callers can never race a
//! half-built slot; entries are immutable and never evicted.

use std::borrow::Cow;
use std::sync::OnceLock;

/// Widest entry either table caches.
const MAX_CACHED_WIDTH: usize = 80;

/// Largest tab size the tab-mixed table caches.
const MAX_CACHED_TAB_SIZE: usize = 8;

/// One 80-column space string; every smaller all-space entry is a slice
/// of it.
const SPACES: &str = concat!(
    "          ",
    "          ",
    "          ",
    "          ",
    "          ",
    "          ",
    "          ",
    "          ",
);

const _: () = assert!(SPACES.len() == MAX_CACHED_WIDTH);

/// Tab-mixed entries, indexed `[tab_size - 1][width]`.
static TAB_TABLE: OnceLock<Vec<Vec<String>>> = OnceLock::new();

/// Produce a whitespace string of visible width `width`.
///
/// All spaces when `expand_tabs` is set or `width < tab_size`; otherwise
/// the maximum number of full tabs (each worth `tab_size` columns)
/// followed by the remaining spaces. A `tab_size` of zero degrades to
/// all spaces so the function is total.
///
/// Calls with equal arguments always return content-equal strings,
/// cached or not.
pub fn indent_string(width: usize, expand_tabs: bool, tab_size: usize) -> Cow<'static, str> {
    if expand_tabs || tab_size == 0 || width < tab_size {
        return space_string(width);
    }
    if width <= MAX_CACHED_WIDTH && tab_size <= MAX_CACHED_TAB_SIZE {
        let table = TAB_TABLE.get_or_init(build_tab_table);
        return Cow::Borrowed(table[tab_size - 1][width].as_str());
    }
    Cow::Owned(build_tab_string(width, tab_size))
}

fn space_string(width: usize) -> Cow<'static, str> {
    if width <= MAX_CACHED_WIDTH {
        Cow::Borrowed(&SPACES[..width])
    } else {
        Cow::Owned(" ".repeat(width))
    }
}

/// Build every cacheable tab-mixed entry up front. 81 widths by 8 tab
/// sizes is small enough that eager construction beats any locking
/// scheme.
fn build_tab_table() -> Vec<Vec<String>> {
    (1..=MAX_CACHED_TAB_SIZE)
        .map(|tab_size| {
            (0..=MAX_CACHED_WIDTH)
                .map(|width| build_tab_string(width, tab_size))
                .collect()
        })
        .collect()
}

/// A `width`-column string of full tabs followed by remaining spaces.
///
/// # Contract
///
/// `tab_size > 0`; callers route zero tab sizes to the space path.
fn build_tab_string(width: usize, tab_size: usize) -> String {
    debug_assert!(tab_size > 0, "tab path requires a positive tab size");
    let tabs = width / tab_size;
    let spaces = width % tab_size;
    let mut out = String::with_capacity(tabs + spaces);
    for _ in 0..tabs {
        out.push('\t');
    }
    for _ in 0..spaces {
        out.push(' ');
    }
    out
}
