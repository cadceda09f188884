//! Property-based tests over the full lex-then-resolve pipeline.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests can panic on malformed fixtures"
)]

use proptest::prelude::*;
use vesper_indent::{indent_string, line_indent_width, resolve_indent, CodeStyle};
use vesper_tokens::TokenStream;

/// Line fragments that cover every structural shape the resolver reacts
/// to: construct headers, plain statements, open expressions, closers.
fn line_fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "class Widget {",
        "public function run($x) {",
        "if ($a === 1) {",
        "} elseif ($b) {",
        "} else {",
        "for ($i = 0; $i < 10; $i = $i + 1) {",
        "foreach ($items as $item) {",
        "while ($going) {",
        "do {",
        "switch ($mode) {",
        "case 1:",
        "default:",
        "try {",
        "public(set) $hooked {",
        "$total = $total + $item;",
        "echo $total;",
        "return $total;",
        "break;",
        "$xs = [1, 2,",
        "frobnicate($a,",
        "}",
        "];",
        "",
    ])
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_fragment(), 1..24).prop_map(|lines| {
        let mut s = lines.join("\n");
        s.push('\n');
        s
    })
}

proptest! {
    // The resolver only ever keeps the baseline or adds exactly one
    // indent unit, at any caret position in any token soup.
    #[test]
    fn result_is_baseline_or_one_unit_deeper(
        source in source_strategy(),
        offset_seed in 0usize..4096,
        previous_indent in 0usize..64,
        indent_size in 1usize..9,
    ) {
        let Some(mut stream) = TokenStream::for_source(&source) else {
            return Ok(());
        };
        let offset = offset_seed % (source.len() + 1);
        let style = CodeStyle::with_indent_size(indent_size);
        let resolved = resolve_indent(&mut stream, offset, previous_indent, &style);
        prop_assert!(
            resolved == previous_indent || resolved == previous_indent + indent_size,
            "resolved {resolved} from baseline {previous_indent} with unit {indent_size}"
        );
    }

    // Repositioning is part of every call, so results cannot depend on
    // where an earlier call left the stream's cursor.
    #[test]
    fn resolution_ignores_prior_cursor_position(
        source in source_strategy(),
        first_seed in 0usize..4096,
        second_seed in 0usize..4096,
        previous_indent in 0usize..64,
    ) {
        let Some(mut stream) = TokenStream::for_source(&source) else {
            return Ok(());
        };
        let style = CodeStyle::default();
        let first_offset = first_seed % (source.len() + 1);
        let second_offset = second_seed % (source.len() + 1);
        let baseline_run = resolve_indent(&mut stream, second_offset, previous_indent, &style);
        resolve_indent(&mut stream, first_offset, previous_indent, &style);
        let rerun = resolve_indent(&mut stream, second_offset, previous_indent, &style);
        prop_assert_eq!(baseline_run, rerun);
    }

    // Resolving on arbitrary text (not just well-formed fragments) never
    // panics and still honors the add-one-unit-or-nothing contract.
    #[test]
    fn arbitrary_text_resolves_totally(
        source in "\\PC{0,200}",
        offset_seed in 0usize..4096,
        previous_indent in 0usize..64,
    ) {
        let Some(mut stream) = TokenStream::for_source(&source) else {
            return Ok(());
        };
        let offset = offset_seed % (source.len() + 1);
        let style = CodeStyle::default();
        let resolved = resolve_indent(&mut stream, offset, previous_indent, &style);
        prop_assert!(
            resolved == previous_indent || resolved == previous_indent + style.indent_size
        );
    }

    // Materializing a resolved width and measuring it back is lossless,
    // for both the space and tab renderings.
    #[test]
    fn materialized_indent_measures_back(
        width in 0usize..120,
        expand_tabs in proptest::bool::ANY,
        tab_size in 1usize..9,
    ) {
        let rendered = indent_string(width, expand_tabs, tab_size);
        prop_assert_eq!(line_indent_width(&rendered, tab_size), width);
        prop_assert_eq!(line_indent_width(&format!("{rendered}$x = 1;"), tab_size), width);
    }
}
