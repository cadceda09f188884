use pretty_assertions::assert_eq;
use vesper_tokens::{Token, TokenStream, TokenTag};

use super::*;

/// Resolve at the very end of `source`, the type-Enter-then-reindent case.
fn resolve_at_end(source: &str, previous_indent: usize, style: &CodeStyle) -> usize {
    let mut stream =
        TokenStream::for_source(source).unwrap_or_else(|| panic!("no tokens in {source:?}"));
    resolve_indent(&mut stream, source.len(), previous_indent, style)
}

// === Failure paths keep the baseline ===

#[test]
fn empty_stream_keeps_baseline() {
    let mut stream = TokenStream::from_tokens(Vec::new());
    let style = CodeStyle::default();
    assert_eq!(resolve_indent(&mut stream, 0, 7, &style), 7);
}

#[test]
fn caret_before_first_token_keeps_baseline() {
    let mut stream = TokenStream::for_source("if ($a) {").unwrap_or_else(|| panic!("no tokens"));
    let style = CodeStyle::default();
    // Offset 0 normalizes onto the first token; move_previous fails.
    assert_eq!(resolve_indent(&mut stream, 0, 3, &style), 3);
}

#[test]
fn exhausted_scan_without_stop_keeps_baseline() {
    // Nothing structural at all behind the caret.
    assert_eq!(resolve_at_end("$a + $b", 5, &CodeStyle::default()), 5);
}

// === Non-brace structural stops ===

#[test]
fn semicolon_keeps_baseline() {
    assert_eq!(resolve_at_end("$a = 1;", 4, &CodeStyle::default()), 4);
}

#[test]
fn open_paren_keeps_baseline() {
    // Caret inside an argument list.
    assert_eq!(resolve_at_end("foo($a,", 2, &CodeStyle::default()), 2);
}

#[test]
fn open_bracket_keeps_baseline() {
    assert_eq!(resolve_at_end("$a = [1,", 6, &CodeStyle::default()), 6);
}

#[test]
fn open_bracket_wins_over_earlier_brace() {
    // The brace further back is irrelevant: the nearest structural token
    // governs.
    let source = "if ($a) { $b = [1,";
    assert_eq!(resolve_at_end(source, 4, &CodeStyle::default()), 4);
}

#[test]
fn semicolon_wins_over_earlier_brace() {
    let source = "while ($a) { $b = 1;";
    assert_eq!(resolve_at_end(source, 8, &CodeStyle::default()), 8);
}

// === Brace classification and placement dispatch ===

#[test]
fn method_brace_indents_when_new_line_indented() {
    let style = CodeStyle::default()
        .with_placement(BraceCategory::MethodDecl, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("function f() {", 4, &style), 8);
}

#[test]
fn switch_brace_same_line_keeps_baseline() {
    let style =
        CodeStyle::default().with_placement(BraceCategory::Switch, BracePlacement::SameLine);
    assert_eq!(resolve_at_end("switch ($x) {", 2, &style), 2);
}

#[test]
fn class_brace_uses_class_placement() {
    let style = CodeStyle::default()
        .with_placement(BraceCategory::ClassDecl, BracePlacement::SameLine)
        .with_placement(BraceCategory::Other, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("class Greeter {", 0, &style), 0);
}

#[test]
fn conditional_chain_maps_to_if_placement() {
    let style = CodeStyle::with_indent_size(2);
    assert_eq!(resolve_at_end("if ($a) {", 0, &style), 2);
    assert_eq!(resolve_at_end("} elseif ($b) {", 2, &style), 4);
    assert_eq!(resolve_at_end("} else {", 2, &style), 4);
}

#[test]
fn loops_map_to_their_placements() {
    let style = CodeStyle::default()
        .with_placement(BraceCategory::ForLoop, BracePlacement::SameLine)
        .with_placement(BraceCategory::WhileLoop, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("foreach ($xs as $x) {", 4, &style), 4);
    assert_eq!(resolve_at_end("for ($i = 0, {", 4, &style), 4);
    assert_eq!(resolve_at_end("while ($a) {", 4, &style), 8);
    assert_eq!(resolve_at_end("do {", 4, &style), 8);
}

#[test]
fn visibility_modifier_maps_to_field_placement() {
    let style = CodeStyle::default()
        .with_placement(BraceCategory::FieldDecl, BracePlacement::NewLineIndented)
        .with_placement(BraceCategory::Other, BracePlacement::SameLine);
    assert_eq!(resolve_at_end("public $hooked {", 4, &style), 8);
    assert_eq!(resolve_at_end("private(set) $x {", 4, &style), 8);
}

#[test]
fn unowned_brace_falls_back_to_other() {
    let same = CodeStyle::default().with_placement(BraceCategory::Other, BracePlacement::SameLine);
    let indented = CodeStyle::default();
    // Only unclassifiable tokens before the brace.
    assert_eq!(resolve_at_end("$x {", 4, &same), 4);
    assert_eq!(resolve_at_end("$x {", 4, &indented), 8);
}

#[test]
fn lone_brace_at_document_start_keeps_baseline() {
    // A single-token stream cannot be normalized (no previous token), so
    // the brace never gets classified.
    assert_eq!(resolve_at_end("{", 4, &CodeStyle::default()), 4);
}

#[test]
fn try_brace_is_a_generic_block() {
    // Preserved fallback: try/catch have no category of their own.
    let style = CodeStyle::default()
        .with_placement(BraceCategory::Other, BracePlacement::SameLine)
        .with_placement(BraceCategory::IfElse, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("try {", 4, &style), 4);
}

#[test]
fn owner_scan_walks_past_intervening_tokens() {
    // The `(`, `)`, and parameter tokens between `function` and `{` do
    // not stop the owner scan.
    let style = CodeStyle::with_indent_size(4);
    assert_eq!(
        resolve_at_end("function add($a, $b) {", 0, &style),
        4
    );
}

#[test]
fn nearest_brace_governs_nested_constructs() {
    // Caret inside the `if` body, not the function body.
    let style = CodeStyle::default()
        .with_placement(BraceCategory::MethodDecl, BracePlacement::SameLine)
        .with_placement(BraceCategory::IfElse, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("function f() { if ($a) {", 4, &style), 8);
}

// === Spec'd scenarios ===

#[test]
fn scenario_function_new_line_indented() {
    let style = CodeStyle::with_indent_size(4)
        .with_placement(BraceCategory::MethodDecl, BracePlacement::NewLineIndented);
    assert_eq!(resolve_at_end("function f() {", 4, &style), 8);
}

#[test]
fn scenario_switch_same_line() {
    let style =
        CodeStyle::default().with_placement(BraceCategory::Switch, BracePlacement::SameLine);
    assert_eq!(resolve_at_end("switch ($v) {", 2, &style), 2);
}

// === Hand-built streams ===

#[test]
fn resolves_on_synthetic_tokens() {
    // class A {  — spans chosen with gaps, as a whitespace-skipping
    // lexer would produce.
    let tokens = vec![
        Token::new(TokenTag::Class, 0, 5),
        Token::new(TokenTag::Ident, 6, 7),
        Token::new(TokenTag::LBrace, 8, 9),
    ];
    let mut stream = TokenStream::from_tokens(tokens);
    let style = CodeStyle::with_indent_size(3)
        .with_placement(BraceCategory::ClassDecl, BracePlacement::NewLineIndented);
    assert_eq!(resolve_indent(&mut stream, 9, 0, &style), 3);
}

#[test]
fn result_is_reusable_across_calls() {
    // The stream is repositioned by every call; results must not depend
    // on where a previous call left the cursor.
    let mut stream = TokenStream::for_source("if ($a) {").unwrap_or_else(|| panic!("no tokens"));
    let style = CodeStyle::with_indent_size(4);
    let first = resolve_indent(&mut stream, 9, 0, &style);
    let second = resolve_indent(&mut stream, 9, 0, &style);
    assert_eq!(first, 4);
    assert_eq!(first, second);
}
