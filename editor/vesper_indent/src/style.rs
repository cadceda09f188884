//! Brace placement policy and indent sizing.
//!
//! [`CodeStyle`] is the read-only snapshot of the host editor's
//! formatting settings that one resolution runs against. It answers two
//! questions: how wide is one indent unit, and — per construct category —
//! does an opening brace start an indented block body.

use serde::{Deserialize, Serialize};

/// Where a construct's opening brace sits relative to its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BracePlacement {
    /// Brace on the construct's header line; the block body keeps the
    /// header's indentation.
    SameLine,

    /// Brace opens an indented block body: lines after it sit one indent
    /// unit deeper (default).
    #[default]
    NewLineIndented,
}

/// The construct category an opening brace belongs to.
///
/// Each category has its own placement knob in [`CodeStyle`], matching
/// how editor style configurations are keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BraceCategory {
    /// `class` declarations.
    ClassDecl,
    /// `function` declarations, free or method.
    MethodDecl,
    /// `if` / `elseif` / `else` chains.
    IfElse,
    /// `for` and `foreach` loops.
    ForLoop,
    /// `while` and `do` loops.
    WhileLoop,
    /// `switch` statements.
    Switch,
    /// Visibility-scoped members, including property accessor blocks.
    FieldDecl,
    /// Any brace whose owner could not be classified.
    Other,
}

/// Read-only code-style policy for one resolution.
///
/// `#[serde(default)]` lets hosts persist partial settings; anything
/// missing falls back to the defaults below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    /// Width of one indentation unit, in columns.
    pub indent_size: usize,

    /// Columns per tab stop when materializing tab-mixed indentation.
    pub tab_size: usize,

    /// Expand indentation to spaces instead of tab characters.
    pub expand_tabs: bool,

    /// Placement for `class` declaration braces.
    pub class_decl_brace: BracePlacement,
    /// Placement for function/method declaration braces.
    pub method_decl_brace: BracePlacement,
    /// Placement for `if`/`elseif`/`else` braces.
    pub if_brace: BracePlacement,
    /// Placement for `for`/`foreach` braces.
    pub for_brace: BracePlacement,
    /// Placement for `while`/`do` braces.
    pub while_brace: BracePlacement,
    /// Placement for `switch` braces.
    pub switch_brace: BracePlacement,
    /// Placement for field/property declaration braces.
    pub field_decl_brace: BracePlacement,
    /// Placement for braces owned by anything else.
    pub other_brace: BracePlacement,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            indent_size: 4,
            tab_size: 4,
            expand_tabs: true,
            class_decl_brace: BracePlacement::default(),
            method_decl_brace: BracePlacement::default(),
            if_brace: BracePlacement::default(),
            for_brace: BracePlacement::default(),
            while_brace: BracePlacement::default(),
            switch_brace: BracePlacement::default(),
            field_decl_brace: BracePlacement::default(),
            other_brace: BracePlacement::default(),
        }
    }
}

impl CodeStyle {
    /// Create a style with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Return a copy with one category's placement replaced. Convenient
    /// for building test styles.
    pub fn with_placement(mut self, category: BraceCategory, placement: BracePlacement) -> Self {
        match category {
            BraceCategory::ClassDecl => self.class_decl_brace = placement,
            BraceCategory::MethodDecl => self.method_decl_brace = placement,
            BraceCategory::IfElse => self.if_brace = placement,
            BraceCategory::ForLoop => self.for_brace = placement,
            BraceCategory::WhileLoop => self.while_brace = placement,
            BraceCategory::Switch => self.switch_brace = placement,
            BraceCategory::FieldDecl => self.field_decl_brace = placement,
            BraceCategory::Other => self.other_brace = placement,
        }
        self
    }

    /// The placement configured for `category`.
    #[inline]
    pub fn placement(&self, category: BraceCategory) -> BracePlacement {
        match category {
            BraceCategory::ClassDecl => self.class_decl_brace,
            BraceCategory::MethodDecl => self.method_decl_brace,
            BraceCategory::IfElse => self.if_brace,
            BraceCategory::ForLoop => self.for_brace,
            BraceCategory::WhileLoop => self.while_brace,
            BraceCategory::Switch => self.switch_brace,
            BraceCategory::FieldDecl => self.field_decl_brace,
            BraceCategory::Other => self.other_brace,
        }
    }
}
