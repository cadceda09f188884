//! Construct-start classification.
//!
//! Maps the token that introduces a block-owning construct to its
//! [`BraceCategory`]. The mapping is data: a static rule table expanded
//! once into an O(1) lookup, so it can be tested exhaustively in
//! isolation from the backward scan that consumes it.
//!
//! Tokens absent from the table are not construct starts. A brace whose
//! backward walk never reaches a construct start classifies as
//! [`BraceCategory::Other`] — that decision lives in the resolver, not
//! here.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use vesper_tokens::TokenTag;

use crate::style::BraceCategory;

/// One construct-start classification rule.
#[derive(Clone, Copy, Debug)]
pub struct ConstructRule {
    /// The construct-start token.
    pub tag: TokenTag,
    /// The brace category its block belongs to.
    pub category: BraceCategory,
}

/// Every token recognized as a construct start, with its category.
pub const CONSTRUCT_RULES: &[ConstructRule] = &[
    ConstructRule {
        tag: TokenTag::Class,
        category: BraceCategory::ClassDecl,
    },
    ConstructRule {
        tag: TokenTag::Function,
        category: BraceCategory::MethodDecl,
    },
    ConstructRule {
        tag: TokenTag::If,
        category: BraceCategory::IfElse,
    },
    ConstructRule {
        tag: TokenTag::ElseIf,
        category: BraceCategory::IfElse,
    },
    ConstructRule {
        tag: TokenTag::Else,
        category: BraceCategory::IfElse,
    },
    ConstructRule {
        tag: TokenTag::For,
        category: BraceCategory::ForLoop,
    },
    ConstructRule {
        tag: TokenTag::Foreach,
        category: BraceCategory::ForLoop,
    },
    ConstructRule {
        tag: TokenTag::While,
        category: BraceCategory::WhileLoop,
    },
    ConstructRule {
        tag: TokenTag::Do,
        category: BraceCategory::WhileLoop,
    },
    ConstructRule {
        tag: TokenTag::Switch,
        category: BraceCategory::Switch,
    },
    ConstructRule {
        tag: TokenTag::Public,
        category: BraceCategory::FieldDecl,
    },
    ConstructRule {
        tag: TokenTag::Protected,
        category: BraceCategory::FieldDecl,
    },
    ConstructRule {
        tag: TokenTag::Private,
        category: BraceCategory::FieldDecl,
    },
    ConstructRule {
        tag: TokenTag::PublicSet,
        category: BraceCategory::FieldDecl,
    },
    ConstructRule {
        tag: TokenTag::ProtectedSet,
        category: BraceCategory::FieldDecl,
    },
    ConstructRule {
        tag: TokenTag::PrivateSet,
        category: BraceCategory::FieldDecl,
    },
];

/// Lookup table built once from [`CONSTRUCT_RULES`].
static RULES_MAP: OnceLock<FxHashMap<TokenTag, BraceCategory>> = OnceLock::new();

fn rules_map() -> &'static FxHashMap<TokenTag, BraceCategory> {
    RULES_MAP.get_or_init(|| {
        CONSTRUCT_RULES
            .iter()
            .map(|rule| (rule.tag, rule.category))
            .collect()
    })
}

/// Classify a construct-start token, or `None` if `tag` does not start a
/// block-owning construct.
#[inline]
pub fn construct_category(tag: TokenTag) -> Option<BraceCategory> {
    rules_map().get(&tag).copied()
}
