//! The Vesper token tag set.
//!
//! [`TokenTag`] doubles as the `logos` lexer definition, so the tag set and
//! the scanner cannot drift apart. Tags carry no text: a tag plus a span is
//! everything the editor layer needs (see [`Token`](crate::Token)).
//!
//! Horizontal and vertical whitespace is skipped, not tokenized. Consumers
//! that walk the stream therefore see gaps between spans; seeking handles
//! those gaps deterministically (see [`TokenStream`](crate::TokenStream)).

use logos::Logos;

/// Lexical tag for one Vesper token.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenTag {
    // Declaration keywords
    /// `class`
    #[token("class")]
    Class,
    /// `function`
    #[token("function")]
    Function,

    // Statement keywords
    /// `if`
    #[token("if")]
    If,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `foreach`
    #[token("foreach")]
    Foreach,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `switch`
    #[token("switch")]
    Switch,
    /// `case`
    #[token("case")]
    Case,
    /// `default`
    #[token("default")]
    Default,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `try`
    #[token("try")]
    Try,
    /// `catch`
    #[token("catch")]
    Catch,
    /// `new`
    #[token("new")]
    New,
    /// `echo`
    #[token("echo")]
    Echo,
    /// `as` (foreach binding)
    #[token("as")]
    As,

    // Visibility modifiers. The `(set)` forms scope a property's setter
    // separately from its getter and lex as a single token.
    /// `public`
    #[token("public")]
    Public,
    /// `protected`
    #[token("protected")]
    Protected,
    /// `private`
    #[token("private")]
    Private,
    /// `public(set)`
    #[token("public(set)")]
    PublicSet,
    /// `protected(set)`
    #[token("protected(set)")]
    ProtectedSet,
    /// `private(set)`
    #[token("private(set)")]
    PrivateSet,

    // Literal keywords
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,

    // Delimiters
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    // Punctuation
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `::`
    #[token("::")]
    DoubleColon,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `?`
    #[token("?")]
    Question,

    // Operators
    /// `=`
    #[token("=")]
    Eq,
    /// `==`
    #[token("==")]
    EqEq,
    /// `===`
    #[token("===")]
    TripleEq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>`
    #[token(">")]
    Gt,
    /// `>=`
    #[token(">=")]
    GtEq,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `.` (string concatenation)
    #[token(".")]
    Dot,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Amp,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `|`
    #[token("|")]
    Pipe,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `??`
    #[token("??")]
    DoubleQuestion,

    // Literals and names
    /// Integer literal: `42`
    #[regex(r"[0-9]+")]
    Int,
    /// Float literal: `3.14`
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// String literal, double or single quoted
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    Str,
    /// Variable: `$name`
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    /// Bare identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // Trivia
    /// Line (`//`, `#`) or block (`/* */`) comment
    #[regex(r"//[^\n]*")]
    #[regex(r"#[^\n]*")]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    Comment,

    /// Any byte the scanner does not recognize. Editing produces partial
    /// input constantly, so unrecognized bytes become ordinary tokens
    /// rather than lex failures.
    #[regex(r"[^ \t\r\n\f]", priority = 0)]
    Error,
}

impl TokenTag {
    /// Check if this token terminates the backward scan for a structural
    /// context: an open brace, a statement terminator, or an open
    /// paren/bracket.
    #[inline]
    pub fn is_scan_stop(self) -> bool {
        matches!(
            self,
            TokenTag::LBrace | TokenTag::Semicolon | TokenTag::LParen | TokenTag::LBracket
        )
    }

    /// Check if this is a closing delimiter.
    #[inline]
    pub fn is_close_delim(self) -> bool {
        matches!(
            self,
            TokenTag::RParen | TokenTag::RBrace | TokenTag::RBracket
        )
    }

    /// Check if this is a visibility modifier, including the
    /// property-accessor `(set)` variants.
    #[inline]
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            TokenTag::Public
                | TokenTag::Protected
                | TokenTag::Private
                | TokenTag::PublicSet
                | TokenTag::ProtectedSet
                | TokenTag::PrivateSet
        )
    }
}
