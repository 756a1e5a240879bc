//! The opcode tree produced by the parser.
//!
//! [`Ast`] is the single data model shared by the sampler, counter and
//! enumerator. [`ClassItem`] describes one element of a `[...]` class,
//! [`Category`] names the shorthand classes that resolve through the
//! alphabet tables, and [`Anchor`] covers the zero-width assertions.

use smallvec::SmallVec;

/// A character category resolved against the active alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `\w`: letters, digits and `_`.
    Word,
    /// `\W`: printable characters outside `\w`.
    NotWord,
    /// `\d`: ASCII digits.
    Digit,
    /// `\D`: printable characters outside `\d`.
    NotDigit,
    /// `\s`: ASCII whitespace.
    Space,
    /// `\S`: printable characters outside `\s`.
    NotSpace,
}

/// A zero-width position assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `^` (also `\A`).
    Start,
    /// `$` (also `\Z`).
    End,
    /// `\b`.
    WordBoundary,
    /// `\B`.
    NotWordBoundary,
}

/// One element of a `[...]` character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    /// A single code point.
    Literal(char),
    /// An inclusive code-point range.
    Range { lo: char, hi: char },
    /// A shorthand category (`\d`, `\w`, `\s` and negations).
    Category(Category),
}

/// Items of a character class. Most classes hold only a few elements.
pub type ClassItems = SmallVec<[ClassItem; 4]>;

/// A syntax tree node. The parser yields a sequence (`Vec<Ast>`) of these;
/// sequences nest inside groups, branches, repeats and assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A literal code point.
    Literal(char),
    /// Any printable code point except the payload (`[^c]` with one member).
    NotLiteral(char),
    /// `.`: any printable code point except newline.
    Any,
    /// An inclusive code-point range (`[a-z]`).
    Range { lo: char, hi: char },
    /// `[...]` / `[^...]`: the union of the items, optionally negated
    /// against the printable set.
    In { items: ClassItems, negated: bool },
    /// A shorthand category at the top level of the pattern.
    Category(Category),
    /// `a|b|...`: ordered alternatives.
    Branch(Vec<Vec<Ast>>),
    /// `(...)`, `(?P<name>...)` or `(?:...)`. Numbered groups record their
    /// emitted text for later backreferences.
    Group {
        /// 1-based group number; `None` for non-capturing groups.
        index: Option<u32>,
        /// Group name, if declared with `(?P<name>...)`.
        name: Option<String>,
        inner: Vec<Ast>,
    },
    /// `\1`..`\99` or `(?P=name)`: named references are resolved to their
    /// group number at parse time.
    GroupRef(u32),
    /// A quantified item. `max` of `None` means unbounded; the effective cap
    /// is substituted at evaluation time. `lazy` marks `*?`/`+?`/`??`/
    /// `{m,n}?` forms.
    Repeat {
        min: u32,
        max: Option<u32>,
        lazy: bool,
        inner: Vec<Ast>,
    },
    /// `(?=...)` / `(?!...)`. Contributes nothing to output; the body must
    /// still parse.
    Assert { negated: bool, inner: Vec<Ast> },
    /// A zero-width anchor. Contributes nothing to output.
    Anchor(Anchor),
}
