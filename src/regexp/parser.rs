//! Pattern parsing for the supported regex subset.
//!
//! This module parses pattern strings into the [`Ast`] opcode tree consumed
//! by the sampler, counter and enumerator. Supports:
//! - `.` any printable character except newline
//! - `[...]` character classes with ranges, `[^...]` negated classes
//! - `\d \D \w \W \s \S` shorthand classes
//! - `|` alternation
//! - `(...)` groups, `(?:...)` non-capturing, `(?P<name>...)` named
//! - `? + * {n} {n,} {n,m}` quantifiers and their lazy `?`-suffixed forms
//! - `\1`..`\99` and `(?P=name)` backreferences
//! - `^ $ \b \B` anchors, `(?=...)` / `(?!...)` lookahead
//!
//! Lookbehind, conditionals, atomic groups and possessive quantifiers are
//! rejected with a [`PatternError`].

use rustc_hash::FxHashMap;

use super::ast::{Anchor, Ast, Category, ClassItem, ClassItems};
use crate::errors::PatternError;

/// Parses a pattern string into a root sequence of [`Ast`] nodes.
///
/// # Errors
///
/// Returns a [`PatternError`] when the pattern cannot be parsed under the
/// supported subset.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Vec<Ast>, PatternError> {
    let mut parse = Parse::new(pattern);
    let sequence = read_branches(&mut parse)?;
    if !parse.is_empty() {
        return Err(parse.error("unbalanced ')'"));
    }
    Ok(sequence)
}

/// Parser state over the pattern bytes.
struct Parse {
    bytes: Vec<u8>,
    index: usize,
    last_index: usize,
    group_count: u32,
    open_groups: Vec<u32>,
    group_names: FxHashMap<String, u32>,
}

impl Parse {
    fn new(pattern: &str) -> Self {
        Self {
            bytes: pattern.as_bytes().to_vec(),
            index: 0,
            last_index: 0,
            group_count: 0,
            open_groups: Vec::new(),
            group_names: FxHashMap::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.index >= self.bytes.len()
    }

    /// Decodes the rune at the cursor without consuming it.
    fn peek_rune(&self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        // The bytes come from a &str, so the cursor always sits on a
        // UTF-8 boundary.
        std::str::from_utf8(&self.bytes[self.index..])
            .ok()
            .and_then(|s| s.chars().next())
    }

    fn next_rune(&mut self) -> Result<char, PatternError> {
        let Some(c) = self.peek_rune() else {
            return Err(PatternError::new("unexpected end of pattern", self.index));
        };
        self.last_index = self.index;
        self.index += c.len_utf8();
        Ok(c)
    }

    /// Consumes the next rune if it equals `wanted`.
    fn bypass_optional(&mut self, wanted: char) -> bool {
        if self.peek_rune() == Some(wanted) {
            self.last_index = self.index;
            self.index += wanted.len_utf8();
            true
        } else {
            false
        }
    }

    fn require(&mut self, wanted: char) -> Result<(), PatternError> {
        match self.next_rune() {
            Ok(c) if c == wanted => Ok(()),
            Ok(c) => Err(PatternError::new(
                format!("expected '{wanted}', got '{c}'"),
                self.last_index,
            )),
            Err(_) => Err(PatternError::new(
                format!("expected '{wanted}', got end of pattern"),
                self.index,
            )),
        }
    }

    fn error(&self, message: impl Into<String>) -> PatternError {
        PatternError::new(message, self.last_index)
    }
}

/// Reads branches separated by `|`. Stops before an unconsumed `)` or at
/// the end of the pattern.
fn read_branches(parse: &mut Parse) -> Result<Vec<Ast>, PatternError> {
    let mut branches = vec![read_branch(parse)?];
    while parse.bypass_optional('|') {
        branches.push(read_branch(parse)?);
    }
    if branches.len() == 1 {
        Ok(branches.swap_remove(0))
    } else {
        Ok(vec![Ast::Branch(branches)])
    }
}

/// Reads a single branch: a sequence of quantified atoms.
fn read_branch(parse: &mut Parse) -> Result<Vec<Ast>, PatternError> {
    let mut sequence = Vec::new();
    while let Some(c) = parse.peek_rune() {
        if c == '|' || c == ')' {
            break;
        }
        sequence.push(read_piece(parse)?);
    }
    Ok(sequence)
}

/// Reads an atom with its optional quantifier.
fn read_piece(parse: &mut Parse) -> Result<Ast, PatternError> {
    let atom = read_atom(parse)?;
    read_quantifier(parse, atom)
}

fn read_atom(parse: &mut Parse) -> Result<Ast, PatternError> {
    let c = parse.next_rune()?;
    match c {
        '(' => read_group(parse),
        '[' => read_class(parse),
        '.' => Ok(Ast::Any),
        '^' => Ok(Ast::Anchor(Anchor::Start)),
        '$' => Ok(Ast::Anchor(Anchor::End)),
        '\\' => read_escape(parse),
        '*' | '+' | '?' => Err(parse.error("nothing to repeat")),
        _ => Ok(Ast::Literal(c)),
    }
}

/// Reads a quantifier (`?`, `*`, `+`, `{m,n}`) with an optional lazy `?`
/// modifier, wrapping `atom` into a repeat node.
fn read_quantifier(parse: &mut Parse, atom: Ast) -> Result<Ast, PatternError> {
    let (min, max) = match parse.peek_rune() {
        Some('*') => {
            parse.next_rune()?;
            (0, None)
        }
        Some('+') => {
            parse.next_rune()?;
            (1, None)
        }
        Some('?') => {
            parse.next_rune()?;
            (0, Some(1))
        }
        Some('{') => match read_range_quantifier(parse)? {
            Some(bounds) => bounds,
            // Not a quantifier; the brace is the next atom's literal.
            None => return Ok(atom),
        },
        _ => return Ok(atom),
    };

    if matches!(atom, Ast::Anchor(_)) {
        return Err(parse.error("nothing to repeat"));
    }

    let lazy = parse.bypass_optional('?');
    if parse.bypass_optional('+') {
        return Err(parse.error("possessive quantifiers are not supported"));
    }

    Ok(Ast::Repeat {
        min,
        max,
        lazy,
        inner: vec![atom],
    })
}

/// Reads `{m}`, `{m,}`, `{m,n}` or `{,n}` after an atom. Returns `None`
/// (restoring the cursor) when the braces do not form a quantifier, in
/// which case the `{` is an ordinary literal.
fn read_range_quantifier(parse: &mut Parse) -> Result<Option<(u32, Option<u32>)>, PatternError> {
    let start = parse.index;
    parse.next_rune()?; // '{'

    let lo_digits = read_digits(parse);
    match parse.peek_rune() {
        Some('}') if !lo_digits.is_empty() => {
            parse.next_rune()?;
            let n = parse_repeat_count(parse, &lo_digits)?;
            Ok(Some((n, Some(n))))
        }
        Some(',') => {
            parse.next_rune()?;
            let hi_digits = read_digits(parse);
            if parse.peek_rune() != Some('}') || (lo_digits.is_empty() && hi_digits.is_empty()) {
                parse.index = start;
                return Ok(None);
            }
            parse.next_rune()?;
            let min = if lo_digits.is_empty() {
                0
            } else {
                parse_repeat_count(parse, &lo_digits)?
            };
            let max = if hi_digits.is_empty() {
                None
            } else {
                Some(parse_repeat_count(parse, &hi_digits)?)
            };
            if let Some(hi) = max {
                if hi < min {
                    return Err(parse.error("min repeat greater than max repeat"));
                }
            }
            Ok(Some((min, max)))
        }
        _ => {
            parse.index = start;
            Ok(None)
        }
    }
}

fn read_digits(parse: &mut Parse) -> String {
    let mut digits = String::new();
    while let Some(c) = parse.peek_rune() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        parse.last_index = parse.index;
        parse.index += 1;
    }
    digits
}

fn parse_repeat_count(parse: &Parse, digits: &str) -> Result<u32, PatternError> {
    digits
        .parse()
        .map_err(|_| parse.error("repeat count too large"))
}

/// Reads a group after the opening `(`.
fn read_group(parse: &mut Parse) -> Result<Ast, PatternError> {
    if !parse.bypass_optional('?') {
        return read_capture(parse, None);
    }

    let c = parse.next_rune()?;
    match c {
        ':' => {
            let inner = read_branches(parse)?;
            parse.require(')')?;
            Ok(Ast::Group {
                index: None,
                name: None,
                inner,
            })
        }
        '=' | '!' => {
            let inner = read_branches(parse)?;
            parse.require(')')?;
            Ok(Ast::Assert {
                negated: c == '!',
                inner,
            })
        }
        'P' => read_named(parse),
        '#' => {
            // (?#...) comment: consumed, contributes nothing
            loop {
                if parse.next_rune()? == ')' {
                    break;
                }
            }
            Ok(Ast::Group {
                index: None,
                name: None,
                inner: Vec::new(),
            })
        }
        '<' => match parse.peek_rune() {
            Some('=') | Some('!') => Err(parse.error("lookbehind assertions are not supported")),
            _ => Err(parse.error("unsupported group extension (?<...)")),
        },
        '(' => Err(parse.error("conditional groups are not supported")),
        '>' => Err(parse.error("atomic groups are not supported")),
        other => Err(parse.error(format!("unsupported group extension (?{other}...)"))),
    }
}

/// Reads a capturing group body, assigning the next group number.
fn read_capture(parse: &mut Parse, name: Option<String>) -> Result<Ast, PatternError> {
    parse.group_count += 1;
    let index = parse.group_count;
    if let Some(name) = &name {
        if parse.group_names.insert(name.clone(), index).is_some() {
            return Err(parse.error(format!("redefinition of group name {name:?}")));
        }
    }

    parse.open_groups.push(index);
    let inner = read_branches(parse)?;
    parse.require(')')?;
    parse.open_groups.pop();

    Ok(Ast::Group {
        index: Some(index),
        name,
        inner,
    })
}

/// Reads `(?P<name>...)` or `(?P=name)` after the `P`.
fn read_named(parse: &mut Parse) -> Result<Ast, PatternError> {
    match parse.next_rune()? {
        '<' => {
            let name = read_group_name(parse, '>')?;
            read_capture(parse, Some(name))
        }
        '=' => {
            let name = read_group_name(parse, ')')?;
            match parse.group_names.get(&name).copied() {
                Some(index) if parse.open_groups.contains(&index) => {
                    Err(parse.error("cannot refer to an open group"))
                }
                Some(index) => Ok(Ast::GroupRef(index)),
                None => Err(parse.error(format!("unknown group name {name:?}"))),
            }
        }
        other => Err(parse.error(format!("unsupported extension (?P{other}...)"))),
    }
}

fn read_group_name(parse: &mut Parse, terminator: char) -> Result<String, PatternError> {
    let mut name = String::new();
    loop {
        let c = parse.next_rune()?;
        if c == terminator {
            break;
        }
        name.push(c);
    }
    if name.is_empty() {
        return Err(parse.error("missing group name"));
    }
    let mut chars = name.chars();
    let leading_ok = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_');
    if !leading_ok || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(parse.error(format!("bad character in group name {name:?}")));
    }
    Ok(name)
}

/// Reads an escape at the top level of the pattern.
fn read_escape(parse: &mut Parse) -> Result<Ast, PatternError> {
    let c = parse.next_rune()?;
    match c {
        'd' => Ok(Ast::Category(Category::Digit)),
        'D' => Ok(Ast::Category(Category::NotDigit)),
        'w' => Ok(Ast::Category(Category::Word)),
        'W' => Ok(Ast::Category(Category::NotWord)),
        's' => Ok(Ast::Category(Category::Space)),
        'S' => Ok(Ast::Category(Category::NotSpace)),
        'b' => Ok(Ast::Anchor(Anchor::WordBoundary)),
        'B' => Ok(Ast::Anchor(Anchor::NotWordBoundary)),
        'A' => Ok(Ast::Anchor(Anchor::Start)),
        'Z' => Ok(Ast::Anchor(Anchor::End)),
        '1'..='9' => read_group_ref(parse, c),
        _ => Ok(Ast::Literal(read_escaped_literal(parse, c)?)),
    }
}

/// Resolves a single-character escape shared between the top level and
/// character classes.
fn read_escaped_literal(parse: &mut Parse, c: char) -> Result<char, PatternError> {
    match c {
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'f' => Ok('\x0C'),
        'v' => Ok('\x0B'),
        'a' => Ok('\x07'),
        '0' => Ok('\0'),
        'x' => read_hex_escape(parse, 2),
        'u' => read_hex_escape(parse, 4),
        c if !c.is_alphanumeric() => Ok(c),
        _ => Err(parse.error(format!("bad escape \\{c}"))),
    }
}

fn read_hex_escape(parse: &mut Parse, len: u32) -> Result<char, PatternError> {
    let mut value: u32 = 0;
    for _ in 0..len {
        let c = parse.next_rune()?;
        let digit = c
            .to_digit(16)
            .ok_or_else(|| parse.error(format!("invalid hex digit '{c}' in escape")))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or_else(|| parse.error("escape is not a valid code point"))
}

/// Reads a numbered backreference (`\1`..`\99`).
fn read_group_ref(parse: &mut Parse, first: char) -> Result<Ast, PatternError> {
    let mut number = u32::from(first as u8 - b'0');
    if let Some(d) = parse.peek_rune() {
        if d.is_ascii_digit() {
            parse.next_rune()?;
            number = number * 10 + u32::from(d as u8 - b'0');
        }
    }
    if number > parse.group_count {
        return Err(parse.error(format!("invalid group reference {number}")));
    }
    if parse.open_groups.contains(&number) {
        return Err(parse.error("cannot refer to an open group"));
    }
    Ok(Ast::GroupRef(number))
}

/// Reads a `[...]` class after the opening bracket.
fn read_class(parse: &mut Parse) -> Result<Ast, PatternError> {
    let negated = parse.bypass_optional('^');
    let mut items = ClassItems::new();

    // ']' directly after '[' or '[^' is a literal
    if parse.bypass_optional(']') {
        items.push(ClassItem::Literal(']'));
    }

    loop {
        let Some(c) = parse.peek_rune() else {
            return Err(parse.error("unterminated character set"));
        };
        if c == ']' {
            parse.next_rune()?;
            break;
        }
        read_class_item(parse, &mut items)?;
    }

    if items.len() == 1 {
        match items[0] {
            ClassItem::Literal(c) => {
                return Ok(if negated {
                    Ast::NotLiteral(c)
                } else {
                    Ast::Literal(c)
                });
            }
            ClassItem::Range { lo, hi } if !negated => {
                return Ok(Ast::Range { lo, hi });
            }
            _ => {}
        }
    }

    Ok(Ast::In { items, negated })
}

enum ClassEscape {
    Literal(char),
    Category(Category),
}

fn read_class_item(parse: &mut Parse, items: &mut ClassItems) -> Result<(), PatternError> {
    let c = parse.next_rune()?;

    let lo = if c == '\\' {
        match read_class_escape(parse)? {
            ClassEscape::Literal(c) => c,
            ClassEscape::Category(category) => {
                items.push(ClassItem::Category(category));
                // A shorthand class cannot open a range
                if parse.bypass_optional('-') {
                    if parse.peek_rune() == Some(']') {
                        items.push(ClassItem::Literal('-'));
                    } else {
                        return Err(parse.error("bad character range"));
                    }
                }
                return Ok(());
            }
        }
    } else {
        c
    };

    if parse.bypass_optional('-') {
        match parse.peek_rune() {
            // trailing '-' as in [a-]
            Some(']') => {
                items.push(ClassItem::Literal(lo));
                items.push(ClassItem::Literal('-'));
            }
            None => return Err(parse.error("unterminated character set")),
            Some(_) => {
                let next = parse.next_rune()?;
                let hi = if next == '\\' {
                    match read_class_escape(parse)? {
                        ClassEscape::Literal(c) => c,
                        ClassEscape::Category(_) => {
                            return Err(parse.error("bad character range"));
                        }
                    }
                } else {
                    next
                };
                if hi < lo {
                    return Err(parse.error(format!("bad character range {lo}-{hi}")));
                }
                items.push(ClassItem::Range { lo, hi });
            }
        }
    } else {
        items.push(ClassItem::Literal(lo));
    }

    Ok(())
}

fn read_class_escape(parse: &mut Parse) -> Result<ClassEscape, PatternError> {
    let c = parse.next_rune()?;
    match c {
        'd' => Ok(ClassEscape::Category(Category::Digit)),
        'D' => Ok(ClassEscape::Category(Category::NotDigit)),
        'w' => Ok(ClassEscape::Category(Category::Word)),
        'W' => Ok(ClassEscape::Category(Category::NotWord)),
        's' => Ok(ClassEscape::Category(Category::Space)),
        'S' => Ok(ClassEscape::Category(Category::NotSpace)),
        // Inside a class \b is backspace, not a word boundary
        'b' => Ok(ClassEscape::Literal('\x08')),
        '1'..='9' => Err(parse.error("octal escapes in character classes are not supported")),
        _ => Ok(ClassEscape::Literal(read_escaped_literal(parse, c)?)),
    }
}
