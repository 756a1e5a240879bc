//! Alphabet resolution: turns the optional alphabet string into the
//! character tables behind `\w`, `\W`, `\d`, `\D`, `\s`, `\S`, `.` and
//! negated classes.
//!
//! The alphabet only replaces the *letters*. Digits, punctuation and
//! whitespace are fixed ASCII sets, so `\d` and `\s` never move while `\w`,
//! `\W`, `.` and `[^...]` follow the configured letters.

use std::collections::BTreeSet;

use crate::errors::PatternError;
use crate::regexp::ast::{Category, ClassItem};

/// Letters used when no alphabet is configured.
pub(crate) const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const WHITESPACE: &str = " \t\n\r\x0B\x0C";

/// Resolved character tables for one generator. Every set is sorted by code
/// point and free of duplicates, so index-based uniform picks and
/// enumeration order are both deterministic.
#[derive(Debug, Clone)]
pub(crate) struct Alphabet {
    word: Vec<char>,
    not_word: Vec<char>,
    digit: Vec<char>,
    not_digit: Vec<char>,
    space: Vec<char>,
    not_space: Vec<char>,
    printable: Vec<char>,
    any: Vec<char>,
}

impl Alphabet {
    /// Resolves the tables for `letters`, or the Latin default when `None`.
    ///
    /// # Errors
    ///
    /// An alphabet that is empty or contains only whitespace cannot produce
    /// a non-empty `\w` letter set and is rejected as a [`PatternError`].
    pub fn new(letters: Option<&str>) -> Result<Self, PatternError> {
        let letters = letters.unwrap_or(ASCII_LETTERS);
        if letters.trim().is_empty() {
            return Err(PatternError::new(
                "alphabet must contain at least one non-whitespace character",
                0,
            ));
        }

        let digit: BTreeSet<char> = DIGITS.chars().collect();
        let space: BTreeSet<char> = WHITESPACE.chars().collect();

        let mut word: BTreeSet<char> = letters.chars().collect();
        word.extend(digit.iter().copied());
        word.insert('_');

        let mut printable: BTreeSet<char> = word.iter().copied().collect();
        printable.extend(PUNCTUATION.chars());
        printable.extend(space.iter().copied());

        let not_word: Vec<char> = printable.difference(&word).copied().collect();
        let not_digit: Vec<char> = printable.difference(&digit).copied().collect();
        let not_space: Vec<char> = printable.difference(&space).copied().collect();
        let any: Vec<char> = printable.iter().copied().filter(|c| *c != '\n').collect();

        Ok(Self {
            word: word.into_iter().collect(),
            not_word,
            digit: digit.into_iter().collect(),
            not_digit,
            space: space.into_iter().collect(),
            not_space,
            printable: printable.into_iter().collect(),
            any,
        })
    }

    /// The resolved set for a shorthand category.
    pub fn category(&self, category: Category) -> &[char] {
        match category {
            Category::Word => &self.word,
            Category::NotWord => &self.not_word,
            Category::Digit => &self.digit,
            Category::NotDigit => &self.not_digit,
            Category::Space => &self.space,
            Category::NotSpace => &self.not_space,
        }
    }

    /// The full printable universe (`\W`, `\D`, `\S` and `[^...]` complement
    /// against this).
    pub fn printable(&self) -> &[char] {
        &self.printable
    }

    /// The `.`-set: printable minus newline.
    pub fn any_chars(&self) -> &[char] {
        &self.any
    }

    /// Printable minus one code point, for `NOT_LITERAL`.
    pub fn without(&self, excluded: char) -> Vec<char> {
        self.printable
            .iter()
            .copied()
            .filter(|c| *c != excluded)
            .collect()
    }

    /// Resolves a `[...]` class to its candidate characters, sorted by code
    /// point. A negated class is the printable set minus the union.
    pub fn class_set(&self, items: &[ClassItem], negated: bool) -> Vec<char> {
        let mut union = BTreeSet::new();
        for item in items {
            match item {
                ClassItem::Literal(c) => {
                    union.insert(*c);
                }
                ClassItem::Range { lo, hi } => {
                    union.extend((*lo as u32..=*hi as u32).filter_map(char::from_u32));
                }
                ClassItem::Category(category) => {
                    union.extend(self.category(*category).iter().copied());
                }
            }
        }

        if negated {
            self.printable
                .iter()
                .copied()
                .filter(|c| !union.contains(c))
                .collect()
        } else {
            union.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word_set() {
        let tables = Alphabet::new(None).unwrap();
        let word = tables.category(Category::Word);
        assert_eq!(word.len(), 26 + 26 + 10 + 1);
        assert!(word.contains(&'a'));
        assert!(word.contains(&'Z'));
        assert!(word.contains(&'0'));
        assert!(word.contains(&'_'));
    }

    #[test]
    fn test_category_invariants() {
        let tables = Alphabet::new(Some("αβγ")).unwrap();
        let digit = tables.category(Category::Digit);
        let word = tables.category(Category::Word);
        let printable = tables.printable();
        assert!(
            digit.iter().all(|c| word.contains(c)),
            "digits must be a subset of word"
        );
        assert!(
            word.iter().all(|c| printable.contains(c)),
            "word must be a subset of printable"
        );
    }

    #[test]
    fn test_custom_alphabet_moves_word_not_digit() {
        let tables = Alphabet::new(Some("αβγ")).unwrap();
        let word = tables.category(Category::Word);
        assert!(word.contains(&'α'));
        assert!(!word.contains(&'a'), "Latin letters replaced by alphabet");
        assert_eq!(tables.category(Category::Digit), Alphabet::new(None).unwrap().category(Category::Digit));
    }

    #[test]
    fn test_not_word_is_printable_complement() {
        let tables = Alphabet::new(None).unwrap();
        let word = tables.category(Category::Word);
        let not_word = tables.category(Category::NotWord);
        assert!(not_word.iter().all(|c| !word.contains(c)));
        assert!(not_word.iter().all(|c| tables.printable().contains(c)));
        assert!(!not_word.is_empty());
    }

    #[test]
    fn test_any_excludes_newline() {
        let tables = Alphabet::new(None).unwrap();
        assert!(!tables.any_chars().contains(&'\n'));
        assert!(tables.printable().contains(&'\n'));
    }

    #[test]
    fn test_class_set_sorted_union() {
        let tables = Alphabet::new(None).unwrap();
        let items = [
            ClassItem::Literal('z'),
            ClassItem::Range { lo: 'a', hi: 'c' },
            ClassItem::Literal('b'),
        ];
        assert_eq!(tables.class_set(&items, false), vec!['a', 'b', 'c', 'z']);
    }

    #[test]
    fn test_negated_class_set() {
        let tables = Alphabet::new(None).unwrap();
        let items = [ClassItem::Category(Category::Word)];
        let set = tables.class_set(&items, true);
        assert_eq!(set, tables.category(Category::NotWord));
    }

    #[test]
    fn test_explicit_range_ignores_alphabet() {
        let tables = Alphabet::new(Some("αβγ")).unwrap();
        let items = [ClassItem::Range { lo: 'a', hi: 'f' }];
        assert_eq!(
            tables.class_set(&items, false),
            vec!['a', 'b', 'c', 'd', 'e', 'f']
        );
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(Alphabet::new(Some("")).is_err());
        assert!(Alphabet::new(Some("  \t")).is_err());
    }
}
