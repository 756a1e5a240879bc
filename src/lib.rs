//! strgen: random, counted and exhaustive string generation from regular
//! expression patterns.
//!
//! A [`StringGen`] compiles a pattern once and then produces random matching
//! strings, streams and batches of them, sets of distinct values, the exact
//! number of distinct strings the pattern can emit (possibly infinite), and
//! a lazy enumeration of all of them in a stable order. Useful for test
//! data, fixtures, fuzzing inputs and mock data.
//!
//! ```
//! use strgen::StringGen;
//!
//! let mut gen = StringGen::new("[a-f0-9]{8}").unwrap();
//! let token = gen.render();
//! assert_eq!(token.len(), 8);
//! ```
//!
//! Counting and enumeration share the same parsed tree:
//!
//! ```
//! use strgen::{Count, StringGen};
//!
//! let gen = StringGen::new("(yes|no)").unwrap();
//! assert_eq!(StringGen::count(&gen), Count::Finite(2));
//! let all: Vec<String> = StringGen::enumerate(&gen).collect();
//! assert_eq!(all, vec!["yes", "no"]);
//! ```
//!
//! Generation is deterministic for a fixed seed:
//!
//! ```
//! use strgen::StringGen;
//!
//! let mut a = StringGen::builder(r"\d{4}").seed(42u64).build().unwrap();
//! let mut b = StringGen::builder(r"\d{4}").seed(42u64).build().unwrap();
//! assert_eq!(a.render(), b.render());
//! ```
//!
//! The `alphabet` option rewires `\w`, `\W`, `.` and negated classes while
//! leaving `\d`, `\s` and explicit ranges alone; presets live in
//! [`alphabets`]. Ready-made patterns live in [`patterns`].

mod alphabet;
pub mod alphabets;
mod config;
mod errors;
pub mod patterns;
mod regexp;
mod rng;

pub use config::{configure, reset, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_REPEAT};
pub use errors::{Error, PatternError, Result};
pub use regexp::Count;
pub use rng::Seed;

use std::collections::HashSet;
use std::fmt;

use once_cell::unsync::OnceCell;

use alphabet::Alphabet;
use regexp::ast::Ast;
use regexp::{count_sequence, enumerate_strings, parse_pattern, validate, Sampler};
use rng::RandomEngine;

/// Random string generator driven by a regular expression pattern.
///
/// Construction parses the pattern, resolves the alphabet tables and
/// captures the `max_repeat` cap, so every later operation works on the
/// same immutable tree. The random engine is the only per-call mutable
/// state; the memoized count is filled on first request.
///
/// Instances are iterable: iterating yields an infinite stream of random
/// matching strings. Use [`stream`](StringGen::stream) for a bounded lazy
/// sequence. Instances compare equal iff their pattern sources are equal.
///
/// A generator is not safe to share across threads without external
/// synchronisation; distinct instances are fully independent.
pub struct StringGen {
    pattern: String,
    ast: Vec<Ast>,
    tables: Alphabet,
    max_repeat: u32,
    rng: RandomEngine,
    cached_count: OnceCell<Count>,
}

impl StringGen {
    /// Compiles `pattern` with the process-config defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Pattern`] when the pattern cannot be parsed under the
    /// supported subset or a class resolves to no characters.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        Self::builder(pattern).build()
    }

    /// Starts a builder for per-instance options (seed, alphabet,
    /// `max_repeat`).
    pub fn builder(pattern: impl Into<String>) -> Builder {
        Builder {
            pattern: pattern.into(),
            seed: None,
            max_repeat: None,
            alphabet: None,
        }
    }

    /// The pattern source this generator was built from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` when the pattern source is empty (such a generator
    /// only ever renders the empty string).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Re-seeds the random engine; subsequent draws replay from the seed.
    pub fn seed(&mut self, seed: impl Into<Seed>) {
        self.rng.reseed(&seed.into());
    }

    /// Produces one random string matching the pattern.
    pub fn render(&mut self) -> String {
        Sampler::new(&self.tables, self.max_repeat, &mut self.rng).render(&self.ast)
    }

    /// Lazily yields exactly `n` random matching strings.
    pub fn stream(&mut self, n: usize) -> impl Iterator<Item = String> + '_ {
        (0..n).map(move |_| self.render())
    }

    /// Produces `n` random matching strings, duplicates allowed.
    #[must_use]
    pub fn render_list(&mut self, n: usize) -> Vec<String> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.render());
        }
        values
    }

    /// Produces `n` distinct random matching strings with the default
    /// iteration budget of [`DEFAULT_MAX_ITERATIONS`].
    ///
    /// # Errors
    ///
    /// See [`render_set_with`](StringGen::render_set_with).
    pub fn render_set(&mut self, n: usize) -> Result<HashSet<String>> {
        self.render_set_with(n, DEFAULT_MAX_ITERATIONS)
    }

    /// Produces `n` distinct random matching strings, drawing at most
    /// `max_iterations` samples.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when `max_iterations < n`, or when the pattern
    /// provably cannot emit `n` distinct strings (`n > count()`); this
    /// check runs before any sample is drawn. [`Error::MaxIterationsReached`]
    /// when the budget is exhausted first.
    pub fn render_set_with(
        &mut self,
        n: usize,
        max_iterations: usize,
    ) -> Result<HashSet<String>> {
        if max_iterations < n {
            return Err(Error::Value(format!(
                "max_iterations ({max_iterations}) must be >= n ({n})"
            )));
        }
        if let Count::Finite(available) = StringGen::count(self) {
            if n as u128 > available {
                return Err(Error::Value(format!(
                    "cannot generate {n} distinct strings: pattern can only produce {available}"
                )));
            }
        }

        let mut values = HashSet::with_capacity(n);
        let mut iterations = 0;
        while values.len() < n && iterations < max_iterations {
            values.insert(self.render());
            iterations += 1;
        }
        if values.len() < n {
            return Err(Error::MaxIterationsReached { max_iterations });
        }
        Ok(values)
    }

    /// The number of distinct strings the pattern can emit. Memoized after
    /// the first call.
    ///
    /// Backreferences and lookarounds count as 1, so the result is an
    /// upper bound usable for the impossible-set check in
    /// [`render_set`](StringGen::render_set).
    pub fn count(&self) -> Count {
        *self
            .cached_count
            .get_or_init(|| count_sequence(&self.ast, &self.tables, self.max_repeat))
    }

    /// Lazily enumerates every distinct string, with unbounded quantifiers
    /// capped at the captured `max_repeat`.
    pub fn enumerate(&self) -> impl Iterator<Item = String> + '_ {
        enumerate_strings(&self.ast, &self.tables, self.max_repeat)
    }

    /// Lazily enumerates every distinct string, with unbounded quantifiers
    /// capped at `limit`.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] when `limit` is zero.
    pub fn enumerate_with(&self, limit: u32) -> Result<impl Iterator<Item = String> + '_> {
        if limit == 0 {
            return Err(Error::Value("limit must be >= 1".into()));
        }
        Ok(enumerate_strings(&self.ast, &self.tables, limit))
    }

    /// Builds a new generator whose pattern is this pattern (minus any
    /// trailing `$`) followed by `other`'s pattern (minus any leading `^`).
    ///
    /// The result is reparsed with fresh defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Pattern`] when the combined source does not parse.
    pub fn concat(&self, other: &StringGen) -> Result<StringGen> {
        let combined = format!(
            "{}{}",
            self.pattern.trim_end_matches('$'),
            other.pattern.trim_start_matches('^'),
        );
        StringGen::new(combined)
    }
}

/// Iterating a generator yields random matching strings forever.
impl Iterator for StringGen {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.render())
    }
}

impl PartialEq for StringGen {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl PartialEq<str> for StringGen {
    fn eq(&self, other: &str) -> bool {
        self.pattern == other
    }
}

impl PartialEq<&str> for StringGen {
    fn eq(&self, other: &&str) -> bool {
        self.pattern == *other
    }
}

impl fmt::Display for StringGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl fmt::Debug for StringGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringGen({:?})", self.pattern)
    }
}

/// Builder for [`StringGen`] instances with per-instance options.
///
/// Options set here take precedence over the process config, which takes
/// precedence over the built-in defaults.
pub struct Builder {
    pattern: String,
    seed: Option<Seed>,
    max_repeat: Option<u32>,
    alphabet: Option<String>,
}

impl Builder {
    /// Seeds the random engine (integer, float, text or bytes).
    #[must_use]
    pub fn seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Caps unbounded quantifiers for this instance.
    #[must_use]
    pub fn max_repeat(mut self, cap: u32) -> Self {
        self.max_repeat = Some(cap);
        self
    }

    /// Replaces the letters behind `\w`, `\W`, `.` and negated classes.
    /// An empty string means unset.
    #[must_use]
    pub fn alphabet(mut self, letters: impl Into<String>) -> Self {
        self.alphabet = Some(letters.into());
        self
    }

    /// Parses the pattern and builds the generator, resolving each option
    /// as: builder value, else process config, else built-in default.
    ///
    /// # Errors
    ///
    /// [`Error::Value`] for a zero `max_repeat`; [`Error::Pattern`] for an
    /// unparseable pattern, a whitespace-only alphabet, or a class that
    /// resolves to no characters.
    pub fn build(self) -> Result<StringGen> {
        if self.max_repeat == Some(0) {
            return Err(Error::Value("max_repeat must be >= 1".into()));
        }

        let defaults = config::snapshot();
        let max_repeat = self.max_repeat.unwrap_or(defaults.max_repeat);
        let letters = self
            .alphabet
            .filter(|letters| !letters.is_empty())
            .or(defaults.alphabet);

        let tables = Alphabet::new(letters.as_deref())?;
        let ast = parse_pattern(&self.pattern)?;
        validate(&ast, &tables)?;

        Ok(StringGen {
            pattern: self.pattern,
            ast,
            tables,
            max_repeat,
            rng: RandomEngine::new(self.seed.as_ref()),
            cached_count: OnceCell::new(),
        })
    }
}
