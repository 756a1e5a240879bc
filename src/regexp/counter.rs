//! Exact cardinality: how many distinct strings an AST can emit.
//!
//! Backreferences and lookarounds count as 1, which makes the result an
//! upper bound on true distinctness, which is exactly what the impossible-set check
//! in `render_set` needs. Any intermediate value reaching 2^63 collapses to
//! [`Count::Infinite`].

use std::cmp::Ordering;
use std::fmt;

use super::ast::Ast;
use crate::alphabet::Alphabet;

const COLLAPSE_THRESHOLD: u128 = 1 << 63;

/// A non-negative extended integer: an exact count or `+∞`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Finite(u128),
    Infinite,
}

impl Count {
    /// Returns `true` unless the count collapsed to `+∞`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Count::Finite(_))
    }

    fn clamped(value: u128) -> Count {
        if value >= COLLAPSE_THRESHOLD {
            Count::Infinite
        } else {
            Count::Finite(value)
        }
    }

    fn mul(self, other: Count) -> Count {
        match (self, other) {
            // An impossible element voids the whole sequence
            (Count::Finite(0), _) | (_, Count::Finite(0)) => Count::Finite(0),
            (Count::Finite(a), Count::Finite(b)) => {
                a.checked_mul(b).map_or(Count::Infinite, Count::clamped)
            }
            _ => Count::Infinite,
        }
    }

    fn add(self, other: Count) -> Count {
        match (self, other) {
            (Count::Finite(a), Count::Finite(b)) => {
                a.checked_add(b).map_or(Count::Infinite, Count::clamped)
            }
            _ => Count::Infinite,
        }
    }
}

impl PartialOrd for Count {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Count {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Count::Finite(a), Count::Finite(b)) => a.cmp(b),
            (Count::Finite(_), Count::Infinite) => Ordering::Less,
            (Count::Infinite, Count::Finite(_)) => Ordering::Greater,
            (Count::Infinite, Count::Infinite) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Finite(n) => write!(f, "{n}"),
            Count::Infinite => f.write_str("inf"),
        }
    }
}

/// Counts the distinct strings a sequence can emit.
pub(crate) fn count_sequence(nodes: &[Ast], tables: &Alphabet, max_repeat: u32) -> Count {
    let mut total = Count::Finite(1);
    for node in nodes {
        total = total.mul(count_node(node, tables, max_repeat));
        if total == Count::Infinite {
            return total;
        }
    }
    total
}

fn count_node(node: &Ast, tables: &Alphabet, max_repeat: u32) -> Count {
    match node {
        Ast::Literal(_) | Ast::GroupRef(_) | Ast::Assert { .. } | Ast::Anchor(_) => {
            Count::Finite(1)
        }
        Ast::NotLiteral(c) => Count::Finite(
            tables.printable().iter().filter(|p| **p != *c).count() as u128,
        ),
        Ast::Any => Count::Finite(tables.any_chars().len() as u128),
        Ast::Range { lo, hi } => Count::Finite(range_len(*lo, *hi)),
        Ast::In { items, negated } => {
            Count::Finite(tables.class_set(items, *negated).len() as u128)
        }
        Ast::Category(category) => Count::Finite(tables.category(*category).len() as u128),
        Ast::Branch(alternatives) => {
            let mut total = Count::Finite(0);
            for alternative in alternatives {
                total = total.add(count_sequence(alternative, tables, max_repeat));
                if total == Count::Infinite {
                    return total;
                }
            }
            total
        }
        Ast::Group { inner, .. } => count_sequence(inner, tables, max_repeat),
        Ast::Repeat {
            min, max, inner, ..
        } => count_repeat(*min, *max, inner, tables, max_repeat),
    }
}

fn count_repeat(
    min: u32,
    max: Option<u32>,
    inner: &[Ast],
    tables: &Alphabet,
    max_repeat: u32,
) -> Count {
    let upper = match max {
        Some(bound) => bound,
        None => max_repeat.max(min),
    };

    let base = match count_sequence(inner, tables, max_repeat) {
        Count::Finite(0) => {
            return if min == 0 {
                Count::Finite(1)
            } else {
                Count::Finite(0)
            };
        }
        // Repetitions of a single string are indistinguishable
        Count::Finite(1) => return Count::Finite(1),
        Count::Infinite => {
            return if upper == 0 {
                Count::Finite(1)
            } else {
                Count::Infinite
            };
        }
        Count::Finite(base) => base,
    };

    // Σ_{k=min}^{upper} base^k, collapsing on the way up. With base >= 2 the
    // running power reaches the collapse threshold within 63 steps, so the
    // loop is bounded regardless of the quantifier bounds.
    let mut power = Count::Finite(1);
    for _ in 0..min {
        power = power.mul(Count::Finite(base));
        if power == Count::Infinite {
            return Count::Infinite;
        }
    }

    let mut total = Count::Finite(0);
    let mut k = min;
    loop {
        total = total.add(power);
        if total == Count::Infinite {
            return Count::Infinite;
        }
        if k == upper {
            break;
        }
        k += 1;
        power = power.mul(Count::Finite(base));
        if power == Count::Infinite {
            return Count::Infinite;
        }
    }
    total
}

/// Number of scalar values in an inclusive char range, accounting for the
/// surrogate gap.
fn range_len(lo: char, hi: char) -> u128 {
    let lo = lo as u32;
    let hi = hi as u32;
    let mut span = u128::from(hi - lo + 1);
    if lo < 0xD800 && hi > 0xDFFF {
        span -= 0x800;
    }
    span
}
