//! Lazy enumeration of every distinct string an AST can emit.
//!
//! Order is depth-first left-to-right: concatenation is a Cartesian product
//! with the left child as the outer (slowest) loop, classes enumerate in
//! code-point order, branches left to right, repeats from `min` upward.
//! Group bindings thread through each partial product so a backreference
//! sees the value its group holds for the current assignment. Duplicate
//! derivations (e.g. `(a|a)`) are yielded as-is.

use rustc_hash::FxHashMap;

use super::ast::Ast;
use crate::alphabet::Alphabet;

/// Group-number to emitted-text bindings for one partial assignment.
type Bindings = FxHashMap<u32, String>;

/// A lazily produced stream of (string, bindings) pairs.
type Pairs<'a> = Box<dyn Iterator<Item = (String, Bindings)> + 'a>;

/// Shared read-only state for one enumeration.
#[derive(Clone, Copy)]
struct Env<'a> {
    tables: &'a Alphabet,
    limit: u32,
}

/// Enumerates every string the root sequence can emit, capping unbounded
/// repeats at `limit`.
pub(crate) fn strings<'a>(
    ast: &'a [Ast],
    tables: &'a Alphabet,
    limit: u32,
) -> impl Iterator<Item = String> + 'a {
    sequence(ast, Env { tables, limit }, Bindings::default()).map(|(value, _)| value)
}

fn join(prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(suffix);
    out
}

/// Cross-product of a node's values with the values of the rest of the
/// sequence; the head varies slowest.
fn sequence<'a>(nodes: &'a [Ast], env: Env<'a>, bindings: Bindings) -> Pairs<'a> {
    let Some((first, rest)) = nodes.split_first() else {
        return Box::new(std::iter::once((String::new(), bindings)));
    };
    Box::new(node(first, env, bindings).flat_map(move |(prefix, bound)| {
        sequence(rest, env, bound)
            .map(move |(suffix, bound)| (join(&prefix, &suffix), bound))
    }))
}

fn node<'a>(node: &'a Ast, env: Env<'a>, bindings: Bindings) -> Pairs<'a> {
    match node {
        Ast::Literal(c) => {
            let c = *c;
            Box::new(std::iter::once((c.to_string(), bindings)))
        }
        Ast::NotLiteral(c) => {
            let c = *c;
            Box::new(
                env.tables
                    .printable()
                    .iter()
                    .copied()
                    .filter(move |candidate| *candidate != c)
                    .map(move |candidate| (candidate.to_string(), bindings.clone())),
            )
        }
        Ast::Any => Box::new(
            env.tables
                .any_chars()
                .iter()
                .map(move |c| (c.to_string(), bindings.clone())),
        ),
        Ast::Range { lo, hi } => Box::new(
            (*lo as u32..=*hi as u32)
                .filter_map(char::from_u32)
                .map(move |c| (c.to_string(), bindings.clone())),
        ),
        Ast::In { items, negated } => Box::new(
            env.tables
                .class_set(items, *negated)
                .into_iter()
                .map(move |c| (c.to_string(), bindings.clone())),
        ),
        Ast::Category(category) => Box::new(
            env.tables
                .category(*category)
                .iter()
                .map(move |c| (c.to_string(), bindings.clone())),
        ),
        Ast::Branch(alternatives) => Box::new(
            alternatives
                .iter()
                .flat_map(move |alternative| sequence(alternative, env, bindings.clone())),
        ),
        Ast::Group { index, inner, .. } => {
            let index = *index;
            Box::new(sequence(inner, env, bindings).map(move |(value, mut bound)| {
                if let Some(index) = index {
                    bound.insert(index, value.clone());
                }
                (value, bound)
            }))
        }
        Ast::GroupRef(index) => {
            let value = bindings.get(index).cloned().unwrap_or_default();
            Box::new(std::iter::once((value, bindings)))
        }
        Ast::Repeat {
            min, max, inner, ..
        } => {
            let min = *min;
            let upper = match max {
                Some(bound) => *bound,
                None => env.limit.max(min),
            };
            Box::new(
                (min..=upper).flat_map(move |k| repeat_n(inner, k, env, bindings.clone())),
            )
        }
        Ast::Assert { .. } | Ast::Anchor(_) => {
            Box::new(std::iter::once((String::new(), bindings)))
        }
    }
}

/// All k-tuples of the sequence's values in lexicographic order; the first
/// copy is the outer loop.
fn repeat_n<'a>(nodes: &'a [Ast], k: u32, env: Env<'a>, bindings: Bindings) -> Pairs<'a> {
    if k == 0 {
        return Box::new(std::iter::once((String::new(), bindings)));
    }
    Box::new(sequence(nodes, env, bindings).flat_map(move |(prefix, bound)| {
        repeat_n(nodes, k - 1, env, bound)
            .map(move |(suffix, bound)| (join(&prefix, &suffix), bound))
    }))
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse_pattern;
    use super::*;

    fn enumerate_all(pattern: &str, limit: u32) -> Vec<String> {
        let ast = parse_pattern(pattern).unwrap();
        let tables = Alphabet::new(None).unwrap();
        strings(&ast, &tables, limit).collect()
    }

    #[test]
    fn test_single_literal() {
        assert_eq!(enumerate_all("ab", 100), vec!["ab"]);
    }

    #[test]
    fn test_class_in_code_point_order() {
        assert_eq!(enumerate_all("[ba]", 100), vec!["a", "b"]);
    }

    #[test]
    fn test_pair_product_left_outer() {
        assert_eq!(
            enumerate_all("[ab][cd]", 100),
            vec!["ac", "ad", "bc", "bd"]
        );
    }

    #[test]
    fn test_repeat_tuples_in_order() {
        assert_eq!(
            enumerate_all("[ab]{2}", 100),
            vec!["aa", "ab", "ba", "bb"]
        );
    }

    #[test]
    fn test_branch_left_to_right() {
        assert_eq!(enumerate_all("(yes|no)", 100), vec!["yes", "no"]);
    }

    #[test]
    fn test_repeat_counts_ascend() {
        assert_eq!(enumerate_all("a{0,2}", 100), vec!["", "a", "aa"]);
    }

    #[test]
    fn test_unbounded_repeat_respects_limit() {
        assert_eq!(enumerate_all("a+", 3), vec!["a", "aa", "aaa"]);
        assert_eq!(enumerate_all("[ab]*", 1).len(), 3); // "", "a", "b"
    }

    #[test]
    fn test_backreference_follows_binding() {
        assert_eq!(
            enumerate_all(r"(?P<x>[ab])-(?P=x)", 100),
            vec!["a-a", "b-b"]
        );
    }

    #[test]
    fn test_duplicates_are_not_rechecked() {
        assert_eq!(enumerate_all("(a|a)", 100), vec!["a", "a"]);
    }

    #[test]
    fn test_anchors_and_lookahead_yield_empty() {
        assert_eq!(enumerate_all(r"^a$(?=b)\b", 100), vec!["a"]);
    }

    #[test]
    fn test_finite_pattern_yields_count_strings() {
        let values = enumerate_all("[01]{3}", 100);
        assert_eq!(values.len(), 8);
        assert_eq!(values[0], "000");
        assert_eq!(values[7], "111");
    }

    #[test]
    fn test_laziness_first_item_cheap() {
        let ast = parse_pattern("[ab]{8}").unwrap();
        let tables = Alphabet::new(None).unwrap();
        let first = strings(&ast, &tables, 100).next();
        assert_eq!(first.as_deref(), Some("aaaaaaaa"));
    }
}
