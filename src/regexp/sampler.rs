//! Random emission: walks the AST once per call and appends one legal
//! match to the output buffer.
//!
//! Every choice point (class member, branch, repeat count) draws uniformly
//! from the engine; sampling is locally uniform per choice, not globally
//! uniform over the language of the pattern.

use rustc_hash::FxHashMap;

use super::ast::Ast;
use crate::alphabet::Alphabet;
use crate::rng::RandomEngine;

/// One-shot AST walker. The group table lives for a single emission; the
/// façade builds a fresh sampler per `render` call.
pub(crate) struct Sampler<'a> {
    tables: &'a Alphabet,
    max_repeat: u32,
    rng: &'a mut RandomEngine,
    groups: FxHashMap<u32, String>,
}

impl<'a> Sampler<'a> {
    pub fn new(tables: &'a Alphabet, max_repeat: u32, rng: &'a mut RandomEngine) -> Self {
        Self {
            tables,
            max_repeat,
            rng,
            groups: FxHashMap::default(),
        }
    }

    /// Emits one random matching string for the root sequence.
    pub fn render(mut self, ast: &[Ast]) -> String {
        let mut out = String::new();
        self.emit_sequence(ast, &mut out);
        out
    }

    fn emit_sequence(&mut self, nodes: &[Ast], out: &mut String) {
        for node in nodes {
            self.emit(node, out);
        }
    }

    fn emit(&mut self, node: &Ast, out: &mut String) {
        match node {
            Ast::Literal(c) => out.push(*c),
            Ast::NotLiteral(c) => {
                let candidates = self.tables.without(*c);
                out.push(*self.rng.pick(&candidates));
            }
            Ast::Any => out.push(*self.rng.pick(self.tables.any_chars())),
            Ast::Range { lo, hi } => out.push(self.pick_in_range(*lo, *hi)),
            Ast::In { items, negated } => {
                let candidates = self.tables.class_set(items, *negated);
                out.push(*self.rng.pick(&candidates));
            }
            Ast::Category(category) => {
                out.push(*self.rng.pick(self.tables.category(*category)));
            }
            Ast::Branch(alternatives) => {
                let choice = self.rng.below(alternatives.len());
                self.emit_sequence(&alternatives[choice], out);
            }
            Ast::Group { index, inner, .. } => {
                let start = out.len();
                self.emit_sequence(inner, out);
                if let Some(index) = index {
                    self.groups.insert(*index, out[start..].to_string());
                }
            }
            Ast::GroupRef(index) => {
                // A group that never ran contributes nothing
                if let Some(text) = self.groups.get(index) {
                    out.push_str(text);
                }
            }
            Ast::Repeat {
                min,
                max,
                lazy,
                inner,
            } => {
                let upper = match max {
                    Some(bound) => *bound,
                    None => self.max_repeat.max(*min),
                };
                // Lazy repeats take the shortest legal expansion
                let times = if *lazy {
                    *min
                } else {
                    self.rng.between(*min, upper)
                };
                for _ in 0..times {
                    self.emit_sequence(inner, out);
                }
            }
            Ast::Assert { .. } | Ast::Anchor(_) => {}
        }
    }

    fn pick_in_range(&mut self, lo: char, hi: char) -> char {
        // Ranges spanning the surrogate gap re-draw; every draw outside the
        // gap is a valid scalar value.
        loop {
            if let Some(c) = char::from_u32(self.rng.between(lo as u32, hi as u32)) {
                return c;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse_pattern;
    use super::*;
    use crate::rng::Seed;

    fn render_with_seed(pattern: &str, seed: u64) -> String {
        let ast = parse_pattern(pattern).unwrap();
        let tables = Alphabet::new(None).unwrap();
        let mut rng = RandomEngine::new(Some(&Seed::from(seed)));
        Sampler::new(&tables, 100, &mut rng).render(&ast)
    }

    #[test]
    fn test_literal_sequence() {
        assert_eq!(render_with_seed("abc", 1), "abc");
    }

    #[test]
    fn test_render_is_deterministic_for_seed() {
        assert_eq!(
            render_with_seed(r"\w{10}-\d{4}", 42),
            render_with_seed(r"\w{10}-\d{4}", 42)
        );
    }

    #[test]
    fn test_range_stays_in_bounds() {
        for seed in 0..30 {
            let out = render_with_seed("[a-f]", seed);
            let c = out.chars().next().unwrap();
            assert!(('a'..='f').contains(&c), "got {c:?}");
        }
    }

    #[test]
    fn test_branch_picks_an_alternative() {
        for seed in 0..30 {
            let out = render_with_seed("(yes|no)", seed);
            assert!(out == "yes" || out == "no", "got {out:?}");
        }
    }

    #[test]
    fn test_backreference_repeats_group_text() {
        for seed in 0..30 {
            let out = render_with_seed(r"(?P<x>[ab])-(?P=x)", seed);
            assert!(out == "a-a" || out == "b-b", "got {out:?}");
        }
    }

    #[test]
    fn test_numbered_backreference() {
        for seed in 0..30 {
            let out = render_with_seed(r"([01]{2})\1", seed);
            assert_eq!(out[..2], out[2..], "got {out:?}");
        }
    }

    #[test]
    fn test_bounded_repeat_length() {
        for seed in 0..30 {
            let len = render_with_seed("a{2,5}", seed).len();
            assert!((2..=5).contains(&len), "got {len}");
        }
    }

    #[test]
    fn test_lazy_repeat_takes_min() {
        for seed in 0..10 {
            assert_eq!(render_with_seed("a+?", seed), "a");
            assert_eq!(render_with_seed("a{2,8}?", seed), "aa");
        }
    }

    #[test]
    fn test_anchors_and_lookahead_emit_nothing() {
        assert_eq!(render_with_seed(r"^ab\b(?=xyz)c$", 3), "abc");
        assert_eq!(render_with_seed(r"(?!zzz)ok", 3), "ok");
    }

    #[test]
    fn test_any_avoids_newline() {
        for seed in 0..50 {
            let out = render_with_seed(".", seed);
            assert_ne!(out, "\n");
        }
    }

    #[test]
    fn test_negated_literal_avoids_payload() {
        for seed in 0..50 {
            let out = render_with_seed("[^x]", seed);
            assert_ne!(out, "x");
        }
    }
}
