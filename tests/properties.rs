//! Property tests for the quantified invariants: accelerator equivalence,
//! position domain, monotonicity, concatenation associativity, alternation
//! commutativity, star idempotence, plus decomposition, question
//! decomposition, and duplicate-freedom/ordering.
//!
//! These run a fixed battery of representative patterns against randomly
//! generated short texts over a small alphabet, rather than generating
//! arbitrary regex patterns — the invariants are about the transformer
//! algebra, not about parser coverage, so a handful of patterns that
//! exercise every node kind is enough.

use flowregex::{Bitset, MatchMaskTable, Matcher};
use proptest::prelude::*;

fn small_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ab]{0,12}").unwrap()
}

fn seed(n: usize) -> Bitset {
    let mut b = Bitset::new(n + 1);
    for pos in 0..=n {
        b.set(pos);
    }
    b
}

proptest! {
    #[test]
    fn accelerator_equivalence(text in small_text()) {
        let matcher = Matcher::compile("a(b|a)*b").unwrap();
        let general = matcher.find_ends(text.as_bytes()).unwrap();
        let table = MatchMaskTable::build(text.as_bytes(), b"ab");
        let accelerated = matcher.find_ends_accelerated(text.as_bytes(), Some(&table)).unwrap();
        prop_assert_eq!(general, accelerated);
    }

    #[test]
    fn positions_stay_within_the_text_domain(text in small_text()) {
        let matcher = Matcher::compile("a+b?").unwrap();
        let ends = matcher.find_ends(text.as_bytes()).unwrap();
        for p in ends {
            prop_assert!(p <= text.len());
        }
    }

    #[test]
    fn results_are_strictly_ascending_and_duplicate_free(text in small_text()) {
        let matcher = Matcher::compile("(a|b)*a").unwrap();
        let ends = matcher.find_ends(text.as_bytes()).unwrap();
        let mut sorted = ends.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(ends, sorted);
    }

    #[test]
    fn alternation_is_commutative(text in small_text()) {
        let lhs = Matcher::compile("a|b").unwrap().find_ends(text.as_bytes()).unwrap();
        let rhs = Matcher::compile("b|a").unwrap().find_ends(text.as_bytes()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn concatenation_is_associative(text in small_text()) {
        let lhs = Matcher::compile("(ab)b").unwrap().find_ends(text.as_bytes()).unwrap();
        let rhs = Matcher::compile("a(bb)").unwrap().find_ends(text.as_bytes()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn star_is_idempotent(text in small_text()) {
        let lhs = Matcher::compile("(a*)*").unwrap().find_ends(text.as_bytes()).unwrap();
        let rhs = Matcher::compile("a*").unwrap().find_ends(text.as_bytes()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn plus_decomposes_into_one_then_star(text in small_text()) {
        let lhs = Matcher::compile("a+").unwrap().find_ends(text.as_bytes()).unwrap();
        let rhs = Matcher::compile("aa*").unwrap().find_ends(text.as_bytes()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn question_decomposes_into_literal_or_every_position(text in small_text()) {
        let question = Matcher::compile("a?").unwrap().find_ends(text.as_bytes()).unwrap();
        let mut expected = Matcher::compile("a").unwrap().find_ends(text.as_bytes()).unwrap();
        expected.extend(0..=text.len());
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(question, expected);
    }

    #[test]
    fn monotone_input_growth_cannot_shrink_the_output(text in small_text()) {
        let n = text.len();
        let full = seed(n);
        let mut shrunk = full.clone();
        if n > 0 {
            shrunk.clear(0);
        }
        let node = Matcher::compile("b*a").unwrap();
        let out_shrunk = node.ast().apply(&shrunk, text.as_bytes(), None);
        let out_full = node.ast().apply(&full, text.as_bytes(), None);
        prop_assert!(out_shrunk.is_subset_of(&out_full));
    }
}
