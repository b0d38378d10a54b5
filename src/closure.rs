//! The fixed-point driver shared by `*` (Kleene star) and `+` (plus).
//!
//! Both operators repeatedly apply the inner transformer and OR the result
//! into an accumulator until nothing new appears. Because every bit lives
//! in a universe of size `text.len() + 1`, the least fixed point is always
//! reached within that many iterations; the `100`-iteration historical
//! guard is kept as a floor so short texts converge in at least as many
//! steps the original implementation allowed, never as a ceiling that
//! could cut off a longer text's legitimate convergence.

use crate::ast::Ast;
use crate::matchmask::MatchMaskTable;
use crate::Bitset;

const MIN_SAFETY_CAP: usize = 100;

/// `R = ⋃ f^k(M)` for `k = 0, 1, 2, ...`, i.e. zero or more applications.
pub fn star(inner: &Ast, input: &Bitset, text: &[u8], accel: Option<&MatchMaskTable>) -> Bitset {
    fixed_point(input.clone(), input.clone(), inner, text, accel)
}

/// `R = ⋃ f^k(M)` for `k = 1, 2, 3, ...`, i.e. one or more applications.
pub fn plus(inner: &Ast, input: &Bitset, text: &[u8], accel: Option<&MatchMaskTable>) -> Bitset {
    let first = inner.apply(input, text, accel);
    fixed_point(first.clone(), first, inner, text, accel)
}

fn fixed_point(
    mut accumulator: Bitset,
    mut current: Bitset,
    inner: &Ast,
    text: &[u8],
    accel: Option<&MatchMaskTable>,
) -> Bitset {
    let max_iterations = (text.len() + 1).max(MIN_SAFETY_CAP);
    for iteration in 0..max_iterations {
        let next = inner.apply(&current, text, accel);
        if next.is_empty() || next.is_subset_of(&accumulator) {
            log::trace!("closure converged after {} iteration(s)", iteration);
            break;
        }
        accumulator.or(&next);
        current = next;
    }
    accumulator
}
