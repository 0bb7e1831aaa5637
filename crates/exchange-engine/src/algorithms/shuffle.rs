//! Fisher-Yates shuffle.
//!
//! The only place in the system that consumes randomness. Given a uniform
//! random source, the walk from the last index down to 1, swapping each
//! position with a uniformly drawn index at or below it, yields every one of
//! the N! orderings with equal probability.

use rand::Rng;

/// Shuffles `items` in place, uniformly over all permutations.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
