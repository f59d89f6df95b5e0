//! Ordered crossover for route permutations.
//!
//! Operates on `&[usize]` index orderings, so it is independent of point
//! coordinates.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

const EMPTY: usize = usize::MAX;

/// Order crossover producing a single child.
///
/// Picks two random cut points, then delegates to
/// [`ordered_crossover_with_segment`].
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn ordered_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n == 0 {
        return Vec::new();
    }

    let (start, end) = random_segment(n, rng);
    ordered_crossover_with_segment(parent1, parent2, start, end)
}

/// Order crossover with explicit cut points.
///
/// 1. Copy `parent1[start..=end]` into the child at the same positions
/// 2. Walk `parent2` in order; every city not yet placed goes into the
///    next empty slot, scanning left to right
///
/// The child is a fixed-length array filled through a seen-set and a
/// cursor, so it is a valid permutation for any `start <= end < n`.
///
/// # Panics
/// Panics if the parents have different lengths, if `start > end`, or if
/// `end` is out of bounds.
pub fn ordered_crossover_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "invalid segment [{start}, {end}] for length {n}");

    let mut child = vec![EMPTY; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut cursor = 0;
    for &city in parent2 {
        if placed[city] {
            continue;
        }
        while child[cursor] != EMPTY {
            cursor += 1;
        }
        child[cursor] = city;
        placed[city] = true;
    }

    child
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
