//! The sequence being sorted
//!
//! At rest the sequence is always a permutation of `1..=N`.  Algorithms only
//! ever receive it as a borrowed slice for the duration of one step.

use rand::seq::SliceRandom;
use rand::Rng;

/// A single bar height
pub type Value = u32;

/// Build the sorted permutation `1..=len`
pub fn identity(len: usize) -> Vec<Value> {
    (1..=len).map(|v| v as Value).collect()
}

/// Build a uniformly shuffled permutation of `1..=len`
pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Value> {
    let mut values = identity(len);
    values.shuffle(rng);
    values
}

/// Check ascending order
pub fn is_sorted(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `values` holds every number in `1..=len` exactly once
pub fn is_permutation(values: &[Value]) -> bool {
    let mut seen = vec![false; values.len()];
    for &v in values {
        let Some(slot) = (v as usize).checked_sub(1).and_then(|i| seen.get_mut(i)) else {
            return false;
        };
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

/// Count pairs `i < j` with `values[i] > values[j]`
///
/// This is exactly the number of swaps bubble sort performs, and the number of
/// shifts insertion sort performs.
pub fn inversions(values: &[Value]) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(i, a)| values[i + 1..].iter().filter(|b| a > b).count())
        .sum()
}
