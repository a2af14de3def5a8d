//! Key sequences that produce a known tree shape when inserted in order.
//!
//! - [`ascending`] builds a degenerate chain (height `n`).
//! - [`median_first`] builds a full tree (height `ceil(log2(n + 1))`).
//! - [`shuffled`] builds a random tree with expected height `O(lg n)`.

use rand::seq::SliceRandom;
use rand::Rng;

/// The keys `1..=n` in increasing order.
pub fn ascending(n: usize) -> Vec<u32> {
    (1..=n as u32).collect()
}

/// A random permutation of the keys `1..=n`.
pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    let mut keys = ascending(n);
    keys.shuffle(rng);
    keys
}

/// The keys `1..=n` ordered so that, without any self-balancing, the resultant tree is as short
/// as possible: the median first, then each half recursively.
///
/// # Examples
///
/// ```
/// use ordered_tree::sequence::median_first;
///
/// assert_eq!(median_first(7), vec![4, 2, 1, 3, 6, 5, 7]);
/// ```
pub fn median_first(n: usize) -> Vec<u32> {
    let sorted = ascending(n);
    let mut out = Vec::with_capacity(n);
    push_medians(&sorted, &mut out);
    out
}

/// Recursive helper for [`median_first`].
fn push_medians(xs: &[u32], out: &mut Vec<u32>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        out.push(xs[mid]);
        push_medians(&xs[..mid], out);
        push_medians(&xs[mid + 1..], out);
    }
}
