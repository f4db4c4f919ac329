//! Pairwise-delta encoding.
//!
//! A message's delta sequence lists the directed ring distance between each
//! pair of adjacent characters. Shifting every letter by the same amount
//! leaves these distances untouched, so the delta sequence of a ciphertext
//! equals the delta sequence of its plaintext. Recovery relies on exactly
//! that.
//!
//! ```text
//! "this" -> [12, 25, 16]
//! "uijt" -> [12, 25, 16]
//! ```

use std::fmt;

use crate::alphabet;

/// One element of a delta sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    /// Ring distance from the right-hand letter back to the left-hand one.
    Step(u8),
    /// At least one side of the pair is a pass-through character.
    ///
    /// Pass-through characters are never shifted, so a gap carries no
    /// distance and never equals a [`Delta::Step`].
    Gap,
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Step(d) => write!(f, "{}", d),
            Delta::Gap => write!(f, "_"),
        }
    }
}

/// Computes the delta sequence of `input`.
///
/// For `n` characters the result has `n - 1` elements (none for an empty or
/// single-character string). Element `i` is
/// [`subtract(c[i], c[i + 1])`](alphabet::subtract), or [`Delta::Gap`] when
/// either character sits outside the alphabet.
///
/// # Examples
///
/// ```
/// use caesarclue::delta::{delta_sequence, Delta};
///
/// assert_eq!(
///     delta_sequence("the"),
///     vec![Delta::Step(12), Delta::Step(3)]
/// );
/// assert_eq!(delta_sequence("a b")[0], Delta::Gap);
/// ```
pub fn delta_sequence(input: &str) -> Vec<Delta> {
    input
        .chars()
        .zip(input.chars().skip(1))
        .map(|(left, right)| match alphabet::subtract(left, right) {
            Some(d) => Delta::Step(d),
            None => Delta::Gap,
        })
        .collect()
}

/// Returns the first index at which `needle` occurs as a contiguous window
/// of `haystack`.
///
/// An empty needle never matches. A needle longer than the haystack yields
/// `None` rather than an error.
pub fn find(haystack: &[Delta], needle: &[Delta]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
