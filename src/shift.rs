//! Uniform rotation of every letter in a message.

use crate::alphabet;

/// Rotates every letter of `input` by `amount` ring positions.
///
/// Positive amounts move towards `z` (encryption), negative amounts towards
/// `a` (decryption). Any magnitude is reduced onto the ring first, so `27`
/// and `1` are the same rotation. Characters outside the alphabet, including
/// the pass-through set, are copied unchanged.
///
/// The input is expected to have passed
/// [`validate`](crate::validate::validate); this function has no error path.
///
/// # Examples
///
/// ```
/// use caesarclue::shift::shift;
///
/// assert_eq!(shift("hoge", 3), "krjh");
/// assert_eq!(shift("krjh", -3), "hoge");
/// assert_eq!(shift("a b.", 27), "b c.");
/// ```
pub fn shift(input: &str, amount: i64) -> String {
    let k = alphabet::normalize(amount);
    input
        .chars()
        .map(|c| match alphabet::index_of(c) {
            Some(i) => alphabet::symbol_at(i + k),
            None => c,
        })
        .collect()
}
