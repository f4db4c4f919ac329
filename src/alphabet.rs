//! Alphabet ring and directed ring distance.
//!
//! The 26 lowercase ASCII letters form a cyclic ring of positions `0..26`.
//! All shifting and differencing in the crate happens on this ring. A small
//! set of punctuation and whitespace characters is accepted in messages but
//! sits outside the ring and is never shifted.

/// The ordered alphabet. Position in this string is the ring index.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of positions on the ring.
pub const RING_SIZE: u8 = 26;

/// Accepted characters that are copied through every transform unchanged.
pub const PASS_THROUGH: [char; 4] = ['.', ' ', '\r', '\n'];

/// Returns the ring index of `c`, or `None` if `c` is not in the alphabet.
///
/// # Examples
///
/// ```
/// use caesarclue::alphabet::index_of;
///
/// assert_eq!(index_of('a'), Some(0));
/// assert_eq!(index_of('z'), Some(25));
/// assert_eq!(index_of(' '), None);
/// ```
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

/// Returns the alphabet symbol at `index`, reduced modulo the ring size.
pub fn symbol_at(index: u8) -> char {
    (b'a' + index % RING_SIZE) as char
}

/// Returns `true` for the characters in [`PASS_THROUGH`].
pub fn is_pass_through(c: char) -> bool {
    PASS_THROUGH.contains(&c)
}

/// Returns `true` for every character a message may contain.
pub fn is_accepted(c: char) -> bool {
    index_of(c).is_some() || is_pass_through(c)
}

/// Reduces any integer shift onto the ring, yielding a value in `[0, 26)`.
///
/// Negative shifts rotate the other way: `-1` is the same rotation as `25`.
pub fn normalize(amount: i64) -> u8 {
    amount.rem_euclid(RING_SIZE as i64) as u8
}

/// Directed ring distance `(index(left) - index(right)) mod 26`.
///
/// Not symmetric: `subtract(a, b) + subtract(b, a)` is 26 unless the two
/// characters are equal, in which case both are 0. Returns `None` if either
/// side is outside the alphabet.
///
/// # Examples
///
/// ```
/// use caesarclue::alphabet::subtract;
///
/// assert_eq!(subtract('t', 'h'), Some(12));
/// assert_eq!(subtract('h', 'i'), Some(25));
/// assert_eq!(subtract('.', 'a'), None);
/// ```
pub fn subtract(left: char, right: char) -> Option<u8> {
    let l = index_of(left)?;
    let r = index_of(right)?;
    Some((l + RING_SIZE - r) % RING_SIZE)
}
