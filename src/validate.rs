//! Input validation shared by every public operation.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Maximum accepted message length, in characters.
pub const MAX_LEN: usize = 80;

/// Checks that `input` only uses the accepted character set and fits in
/// [`MAX_LEN`] characters.
///
/// The character set is checked first and short-circuits, so an input that
/// is both too long and contains a bad character reports
/// [`CipherError::InvalidChar`]. The empty string is valid.
///
/// # Errors
/// - [`CipherError::InvalidChar`] for the first character outside
///   `a-z . \r \n` and space.
/// - [`CipherError::InvalidLength`] if the input exceeds [`MAX_LEN`].
///
/// # Examples
///
/// ```
/// use caesarclue::validate::validate;
///
/// assert!(validate("this is a pen.\r\n").is_ok());
/// assert!(validate("ABC").is_err());
/// ```
pub fn validate(input: &str) -> Result<()> {
    if let Some((position, ch)) = input
        .chars()
        .enumerate()
        .find(|&(_, c)| !alphabet::is_accepted(c))
    {
        tracing::debug!(?ch, position, "rejected input character");
        return Err(CipherError::InvalidChar { ch, position });
    }

    // Every accepted character is single-byte ASCII.
    let len = input.len();
    if len > MAX_LEN {
        tracing::debug!(len, "rejected input length");
        return Err(CipherError::InvalidLength { len });
    }
    Ok(())
}
