//! Known-word shift recovery.
//!
//! Recovers the rotation applied to a ciphertext without trying every
//! shift. A uniform rotation leaves the delta sequence unchanged, so a clue
//! word that occurs in the plaintext leaves its own delta pattern somewhere
//! in the ciphertext's delta sequence. Once that window is found, the
//! distance between the ciphertext letter at the window start and the
//! clue's first letter is the shift.
//!
//! # Match policy
//!
//! Every clue is searched. The match starting earliest in the ciphertext
//! wins, and ties at the same position go to the clue listed first. A delta
//! that touches a pass-through character is a
//! [`Delta::Gap`](crate::delta::Delta::Gap), so no clue window can span a
//! space or punctuation.

use crate::alphabet;
use crate::clues::{Clue, ClueSet};
use crate::delta;
use crate::error::{CipherError, Result};
use crate::shift::shift;

/// Outcome of a successful recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The ciphertext rotated back by `shift`.
    pub plaintext: String,
    /// Rotation that produced the ciphertext, in `[0, 26)`.
    pub shift: u8,
    /// The clue word whose pattern was found.
    pub clue: String,
    /// Character index in the ciphertext where the clue starts.
    pub position: usize,
}

/// Recovers the shift and plaintext of `ciphertext` using `clues`.
///
/// The ciphertext is expected to be validated already. Text too short for a
/// clue simply never matches it, and empty ciphertext never matches at all.
///
/// # Errors
/// Returns [`CipherError::NoClueFound`] if no clue pattern occurs.
///
/// # Examples
///
/// ```
/// use caesarclue::clues::ClueSet;
/// use caesarclue::recovery::recover;
///
/// let r = recover("bpqa qa i xmv", &ClueSet::default()).unwrap();
/// assert_eq!(r.plaintext, "this is a pen");
/// assert_eq!(r.shift, 8);
/// assert_eq!(r.clue, "this");
/// ```
pub fn recover(ciphertext: &str, clues: &ClueSet) -> Result<Recovery> {
    let subin = delta::delta_sequence(ciphertext);

    let mut best: Option<(usize, &Clue)> = None;
    for clue in clues {
        let Some(position) = delta::find(&subin, clue.deltas()) else {
            continue;
        };
        tracing::trace!(clue = clue.word(), position, "clue pattern hit");
        // Strict comparison keeps the earlier clue on a tie.
        if best.is_none_or(|(p, _)| position < p) {
            best = Some((position, clue));
        }
    }

    let Some((position, clue)) = best else {
        tracing::debug!(len = ciphertext.len(), "no clue pattern in ciphertext");
        return Err(CipherError::NoClueFound);
    };

    // The window starts with a Step, so the character there is a letter.
    let shift_amount = ciphertext
        .chars()
        .nth(position)
        .and_then(|c| alphabet::subtract(c, clue.first()))
        .ok_or(CipherError::NoClueFound)?;

    tracing::debug!(
        clue = clue.word(),
        position,
        shift = shift_amount,
        "recovered shift"
    );

    Ok(Recovery {
        plaintext: shift(ciphertext, -i64::from(shift_amount)),
        shift: shift_amount,
        clue: clue.word().to_string(),
        position,
    })
}
