//! Caesar: encryption and known-word decryption over the lowercase ring.
//!
//! Owns the clue list used for recovery. Encryption never consults it, so
//! an engine with custom clues encrypts exactly like the default one.

use crate::clues::ClueSet;
use crate::error::{CipherError, Result};
use crate::recovery::{self, Recovery};
use crate::shift::shift;
use crate::validate::validate;

/// Caesar cipher engine with a configured clue list.
///
/// The engine holds no mutable state; a single instance can be shared
/// across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caesar {
    clues: ClueSet,
}

impl Caesar {
    /// Creates an engine using the default clues `this`, `the`, `that`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarclue::Caesar;
    ///
    /// let caesar = Caesar::new();
    /// assert_eq!(caesar.clues().len(), 3);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that tries `clues` in the given order.
    ///
    /// # Errors
    /// - [`CipherError::EmptyClueList`] if `clues` is empty.
    /// - [`CipherError::InvalidClue`] if a word is shorter than 2 letters,
    ///   longer than 80, or not all `a-z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarclue::Caesar;
    ///
    /// let caesar = Caesar::with_clues(["pen", "is"]).unwrap();
    /// let r = caesar.decrypt("xmv qa").unwrap();
    /// assert_eq!(r.plaintext, "pen is");
    /// ```
    ///
    /// ```
    /// use caesarclue::Caesar;
    ///
    /// assert!(Caesar::with_clues(["a"]).is_err());
    /// ```
    pub fn with_clues<I, S>(clues: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Caesar {
            clues: ClueSet::new(clues)?,
        })
    }

    /// The clue list this engine recovers with.
    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    /// Encrypts `plaintext` by rotating every letter `shift` positions.
    ///
    /// Any non-negative shift is accepted; shifts of 26 or more wrap.
    ///
    /// # Errors
    /// - [`CipherError::InvalidShift`] if `shift` is negative. Checked first.
    /// - [`CipherError::InvalidChar`] / [`CipherError::InvalidLength`] from
    ///   [`validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarclue::Caesar;
    ///
    /// let caesar = Caesar::new();
    /// assert_eq!(caesar.encrypt("this is a pen", 8).unwrap(), "bpqa qa i xmv");
    /// assert!(caesar.encrypt("z", -1).is_err());
    /// ```
    pub fn encrypt(&self, plaintext: &str, shift_amount: i64) -> Result<String> {
        if shift_amount < 0 {
            tracing::debug!(shift = shift_amount, "rejected negative shift");
            return Err(CipherError::InvalidShift(shift_amount));
        }
        validate(plaintext)?;
        Ok(shift(plaintext, shift_amount))
    }

    /// Decrypts `ciphertext` by locating one of the configured clues.
    ///
    /// # Errors
    /// - [`CipherError::InvalidChar`] / [`CipherError::InvalidLength`] from
    ///   [`validate`].
    /// - [`CipherError::NoClueFound`] if no clue pattern occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarclue::Caesar;
    ///
    /// let r = Caesar::new().decrypt("bpqa qa i xmv").unwrap();
    /// assert_eq!(r.plaintext, "this is a pen");
    /// assert_eq!(r.shift, 8);
    /// ```
    pub fn decrypt(&self, ciphertext: &str) -> Result<Recovery> {
        validate(ciphertext)?;
        recovery::recover(ciphertext, &self.clues)
    }
}
