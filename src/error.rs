//! Error types for the caesarclue library.

use thiserror::Error;

/// Errors produced by the caesarclue library.
///
/// Every error is terminal for the call that produced it. Nothing is
/// retried or partially recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Input is longer than [`MAX_LEN`](crate::validate::MAX_LEN) characters.
    #[error("invalid length: {len} characters exceeds the limit of 80")]
    InvalidLength { len: usize },

    /// Input contains a character outside `a-z`, `.`, space, `\r`, `\n`.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },

    /// Encryption shift is negative.
    #[error("invalid shift value: {0}")]
    InvalidShift(i64),

    /// No clue word's delta pattern occurs in the ciphertext.
    #[error("no clue word found in ciphertext")]
    NoClueFound,

    /// A configured clue word cannot be used for recovery.
    #[error("invalid clue word: {0:?}")]
    InvalidClue(String),

    /// A custom clue list was given with no entries.
    #[error("clue list is empty")]
    EmptyClueList,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
