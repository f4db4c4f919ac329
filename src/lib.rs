//! Caesar cipher over a lowercase alphabet with known-word shift recovery.
//!
//! Messages use the letters `a-z` plus `.`, space, `\r` and `\n`, up to 80
//! characters. Encryption rotates every letter by a fixed amount and leaves
//! the other characters alone. Decryption needs no key: it finds the shift
//! by locating a known clue word (`this`, `the`, `that` by default) through
//! its pattern of adjacent letter distances, which survives any rotation.
//!
//! # Architecture
//!
//! ```text
//! alphabet  (ring index, directed ring distance)
//!     ↓
//! delta     (adjacent-distance sequences, window search)   shift (rotation)
//!     ↓                                                      ↓
//! recovery  (clue matching → shift → plaintext) ─────────────┘
//!     ↓
//! Caesar    (validation + encrypt / decrypt with a clue list)
//! ```
//!
//! # Examples
//!
//! Encrypt, then recover the plaintext and shift from the ciphertext alone:
//!
//! ```
//! let cipher = caesarclue::encrypt("this is a pen", 8).unwrap();
//! assert_eq!(cipher, "bpqa qa i xmv");
//!
//! let recovered = caesarclue::decrypt(&cipher).unwrap();
//! assert_eq!(recovered.plaintext, "this is a pen");
//! assert_eq!(recovered.shift, 8);
//! ```
//!
//! Ciphertext without any clue word cannot be recovered:
//!
//! ```
//! use caesarclue::CipherError;
//!
//! assert_eq!(caesarclue::decrypt("krjh"), Err(CipherError::NoClueFound));
//! ```

#![deny(clippy::all)]

use std::sync::LazyLock;

pub mod alphabet;
pub mod clues;
pub mod delta;
pub mod error;
pub mod recovery;
pub mod shift;
pub mod validate;

mod caesar;

pub use caesar::Caesar;
pub use error::{CipherError, Result};
pub use recovery::Recovery;

static DEFAULT_ENGINE: LazyLock<Caesar> = LazyLock::new(Caesar::new);

/// Encrypts `plaintext` with a non-negative `shift`.
///
/// See [`Caesar::encrypt`].
pub fn encrypt(plaintext: &str, shift: i64) -> Result<String> {
    DEFAULT_ENGINE.encrypt(plaintext, shift)
}

/// Recovers plaintext and shift from `ciphertext` using the default clues.
///
/// See [`Caesar::decrypt`].
pub fn decrypt(ciphertext: &str) -> Result<Recovery> {
    DEFAULT_ENGINE.decrypt(ciphertext)
}
