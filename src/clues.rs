//! Clue words: known plaintext fragments used to recover a shift.

use crate::alphabet;
use crate::delta::{delta_sequence, Delta};
use crate::error::{CipherError, Result};
use crate::validate::MAX_LEN;

/// Clue words tried when no custom list is configured, in order.
pub const DEFAULT_CLUES: [&str; 3] = ["this", "the", "that"];

/// A clue word together with its precomputed delta sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    word: String,
    first: char,
    deltas: Vec<Delta>,
}

impl Clue {
    /// Builds a clue from a lowercase word of 2 to 80 letters.
    ///
    /// A single letter has no deltas and would match anywhere, so it is
    /// rejected along with anything outside `a-z`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidClue`] if the word is unusable.
    pub fn new(word: &str) -> Result<Self> {
        let len = word.chars().count();
        let letters_only = word.chars().all(|c| alphabet::index_of(c).is_some());
        let first = match word.chars().next() {
            Some(c) if letters_only && (2..=MAX_LEN).contains(&len) => c,
            _ => return Err(CipherError::InvalidClue(word.to_string())),
        };
        Ok(Clue {
            word: word.to_string(),
            first,
            deltas: delta_sequence(word),
        })
    }

    /// The clue word itself.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The first letter of the clue word.
    pub fn first(&self) -> char {
        self.first
    }

    /// Delta sequence of the clue word.
    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }
}

/// Ordered, non-empty list of clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueSet {
    clues: Vec<Clue>,
}

impl Default for ClueSet {
    fn default() -> Self {
        let clues = DEFAULT_CLUES
            .iter()
            .filter_map(|w| Clue::new(w).ok())
            .collect();
        ClueSet { clues }
    }
}

impl ClueSet {
    /// Builds a clue set from `words`, keeping their order.
    ///
    /// # Errors
    /// - [`CipherError::EmptyClueList`] if `words` yields nothing.
    /// - [`CipherError::InvalidClue`] for the first unusable word.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarclue::clues::ClueSet;
    ///
    /// let set = ClueSet::new(["pen", "is"]).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(ClueSet::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clues = words
            .into_iter()
            .map(|w| Clue::new(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if clues.is_empty() {
            return Err(CipherError::EmptyClueList);
        }
        Ok(ClueSet { clues })
    }

    /// Number of clues in the set.
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Always `false`; a clue set is never empty.
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Iterates the clues in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, Clue> {
        self.clues.iter()
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a Clue;
    type IntoIter = std::slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
