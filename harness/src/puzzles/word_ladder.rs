//! `WordLadder`: step from one word to another through dictionary words,
//! changing one letter at a time.
//!
//! The dictionary is shared behind an `Arc` so successor states clone a
//! pointer, not the word list. Words are lowercase ASCII; substitutions
//! draw from `a..=z` at each position, in position-then-letter order.

use std::collections::BTreeSet;
use std::sync::Arc;

use quarry_solver::contract::{IllegalMove, Puzzle};
use quarry_solver::fingerprint::{digest, Fingerprint};

const DOMAIN_WORD_LADDER: &[u8] = b"QUARRY::WORD_LADDER::V1\0";

/// Replace the letter at `index` with `letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Byte position in the word.
    pub index: usize,
    /// Replacement letter, lowercase ASCII.
    pub letter: char,
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pos{}={}", self.index, self.letter)
    }
}

/// A ladder position: the current word working toward the target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLadder {
    word: String,
    target: String,
    words: Arc<BTreeSet<String>>,
}

impl WordLadder {
    /// Start a ladder from `word` toward `target` over the given
    /// dictionary.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        target: impl Into<String>,
        words: Arc<BTreeSet<String>>,
    ) -> Self {
        Self {
            word: word.into(),
            target: target.into(),
            words,
        }
    }

    /// The current word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    fn substituted(&self, mv: &Substitution) -> Option<String> {
        if mv.index >= self.word.len() || !mv.letter.is_ascii_lowercase() {
            return None;
        }
        let mut bytes = self.word.clone().into_bytes();
        bytes[mv.index] = mv.letter as u8;
        String::from_utf8(bytes).ok()
    }
}

impl Puzzle for WordLadder {
    type Move = Substitution;

    fn is_goal(&self) -> bool {
        self.word == self.target
    }

    fn legal_moves(&self) -> Vec<Substitution> {
        let mut moves = Vec::new();
        for (index, present) in self.word.bytes().enumerate() {
            for letter in b'a'..=b'z' {
                if letter == present {
                    continue;
                }
                let mv = Substitution {
                    index,
                    letter: char::from(letter),
                };
                if let Some(candidate) = self.substituted(&mv) {
                    if self.words.contains(&candidate) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    fn apply(&self, mv: &Substitution) -> Result<Self, IllegalMove> {
        let Some(candidate) = self.substituted(mv) else {
            return Err(IllegalMove::new(format!(
                "substitution {mv} is out of range for \"{}\"",
                self.word
            )));
        };
        if candidate == self.word {
            return Err(IllegalMove::new(format!(
                "substitution {mv} leaves \"{}\" unchanged",
                self.word
            )));
        }
        if !self.words.contains(&candidate) {
            return Err(IllegalMove::new(format!(
                "\"{candidate}\" is not a dictionary word"
            )));
        }
        Ok(Self {
            word: candidate,
            target: self.target.clone(),
            words: Arc::clone(&self.words),
        })
    }

    fn fingerprint(&self) -> Fingerprint {
        let mut bytes = Vec::with_capacity(self.word.len() + self.target.len() + 1);
        bytes.extend_from_slice(self.word.as_bytes());
        bytes.push(0);
        bytes.extend_from_slice(self.target.as_bytes());
        digest(DOMAIN_WORD_LADDER, &bytes)
    }

    fn is_dead_end(&self) -> bool {
        // Substitutions never change length, so a length mismatch can
        // never be repaired.
        self.word.len() != self.target.len()
    }
}
