//! Word lists for target selection
//!
//! Provides the embedded answer list and [`WordList`], the dictionary the
//! controller draws targets from.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::GameError;
use crate::game::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A non-empty list of candidate targets with its own RNG
///
/// The same seed always yields the same sequence of targets.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    known: FxHashSet<Word>,
    rng: StdRng,
}

impl WordList {
    /// The embedded answer list
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if the embedded list has no valid
    /// words.
    pub fn embedded(seed: Option<u64>) -> Result<Self, GameError> {
        Self::build(loader::words_from_slice(ANSWERS), "<embedded>", seed)
    }

    /// A list built from arbitrary strings; invalid entries are dropped
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if no entry is a valid word.
    pub fn from_words<I, S>(words: I, seed: Option<u64>) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .collect();
        Self::build(words, "<inline>", seed)
    }

    /// A list loaded from a file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the file cannot be read and
    /// `GameError::EmptyWordList` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)?;
        Self::build(words, &path.display().to_string(), seed)
    }

    fn build(words: Vec<Word>, source: &str, seed: Option<u64>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList(source.to_string()));
        }
        let known = words.iter().cloned().collect();
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self { words, known, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Dictionary for WordList {
    fn pick_target(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }
}
