//! Source of target words

use crate::core::Word;

/// Supplies targets and, optionally, the set of acceptable guesses
pub trait Dictionary {
    /// Draw the next target word
    fn pick_target(&mut self) -> Word;

    /// Whether `word` is an acceptable guess
    fn contains(&self, word: &Word) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn pick_target(&mut self) -> Word {
        (**self).pick_target()
    }

    fn contains(&self, word: &Word) -> bool {
        (**self).contains(word)
    }
}
