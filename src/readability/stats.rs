use super::syllables::count_syllables;
use serde::{Deserialize, Serialize};

/// Raw counts every readability formula is built from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    /// Words with three or more syllables.
    pub polysyllables: usize,
    /// Alphanumeric characters inside words.
    pub letters: usize,
}

const SENTENCE_END: &[char] = &['.', '!', '?'];

/// Whitespace-separated chunks that still hold an alphanumeric character.
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let mut stats = TextStats::default();

        for w in words(text) {
            let syl = count_syllables(w);
            stats.words += 1;
            stats.syllables += syl;
            stats.letters += w.chars().filter(|c| c.is_alphanumeric()).count();
            if syl >= 3 {
                stats.polysyllables += 1;
            }
        }

        stats.sentences = text
            .split(SENTENCE_END)
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .count();

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0 || self.sentences == 0
    }

    pub fn words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.words as f64 / self.sentences as f64
    }

    pub fn syllables_per_word(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        self.syllables as f64 / self.words as f64
    }

    pub fn letters_per_word(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        self.letters as f64 / self.words as f64
    }
}
