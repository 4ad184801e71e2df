//! Stop-word set
//!
//! The default English list ships embedded in the binary. A replacement list
//! can be loaded from disk, one word per line.

use crate::error::{FeedStatsError, FsResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const ENGLISH: &str = include_str!("../../data/stopwords/english.txt");

/// An immutable set of lowercase words excluded from frequency analysis.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWordSet {
    /// The embedded English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH)
    }

    /// An empty set (nothing is filtered).
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Parse a word list. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FeedStatsError::Config(format!(
                "could not read stop-word list '{}': {}",
                path.display(),
                e
            ))
        })?;
        let set = Self::parse(&content);
        debug!("Loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Exact match; callers pass lowercase tokens.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
