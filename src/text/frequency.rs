use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Token counts in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for t in tokens {
            table.add(t.as_ref());
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(token.to_string(), self.entries.len());
            self.entries.push((token.to_string(), 1));
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent tokens, count descending.
    ///
    /// Equal counts keep first-occurrence order (the sort is stable over
    /// insertion order). Asking for more than [`len`](Self::len) returns every
    /// entry.
    pub fn top_n(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(w, c)| WordCount::new(w.clone(), *c))
            .collect()
    }
}

/// Count `tokens` and return the top `n`.
pub fn rank_top_n<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<WordCount> {
    FrequencyTable::from_tokens(tokens).top_n(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_occurrence_order() {
        let tokens = ["b", "a", "a", "b", "c"];
        let top = rank_top_n(&tokens, 3);
        assert_eq!(
            top,
            vec![
                WordCount::new("b", 2),
                WordCount::new("a", 2),
                WordCount::new("c", 1)
            ]
        );
    }

    #[test]
    fn clamps_to_distinct_count() {
        let tokens = ["x", "y", "x"];
        assert_eq!(rank_top_n(&tokens, 20).len(), 2);
        assert!(rank_top_n(&tokens, 0).is_empty());
        assert!(rank_top_n::<&str>(&[], 5).is_empty());
    }

    #[test]
    fn table_tracks_totals() {
        let table = FrequencyTable::from_tokens(["a", "b", "a"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.count("a"), 2);
        assert_eq!(table.count("zzz"), 0);
    }
}
