//! Tokenization, stop-word filtering and frequency ranking.

pub mod frequency;
pub mod stopwords;
pub mod tokenizer;

pub use self::frequency::{rank_top_n, FrequencyTable, WordCount};
pub use self::stopwords::StopWordSet;
pub use self::tokenizer::{tokenize, tokenize_filtered};
