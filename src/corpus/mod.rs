//! Post retrieval, filtering and persistence.

pub mod filter;
pub mod source;
pub mod store;

pub use self::filter::{filter_posts, SENTENCE_TERMINATOR};
pub use self::source::{ArchiveSource, PostSource};
pub use self::store::CorpusStore;
