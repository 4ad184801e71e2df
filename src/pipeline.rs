use crate::config::Config;
use crate::corpus::{filter_posts, CorpusStore, PostSource};
use crate::error::FsResult;
use crate::readability::{self, ReadabilityMetrics};
use crate::text::{tokenize_filtered, FrequencyTable, StopWordSet, WordCount};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// What one run hands to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub subject_label: String,
    pub top_n: usize,
    pub ranking: Vec<WordCount>,
    pub metrics: ReadabilityMetrics,
}

impl AnalysisReport {
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> FsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Ranking as `word,count` rows with a header.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> FsResult<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["word", "count"])?;
        for wc in &self.ranking {
            wtr.write_record(&[wc.word.clone(), wc.count.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Rank words and score readability over an already-filtered corpus text.
pub fn analyze(
    text: &str,
    top_n: usize,
    subject_label: &str,
    stop_words: &StopWordSet,
) -> AnalysisReport {
    let tokens = tokenize_filtered(text, stop_words);
    let table = FrequencyTable::from_tokens(&tokens);
    let ranking = table.top_n(top_n);

    if ranking.len() < top_n {
        warn!(
            "Only {} distinct words survived filtering (asked for {})",
            ranking.len(),
            top_n
        );
    }

    let metrics = readability::score(text);
    info!(
        "📊 @{}: {} tokens, {} distinct, standard: {}",
        subject_label,
        table.total(),
        table.len(),
        metrics.text_standard
    );

    AnalysisReport {
        subject_label: subject_label.to_string(),
        top_n,
        ranking,
        metrics,
    }
}

/// Resolve the stop-word list named by the config, else the embedded default.
pub fn load_stop_words(config: &Config) -> FsResult<StopWordSet> {
    match &config.analysis.stopwords {
        Some(path) => StopWordSet::load_from_file(path),
        None => Ok(StopWordSet::default()),
    }
}

/// Fetch, filter and persist a subject's posts. Returns how many were kept.
pub fn collect<S: PostSource + ?Sized>(
    source: &S,
    store: &CorpusStore,
    config: &Config,
) -> FsResult<usize> {
    let subject = &config.subject.subject;
    let posts = source.fetch(subject, &config.subject.credentials())?;

    let kept = filter_posts(&posts, &config.analysis.forbidden_set());
    if kept.is_empty() {
        warn!("⚠️  No posts for @{} passed the character filter", subject);
    } else {
        info!("🧹 Kept {} of {} posts", kept.len(), posts.len());
    }

    store.persist(subject, &kept)?;
    Ok(kept.len())
}

/// The whole batch job: fetch, filter, persist, read back, analyze.
pub fn run<S: PostSource + ?Sized>(
    source: &S,
    store: &CorpusStore,
    config: &Config,
    stop_words: &StopWordSet,
) -> FsResult<AnalysisReport> {
    config.validate()?;
    collect(source, store, config)?;

    let subject = &config.subject.subject;
    let text = store.load(subject)?;
    Ok(analyze(
        &text,
        config.analysis.top_n_words,
        subject,
        stop_words,
    ))
}
