//! Readability scoring over the raw, unfiltered corpus text.

pub mod consensus;
pub mod formulas;
pub mod stats;
pub mod syllables;

pub use self::stats::TextStats;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The headline metrics shown in reports and chart overlays.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
pub enum Metric {
    #[strum(serialize = "Flesch Kincaid Grade")]
    FleschKincaidGrade,
    #[strum(serialize = "Smog Index")]
    SmogIndex,
    #[strum(serialize = "Flesch Reading Ease")]
    FleschReadingEase,
    #[strum(serialize = "Text Standard")]
    TextStandard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityMetrics {
    pub smog_index: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub text_standard: String,
    pub stats: TextStats,
}

impl Default for ReadabilityMetrics {
    fn default() -> Self {
        Self {
            smog_index: 0.0,
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            text_standard: consensus::NOT_AVAILABLE.to_string(),
            stats: TextStats::default(),
        }
    }
}

impl ReadabilityMetrics {
    /// Formatted value for one of the headline metrics.
    pub fn display_value(&self, metric: Metric) -> String {
        match metric {
            Metric::FleschKincaidGrade => format!("{}", self.flesch_kincaid_grade),
            Metric::SmogIndex => format!("{}", self.smog_index),
            Metric::FleschReadingEase => format!("{}", self.flesch_reading_ease),
            Metric::TextStandard => self.text_standard.clone(),
        }
    }
}

/// Score `text`. Empty or degenerate input yields the neutral default.
pub fn score(text: &str) -> ReadabilityMetrics {
    let stats = TextStats::from_text(text);
    if stats.is_empty() {
        return ReadabilityMetrics {
            stats,
            ..Default::default()
        };
    }

    ReadabilityMetrics {
        smog_index: formulas::smog_index(&stats),
        flesch_reading_ease: formulas::flesch_reading_ease(&stats),
        flesch_kincaid_grade: formulas::flesch_kincaid_grade(&stats),
        text_standard: consensus::text_standard(text, &stats),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn whitespace_only_is_neutral() {
        let m = score("   \n\t ");
        assert_eq!(m, ReadabilityMetrics::default());
        assert_eq!(m.text_standard, "N/A");
    }

    #[test]
    fn simple_prose_scores_as_easy() {
        let m = score("The cat sat on the mat. The dog ran fast. We had fun.");
        assert!(m.flesch_reading_ease > 90.0, "{}", m.flesch_reading_ease);
        assert!(m.flesch_kincaid_grade < 3.0, "{}", m.flesch_kincaid_grade);
        assert!(m.text_standard.ends_with("grade"));
    }

    #[test]
    fn metric_labels_cover_all_four_scores() {
        let m = score("The cat sat.");
        let labels: Vec<String> = Metric::iter().map(|x| x.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Flesch Kincaid Grade",
                "Smog Index",
                "Flesch Reading Ease",
                "Text Standard"
            ]
        );
        assert_eq!(m.display_value(Metric::TextStandard), m.text_standard);
    }
}
