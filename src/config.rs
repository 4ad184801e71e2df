use crate::error::{FeedStatsError, FsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters that mark a post as noise (mentions, links, hashtags, numbers).
pub const DEFAULT_FORBIDDEN_CHARS: &str = "@:#^&;/~`\\|1234567890";

pub const DEFAULT_TOP_N_WORDS: usize = 20;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub subject: SubjectParams,
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectParams {
    /// Handle of the account whose posts are analyzed
    #[arg(short = 'u', long, default_value = "BarackObama")]
    pub subject: String,

    // === API Credentials ===
    #[arg(long, default_value = "")]
    pub consumer_key: String,
    #[arg(long, default_value = "")]
    pub consumer_secret: String,
    #[arg(long, default_value = "")]
    pub access_token: String,
    #[arg(long, default_value = "")]
    pub access_token_secret: String,
}

impl Default for SubjectParams {
    fn default() -> Self {
        Self {
            subject: "BarackObama".to_string(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            access_token_secret: String::new(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N_WORDS)]
    pub top_n_words: usize,

    /// Posts containing any of these characters are dropped
    #[arg(long, default_value = DEFAULT_FORBIDDEN_CHARS)]
    pub forbidden_chars: String,

    /// Optional replacement stop-word list (one word per line)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            top_n_words: DEFAULT_TOP_N_WORDS,
            forbidden_chars: DEFAULT_FORBIDDEN_CHARS.to_string(),
            stopwords: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    #[arg(long, default_value = "data/archive")]
    pub archive_dir: PathBuf,
    #[arg(long, default_value = "output")]
    pub corpus_dir: PathBuf,
    #[arg(long, default_value = "plots")]
    pub plot_dir: PathBuf,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            archive_dir: PathBuf::from("data/archive"),
            corpus_dir: PathBuf::from("output"),
            plot_dir: PathBuf::from("plots"),
        }
    }
}

/// The four opaque secrets a post source may need to authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    /// Names of the secrets left blank, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl SubjectParams {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            access_token: self.access_token.clone(),
            access_token_secret: self.access_token_secret.clone(),
        }
    }
}

impl AnalysisParams {
    pub fn forbidden_set(&self) -> HashSet<char> {
        self.forbidden_chars.chars().collect()
    }
}

impl OutputParams {
    pub fn chart_path(&self, subject: &str, top_n: usize) -> PathBuf {
        self.plot_dir
            .join(format!("top_{}_words_{}.svg", top_n, subject))
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FeedStatsError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> FsResult<()> {
        if self.subject.subject.trim().is_empty() {
            return Err(FeedStatsError::Config("subject must not be empty".into()));
        }
        if self.analysis.top_n_words == 0 {
            return Err(FeedStatsError::Config(
                "top_n_words must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Overwrite file-provided values with flags the user typed explicitly.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(subject, subject);
        update_if_present!(subject, consumer_key);
        update_if_present!(subject, consumer_secret);
        update_if_present!(subject, access_token);
        update_if_present!(subject, access_token_secret);

        update_if_present!(analysis, top_n_words);
        update_if_present!(analysis, forbidden_chars);
        update_if_present!(analysis, stopwords);

        update_if_present!(output, archive_dir);
        update_if_present!(output, corpus_dir);
        update_if_present!(output, plot_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_forbidden_set_contains_digits_and_markers() {
        let set = AnalysisParams::default().forbidden_set();
        for c in "0123456789@:#^&;/~`|\\".chars() {
            assert!(set.contains(&c), "missing {:?}", c);
        }
        assert!(!set.contains(&'.'));
    }

    #[test]
    fn credentials_report_blank_fields() {
        let creds = Credentials {
            consumer_key: "k".into(),
            consumer_secret: " ".into(),
            access_token: "t".into(),
            access_token_secret: String::new(),
        };
        assert_eq!(creds.missing(), vec!["consumer_secret", "access_token_secret"]);
        assert!(!creds.is_complete());
    }

    #[test]
    fn chart_path_is_named_from_subject_and_n() {
        let out = OutputParams::default();
        assert_eq!(
            out.chart_path("someone", 15),
            PathBuf::from("plots/top_15_words_someone.svg")
        );
    }
}
