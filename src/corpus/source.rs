use crate::config::Credentials;
use crate::error::FetchError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that can hand back a subject's recent posts, newest first.
pub trait PostSource {
    fn fetch(&self, subject: &str, credentials: &Credentials) -> Result<Vec<String>, FetchError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArchiveEntry {
    Text(String),
    Post { text: String },
}

impl ArchiveEntry {
    fn into_text(self) -> String {
        match self {
            ArchiveEntry::Text(t) | ArchiveEntry::Post { text: t } => t,
        }
    }
}

/// Reads posts from `<dir>/<subject>.json`, a platform export.
///
/// The file is a JSON array whose items are either plain strings or objects
/// carrying a `"text"` field. Other fields are ignored.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    dir: PathBuf,
    require_credentials: bool,
}

impl ArchiveSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            require_credentials: false,
        }
    }

    /// Reject fetches whose credential set has blank secrets.
    pub fn with_required_credentials(mut self, required: bool) -> Self {
        self.require_credentials = required;
        self
    }

    pub fn path_for(&self, subject: &str) -> PathBuf {
        self.dir.join(format!("{}.json", subject))
    }
}

impl PostSource for ArchiveSource {
    fn fetch(&self, subject: &str, credentials: &Credentials) -> Result<Vec<String>, FetchError> {
        if self.require_credentials {
            let missing = credentials.missing();
            if !missing.is_empty() {
                return Err(FetchError::Authentication(format!(
                    "missing {}",
                    missing.join(", ")
                )));
            }
        }

        let path = self.path_for(subject);
        debug!("Reading archive {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::UnknownSubject(subject.to_string()),
            _ => FetchError::Network(format!("{}: {}", path.display(), e)),
        })?;

        let entries: Vec<ArchiveEntry> =
            serde_json::from_str(&content).map_err(|e| FetchError::Malformed {
                subject: subject.to_string(),
                reason: e.to_string(),
            })?;

        let posts: Vec<String> = entries.into_iter().map(ArchiveEntry::into_text).collect();
        info!("📥 Loaded {} posts for @{}", posts.len(), subject);
        Ok(posts)
    }
}
