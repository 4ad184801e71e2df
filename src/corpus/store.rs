use crate::error::FsResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Plain-text persistence of a subject's filtered posts.
///
/// One post per line. A new run for the same subject replaces the file.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    dir: PathBuf,
}

impl CorpusStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The one place the corpus file name is decided.
    pub fn path_for(&self, subject: &str) -> PathBuf {
        self.dir.join(format!("{}_posts.txt", subject))
    }

    /// Write `posts` for `subject`, truncating any previous blob.
    pub fn persist<S: AsRef<str>>(&self, subject: &str, posts: &[S]) -> FsResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(subject);

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        for post in posts {
            writer.write_all(post.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        info!("💾 Saved {} posts to {}", posts.len(), path.display());
        Ok(path)
    }

    /// Read the blob back as one text, line breaks folded into spaces.
    pub fn load(&self, subject: &str) -> FsResult<String> {
        let path = self.path_for(subject);
        let raw = fs::read_to_string(&path)?;
        debug!("Read {} bytes from {}", raw.len(), path.display());
        Ok(join_lines(&raw))
    }
}

fn join_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_file_is_named_after_subject() {
        let store = CorpusStore::new("output");
        assert_eq!(
            store.path_for("someone"),
            PathBuf::from("output/someone_posts.txt")
        );
    }

    #[test]
    fn join_lines_folds_breaks() {
        assert_eq!(join_lines("a.\r\nb.\n\nc.\n"), "a. b. c.");
        assert_eq!(join_lines(""), "");
    }
}
