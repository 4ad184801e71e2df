use feedstats::config::{AnalysisParams, Credentials};
use feedstats::corpus::{filter_posts, ArchiveSource, CorpusStore, PostSource};
use feedstats::error::FetchError;
use std::collections::HashSet;
use std::fs;

#[test]
fn test_filter_and_persist_drops_hashtag_post() {
    let dir = tempfile::tempdir().unwrap();
    let forbidden: HashSet<char> = ['#'].into_iter().collect();
    let posts = ["hello world.", "check #this out", "plain text"];

    let kept = filter_posts(&posts, &forbidden);
    assert_eq!(kept.len(), 2);

    let store = CorpusStore::new(dir.path());
    let path = store.persist("someone", &kept).unwrap();
    let saved = fs::read_to_string(path).unwrap();

    assert_eq!(saved, "hello world..\nplain text.\n");
    assert!(!saved.contains("#this"));
}

#[test]
fn test_default_filter_drops_mentions_links_and_numbers() {
    let forbidden = AnalysisParams::default().forbidden_set();
    let posts = [
        "Thanks @friend",
        "Read more: https example",
        "We won 3 games",
        "A clean sentence",
        "pipes | and ~tildes",
    ];
    assert_eq!(filter_posts(&posts, &forbidden), vec!["A clean sentence."]);
}

#[test]
fn test_persist_overwrites_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(dir.path());

    store.persist("someone", &["old post one.", "old post two."]).unwrap();
    store.persist("someone", &["fresh post."]).unwrap();

    assert_eq!(store.load("someone").unwrap(), "fresh post.");
}

#[test]
fn test_persist_empty_corpus_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(dir.path().join("nested/output"));

    let empty: Vec<String> = Vec::new();
    let path = store.persist("quiet", &empty).unwrap();

    assert!(path.exists());
    assert_eq!(store.load("quiet").unwrap(), "");
}

#[test]
fn test_load_joins_posts_with_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(dir.path());
    store.persist("someone", &["first.", "second."]).unwrap();
    assert_eq!(store.load("someone").unwrap(), "first. second.");
}

#[test]
fn test_load_missing_corpus_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CorpusStore::new(dir.path()).load("ghost").unwrap_err();
    assert!(err.to_string().starts_with("IO Error"));
}

#[test]
fn test_archive_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let err = ArchiveSource::new(dir.path())
        .fetch("broken", &Credentials::default())
        .unwrap_err();
    assert!(matches!(err, FetchError::Malformed { .. }));
}

#[test]
fn test_archive_with_complete_credentials() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("someone.json"), r#"[{"text": "hi there"}]"#).unwrap();
    let creds = Credentials {
        consumer_key: "a".into(),
        consumer_secret: "b".into(),
        access_token: "c".into(),
        access_token_secret: "d".into(),
    };

    let posts = ArchiveSource::new(dir.path())
        .with_required_credentials(true)
        .fetch("someone", &creds)
        .unwrap();
    assert_eq!(posts, vec!["hi there"]);
}
