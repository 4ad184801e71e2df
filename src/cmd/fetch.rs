use clap::Args;
use feedstats::config::Config;
use feedstats::corpus::{ArchiveSource, CorpusStore};
use feedstats::error::FsResult;
use feedstats::pipeline;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Fail when any of the four API secrets is blank
    #[arg(long, default_value_t = false)]
    pub require_credentials: bool,
}

pub fn run(args: &FetchArgs, config: &Config) -> FsResult<()> {
    config.validate()?;
    let source = ArchiveSource::new(&config.output.archive_dir)
        .with_required_credentials(args.require_credentials);
    let store = CorpusStore::new(&config.output.corpus_dir);

    let kept = pipeline::collect(&source, &store, config)?;
    println!(
        "\n✅ {} posts saved to {}",
        kept,
        store.path_for(&config.subject.subject).display()
    );
    Ok(())
}
