use super::ExportArgs;
use clap::Args;
use feedstats::config::Config;
use feedstats::corpus::{ArchiveSource, CorpusStore};
use feedstats::error::FsResult;
use feedstats::pipeline;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Fail when any of the four API secrets is blank
    #[arg(long, default_value_t = false)]
    pub require_credentials: bool,
}

pub fn run(args: &RunArgs, config: &Config) -> FsResult<()> {
    let source = ArchiveSource::new(&config.output.archive_dir)
        .with_required_credentials(args.require_credentials);
    let store = CorpusStore::new(&config.output.corpus_dir);
    let stop_words = pipeline::load_stop_words(config)?;

    println!(
        "\n🔎 === RUNNING READABILITY FOR @{} === 🔎",
        config.subject.subject
    );
    let report = pipeline::run(&source, &store, config, &stop_words)?;
    super::emit(&report, config, &args.export)
}
