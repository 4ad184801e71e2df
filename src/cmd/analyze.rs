use super::ExportArgs;
use clap::Args;
use feedstats::config::Config;
use feedstats::corpus::CorpusStore;
use feedstats::error::FsResult;
use feedstats::pipeline;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Analyze this text file instead of the subject's saved corpus
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs, config: &Config) -> FsResult<()> {
    config.validate()?;
    let subject = &config.subject.subject;

    let text = match &args.input {
        Some(path) => {
            info!("📂 Reading text from {}", path.display());
            fs::read_to_string(path)?
                .lines()
                .collect::<Vec<_>>()
                .join(" ")
        }
        None => CorpusStore::new(&config.output.corpus_dir).load(subject)?,
    };

    println!("\n🔎 === READABILITY FOR @{} === 🔎", subject);
    let stop_words = pipeline::load_stop_words(config)?;
    let report = pipeline::analyze(&text, config.analysis.top_n_words, subject, &stop_words);
    super::emit(&report, config, &args.export)
}
