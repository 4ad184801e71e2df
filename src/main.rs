use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use feedstats::config::Config;
use feedstats::error::FsResult;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; explicit flags override its values
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch, filter and save a subject's posts
    Fetch(cmd::fetch::FetchArgs),
    /// Rank words and score readability of a saved corpus
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Fetch then analyze in one go
    Run(cmd::run::RunArgs),
}

fn resolve_config(
    file: &Option<PathBuf>,
    cli_config: &Config,
    sub_matches: &ArgMatches,
) -> FsResult<Config> {
    match file {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(cli_config, sub_matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing feedstats...");

    let (name, cli_config) = match &cli.command {
        Commands::Fetch(args) => ("fetch", &args.config),
        Commands::Analyze(args) => ("analyze", &args.config),
        Commands::Run(args) => ("run", &args.config),
    };
    let Some(sub_matches) = matches.subcommand_matches(name) else {
        error!("❌ Missing arguments for subcommand '{}'", name);
        process::exit(2);
    };

    let config = resolve_config(&cli.config_file, cli_config, sub_matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    // Only the commands that fetch care about credentials.
    let fetches = matches!(cli.command, Commands::Fetch(_) | Commands::Run(_));
    if fetches && !config.subject.credentials().is_complete() {
        warn!("⚠️  Incomplete API credentials; only sources that need none will work.");
    }

    let result = match &cli.command {
        Commands::Fetch(args) => cmd::fetch::run(args, &config),
        Commands::Analyze(args) => cmd::analyze::run(args, &config),
        Commands::Run(args) => cmd::run::run(args, &config),
    };

    if let Err(e) = result {
        error!("\n❌ FATAL ERROR:");
        error!("   {}", e);
        process::exit(1);
    }
}
