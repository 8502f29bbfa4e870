use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "fixbashhistory")]
#[command(version = fixbashhistory::VERSION)]
#[command(about = "Deduplicate a timestamped bash history, keeping the most recent use of each command")]
struct Cli {
    /// Path to your .bash_history
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(long, value_name = "PATH")]
    outfile: Option<PathBuf>,

    /// TOML file supplying defaults for the options above
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fail on commands that appear before the first timestamp line
    #[arg(long)]
    strict: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let file_config = match &cli.config {
        Some(path) => fixbashhistory::Config::load(path)?,
        None => fixbashhistory::Config::default(),
    };

    let config =
        fixbashhistory::FixConfig::resolve(cli.history_file, cli.outfile, cli.strict, file_config)?;
    fixbashhistory::fix(&config)?;

    Ok(())
}
