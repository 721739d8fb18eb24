use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod fs;
mod library;
mod plan;
mod runtime;
mod tags;
mod translit;

use fs::StdFilesystem;
use runtime::RunOptions;

/// Move audio files into an artist/album/title tree built from their tags.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan for audio files
    scan_dir: PathBuf,

    /// Directory where the sorted files are deposited
    target_dir: PathBuf,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Debug logging
    #[arg(long)]
    debug: bool,

    /// Print the planned moves without touching any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Abort on the first audio file whose tags can't be read
    #[arg(long)]
    strict: bool,
}

fn init_logging(args: &Args) {
    let level = match (args.debug, args.verbose) {
        (_, 2..) => "trace",
        (true, _) | (false, 1) => "debug",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let settings = runtime::load_settings();
    let opts = RunOptions {
        scan_dir: args.scan_dir,
        target_dir: args.target_dir,
        dry_run: args.dry_run || settings.organize.dry_run,
        strict: args.strict || settings.organize.strict,
        show_tree: settings.organize.show_tree,
    };

    match runtime::run(&opts, &StdFilesystem::new(settings.scan)) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
