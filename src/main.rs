use std::process;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::error::ErrorKind;
use indicatif::{HumanBytes, HumanCount};
use log::{LevelFilter, debug, info, warn};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use dupsweep::{Cli, collect_files, sweep};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too and are not errors.
            // Genuine argument errors exit with code 1, not clap's 2.
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    let mut log_config = ConfigBuilder::new();
    let _ = log_config.set_time_offset_to_local();
    TermLogger::init(
        if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        log_config.build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    debug!("Command line arguments: {cli:?}");

    // The only fatal check: everything past this point is best-effort.
    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("Invalid directory: '{}'", cli.path.display()))?;
    if !root.is_dir() {
        bail!("Not a directory: '{}'", root.display());
    }
    info!("Target directory: '{}'", root.display());

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let paths = collect_files(&root);
    let summary = sweep(&paths, cli.dry_run);

    if summary.files_deleted > 0 {
        info!(
            "Removed {} files, reclaimed {}",
            HumanCount(summary.files_deleted as u64),
            HumanBytes(summary.bytes_reclaimed)
        );
    }
    if summary.hash_failures > 0 || summary.delete_failures > 0 {
        warn!(
            "{} files could not be hashed, {} could not be deleted",
            summary.hash_failures, summary.delete_failures
        );
    }
    info!(
        "Completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
