use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dupsweep", version)]
#[command(about = "Find duplicate files in a directory tree and delete all but one copy")]
#[command(
    long_about = "Recursively scans a directory, hashes every file, and deletes all but \
                  one member of each group of identical files. Which copy survives follows \
                  hashing completion order and is not configurable."
)]
pub struct Cli {
    /// Directory to scan for duplicates
    pub path: PathBuf,

    /// Number of parallel threads for hashing (default: number of CPU cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Report duplicate groups without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
