pub mod cli;
pub mod duplicates;
pub mod hasher;
pub mod walker;

pub use cli::Cli;
pub use duplicates::{SweepSummary, group_by_digest, sweep};
pub use hasher::{HashedFile, hash_file};
pub use walker::collect_files;
