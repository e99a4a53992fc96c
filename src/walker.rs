use std::path::{Path, PathBuf};

use indicatif::{HumanCount, ProgressBar};
use log::{debug, error, info};
use walkdir::WalkDir;

/// Collects every non-directory path reachable under `root`.
///
/// Anything that is not a directory is included as-is: regular files,
/// symlinks, sockets, whatever. No further type checking is done.
/// An entry that cannot be read (permission denied, vanished mid-walk)
/// is logged and skipped, so an unreadable subtree contributes no
/// paths while the rest of the walk continues. No order guarantee.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    info!("Scanning '{}'", root.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Scanning files and directories...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        spinner.tick();
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    debug!("Found '{}'", entry.path().display());
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                error!("Failed to read directory entry: {e}");
            }
        }
    }
    spinner.finish_and_clear();

    info!("Found {} files", HumanCount(paths.len() as u64));
    paths
}
