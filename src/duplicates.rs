use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;

use colored::Colorize;
use indicatif::{HumanBytes, HumanCount, ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;

use crate::hasher::{HashedFile, hash_file};

/// Outcome of one scan-and-delete pass.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub files_hashed: usize,
    pub hash_failures: usize,
    pub duplicate_groups: usize,
    pub files_deleted: usize,
    pub bytes_reclaimed: u64,
    pub delete_failures: usize,
}

/// Hashes every path on the rayon pool and groups the results by digest.
///
/// Per-file results flow through a channel and are folded into the map by
/// the single receiving side, so completions cannot race on a group.
/// `for_each_with` returning is the join barrier: the map is only built
/// once every hash task has finished. A failed hash is logged and counted,
/// never aborting the others. Insertion order within a group is completion
/// order, which is not deterministic.
///
/// Returns the digest-to-files map (singleton groups included) and the
/// number of paths that could not be hashed.
pub fn group_by_digest(paths: &[PathBuf]) -> (HashMap<String, Vec<HashedFile>>, usize) {
    info!("Hashing {} files...", HumanCount(paths.len() as u64));

    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let (tx, rx) = mpsc::channel();
    paths.par_iter().for_each_with(tx, |tx, path| {
        let result = hash_file(path).map(|(digest, size)| HashedFile {
            path: path.clone(),
            size,
            digest,
        });
        progress.inc(1);
        // The receiver outlives every sender clone, send cannot fail.
        let _ = tx.send(result);
    });
    progress.finish_and_clear();

    let mut groups: HashMap<String, Vec<HashedFile>> = HashMap::new();
    let mut hash_failures = 0;
    for result in rx {
        match result {
            Ok(file) => groups.entry(file.digest.clone()).or_default().push(file),
            Err(e) => {
                error!("{e:#}");
                hash_failures += 1;
            }
        }
    }
    (groups, hash_failures)
}

/// Runs the full pass over an already-discovered path list: hash, group,
/// report, delete.
///
/// Every group with two or more members keeps its first member (an
/// artifact of hashing completion order, not a policy) and deletes the
/// rest. Each deletion is attempted independently; a failure is logged
/// and skipped without blocking other deletions or groups. With
/// `dry_run` the groups are reported and nothing is removed.
pub fn sweep(paths: &[PathBuf], dry_run: bool) -> SweepSummary {
    let (mut groups, hash_failures) = group_by_digest(paths);

    let mut summary = SweepSummary {
        files_hashed: groups.values().map(Vec::len).sum(),
        hash_failures,
        ..SweepSummary::default()
    };

    groups.retain(|_, group| group.len() > 1);
    summary.duplicate_groups = groups.len();

    if groups.is_empty() {
        println!("{}", "No duplicate files found!".green());
        return summary;
    }

    let duplicate_count: usize = groups.values().map(|group| group.len() - 1).sum();
    let wasted_space: u64 = groups
        .values()
        .map(|group| group[0].size * (group.len() - 1) as u64)
        .sum();
    println!(
        "Found {} duplicate files wasting {} of space",
        HumanCount(duplicate_count as u64),
        HumanBytes(wasted_space)
    );

    for group in groups.values() {
        println!(
            "{}",
            format!(
                "Duplicate group ({}, {} files):",
                HumanBytes(group[0].size),
                group.len()
            )
            .yellow()
        );
        for file in group {
            println!("  '{}'", file.path.display());
        }

        for file in &group[1..] {
            if dry_run {
                info!("Would delete '{}'", file.path.display());
                continue;
            }
            match fs::remove_file(&file.path) {
                Ok(()) => {
                    info!("Deleted '{}'", file.path.display());
                    summary.files_deleted += 1;
                    summary.bytes_reclaimed += file.size;
                }
                Err(e) => {
                    error!("Failed to delete '{}': {}", file.path.display(), e);
                    summary.delete_failures += 1;
                }
            }
        }
    }

    summary
}
