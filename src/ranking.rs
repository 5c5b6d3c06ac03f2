use crate::scanner::{self, ScanError};
use log::debug;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// A directory paired with a file count, produced by the rankers below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirCount {
    pub path: PathBuf,
    pub files: u64,
}

/// Every directory reachable from `root` (the root included) with the
/// number of regular files directly inside it, most files first.
pub fn direct_file_counts(root: impl AsRef<Path>) -> Result<Vec<DirCount>, ScanError> {
    let root = root.as_ref();
    scanner::ensure_directory(root)?;

    let mut counts: HashMap<PathBuf, u64> = HashMap::new();
    counts.insert(root.to_path_buf(), 0);

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;

        if entry.file_type().is_dir() {
            counts.entry(entry.path().to_path_buf()).or_insert(0);
        } else if entry.file_type().is_file() {
            // Every non-root entry has a parent inside the tree
            if let Some(parent) = entry.path().parent() {
                *counts.entry(parent.to_path_buf()).or_insert(0) += 1;
            }
        }
    }

    debug!("ranked {} directories under {}", counts.len(), root.display());

    Ok(sorted(counts))
}

/// The root's immediate subdirectories, each with the recursive file
/// count of its subtree, most files first.
pub fn recursive_subdir_counts(root: impl AsRef<Path>) -> Result<Vec<DirCount>, ScanError> {
    let root = root.as_ref();
    scanner::ensure_directory(root)?;

    let mut counts = HashMap::new();

    for entry in root.read_dir()? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let path = entry.path();
            let files = scanner::count_files(&path)?;
            counts.insert(path, files);
        }
    }

    Ok(sorted(counts))
}

/// How many entries the exploratory rankers print by default.
pub const DEFAULT_TOP_N: usize = 10;

/// The `n` highest-ranked entries, or the whole ranking if it is shorter.
pub fn top_n(ranked: &[DirCount], n: usize) -> &[DirCount] {
    &ranked[..ranked.len().min(n)]
}

fn sorted(counts: HashMap<PathBuf, u64>) -> Vec<DirCount> {
    let mut ranked: Vec<DirCount> = counts
        .into_iter()
        .map(|(path, files)| DirCount { path, files })
        .collect();

    // Path as tiebreaker keeps the output stable between runs
    ranked.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.path.cmp(&b.path)));
    ranked
}
