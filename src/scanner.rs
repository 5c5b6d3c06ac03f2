use log::debug;
use std::{io, path::Path};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {0}")]
    NotADirectory(std::path::PathBuf),
    #[error("failed to walk directory tree")]
    Walk(#[from] walkdir::Error),
    #[error("failed to inspect root path")]
    Io(#[from] io::Error),
}

/// Counts accumulated over one full traversal. The root itself is
/// never part of either counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub files: u64,
    pub directories: u64,
}

/// Walks everything below `root` once and tallies regular files and
/// directories. Fails on the first unreadable entry, no partial counts.
pub fn scan(root: impl AsRef<Path>) -> Result<ScanStats, ScanError> {
    let root = root.as_ref();
    ensure_directory(root)?;

    debug!("scanning {}", root.display());

    let mut stats = ScanStats::default();

    // min_depth(1) skips the root's own entry so it never shows up
    // in the directory count.
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_file() {
            stats.files += 1;
        } else if file_type.is_dir() {
            stats.directories += 1;
        }
        // Symlinks fall through, they are neither
    }

    debug!(
        "scan of {} found {} files, {} directories",
        root.display(),
        stats.files,
        stats.directories
    );

    Ok(stats)
}

pub fn count_files(root: impl AsRef<Path>) -> Result<u64, ScanError> {
    Ok(scan(root)?.files)
}

pub fn count_directories(root: impl AsRef<Path>) -> Result<u64, ScanError> {
    Ok(scan(root)?.directories)
}

pub(crate) fn ensure_directory(root: &Path) -> Result<(), ScanError> {
    if !root.metadata()?.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod does {
    use super::*;
    use std::fs::{create_dir, File};
    use tempfile::tempdir;

    #[test]
    fn report_zero_for_empty_directory() {
        let root = tempdir().unwrap();

        let stats = scan(root.path()).unwrap();

        assert_eq!(stats.files, 0);
        assert_eq!(stats.directories, 0);
    }

    #[test]
    fn count_flat_files() {
        let root = tempdir().unwrap();
        File::create(root.path().join("a.txt")).unwrap();
        File::create(root.path().join("b.txt")).unwrap();
        File::create(root.path().join("c.txt")).unwrap();

        let stats = scan(root.path()).unwrap();

        assert_eq!(stats.files, 3);
        assert_eq!(stats.directories, 0);
    }

    #[test]
    fn count_nested_files_and_directories() {
        let root = tempdir().unwrap();
        File::create(root.path().join("a.txt")).unwrap();
        File::create(root.path().join("b.txt")).unwrap();
        create_dir(root.path().join("sub")).unwrap();
        File::create(root.path().join("sub/c.txt")).unwrap();

        let stats = scan(root.path()).unwrap();

        assert_eq!(stats.files, 3);
        assert_eq!(stats.directories, 1);
    }

    #[test]
    fn track_additions_independently() {
        let root = tempdir().unwrap();
        create_dir(root.path().join("sub")).unwrap();
        File::create(root.path().join("sub/a.txt")).unwrap();

        let before = scan(root.path()).unwrap();

        File::create(root.path().join("sub/b.txt")).unwrap();
        let after_file = scan(root.path()).unwrap();
        assert_eq!(after_file.files, before.files + 1);
        assert_eq!(after_file.directories, before.directories);

        create_dir(root.path().join("sub/empty")).unwrap();
        let after_dir = scan(root.path()).unwrap();
        assert_eq!(after_dir.files, after_file.files);
        assert_eq!(after_dir.directories, after_file.directories + 1);
    }

    #[test]
    fn expose_both_counters_separately() {
        let root = tempdir().unwrap();
        File::create(root.path().join("a.txt")).unwrap();
        create_dir(root.path().join("one")).unwrap();
        create_dir(root.path().join("two")).unwrap();

        assert_eq!(count_files(root.path()).unwrap(), 1);
        assert_eq!(count_directories(root.path()).unwrap(), 2);
    }

    #[test]
    fn fail_on_missing_root() {
        let root = tempdir().unwrap();
        let missing = root.path().join("nope");

        assert!(matches!(scan(&missing), Err(ScanError::Io(_))));
    }

    #[test]
    fn fail_when_root_is_a_file() {
        let root = tempdir().unwrap();
        let file = root.path().join("plain.txt");
        File::create(&file).unwrap();

        assert!(matches!(scan(&file), Err(ScanError::NotADirectory(_))));
    }
}
