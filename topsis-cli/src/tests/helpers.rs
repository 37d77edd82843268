//! Test helpers for writing decision tables into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Phones priced (minimise) against storage (maximise); `P2` dominates.
pub(super) const PHONES: &str = "Model,Price,Storage\nP1,250,16\nP2,200,32\nP3,300,32\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

/// Rank column of the CSV output row labelled `label`.
pub(super) fn rank_of(output: &str, label: &str) -> Option<usize> {
    output
        .lines()
        .skip(1)
        .map(|line| line.split(',').collect::<Vec<_>>())
        .find(|cells| cells.first() == Some(&label))
        .and_then(|cells| cells.last().and_then(|rank| rank.parse().ok()))
}
