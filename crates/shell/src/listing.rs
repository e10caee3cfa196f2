//! Directory enumeration for the editor's tree view.
//!
//! Listing only ever runs after the requested directory has passed an
//! access decision; this module is presentation plumbing, not a security
//! check. One level is enumerated per call; the tree view asks again when
//! the user expands a child.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from directory enumeration.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The target resolves but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Underlying enumeration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What kind of object a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A subdirectory.
    Dir,
    /// A regular file; symlinks report here too.
    File,
}

/// One child of a listed directory, as delivered to the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name, not a path.
    pub name: String,
    /// The listed directory joined with the name. Deliberately not
    /// canonicalized: opening it later gets its own access decision.
    pub path: PathBuf,
    /// Whether the entry is a directory or a file.
    pub kind: EntryKind,
}

/// Enumerate the immediate children of `dir`.
///
/// Directories sort before files; within each group entries sort by name,
/// case-insensitively. Children that cannot be stat'ed are skipped rather
/// than failing the whole listing.
pub async fn list_directory(dir: &Path) -> Result<Vec<DirEntry>, ListingError> {
    let metadata = tokio::fs::metadata(dir).await?;
    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory(dir.to_path_buf()));
    }

    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(child) = read_dir.next_entry().await? {
        let kind = match child.file_type().await {
            Ok(t) if t.is_dir() => EntryKind::Dir,
            Ok(_) => EntryKind::File,
            Err(_) => continue,
        };

        entries.push(DirEntry {
            name: child.file_name().to_string_lossy().into_owned(),
            path: dir.join(child.file_name()),
            kind,
        });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Dir, EntryKind::File) => Ordering::Less,
        (EntryKind::File, EntryKind::Dir) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}
