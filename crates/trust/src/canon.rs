//! Path canonicalization for authorization checks.
//!
//! Resolution is a read-only probe of the filesystem namespace; it never
//! creates or modifies anything. A path that does not exist reports as
//! [`ResolvedSubject::Unresolved`] rather than an error, because what a
//! missing target means depends on the operation being authorized: a read
//! of a missing file fails, a write of a missing file is a create.

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of resolving a requested path to its real form.
///
/// The "subject" is the path the scope check runs against. For an existing
/// target that is the target itself, fully resolved; for a create it is the
/// resolved parent directory, since the target does not exist yet and its
/// containing directory is the only thing that can be verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSubject {
    /// The path exists; all symlinks and `.`/`..` segments are resolved.
    Existing(PathBuf),
    /// The path does not exist but its parent directory does; the resolved
    /// parent is the subject a create operation is checked against.
    ForCreate(PathBuf),
    /// Neither the path nor its parent directory resolves.
    Unresolved,
}

impl ResolvedSubject {
    /// The real path the scope check runs against, if resolution succeeded.
    pub fn subject(&self) -> Option<&Path> {
        match self {
            Self::Existing(p) | Self::ForCreate(p) => Some(p),
            Self::Unresolved => None,
        }
    }
}

/// Resolve a path that must already exist.
pub fn resolve(path: &Path) -> ResolvedSubject {
    match fs::canonicalize(path) {
        Ok(real) => ResolvedSubject::Existing(real),
        Err(_) => ResolvedSubject::Unresolved,
    }
}

/// Resolve a write target, falling back to its parent directory when the
/// target itself does not exist yet.
pub fn resolve_for_write(path: &Path) -> ResolvedSubject {
    if let Ok(real) = fs::canonicalize(path) {
        return ResolvedSubject::Existing(real);
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        // A bare file name targets the current directory.
        _ => Path::new("."),
    };

    match fs::canonicalize(parent) {
        Ok(real) => ResolvedSubject::ForCreate(real),
        Err(_) => ResolvedSubject::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "hello").unwrap();

        let resolved = resolve(&file);
        assert_eq!(
            resolved,
            ResolvedSubject::Existing(fs::canonicalize(&file).unwrap())
        );
    }

    #[test]
    fn test_resolve_missing_file() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve(&temp.path().join("missing.txt"));
        assert_eq!(resolved, ResolvedSubject::Unresolved);
        assert!(resolved.subject().is_none());
    }

    #[test]
    fn test_resolve_normalizes_dot_segments() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let twisted = temp.path().join("sub").join("..").join("file.txt");
        assert_eq!(
            resolve(&twisted),
            ResolvedSubject::Existing(fs::canonicalize(&file).unwrap())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target.txt");
        fs::write(&target, "x").unwrap();
        let link = temp.path().join("link.txt");
        symlink(&target, &link).unwrap();

        assert_eq!(
            resolve(&link),
            ResolvedSubject::Existing(fs::canonicalize(&target).unwrap())
        );
    }

    #[test]
    fn test_resolve_for_write_existing_target() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(
            resolve_for_write(&file),
            ResolvedSubject::Existing(fs::canonicalize(&file).unwrap())
        );
    }

    #[test]
    fn test_resolve_for_write_new_file_uses_parent() {
        let temp = TempDir::new().unwrap();
        let new_file = temp.path().join("new.txt");

        assert_eq!(
            resolve_for_write(&new_file),
            ResolvedSubject::ForCreate(fs::canonicalize(temp.path()).unwrap())
        );
    }

    #[test]
    fn test_resolve_for_write_missing_parent() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("no_such_dir").join("new.txt");
        assert_eq!(resolve_for_write(&deep), ResolvedSubject::Unresolved);
    }

    #[test]
    fn test_subject_accessor() {
        let existing = ResolvedSubject::Existing(PathBuf::from("/a"));
        assert_eq!(existing.subject(), Some(Path::new("/a")));

        let for_create = ResolvedSubject::ForCreate(PathBuf::from("/b"));
        assert_eq!(for_create.subject(), Some(Path::new("/b")));

        assert_eq!(ResolvedSubject::Unresolved.subject(), None);
    }
}
