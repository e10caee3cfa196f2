//! End-to-end tests for the trust boundary.
//!
//! These tests exercise the full grant/decide lifecycle the way the editor
//! shell drives it:
//! - Workspace containment and symlink defeat
//! - Standalone file approvals and their revocation
//! - Workspace replacement semantics
//! - The write-new-file parent rule

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use trust::{Operation, TrustError, TrustStore};

fn authorize(store: &TrustStore, path: &Path, operation: Operation) -> trust::Result<()> {
    store.authorize(path.to_str().unwrap(), operation).map(|_| ())
}

// =============================================================================
// Full Session Scenario
// =============================================================================

#[test]
fn test_full_session_scenario() {
    let proj = TempDir::new().unwrap();
    let proj2 = TempDir::new().unwrap();
    let stray = TempDir::new().unwrap();

    let project_file = proj.path().join("a.txt");
    fs::write(&project_file, "alpha").unwrap();
    let stray_notes = stray.path().join("notes.txt");
    fs::write(&stray_notes, "notes").unwrap();
    let elsewhere = stray.path().join("passwd");
    fs::write(&elsewhere, "secret").unwrap();

    let store = TrustStore::new();

    // Nothing is trusted before the first grant.
    assert_eq!(
        authorize(&store, &project_file, Operation::Read),
        Err(TrustError::AccessDenied)
    );

    // Grant the project folder; files under it become readable.
    store.grant_workspace(proj.path()).unwrap();
    assert!(authorize(&store, &project_file, Operation::Read).is_ok());
    assert!(authorize(&store, proj.path(), Operation::List).is_ok());

    // A file elsewhere stays out of scope.
    assert_eq!(
        authorize(&store, &elsewhere, Operation::Read),
        Err(TrustError::AccessDenied)
    );

    // A standalone approval opens exactly one extra file.
    store.grant_file(&stray_notes).unwrap();
    assert!(authorize(&store, &stray_notes, Operation::Read).is_ok());
    assert_eq!(
        authorize(&store, &elsewhere, Operation::Read),
        Err(TrustError::AccessDenied)
    );

    // Switching projects replaces the root and revokes the approval.
    store.grant_workspace(proj2.path()).unwrap();
    assert_eq!(
        authorize(&store, &stray_notes, Operation::Read),
        Err(TrustError::AccessDenied)
    );
    assert_eq!(
        authorize(&store, &project_file, Operation::Read),
        Err(TrustError::AccessDenied)
    );
    assert!(authorize(&store, proj2.path(), Operation::List).is_ok());
}

// =============================================================================
// Containment
// =============================================================================

#[test]
fn test_containment_covers_nested_descendants() {
    let proj = TempDir::new().unwrap();
    let nested = proj.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();
    let file = nested.join("mod.rs");
    fs::write(&file, "x").unwrap();

    let store = TrustStore::new();
    store.grant_workspace(proj.path()).unwrap();

    assert!(authorize(&store, &file, Operation::Read).is_ok());
    assert!(authorize(&store, &nested, Operation::List).is_ok());
    assert!(authorize(&store, &nested.join("new.rs"), Operation::Write).is_ok());
}

#[test]
fn test_parent_of_root_is_out_of_scope() {
    let temp = TempDir::new().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir(&proj).unwrap();

    let store = TrustStore::new();
    store.grant_workspace(&proj).unwrap();

    assert_eq!(
        authorize(&store, temp.path(), Operation::List),
        Err(TrustError::AccessDenied)
    );
}

// =============================================================================
// Symlink Defeat
// =============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_inside_root_pointing_outside_is_denied() {
    use std::os::unix::fs::symlink;

    let proj = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let secret = outside.path().join("secret.txt");
    fs::write(&secret, "secret").unwrap();

    let link = proj.path().join("innocent.txt");
    symlink(&secret, &link).unwrap();

    let store = TrustStore::new();
    store.grant_workspace(proj.path()).unwrap();

    for operation in [Operation::Read, Operation::Write, Operation::List] {
        assert_eq!(
            authorize(&store, &link, operation),
            Err(TrustError::AccessDenied)
        );
    }
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_escape_is_denied_for_new_files() {
    use std::os::unix::fs::symlink;

    let proj = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();

    // A write through the linked directory would land outside the root.
    let linked_dir = proj.path().join("vendor");
    symlink(outside.path(), &linked_dir).unwrap();

    let store = TrustStore::new();
    store.grant_workspace(proj.path()).unwrap();

    assert_eq!(
        authorize(&store, &linked_dir.join("new.txt"), Operation::Write),
        Err(TrustError::AccessDenied)
    );
}

#[cfg(unix)]
#[test]
fn test_symlink_within_root_is_allowed() {
    use std::os::unix::fs::symlink;

    let proj = TempDir::new().unwrap();
    let real = proj.path().join("real.txt");
    fs::write(&real, "x").unwrap();
    let link = proj.path().join("alias.txt");
    symlink(&real, &link).unwrap();

    let store = TrustStore::new();
    store.grant_workspace(proj.path()).unwrap();

    assert!(authorize(&store, &link, Operation::Read).is_ok());
}

// =============================================================================
// Write Rules
// =============================================================================

#[test]
fn test_new_file_write_requires_trusted_parent() {
    let proj = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();

    let store = TrustStore::new();
    store.grant_workspace(proj.path()).unwrap();

    assert!(authorize(&store, &proj.path().join("new.txt"), Operation::Write).is_ok());
    assert_eq!(
        authorize(&store, &outside.path().join("new.txt"), Operation::Write),
        Err(TrustError::AccessDenied)
    );
    assert_eq!(
        authorize(
            &store,
            &proj.path().join("missing").join("new.txt"),
            Operation::Write
        ),
        Err(TrustError::PathNotFound)
    );
}

#[test]
fn test_overwriting_approved_standalone_file_is_allowed() {
    let stray = TempDir::new().unwrap();
    let notes = stray.path().join("notes.txt");
    fs::write(&notes, "v1").unwrap();

    let store = TrustStore::new();
    store.grant_file(&notes).unwrap();

    // The existing file resolves to the approved member, so overwrite is in
    // scope; a brand-new sibling is not, because the approval covers exactly
    // one file and the parent directory was never trusted.
    assert!(authorize(&store, &notes, Operation::Write).is_ok());
    assert_eq!(
        authorize(&store, &stray.path().join("new.txt"), Operation::Write),
        Err(TrustError::AccessDenied)
    );
}
