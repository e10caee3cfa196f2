//! Process-wide trust state and its grant mediation.
//!
//! [`TrustedScopes`] is the plain data: at most one workspace root plus a
//! set of individually approved standalone files, all in canonical form.
//! [`TrustStore`] wraps it for concurrent access and exposes the only two
//! operations allowed to mutate it, both driven by explicit user selection
//! in a native picker. The decision engine only ever reads snapshots.
//!
//! Nothing here is persisted. Trust is granted for one interactive session
//! and dies with the process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::canon::{self, ResolvedSubject};

/// The scopes the untrusted surface is currently allowed to touch.
#[derive(Debug, Clone, Default)]
pub struct TrustedScopes {
    /// The single directory tree trusted in full, canonical form.
    pub(crate) workspace_root: Option<PathBuf>,
    /// Individually approved standalone files, canonical form.
    pub(crate) approved_files: HashSet<PathBuf>,
}

impl TrustedScopes {
    /// Returns whether a canonical path falls inside any trusted scope.
    ///
    /// A path equal to the workspace root, or strictly contained in its
    /// real directory tree, is in scope; so is an exact member of the
    /// approved file set. `subject` must already be canonical for the
    /// containment test to be meaningful.
    pub fn contains(&self, subject: &Path) -> bool {
        if let Some(root) = &self.workspace_root {
            if subject.starts_with(root) {
                return true;
            }
        }
        self.approved_files.contains(subject)
    }

    /// The current workspace root, if one has been granted.
    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// Number of standalone file approvals currently in force.
    pub fn approved_file_count(&self) -> usize {
        self.approved_files.len()
    }
}

/// Thread-safe owner of the trust state.
///
/// The two grant methods are the only writers. Each grant applies as a
/// single step under the write lock, so no reader ever observes a new
/// workspace root paired with the previous root's standalone approvals.
#[derive(Debug, Default)]
pub struct TrustStore {
    scopes: RwLock<TrustedScopes>,
}

impl TrustStore {
    /// Creates a store with nothing trusted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trust a workspace folder picked by the user.
    ///
    /// Replaces any previous root and revokes every standalone approval;
    /// approvals must not outlive the project they were granted under. If
    /// the picked path does not resolve to a real directory, the state is
    /// left untouched and nothing new is trusted.
    ///
    /// Returns the originally picked path for display, not the canonical
    /// form the scope checks run against.
    pub fn grant_workspace(&self, picked: &Path) -> Option<PathBuf> {
        let real = match canon::resolve(picked) {
            ResolvedSubject::Existing(p) if p.is_dir() => p,
            _ => {
                tracing::warn!(path = %picked.display(), "workspace grant did not resolve to a directory");
                return None;
            }
        };

        let mut scopes = self.write();
        scopes.workspace_root = Some(real);
        scopes.approved_files.clear();
        tracing::info!(root = %picked.display(), "workspace trusted");

        Some(picked.to_path_buf())
    }

    /// Trust a single standalone file picked by the user.
    ///
    /// Grants access to exactly the resolved file, nothing else in its
    /// directory. If the picked path does not resolve, nothing is granted.
    pub fn grant_file(&self, picked: &Path) -> Option<PathBuf> {
        let real = match canon::resolve(picked) {
            ResolvedSubject::Existing(p) => p,
            _ => {
                tracing::warn!(path = %picked.display(), "file grant failed to resolve");
                return None;
            }
        };

        self.write().approved_files.insert(real);
        tracing::info!(file = %picked.display(), "standalone file approved");

        Some(picked.to_path_buf())
    }

    /// An atomically-read copy of the current scopes.
    ///
    /// Each access decision is evaluated against one such snapshot; a grant
    /// racing with an in-flight decision is observed entirely or not at all.
    pub fn snapshot(&self) -> TrustedScopes {
        self.read().clone()
    }

    // Grant mutations keep root and approvals consistent within one locked
    // section, so the state behind a poisoned lock is still well-formed.
    fn read(&self) -> RwLockReadGuard<'_, TrustedScopes> {
        self.scopes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TrustedScopes> {
        self.scopes.write().unwrap_or_else(PoisonError::into_inner)
    }
}
