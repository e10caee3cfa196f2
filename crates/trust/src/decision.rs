//! The access decision engine.
//!
//! Every filesystem operation requested by the untrusted surface passes
//! through [`decide`] before any I/O runs. The requested path is resolved
//! to its real form first and the scope check runs on that resolved
//! subject, which is what defeats symlink and `..` escapes: a symlink that
//! lives inside the trusted tree but points outside of it resolves to its
//! real external target and is denied, even though the link object itself
//! sits under the trusted root.
//!
//! The decision never rewrites the operation. On allow, the caller performs
//! the I/O against the path exactly as requested; canonicalization exists
//! for authorization only.

use std::path::{Path, PathBuf};

use crate::canon::{self, ResolvedSubject};
use crate::error::{Result, TrustError};
use crate::state::{TrustStore, TrustedScopes};

/// The kind of filesystem operation being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read the full contents of a file.
    Read,
    /// Create or overwrite a file.
    Write,
    /// Enumerate the immediate children of a directory.
    List,
}

/// A single authorization request.
///
/// Transient; built per invocation and discarded after the decision.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    /// The path exactly as the untrusted surface sent it.
    pub raw_path: String,
    /// What the surface wants to do with it.
    pub operation: Operation,
}

impl AccessRequest {
    /// Creates a request for the given raw path and operation.
    pub fn new(raw_path: impl Into<String>, operation: Operation) -> Self {
        Self {
            raw_path: raw_path.into(),
            operation,
        }
    }
}

/// Evaluate one request against one snapshot of the trusted scopes.
///
/// Returns the resolved subject the allow decision was made on. The subject
/// is for logging and tests; the caller still performs I/O against the raw
/// requested path.
pub fn decide(scopes: &TrustedScopes, request: &AccessRequest) -> Result<PathBuf> {
    if request.raw_path.is_empty() || request.raw_path.contains('\0') {
        return Err(TrustError::InvalidPath);
    }

    let raw = Path::new(&request.raw_path);
    let resolved = match request.operation {
        Operation::Write => canon::resolve_for_write(raw),
        Operation::Read | Operation::List => canon::resolve(raw),
    };

    let subject = match resolved {
        ResolvedSubject::Existing(p) | ResolvedSubject::ForCreate(p) => p,
        ResolvedSubject::Unresolved => return Err(TrustError::PathNotFound),
    };

    if scopes.contains(&subject) {
        Ok(subject)
    } else {
        tracing::debug!(
            operation = ?request.operation,
            subject = %subject.display(),
            "denied: resolved subject outside trusted scopes"
        );
        Err(TrustError::AccessDenied)
    }
}

impl TrustStore {
    /// Authorize one operation against an atomically-read snapshot of the
    /// current scopes.
    ///
    /// This is the gate every mediated filesystem command calls before
    /// running its underlying I/O.
    pub fn authorize(&self, raw_path: &str, operation: Operation) -> Result<PathBuf> {
        let request = AccessRequest::new(raw_path, operation);
        decide(&self.snapshot(), &request)
    }
}
