//! Error types for the trust boundary.

use thiserror::Error;

/// Authorization failure for a single mediated filesystem request.
///
/// These are the only failure kinds that may cross to the untrusted surface.
/// They deliberately carry no path, no OS error code and no I/O detail; the
/// privileged side logs the specifics, the surface only learns the coarse
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrustError {
    /// The requested path is empty or not a well-formed path string.
    #[error("invalid path")]
    InvalidPath,

    /// The requested path (or, for writes, its parent directory) does not
    /// resolve to a real filesystem object.
    #[error("path not found")]
    PathNotFound,

    /// The resolved path lies outside every currently trusted scope.
    #[error("access denied")]
    AccessDenied,
}

/// Result type alias for trust boundary operations.
pub type Result<T> = std::result::Result<T, TrustError>;
