//! Tauri IPC commands for the editor shell.
//!
//! This module exposes the mediated operation surface to the untrusted
//! webview via `#[tauri::command]` handlers. Every filesystem command is
//! gated by an access decision before any I/O runs, and the two picker
//! commands are the only route into a trust grant. Each command is a single
//! round-trip request/response; nothing streams partial results.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri_plugin_dialog::{DialogExt, FilePath};
use tauri_plugin_opener::OpenerExt;
use trust::{Operation, TrustError, TrustStore};
use url::Url;

use crate::listing::{self, DirEntry, ListingError};

// ============================================================================
// Error Types
// ============================================================================

/// Unified error type delivered to the webview.
///
/// Carries a coarse code and message only. Raw OS errors are logged on the
/// privileged side and never serialized across the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl CommandError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<TrustError> for CommandError {
    fn from(e: TrustError) -> Self {
        let code = match e {
            TrustError::InvalidPath => "INVALID_PATH",
            TrustError::PathNotFound => "PATH_NOT_FOUND",
            TrustError::AccessDenied => "ACCESS_DENIED",
        };
        Self::new(code, e.to_string())
    }
}

impl From<ListingError> for CommandError {
    fn from(e: ListingError) -> Self {
        match e {
            ListingError::NotADirectory(path) => Self::new(
                "NOT_A_DIRECTORY",
                format!("not a directory: {}", path.display()),
            ),
            ListingError::Io(io) => {
                tracing::error!(error = %io, "directory listing failed after allow");
                Self::new("IO_ERROR", "directory could not be read")
            }
        }
    }
}

/// Result type for Tauri commands.
pub type CommandResult<T> = Result<T, CommandError>;

fn io_failure(io: std::io::Error, what: &str) -> CommandError {
    tracing::error!(error = %io, "{what} failed after allow");
    CommandError::new("IO_ERROR", format!("{what} failed"))
}

// ============================================================================
// Application State
// ============================================================================

/// Application state managed by Tauri.
///
/// The trust store is the only shared mutable resource behind the command
/// surface; it lives for exactly one interactive session.
pub struct AppState {
    /// Process-wide trust state and decision engine.
    pub trust: Arc<TrustStore>,
}

impl AppState {
    /// Create a new state with nothing trusted.
    pub fn new() -> Self {
        Self {
            trust: Arc::new(TrustStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Trust Grant Commands
// ============================================================================

/// Pick a workspace folder and trust it for the rest of the session.
///
/// The picker runs natively in the privileged process; the webview can ask,
/// but only an actual user selection produces a grant. Returns the picked
/// path for display, or `None` on cancellation or a failed grant; neither
/// is an error.
#[tauri::command]
pub async fn open_folder(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> CommandResult<Option<String>> {
    let picked = pick_with_dialog(app.dialog().file(), PickKind::Folder).await;
    Ok(picked
        .and_then(|path| state.trust.grant_workspace(&path))
        .map(|path| path.to_string_lossy().into_owned()))
}

/// Pick a standalone file and approve it for the rest of the session.
#[tauri::command]
pub async fn open_file(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
) -> CommandResult<Option<String>> {
    let picked = pick_with_dialog(app.dialog().file(), PickKind::File).await;
    Ok(picked
        .and_then(|path| state.trust.grant_file(&path))
        .map(|path| path.to_string_lossy().into_owned()))
}

enum PickKind {
    Folder,
    File,
}

async fn pick_with_dialog(
    dialog: tauri_plugin_dialog::FileDialogBuilder<tauri::Wry>,
    kind: PickKind,
) -> Option<PathBuf> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let deliver = move |picked: Option<FilePath>| {
        let _ = tx.send(picked);
    };
    match kind {
        PickKind::Folder => dialog.pick_folder(deliver),
        PickKind::File => dialog.pick_file(deliver),
    }

    rx.await.ok().flatten().and_then(|picked| match picked {
        FilePath::Path(path) => Some(path),
        FilePath::Url(url) => url.to_file_path().ok(),
    })
}

// ============================================================================
// Mediated Filesystem Commands
// ============================================================================

/// Read a file's full contents as UTF-8 text.
///
/// Authorization canonicalizes the path; the read that follows still
/// targets the path exactly as requested.
#[tauri::command]
pub async fn read_file(
    state: tauri::State<'_, AppState>,
    path: String,
) -> CommandResult<String> {
    state.trust.authorize(&path, Operation::Read)?;
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| io_failure(e, "read"))
}

/// Create or overwrite a file with the given text content.
#[tauri::command]
pub async fn write_file(
    state: tauri::State<'_, AppState>,
    path: String,
    content: String,
) -> CommandResult<bool> {
    state.trust.authorize(&path, Operation::Write)?;
    tokio::fs::write(&path, content.as_bytes())
        .await
        .map_err(|e| io_failure(e, "write"))?;
    Ok(true)
}

/// List the immediate children of a directory for the tree view.
#[tauri::command]
pub async fn list_directory(
    state: tauri::State<'_, AppState>,
    path: String,
) -> CommandResult<Vec<DirEntry>> {
    state.trust.authorize(&path, Operation::List)?;
    listing::list_directory(Path::new(&path))
        .await
        .map_err(Into::into)
}

// ============================================================================
// External Link Command
// ============================================================================

/// Open a link in the system browser.
///
/// Accepted only for the secure web scheme; `file:`, custom schemes and
/// anything unparseable are refused outright with no filesystem
/// implication. Returns whether the link was accepted.
#[tauri::command]
pub async fn open_external_link(app: tauri::AppHandle, url: String) -> CommandResult<bool> {
    let Some(parsed) = parse_secure_external(&url) else {
        tracing::warn!(url = %url, "refused external link");
        return Ok(false);
    };

    app.opener()
        .open_url(parsed.as_str(), None::<&str>)
        .map_err(|e| {
            tracing::error!(error = %e, "system browser launch failed");
            CommandError::new("EXTERNAL_OPEN_FAILED", "could not open link")
        })?;
    Ok(true)
}

/// Parse a requested external link, accepting only `https` URLs.
fn parse_secure_external(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    (parsed.scheme() == "https").then_some(parsed)
}

// ============================================================================
// Tests
// ============================================================================
