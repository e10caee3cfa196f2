//! # Vellum Shell Library
//!
//! This crate is the privileged backend of the Vellum editor: it exposes
//! the mediated operation surface to the untrusted webview and hardens the
//! webview itself at creation time.
//!
//! ## Overview
//!
//! The shell bridges the rendered editor surface with native capabilities,
//! providing:
//!
//! - **Mediated Operations**: read/write/list commands, each gated by the
//!   trust boundary before any I/O runs
//! - **Trust Grants**: native folder and file pickers that are the only
//!   route into a new trust scope
//! - **Surface Hardening**: navigation pinning and popup/frame denial for
//!   the webview window
//! - **Configuration**: TOML-based window and logging settings
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Editor Frontend (untrusted)                  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                      Tauri IPC Bridge                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │   Commands   │  │   Listing    │  │     Hardening        │  │
//! │  │  (mediated)  │  │ (tree view)  │  │ (window lockdown)    │  │
//! │  └──────┬───────┘  └──────────────┘  └──────────────────────┘  │
//! │         │                                                       │
//! │  ┌──────┴───────────────────────────────────────────────────┐  │
//! │  │              trust: Access Decision Engine               │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage with Tauri
//!
//! Register the command handlers in your Tauri application:
//!
//! ```rust,ignore
//! use shell::generate_handler;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .manage(shell::AppState::new())
//!         .invoke_handler(generate_handler!())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ## Available Commands
//!
//! The following IPC commands are exposed to the frontend:
//!
//! - `open_folder`: Pick and trust a workspace folder
//! - `open_file`: Pick and approve a standalone file
//! - `read_file`: Read a trusted file as UTF-8 text
//! - `write_file`: Create or overwrite a trusted file
//! - `list_directory`: Enumerate one level of a trusted directory
//! - `open_external_link`: Open an `https` link in the system browser
//!
//! ## Modules
//!
//! - [`commands`]: Tauri IPC command handlers
//! - [`listing`]: Directory enumeration for the tree view
//! - [`hardening`]: Webview surface lockdown
//! - [`config`]: Shell configuration

pub mod commands;
pub mod config;
pub mod hardening;
pub mod listing;

// Re-export the trust boundary for convenience
pub use trust;

// Re-export command types and app state
pub use commands::{AppState, CommandError, CommandResult};

// Re-export hardening types for convenience
pub use hardening::{harden, NavigationPolicy, SURFACE_LOCKDOWN};

// Re-export config types for convenience
pub use config::{default_config_path, ShellConfig};

// Re-export listing types for convenience
pub use listing::{DirEntry, EntryKind, ListingError};

/// Generate the Tauri command handler with all registered commands.
///
/// This macro generates a `tauri::generate_handler![]` with all the
/// IPC commands exposed by this crate.
///
/// # Example
///
/// ```rust,ignore
/// use shell::generate_handler;
///
/// fn main() {
///     tauri::Builder::default()
///         .invoke_handler(generate_handler!())
///         .run(tauri::generate_context!())
///         .expect("error while running tauri application");
/// }
/// ```
#[macro_export]
macro_rules! generate_handler {
    () => {
        tauri::generate_handler![
            $crate::commands::open_folder,
            $crate::commands::open_file,
            $crate::commands::read_file,
            $crate::commands::write_file,
            $crate::commands::list_directory,
            $crate::commands::open_external_link,
        ]
    };
}

/// List of all Tauri command functions for use with `tauri::generate_handler![]`.
///
/// If you need more control over the command handler, you can use these
/// functions directly.
pub mod command_list {
    pub use crate::commands::{
        list_directory, open_external_link, open_file, open_folder, read_file, write_file,
    };
}
