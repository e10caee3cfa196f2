//! # Vellum Trust Boundary
//!
//! This crate is the authorization layer between Vellum's privileged
//! process and its untrusted editor surface. Every filesystem operation the
//! surface requests is decided here before any I/O runs.
//!
//! ## Overview
//!
//! The boundary is built from four small pieces:
//!
//! - **Path Canonicalization**: resolve a requested path to its real,
//!   symlink-free absolute form, or report that it does not resolve
//! - **Trust State**: at most one workspace root plus a set of individually
//!   approved standalone files, held in memory for the session only
//! - **Access Decisions**: allow an operation exactly when its resolved
//!   subject falls inside a trusted scope
//! - **Grant Mediation**: the two user-driven operations that may mutate
//!   trust state (folder grant and standalone file grant)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Untrusted Surface              │  requests only
//! ├─────────────────────────────────────────┤
//! │       Mediated Operation Surface        │  (crates/shell)
//! ├─────────────────────────────────────────┤
//! │         Access Decision Engine          │  decide()
//! ├────────────────────┬────────────────────┤
//! │  Canonicalization  │    Trust State     │  resolve() / TrustStore
//! └────────────────────┴────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use trust::{Operation, TrustStore};
//!
//! let store = TrustStore::new();
//!
//! // The user picked a project folder; everything under it is now in scope.
//! store.grant_workspace(Path::new("/home/user/project"));
//!
//! match store.authorize("/home/user/project/src/main.rs", Operation::Read) {
//!     Ok(subject) => println!("allowed, resolved to {}", subject.display()),
//!     Err(kind) => eprintln!("refused: {kind}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`canon`]: Path resolution to real, symlink-free form
//! - [`state`]: Trust state and grant mediation
//! - [`decision`]: The access decision engine
//! - [`error`]: Error kinds surfaced across the boundary

pub mod canon;
pub mod decision;
pub mod error;
pub mod state;

pub use canon::{resolve, resolve_for_write, ResolvedSubject};
pub use decision::{decide, AccessRequest, Operation};
pub use error::{Result, TrustError};
pub use state::{TrustStore, TrustedScopes};
