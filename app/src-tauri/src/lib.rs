//! Vellum Tauri Application Library
//!
//! This module builds the single hardened editor window and wires the
//! mediated operation surface into it.

use shell::commands::AppState;
use shell::config::ShellConfig;
use shell::hardening::{self, NavigationPolicy};
use tauri::webview::WebviewWindowBuilder;
use tauri::WebviewUrl;
use url::Url;

/// Origin the main window is pinned to for its whole lifetime.
///
/// Tauri serves the bundled entry document from its own app origin; any
/// top-level navigation to a different origin is cancelled by the policy.
fn entry_origin() -> Url {
    let origin = if cfg!(windows) {
        "http://tauri.localhost"
    } else {
        "tauri://localhost"
    };
    Url::parse(origin).expect("static entry origin must parse")
}

/// Configure and run the Tauri application.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = ShellConfig::load_or_default().unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e:#}");
        ShellConfig::default()
    });
    init_tracing(&config);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new())
        .setup(move |app| {
            let mut builder =
                WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                    .title("Vellum")
                    .inner_size(config.window.width, config.window.height);

            if let Some((r, g, b)) = config.window.background_rgb() {
                builder = builder.background_color(tauri::window::Color(r, g, b, 255));
            }

            let policy = NavigationPolicy::pin_to(entry_origin());
            let window = hardening::harden(builder, policy).build()?;
            tracing::info!(label = window.label(), "editor window created");

            Ok(())
        })
        .invoke_handler(shell::generate_handler!())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn init_tracing(config: &ShellConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
