//! Webview surface hardening.
//!
//! The rendered surface is untrusted; these controls remove its ability to
//! escalate through the window system itself. Three capabilities are denied
//! at window creation time: opening new top-level windows, navigating the
//! existing window away from the app's entry document, and attaching nested
//! content frames. A fully compromised surface is then still confined to
//! the mediated command set.

use tauri::webview::WebviewWindowBuilder;
use tauri::{Manager, Runtime};
use url::Url;

/// Decides which top-level navigations the webview may perform.
///
/// Only the entry document's own origin is allowed. That permits the
/// initial load and in-document fragment changes while cancelling every
/// redirect to remote or other local content.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    entry: Url,
}

impl NavigationPolicy {
    /// Pin navigation to the origin of the given entry document URL.
    pub fn pin_to(entry: Url) -> Self {
        Self { entry }
    }

    /// Whether a requested top-level navigation may proceed.
    pub fn allows(&self, target: &Url) -> bool {
        let allowed = target.scheme() == self.entry.scheme()
            && target.host() == self.entry.host()
            && target.port() == self.entry.port();
        if !allowed {
            tracing::warn!(target = %target, "cancelled navigation away from entry document");
        }
        allowed
    }
}

/// Runs before any surface script; removes the escalation primitives the
/// navigation handler cannot reach. `window.open` becomes a no-op and
/// frame-capable elements are stripped as soon as they attach.
pub const SURFACE_LOCKDOWN: &str = r#"
(function () {
  "use strict";
  Object.defineProperty(window, "open", {
    value: function () { return null; },
    writable: false,
    configurable: false
  });
  var FRAME_TAGS = ["IFRAME", "FRAME", "EMBED", "OBJECT", "PORTAL"];
  new MutationObserver(function (mutations) {
    for (var i = 0; i < mutations.length; i++) {
      var added = mutations[i].addedNodes;
      for (var j = 0; j < added.length; j++) {
        var node = added[j];
        if (node.tagName && FRAME_TAGS.indexOf(node.tagName) !== -1) {
          node.remove();
        }
      }
    }
  }).observe(document, { childList: true, subtree: true });
})();
"#;

/// Apply the full hardening set to a window under construction.
///
/// Must run before `build()`; the navigation handler and the lockdown
/// script can only be installed while the webview is being created.
pub fn harden<'a, R, M>(
    builder: WebviewWindowBuilder<'a, R, M>,
    policy: NavigationPolicy,
) -> WebviewWindowBuilder<'a, R, M>
where
    R: Runtime,
    M: Manager<R>,
{
    builder
        .initialization_script(SURFACE_LOCKDOWN)
        .on_navigation(move |url| policy.allows(url))
}
