//! The UI state synchronizer core.
//!
//! `SyncCore` is the single source of truth for sidebar, theme, and active
//! navigation link. All logic that doesn't touch the DOM lives here, separated
//! from the browser layer so it can be tested without WASM (the same split as
//! a core/engine pair). Operations mutate state and report any required
//! storage write as an [`Effect`]; the caller re-projects visual state
//! afterwards via [`SyncCore::visual`].
//!
//! Everything runs on the single-threaded event-dispatch path: handlers run
//! to completion, so no operation can observe another mid-mutation.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde::Deserialize;

use crate::consts::CONTENT_REGION_ID;
use crate::state::{NavState, SidebarState, Theme};
use crate::visual::{self, VisualState};

/// A durable-storage write requested by an operation. The browser layer
/// performs it; in tests it is asserted on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write `sidebar-collapsed` as `"true"`/`"false"`.
    SaveCollapsed(SidebarState),
    /// Write `theme` as `"light"`/`"dark"`.
    SaveTheme(Theme),
}

/// Completion notification from the partial-page-reload subsystem (htmx),
/// reduced to the two fields the synchronizer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadComplete {
    /// Id of the region the swap targeted.
    pub target_region_id: String,
    /// Path that was just loaded into that region.
    pub loaded_path: String,
}

/// The `pathInfo` object on an htmx `afterRequest` event detail.
#[derive(Debug, Deserialize)]
pub struct PathInfo {
    #[serde(rename = "requestPath")]
    pub request_path: String,
}

/// Parse the JSON form of an htmx event's `detail.pathInfo`. Malformed or
/// unexpected payloads yield `None`; the event is then ignored.
#[must_use]
pub fn parse_path_info(json: &str) -> Option<String> {
    match serde_json::from_str::<PathInfo>(json) {
        Ok(info) => Some(info.request_path),
        Err(err) => {
            log::debug!("ignoring unparseable htmx pathInfo: {err}");
            None
        }
    }
}

/// Persisted and derived UI state, with every operation the UI exposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncCore {
    pub sidebar: SidebarState,
    pub theme: Theme,
    pub nav: NavState,
}

impl SyncCore {
    /// Startup contract: restore persisted state (absent or unreadable
    /// storage falls back to expanded/light) and derive the initial active
    /// link from the page path.
    #[must_use]
    pub fn boot(
        stored_collapsed: Option<&str>,
        stored_theme: Option<&str>,
        initial_path: Option<&str>,
    ) -> Self {
        let mut core = Self {
            sidebar: SidebarState::from_stored(stored_collapsed),
            theme: Theme::from_stored(stored_theme),
            nav: NavState::default(),
        };
        if let Some(path) = initial_path {
            core.nav.set_active(path);
        }
        log::debug!(
            "boot: collapsed={} theme={} path={:?}",
            core.sidebar.collapsed,
            core.theme.as_str(),
            core.nav.active_url
        );
        core
    }

    /// Desktop collapse toggle. Idempotent pair: two calls restore both the
    /// state and the stored string.
    pub fn toggle_collapsed(&mut self) -> Effect {
        self.sidebar.collapsed = !self.sidebar.collapsed;
        Effect::SaveCollapsed(self.sidebar)
    }

    /// Mobile slide-in toggle. Ephemeral; never persisted.
    pub fn toggle_mobile_open(&mut self) {
        self.sidebar.mobile_open = !self.sidebar.mobile_open;
    }

    /// Close the mobile sidebar (overlay click, or a nav-link click below the
    /// breakpoint).
    pub fn close_mobile(&mut self) {
        self.sidebar.mobile_open = false;
    }

    /// Theme toggle: strict two-value flip, always persisted.
    pub fn toggle_theme(&mut self) -> Effect {
        self.theme = self.theme.toggled();
        Effect::SaveTheme(self.theme)
    }

    /// Viewport reconciliation, run on every resize event.
    ///
    /// Crossing up to desktop resets the ephemeral `mobile_open`. Below the
    /// breakpoint nothing here mutates: suppressing the collapse visual on
    /// mobile is the projection's job, and the stored preference must survive.
    /// Pure in `(width, state)` with no accumulation, so arbitrary call rates
    /// are safe.
    pub fn reconcile_viewport(&mut self, width: f64) {
        if visual::is_desktop(width) {
            self.sidebar.mobile_open = false;
        }
    }

    /// Mark the navigation link whose declared target equals `url` active.
    /// Match state is recomputed from scratch on every call, so repeated
    /// calls never accumulate stale marks.
    pub fn set_active(&mut self, url: &str) {
        self.nav.set_active(url);
    }

    /// React to a partial-page-reload completion. Only swaps into the main
    /// content region move the active link; swaps targeting any other region
    /// are ignored.
    pub fn on_reload_complete(&mut self, event: &ReloadComplete) {
        if event.target_region_id == CONTENT_REGION_ID {
            self.set_active(&event.loaded_path);
        } else {
            log::debug!(
                "swap into #{} ignored for active-link tracking",
                event.target_region_id
            );
        }
    }

    /// Project the current state for the given viewport width.
    #[must_use]
    pub fn visual(&self, width: f64) -> VisualState {
        visual::visual_state(self.sidebar, self.theme, width)
    }
}
