//! Plain state types for the admin UI: sidebar layout, theme, and the active
//! navigation link.
//!
//! These types are deliberately dumb. The rules for how they combine with the
//! viewport live in [`crate::visual`]; the operations that mutate them live in
//! [`crate::sync`].

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Color theme, applied as the `data-theme` attribute on `<html>`.
///
/// Exactly two values. There is no "system" state: an absent or unrecognized
/// stored value means [`Theme::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The stored / attribute form of this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` (including `None`,
    /// i.e. storage empty or unavailable) falls back to light.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Sidebar layout state.
///
/// `collapsed` is the persisted desktop preference; it only has a visual
/// effect at or above the breakpoint, but the stored value survives viewport
/// changes untouched. `mobile_open` is ephemeral, never persisted, and only
/// has a visual effect below the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile_open: bool,
}

impl SidebarState {
    /// Restore from the stored `sidebar-collapsed` value. Only the exact
    /// string `"true"` restores a collapsed sidebar; anything else (including
    /// absent or unreadable storage) yields the default expanded state.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        Self { collapsed: stored == Some("true"), mobile_open: false }
    }

    /// The string form `collapsed` is persisted under.
    #[must_use]
    pub fn stored_str(self) -> &'static str {
        if self.collapsed { "true" } else { "false" }
    }
}

/// The navigation link currently marked active.
///
/// Derived state: recomputed from the page location at boot, from the clicked
/// link's declared target, and from htmx swap completions. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub active_url: Option<String>,
}

impl NavState {
    /// Replace the active URL. Each call supersedes the previous one
    /// entirely; match state is always recomputed from scratch against the
    /// new value.
    pub fn set_active(&mut self, url: &str) {
        self.active_url = Some(url.to_owned());
    }

    /// Whether a link declaring `target` should be marked active.
    ///
    /// Strict string equality against the active URL. No trailing-slash
    /// tolerance, no query stripping — a link matches exactly or not at all.
    #[must_use]
    pub fn is_match(&self, target: &str) -> bool {
        self.active_url.as_deref() == Some(target)
    }
}
