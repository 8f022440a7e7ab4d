//! Pure projection of UI state to visual state.
//!
//! Every entry point — boot, toggles, resize, navigation — derives the
//! on-screen appearance through [`visual_state`] and nothing else, so the
//! breakpoint rules live in exactly one place. The projection is a pure
//! function of `(state, viewport width)`: calling it repeatedly with the same
//! inputs yields the same output, which is what makes un-debounced resize
//! handling safe.

#[cfg(test)]
#[path = "visual_test.rs"]
mod visual_test;

use crate::consts::BREAKPOINT;
use crate::state::{SidebarState, Theme};

/// Direction of the desktop collapse-toggle chevron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseGlyph {
    /// Sidebar expanded; chevron points left (collapse direction).
    Left,
    /// Sidebar collapsed; chevron points right (expand direction).
    Right,
}

/// Icon on the mobile sidebar toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurgerGlyph {
    /// Sidebar hidden; icon invites opening.
    Forward,
    /// Sidebar slid in; icon invites closing.
    Back,
}

/// The complete rendering contract: which well-known classes are present and
/// what the root theme attribute says. The DOM layer applies this verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualState {
    /// `is-collapsed` on the sidebar. Only ever set at desktop widths.
    pub collapsed: bool,
    /// `is-mobile-active` on the sidebar. Only ever set below the breakpoint.
    pub mobile_active: bool,
    pub collapse_glyph: CollapseGlyph,
    pub burger_glyph: BurgerGlyph,
    pub theme: Theme,
}

/// Whether a viewport width counts as desktop.
#[must_use]
pub fn is_desktop(width: f64) -> bool {
    width >= BREAKPOINT
}

/// Project state onto the visual tree for the given viewport width.
///
/// Desktop: the persisted `collapsed` preference applies, the mobile slide-in
/// is forced off. Mobile: the collapse preference is visually suppressed (its
/// stored value is untouched) and `mobile_open` decides sidebar visibility.
/// The two flags are therefore never both set.
#[must_use]
pub fn visual_state(sidebar: SidebarState, theme: Theme, width: f64) -> VisualState {
    let desktop = is_desktop(width);
    let collapsed = desktop && sidebar.collapsed;
    let mobile_active = !desktop && sidebar.mobile_open;
    VisualState {
        collapsed,
        mobile_active,
        collapse_glyph: if collapsed { CollapseGlyph::Right } else { CollapseGlyph::Left },
        burger_glyph: if mobile_active { BurgerGlyph::Back } else { BurgerGlyph::Forward },
        theme,
    }
}
