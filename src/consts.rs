//! Shared constants: the responsive breakpoint, storage keys, and the
//! well-known class/selector names that form the rendering contract with the
//! server-rendered markup and its CSS.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width (CSS pixels) at or above which the layout is "desktop".
/// Below it the sidebar hides and slides in via the mobile toggle.
pub const BREAKPOINT: f64 = 1024.0;

// ── Durable storage keys ────────────────────────────────────────

/// `localStorage` key for the persisted sidebar collapse flag (`"true"`/`"false"`).
pub const KEY_SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";

/// `localStorage` key for the persisted theme (`"light"`/`"dark"`).
pub const KEY_THEME: &str = "theme";

// ── htmx integration ────────────────────────────────────────────

/// Completion event fired by htmx after a partial-page swap.
pub const HTMX_AFTER_REQUEST: &str = "htmx:afterRequest";

/// Id of the main content region. Only swaps targeting this region move the
/// active navigation link.
pub const CONTENT_REGION_ID: &str = "content";

// ── Selectors ───────────────────────────────────────────────────

pub const SIDEBAR_SELECTOR: &str = ".admin-sidebar";
pub const NAV_LINK_SELECTOR: &str = ".admin-sidebar .menu-list a";
pub const COLLAPSE_TOGGLE_ID: &str = "sidebar-toggle";
pub const MOBILE_TOGGLE_SELECTOR: &str = ".jb-aside-mobile-toggle";
pub const OVERLAY_ID: &str = "sidebar-overlay";
pub const THEME_TOGGLE_ID: &str = "theme-toggler";

/// Glyph element inside a toggle button.
pub const ICON_SELECTOR: &str = ".mdi";

// ── Class names ─────────────────────────────────────────────────

pub const CLASS_COLLAPSED: &str = "is-collapsed";
pub const CLASS_MOBILE_ACTIVE: &str = "is-mobile-active";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_ROUTER_ACTIVE: &str = "router-link-active";
pub const CLASS_HIDDEN: &str = "is-hidden";
pub const CLASS_CLIPPED: &str = "is-clipped";

/// Attribute on `<html>` carrying the current theme.
pub const THEME_ATTR: &str = "data-theme";

/// Attributes a navigation link declares its target path in, in precedence
/// order.
pub const NAV_TARGET_ATTRS: [&str; 2] = ["hx-get", "data-href"];

// ── Glyph class names ───────────────────────────────────────────

pub const GLYPH_CHEVRON_LEFT: &str = "mdi-chevron-left";
pub const GLYPH_CHEVRON_RIGHT: &str = "mdi-chevron-right";
pub const GLYPH_FORWARDBURGER: &str = "mdi-forwardburger";
pub const GLYPH_BACKBURGER: &str = "mdi-backburger";
pub const GLYPH_PLUS: &str = "mdi-plus";
pub const GLYPH_MINUS: &str = "mdi-minus";
pub const GLYPH_DOTS: &str = "mdi-dots-vertical";
pub const GLYPH_CLOSE: &str = "mdi-close";
