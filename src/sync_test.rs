use super::*;

const DESKTOP: f64 = 1280.0;
const MOBILE: f64 = 600.0;

fn reload(region: &str, path: &str) -> ReloadComplete {
    ReloadComplete { target_region_id: region.to_owned(), loaded_path: path.to_owned() }
}

// --- Boot ---

#[test]
fn boot_empty_storage_yields_defaults() {
    let core = SyncCore::boot(None, None, Some("/nowhere"));
    assert!(!core.sidebar.collapsed);
    assert!(!core.sidebar.mobile_open);
    assert_eq!(core.theme, Theme::Light);
    // The path matches no link; is_match is simply false for everything else.
    assert!(core.nav.is_match("/nowhere"));
    assert!(!core.nav.is_match("/admin"));
}

#[test]
fn boot_without_path_marks_nothing_active() {
    let core = SyncCore::boot(None, None, None);
    assert_eq!(core.nav.active_url, None);
}

#[test]
fn boot_collapsed_applies_on_desktop() {
    let core = SyncCore::boot(Some("true"), None, None);
    assert!(core.visual(DESKTOP).collapsed);
}

#[test]
fn boot_collapsed_suppressed_on_mobile() {
    // Same stored state, narrow viewport: the visual is not applied but the
    // state itself still remembers the preference.
    let core = SyncCore::boot(Some("true"), None, None);
    assert!(!core.visual(MOBILE).collapsed);
    assert!(core.sidebar.collapsed);
}

#[test]
fn boot_restores_dark_theme() {
    let core = SyncCore::boot(None, Some("dark"), None);
    assert_eq!(core.theme, Theme::Dark);
    assert_eq!(core.visual(DESKTOP).theme, Theme::Dark);
}

// --- Collapse toggle ---

#[test]
fn toggle_collapsed_flips_and_persists() {
    let mut core = SyncCore::default();
    let effect = core.toggle_collapsed();
    assert!(core.sidebar.collapsed);
    assert_eq!(effect, Effect::SaveCollapsed(core.sidebar));
    assert_eq!(core.sidebar.stored_str(), "true");
}

#[test]
fn toggle_collapsed_twice_restores_state_and_stored_string() {
    let mut core = SyncCore::boot(Some("false"), None, None);
    let before = core.sidebar;
    core.toggle_collapsed();
    let effect = core.toggle_collapsed();
    assert_eq!(core.sidebar, before);
    assert_eq!(effect, Effect::SaveCollapsed(before));
    assert_eq!(core.sidebar.stored_str(), "false");
}

#[test]
fn toggle_collapsed_updates_glyph() {
    let mut core = SyncCore::default();
    core.toggle_collapsed();
    assert_eq!(core.visual(DESKTOP).collapse_glyph, crate::visual::CollapseGlyph::Right);
    core.toggle_collapsed();
    assert_eq!(core.visual(DESKTOP).collapse_glyph, crate::visual::CollapseGlyph::Left);
}

// --- Mobile toggle ---

#[test]
fn toggle_mobile_open_is_independent_of_collapsed() {
    let mut core = SyncCore::boot(Some("true"), None, None);
    core.toggle_mobile_open();
    assert!(core.sidebar.mobile_open);
    assert!(core.sidebar.collapsed);
    core.toggle_mobile_open();
    assert!(!core.sidebar.mobile_open);
}

#[test]
fn close_mobile_is_idempotent() {
    let mut core = SyncCore::default();
    core.toggle_mobile_open();
    core.close_mobile();
    core.close_mobile();
    assert!(!core.sidebar.mobile_open);
}

// --- Theme toggle ---

#[test]
fn toggle_theme_alternates_and_persists() {
    let mut core = SyncCore::default();
    assert_eq!(core.toggle_theme(), Effect::SaveTheme(Theme::Dark));
    assert_eq!(core.toggle_theme(), Effect::SaveTheme(Theme::Light));
    assert_eq!(core.theme, Theme::Light);
}

// --- Viewport reconciliation ---

#[test]
fn crossing_up_clears_mobile_open() {
    let mut core = SyncCore::default();
    core.toggle_mobile_open();
    core.reconcile_viewport(DESKTOP);
    assert!(!core.sidebar.mobile_open);
}

#[test]
fn crossing_up_restores_stored_collapse() {
    let mut core = SyncCore::boot(Some("true"), None, None);
    core.reconcile_viewport(MOBILE);
    assert!(!core.visual(MOBILE).collapsed);
    core.reconcile_viewport(DESKTOP);
    assert!(core.visual(DESKTOP).collapsed);
}

#[test]
fn crossing_down_never_mutates_persisted_collapse() {
    let mut core = SyncCore::boot(Some("true"), None, None);
    core.reconcile_viewport(MOBILE);
    assert!(core.sidebar.collapsed);
    assert_eq!(core.sidebar.stored_str(), "true");
}

#[test]
fn crossing_down_leaves_mobile_open_as_is() {
    let mut core = SyncCore::default();
    core.toggle_mobile_open();
    core.reconcile_viewport(MOBILE);
    assert!(core.sidebar.mobile_open);
}

#[test]
fn reconcile_is_idempotent_at_any_width() {
    for width in [MOBILE, DESKTOP] {
        let mut once = SyncCore::boot(Some("true"), Some("dark"), None);
        once.toggle_mobile_open();
        let mut twice = once.clone();
        once.reconcile_viewport(width);
        twice.reconcile_viewport(width);
        twice.reconcile_viewport(width);
        assert_eq!(once.visual(width), twice.visual(width));
        assert_eq!(once, twice);
    }
}

// --- Active link ---

#[test]
fn set_active_marks_exact_matches_only() {
    let mut core = SyncCore::default();
    let targets = ["/admin", "/admin/users", "/admin/users/", "/settings"];
    core.set_active("/admin/users");
    let marked: Vec<bool> = targets.iter().map(|t| core.nav.is_match(t)).collect();
    assert_eq!(marked, [false, true, false, false]);
}

#[test]
fn set_active_with_no_matching_target() {
    let mut core = SyncCore::default();
    core.set_active("/does-not-exist");
    for target in ["/admin", "/settings"] {
        assert!(!core.nav.is_match(target));
    }
}

#[test]
fn set_active_repeated_calls_leave_no_stale_marks() {
    let mut core = SyncCore::default();
    core.set_active("/a");
    core.set_active("/b");
    core.set_active("/c");
    assert!(!core.nav.is_match("/a"));
    assert!(!core.nav.is_match("/b"));
    assert!(core.nav.is_match("/c"));
}

// --- Partial-reload completion ---

#[test]
fn content_swap_moves_active_link() {
    let mut core = SyncCore::boot(None, None, Some("/admin"));
    core.on_reload_complete(&reload("content", "/admin/users"));
    assert!(core.nav.is_match("/admin/users"));
    assert!(!core.nav.is_match("/admin"));
}

#[test]
fn non_content_swap_is_ignored() {
    let mut core = SyncCore::boot(None, None, Some("/admin"));
    core.on_reload_complete(&reload("sidebar", "/x"));
    assert_eq!(core.nav.active_url.as_deref(), Some("/admin"));
}

#[test]
fn click_then_completion_with_same_path_is_a_no_op() {
    // The click handler fires first with the link's declared target; the swap
    // completion then carries the same path and must not change anything.
    let mut core = SyncCore::boot(None, None, Some("/admin"));
    core.set_active("/admin/users");
    let after_click = core.clone();
    core.on_reload_complete(&reload("content", "/admin/users"));
    assert_eq!(core, after_click);
}

// --- htmx pathInfo parsing ---

#[test]
fn parse_path_info_extracts_request_path() {
    let json = r#"{"requestPath":"/admin/users","finalRequestPath":"/admin/users"}"#;
    assert_eq!(parse_path_info(json).as_deref(), Some("/admin/users"));
}

#[test]
fn parse_path_info_rejects_malformed_payloads() {
    assert_eq!(parse_path_info("not json"), None);
    assert_eq!(parse_path_info("{}"), None);
    assert_eq!(parse_path_info(r#"{"requestPath":7}"#), None);
}
