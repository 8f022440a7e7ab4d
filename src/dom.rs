//! Element lookup and application of [`VisualState`] to the document.
//!
//! The server renders the markup; this layer only reconciles the well-known
//! classes and the root theme attribute against the projected visual state.
//! Every element is optional — a page without a sidebar or theme toggle still
//! boots, and the absent pieces degrade to logged no-ops.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::consts;
use crate::state::NavState;
use crate::visual::{BurgerGlyph, CollapseGlyph, VisualState};

/// Handles to the fixed page chrome the synchronizer touches.
pub struct Dom {
    document: Document,
    root: Option<Element>,
    sidebar: Option<Element>,
    collapse_btn: Option<Element>,
    collapse_icon: Option<Element>,
    mobile_btn: Option<Element>,
    mobile_icon: Option<Element>,
    overlay: Option<Element>,
    theme_btn: Option<Element>,
}

impl Dom {
    /// Look up the page chrome. `None` only when there is no document at all.
    #[must_use]
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let sidebar = query(&document, consts::SIDEBAR_SELECTOR);
        if sidebar.is_none() {
            log::debug!("no {} on this page", consts::SIDEBAR_SELECTOR);
        }
        let collapse_btn = document.get_element_by_id(consts::COLLAPSE_TOGGLE_ID);
        let collapse_icon = child_icon(collapse_btn.as_ref());
        let mobile_btn = query(&document, consts::MOBILE_TOGGLE_SELECTOR);
        let mobile_icon = child_icon(mobile_btn.as_ref());
        let overlay = document.get_element_by_id(consts::OVERLAY_ID);
        let theme_btn = document.get_element_by_id(consts::THEME_TOGGLE_ID);
        let root = document.document_element();
        Some(Self {
            document,
            root,
            sidebar,
            collapse_btn,
            collapse_icon,
            mobile_btn,
            mobile_icon,
            overlay,
            theme_btn,
        })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn collapse_btn(&self) -> Option<&Element> {
        self.collapse_btn.as_ref()
    }

    #[must_use]
    pub fn mobile_btn(&self) -> Option<&Element> {
        self.mobile_btn.as_ref()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&Element> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn theme_btn(&self) -> Option<&Element> {
        self.theme_btn.as_ref()
    }

    /// Reconcile sidebar classes, toggle glyphs, and the root theme attribute
    /// against a projected visual state. Idempotent: applying the same state
    /// twice leaves the document unchanged.
    pub fn apply(&self, visual: &VisualState) {
        if let Some(sidebar) = &self.sidebar {
            set_class(sidebar, consts::CLASS_COLLAPSED, visual.collapsed);
            set_class(sidebar, consts::CLASS_MOBILE_ACTIVE, visual.mobile_active);
        }
        if let Some(icon) = &self.collapse_icon {
            let right = visual.collapse_glyph == CollapseGlyph::Right;
            set_class(icon, consts::GLYPH_CHEVRON_RIGHT, right);
            set_class(icon, consts::GLYPH_CHEVRON_LEFT, !right);
        }
        if let Some(icon) = &self.mobile_icon {
            let back = visual.burger_glyph == BurgerGlyph::Back;
            set_class(icon, consts::GLYPH_BACKBURGER, back);
            set_class(icon, consts::GLYPH_FORWARDBURGER, !back);
        }
        if let Some(root) = &self.root {
            if root.set_attribute(consts::THEME_ATTR, visual.theme.as_str()).is_err() {
                log::warn!("failed to set {}", consts::THEME_ATTR);
            }
        }
    }

    /// Re-mark every navigation link from scratch: active iff its declared
    /// target equals the active URL. Links are queried per call because htmx
    /// may have swapped them since the last one.
    pub fn apply_active_links(&self, nav: &NavState) {
        for link in self.nav_links() {
            let active = nav_target(&link).is_some_and(|target| nav.is_match(&target));
            set_class(&link, consts::CLASS_ACTIVE, active);
            set_class(&link, consts::CLASS_ROUTER_ACTIVE, active);
        }
    }

    /// The current set of sidebar navigation links.
    #[must_use]
    pub fn nav_links(&self) -> Vec<Element> {
        query_all(&self.document, consts::NAV_LINK_SELECTOR)
    }
}

/// The path a navigation link declares, from `hx-get` or `data-href`.
#[must_use]
pub fn nav_target(link: &Element) -> Option<String> {
    consts::NAV_TARGET_ATTRS.iter().find_map(|attr| link.get_attribute(attr))
}

/// Add or remove a single class to match `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if result.is_err() {
        log::warn!("failed to toggle class {class}");
    }
}

/// First matching element, treating selector errors as absence.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            log::warn!("invalid selector {selector}");
            None
        }
    }
}

/// All matching elements.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector {selector}");
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    out
}

/// The glyph element inside a toggle button, if the button exists.
fn child_icon(button: Option<&Element>) -> Option<Element> {
    match button?.query_selector(consts::ICON_SELECTOR) {
        Ok(icon) => icon,
        Err(_) => None,
    }
}

/// Current viewport width in CSS pixels. A missing window reads as zero,
/// which renders the safe mobile layout.
#[must_use]
pub fn viewport_width() -> f64 {
    let Some(window) = web_sys::window() else { return 0.0 };
    match window.inner_width() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

/// Path component of the current page location.
#[must_use]
pub fn current_path() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().pathname() {
        Ok(path) => Some(path),
        Err(_) => None,
    }
}
