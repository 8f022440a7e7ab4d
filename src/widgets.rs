//! Stateless widget glue: submenus, navbar hamburger, modals, notifications.
//!
//! None of these hold state — each click maps directly to a class toggle on
//! the clicked element's neighborhood, so there is nothing to synchronize or
//! persist and no involvement with [`crate::sync::SyncCore`].

use web_sys::{Document, Element};

use crate::consts;
use crate::dom::{query_all, set_class};
use crate::events::listen;

pub fn init(document: &Document) {
    init_submenus(document);
    init_navbar_toggles(document);
    init_modals(document);
    init_notifications(document);
}

fn toggle_class(el: &Element, class: &str) {
    if el.class_list().toggle(class).is_err() {
        log::warn!("failed to toggle class {class}");
    }
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(_) => None,
    }
}

/// Sidebar submenu headers expand/collapse their parent entry and flip the
/// plus/minus glyph.
fn init_submenus(document: &Document) {
    for header in query_all(document, ".menu.is-menu-main .has-dropdown-icon") {
        let clicked = header.clone();
        listen(&header, "click", move |_| {
            if let Some(parent) = clicked.parent_element() {
                toggle_class(&parent, consts::CLASS_ACTIVE);
            }
            if let Ok(Some(icon)) = clicked.query_selector(".dropdown-icon .mdi") {
                toggle_class(&icon, consts::GLYPH_PLUS);
                toggle_class(&icon, consts::GLYPH_MINUS);
            }
        });
    }
}

/// Navbar hamburger: shows/hides the element named by `data-target` and flips
/// the dots/close glyph.
fn init_navbar_toggles(document: &Document) {
    for toggle in query_all(document, ".jb-navbar-menu-toggle") {
        let doc = document.clone();
        let clicked = toggle.clone();
        listen(&toggle, "click", move |_| {
            if let Some(id) = clicked.get_attribute("data-target") {
                if let Some(menu) = doc.get_element_by_id(&id) {
                    toggle_class(&menu, consts::CLASS_ACTIVE);
                }
            }
            if let Ok(Some(icon)) = clicked.query_selector(".icon .mdi") {
                toggle_class(&icon, consts::GLYPH_DOTS);
                toggle_class(&icon, consts::GLYPH_CLOSE);
            }
        });
    }
}

/// Modal open/close. Opening also clips the document root so the page behind
/// the modal stops scrolling; closing releases it.
fn init_modals(document: &Document) {
    for trigger in query_all(document, ".jb-modal") {
        let doc = document.clone();
        let clicked = trigger.clone();
        listen(&trigger, "click", move |_| {
            let Some(id) = clicked.get_attribute("data-target") else { return };
            let Some(modal) = doc.get_element_by_id(&id) else { return };
            set_class(&modal, consts::CLASS_ACTIVE, true);
            if let Some(root) = doc.document_element() {
                set_class(&root, consts::CLASS_CLIPPED, true);
            }
        });
    }

    for button in query_all(document, ".jb-modal-close") {
        let doc = document.clone();
        let clicked = button.clone();
        listen(&button, "click", move |_| {
            if let Some(modal) = closest(&clicked, ".modal") {
                set_class(&modal, consts::CLASS_ACTIVE, false);
            }
            if let Some(root) = doc.document_element() {
                set_class(&root, consts::CLASS_CLIPPED, false);
            }
        });
    }
}

/// Notification dismiss buttons hide their enclosing notification.
fn init_notifications(document: &Document) {
    for button in query_all(document, ".jb-notification-dismiss") {
        let clicked = button.clone();
        listen(&button, "click", move |_| {
            if let Some(notification) = closest(&clicked, ".notification") {
                set_class(&notification, consts::CLASS_HIDDEN, true);
            }
        });
    }
}
