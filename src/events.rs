//! DOM and htmx event wiring.
//!
//! Every handler follows the same shape: run one core operation, perform any
//! storage write it requested, then re-project and apply visual state via
//! [`refresh`]. Handlers never touch classes directly, so they cannot drift
//! from the projection.
//!
//! The core is shared as `Rc<RefCell<_>>`: event dispatch is single-threaded
//! and handlers run to completion, so borrows never overlap across handlers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use web_sys::{Element, Event, EventTarget};

use crate::consts;
use crate::dom::{self, Dom};
use crate::storage;
use crate::sync::{self, Effect, ReloadComplete, SyncCore};
use crate::visual;

/// Attach a listener and leak the closure; listeners live for the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    closure.forget();
}

/// Perform the storage write an operation requested.
pub fn persist(effect: Effect) {
    match effect {
        Effect::SaveCollapsed(sidebar) => {
            storage::write(consts::KEY_SIDEBAR_COLLAPSED, sidebar.stored_str());
        }
        Effect::SaveTheme(theme) => storage::write(consts::KEY_THEME, theme.as_str()),
    }
}

/// Re-project the core's state at the current viewport width and apply it,
/// including active-link marks. The one and only way state reaches the DOM.
pub fn refresh(core: &SyncCore, dom: &Dom) {
    dom.apply(&core.visual(dom::viewport_width()));
    dom.apply_active_links(&core.nav);
}

/// Wire all listeners. Absent elements simply get no listener; the rest of
/// the page keeps working.
pub fn wire(core: &Rc<RefCell<SyncCore>>, dom: &Rc<Dom>) {
    if let Some(btn) = dom.collapse_btn() {
        let core = Rc::clone(core);
        let dom = Rc::clone(dom);
        listen(btn, "click", move |_| {
            let effect = core.borrow_mut().toggle_collapsed();
            persist(effect);
            refresh(&core.borrow(), &dom);
        });
    } else {
        log::debug!("no #{} on this page", consts::COLLAPSE_TOGGLE_ID);
    }

    if let Some(btn) = dom.mobile_btn() {
        let core = Rc::clone(core);
        let dom = Rc::clone(dom);
        listen(btn, "click", move |_| {
            core.borrow_mut().toggle_mobile_open();
            refresh(&core.borrow(), &dom);
        });
    }

    if let Some(overlay) = dom.overlay() {
        let core = Rc::clone(core);
        let dom = Rc::clone(dom);
        listen(overlay, "click", move |_| {
            core.borrow_mut().close_mobile();
            refresh(&core.borrow(), &dom);
        });
    }

    if let Some(btn) = dom.theme_btn() {
        let core = Rc::clone(core);
        let dom = Rc::clone(dom);
        listen(btn, "click", move |_| {
            let effect = core.borrow_mut().toggle_theme();
            persist(effect);
            refresh(&core.borrow(), &dom);
        });
    } else {
        log::debug!("no #{} on this page", consts::THEME_TOGGLE_ID);
    }

    wire_nav_links(core, dom);
    wire_resize(core, dom);
    wire_htmx(core, dom);
}

/// Clicking a nav link marks it active immediately, before htmx swaps the
/// content region, and closes the mobile sidebar on narrow viewports.
fn wire_nav_links(core: &Rc<RefCell<SyncCore>>, dom: &Rc<Dom>) {
    for link in dom.nav_links() {
        let core = Rc::clone(core);
        let dom = Rc::clone(dom);
        let clicked = link.clone();
        listen(&link, "click", move |_| {
            {
                let mut state = core.borrow_mut();
                if let Some(target) = dom::nav_target(&clicked) {
                    state.set_active(&target);
                }
                if !visual::is_desktop(dom::viewport_width()) {
                    state.close_mobile();
                }
            }
            refresh(&core.borrow(), &dom);
        });
    }
}

/// Resize events reconcile and re-apply. No debounce: the whole path is a
/// pure projection of current width, safe at any call rate.
fn wire_resize(core: &Rc<RefCell<SyncCore>>, dom: &Rc<Dom>) {
    let Some(window) = web_sys::window() else { return };
    let core = Rc::clone(core);
    let dom = Rc::clone(dom);
    listen(&window, "resize", move |_| {
        core.borrow_mut().reconcile_viewport(dom::viewport_width());
        refresh(&core.borrow(), &dom);
    });
}

/// Subscribe to htmx swap completions on `<body>`, where they bubble to.
fn wire_htmx(core: &Rc<RefCell<SyncCore>>, dom: &Rc<Dom>) {
    let Some(body) = dom.document().body() else {
        log::warn!("no <body>; htmx completion events not wired");
        return;
    };
    let core = Rc::clone(core);
    let dom = Rc::clone(dom);
    listen(&body, consts::HTMX_AFTER_REQUEST, move |event| {
        if let Some(reload) = reload_complete(&event) {
            core.borrow_mut().on_reload_complete(&reload);
            refresh(&core.borrow(), &dom);
        }
    });
}

/// Reduce an `htmx:afterRequest` event to a [`ReloadComplete`]. Events whose
/// detail doesn't carry a swap target element and a `pathInfo` are ignored.
fn reload_complete(event: &Event) -> Option<ReloadComplete> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    let target = field(&detail, "target")?;
    let target_region_id = target.dyn_ref::<Element>()?.id();
    let path_info = field(&detail, "pathInfo")?;
    let json = match js_sys::JSON::stringify(&path_info) {
        Ok(text) => String::from(text),
        Err(_) => return None,
    };
    let loaded_path = sync::parse_path_info(&json)?;
    Some(ReloadComplete { target_region_id, loaded_path })
}

/// A non-null, non-undefined property of a JS object.
fn field(obj: &JsValue, key: &str) -> Option<JsValue> {
    match js_sys::Reflect::get(obj, &JsValue::from_str(key)) {
        Ok(value) if !value.is_null() && !value.is_undefined() => Some(value),
        _ => None,
    }
}
