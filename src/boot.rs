//! Startup sequence: restore persisted state, apply it, wire listeners.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts;
use crate::dom::{self, Dom};
use crate::events;
use crate::storage;
use crate::sync::SyncCore;
use crate::widgets;

/// Whether a `document.readyState` value means the DOM is still parsing.
/// Both `"interactive"` and `"complete"` mean the tree is ready to wire.
#[must_use]
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Initialize now, or on `DOMContentLoaded` if the document is still parsing.
pub fn init_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; running outside a browser");
        return;
    };
    if still_parsing(&document.ready_state()) {
        events::listen(&document, "DOMContentLoaded", |_| init());
    } else {
        init();
    }
}

/// The startup contract. Persisted state is read once (absent or unavailable
/// storage falls back to expanded/light), the initial visual state is applied
/// for the current viewport and page path, and all listeners are wired.
/// Missing optional elements never abort initialization.
pub fn init() {
    let Some(dom) = Dom::new() else {
        return;
    };
    let dom = Rc::new(dom);
    let core = SyncCore::boot(
        storage::read(consts::KEY_SIDEBAR_COLLAPSED).as_deref(),
        storage::read(consts::KEY_THEME).as_deref(),
        dom::current_path().as_deref(),
    );
    let core = Rc::new(RefCell::new(core));
    events::refresh(&core.borrow(), &dom);
    events::wire(&core, &dom);
    widgets::init(dom.document());
    log::info!("argus-ui ready");
}
