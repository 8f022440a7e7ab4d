//! Client-side UI layer for the Argus admin panel.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The admin
//! pages themselves are server-rendered and swapped in place by htmx; this
//! crate owns everything that happens between swaps: sidebar collapse/expand,
//! the mobile slide-in sidebar, light/dark theme, active navigation link
//! tracking, and the small stateless widgets (submenus, navbar hamburger,
//! modals, notification dismissal).
//!
//! All persisted and derived UI state lives in one place, [`sync::SyncCore`],
//! which is pure and tested natively. The browser-facing modules translate DOM
//! events into core operations and project the core's [`visual::VisualState`]
//! back onto class lists. There is exactly one projection function, invoked
//! from every entry point, so handlers cannot drift apart.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sync`] | The synchronizer core and its [`sync::Effect`] outputs |
//! | [`state`] | Plain state types: sidebar, theme, active nav link |
//! | [`visual`] | Pure projection of state + viewport width to visual state |
//! | [`consts`] | Breakpoint, storage keys, class and selector names |
//! | [`storage`] | `localStorage` access that degrades to defaults |
//! | [`dom`] | Element lookup and visual-state application |
//! | [`events`] | DOM and htmx event wiring |
//! | [`widgets`] | Stateless class-toggle widgets |
//! | [`boot`] | Startup: restore state, apply, wire listeners |

pub mod boot;
pub mod consts;
pub mod dom;
pub mod events;
pub mod state;
pub mod storage;
pub mod sync;
pub mod visual;
pub mod widgets;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point. Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A second instantiation on the same page already installed a logger.
    }
    log::info!("argus-ui starting");
    boot::init_when_ready();
}
