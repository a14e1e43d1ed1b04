//! Two-way sync of the selected skill with the `?skill=` query parameter.
//!
//! Writes only happen for user-driven selection changes (drained from the
//! stack each frame); values read back from the URL are applied as external
//! selections, so neither direction echoes into the other.

use crate::constants::SELECTION_QUERY_KEY;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn read_selection() -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params
        .get(SELECTION_QUERY_KEY)
        .filter(|s| !s.trim().is_empty())
}

pub fn write_selection(selection: Option<&str>) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web::Url::new(&href) else {
        return;
    };
    let params = url.search_params();
    match selection {
        Some(id) => params.set(SELECTION_QUERY_KEY, id),
        None => params.delete(SELECTION_QUERY_KEY),
    }
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href())) {
            log::warn!("[url] replaceState failed: {:?}", e);
        }
    }
}

/// Back/forward navigation re-applies whatever the URL now says.
pub fn wire_popstate(state: Rc<RefCell<AppState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let selection = read_selection();
        state
            .borrow_mut()
            .apply_external_query(selection.as_deref());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
