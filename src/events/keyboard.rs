use crate::input::{action_for_key, KeyAction};
use crate::overlay;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, state: &Rc<RefCell<AppState>>) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let mut st = state.borrow_mut();
    match action {
        KeyAction::NextMagazine => st.step_magazine(1),
        KeyAction::PreviousMagazine => st.step_magazine(-1),
        KeyAction::FlipForward => {
            if st.book.flip_forward() {
                log::info!("[book] page {}", st.book.current());
            }
        }
        KeyAction::FlipBack => {
            if st.book.flip_back() {
                log::info!("[book] page {}", st.book.current());
            }
        }
        KeyAction::Reset => st.reset_view(),
        KeyAction::ToggleHint => {
            if let Some(document) = web::window().and_then(|w| w.document()) {
                overlay::toggle_hint(&document);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(state: Rc<RefCell<AppState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &state);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
