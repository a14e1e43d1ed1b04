use crate::constants::WHEEL_DELTA_SCALE;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel input accumulates into the carousel's scroll session. Scrolling
/// down drives the raw value negative, which advances the carousel.
pub fn wire_wheel(state: Rc<RefCell<AppState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta = -(ev.delta_y() as f32) * WHEEL_DELTA_SCALE;
        state.borrow_mut().session.push_delta(delta);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
