use crate::camera;
use crate::constants::{CAMERA_Z, PICK_SPHERE_RADIUS};
use crate::input;
use crate::state::AppState;
use folio_core::{DragGesture, DragTracker, Gesture, SelectOutcome};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub drag: Rc<RefCell<DragTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag
            .borrow_mut()
            .begin(ev.time_stamp(), input::pointer_client_px(&ev));
        w.state.borrow_mut().drag_scroll.reset();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Vertical drags follow the carousel once they leave tap range; the
        // gesture class itself is only decided on release.
        let (delta, displacement) = {
            let mut drag = w.drag.borrow_mut();
            let Some(delta) = drag.update(input::pointer_client_px(&ev)) else {
                return;
            };
            (delta, drag.displacement().unwrap_or(delta))
        };
        w.state.borrow_mut().drag_moved(delta, displacement);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let gesture = w
            .drag
            .borrow_mut()
            .end(ev.time_stamp(), input::pointer_client_px(&ev));
        if let Some(drag) = gesture {
            let px = input::pointer_canvas_px(&ev, &w.canvas);
            handle_gesture(&w, &drag, px.x, px.y);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.drag.borrow_mut().cancel();
        w.state.borrow_mut().drag_scroll.reset();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn handle_gesture(w: &InputWiring, drag: &DragGesture, sx: f32, sy: f32) {
    let mut state = w.state.borrow_mut();

    match state.classify_release(drag) {
        Gesture::Tap => {
            let (ro, rd) = camera::screen_to_world_ray(&w.canvas, sx, sy, CAMERA_Z);
            let visuals = state.stack.visuals();
            let spheres: Vec<(Vec3, f32)> = visuals
                .iter()
                .map(|v| (Vec3::from(v.position), PICK_SPHERE_RADIUS * v.scale))
                .collect();
            match input::pick_nearest(ro, rd, &spheres) {
                Some(i) => {
                    let id = visuals[i].id.clone();
                    match state.stack.select(&id) {
                        SelectOutcome::Busy => log::debug!("[tap] {} still moving", id),
                        outcome => log::info!("[tap] {} -> {:?}", id, outcome),
                    }
                }
                None => state.stack.clear_selection(),
            }
        }
        Gesture::Swipe => {
            if let Some(dir) = drag.horizontal_direction() {
                state.swipe(dir);
            }
        }
        Gesture::Ignored => {}
    }
}
