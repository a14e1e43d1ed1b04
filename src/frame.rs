use crate::camera;
use crate::constants::CAMERA_Z;
use crate::dom;
use crate::overlay;
use crate::render::{self, FrameSnapshot};
use crate::state::AppState;
use crate::url;
use folio_core::CarouselSignal;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub last_hint: Option<(&'static str, usize)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() * 1000.0;

        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;

        let viewport = camera::viewport_at_distance(&self.canvas, CAMERA_Z);
        if viewport != st.stack.viewport() {
            st.stack.resize(viewport);
        }

        // Targets first: carousel phases from the latest scroll value...
        if let Some(CarouselSignal::Finished) = st.carousel.tick(&st.session) {
            log::info!("[carousel] reached the end of {}", st.magazines.current().name());
        }
        // ...then one interpolation step consuming this frame's targets.
        for id in st.stack.tick(dt_ms) {
            log::debug!("[stack] {} settled", id);
        }

        st.sync_descriptions();
        if let Some(selection) = st.stack.take_outgoing_selection() {
            url::write_selection(selection.as_deref());
        }

        let hint = (st.magazines.current().name(), st.book.current());
        if self.last_hint != Some(hint) {
            if let Some(document) = dom::window_document() {
                overlay::update_hint(&document, hint.0, hint.1, st.book.page_count());
            }
            self.last_hint = Some(hint);
        }

        let most_visible = st.carousel.most_visible_item().map(|i| i.id.as_str());
        render::publish(&FrameSnapshot {
            magazine: st.magazines.current().name(),
            page: st.book.current(),
            rotation: st.carousel.rotation(),
            sections: st.carousel.frames(),
            most_visible,
            skills: st.stack.visuals(),
            selected: st.stack.selected(),
            description: st.description_index(),
            assets_ready: st.assets_ready,
        });
    }
}

pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
