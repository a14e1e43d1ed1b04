#![cfg(target_arch = "wasm32")]
use folio_core::{ContentIndex, FolioConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod state;
mod url;

pub use render::set_render_target;

use constants::{CAMERA_Z, CANVAS_ID, CONFIG_SCRIPT_ID, CONTENT_SCRIPT_ID};
use state::AppState;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<AppState>>>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn load_config(document: &web::Document) -> FolioConfig {
    match dom::read_json_script(document, CONFIG_SCRIPT_ID) {
        None => FolioConfig::default(),
        Some(json) => FolioConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[config] {}; using defaults", e);
            FolioConfig::default()
        }),
    }
}

fn load_content(document: &web::Document) -> ContentIndex {
    match dom::read_json_script(document, CONTENT_SCRIPT_ID) {
        None => {
            log::warn!("[content] no #{} block; nothing to show", CONTENT_SCRIPT_ID);
            ContentIndex::default()
        }
        Some(json) => ContentIndex::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[content] {}", e);
            ContentIndex::default()
        }),
    }
}

/// Select a skill by (loosely matched) name from outside, e.g. a nav link.
#[wasm_bindgen]
pub fn select_skill(name: &str) {
    APP.with(|app| {
        if let Some(state) = app.borrow().as_ref() {
            // Called from inside the render callback the state is still
            // borrowed by the frame; drop the request rather than panic.
            match state.try_borrow_mut() {
                Ok(mut st) => st.apply_external_query(Some(name)),
                Err(_) => log::warn!("[select] {:?} ignored during frame", name),
            }
        }
    });
}

/// Report that scene assets finished loading. A failed load still counts
/// as loaded so the experience never waits forever.
#[wasm_bindgen]
pub fn mark_assets_ready(ok: bool) {
    if !ok {
        log::warn!("[assets] load failed; continuing with degraded visuals");
    }
    APP.with(|app| {
        if let Some(state) = app.borrow().as_ref() {
            match state.try_borrow_mut() {
                Ok(mut st) => st.assets_ready = true,
                Err(_) => log::warn!("[assets] ready flag not set during frame"),
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = load_config(&document);
    let content = load_content(&document);
    let viewport = camera::viewport_at_distance(&canvas, CAMERA_Z);
    log::info!(
        "[init] {} sections, viewport {:.2}x{:.2}",
        content.sections().len(),
        viewport.width,
        viewport.height
    );

    let state = Rc::new(RefCell::new(AppState::new(config, content, viewport)));
    {
        let mut st = state.borrow_mut();
        st.stack.set_camera(frame::camera_eye(), glam::Vec3::ZERO);
        st.stack.animate_in();
        let initial = url::read_selection();
        if initial.is_some() {
            st.apply_external_query(initial.as_deref());
        }
    }
    APP.with(|app| *app.borrow_mut() = Some(state.clone()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        drag: Rc::new(RefCell::new(folio_core::DragTracker::default())),
    });
    events::wire_wheel(state.clone());
    events::wire_global_keydown(state.clone());
    url::wire_popstate(state.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        last_instant: Instant::now(),
        last_hint: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
