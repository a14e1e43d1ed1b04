//! Hand-off of per-frame state to the JS scene.
//!
//! The scene graph lives on the JS side; each frame it receives one JSON
//! snapshot through the callback registered with `set_render_target`.

use folio_core::{ItemFrame, ItemVisual};
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RENDER_TARGET: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
}

#[derive(Serialize)]
pub struct FrameSnapshot<'a> {
    pub magazine: &'a str,
    pub page: usize,
    pub rotation: f32,
    pub sections: &'a [ItemFrame],
    pub most_visible: Option<&'a str>,
    pub skills: Vec<ItemVisual>,
    pub selected: Option<&'a str>,
    /// Open description card of the selected skill.
    pub description: Option<usize>,
    pub assets_ready: bool,
}

/// Register the JS function that draws each frame.
#[wasm_bindgen]
pub fn set_render_target(callback: js_sys::Function) {
    RENDER_TARGET.with(|t| *t.borrow_mut() = Some(callback));
}

pub fn publish(snapshot: &FrameSnapshot) {
    RENDER_TARGET.with(|t| {
        let target = t.borrow();
        let Some(callback) = target.as_ref() else {
            return;
        };
        match serde_json::to_string(snapshot) {
            Ok(json) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    log::error!("render target error: {:?}", e);
                }
            }
            Err(e) => log::error!("snapshot serialization error: {}", e),
        }
    });
}
