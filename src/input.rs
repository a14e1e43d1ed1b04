use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the closest sphere `(center, radius)` hit by the ray.
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, spheres: &[(Vec3, f32)]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, *radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        (x_css / w) * canvas.width() as f32,
        (y_css / h) * canvas.height() as f32,
    )
}

/// Pointer position in CSS pixels, the unit gesture thresholds are tuned in.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// ---------------- Keyboard mapping ----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextMagazine,
    PreviousMagazine,
    FlipForward,
    FlipBack,
    Reset,
    ToggleHint,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" => Some(KeyAction::NextMagazine),
        "ArrowLeft" => Some(KeyAction::PreviousMagazine),
        "ArrowDown" | "PageDown" => Some(KeyAction::FlipForward),
        "ArrowUp" | "PageUp" => Some(KeyAction::FlipBack),
        "Escape" => Some(KeyAction::Reset),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}
