// Shell-side tuning: camera, picking and input scaling. Layout and animation
// tuning lives in folio-core's `FolioConfig`.

// Camera
// Z distance used by picking and by the scene-unit viewport estimate.
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.35; // ray-sphere radius per unit scale
pub const WHEEL_DELTA_SCALE: f32 = 0.01; // wheel pixels -> raw scroll units
pub const DRAG_DELTA_SCALE: f32 = 0.02; // touch-drag pixels -> raw scroll units

// Element ids
pub const CANVAS_ID: &str = "folio-canvas";
pub const CONFIG_SCRIPT_ID: &str = "folio-config";
pub const CONTENT_SCRIPT_ID: &str = "folio-content";
pub const HINT_ID: &str = "hint-overlay";

// URL sync
pub const SELECTION_QUERY_KEY: &str = "skill";
