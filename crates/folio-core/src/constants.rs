// Shared layout/animation tuning constants. `FolioConfig::default()` is built
// from these; nothing else should read them directly.

// Carousel
pub const UNIT_ANGLE: f32 = 171.25; // scroll distance reserved per page
pub const SCROLL_SENSITIVITY: f32 = 5.0; // raw scroll -> rotation
pub const PHASE_MIN_SPAN: f32 = 1e-3; // floor for entering/exiting denominators

// Phase angles (degrees)
pub const ANGLE_BEFORE: f32 = -90.0;
pub const ANGLE_AFTER: f32 = 90.0;

// Landscape stack: two columns either side of centre
pub const LANDSCAPE_COLUMN_OFFSET: f32 = 2.6;
pub const LANDSCAPE_SPACING: f32 = 0.55;
pub const LANDSCAPE_STACK_Z: f32 = -2.0;
pub const LANDSCAPE_EXPLOSION_Z: f32 = -6.0;

// Portrait stack: one interlaced column, mirrored offsets closer to centre
pub const PORTRAIT_COLUMN_OFFSET: f32 = 0.9;
pub const PORTRAIT_SPACING: f32 = 0.42;
pub const PORTRAIT_STACK_Z: f32 = -3.0;
pub const PORTRAIT_EXPLOSION_Z: f32 = -8.0;

// Explosion
pub const EXPLOSION_RADIUS_MULTIPLIER: f32 = 1.5; // * max(viewport w, h)

// Stagger (milliseconds)
pub const STACK_STAGGER_MS: u32 = 60;
pub const EXPLOSION_STAGGER_MS: u32 = 25;

// Gesture classification
pub const LANDSCAPE_TAP_MAX_DURATION_MS: f32 = 150.0;
pub const LANDSCAPE_TAP_MAX_MOVEMENT_PX: f32 = 10.0;
pub const PORTRAIT_TAP_MAX_DURATION_MS: f32 = 250.0; // touch is noisier
pub const PORTRAIT_TAP_MAX_MOVEMENT_PX: f32 = 20.0;
pub const SWIPE_MIN_MOVEMENT_PX: f32 = 50.0;

// Per-frame interpolation (fraction of remaining distance per tick)
pub const POSITION_RATE_X: f32 = 0.06; // horizontal settles last
pub const POSITION_RATE_Y: f32 = 0.12;
pub const POSITION_RATE_Z: f32 = 0.12;
pub const SCALE_GROW_RATE: f32 = 0.25;
pub const SCALE_SHRINK_RATE: f32 = 0.08;
pub const SETTLE_EPSILON: f32 = 1e-3;

// Selection focus
pub const REST_SCALE: f32 = 1.0;
pub const SELECTED_SCALE: f32 = 1.6;
pub const FOCAL_DISTANCE: f32 = 3.0; // in front of the camera
