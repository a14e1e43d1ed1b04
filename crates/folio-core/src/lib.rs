//! Platform-free core of the folio portfolio: scroll-driven carousel phases,
//! skill stack layouts, gesture policy and per-frame interpolation.
//!
//! Nothing here touches the DOM or a renderer; the web front-end feeds input
//! in and reads positions, angles and opacities out each frame.

pub mod animation;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod magazine;
pub mod phase;
pub mod scene;
pub mod selection;
pub mod threshold;
pub mod timers;

pub use animation::{lerp, lerp_axes, AnimationDriver, Settled, Track};
pub use carousel::{CarouselDriver, CarouselSignal, ItemFrame, ScrollSession};
pub use config::{
    AnimationConfig, CarouselConfig, FolioConfig, InteractionConfig, LayoutConfig, TapThresholds,
};
pub use content::{ContentIndex, ContentSection};
pub use error::FolioError;
pub use gesture::{classify, classify_drag, DragGesture, DragScroll, DragTracker, Gesture, Orientation};
pub use item::{reorder_by_category, Category, Item};
pub use layout::{compute_explosion, compute_stack, ExplosionLayout, StackLayout, Viewport};
pub use magazine::{wrap_index, DescriptionCarousel, Magazine, MagazineNav, PageBook};
pub use phase::{project, Phase, Projection};
pub use scene::{ItemVisual, SelectOutcome, SkillStack};
pub use selection::SelectionState;
pub use threshold::{compute_thresholds, next_enter, total_extent, ThresholdWindow};
pub use timers::{TimerId, TimerQueue};
