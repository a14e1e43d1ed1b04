//! Resting positions for the skill stack.
//!
//! Both engines are pure functions of their inputs. Viewport dimensions are
//! in scene units and only influence start and explosion positions; resting
//! stack spacing is fixed so items look the same on every device.

pub mod explosion;
pub mod stack;

pub use explosion::{compute_explosion, ExplosionLayout};
pub use stack::{compute_stack, StackLayout};

/// Visible extent of the scene at the content depth, in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn max_extent(&self) -> f32 {
        self.width.max(self.height)
    }
}
