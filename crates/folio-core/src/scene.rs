//! The skill stack: owns item ordering, layout choice, staggered retargeting
//! and selection for one mounted view.
//!
//! Each frame the owner calls [`SkillStack::tick`], which first applies any
//! targets whose stagger delay has elapsed and then runs one interpolation
//! step, so targets computed this frame are consumed in the same frame.

use crate::animation::{AnimationDriver, Settled, Track};
use crate::config::FolioConfig;
use crate::gesture::Orientation;
use crate::item::{reorder_by_category, Item};
use crate::layout::{compute_explosion, compute_stack, Viewport};
use crate::selection::SelectionState;
use crate::timers::TimerQueue;
use glam::Vec3;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
struct PendingTarget {
    id: String,
    position: Vec3,
    scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The item moved to the focal point and the rest spread out.
    Exploded,
    /// The selected item was picked again; everything returns to the stack.
    Restacked,
    /// The item is still animating and cannot be picked yet.
    Busy,
    /// No item with that id.
    Missing,
}

/// What the renderer needs for one item this frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemVisual {
    pub id: String,
    pub position: [f32; 3],
    pub scale: f32,
    pub moving: bool,
    pub selected: bool,
}

pub struct SkillStack {
    items: Vec<Item>,
    config: FolioConfig,
    viewport: Viewport,
    orientation: Orientation,
    focal_point: Option<Vec3>,
    driver: AnimationDriver,
    timers: TimerQueue<PendingTarget>,
    selection: SelectionState,
}

impl SkillStack {
    pub fn new(items: &[Item], config: FolioConfig, viewport: Viewport) -> Self {
        Self {
            items: reorder_by_category(items),
            orientation: Orientation::from_viewport(viewport.width, viewport.height),
            viewport,
            focal_point: None,
            driver: AnimationDriver::new(config.animation),
            timers: TimerQueue::new(),
            selection: SelectionState::default(),
            config,
        }
    }

    /// Items in render order (creative first, then engineering).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn take_outgoing_selection(&mut self) -> Option<Option<String>> {
        self.selection.take_outgoing()
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.driver.track(id)
    }

    pub fn is_moving(&self, id: &str) -> bool {
        self.driver.is_moving(id)
    }

    /// True while anything is in motion or waiting on a stagger delay.
    pub fn is_busy(&self) -> bool {
        self.driver.any_moving() || !self.timers.is_empty()
    }

    /// Point the selected item flies to, usually just in front of the camera.
    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        let forward = (target - eye).normalize_or_zero();
        self.focal_point = Some(eye + forward * self.config.animation.focal_distance);
    }

    /// Drop every item in from off-screen into the stack, staggered.
    pub fn animate_in(&mut self) {
        self.timers.cancel_all();
        self.driver.halt();
        self.selection.clear();

        let layout = self.config.layout(self.orientation);
        let stack = compute_stack(&self.items, self.viewport, self.orientation, &layout);
        let scale = self.config.animation.rest_scale;
        for (i, item) in stack.items.iter().enumerate() {
            self.driver.place(&item.id, stack.start_positions[i], scale);
            self.timers.schedule(
                stack.delays_ms[i] as f64,
                PendingTarget {
                    id: item.id.clone(),
                    position: stack.positions[i],
                    scale,
                },
            );
        }
        log::debug!("[stack] animate in {} items", stack.items.len());
    }

    pub fn select(&mut self, id: &str) -> SelectOutcome {
        if !self.items.iter().any(|i| i.id == id) {
            log::warn!("[stack] no skill named {:?}", id);
            return SelectOutcome::Missing;
        }
        if self.driver.is_moving(id) {
            return SelectOutcome::Busy;
        }
        if self.selection.is_selected(id) {
            self.selection.clear();
            self.retarget(true);
            log::debug!("[stack] restack from {:?}", id);
            return SelectOutcome::Restacked;
        }
        self.selection.select(id);
        self.retarget(true);
        log::debug!("[stack] explode around {:?}", id);
        SelectOutcome::Exploded
    }

    /// Apply a selection coming from outside (URL) without queuing an echo.
    pub fn apply_external_selection(&mut self, id: Option<&str>) -> SelectOutcome {
        match id {
            Some(id) if !self.items.iter().any(|i| i.id == id) => {
                log::warn!("[stack] no skill named {:?}", id);
                SelectOutcome::Missing
            }
            Some(id) => {
                self.selection.apply_external(Some(id));
                self.retarget(true);
                SelectOutcome::Exploded
            }
            None => {
                self.selection.apply_external(None);
                self.retarget(true);
                SelectOutcome::Restacked
            }
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.selected().is_some() {
            self.selection.clear();
            self.retarget(true);
        }
    }

    /// New viewport: orientation may flip; targets move without stagger.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.orientation = Orientation::from_viewport(viewport.width, viewport.height);
        self.retarget(false);
    }

    /// Cancel pending starts, freeze motion and drop the selection.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.driver.halt();
        self.selection.clear();
        log::debug!("[stack] reset");
    }

    pub fn tick(&mut self, dt_ms: f64) -> Settled {
        for pending in self.timers.advance(dt_ms) {
            self.driver
                .set_target(&pending.id, pending.position, pending.scale);
        }
        self.driver.tick()
    }

    pub fn visuals(&self) -> Vec<ItemVisual> {
        self.items
            .iter()
            .filter_map(|item| {
                let track = self.driver.track(&item.id)?;
                Some(ItemVisual {
                    id: item.id.clone(),
                    position: track.position.to_array(),
                    scale: track.scale,
                    moving: self.driver.is_moving(&item.id),
                    selected: self.selection.is_selected(&item.id),
                })
            })
            .collect()
    }

    fn retarget(&mut self, staggered: bool) {
        self.timers.cancel_all();
        for (pending, delay_ms) in self.targets() {
            if staggered {
                self.timers.schedule(delay_ms as f64, pending);
            } else {
                self.driver
                    .set_target(&pending.id, pending.position, pending.scale);
            }
        }
    }

    fn targets(&self) -> Vec<(PendingTarget, u32)> {
        let layout = self.config.layout(self.orientation);
        let anim = &self.config.animation;

        if let Some(selected) = self.selection.selected() {
            if let Some(mut explosion) =
                compute_explosion(&self.items, self.viewport, selected, &layout)
            {
                if let Some(focal) = self.focal_point {
                    explosion.positions[explosion.selected_index] = focal;
                }
                return self
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let scale = if i == explosion.selected_index {
                            anim.selected_scale
                        } else {
                            anim.rest_scale
                        };
                        (
                            PendingTarget {
                                id: item.id.clone(),
                                position: explosion.positions[i],
                                scale,
                            },
                            explosion.delays_ms[i],
                        )
                    })
                    .collect();
            }
        }

        let stack = compute_stack(&self.items, self.viewport, self.orientation, &layout);
        stack
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                (
                    PendingTarget {
                        id: item.id.clone(),
                        position: stack.positions[i],
                        scale: anim.rest_scale,
                    },
                    stack.delays_ms[i],
                )
            })
            .collect()
    }
}
