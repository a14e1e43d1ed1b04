//! Tuning configuration, one value per concern.
//!
//! Every engine takes the slice of configuration it needs by value, so the
//! portrait and landscape tables cannot drift apart between call sites.

use crate::constants::*;
use crate::error::FolioError;
use crate::gesture::Orientation;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Scroll-driven carousel tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub unit_angle: f32,
    pub sensitivity: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            unit_angle: UNIT_ANGLE,
            sensitivity: SCROLL_SENSITIVITY,
        }
    }
}

/// Stack and explosion geometry for one orientation.
///
/// Overridden as a whole table; a partial table would silently mix the two
/// orientations' defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub column_offset: f32,
    pub spacing: f32,
    pub stack_z: f32,
    pub explosion_z: f32,
    pub radius_multiplier: f32,
    pub stack_stagger_ms: u32,
    pub explosion_stagger_ms: u32,
}

impl LayoutConfig {
    pub fn landscape() -> Self {
        Self {
            column_offset: LANDSCAPE_COLUMN_OFFSET,
            spacing: LANDSCAPE_SPACING,
            stack_z: LANDSCAPE_STACK_Z,
            explosion_z: LANDSCAPE_EXPLOSION_Z,
            radius_multiplier: EXPLOSION_RADIUS_MULTIPLIER,
            stack_stagger_ms: STACK_STAGGER_MS,
            explosion_stagger_ms: EXPLOSION_STAGGER_MS,
        }
    }

    pub fn portrait() -> Self {
        Self {
            column_offset: PORTRAIT_COLUMN_OFFSET,
            spacing: PORTRAIT_SPACING,
            stack_z: PORTRAIT_STACK_Z,
            explosion_z: PORTRAIT_EXPLOSION_Z,
            ..Self::landscape()
        }
    }
}

/// Upper bounds for a gesture to still count as a tap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapThresholds {
    pub max_duration_ms: f32,
    pub max_movement_px: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub landscape: TapThresholds,
    pub portrait: TapThresholds,
    pub swipe_min_movement_px: f32,
}

impl InteractionConfig {
    pub fn tap(&self, orientation: Orientation) -> TapThresholds {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            landscape: TapThresholds {
                max_duration_ms: LANDSCAPE_TAP_MAX_DURATION_MS,
                max_movement_px: LANDSCAPE_TAP_MAX_MOVEMENT_PX,
            },
            portrait: TapThresholds {
                max_duration_ms: PORTRAIT_TAP_MAX_DURATION_MS,
                max_movement_px: PORTRAIT_TAP_MAX_MOVEMENT_PX,
            },
            swipe_min_movement_px: SWIPE_MIN_MOVEMENT_PX,
        }
    }
}

/// Per-frame interpolation policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-axis lerp factor for positions.
    pub position_rates: Vec3,
    pub scale_grow_rate: f32,
    pub scale_shrink_rate: f32,
    pub settle_epsilon: f32,
    pub rest_scale: f32,
    pub selected_scale: f32,
    pub focal_distance: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            position_rates: Vec3::new(POSITION_RATE_X, POSITION_RATE_Y, POSITION_RATE_Z),
            scale_grow_rate: SCALE_GROW_RATE,
            scale_shrink_rate: SCALE_SHRINK_RATE,
            settle_epsilon: SETTLE_EPSILON,
            rest_scale: REST_SCALE,
            selected_scale: SELECTED_SCALE,
            focal_distance: FOCAL_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub carousel: CarouselConfig,
    pub landscape: LayoutConfig,
    pub portrait: LayoutConfig,
    pub interaction: InteractionConfig,
    pub animation: AnimationConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            landscape: LayoutConfig::landscape(),
            portrait: LayoutConfig::portrait(),
            interaction: InteractionConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn layout(&self, orientation: Orientation) -> LayoutConfig {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
        }
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        let invalid = |msg: &str| Err(FolioError::InvalidConfig(msg.to_string()));

        if !(self.carousel.unit_angle > 0.0) {
            return invalid("carousel.unit_angle must be > 0");
        }
        if !(self.carousel.sensitivity > 0.0) {
            return invalid("carousel.sensitivity must be > 0");
        }
        let a = &self.animation;
        let rates = [
            a.position_rates.x,
            a.position_rates.y,
            a.position_rates.z,
            a.scale_grow_rate,
            a.scale_shrink_rate,
        ];
        if rates.iter().any(|r| !(*r > 0.0 && *r < 1.0)) {
            return invalid("animation rates must lie in (0, 1)");
        }
        if !(a.settle_epsilon > 0.0) {
            return invalid("animation.settle_epsilon must be > 0");
        }
        for layout in [&self.landscape, &self.portrait] {
            if !(layout.spacing >= 0.0) || !(layout.radius_multiplier > 0.0) {
                return invalid("layout spacing must be >= 0 and radius_multiplier > 0");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(FolioConfig::default().validate().is_ok());
    }

    #[test]
    fn default_portrait_differs_from_landscape() {
        let c = FolioConfig::default();
        assert!(c.portrait.column_offset < c.landscape.column_offset);
        assert_ne!(c.portrait.stack_z, c.landscape.stack_z);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = FolioConfig::from_json(r#"{"carousel":{"sensitivity":3.0}}"#).unwrap();
        assert_eq!(c.carousel.sensitivity, 3.0);
        assert_eq!(c.carousel.unit_angle, UNIT_ANGLE);
        assert_eq!(c.portrait, LayoutConfig::portrait());
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let err = FolioConfig::from_json(r#"{"animation":{"scale_grow_rate":1.5}}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = FolioConfig::from_json("{").unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
