#![cfg_attr(not(feature = "std"), no_std)]

//! Settings and report types exchanged between the flock and its host.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const BOID_COUNT_RANGE: RangeInclusive<usize> = 10..=300;
pub const WEIGHT_RANGE: RangeInclusive<f32> = 0.0..=2.5;
pub const PERCEPTION_RADIUS_RANGE: RangeInclusive<f32> = 10.0..=200.0;
pub const MAX_SPEED_RANGE: RangeInclusive<f32> = 1.0..=10.0;
pub const MAX_FORCE_RANGE: RangeInclusive<f32> = 0.01..=0.5;

/// Represents a 2D position in screen coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Boid simulation configuration, as set by the host's sliders.
///
/// Fields missing from a settings file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoidSettings {
    pub boid_count: usize,
    pub align_weight: f32,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    pub perception_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Default for BoidSettings {
    fn default() -> Self {
        Self {
            boid_count: 100,
            align_weight: 1.0,
            cohesion_weight: 1.0,
            separation_weight: 1.0,
            perception_radius: 50.0,
            max_speed: 4.0,
            max_force: 0.1,
        }
    }
}

impl BoidSettings {
    /// Snap every field into its slider range.
    pub fn clamped(&self) -> Self {
        fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
            value.clamp(*range.start(), *range.end())
        }

        Self {
            boid_count: self
                .boid_count
                .clamp(*BOID_COUNT_RANGE.start(), *BOID_COUNT_RANGE.end()),
            align_weight: clamp_f32(self.align_weight, &WEIGHT_RANGE),
            cohesion_weight: clamp_f32(self.cohesion_weight, &WEIGHT_RANGE),
            separation_weight: clamp_f32(self.separation_weight, &WEIGHT_RANGE),
            perception_radius: clamp_f32(self.perception_radius, &PERCEPTION_RADIUS_RANGE),
            max_speed: clamp_f32(self.max_speed, &MAX_SPEED_RANGE),
            max_force: clamp_f32(self.max_force, &MAX_FORCE_RANGE),
        }
    }

    pub fn is_within_ranges(&self) -> bool {
        BOID_COUNT_RANGE.contains(&self.boid_count)
            && WEIGHT_RANGE.contains(&self.align_weight)
            && WEIGHT_RANGE.contains(&self.cohesion_weight)
            && WEIGHT_RANGE.contains(&self.separation_weight)
            && PERCEPTION_RADIUS_RANGE.contains(&self.perception_radius)
            && MAX_SPEED_RANGE.contains(&self.max_speed)
            && MAX_FORCE_RANGE.contains(&self.max_force)
    }
}

/// What the renderer needs to draw one boid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidState {
    pub position: Position,
    /// Radians, measured from the +x axis.
    pub heading: f32,
}

/// Per-frame summary for a status display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub frame: u64,
    pub boid_count: usize,
    pub average_speed: f32,
    pub centroid: Option<Position>,
}
