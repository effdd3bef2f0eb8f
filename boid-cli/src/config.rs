use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use boid_core::{Bounds, FlockParams};
use boid_shared::BoidSettings;

/// Read settings from a JSON file, or use the defaults when no path is given.
/// Values are snapped into the slider ranges.
pub fn load_settings(path: Option<&Path>) -> Result<BoidSettings> {
    let Some(path) = path else {
        log::debug!("No settings file, using defaults");
        return Ok(BoidSettings::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: BoidSettings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings JSON in {}", path.display()))?;

    if !settings.is_within_ranges() {
        log::warn!("Settings in {} are out of range, clamping", path.display());
    }
    Ok(settings.clamped())
}

/// World size from the command line. Both sides must be positive and finite,
/// since boids spawn uniformly inside it.
pub fn world_bounds(width: f32, height: f32) -> Result<Bounds> {
    let valid = |side: f32| side.is_finite() && side > 0.0;
    if !(valid(width) && valid(height)) {
        anyhow::bail!("World size must be positive and finite, got {}x{}", width, height);
    }
    Ok(Bounds::new(width, height))
}

pub fn to_params(settings: &BoidSettings) -> FlockParams {
    FlockParams {
        align_weight: settings.align_weight,
        cohesion_weight: settings.cohesion_weight,
        separation_weight: settings.separation_weight,
        perception_radius: settings.perception_radius,
        max_speed: settings.max_speed,
        max_force: settings.max_force,
        boid_count: settings.boid_count,
    }
}

/// A scheduled population change, written `FRAME:COUNT` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    pub frame: u64,
    pub count: usize,
}

impl FromStr for ResizeEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (frame, count) = s
            .split_once(':')
            .with_context(|| format!("Expected FRAME:COUNT, got '{}'", s))?;
        let frame = frame
            .trim()
            .parse()
            .with_context(|| format!("Invalid frame number '{}'", frame))?;
        let count = count
            .trim()
            .parse()
            .with_context(|| format!("Invalid boid count '{}'", count))?;
        Ok(Self { frame, count })
    }
}
