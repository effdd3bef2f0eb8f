/// Live tuning values handed to every [`Flock::step_all`](crate::Flock::step_all).
///
/// The engine never validates these. Negative weights are accepted and simply
/// flip the direction of the corresponding rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    pub align_weight: f32,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    pub perception_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// Population the collaborator wants; applied with [`Flock::resize`](crate::Flock::resize).
    pub boid_count: usize,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            align_weight: 1.0,
            cohesion_weight: 1.0,
            separation_weight: 1.0,
            perception_radius: crate::DEFAULT_PERCEPTION_RADIUS,
            max_speed: crate::DEFAULT_MAX_SPEED,
            max_force: crate::DEFAULT_MAX_FORCE,
            boid_count: 100,
        }
    }
}

/// Size of the toroidal world, usually the canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
