use rand::Rng;

use crate::behavior;
use crate::params::{Bounds, FlockParams};
use crate::vector::Vector2D;

/// A single boid entity
///
/// Kinematic state is public. The per-agent limits are only changed through
/// [`Boid::configure`], and the separation radius is always derived from the
/// perception radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    max_force: f32,
    max_speed: f32,
    perception_radius: f32,
    separation_radius: f32,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::zero(),
            max_force: crate::DEFAULT_MAX_FORCE,
            max_speed: crate::DEFAULT_MAX_SPEED,
            perception_radius: crate::DEFAULT_PERCEPTION_RADIUS,
            separation_radius: crate::DEFAULT_PERCEPTION_RADIUS * crate::SEPARATION_RATIO,
        }
    }

    /// Random position inside `bounds`, random heading, speed in `[2, 4]`.
    pub fn random<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let position = Vector2D::new(
            random_coord(rng, bounds.width),
            random_coord(rng, bounds.height),
        );
        let angle = rng.gen_range(0.0..core::f32::consts::TAU);
        let mut velocity = Vector2D::from_angle(angle);
        velocity.scale(rng.gen_range(crate::MIN_SPAWN_SPEED..=crate::MAX_SPAWN_SPEED));
        Self::new(position, velocity)
    }

    #[cfg(feature = "std")]
    pub fn random_in(bounds: Bounds) -> Self {
        Self::random(bounds, &mut rand::thread_rng())
    }

    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn perception_radius(&self) -> f32 {
        self.perception_radius
    }

    pub fn separation_radius(&self) -> f32 {
        self.separation_radius
    }

    /// Orientation for drawing, derived from the velocity.
    pub fn heading(&self) -> f32 {
        self.velocity.heading()
    }

    /// Copy this frame's tunables from the parameter set.
    pub fn configure(&mut self, params: &FlockParams) {
        self.max_speed = params.max_speed;
        self.max_force = params.max_force;
        self.perception_radius = params.perception_radius;
        self.refresh_separation_radius();
    }

    fn refresh_separation_radius(&mut self) {
        self.separation_radius = self.perception_radius * crate::SEPARATION_RATIO;
    }

    pub fn apply_force(&mut self, force: Vector2D) {
        self.acceleration += force;
    }

    /// Weighted sum of alignment, cohesion and separation for the boid at
    /// `index` in `boids`. Reads only; `self` is expected to be `boids[index]`.
    pub fn steering_force(&self, index: usize, boids: &[Boid], params: &FlockParams) -> Vector2D {
        let alignment = behavior::alignment(self, index, boids) * params.align_weight;
        let cohesion = behavior::cohesion(self, index, boids) * params.cohesion_weight;
        let separation = behavior::separation(self, index, boids) * params.separation_weight;
        alignment + cohesion + separation
    }

    /// Accumulate the flocking force against `snapshot`, a frozen copy of the
    /// flock in which this boid sits at `index`.
    ///
    /// This is the read phase of [`Flock::step_all`](crate::Flock::step_all)
    /// for a single boid. `step_all` batches [`Boid::steering_force`] over the
    /// whole flock instead, since it already holds the boids it reads from.
    pub fn flock(&mut self, index: usize, snapshot: &[Boid], params: &FlockParams) {
        self.refresh_separation_radius();
        let force = self.steering_force(index, snapshot, params);
        self.apply_force(force);
    }

    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.velocity.limit_magnitude(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vector2D::zero();
    }

    /// Toroidal wrap. Per-frame movement is smaller than the world, so one
    /// correction per axis is enough.
    pub fn edges(&mut self, bounds: Bounds) {
        if self.position.x < 0.0 {
            self.position.x = bounds.width;
        } else if self.position.x > bounds.width {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = bounds.height;
        } else if self.position.y > bounds.height {
            self.position.y = 0.0;
        }
    }
}

fn random_coord<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    // gen_range panics on an empty or unbounded range
    if extent > 0.0 && extent.is_finite() {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
