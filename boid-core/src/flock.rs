#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::boid::Boid;
use crate::params::{Bounds, FlockParams};
use crate::vector::Vector2D;

/// The boid population, stored as a contiguous arena.
///
/// Growing appends fresh random boids, shrinking drops the tail. Boids have no
/// identity beyond their slot.
#[derive(Debug, Clone, Default)]
pub struct Flock {
    boids: Vec<Boid>,
    // pending steering forces, reused between frames
    forces: Vec<Vector2D>,
    frame: u64,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self {
            boids,
            forces: Vec::new(),
            frame: 0,
        }
    }

    #[cfg(feature = "std")]
    pub fn with_count(count: usize, bounds: Bounds) -> Self {
        let mut flock = Self::new();
        flock.grow(count, bounds);
        flock
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Number of completed [`Flock::step_all`] calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn add_boid(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    /// Append random boids until the flock holds `target`.
    pub fn grow_with_rng<R: Rng + ?Sized>(&mut self, target: usize, bounds: Bounds, rng: &mut R) {
        let missing = target.saturating_sub(self.boids.len());
        if missing == 0 {
            return;
        }
        self.boids.reserve(missing);
        self.boids
            .extend((0..missing).map(|_| Boid::random(bounds, &mut *rng)));
        log::debug!("flock grew by {} to {} boids", missing, self.boids.len());
    }

    #[cfg(feature = "std")]
    pub fn grow(&mut self, target: usize, bounds: Bounds) {
        self.grow_with_rng(target, bounds, &mut rand::thread_rng());
    }

    /// Keep the first `target` boids and drop the rest.
    pub fn shrink(&mut self, target: usize) {
        if target >= self.boids.len() {
            return;
        }
        let dropped = self.boids.len() - target;
        self.boids.truncate(target);
        log::debug!("flock shrank by {} to {} boids", dropped, target);
    }

    pub fn resize_with_rng<R: Rng + ?Sized>(&mut self, target: usize, bounds: Bounds, rng: &mut R) {
        if target < self.boids.len() {
            self.shrink(target);
        } else {
            self.grow_with_rng(target, bounds, rng);
        }
    }

    /// Bring the population to `target`, growing or shrinking as needed.
    #[cfg(feature = "std")]
    pub fn resize(&mut self, target: usize, bounds: Bounds) {
        self.resize_with_rng(target, bounds, &mut rand::thread_rng());
    }

    /// Advance every boid by one frame.
    ///
    /// All steering forces are computed from the flock as it stood at the start
    /// of the call, and only then are boids moved, so the outcome does not
    /// depend on the order of the boids.
    pub fn step_all(&mut self, params: &FlockParams, bounds: Bounds) {
        for boid in self.boids.iter_mut() {
            boid.configure(params);
        }

        // Read phase
        let boids = &self.boids;
        self.forces.clear();
        self.forces.extend(
            boids
                .iter()
                .enumerate()
                .map(|(index, boid)| boid.steering_force(index, boids, params)),
        );

        // Commit phase
        for (boid, force) in self.boids.iter_mut().zip(self.forces.iter()) {
            boid.apply_force(*force);
            boid.update();
            boid.edges(bounds);
        }

        self.frame += 1;
        log::trace!("frame {} stepped {} boids", self.frame, self.boids.len());
    }

    /// Mean velocity magnitude, zero for an empty flock.
    pub fn average_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        let total: f32 = self.boids.iter().map(|b| b.velocity.magnitude()).sum();
        total / self.boids.len() as f32
    }

    /// Mean position, or `None` for an empty flock.
    pub fn centroid(&self) -> Option<Vector2D> {
        if self.boids.is_empty() {
            return None;
        }
        let mut sum = Vector2D::zero();
        for boid in &self.boids {
            sum += boid.position;
        }
        Some(sum / self.boids.len() as f32)
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = core::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}
