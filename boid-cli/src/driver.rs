use boid_core::{Bounds, Flock, FlockParams};
use boid_shared::{BoidSettings, BoidState, Position, StatusResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config;

/// Owns a flock and feeds it one frame at a time, the way a render loop would.
pub struct Simulation {
    flock: Flock,
    settings: BoidSettings,
    params: FlockParams,
    bounds: Bounds,
    rng: StdRng,
}

impl Simulation {
    pub fn new(settings: BoidSettings, bounds: Bounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sim = Self {
            flock: Flock::new(),
            params: config::to_params(&settings),
            settings,
            bounds,
            rng,
        };
        sim.flock
            .resize_with_rng(sim.params.boid_count, sim.bounds, &mut sim.rng);
        log::info!(
            "Simulation ready: {} boids in {}x{}",
            sim.flock.len(),
            bounds.width,
            bounds.height
        );
        sim
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn settings(&self) -> &BoidSettings {
        &self.settings
    }

    /// Swap in new settings. The population follows `boid_count`.
    pub fn set_settings(&mut self, settings: BoidSettings) {
        if settings.boid_count != self.settings.boid_count {
            log::info!(
                "Boid count {} -> {}",
                self.settings.boid_count,
                settings.boid_count
            );
        }
        self.params = config::to_params(&settings);
        self.settings = settings;
        self.flock
            .resize_with_rng(self.params.boid_count, self.bounds, &mut self.rng);
    }

    pub fn set_boid_count(&mut self, count: usize) {
        let settings = BoidSettings {
            boid_count: count,
            ..self.settings.clone()
        };
        self.set_settings(settings);
    }

    /// The window changed size; boids outside the new area wrap in on the next frame.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        log::debug!("Bounds now {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;
    }

    pub fn tick(&mut self) {
        self.flock.step_all(&self.params, self.bounds);
    }

    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            frame: self.flock.frame(),
            boid_count: self.flock.len(),
            average_speed: self.flock.average_speed(),
            centroid: self.flock.centroid().map(|c| Position::new(c.x, c.y)),
        }
    }

    pub fn states(&self) -> Vec<BoidState> {
        self.flock
            .iter()
            .map(|boid| BoidState {
                position: Position::new(boid.position.x, boid.position.y),
                heading: boid.heading(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(count: usize) -> Simulation {
        let settings = BoidSettings {
            boid_count: count,
            ..BoidSettings::default()
        };
        Simulation::new(settings, Bounds::new(400.0, 300.0), Some(11))
    }

    #[test]
    fn test_new_populates_flock() {
        let sim = sim(25);
        assert_eq!(sim.flock().len(), 25);
        assert_eq!(sim.status().frame, 0);
    }

    #[test]
    fn test_set_boid_count_resizes() {
        let mut sim = sim(25);
        let head: Vec<_> = sim.flock().boids()[..5].to_vec();

        sim.set_boid_count(5);
        assert_eq!(sim.flock().boids(), &head[..]);

        sim.set_boid_count(40);
        assert_eq!(sim.flock().len(), 40);
        assert_eq!(sim.settings().boid_count, 40);
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = sim(10);
        sim.tick();
        sim.tick();
        let status = sim.status();
        assert_eq!(status.frame, 2);
        assert_eq!(status.boid_count, 10);
        assert!(status.average_speed <= sim.settings().max_speed + 1e-4);
        assert!(status.centroid.is_some());
    }

    #[test]
    fn test_states_match_flock() {
        let sim = sim(3);
        let states = sim.states();
        assert_eq!(states.len(), 3);
        for (state, boid) in states.iter().zip(sim.flock().iter()) {
            assert_eq!(state.position.x, boid.position.x);
            assert_eq!(state.heading, boid.velocity.heading());
        }
    }

    #[test]
    fn test_set_bounds_wraps_on_next_tick() {
        let mut sim = sim(40);
        assert!(sim.flock().iter().any(|b| b.position.x > 110.0));

        sim.set_bounds(Bounds::new(100.0, 100.0));
        sim.tick();

        for boid in sim.flock() {
            assert!((0.0..=100.0).contains(&boid.position.x), "x {}", boid.position.x);
            assert!((0.0..=100.0).contains(&boid.position.y), "y {}", boid.position.y);
        }
    }

    #[test]
    fn test_same_seed_same_flock() {
        assert_eq!(sim(8).flock().boids(), sim(8).flock().boids());
    }
}
