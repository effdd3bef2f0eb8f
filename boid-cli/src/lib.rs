//! Headless host for the boid engine: loads settings, drives frames and
//! reports flock state as JSON.

pub mod config;
pub mod driver;

pub use config::{load_settings, to_params, world_bounds, ResizeEvent};
pub use driver::Simulation;
