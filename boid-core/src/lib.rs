#![cfg_attr(not(feature = "std"), no_std)]

//! Boid flocking engine.
//!
//! A [`Flock`] of [`Boid`]s steered by alignment, cohesion and separation.
//! The host calls [`Flock::step_all`] once per frame with the current
//! [`FlockParams`] and world [`Bounds`], then draws each boid from its
//! `position` and [`Boid::heading`].

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod behavior;
mod boid;
mod flock;
mod params;
mod vector;

pub use boid::Boid;
pub use flock::Flock;
pub use params::{Bounds, FlockParams};
pub use vector::Vector2D;

pub const DEFAULT_MAX_FORCE: f32 = 0.1;
pub const DEFAULT_MAX_SPEED: f32 = 4.0;
pub const DEFAULT_PERCEPTION_RADIUS: f32 = 50.0;

/// Separation radius as a fraction of the perception radius.
pub const SEPARATION_RATIO: f32 = 0.5;

/// Speed range of freshly spawned boids.
pub const MIN_SPAWN_SPEED: f32 = 2.0;
pub const MAX_SPAWN_SPEED: f32 = 4.0;
