//! The three flocking rules.
//!
//! Each rule looks at the boid at `index` in a read-only slice and returns a
//! steering force, or the zero vector when no neighbour qualifies. The boid is
//! excluded from its own neighbourhood by index, not by distance, so another
//! boid sitting on exactly the same spot still counts.

use crate::boid::Boid;
use crate::vector::Vector2D;

/// Other boids strictly closer than `radius`, with their distance.
fn neighbors<'a>(
    boid: &'a Boid,
    index: usize,
    boids: &'a [Boid],
    radius: f32,
) -> impl Iterator<Item = (&'a Boid, f32)> + 'a {
    boids
        .iter()
        .enumerate()
        .filter(move |(i, _)| *i != index)
        .map(move |(_, other)| (other, Vector2D::distance(boid.position, other.position)))
        .filter(move |(_, distance)| *distance < radius)
}

/// Turn a desired direction into a force: full speed along it, minus the
/// current velocity, capped at `max_force`.
pub fn steer(boid: &Boid, mut desired: Vector2D) -> Vector2D {
    desired
        .set_magnitude(boid.max_speed())
        .subtract(boid.velocity)
        .limit_magnitude(boid.max_force());
    desired
}

pub fn alignment(boid: &Boid, index: usize, boids: &[Boid]) -> Vector2D {
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, _) in neighbors(boid, index, boids, boid.perception_radius()) {
        sum += other.velocity;
        count += 1;
    }

    if count > 0 {
        sum.divide(count as f32);
        steer(boid, sum)
    } else {
        Vector2D::zero()
    }
}

pub fn cohesion(boid: &Boid, index: usize, boids: &[Boid]) -> Vector2D {
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, _) in neighbors(boid, index, boids, boid.perception_radius()) {
        sum += other.position;
        count += 1;
    }

    if count > 0 {
        sum.divide(count as f32).subtract(boid.position);
        steer(boid, sum)
    } else {
        Vector2D::zero()
    }
}

/// Inverse-square repulsion from boids inside the separation radius.
///
/// A neighbour at distance zero has a zero offset, and the zero-guarded divide
/// keeps it that way: it is counted but pushes nothing.
pub fn separation(boid: &Boid, index: usize, boids: &[Boid]) -> Vector2D {
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (other, distance) in neighbors(boid, index, boids, boid.separation_radius()) {
        let mut away = Vector2D::difference(boid.position, other.position);
        away.divide(distance * distance);
        sum += away;
        count += 1;
    }

    if count > 0 {
        sum.divide(count as f32);
        steer(boid, sum)
    } else {
        Vector2D::zero()
    }
}
