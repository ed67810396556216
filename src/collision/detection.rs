use log::debug;

use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Below this center distance the contact normal is undefined.
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Normal used when two centers coincide.
const FALLBACK_NORMAL: Vec2 = Vec2::RIGHT;

/// Cheap overlap test: squared center distance against squared radii sum.
/// Touching discs do not overlap.
pub fn circles_overlap(body_a: &RigidBody, body_b: &RigidBody) -> bool {
    let radii_sum = body_a.radius() + body_b.radius();
    body_a.position().distance_squared(body_b.position()) < radii_sum * radii_sum
}

/// Checks for collision between two discs.
/// Returns a CollisionManifold if they overlap, None otherwise.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    // Broad phase: disjoint boxes cannot hold overlapping discs
    if !body_a.calculate_aabb().overlaps(&body_b.calculate_aabb()) {
        return None;
    }

    let dist_vec = body_b.position() - body_a.position();
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = body_a.radius() + body_b.radius();

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    // Only colliding pairs pay for the square root
    let distance = dist_sq.sqrt();
    if distance < COINCIDENT_EPSILON {
        debug!(
            "bodies {} and {} have coincident centers at {:?}, using fallback normal",
            body_a_idx,
            body_b_idx,
            body_a.position()
        );
        return Some(CollisionManifold {
            body_a_idx,
            body_b_idx,
            normal: FALLBACK_NORMAL,
            depth: radii_sum,
            coincident: true,
        });
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal: dist_vec * (1.0 / distance),
        depth: radii_sum - distance,
        coincident: false,
    })
}
