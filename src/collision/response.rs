//! Resolving a detected disc overlap.

use log::trace;
use serde::{Deserialize, Serialize};

use super::detection::COINCIDENT_EPSILON;
use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// How overlapping discs are pulled apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStrategy {
    /// Push both discs apart by half the depth each. Velocities are untouched,
    /// so discs stop overlapping but never bounce.
    Separate,
    /// Mass-weighted elastic impulse along the center line, followed by a
    /// separation split by inverse mass.
    #[default]
    Impulse,
}

/// Restitution used for a pair: the less bouncy of the two, each falling
/// back to the world default.
pub fn pair_restitution(body_a: &RigidBody, body_b: &RigidBody, default: f64) -> f64 {
    let e_a = body_a.restitution().unwrap_or(default);
    let e_b = body_b.restitution().unwrap_or(default);
    e_a.min(e_b)
}

/// Applies `strategy` to a pair that `manifold` describes.
pub fn resolve(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    manifold: &CollisionManifold,
    strategy: ResponseStrategy,
    restitution: f64,
) {
    match strategy {
        ResponseStrategy::Separate => separate(body_a, body_b, manifold),
        ResponseStrategy::Impulse => {
            apply_impulse(body_a, body_b, manifold, restitution);
            separate_by_mass(body_a, body_b, manifold);
        }
    }
}

/// Symmetric, mass-agnostic positional separation.
pub fn separate(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &CollisionManifold) {
    let share_a = match (body_a.is_dynamic(), body_b.is_dynamic()) {
        (true, true) => 0.5,
        (true, false) => 1.0,
        (false, true) => 0.0,
        (false, false) => return,
    };
    push_apart(body_a, body_b, manifold, share_a);
}

/// Positional separation where the lighter body moves further.
pub fn separate_by_mass(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &CollisionManifold) {
    let total_inv_mass = body_a.inv_mass() + body_b.inv_mass();
    if total_inv_mass == 0.0 {
        return;
    }
    push_apart(body_a, body_b, manifold, body_a.inv_mass() / total_inv_mass);
}

fn push_apart(body_a: &mut RigidBody, body_b: &mut RigidBody, manifold: &CollisionManifold, share_a: f64) {
    let correction = manifold.normal * manifold.depth;
    body_a.position -= correction * share_a;
    body_b.position += correction * (1.0 - share_a);
}

/// Mass-weighted elastic impulse. Both velocity changes are computed from the
/// velocities as they were before this call. Returns false when the pair is
/// already separating or both bodies are static.
pub fn apply_impulse(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    manifold: &CollisionManifold,
    restitution: f64,
) -> bool {
    let total_inv_mass = body_a.inv_mass() + body_b.inv_mass();
    if total_inv_mass == 0.0 {
        return false;
    }

    let (vel_a, vel_b) = (body_a.velocity, body_b.velocity);

    // Line of centers as seen from A. Coincident centers have none, so fall
    // back to the manifold's unit normal.
    let mut rel_pos = body_a.position - body_b.position;
    if manifold.coincident || rel_pos.magnitude_squared() < COINCIDENT_EPSILON * COINCIDENT_EPSILON {
        rel_pos = -manifold.normal;
    }
    let rel_vel = vel_a - vel_b;

    if rel_vel.dot(rel_pos) >= 0.0 {
        trace!(
            "bodies {} and {} already separating, no impulse",
            manifold.body_a_idx,
            manifold.body_b_idx
        );
        return false;
    }

    // mB / (mA + mB) == invA / (invA + invB); a static partner counts as 1.0
    let ratio_a = body_a.inv_mass() / total_inv_mass;
    let ratio_b = body_b.inv_mass() / total_inv_mass;

    let delta_a = velocity_delta(rel_pos, rel_vel, ratio_a, restitution);
    let delta_b = velocity_delta(-rel_pos, -rel_vel, ratio_b, restitution);

    body_a.velocity = vel_a + delta_a;
    body_b.velocity = vel_b + delta_b;

    trace!(
        "impulse between {} and {}: e={:.3} dvA={:?} dvB={:?}",
        manifold.body_a_idx,
        manifold.body_b_idx,
        restitution,
        delta_a,
        delta_b
    );
    true
}

/// Velocity change for one side of a contact, from that side's perspective:
/// `rel_pos = x_self - x_other`, `rel_vel = v_self - v_other`, and
/// `mass_ratio = m_other / (m_self + m_other)`.
fn velocity_delta(rel_pos: Vec2, rel_vel: Vec2, mass_ratio: f64, restitution: f64) -> Vec2 {
    let projection = rel_vel.dot(rel_pos) / rel_pos.magnitude_squared();
    rel_pos * (-(1.0 + restitution) * mass_ratio * projection)
}
