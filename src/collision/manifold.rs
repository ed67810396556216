use crate::math::vec2::Vec2;

/// Stores information about a collision between two discs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// Unit collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// Overlap along the normal, `(rA + rB) - distance`.
    pub depth: f64,
    /// Centers (almost) coincide; `normal` is the fixed fallback axis.
    pub coincident: bool,
}
