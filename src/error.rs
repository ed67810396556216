//! Validation errors raised while building bodies, worlds and scenarios.
//!
//! Stepping a world never fails; everything here is caught at construction.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Radius must be finite and non-negative.
    InvalidRadius(f64),
    /// Dynamic bodies need a finite, strictly positive mass.
    InvalidMass(f64),
    /// Restitution must lie in [0, 1].
    InvalidRestitution(f64),
    /// Arena dimensions must be finite and positive.
    InvalidBounds { width: f64, height: f64 },
    /// A named coefficient (damping, gravity, speed) is out of range.
    InvalidCoefficient { name: &'static str, value: f64 },
    InvalidFrameTime(f64),
    InvalidSubsteps(u32),
    /// A body index does not exist in the world.
    BodyOutOfRange { index: usize, len: usize },
    /// The arena is too small to place a disc of the given radius.
    EmptyArena { radius: f64 },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius(r) => {
                write!(f, "body radius must be finite and non-negative, got {r}")
            }
            PhysicsError::InvalidMass(m) => {
                write!(f, "dynamic body mass must be finite and positive, got {m}")
            }
            PhysicsError::InvalidRestitution(e) => {
                write!(f, "restitution must be in range 0..=1, got {e}")
            }
            PhysicsError::InvalidBounds { width, height } => {
                write!(f, "arena must have positive size, got {width}x{height}")
            }
            PhysicsError::InvalidCoefficient { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
            PhysicsError::InvalidFrameTime(dt) => {
                write!(f, "frame time must be finite and positive, got {dt}")
            }
            PhysicsError::InvalidSubsteps(n) => {
                write!(f, "substeps must be at least 1, got {n}")
            }
            PhysicsError::BodyOutOfRange { index, len } => {
                write!(f, "body index {index} out of range for world with {len} bodies")
            }
            PhysicsError::EmptyArena { radius } => {
                write!(f, "no room in the arena for a disc of radius {radius}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
