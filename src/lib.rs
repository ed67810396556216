pub mod math;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod world;
pub mod common;
pub mod error;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use objects::rigid_body::{BodyKind, RigidBody, ScreenRect};
pub use collision::{Bounds, CollisionManifold, ResponseStrategy, WallDamping, WallHits};
pub use world::{
    step_bodies, BodyConfig, PhysicsWorld, RandomFill, ScenarioConfig, StepReport, WorldConfig,
};
pub use common::Color;
pub use error::PhysicsError;
