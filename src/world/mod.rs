pub mod config;
pub mod physics_world;
pub mod scenario;

pub use config::WorldConfig;
pub use physics_world::{step_bodies, PhysicsWorld, StepReport};
pub use scenario::{BodyConfig, RandomFill, ScenarioConfig};
