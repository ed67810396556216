pub mod aabb;
pub mod boundary;
pub mod detection;
pub mod manifold;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use boundary::{bounce_off_walls, Bounds, WallDamping, WallHits};
pub use detection::{check_circle_circle, circles_overlap, COINCIDENT_EPSILON};
pub use manifold::CollisionManifold;
pub use response::{pair_restitution, resolve, ResponseStrategy};
