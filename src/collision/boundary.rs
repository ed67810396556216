//! Bouncing discs off the four walls of a rectangular arena.
//!
//! The arena spans `[0, width] x [0, height]` with y pointing up, so the
//! ground is `y = 0` and the ceiling is `y = height`.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::objects::rigid_body::RigidBody;

/// Size of the arena in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        let bounds = Bounds { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Whether a disc of `radius` can sit in the arena without touching two
    /// opposite walls at once.
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(PhysicsError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Fraction of the normal speed kept after hitting each kind of wall.
/// 1.0 reflects without loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallDamping {
    pub ground: f64,
    pub ceiling: f64,
    /// Left and right walls.
    pub walls: f64,
}

impl WallDamping {
    pub const NONE: WallDamping = WallDamping {
        ground: 1.0,
        ceiling: 1.0,
        walls: 1.0,
    };

    pub fn validate(&self) -> Result<(), PhysicsError> {
        for (name, value) in [
            ("damping.ground", self.ground),
            ("damping.ceiling", self.ceiling),
            ("damping.walls", self.walls),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PhysicsError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

impl Default for WallDamping {
    fn default() -> Self {
        WallDamping::NONE
    }
}

/// Which walls a body bounced off during one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHits {
    pub ground: bool,
    pub ceiling: bool,
    pub left: bool,
    pub right: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.ground || self.ceiling || self.left || self.right
    }

    pub fn count(&self) -> usize {
        [self.ground, self.ceiling, self.left, self.right]
            .iter()
            .filter(|hit| **hit)
            .count()
    }
}

/// Clamps a body back inside the arena and reflects the velocity component
/// that carried it out. A plane is only tested while the body moves towards
/// it, so a body already heading away is left alone.
pub fn bounce_off_walls(body: &mut RigidBody, bounds: &Bounds, damping: &WallDamping) -> WallHits {
    let mut hits = WallHits::default();
    if !body.is_dynamic() {
        return hits;
    }

    let r = body.radius();

    if body.velocity.y < 0.0 && body.position.y < r {
        body.position.y = r;
        body.velocity.y = -body.velocity.y * damping.ground;
        hits.ground = true;
    } else if body.velocity.y > 0.0 && body.position.y > bounds.height - r {
        body.position.y = bounds.height - r;
        body.velocity.y = -body.velocity.y * damping.ceiling;
        hits.ceiling = true;
    }

    if body.velocity.x < 0.0 && body.position.x < r {
        body.position.x = r;
        body.velocity.x = -body.velocity.x * damping.walls;
        hits.left = true;
    } else if body.velocity.x > 0.0 && body.position.x > bounds.width - r {
        body.position.x = bounds.width - r;
        body.velocity.x = -body.velocity.x * damping.walls;
        hits.right = true;
    }

    if hits.any() {
        trace!(
            "wall bounce {:?}: pos={:?} vel={:?}",
            hits,
            body.position,
            body.velocity
        );
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-10;

    fn body_at(x: f64, y: f64, vx: f64, vy: f64) -> RigidBody {
        RigidBody::new(Vec2::new(x, y), 30.0, 1.0)
            .unwrap()
            .with_velocity(Vec2::new(vx, vy))
    }

    #[test]
    fn test_bounds_fits() {
        let bounds = Bounds::default();
        assert!(bounds.fits(300.0));
        assert!(!bounds.fits(300.5));
        assert!(!bounds.fits(f64::NAN));
    }

    #[test]
    fn test_ground_bounce_without_damping() {
        let mut body = body_at(100.0, 25.0, 0.0, -5.0);
        let hits = bounce_off_walls(&mut body, &Bounds::default(), &WallDamping::NONE);

        assert!(hits.ground);
        assert_eq!(hits.count(), 1);
        assert_eq!(body.position.y, 30.0);
        assert_eq!(body.velocity.y, 5.0);
    }

    #[test]
    fn test_ground_bounce_with_damping() {
        let damping = WallDamping { ground: 0.6, ceiling: 1.0, walls: 0.2 };
        let mut body = body_at(100.0, 10.0, 0.0, -10.0);
        bounce_off_walls(&mut body, &Bounds::default(), &damping);
        assert!((body.velocity.y - 6.0).abs() < EPSILON);

        let mut body = body_at(10.0, 300.0, -10.0, 0.0);
        bounce_off_walls(&mut body, &Bounds::default(), &damping);
        assert!((body.velocity.x - 2.0).abs() < EPSILON);
        assert_eq!(body.position.x, 30.0);
    }

    #[test]
    fn test_ceiling_and_right_wall() {
        let bounds = Bounds::new(800.0, 600.0).unwrap();
        let mut body = body_at(790.0, 590.0, 3.0, 4.0);
        let hits = bounce_off_walls(&mut body, &bounds, &WallDamping::NONE);

        assert!(hits.ceiling && hits.right);
        assert!(!hits.ground && !hits.left);
        assert_eq!(body.position, Vec2::new(770.0, 570.0));
        assert_eq!(body.velocity, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        // Inside the ground band but already rising
        let mut body = body_at(100.0, 20.0, 0.0, 5.0);
        let before = body.clone();
        let hits = bounce_off_walls(&mut body, &Bounds::default(), &WallDamping::NONE);
        assert!(!hits.any());
        assert_eq!(body, before);
    }

    #[test]
    fn test_bounce_is_idempotent() {
        let mut body = body_at(10.0, 10.0, -4.0, -4.0);
        let bounds = Bounds::default();
        let first = bounce_off_walls(&mut body, &bounds, &WallDamping::NONE);
        assert_eq!(first.count(), 2);

        let after_first = body.clone();
        for _ in 0..5 {
            let hits = bounce_off_walls(&mut body, &bounds, &WallDamping::NONE);
            assert!(!hits.any());
        }
        assert_eq!(body, after_first);
    }

    #[test]
    fn test_static_bodies_are_ignored() {
        let mut peg = RigidBody::new_static(Vec2::new(-50.0, -50.0), 10.0).unwrap();
        let hits = bounce_off_walls(&mut peg, &Bounds::default(), &WallDamping::NONE);
        assert!(!hits.any());
        assert_eq!(peg.position(), Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn test_validation() {
        assert!(Bounds::new(0.0, 10.0).is_err());
        assert!(Bounds::new(10.0, f64::NAN).is_err());
        assert!(WallDamping::default().validate().is_ok());
        let bad = WallDamping { ground: 1.5, ..WallDamping::default() };
        assert_eq!(
            bad.validate(),
            Err(PhysicsError::InvalidCoefficient { name: "damping.ground", value: 1.5 })
        );
    }
}
