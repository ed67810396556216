//! World-wide settings handed to the physics at construction.
//!
//! Every field has a default, so a scenario file only needs to name what it
//! changes:
//!
//! ```yaml
//! bounds: { width: 800, height: 600 }
//! gravity: 900.0          # px/s^2, pulls towards y = 0
//! damping: { ground: 0.6, walls: 0.2 }
//! strategy: impulse       # or "separate"
//! ```

use serde::{Deserialize, Serialize};

use crate::collision::{Bounds, ResponseStrategy, WallDamping};
use crate::error::PhysicsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Arena size in pixels
    pub bounds: Bounds,
    /// Seconds per frame the driver steps with
    pub frame_time: f64,
    /// Downward acceleration in px/s^2
    pub gravity: f64,
    pub damping: WallDamping,
    /// Restitution for bodies that do not set their own
    pub restitution: f64,
    pub strategy: ResponseStrategy,
    /// Integration sub-steps per frame
    pub substeps: u32,
}

impl WorldConfig {
    /// Falling discs with lossy ground and wall bounces.
    pub fn gravity_preset() -> Self {
        WorldConfig {
            gravity: 900.0,
            damping: WallDamping {
                ground: 0.6,
                ceiling: 1.0,
                walls: 0.2,
            },
            ..WorldConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.bounds.validate()?;
        self.damping.validate()?;
        if !self.frame_time.is_finite() || self.frame_time <= 0.0 {
            return Err(PhysicsError::InvalidFrameTime(self.frame_time));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(PhysicsError::InvalidCoefficient {
                name: "gravity",
                value: self.gravity,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidRestitution(self.restitution));
        }
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidSubsteps(self.substeps));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            bounds: Bounds::default(),
            frame_time: 1.0 / 60.0,
            gravity: 0.0,
            damping: WallDamping::NONE,
            restitution: 1.0,
            strategy: ResponseStrategy::Impulse,
            substeps: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds, Bounds { width: 800.0, height: 600.0 });
        assert_eq!(config.gravity, 0.0);
        assert_eq!(config.damping, WallDamping::NONE);
        assert_eq!(config.strategy, ResponseStrategy::Impulse);
        assert_eq!(config.substeps, 1);
    }

    #[test]
    fn test_gravity_preset() {
        let config = WorldConfig::gravity_preset();
        assert!(config.validate().is_ok());
        assert!(config.gravity > 0.0);
        assert_eq!(config.damping.ground, 0.6);
        assert_eq!(config.damping.walls, 0.2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_frame = WorldConfig { frame_time: 0.0, ..WorldConfig::default() };
        assert_eq!(bad_frame.validate(), Err(PhysicsError::InvalidFrameTime(0.0)));

        let bad_substeps = WorldConfig { substeps: 0, ..WorldConfig::default() };
        assert_eq!(bad_substeps.validate(), Err(PhysicsError::InvalidSubsteps(0)));

        let bad_restitution = WorldConfig { restitution: 2.0, ..WorldConfig::default() };
        assert!(bad_restitution.validate().is_err());

        let bad_gravity = WorldConfig { gravity: f64::NAN, ..WorldConfig::default() };
        assert!(bad_gravity.validate().is_err());

        // Gravity only ever pulls down
        let upward_gravity = WorldConfig { gravity: -900.0, ..WorldConfig::default() };
        assert_eq!(
            upward_gravity.validate(),
            Err(PhysicsError::InvalidCoefficient { name: "gravity", value: -900.0 })
        );

        let bad_bounds = WorldConfig {
            bounds: Bounds { width: -1.0, height: 600.0 },
            ..WorldConfig::default()
        };
        assert!(bad_bounds.validate().is_err());
    }
}
