//! Scenario descriptions: a world config plus the discs to put in it.
//!
//! Scenarios are plain `serde` data so a front-end can load them from YAML:
//!
//! ```yaml
//! world:
//!   gravity: 900.0
//!   damping: { ground: 0.6, walls: 0.2 }
//! player: 0
//! bodies:
//!   - position: { x: 500, y: 500 }
//!     velocity: { x: -300, y: 300 }
//!     radius: 30
//!     mass: 5
//!     color: { r: 255, g: 255, b: 0 }
//! random_fill:
//!   count: 10
//!   radius: 30
//!   mass: 5
//!   seed: 12
//! ```

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::WorldConfig;
use super::physics_world::PhysicsWorld;
use crate::common::Color;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// One explicitly placed disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    pub radius: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Static discs ignore `mass` and `velocity`.
    #[serde(default, rename = "static")]
    pub fixed: bool,
    #[serde(default)]
    pub restitution: Option<f64>,
    #[serde(default)]
    pub angular_velocity: f64,
    #[serde(default)]
    pub color: Option<Color>,
}

fn default_mass() -> f64 {
    1.0
}

impl BodyConfig {
    pub fn build(&self) -> Result<RigidBody, PhysicsError> {
        let mut body = if self.fixed {
            RigidBody::new_static(self.position, self.radius)?
        } else {
            RigidBody::new(self.position, self.radius, self.mass)?
                .with_velocity(self.velocity)
                .with_angular_velocity(self.angular_velocity)
        };
        if let Some(restitution) = self.restitution {
            body = body.with_restitution(restitution)?;
        }
        if let Some(color) = self.color {
            body = body.with_color(color);
        }
        Ok(body)
    }
}

/// Identical discs scattered over the arena from a seeded RNG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomFill {
    pub count: usize,
    pub radius: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default)]
    pub restitution: Option<f64>,
    /// Each velocity component is drawn from `[-max_speed, max_speed]`.
    #[serde(default)]
    pub max_speed: f64,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub color: Option<Color>,
}

/// Upper bound on `RandomFill::count`.
pub const MAX_RANDOM_BODIES: usize = 100_000;

impl RandomFill {
    /// Generates the discs, keeping every center at least one radius away
    /// from the walls. Overlaps between discs are left to the first step.
    pub fn generate(&self, config: &WorldConfig) -> Result<Vec<RigidBody>, PhysicsError> {
        // Every disc is a copy of this one, so bad radius, mass or
        // restitution values fail before any sampling
        let mut template = RigidBody::new(Vec2::ZERO, self.radius, self.mass)?;
        if let Some(restitution) = self.restitution {
            template = template.with_restitution(restitution)?;
        }
        if let Some(color) = self.color {
            template = template.with_color(color);
        }

        if self.count > MAX_RANDOM_BODIES {
            return Err(PhysicsError::InvalidCoefficient {
                name: "random_fill.count",
                value: self.count as f64,
            });
        }
        let (w, h, r) = (config.bounds.width, config.bounds.height, self.radius);
        if !config.bounds.fits(r) {
            return Err(PhysicsError::EmptyArena { radius: r });
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(PhysicsError::InvalidCoefficient {
                name: "random_fill.max_speed",
                value: self.max_speed,
            });
        }

        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut bodies = Vec::new();
        for _ in 0..self.count {
            let position = Vec2::new(rng.random_range(r..=w - r), rng.random_range(r..=h - r));
            let velocity = if self.max_speed > 0.0 {
                Vec2::new(
                    rng.random_range(-self.max_speed..=self.max_speed),
                    rng.random_range(-self.max_speed..=self.max_speed),
                )
            } else {
                Vec2::ZERO
            };

            let mut body = template.clone().with_velocity(velocity);
            body.set_position(position);
            bodies.push(body);
        }
        Ok(bodies)
    }
}

/// Everything needed to set up a playground run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub random_fill: Option<RandomFill>,
    /// Index of the body driven by keyboard input, if any.
    #[serde(default)]
    pub player: Option<usize>,
    /// Speed in px/s the player is set to when a direction key is pressed.
    #[serde(default = "default_player_speed")]
    pub player_speed: f64,
}

fn default_player_speed() -> f64 {
    600.0
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            world: WorldConfig::default(),
            bodies: Vec::new(),
            random_fill: None,
            player: None,
            player_speed: default_player_speed(),
        }
    }
}

impl ScenarioConfig {
    /// Builds the world: explicit bodies first, in file order, then the
    /// random fill.
    pub fn build_world(&self) -> Result<PhysicsWorld, PhysicsError> {
        let mut world = PhysicsWorld::new(self.world.clone())?;
        for body_cfg in &self.bodies {
            let body = body_cfg.build()?;
            // A disc wider than the arena would hop between opposite walls
            if body.is_dynamic() && !self.world.bounds.fits(body.radius()) {
                return Err(PhysicsError::EmptyArena { radius: body.radius() });
            }
            world.add_body(body);
        }
        if let Some(fill) = &self.random_fill {
            for body in fill.generate(&self.world)? {
                world.add_body(body);
            }
        }

        if let Some(index) = self.player {
            let len = world.bodies().len();
            if index >= len {
                return Err(PhysicsError::BodyOutOfRange { index, len });
            }
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(PhysicsError::InvalidCoefficient {
                name: "player_speed",
                value: self.player_speed,
            });
        }

        debug!("scenario built with {} bodies", world.bodies().len());
        Ok(world)
    }
}
