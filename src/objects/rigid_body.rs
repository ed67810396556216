use crate::collision::AABB;
use crate::common::Color;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// Whether a body takes part in the simulation or stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    /// Infinite mass: never integrated, bounced or pushed by contacts.
    Static,
}

/// Bounding frame in y-down screen space, as a renderer wants it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A disc with kinematic state. Positions are y-up pixels and velocities
/// are pixels per second.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Fixed at construction
    radius: f64,
    mass: f64,
    inv_mass: f64, // 0.0 for static
    kind: BodyKind,

    // Primary state, written by the world step
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) rotation: f64,         // Radians, wrapped to [-PI, PI]
    pub(crate) angular_velocity: f64, // Radians per second

    /// Overrides the world's default restitution when set.
    restitution: Option<f64>,
    color: Color,
}

impl RigidBody {
    /// Creates a dynamic disc at rest.
    pub fn new(position: Vec2, radius: f64, mass: f64) -> Result<Self, PhysicsError> {
        validate_radius(radius)?;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            radius,
            mass,
            inv_mass: 1.0 / mass,
            kind: BodyKind::Dynamic,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            restitution: None,
            color: Color::default(),
        })
    }

    /// Creates an immovable disc (a peg). Its mass reads as 0.0.
    pub fn new_static(position: Vec2, radius: f64) -> Result<Self, PhysicsError> {
        validate_radius(radius)?;

        Ok(Self {
            radius,
            mass: 0.0,
            inv_mass: 0.0,
            kind: BodyKind::Static,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            restitution: None,
            color: Color::RED,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        if self.is_dynamic() {
            self.velocity = velocity;
        }
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        if self.is_dynamic() {
            self.angular_velocity = angular_velocity;
        }
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Result<Self, PhysicsError> {
        validate_restitution(restitution)?;
        self.restitution = Some(restitution);
        Ok(self)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn restitution(&self) -> Option<f64> {
        self.restitution
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Overwrites the velocity between frames, e.g. from player input.
    /// Static bodies ignore it.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if self.is_dynamic() {
            self.velocity = velocity;
        }
    }

    /// Teleports the body. Meant for scene setup, not for use mid-step.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Linear momentum (zero for static bodies).
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Calculates the world-space Axis-Aligned Bounding Box (AABB) for this body.
    pub fn calculate_aabb(&self) -> AABB {
        let radius_vec = Vec2::new(self.radius, self.radius);
        AABB::new(self.position - radius_vec, self.position + radius_vec)
    }

    /// Bounding frame flipped into y-down screen space for an arena of
    /// `screen_height` pixels.
    pub fn screen_rect(&self, screen_height: f64) -> ScreenRect {
        let aabb = self.calculate_aabb();
        let w = aabb.max.x - aabb.min.x;
        let h = aabb.max.y - aabb.min.y;
        ScreenRect {
            x: aabb.min.x,
            y: screen_height - aabb.min.y - h,
            w,
            h,
        }
    }
}

fn validate_radius(radius: f64) -> Result<(), PhysicsError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(PhysicsError::InvalidRadius(radius));
    }
    Ok(())
}

pub(crate) fn validate_restitution(restitution: f64) -> Result<(), PhysicsError> {
    if !(0.0..=1.0).contains(&restitution) {
        return Err(PhysicsError::InvalidRestitution(restitution));
    }
    Ok(())
}
