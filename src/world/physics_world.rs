use log::{debug, trace};

use super::config::WorldConfig;
use crate::collision::{self, CollisionManifold, WallHits};
use crate::error::PhysicsError;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// What happened during one call to [`step_bodies`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Contacts detected and resolved, in resolution order.
    pub contacts: Vec<CollisionManifold>,
    /// Number of wall bounces across all bodies.
    pub wall_hits: usize,
}

/// Advances `bodies` by one frame of `dt` seconds, split into
/// `config.substeps` equal sub-steps.
///
/// Each sub-step integrates and wall-bounces every body, then resolves every
/// unordered pair `(i, j)` with `i < j` once, in index order. Resolution is
/// sequential: a pair sees positions and velocities already changed by the
/// pairs resolved before it.
pub fn step_bodies(bodies: &mut [RigidBody], config: &WorldConfig, dt: f64) -> StepReport {
    let mut report = StepReport::default();
    if !dt.is_finite() || dt <= 0.0 {
        return report;
    }

    let substeps = config.substeps.max(1);
    let sub_dt = dt / substeps as f64;

    for _ in 0..substeps {
        // 1. Integrate motion and keep bodies in the arena
        for body in bodies.iter_mut() {
            integrator::integrate(body, sub_dt, config.gravity);
            let hits: WallHits = collision::bounce_off_walls(body, &config.bounds, &config.damping);
            report.wall_hits += hits.count();
        }

        // 2. Detect and resolve every unordered pair once
        for i in 0..bodies.len() {
            // Get mutable references using split_at_mut to satisfy the borrow checker
            let (head, tail) = bodies.split_at_mut(i + 1);
            let body_a = &mut head[i];
            for (offset, body_b) in tail.iter_mut().enumerate() {
                let j = i + 1 + offset;
                if !body_a.is_dynamic() && !body_b.is_dynamic() {
                    continue;
                }
                if let Some(manifold) = collision::check_circle_circle(body_a, i, body_b, j) {
                    let restitution = collision::pair_restitution(body_a, body_b, config.restitution);
                    trace!(
                        "contact {}-{}: normal={:?} depth={:.3} e={:.2}",
                        i,
                        j,
                        manifold.normal,
                        manifold.depth,
                        restitution
                    );
                    collision::resolve(body_a, body_b, &manifold, config.strategy, restitution);
                    report.contacts.push(manifold);
                }
            }
        }
    }

    report
}

pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    config: WorldConfig,
    // Contacts resolved during the last step, for debug drawing
    contacts: Vec<CollisionManifold>,
    paused: bool,
}

impl PhysicsWorld {
    /// Creates an empty world after validating `config`.
    pub fn new(config: WorldConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        debug!(
            "new world {}x{} gravity={} strategy={:?} substeps={}",
            config.bounds.width, config.bounds.height, config.gravity, config.strategy, config.substeps
        );
        Ok(Self {
            bodies: Vec::new(),
            config,
            contacts: Vec::new(),
            paused: false,
        })
    }

    /// Adds a body to the world and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Mutable access for scene setup between frames.
    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Sets one body's velocity, e.g. the player's from keyboard input.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec2) -> Result<(), PhysicsError> {
        let len = self.bodies.len();
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(PhysicsError::BodyOutOfRange { index, len })?;
        body.set_velocity(velocity);
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("world paused: {}", self.paused);
    }

    /// Advances the simulation by one frame of `dt` seconds.
    /// Does nothing while paused or for a non-positive or non-finite `dt`.
    pub fn step(&mut self, dt: f64) {
        if self.paused || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let report = step_bodies(&mut self.bodies, &self.config, dt);
        self.contacts = report.contacts;
    }

    /// Steps one frame of the configured `frame_time`.
    pub fn step_frame(&mut self) {
        self.step(self.config.frame_time);
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .fold(Vec2::ZERO, |acc, body| acc + body.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            config: WorldConfig::default(),
            contacts: Vec::new(),
            paused: false,
        }
    }
}
