//! Spring physics
//!
//! A damped harmonic oscillator that lazily chases a target value, giving
//! pointer-driven motion physical inertia. Integration is semi-implicit
//! Euler over fixed substeps: `a = (k·(target − x) − c·v) / m`, then
//! `v += a·h; x += v·h`. Substeps are capped at 1/120 s so a dropped frame
//! or a backgrounded tab cannot destabilize the simulation; stalls longer
//! than `MAX_SUBSTEPS` substeps advance by that bounded amount instead.
//!
//! Retargeting mid-flight keeps the current velocity, so interrupted
//! animations continue with momentum.

use serde::{Deserialize, Serialize};

/// Longest single integration step.
pub const MAX_SUBSTEP: f32 = 1.0 / 120.0;

/// Upper bound on substeps per `step` call.
const MAX_SUBSTEPS: u32 = 256;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Position error below which the spring counts as quiescent
    #[serde(default = "default_epsilon")]
    pub epsilon_position: f32,
    /// Velocity magnitude below which the spring counts as quiescent
    #[serde(default = "default_epsilon")]
    pub epsilon_velocity: f32,
    /// Consecutive quiescent ticks required before reporting settled
    #[serde(default = "default_settle_ticks")]
    pub settle_ticks: u32,
}

fn default_epsilon() -> f32 {
    1e-3
}

fn default_settle_ticks() -> u32 {
    3
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            epsilon_position: default_epsilon(),
            epsilon_velocity: default_epsilon(),
            settle_ticks: default_settle_ticks(),
        }
    }

    /// Soft, slow approach
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Underdamped, visible oscillation
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Quick settle with minimal overshoot
    pub fn stiff() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    /// Near-instant response
    pub fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Overdamped glide, the feel for pointer-following values
    pub fn smooth() -> Self {
        Self::new(100.0, 30.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0, 1.0)
    }
}

/// A spring-integrated value
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    position: f32,
    velocity: f32,
    settled_ticks: u32,
}

impl Spring {
    /// Create a spring resting at `initial`. Degenerate parameters are
    /// sanitized: stiffness and mass are forced positive, damping
    /// non-negative.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        let config = SpringConfig {
            stiffness: config.stiffness.max(1e-3),
            damping: config.damping.max(0.0),
            mass: config.mass.max(1e-3),
            ..config
        };
        Self {
            config,
            target: initial,
            position: initial,
            velocity: 0.0,
            settled_ticks: config.settle_ticks,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Retarget, preserving current velocity.
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.settled_ticks = 0;
        }
    }

    /// Jump to `value` immediately, at rest.
    pub fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.position = value;
        self.velocity = 0.0;
        self.settled_ticks = self.config.settle_ticks;
    }

    /// Whether the spring has been quiescent long enough for the scheduler
    /// to skip it.
    pub fn is_settled(&self) -> bool {
        self.settled_ticks >= self.config.settle_ticks
    }

    /// Advance the simulation by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f32) -> f32 {
        if dt <= 0.0 || !dt.is_finite() || self.is_settled() {
            return self.position;
        }

        let steps = ((dt / MAX_SUBSTEP).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let h = (dt / steps as f32).min(MAX_SUBSTEP);

        for _ in 0..steps {
            let accel = (self.config.stiffness * (self.target - self.position)
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if (self.target - self.position).abs() < self.config.epsilon_position
            && self.velocity.abs() < self.config.epsilon_velocity
        {
            self.settled_ticks = self.settled_ticks.saturating_add(1);
            if self.is_settled() {
                // Snap the residual error away once, then rest.
                self.position = self.target;
                self.velocity = 0.0;
            }
        } else {
            self.settled_ticks = 0;
        }

        self.position
    }
}
