//! The rolling-wheel player body
//!
//! The body never moves in world coordinates: it sits at the canvas center
//! and the terrain scrolls past it by the body's effective velocity. What it
//! owns is its velocity, the velocity carried over from a moving platform,
//! and a support state re-evaluated at the top of every tick.

use glam::Vec2;

use super::config::PlayerConfig;

/// Support state - exactly one holds at any instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Grounded,
    OnPlatform,
    Airborne,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Fixed world position (the spawn point at canvas center)
    pub pos: Vec2,
    /// Wheel radius
    pub radius: f32,
    /// Cosmetic spin, accumulated as if rolling without slipping
    pub angle: f32,
    /// Own velocity (x right, y down)
    pub vel: Vec2,
    /// Velocity carried from the platform currently underfoot
    pub carry: Vec2,
    pub support: Support,
    /// Cumulative horizontal travel - the session's score
    pub displacement: f32,
    pub config: PlayerConfig,
}

impl Player {
    pub fn new(config: PlayerConfig, spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            radius: config.radius,
            angle: 0.0,
            vel: Vec2::ZERO,
            carry: Vec2::ZERO,
            support: Support::Grounded,
            displacement: 0.0,
            config,
        }
    }

    /// The point just under the wheel used for support queries
    pub fn support_point(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.radius)
    }

    /// Whether the body currently has something to push against
    pub fn supported(&self) -> bool {
        matches!(self.support, Support::Grounded | Support::OnPlatform)
    }

    /// Accelerate toward the held direction, or coast down toward zero.
    /// Only meaningful while supported; the caller gates on that.
    pub fn steer(&mut self, left: bool, right: bool) {
        if left && !right {
            if self.vel.x - self.config.accel_x > -self.config.max_speed {
                self.vel.x -= self.config.accel_x;
            }
        } else if right && !left {
            if self.vel.x + self.config.accel_x < self.config.max_speed {
                self.vel.x += self.config.accel_x;
            }
        } else if self.vel.x > 0.0 {
            self.vel.x -= self.config.decel_x;
            if self.vel.x < 0.0 {
                self.vel.x = 0.0;
            }
        } else if self.vel.x < 0.0 {
            self.vel.x += self.config.decel_x;
            if self.vel.x > 0.0 {
                self.vel.x = 0.0;
            }
        }
    }

    /// Leave the surface. With momentum transfer enabled, the platform's
    /// carried velocity folds into the body's own before being cleared.
    pub fn jump(&mut self, momentum_transfer: bool) {
        self.vel.y -= self.config.jump_impulse;
        self.support = Support::Airborne;

        if momentum_transfer {
            self.vel += self.carry;
        }
        self.carry = Vec2::ZERO;
    }

    /// Instant stop (down-press while supported)
    pub fn brake(&mut self) {
        self.vel.x = 0.0;
    }

    /// Spin and distance bookkeeping for the frame
    pub fn roll(&mut self) {
        self.angle += self.vel.x / self.radius;
        self.displacement += self.vel.x;
    }

    /// Back to the spawn state; displacement resets too
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.angle = 0.0;
        self.vel = Vec2::ZERO;
        self.carry = Vec2::ZERO;
        self.support = Support::Grounded;
        self.displacement = 0.0;
    }
}
