//! Pong court state
//!
//! Ball, two paddles and the seeded RNG the deflection bands draw from.
//! Paddles know nothing about each other; the tick queries across them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::PongConfig;
use crate::ConfigError;

/// Which player a score or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

/// The ball: position and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Center court, straight down at serve speed
    pub fn serve(config: &PongConfig) -> Self {
        Self {
            pos: Vec2::new(config.court_width / 2.0, config.court_height / 2.0),
            vel: Vec2::new(0.0, config.serve_speed),
        }
    }
}

/// AI pre-positioning state for the current ball flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTargeting {
    /// x the paddle center wants to reach
    pub target_x: f32,
    /// A target has been computed for this flight
    pub target_set: bool,
    /// Travel finished; the paddle is in deflection mode
    pub target_reached: bool,
}

impl AiTargeting {
    fn parked(config: &PongConfig) -> Self {
        Self {
            target_x: config.court_width / 2.0,
            target_set: false,
            target_reached: false,
        }
    }

    /// Forget the current flight (after any paddle contact)
    pub fn clear(&mut self) {
        self.target_set = false;
        self.target_reached = false;
    }
}

/// One paddle: a horizontal slab at a fixed row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed per side)
    pub y: f32,
    /// Signed travel this tick; zero when idle
    pub speed: f32,
    pub score: u32,
    pub ai: AiTargeting,
}

impl Paddle {
    fn new(x: f32, y: f32, config: &PongConfig) -> Self {
        Self {
            x,
            y,
            speed: 0.0,
            score: 0,
            ai: AiTargeting::parked(config),
        }
    }

    pub fn center_x(&self, config: &PongConfig) -> f32 {
        self.x + config.paddle_width / 2.0
    }

    /// Step left, clamped at the court edge
    pub fn move_left(&mut self, config: &PongConfig) {
        if self.x > 0.0 {
            self.x -= config.paddle_speed;
            self.speed = -config.paddle_speed;
        }
    }

    /// Step right, clamped at the court edge
    pub fn move_right(&mut self, config: &PongConfig) {
        if self.x + config.paddle_width < config.court_width {
            self.x += config.paddle_speed;
            self.speed = config.paddle_speed;
        }
    }
}

/// A complete Pong match
pub struct PongState {
    pub config: PongConfig,
    pub ball: Ball,
    /// Bottom paddle, driven by input
    pub human: Paddle,
    /// Top paddle, driven by the AI
    pub computer: Paddle,
    pub(crate) rng: Pcg32,
    pub seed: u64,
}

impl PongState {
    /// Build a match from a validated configuration and a seed.
    /// Fails fast on malformed configuration.
    pub fn new(config: PongConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = (config.court_width - config.paddle_width) / 2.0;
        Ok(Self {
            ball: Ball::serve(&config),
            human: Paddle::new(
                center,
                config.court_height - config.paddle_gap,
                &config,
            ),
            computer: Paddle::new(center, config.paddle_gap - config.paddle_height, &config),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            config,
        })
    }

    /// Fresh match: paddles centered, scores zeroed, ball on serve.
    /// The RNG stream continues; it is not reseeded.
    pub fn reset(&mut self) {
        let center = (self.config.court_width - self.config.paddle_width) / 2.0;
        self.human.x = center;
        self.computer.x = center;
        self.human.score = 0;
        self.computer.score = 0;
        self.human.speed = 0.0;
        self.computer.speed = 0.0;
        self.computer.ai = AiTargeting::parked(&self.config);
        self.ball = Ball::serve(&self.config);
    }
}
