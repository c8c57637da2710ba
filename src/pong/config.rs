//! Tunable configuration for the Pong court
//!
//! Defaults are the classic table. Validated up front, same contract as the
//! platformer: a malformed court never reaches the simulation.

use crate::ConfigError;

#[derive(Debug, Clone, Copy)]
pub struct PongConfig {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle travel per tick while steering
    pub paddle_speed: f32,
    /// Distance between each paddle and its court edge
    pub paddle_gap: f32,
    pub ball_radius: f32,
    /// Vertical ball speed on serve (and its magnitude thereafter)
    pub serve_speed: f32,
    /// Deflection band applied when the paddle steers against the ball's
    /// horizontal travel: multiplier on the paddle's speed
    pub lower_deflect: f32,
    pub upper_deflect: f32,
    /// Rebound band applied when the paddle steers with the ball's travel:
    /// multiplier on the ball's own horizontal speed
    pub lower_rebound: f32,
    pub upper_rebound: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            court_width: 1000.0,
            court_height: 550.0,
            paddle_width: 100.0,
            paddle_height: 12.0,
            paddle_speed: 5.0,
            paddle_gap: 30.0,
            ball_radius: 5.0,
            serve_speed: 5.0,
            lower_deflect: 0.5,
            upper_deflect: 1.2,
            lower_rebound: 0.85,
            upper_rebound: 0.95,
        }
    }
}

impl PongConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("court_width", self.court_width)?;
        positive("court_height", self.court_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("paddle_gap", self.paddle_gap)?;
        positive("ball_radius", self.ball_radius)?;
        positive("serve_speed", self.serve_speed)?;

        band("deflect band", self.lower_deflect, self.upper_deflect)?;
        band("rebound band", self.lower_rebound, self.upper_rebound)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

fn band(name: &'static str, lower: f32, upper: f32) -> Result<(), ConfigError> {
    if lower > upper {
        return Err(ConfigError::InvertedRange {
            name,
            min: lower,
            max: upper,
        });
    }
    Ok(())
}
