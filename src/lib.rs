//! Loners Paradise - two deterministic arcade game cores
//!
//! Core modules:
//! - `paradise`: endless rolling-wheel platformer (procedural terrain stream,
//!   player support state machine, day/night clock)
//! - `pong`: classic Pong with a trajectory-predicting AI paddle
//! - `settings` / `highscores`: host preferences and the best-distance board
//!
//! Both games follow the same shape: a state struct built from a `u64` seed,
//! a small input struct of level-triggered flags, and a `tick` function that
//! advances the state by exactly one frame and returns the events the host
//! (renderer, audio, session controller) must react to. Rendering, audio and
//! real input devices live outside this crate.

pub mod geom;
pub mod highscores;
pub mod paradise;
pub mod pong;
pub mod settings;

pub use highscores::HighScores;
pub use settings::Settings;

use thiserror::Error;

/// Configuration validation failure, raised at state construction so a
/// degenerate range can never reach the generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name}: min {min} exceeds max {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
}
