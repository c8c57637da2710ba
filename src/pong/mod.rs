//! Classic Pong with a predicting AI opponent
//!
//! A vertical court: the human paddle guards the bottom edge, the computer
//! paddle the top. The computer pre-positions itself by simulating the
//! ball's trajectory (wall bounces included) to the row it defends, then
//! switches to a deflection mode that steers the ball away from wherever
//! the human paddle is. Deterministic under a fixed seed: the only random
//! draws are the deflection bands and the near-aligned coin flip, and both
//! come from the state's own RNG.

pub mod config;
pub mod predict;
pub mod state;
pub mod tick;

pub use config::PongConfig;
pub use state::{AiTargeting, Ball, Paddle, PongState, Side};
pub use tick::{PongEvent, PongInput, tick};
