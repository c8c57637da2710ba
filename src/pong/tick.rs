//! Per-frame update for the Pong match
//!
//! Tick order mirrors the classic loop: ball first (motion, walls, paddle
//! windows, scoring), then the human paddle from held keys, then the AI
//! decision. Pausing is host policy - a paused host simply stops calling
//! `tick`.

use rand::Rng;

use super::config::PongConfig;
use super::predict;
use super::state::{Ball, PongState, Side};

/// Held-key flags for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PongInput {
    pub left: bool,
    pub right: bool,
}

/// Events the host's audio/UI layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    /// Ball bounced off a side wall
    WallHit,
    /// Ball deflected off a paddle
    PaddleHit,
    /// Ball crossed a paddle row outside the paddle
    Miss,
    /// Ball left the court; the point went to `side`
    PointScored { side: Side },
}

/// Advance the match by one frame
pub fn tick(state: &mut PongState, input: &PongInput) -> Vec<PongEvent> {
    let mut events = Vec::new();

    move_ball(state, &mut events);
    move_human(state, input);
    drive_ai(state);

    events
}

fn move_ball(state: &mut PongState, events: &mut Vec<PongEvent>) {
    let config = state.config;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    // Side walls: clamp and reflect
    if ball.pos.x - config.ball_radius < 0.0 {
        ball.pos.x = config.ball_radius;
        ball.vel.x = -ball.vel.x;
        events.push(PongEvent::WallHit);
    } else if ball.pos.x + config.ball_radius > config.court_width {
        ball.pos.x = config.court_width - config.ball_radius;
        ball.vel.x = -ball.vel.x;
        events.push(PongEvent::WallHit);
    }

    // Paddle rows: inside the y-band, either a deflection or a miss
    if ball.pos.y > state.human.y && ball.pos.y < state.human.y + config.paddle_height {
        if ball.pos.x > state.human.x && ball.pos.x < state.human.x + config.paddle_width {
            ball.pos.y = state.human.y;
            ball.vel.x = deflect(&mut state.rng, &config, ball.vel.x, state.human.speed);
            ball.vel.y = -ball.vel.y;
            state.computer.ai.clear();
            events.push(PongEvent::PaddleHit);
        } else {
            events.push(PongEvent::Miss);
        }
    } else if ball.pos.y > state.computer.y && ball.pos.y < state.computer.y + config.paddle_height
    {
        if ball.pos.x > state.computer.x && ball.pos.x < state.computer.x + config.paddle_width {
            ball.pos.y = state.computer.y + config.paddle_height;
            ball.vel.x = deflect(&mut state.rng, &config, ball.vel.x, state.computer.speed);
            ball.vel.y = -ball.vel.y;
            state.computer.ai.clear();
            events.push(PongEvent::PaddleHit);
        } else {
            events.push(PongEvent::Miss);
        }
    }

    // Court edges: score and respawn
    if state.ball.pos.y < 0.0 {
        state.human.score += 1;
        respawn(state);
        events.push(PongEvent::PointScored { side: Side::Human });
    } else if state.ball.pos.y > config.court_height {
        state.computer.score += 1;
        respawn(state);
        events.push(PongEvent::PointScored {
            side: Side::Computer,
        });
    }
}

/// Ball back to serve; the human paddle recenters with it
fn respawn(state: &mut PongState) {
    state.ball = Ball::serve(&state.config);
    state.human.x = (state.config.court_width - state.config.paddle_width) / 2.0;
}

/// Horizontal speed after a paddle contact.
///
/// A stationary ball adopts the paddle's speed verbatim. A paddle steering
/// against the ball's travel deflects it (a multiple of the paddle speed);
/// steering with it rebounds it (a damped multiple of the ball's own speed).
fn deflect<R: Rng>(rng: &mut R, config: &PongConfig, ball_vx: f32, paddle_speed: f32) -> f32 {
    if ball_vx == 0.0 {
        paddle_speed
    } else if paddle_speed * ball_vx < 0.0 {
        rng.random_range(config.lower_deflect..config.upper_deflect) * paddle_speed
    } else {
        rng.random_range(config.lower_rebound..config.upper_rebound) * ball_vx
    }
}

fn move_human(state: &mut PongState, input: &PongInput) {
    let config = state.config;
    state.human.speed = 0.0;
    if input.left {
        state.human.move_left(&config);
    }
    if input.right {
        state.human.move_right(&config);
    }
}

/// The computer's per-tick decision: acquire a target for the current ball
/// flight, travel to it, then deflect away from the human paddle.
fn drive_ai(state: &mut PongState) {
    let config = state.config;
    state.computer.speed = 0.0;

    if !state.computer.ai.target_set {
        if state.ball.vel.y > 0.0 && state.ball.pos.y > config.court_height / 4.0 {
            // Ball is receding: park at the court center
            state.computer.ai.target_x = config.court_width / 2.0;
            state.computer.ai.target_set = true;
            state.computer.ai.target_reached = false;
        } else if state.ball.vel.y < 0.0 {
            // Ball is coming: aim for its predicted landing column
            if let Some(x) = predict::intercept_x(
                state.ball.pos,
                state.ball.vel,
                config.paddle_gap,
                config.court_width,
                config.ball_radius,
            ) {
                state.computer.ai.target_x = x;
                state.computer.ai.target_set = true;
            }
        }
    }

    if !state.computer.ai.target_reached {
        let center = state.computer.center_x(&config);
        let target = state.computer.ai.target_x;

        if center - config.paddle_speed < target && target < center + config.paddle_speed {
            state.computer.ai.target_reached = true;
        } else if center > target {
            state.computer.move_left(&config);
        } else if center < target {
            state.computer.move_right(&config);
        }
    } else if state.ball.vel.y < 0.0 && state.ball.pos.y - config.paddle_gap < 25.0 {
        // In position with the ball about to arrive: steer the deflection
        // away from the human paddle, or anywhere when nearly aligned
        if (state.human.x - state.computer.x).abs() > 10.0 {
            if state.human.x > state.computer.x {
                state.computer.move_left(&config);
            } else {
                state.computer.move_right(&config);
            }
        } else if state.rng.random_bool(0.5) {
            state.computer.move_left(&config);
        } else {
            state.computer.move_right(&config);
        }
    }
}
