//! Loners Paradise entry point
//!
//! A headless demo host: drives both game cores for a fixed stretch of
//! frames with scripted input, the way a real renderer/input layer would
//! drive them from its timer, and logs what happened. Pass a seed as the
//! first argument to replay a specific session.

use loners_paradise::paradise::{self, ParadiseConfig, ParadiseEvent, ParadiseState};
use loners_paradise::pong::{self, PongConfig, PongInput, PongState};
use loners_paradise::{HighScores, Settings};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let settings = Settings::default();
    log::info!("Loners Paradise headless demo, seed {seed}");

    run_paradise(seed, &settings);
    run_pong(seed);
}

/// Thirty simulated seconds of the platformer: hold right, hop periodically
fn run_paradise(seed: u64, settings: &Settings) {
    let mut state = match ParadiseState::new(ParadiseConfig::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid platformer config: {err}");
            return;
        }
    };
    state.momentum_transfer = settings.momentum_transfer;

    let frames = settings.paradise_fps * 30;
    let mut restarts = 0u32;
    let mut best_distance = 0.0f32;

    for frame in 0..frames {
        let input = paradise::TickInput {
            right: true,
            up: frame % 48 == 12,
            ..paradise::TickInput::default()
        };
        for event in paradise::tick(&mut state, &input) {
            match event {
                ParadiseEvent::Restarted => restarts += 1,
            }
        }
        best_distance = best_distance.max(state.player.displacement);
    }

    log::info!(
        "paradise: {frames} frames, best distance {:.0}, {restarts} restart(s), sky {:?}",
        best_distance,
        state.clock.sky_rgb()
    );

    let mut board = HighScores::new();
    if let Some(rank) = board.add_score(best_distance.max(0.0) as u64, seed, 0.0) {
        log::info!("paradise: demo run would enter the board at rank {rank}");
    }
}

/// A minute of Pong: the human side plays a naive follow-the-ball script
fn run_pong(seed: u64) {
    let mut state = match PongState::new(PongConfig::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid pong config: {err}");
            return;
        }
    };

    let frames = 30 * 60;
    for _ in 0..frames {
        let paddle_center = state.human.center_x(&state.config);
        let input = PongInput {
            left: state.ball.pos.x < paddle_center - 5.0,
            right: state.ball.pos.x > paddle_center + 5.0,
        };
        pong::tick(&mut state, &input);
    }

    log::info!(
        "pong: {frames} frames, score {} : {} (human : computer)",
        state.human.score,
        state.computer.score
    );
}
