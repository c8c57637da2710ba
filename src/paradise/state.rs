//! World state for a platformer session
//!
//! One explicit object owns everything a session needs - terrain stream,
//! player body, day/night clock - so construction, reset and ticking are
//! all ordinary function calls with no module-level state.

use glam::Vec2;

use super::config::ParadiseConfig;
use super::player::Player;
use super::terrain::Terrain;
use crate::ConfigError;

/// Sky channel values at full day
const DAY_GREEN: f32 = 204.0;
const DAY_BLUE: f32 = 255.0;
/// Blue channel at which night is reached
const NIGHT_BLUE: f32 = 68.0;

/// Day/night cycle: sky green/blue ramp down to night and back
#[derive(Debug, Clone, PartialEq)]
pub struct DayNight {
    green: f32,
    blue: f32,
    night: bool,
}

impl Default for DayNight {
    fn default() -> Self {
        Self {
            green: DAY_GREEN,
            blue: DAY_BLUE,
            night: false,
        }
    }
}

impl DayNight {
    /// Advance the cycle by one tick
    pub fn pass(&mut self, time_speed: f32) {
        if !self.night {
            self.green -= time_speed;
            self.blue -= time_speed;
            if self.blue <= NIGHT_BLUE {
                self.night = true;
            }
        } else {
            self.green += time_speed;
            self.blue += time_speed;
            if self.blue >= DAY_BLUE {
                self.night = false;
            }
        }
    }

    /// Current sky color for the renderer (red channel is always zero)
    pub fn sky_rgb(&self) -> [u8; 3] {
        [0, self.green as u8, self.blue as u8]
    }

    pub fn is_night(&self) -> bool {
        self.night
    }

    /// Back to dawn
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Events the host must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParadiseEvent {
    /// Fall-death fired and the session was reset in place; the host should
    /// reset whatever it layers on top (music, displays)
    Restarted,
}

/// A complete platformer session
pub struct ParadiseState {
    pub config: ParadiseConfig,
    /// Jumping off a moving platform keeps its momentum (difficulty flag)
    pub momentum_transfer: bool,
    pub terrain: Terrain,
    pub player: Player,
    pub clock: DayNight,
    pub seed: u64,
    /// Ticks since construction (not reset by restarts)
    pub frame: u64,
}

impl ParadiseState {
    /// Build a session from a validated configuration and a seed.
    /// Fails fast on malformed configuration.
    pub fn new(config: ParadiseConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let terrain = Terrain::new(
            config.terrain,
            config.canvas_width,
            config.canvas_height,
            seed,
        );
        let player = Player::new(config.player, Self::spawn_point(&config));

        Ok(Self {
            config,
            momentum_transfer: false,
            terrain,
            player,
            clock: DayNight::default(),
            seed,
            frame: 0,
        })
    }

    /// The body always sits at the canvas center
    pub fn spawn_point(config: &ParadiseConfig) -> Vec2 {
        Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0)
    }

    /// In-place restart: player to spawn, terrain rebuilt, clock to dawn.
    /// The terrain RNG stream continues, so each life sees fresh ground.
    pub fn reset(&mut self) {
        self.player.reset(Self::spawn_point(&self.config));
        self.terrain.reset();
        self.clock.reset();
        log::info!("session reset (seed {})", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradise::player::Support;

    #[test]
    fn test_new_validates_config() {
        let mut config = ParadiseConfig::default();
        config.canvas_width = -1.0;
        assert!(ParadiseState::new(config, 1).is_err());
    }

    #[test]
    fn test_new_spawns_player_at_center() {
        let state = ParadiseState::new(ParadiseConfig::default(), 1).expect("default config");
        assert_eq!(state.player.pos, Vec2::new(640.0, 400.0));
        assert_eq!(state.player.support, Support::Grounded);
    }

    #[test]
    fn test_reset_restores_everything_but_frame() {
        let mut state = ParadiseState::new(ParadiseConfig::default(), 1).expect("default config");
        state.frame = 500;
        state.player.displacement = 123.0;
        state.clock.pass(10_000.0);
        state.terrain.scroll(3000.0, 50.0);

        state.reset();

        assert_eq!(state.player.displacement, 0.0);
        assert_eq!(state.clock, DayNight::default());
        assert_eq!(state.frame, 500, "frame counter survives restarts");
        let first = state.terrain.segments().first().expect("starting slab");
        assert_eq!(first.rect().x, 50.0);
    }

    // ── Day/night clock ──

    #[test]
    fn test_clock_ramps_toward_night_and_back() {
        let mut clock = DayNight::default();
        assert!(!clock.is_night());
        assert_eq!(clock.sky_rgb(), [0, 204, 255]);

        clock.pass(0.1);
        assert_eq!(clock.sky_rgb(), [0, 203, 254], "channels floor for display");

        // A bit over (255 - 68) / 0.1 ticks safely reaches night
        for _ in 0..1880 {
            clock.pass(0.1);
        }
        assert!(clock.is_night());

        // A little more than the same distance back reaches day again
        for _ in 0..1880 {
            clock.pass(0.1);
        }
        assert!(!clock.is_night());
    }

    #[test]
    fn test_clock_reset_restores_dawn() {
        let mut clock = DayNight::default();
        for _ in 0..100 {
            clock.pass(1.0);
        }
        clock.reset();
        assert_eq!(clock, DayNight::default());
    }
}
