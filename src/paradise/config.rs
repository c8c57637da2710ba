//! Tunable configuration for the platformer world
//!
//! Every constant the simulation consumes is named here. Defaults reproduce
//! the classic feel; `ParadiseConfig::validate` runs before any state is
//! built so an inverted range or a zero-sized canvas fails up front instead
//! of corrupting generation.

use rand::Rng;

use crate::ConfigError;

/// Inclusive integer range, sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRange {
    pub min: i32,
    pub max: i32,
}

impl SpanRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max) as f32
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min as f32,
                max: self.max as f32,
            });
        }
        Ok(())
    }
}

/// Physical environment
#[derive(Debug, Clone, Copy)]
pub struct EnvConfig {
    /// Gravity acceleration per tick while airborne
    pub gravity: f32,
    /// Fall speed at which the session restarts
    pub terminal_velocity: f32,
    /// Sky color ramp per tick for the day/night cycle
    pub time_speed: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            terminal_velocity: 50.0,
            time_speed: 0.1,
        }
    }
}

/// Player body tuning
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Wheel radius; also the lever arm turning travel into spin
    pub radius: f32,
    /// Upward speed added on jump
    pub jump_impulse: f32,
    /// Horizontal acceleration per tick while a direction is held
    pub accel_x: f32,
    /// Horizontal deceleration per tick while no direction is held
    pub decel_x: f32,
    /// Horizontal speed cap (symmetric)
    pub max_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            jump_impulse: 10.0,
            accel_x: 0.1,
            decel_x: 0.1,
            max_speed: 7.0,
        }
    }
}

/// Oscillating platform parameters
#[derive(Debug, Clone, Copy)]
pub struct PlatformConfig {
    pub width: f32,
    pub height: f32,
    /// Oscillation speed magnitude per tick
    pub speed: f32,
    /// Horizontal clearance kept between motion bounds and the gap edges
    pub clearance_x: f32,
    /// Vertical clearance kept between motion bounds and the anchors
    pub clearance_y: f32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 20.0,
            speed: 3.0,
            clearance_x: 30.0,
            clearance_y: 30.0,
        }
    }
}

/// Terrain generation tuning
#[derive(Debug, Clone, Copy)]
pub struct TerrainConfig {
    pub ground_width: SpanRange,
    pub ground_height: SpanRange,
    pub short_gap_x: SpanRange,
    pub short_gap_y: SpanRange,
    pub long_gap_x: SpanRange,
    pub long_gap_y: SpanRange,
    pub platform: PlatformConfig,
    /// Percentage of steps that move the anchor upward: the direction draw
    /// is a uniform integer in [0, 100], up when below this
    pub up_bias: i32,
    /// A gap draw (uniform integer in [0, 10]) is long when above this
    pub long_gap_threshold: i32,
    /// Number of colors the renderer's palette offers
    pub palette_size: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            ground_width: SpanRange::new(250, 600),
            ground_height: SpanRange::new(40, 70),
            short_gap_x: SpanRange::new(100, 200),
            short_gap_y: SpanRange::new(100, 150),
            long_gap_x: SpanRange::new(400, 800),
            long_gap_y: SpanRange::new(300, 500),
            platform: PlatformConfig::default(),
            up_bias: 65,
            long_gap_threshold: 6,
            palette_size: 11,
        }
    }
}

/// Complete world configuration
#[derive(Debug, Clone, Copy)]
pub struct ParadiseConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub env: EnvConfig,
    pub player: PlayerConfig,
    pub terrain: TerrainConfig,
}

impl Default for ParadiseConfig {
    fn default() -> Self {
        // Canvas keeps the classic 1.6 aspect ratio
        Self {
            canvas_width: 1280.0,
            canvas_height: 800.0,
            env: EnvConfig::default(),
            player: PlayerConfig::default(),
            terrain: TerrainConfig::default(),
        }
    }
}

impl ParadiseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;

        positive("env.gravity", self.env.gravity)?;
        positive("env.terminal_velocity", self.env.terminal_velocity)?;
        positive("env.time_speed", self.env.time_speed)?;

        positive("player.radius", self.player.radius)?;
        positive("player.jump_impulse", self.player.jump_impulse)?;
        positive("player.accel_x", self.player.accel_x)?;
        positive("player.decel_x", self.player.decel_x)?;
        positive("player.max_speed", self.player.max_speed)?;

        let t = &self.terrain;
        t.ground_width.validate("terrain.ground_width")?;
        t.ground_height.validate("terrain.ground_height")?;
        t.short_gap_x.validate("terrain.short_gap_x")?;
        t.short_gap_y.validate("terrain.short_gap_y")?;
        t.long_gap_x.validate("terrain.long_gap_x")?;
        t.long_gap_y.validate("terrain.long_gap_y")?;

        positive("terrain.platform.width", t.platform.width)?;
        positive("terrain.platform.height", t.platform.height)?;
        positive("terrain.platform.speed", t.platform.speed)?;
        positive("terrain.platform.clearance_x", t.platform.clearance_x)?;
        positive("terrain.platform.clearance_y", t.platform.clearance_y)?;
        positive("terrain.palette_size", t.palette_size as f32)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(ParadiseConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = ParadiseConfig::default();
        config.terrain.short_gap_x = SpanRange::new(200, 100);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                name: "terrain.short_gap_x",
                min: 200.0,
                max: 100.0,
            })
        );
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let mut config = ParadiseConfig::default();
        config.canvas_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "canvas_height",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_gravity_rejected() {
        let mut config = ParadiseConfig::default();
        config.env.gravity = -0.3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_span_range_sampling_stays_inclusive() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SpanRange::new(10, 12);
        for _ in 0..200 {
            let v = range.sample(&mut rng);
            assert!((10.0..=12.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_span_range_is_constant() {
        // min == max is legal and always returns min
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SpanRange::new(100, 100);
        for _ in 0..20 {
            assert_eq!(range.sample(&mut rng), 100.0);
        }
    }
}
