//! Endless rolling-wheel platformer
//!
//! The world is a stream of procedurally generated terrain segments that
//! scrolls past a body fixed at the canvas center. All gameplay logic lives
//! here and is deterministic:
//! - Seeded RNG only (every draw goes through the state's `Pcg32`)
//! - One `tick` call = one frame, no hidden time source
//! - No rendering or platform dependencies

pub mod config;
pub mod player;
pub mod state;
pub mod terrain;
pub mod tick;

pub use config::{EnvConfig, ParadiseConfig, PlayerConfig, PlatformConfig, TerrainConfig};
pub use player::{Player, Support};
pub use state::{DayNight, ParadiseEvent, ParadiseState};
pub use terrain::{Axis, PlatformContact, Segment, Terrain};
pub use tick::{TickInput, tick};
