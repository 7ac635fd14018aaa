//! Skyletters core engine: host-agnostic logic for the firework, glow and
//! balloon lifecycle of every letter, plus the scene that lays letters out
//! and the driver that turns it into an endless loop.

pub mod animation;
pub mod balloon;
pub mod config;
pub mod error;
pub mod letter;
pub mod motion;
pub mod palette;
pub mod random;
pub mod scene;
pub mod shard;

pub use animation::Animation;
pub use config::{SceneConfig, Spread};
pub use error::ConfigError;
pub use letter::{Letter, PhaseKind, TickContext};
pub use random::{Dice, RandomSource};
pub use scene::Scene;
pub use shard::Shard;
