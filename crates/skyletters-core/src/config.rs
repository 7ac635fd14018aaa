//! Tuning constants for the whole animation, loaded once at startup.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skyletters_platform::{Color, GradientStop};
use tracing::info;

use crate::error::ConfigError;
use crate::random::RandomSource;

/// A randomised quantity: `base + added * u` with `u` uniform in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub base: f32,
    pub added: f32,
}

impl Spread {
    pub const fn new(base: f32, added: f32) -> Self {
        Self { base, added }
    }

    pub const fn up_to(added: f32) -> Self {
        Self::new(0.0, added)
    }

    pub fn sample(&self, rng: &mut dyn RandomSource) -> f32 {
        self.base + self.added * rng.unit()
    }

    /// Sampled and floored to whole ticks.
    pub fn sample_ticks(&self, rng: &mut dyn RandomSource) -> u32 {
        self.sample(rng).floor().max(0.0) as u32
    }

    pub fn max(&self) -> f32 {
        self.base + self.added.max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub char_size: f32,
    pub char_spacing: f32,
    pub line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            char_size: 44.0,
            char_spacing: 62.0,
            line_height: 72.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to shard vertical velocity every tick.
    pub gravity: f32,
    /// Added to balloon vertical velocity every tick (negative rises).
    pub up_flow: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.12,
            up_flow: -0.06,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworkConfig {
    pub trail_points: usize,
    pub line_width: Spread,
    pub spawn_time: Spread,
    pub reach_time: Spread,
    pub circle_size: Spread,
    pub circle_time: Spread,
    pub circle_fade_time: Spread,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            trail_points: 12,
            line_width: Spread::new(6.0, 8.0),
            spawn_time: Spread::up_to(140.0),
            reach_time: Spread::new(36.0, 40.0),
            circle_size: Spread::new(22.0, 14.0),
            circle_time: Spread::new(36.0, 26.0),
            circle_fade_time: Spread::new(12.0, 8.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardConfig {
    pub count: Spread,
    pub min_count: usize,
    pub trail_points: usize,
    pub velocity: Spread,
    pub size: Spread,
    /// Distance below the viewport bottom at which a shard expires.
    pub exit_margin: f32,
}

impl Default for ShardConfig {
    fn default() -> Self {
        Self {
            count: Spread::new(7.0, 8.0),
            min_count: 5,
            trail_points: 3,
            velocity: Spread::new(3.4, 2.6),
            size: Spread::new(2.0, 3.0),
            exit_margin: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContemplateConfig {
    pub wait_time: u32,
}

impl Default for ContemplateConfig {
    fn default() -> Self {
        Self { wait_time: 260 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalloonConfig {
    pub spawn_time: Spread,
    pub inflate_time: Spread,
    pub size: Spread,
    pub velocity: Spread,
    /// Launch direction in radians; negative points up.
    pub angle: Spread,
    /// Distance beyond the viewport edge at which a balloon is gone.
    pub exit_margin: f32,
    pub string_width: f32,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            spawn_time: Spread::up_to(18.0),
            inflate_time: Spread::new(12.0, 18.0),
            size: Spread::new(18.0, 24.0),
            velocity: Spread::new(0.36, 0.5),
            angle: Spread::new(-(FRAC_PI_2 - 0.4), -0.9),
            exit_margin: 120.0,
            string_width: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub base: Color,
    pub glow: Vec<GradientStop>,
    /// Glow radius as a fraction of the larger viewport side.
    pub glow_reach: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            base: Color::hex(0x0c0610),
            glow: vec![
                GradientStop::new(0.0, Color::rgba(255, 190, 80, 0.06)),
                GradientStop::new(0.25, Color::rgba(255, 160, 60, 0.03)),
                GradientStop::new(1.0, Color::rgba(0, 0, 0, 0.6)),
            ],
            glow_reach: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Ticks between the last balloon leaving and the loop restarting.
    pub restart_pause_ticks: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            restart_pause_ticks: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub strings: Vec<String>,
    /// Fixed seed for a reproducible run; entropy when absent.
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
    pub physics: PhysicsConfig,
    pub firework: FireworkConfig,
    pub shard: ShardConfig,
    pub contemplate: ContemplateConfig,
    pub balloon: BalloonConfig,
    pub backdrop: BackdropConfig,
    pub timing: TimingConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            strings: vec!["HAPPY".into(), "MAKAR SANKRANTI".into()],
            seed: None,
            layout: LayoutConfig::default(),
            physics: PhysicsConfig::default(),
            firework: FireworkConfig::default(),
            shard: ShardConfig::default(),
            contemplate: ContemplateConfig::default(),
            balloon: BalloonConfig::default(),
            backdrop: BackdropConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Load from a `.toml` or `.json` file and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let parse: fn(&str) -> Result<Self, ConfigError> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&text)?;
        info!(path = %path.display(), rows = config.strings.len(), "loaded scene config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        magnitude("layout.char_size", self.layout.char_size)?;
        magnitude("layout.char_spacing", self.layout.char_spacing)?;
        magnitude("layout.line_height", self.layout.line_height)?;

        finite("physics.gravity", self.physics.gravity)?;
        finite("physics.up_flow", self.physics.up_flow)?;

        spread_magnitude("firework.line_width", &self.firework.line_width)?;
        spread_magnitude("firework.spawn_time", &self.firework.spawn_time)?;
        spread_magnitude("firework.reach_time", &self.firework.reach_time)?;
        spread_magnitude("firework.circle_size", &self.firework.circle_size)?;
        spread_magnitude("firework.circle_time", &self.firework.circle_time)?;
        spread_magnitude("firework.circle_fade_time", &self.firework.circle_fade_time)?;

        spread_magnitude("shard.count", &self.shard.count)?;
        spread_magnitude("shard.velocity", &self.shard.velocity)?;
        spread_magnitude("shard.size", &self.shard.size)?;
        magnitude("shard.exit_margin", self.shard.exit_margin)?;

        spread_magnitude("balloon.spawn_time", &self.balloon.spawn_time)?;
        spread_magnitude("balloon.inflate_time", &self.balloon.inflate_time)?;
        spread_magnitude("balloon.size", &self.balloon.size)?;
        spread_magnitude("balloon.velocity", &self.balloon.velocity)?;
        finite("balloon.angle", self.balloon.angle.base)?;
        finite("balloon.angle", self.balloon.angle.added)?;
        magnitude("balloon.exit_margin", self.balloon.exit_margin)?;
        magnitude("balloon.string_width", self.balloon.string_width)?;

        magnitude("backdrop.glow_reach", self.backdrop.glow_reach)?;
        for stop in &self.backdrop.glow {
            finite("backdrop.glow.offset", stop.offset)?;
            finite("backdrop.glow.color.a", stop.color.a)?;
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn magnitude(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn spread_magnitude(field: &'static str, spread: &Spread) -> Result<(), ConfigError> {
    magnitude(field, spread.base)?;
    magnitude(field, spread.added)
}
