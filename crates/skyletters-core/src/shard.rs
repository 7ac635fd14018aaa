//! Spark particles thrown out radially when a firework bursts.

use glam::Vec2;
use skyletters_platform::{Color, Path, Surface};

use crate::config::ShardConfig;
use crate::motion::Trail;
use crate::random::RandomSource;

/// Fraction of the shard size used as the widest segment.
const WIDTH_FACTOR: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct Shard {
    position: Vec2,
    velocity: Vec2,
    trail: Trail<Vec2>,
    color: Color,
    size: f32,
    alive: bool,
}

impl Shard {
    /// `direction` is a unit vector; speed and size are drawn from `config`.
    pub fn new(
        origin: Vec2,
        direction: Vec2,
        color: Color,
        config: &ShardConfig,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let speed = config.velocity.sample(rng);
        let size = config.size.sample(rng);
        Self {
            position: origin,
            velocity: direction * speed,
            trail: Trail::starting_at(config.trail_points, origin),
            color,
            size,
            alive: true,
        }
    }

    /// Integrate one tick, draw the tapered streak and expire once the whole
    /// trail has dropped below `exit_y`.
    pub fn step(&mut self, surface: &mut dyn Surface, gravity: f32, exit_y: f32) {
        self.velocity.y += gravity;
        self.position += self.velocity;
        self.trail.push(self.position);

        let width_step = self.size / self.trail.len().max(1) as f32;
        surface.set_stroke(self.color);
        for (index, (older, newer)) in self.trail.segments().enumerate() {
            surface.set_line_width((index + 1) as f32 * width_step * WIDTH_FACTOR);
            surface.stroke_path(&Path::line(*older, *newer));
        }

        if self.trail.oldest().is_some_and(|tail| tail.y > exit_y) {
            self.alive = false;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
