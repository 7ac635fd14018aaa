//! Warm per-letter colours keyed off horizontal position.

use skyletters_platform::Color;

pub const HUE_LEFT: f32 = 30.0;
pub const HUE_RIGHT: f32 = 55.0;
/// Used when the text block has no width.
pub const HUE_FALLBACK: f32 = 40.0;

const SATURATION: f32 = 90.0;
const SOLID_LIGHTNESS: f32 = 50.0;
const ALPHA_LIGHTNESS: f32 = 52.0;

/// Hue for a letter at `x`, where the block spans `[-width/2, width/2]`.
pub fn hue_for_x(x: f32, block_width: f32) -> f32 {
    if block_width <= 0.0 {
        return HUE_FALLBACK;
    }
    let t = (x + block_width / 2.0) / block_width;
    HUE_LEFT + (HUE_RIGHT - HUE_LEFT) * t.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterPalette {
    hue: f32,
}

impl LetterPalette {
    pub fn new(hue: f32) -> Self {
        Self { hue }
    }

    pub fn for_position(x: f32, block_width: f32) -> Self {
        Self::new(hue_for_x(x, block_width))
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn solid(&self) -> Color {
        self.light(SOLID_LIGHTNESS)
    }

    pub fn light(&self, lightness: f32) -> Color {
        self.light_alpha(lightness, 1.0)
    }

    pub fn alpha(&self, alpha: f32) -> Color {
        self.light_alpha(ALPHA_LIGHTNESS, alpha)
    }

    pub fn light_alpha(&self, lightness: f32, alpha: f32) -> Color {
        Color::hsla(self.hue, SATURATION, lightness, alpha)
    }
}
