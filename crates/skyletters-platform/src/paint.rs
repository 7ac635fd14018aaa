use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB colour, `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn hex(rgb: u32) -> Self {
        Self::rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 1.0)
    }

    /// Hue in degrees, saturation and lightness in percent.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);
        let h = hue.rem_euclid(360.0) / 30.0;
        let chroma = s * l.min(1.0 - l);
        let channel = |n: f32| {
            let k = (n + h) % 12.0;
            let value = l - chroma * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            (value * 255.0).round() as u8
        };
        Self::rgba(channel(0.0), channel(8.0), channel(4.0), alpha.clamp(0.0, 1.0))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha.clamp(0.0, 1.0), ..self }
    }

    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Colour at normalised offset `t`; the ends extend the first/last stop.
    pub fn color_at(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if t <= to.offset {
                let span = (to.offset - from.offset).max(f32::EPSILON);
                return from.color.lerp(to.color, (t - from.offset) / span);
            }
        }
        self.stops.last().map_or(first.color, |stop| stop.color)
    }

    pub fn color_at_point(&self, point: Vec2) -> Color {
        let span = (self.outer_radius - self.inner_radius).max(f32::EPSILON);
        let t = (point.distance(self.center) - self.inner_radius) / span;
        self.color_at(t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Radial(RadialGradient),
}

impl Paint {
    /// Flat colour to use where a backend cannot shade a gradient.
    pub fn representative_color(&self) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Radial(gradient) => gradient.color_at(0.0),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
