//! Platform abstraction traits so `skyletters-core` stays host-agnostic.
//!
//! The core never talks to a window or a GPU. It issues canvas-style calls
//! against [`Surface`], which a host adapter maps onto whatever it paints with.

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

mod paint;
mod path;
pub mod recording;
mod state;

pub use paint::{Color, GradientStop, Paint, RadialGradient};
pub use path::{Path, PathCommand};
pub use state::{DrawState, StateStack};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// No drawing surface could be obtained. There is no degraded mode.
    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),
}

/// Logical size of the drawing area plus the host's device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            device_pixel_ratio: device_pixel_ratio.max(1.0),
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.half_width(), self.half_height())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Text measurement, needed for layout before anything is drawn.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Canvas-like drawing target.
///
/// Style setters change the current state; every draw call uses whatever
/// state is current, so callers set what they need right before drawing.
pub trait Surface: TextMetrics {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_transform(&mut self, transform: Affine2);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, factor: Vec2);
    fn set_fill(&mut self, paint: Paint);
    fn set_stroke(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_shadow(&mut self, blur: f32, color: Color);
    fn set_font_size(&mut self, size: f32);
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_path(&mut self, path: &Path);
    fn stroke_path(&mut self, path: &Path);
    fn fill_text(&mut self, text: &str, at: Vec2);
}

/// "Call me again before the next repaint."
pub trait TickScheduler {
    fn request_next_tick(&mut self);
}
