//! Headless doubles: a surface that records draw calls and a scheduler that
//! counts tick requests. Used by tests to single-step the animation.

use glam::{Affine2, Vec2};
use tracing::trace;

use crate::{Color, DrawState, LineCap, LineJoin, Paint, Path, StateStack, Surface, TextMetrics, TickScheduler};

/// Horizontal advance per character, as a fraction of the font size.
pub const RECORDED_ADVANCE: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    ClearRect { origin: Vec2, size: Vec2 },
    FillRect { origin: Vec2, size: Vec2 },
    FillPath(Path),
    StrokePath(Path),
    FillText { text: String, at: Vec2 },
}

/// One draw call with the state that was current when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub kind: DrawKind,
    pub state: DrawState,
}

impl DrawCall {
    pub fn is_text(&self) -> bool {
        matches!(self.kind, DrawKind::FillText { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    states: StateStack,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn state(&self) -> &DrawState {
        self.states.current()
    }

    pub fn save_depth(&self) -> usize {
        self.states.depth()
    }

    pub fn texts(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|call| call.is_text()).collect()
    }

    fn record(&mut self, kind: DrawKind) {
        trace!(?kind, "recorded draw call");
        self.calls.push(DrawCall {
            kind,
            state: self.states.current().clone(),
        });
    }
}

impl TextMetrics for RecordingSurface {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * RECORDED_ADVANCE
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.states.save();
    }

    fn restore(&mut self) {
        self.states.restore();
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.states.current_mut().transform = transform;
    }

    fn translate(&mut self, offset: Vec2) {
        self.states.translate(offset);
    }

    fn scale(&mut self, factor: Vec2) {
        self.states.scale(factor);
    }

    fn set_fill(&mut self, paint: Paint) {
        self.states.current_mut().fill = paint;
    }

    fn set_stroke(&mut self, color: Color) {
        self.states.current_mut().stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.states.current_mut().line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.states.current_mut().line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.states.current_mut().line_join = join;
    }

    fn set_shadow(&mut self, blur: f32, color: Color) {
        let state = self.states.current_mut();
        state.shadow_blur = blur;
        state.shadow_color = color;
    }

    fn set_font_size(&mut self, size: f32) {
        self.states.current_mut().font_size = size;
    }

    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.record(DrawKind::ClearRect { origin, size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.record(DrawKind::FillRect { origin, size });
    }

    fn fill_path(&mut self, path: &Path) {
        self.record(DrawKind::FillPath(path.clone()));
    }

    fn stroke_path(&mut self, path: &Path) {
        self.record(DrawKind::StrokePath(path.clone()));
    }

    fn fill_text(&mut self, text: &str, at: Vec2) {
        self.record(DrawKind::FillText {
            text: text.to_owned(),
            at,
        });
    }
}

/// Scheduler that only counts requests; the test drives ticks itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    requested: u64,
}

impl ManualScheduler {
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl TickScheduler for ManualScheduler {
    fn request_next_tick(&mut self) {
        self.requested += 1;
    }
}
