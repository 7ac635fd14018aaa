use glam::{Affine2, Vec2};

use crate::{Color, LineCap, LineJoin, Paint};

/// Current style and transform of a canvas-like surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub transform: Affine2,
    pub fill: Paint,
    pub stroke: Color,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub shadow_blur: f32,
    pub shadow_color: Color,
    pub font_size: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            fill: Paint::default(),
            stroke: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            shadow_blur: 0.0,
            shadow_color: Color::TRANSPARENT,
            font_size: 10.0,
        }
    }
}

impl DrawState {
    pub fn has_shadow(&self) -> bool {
        self.shadow_blur > 0.0 && self.shadow_color.a > 0.0
    }

    /// Uniform scale of the current transform, used for widths and radii.
    pub fn scale_factor(&self) -> f32 {
        self.transform.matrix2.x_axis.length()
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.transform.transform_point2(point)
    }
}

/// Save/restore stack shared by surface implementations.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Unbalanced restores are ignored, as on a canvas.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.current.transform = self.current.transform * Affine2::from_translation(offset);
    }

    pub fn scale(&mut self, factor: Vec2) {
        self.current.transform = self.current.transform * Affine2::from_scale(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_returns_to_saved_state() {
        let mut stack = StateStack::default();
        stack.current_mut().line_width = 3.0;
        stack.save();
        stack.current_mut().line_width = 9.0;
        stack.translate(Vec2::new(10.0, 20.0));
        stack.restore();
        assert_eq!(stack.current().line_width, 3.0);
        assert_eq!(stack.current().transform, Affine2::IDENTITY);
        stack.restore();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn translate_composes_after_scale() {
        let mut stack = StateStack::default();
        stack.scale(Vec2::splat(2.0));
        stack.translate(Vec2::new(5.0, 0.0));
        assert_eq!(stack.current().apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
        assert_eq!(stack.current().scale_factor(), 2.0);
    }
}
