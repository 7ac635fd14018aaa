use egui::epaint::{Mesh, Shape};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};
use glam::{Affine2, Vec2};
use skyletters_platform::{
    Color, LineCap, LineJoin, Paint, Path, RadialGradient, StateStack, Surface, TextMetrics, TickScheduler,
};

/// Segments around a gradient ring.
const GRADIENT_SEGMENTS: u32 = 64;
/// Offset copies drawn to fake a blurred text shadow.
const GLOW_TAPS: usize = 8;

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, (color.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn pos(point: Vec2) -> Pos2 {
    Pos2::new(point.x, point.y)
}

/// Concentric vertex rings, one per stop, shaded by vertex colour.
/// Nothing is painted beyond the outer radius.
pub fn radial_mesh(gradient: &RadialGradient, transform: &Affine2, origin: Vec2) -> Mesh {
    let mut mesh = Mesh::default();
    if gradient.stops.len() < 2 {
        return mesh;
    }
    let span = gradient.outer_radius - gradient.inner_radius;
    for stop in &gradient.stops {
        let radius = gradient.inner_radius + stop.offset.clamp(0.0, 1.0) * span;
        let color = to_color32(stop.color);
        for segment in 0..GRADIENT_SEGMENTS {
            let angle = segment as f32 / GRADIENT_SEGMENTS as f32 * std::f32::consts::TAU;
            let point = gradient.center + Vec2::from_angle(angle) * radius;
            mesh.colored_vertex(pos(origin + transform.transform_point2(point)), color);
        }
    }
    for ring in 0..gradient.stops.len() as u32 - 1 {
        let inner = ring * GRADIENT_SEGMENTS;
        let outer = inner + GRADIENT_SEGMENTS;
        for segment in 0..GRADIENT_SEGMENTS {
            let next = (segment + 1) % GRADIENT_SEGMENTS;
            mesh.add_triangle(inner + segment, outer + segment, outer + next);
            mesh.add_triangle(inner + segment, outer + next, inner + next);
        }
    }
    mesh
}

/// [`Surface`] over an egui painter. Coordinates are egui points offset by
/// the painted area's top-left corner.
pub struct EguiSurface<'p> {
    painter: &'p Painter,
    origin: Vec2,
    states: StateStack,
}

impl<'p> EguiSurface<'p> {
    pub fn new(painter: &'p Painter, top_left: Pos2) -> Self {
        Self {
            painter,
            origin: Vec2::new(top_left.x, top_left.y),
            states: StateStack::default(),
        }
    }

    fn to_screen(&self, point: Vec2) -> Pos2 {
        pos(self.origin + self.states.current().apply(point))
    }

    fn screen_rect(&self, origin: Vec2, size: Vec2) -> Rect {
        Rect::from_two_pos(self.to_screen(origin), self.to_screen(origin + size))
    }

    fn fill_screen_rect(&self, rect: Rect, color: Color32) {
        let mut mesh = Mesh::default();
        mesh.add_colored_rect(rect, color);
        self.painter.add(Shape::mesh(mesh));
    }
}

impl TextMetrics for EguiSurface<'_> {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::WHITE)
            .size()
            .x
    }
}

impl Surface for EguiSurface<'_> {
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
        self.fill_screen_rect(self.screen_rect(origin, size), Color32::BLACK);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        let state = self.states.current();
        match &state.fill {
            Paint::Solid(color) => self.fill_screen_rect(self.screen_rect(origin, size), to_color32(*color)),
            Paint::Radial(gradient) => {
                let mesh = radial_mesh(gradient, &state.transform, self.origin);
                self.painter
                    .with_clip_rect(self.screen_rect(origin, size))
                    .add(Shape::mesh(mesh));
            }
        }
    }

    fn fill_path(&mut self, path: &Path) {
        let state = self.states.current();
        let color = to_color32(state.fill.representative_color());
        if let Some((center, radius)) = path.as_circle() {
            self.painter
                .circle_filled(self.to_screen(center), radius * state.scale_factor(), color);
            return;
        }
        for polyline in path.flatten() {
            if polyline.len() < 3 {
                continue;
            }
            let points = polyline.into_iter().map(|point| self.to_screen(point)).collect();
            self.painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    fn stroke_path(&mut self, path: &Path) {
        let state = self.states.current();
        let width = state.line_width * state.scale_factor();
        let color = to_color32(state.stroke);
        let stroke = Stroke::new(width, color);
        for polyline in path.flatten() {
            let points: Vec<Pos2> = polyline.into_iter().map(|point| self.to_screen(point)).collect();
            if state.line_cap == LineCap::Round && width > 2.0 {
                for end in [points.first(), points.last()].into_iter().flatten() {
                    self.painter.circle_filled(*end, width / 2.0, color);
                }
            }
            if points.len() == 2 {
                self.painter.line_segment([points[0], points[1]], stroke);
            } else {
                self.painter.add(Shape::line(points, stroke));
            }
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2) {
        let state = self.states.current();
        let font = FontId::proportional(state.font_size * state.scale_factor());
        let at = self.to_screen(at);
        if state.has_shadow() {
            let glow = to_color32(state.shadow_color.with_alpha(state.shadow_color.a / GLOW_TAPS as f32));
            let reach = state.shadow_blur * 0.25;
            for tap in 0..GLOW_TAPS {
                let angle = tap as f32 / GLOW_TAPS as f32 * std::f32::consts::TAU;
                let offset = Vec2::from_angle(angle) * reach;
                self.painter
                    .text(at + egui::vec2(offset.x, offset.y), Align2::LEFT_BOTTOM, text, font.clone(), glow);
            }
        }
        let color = to_color32(state.fill.representative_color());
        self.painter.text(at, Align2::LEFT_BOTTOM, text, font, color);
    }
}

/// Asks egui to run another frame as soon as possible.
pub struct RepaintScheduler<'c> {
    context: &'c egui::Context,
}

impl<'c> RepaintScheduler<'c> {
    pub fn new(context: &'c egui::Context) -> Self {
        Self { context }
    }
}

impl TickScheduler for RepaintScheduler<'_> {
    fn request_next_tick(&mut self) {
        self.context.request_repaint();
    }
}
