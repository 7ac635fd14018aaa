use std::f32::consts::TAU;

use glam::Vec2;

/// Samples per cubic segment when flattening.
const CUBIC_STEPS: usize = 16;
/// Samples per full turn of an arc when flattening.
const ARC_STEPS_PER_TURN: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { control1: Vec2, control2: Vec2, to: Vec2 },
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new().move_to(from).line_to(to)
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::new().arc(center, radius, 0.0, TAU)
    }

    pub fn move_to(mut self, point: Vec2) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Vec2) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn cubic_to(mut self, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        self.commands.push(PathCommand::CubicTo { control1, control2, to });
        self
    }

    pub fn arc(mut self, center: Vec2, radius: f32, start: f32, end: f32) -> Self {
        self.commands.push(PathCommand::Arc { center, radius, start, end });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// `Some((center, radius))` when the path is exactly one full circle.
    pub fn as_circle(&self) -> Option<(Vec2, f32)> {
        match self.commands.as_slice() {
            [PathCommand::Arc { center, radius, start, end }] if (end - start).abs() >= TAU => {
                Some((*center, *radius))
            }
            _ => None,
        }
    }

    /// Polylines, one per subpath, with curves sampled into points.
    pub fn flatten(&self) -> Vec<Vec<Vec2>> {
        let mut polylines: Vec<Vec<Vec2>> = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(point);
                }
                PathCommand::LineTo(point) => current.push(point),
                PathCommand::CubicTo { control1, control2, to } => {
                    let from = current.last().copied().unwrap_or(control1);
                    if current.is_empty() {
                        current.push(from);
                    }
                    for step in 1..=CUBIC_STEPS {
                        let t = step as f32 / CUBIC_STEPS as f32;
                        current.push(cubic_point(from, control1, control2, to, t));
                    }
                }
                PathCommand::Arc { center, radius, start, end } => {
                    let sweep = end - start;
                    let steps = ((sweep.abs() / TAU) * ARC_STEPS_PER_TURN as f32).ceil().max(1.0) as usize;
                    for step in 0..=steps {
                        let angle = start + sweep * step as f32 / steps as f32;
                        current.push(center + Vec2::from_angle(angle) * radius);
                    }
                }
            }
        }
        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }
}

fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}
