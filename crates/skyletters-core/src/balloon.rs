//! Balloon silhouette and the off-screen test for a floating balloon.

use glam::Vec2;
use skyletters_platform::{Path, Viewport};

/// Teardrop outline hanging from `anchor` up to an apex `size` above it.
pub fn balloon_path(anchor: Vec2, size: f32) -> Path {
    let Vec2 { x, y } = anchor;
    let apex = Vec2::new(x, y - size);
    Path::new()
        .move_to(anchor)
        .cubic_to(
            Vec2::new(x - size / 2.0, y - size / 2.0),
            Vec2::new(x - size / 4.0, y - size),
            apex,
        )
        .cubic_to(
            Vec2::new(x + size / 4.0, y - size),
            Vec2::new(x + size / 2.0, y - size / 2.0),
            anchor,
        )
}

/// True once a balloon anchored at `center` is `margin` past the top, left
/// or right edge of a viewport centred on the origin.
pub fn has_left_view(center: Vec2, size: f32, viewport: Viewport, margin: f32) -> bool {
    let half_width = viewport.half_width();
    let half_height = viewport.half_height();
    center.y + size < -half_height - margin
        || center.x < -half_width - margin
        || center.x > half_width + margin
}
