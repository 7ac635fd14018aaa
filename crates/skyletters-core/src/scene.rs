//! Lays configured text out around the origin and advances every letter.

use glam::Vec2;
use skyletters_platform::{Surface, TextMetrics, Viewport};
use tracing::{info, trace};

use crate::config::SceneConfig;
use crate::letter::{Letter, TickContext};
use crate::random::RandomSource;

pub struct Scene {
    config: SceneConfig,
    viewport: Viewport,
    rng: Box<dyn RandomSource>,
    letters: Vec<Letter>,
    block_width: f32,
}

impl Scene {
    pub fn new<M: TextMetrics + ?Sized>(
        config: SceneConfig,
        viewport: Viewport,
        rng: Box<dyn RandomSource>,
        metrics: &M,
    ) -> Self {
        let mut scene = Self {
            config,
            viewport,
            rng,
            letters: Vec::new(),
            block_width: 0.0,
        };
        scene.create_letters(metrics);
        scene
    }

    /// Rebuild all letters, row-major, centred on the origin. Prior progress
    /// is discarded.
    pub fn create_letters<M: TextMetrics + ?Sized>(&mut self, metrics: &M) {
        self.letters.clear();
        let layout = &self.config.layout;
        let longest = self
            .config
            .strings
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        self.block_width = layout.char_spacing * longest as f32;
        let block_height = layout.line_height * self.config.strings.len() as f32;

        let mut ctx = TickContext {
            config: &self.config,
            viewport: self.viewport,
            rng: self.rng.as_mut(),
        };
        for (row_index, row) in self.config.strings.iter().enumerate() {
            let row_width = layout.char_spacing * row.chars().count() as f32;
            let x_offset = -row_width / 2.0 + layout.char_spacing / 2.0;
            let y = row_index as f32 * layout.line_height + layout.line_height / 2.0 - block_height / 2.0;
            for (column, character) in row.chars().enumerate() {
                let target = Vec2::new(x_offset + column as f32 * layout.char_spacing, y);
                self.letters
                    .push(Letter::new(character, target, self.block_width, metrics, &mut ctx));
            }
        }
        info!(
            letters = self.letters.len(),
            rows = self.config.strings.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            dpr = self.viewport.device_pixel_ratio,
            "scene laid out"
        );
    }

    /// Adopt a new viewport and lay everything out again from scratch.
    pub fn resize<M: TextMetrics + ?Sized>(&mut self, viewport: Viewport, metrics: &M) {
        self.viewport = viewport;
        self.create_letters(metrics);
    }

    /// Advance every letter once, in reading order. Returns whether all
    /// letters are done. Expects the surface origin at the viewport centre.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> bool {
        let mut ctx = TickContext {
            config: &self.config,
            viewport: self.viewport,
            rng: self.rng.as_mut(),
        };
        let mut all_done = true;
        for letter in &mut self.letters {
            if letter.is_done() {
                continue;
            }
            letter.step(&mut ctx, surface);
            all_done &= letter.is_done();
        }
        trace!(all_done, "scene tick");
        all_done
    }

    pub fn all_done(&self) -> bool {
        self.letters.iter().all(Letter::is_done)
    }

    /// Send every letter back to the launch pad with fresh timings.
    pub fn reset(&mut self) {
        let mut ctx = TickContext {
            config: &self.config,
            viewport: self.viewport,
            rng: self.rng.as_mut(),
        };
        for letter in &mut self.letters {
            letter.reset(&mut ctx);
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width of the longest row, which spans the hue range.
    pub fn block_width(&self) -> f32 {
        self.block_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::PhaseKind;
    use crate::random::ConstantSource;
    use pretty_assertions::assert_eq;
    use skyletters_platform::recording::RecordingSurface;

    fn scene_with(strings: &[&str]) -> Scene {
        let config = SceneConfig {
            strings: strings.iter().map(|row| row.to_string()).collect(),
            ..SceneConfig::default()
        };
        Scene::new(
            config,
            Viewport::new(800.0, 600.0, 1.0),
            Box::new(ConstantSource(0.5)),
            &RecordingSurface::new(),
        )
    }

    fn targets(scene: &Scene) -> Vec<Vec2> {
        scene.letters().iter().map(Letter::target).collect()
    }

    #[test]
    fn single_character_sits_at_the_centre() {
        let scene = scene_with(&["X"]);
        assert_eq!(targets(&scene), vec![Vec2::ZERO]);
        assert_eq!(scene.block_width(), 62.0);
    }

    #[test]
    fn rows_are_centred_independently() {
        let scene = scene_with(&["AB", "CDEF"]);
        assert_eq!(
            targets(&scene),
            vec![
                Vec2::new(-31.0, -36.0),
                Vec2::new(31.0, -36.0),
                Vec2::new(-93.0, 36.0),
                Vec2::new(-31.0, 36.0),
                Vec2::new(31.0, 36.0),
                Vec2::new(93.0, 36.0),
            ]
        );
        let characters: String = scene.letters().iter().map(Letter::character).collect();
        assert_eq!(characters, "ABCDEF");
    }

    #[test]
    fn row_offset_ignores_other_rows() {
        let alone = scene_with(&["AB"]);
        let paired = scene_with(&["AB", "CDEFGHIJ"]);
        let xs = |scene: &Scene| -> Vec<f32> { scene.letters()[..2].iter().map(|letter| letter.target().x).collect() };
        assert_eq!(xs(&alone), xs(&paired));
    }

    #[test]
    fn hue_follows_position_across_the_longest_row() {
        let scene = scene_with(&["ABCDE"]);
        let hues: Vec<f32> = scene.letters().iter().map(|letter| letter.palette().hue()).collect();
        assert!(hues.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(hues[0] > 30.0 && hues[4] < 55.0);
    }

    #[test]
    fn empty_text_is_immediately_done() {
        let mut scene = scene_with(&[]);
        assert!(scene.letters().is_empty());
        assert!(scene.all_done());
        assert!(scene.tick(&mut RecordingSurface::new()));
    }

    #[test]
    fn resize_discards_progress() {
        let mut scene = scene_with(&["HI"]);
        let mut surface = RecordingSurface::new();
        for _ in 0..200 {
            scene.tick(&mut surface);
        }
        assert!(scene.letters().iter().all(|letter| letter.phase() == PhaseKind::Contemplate));
        scene.resize(Viewport::new(1024.0, 768.0, 2.0), &surface);
        assert_eq!(scene.letters().len(), 2);
        assert!(scene
            .letters()
            .iter()
            .all(|letter| letter.phase() == PhaseKind::Firework && !letter.is_launched()));
        assert_eq!(scene.viewport().width, 1024.0);
    }

    #[test]
    fn reset_rearms_every_letter() {
        let mut scene = scene_with(&["OK"]);
        let mut surface = RecordingSurface::new();
        for _ in 0..100 {
            scene.tick(&mut surface);
        }
        scene.reset();
        assert!(scene.letters().iter().all(|letter| !letter.is_launched()));
    }
}
