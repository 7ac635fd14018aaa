//! One character's lifecycle: firework → contemplate → balloon → done.
//!
//! Each phase is a variant carrying only its own state. Random timings are
//! drawn when a phase is entered, so two letters never move in lockstep.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use skyletters_platform::{Color, Paint, Path, Surface, TextMetrics, Viewport};
use tracing::{debug, trace};

use crate::balloon::{balloon_path, has_left_view};
use crate::config::SceneConfig;
use crate::motion::{ease_in_out, progress, Trail};
use crate::palette::LetterPalette;
use crate::random::RandomSource;
use crate::shard::Shard;

/// Newest firework segment opacity.
const TRAIL_MAX_ALPHA: f32 = 0.9;
/// Inflating balloons fade in up to this opacity.
const INFLATE_MAX_ALPHA: f32 = 0.9;

struct Glow {
    blur: f32,
    color: Color,
    lightness: f32,
}

const FADING_GLOW: Glow = Glow {
    blur: 18.0,
    color: Color::rgba(255, 200, 110, 0.9),
    lightness: 76.0,
};

const STEADY_GLOW: Glow = Glow {
    blur: 10.0,
    color: Color::rgba(255, 190, 80, 0.85),
    lightness: 72.0,
};

/// Everything a letter needs from the outside world for one tick.
pub struct TickContext<'a> {
    pub config: &'a SceneConfig,
    pub viewport: Viewport,
    pub rng: &'a mut dyn RandomSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Firework,
    Contemplate,
    Balloon,
    Done,
}

/// Character, resting position and colours. Fixed for the letter's life.
#[derive(Debug, Clone)]
struct Glyph {
    text: String,
    target: Vec2,
    /// Added to a position so the glyph is centred on it.
    offset: Vec2,
    palette: LetterPalette,
}

impl Glyph {
    fn draw(&self, surface: &mut dyn Surface, at: Vec2, color: Color) {
        surface.set_fill(Paint::Solid(color));
        surface.fill_text(&self.text, at + self.offset);
    }

    fn draw_glowing(&self, surface: &mut dyn Surface, glow: &Glow) {
        surface.save();
        surface.set_shadow(glow.blur, glow.color);
        self.draw(surface, self.target, self.palette.light(glow.lightness));
        surface.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrailPoint {
    position: Vec2,
    width: f32,
}

#[derive(Debug, Clone)]
enum Phase {
    Firework(Firework),
    Contemplate(Contemplate),
    Balloon(Balloon),
    Done,
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Firework(_) => PhaseKind::Firework,
            Phase::Contemplate(_) => PhaseKind::Contemplate,
            Phase::Balloon(_) => PhaseKind::Balloon,
            Phase::Done => PhaseKind::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Launch {
    Waiting { spawn_time: u32 },
    Rising,
}

#[derive(Debug, Clone)]
struct Firework {
    tick: u32,
    launch: Launch,
    reach_time: u32,
    line_width: f32,
    launch_y: f32,
    trail: Trail<TrailPoint>,
}

impl Firework {
    fn armed(ctx: &mut TickContext<'_>) -> Self {
        let config = &ctx.config.firework;
        let spawn_time = config.spawn_time.sample_ticks(ctx.rng);
        let reach_time = config.reach_time.sample_ticks(ctx.rng);
        let line_width = config.line_width.sample(ctx.rng);
        let launch_y = ctx.viewport.half_height();
        Self {
            tick: 0,
            launch: Launch::Waiting { spawn_time },
            reach_time,
            line_width,
            launch_y,
            trail: Trail::starting_at(
                config.trail_points,
                TrailPoint {
                    position: Vec2::new(0.0, launch_y),
                    width: 0.0,
                },
            ),
        }
    }

    fn step(&mut self, glyph: &Glyph, ctx: &mut TickContext<'_>, surface: &mut dyn Surface) -> Option<Phase> {
        self.tick += 1;
        match self.launch {
            Launch::Waiting { spawn_time } => {
                if self.tick >= spawn_time {
                    self.tick = 0;
                    self.launch = Launch::Rising;
                    trace!(letter = %glyph.text, "firework launched");
                }
                None
            }
            Launch::Rising => {
                let fraction = progress(self.tick, self.reach_time);
                let arc = (fraction * FRAC_PI_2).sin();
                let position = Vec2::new(
                    fraction * glyph.target.x,
                    self.launch_y + arc * (glyph.target.y - self.launch_y),
                );
                self.trail.push(TrailPoint {
                    position,
                    width: fraction * self.line_width,
                });
                self.draw(glyph, surface);

                (self.tick >= self.reach_time).then(|| Phase::Contemplate(Contemplate::burst(glyph, ctx)))
            }
        }
    }

    fn draw(&self, glyph: &Glyph, surface: &mut dyn Surface) {
        let len = self.trail.len();
        let width_step = 1.0 / len.saturating_sub(1).max(1) as f32;
        for (index, (older, newer)) in self.trail.segments().enumerate() {
            let position_in_trail = (index + 1) as f32;
            surface.set_stroke(glyph.palette.alpha(position_in_trail / len as f32 * TRAIL_MAX_ALPHA));
            surface.set_line_width(newer.width * width_step * position_in_trail);
            surface.stroke_path(&Path::line(newer.position, older.position));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Circle {
    Growing { tick: u32, grow_time: u32, fade_time: u32 },
    Fading { tick: u32, fade_time: u32 },
    Steady,
}

#[derive(Debug, Clone)]
struct Contemplate {
    tick: u32,
    circle_size: f32,
    circle: Circle,
    shards: Vec<Shard>,
}

impl Contemplate {
    fn burst(glyph: &Glyph, ctx: &mut TickContext<'_>) -> Self {
        let firework = &ctx.config.firework;
        let circle_size = firework.circle_size.sample(ctx.rng);
        let grow_time = firework.circle_time.sample_ticks(ctx.rng);
        let fade_time = firework.circle_fade_time.sample_ticks(ctx.rng);

        let shard_config = &ctx.config.shard;
        let count = (shard_config.count.sample(ctx.rng).floor() as usize).max(shard_config.min_count);
        let rotation = Vec2::from_angle(TAU / count as f32);
        let color = glyph.palette.alpha(1.0);
        let mut direction = Vec2::X;
        let mut shards = Vec::with_capacity(count);
        for _ in 0..count {
            direction = rotation.rotate(direction);
            shards.push(Shard::new(glyph.target, direction, color, shard_config, ctx.rng));
        }
        debug!(letter = %glyph.text, shards = count, "firework burst");

        Self {
            tick: 0,
            circle_size,
            circle: Circle::Growing {
                tick: 0,
                grow_time,
                fade_time,
            },
            shards,
        }
    }

    fn step(&mut self, glyph: &Glyph, ctx: &mut TickContext<'_>, surface: &mut dyn Surface) -> Option<Phase> {
        self.tick += 1;
        self.circle = match self.circle {
            Circle::Growing {
                tick,
                grow_time,
                fade_time,
            } => {
                let tick = tick + 1;
                let fraction = progress(tick, grow_time);
                surface.set_fill(Paint::Solid(glyph.palette.light_alpha(40.0 + 60.0 * fraction, fraction)));
                surface.fill_path(&Path::circle(glyph.target, ease_in_out(fraction) * self.circle_size));
                if tick > grow_time {
                    Circle::Fading { tick: 0, fade_time }
                } else {
                    Circle::Growing {
                        tick,
                        grow_time,
                        fade_time,
                    }
                }
            }
            Circle::Fading { tick, fade_time } => {
                glyph.draw_glowing(surface, &FADING_GLOW);
                let tick = tick + 1;
                let fraction = progress(tick, fade_time);
                surface.set_fill(Paint::Solid(glyph.palette.light_alpha(100.0, 1.0 - ease_in_out(fraction))));
                surface.fill_path(&Path::circle(glyph.target, self.circle_size));
                if tick >= fade_time {
                    Circle::Steady
                } else {
                    Circle::Fading { tick, fade_time }
                }
            }
            Circle::Steady => {
                glyph.draw_glowing(surface, &STEADY_GLOW);
                Circle::Steady
            }
        };

        let gravity = ctx.config.physics.gravity;
        let exit_y = ctx.viewport.half_height() + ctx.config.shard.exit_margin;
        for shard in &mut self.shards {
            shard.step(surface, gravity, exit_y);
        }
        let before = self.shards.len();
        self.shards.retain(Shard::is_alive);
        if self.shards.len() != before {
            trace!(letter = %glyph.text, expired = before - self.shards.len(), "shards expired");
        }

        (self.tick > ctx.config.contemplate.wait_time).then(|| Phase::Balloon(Balloon::tethered(glyph, ctx)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tether {
    Spawning { spawn_time: u32, inflate_time: u32 },
    Inflating { inflate_time: u32 },
    Flying,
}

#[derive(Debug, Clone)]
struct Balloon {
    tick: u32,
    size: f32,
    velocity: Vec2,
    center: Vec2,
    tether: Tether,
}

impl Balloon {
    fn tethered(glyph: &Glyph, ctx: &mut TickContext<'_>) -> Self {
        let config = &ctx.config.balloon;
        let spawn_time = config.spawn_time.sample_ticks(ctx.rng);
        let inflate_time = config.inflate_time.sample_ticks(ctx.rng);
        let size = config.size.sample(ctx.rng).floor();
        let angle = config.angle.sample(ctx.rng);
        let speed = config.velocity.sample(ctx.rng);
        debug!(letter = %glyph.text, size, angle, speed, "letter turning into a balloon");
        Self {
            tick: 0,
            size,
            velocity: Vec2::from_angle(angle) * speed,
            center: glyph.target,
            tether: Tether::Spawning {
                spawn_time,
                inflate_time,
            },
        }
    }

    fn step(&mut self, glyph: &Glyph, ctx: &mut TickContext<'_>, surface: &mut dyn Surface) -> Option<Phase> {
        let palette = glyph.palette;
        surface.set_stroke(palette.light(82.0));
        surface.set_line_width(ctx.config.balloon.string_width);

        match self.tether {
            Tether::Spawning {
                spawn_time,
                inflate_time,
            } => {
                self.tick += 1;
                glyph.draw(surface, glyph.target, palette.light(72.0));
                if self.tick >= spawn_time {
                    self.tick = 0;
                    self.tether = Tether::Inflating { inflate_time };
                }
                None
            }
            Tether::Inflating { inflate_time } => {
                self.tick += 1;
                let fraction = progress(self.tick, inflate_time);
                self.center = glyph.target - Vec2::new(0.0, self.size * fraction);
                surface.set_fill(Paint::Solid(palette.alpha(fraction * INFLATE_MAX_ALPHA)));
                surface.fill_path(&balloon_path(self.center, self.size * fraction));
                surface.stroke_path(&Path::line(self.center, glyph.target));
                glyph.draw(surface, glyph.target, palette.light(70.0));
                if self.tick >= inflate_time {
                    self.tick = 0;
                    self.tether = Tether::Flying;
                }
                None
            }
            Tether::Flying => {
                self.velocity.y += ctx.config.physics.up_flow;
                self.center += self.velocity;
                let hang = self.center + Vec2::new(0.0, self.size);
                surface.set_fill(Paint::Solid(palette.solid()));
                surface.fill_path(&balloon_path(self.center, self.size));
                surface.stroke_path(&Path::line(self.center, hang));
                glyph.draw(surface, hang, palette.light(76.0));

                has_left_view(self.center, self.size, ctx.viewport, ctx.config.balloon.exit_margin).then(|| {
                    debug!(letter = %glyph.text, "balloon left the view");
                    Phase::Done
                })
            }
        }
    }
}

/// A single animated character.
#[derive(Debug, Clone)]
pub struct Letter {
    glyph: Glyph,
    phase: Phase,
}

impl Letter {
    /// Letter resting at `target`, coloured by its place in a block of
    /// `block_width`, starting a fresh firework.
    pub fn new<M: TextMetrics + ?Sized>(
        character: char,
        target: Vec2,
        block_width: f32,
        metrics: &M,
        ctx: &mut TickContext<'_>,
    ) -> Self {
        let text = character.to_string();
        let char_size = ctx.config.layout.char_size;
        let offset = Vec2::new(-metrics.text_width(&text, char_size) / 2.0, char_size / 2.0);
        let glyph = Glyph {
            text,
            target,
            offset,
            palette: LetterPalette::for_position(target.x, block_width),
        };
        Self {
            glyph,
            phase: Phase::Firework(Firework::armed(ctx)),
        }
    }

    /// Back to an unlaunched firework with fresh timings; drops all shards.
    pub fn reset(&mut self, ctx: &mut TickContext<'_>) {
        self.phase = Phase::Firework(Firework::armed(ctx));
    }

    /// Advance one tick and draw. A done letter does nothing.
    pub fn step(&mut self, ctx: &mut TickContext<'_>, surface: &mut dyn Surface) {
        let before = self.phase.kind();
        let next = match &mut self.phase {
            Phase::Firework(firework) => firework.step(&self.glyph, ctx, surface),
            Phase::Contemplate(contemplate) => contemplate.step(&self.glyph, ctx, surface),
            Phase::Balloon(balloon) => balloon.step(&self.glyph, ctx, surface),
            Phase::Done => None,
        };
        if let Some(next) = next {
            debug!(letter = %self.glyph.text, from = ?before, to = ?next.kind(), "phase change");
            self.phase = next;
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    pub fn character(&self) -> &str {
        &self.glyph.text
    }

    pub fn target(&self) -> Vec2 {
        self.glyph.target
    }

    pub fn draw_offset(&self) -> Vec2 {
        self.glyph.offset
    }

    pub fn palette(&self) -> LetterPalette {
        self.glyph.palette
    }

    /// True once the firework has left the launch pad (or later phases).
    pub fn is_launched(&self) -> bool {
        !matches!(
            self.phase,
            Phase::Firework(Firework {
                launch: Launch::Waiting { .. },
                ..
            })
        )
    }

    /// Shards still alive; empty outside the contemplate phase.
    pub fn shards(&self) -> &[Shard] {
        match &self.phase {
            Phase::Contemplate(contemplate) => &contemplate.shards,
            _ => &[],
        }
    }

    /// Length of the firework trail while in the firework phase.
    pub fn firework_trail_len(&self) -> Option<usize> {
        match &self.phase {
            Phase::Firework(firework) => Some(firework.trail.len()),
            _ => None,
        }
    }

    /// Balloon anchor while in the balloon phase.
    pub fn balloon_center(&self) -> Option<Vec2> {
        match &self.phase {
            Phase::Balloon(balloon) => Some(balloon.center),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Spread;
    use crate::random::{ConstantSource, ScriptedSource};
    use pretty_assertions::assert_eq;
    use skyletters_platform::recording::{DrawKind, RecordingSurface};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 1.0)
    }

    fn letter_at(config: &SceneConfig, target: Vec2, rng: &mut dyn RandomSource) -> Letter {
        let surface = RecordingSurface::new();
        let mut ctx = TickContext {
            config,
            viewport: viewport(),
            rng,
        };
        Letter::new('A', target, 310.0, &surface, &mut ctx)
    }

    fn run(letter: &mut Letter, config: &SceneConfig, rng: &mut dyn RandomSource, ticks: usize) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        let mut ctx = TickContext {
            config,
            viewport: viewport(),
            rng,
        };
        for _ in 0..ticks {
            letter.step(&mut ctx, &mut surface);
        }
        surface
    }

    #[test]
    fn construction_measures_and_centres_the_glyph() {
        let config = SceneConfig::default();
        let letter = letter_at(&config, Vec2::new(10.0, 20.0), &mut ConstantSource(0.5));
        // RecordingSurface advances 0.6 * 44 per character
        assert!((letter.draw_offset() - Vec2::new(-13.2, 22.0)).length() < 1e-5);
        assert_eq!(letter.phase(), PhaseKind::Firework);
        assert!(!letter.is_launched());
        assert_eq!(letter.firework_trail_len(), Some(1));
    }

    #[test]
    fn waits_for_spawn_delay_before_drawing() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.5);
        let mut letter = letter_at(&config, Vec2::new(0.0, -100.0), &mut rng);
        // spawn delay is floor(140 * 0.5) = 70 ticks
        let surface = run(&mut letter, &config, &mut rng, 69);
        assert!(!letter.is_launched());
        assert!(surface.calls().is_empty());
        run(&mut letter, &config, &mut rng, 1);
        assert!(letter.is_launched());
    }

    #[test]
    fn firework_trail_stays_within_cap() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::new(100.0, -100.0), &mut rng);
        let mut surface = RecordingSurface::new();
        let mut ctx = TickContext {
            config: &config,
            viewport: viewport(),
            rng: &mut rng,
        };
        while letter.phase() == PhaseKind::Firework {
            letter.step(&mut ctx, &mut surface);
            if let Some(len) = letter.firework_trail_len() {
                assert!(len <= config.firework.trail_points);
            }
        }
        assert_eq!(letter.phase(), PhaseKind::Contemplate);
    }

    #[test]
    fn firework_segments_grow_more_opaque_toward_the_head() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::new(50.0, -50.0), &mut rng);
        // spawn 0 ticks, then a few rising ticks
        let surface = run(&mut letter, &config, &mut rng, 6);
        let last_frame: Vec<f32> = surface.calls().iter().rev().take(4).map(|call| call.state.stroke.a).collect();
        assert!(last_frame.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(last_frame[0] <= TRAIL_MAX_ALPHA);
    }

    #[test]
    fn firework_arrives_exactly_at_target() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let target = Vec2::new(62.0, -36.0);
        let mut letter = letter_at(&config, target, &mut rng);
        let mut surface = RecordingSurface::new();
        let mut ctx = TickContext {
            config: &config,
            viewport: viewport(),
            rng: &mut rng,
        };
        let mut last_head = None;
        while letter.phase() == PhaseKind::Firework {
            letter.step(&mut ctx, &mut surface);
            if let Some(DrawKind::StrokePath(path)) = surface.calls().last().map(|call| &call.kind) {
                last_head = path.flatten().first().and_then(|line| line.first().copied());
            }
        }
        let head = last_head.expect("firework drew a trail");
        assert!(head.distance(target) < 1e-3);
    }

    #[test]
    fn burst_spreads_shards_evenly() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        run(&mut letter, &config, &mut rng, 37);
        assert_eq!(letter.phase(), PhaseKind::Contemplate);
        // floor(7 + 8 * 0) = 7 shards, not stepped yet
        let shards = letter.shards();
        assert_eq!(shards.len(), 7);
        let mut angles: Vec<f32> = shards
            .iter()
            .map(|shard| shard.velocity().y.atan2(shard.velocity().x))
            .collect();
        angles.sort_by(f32::total_cmp);
        for pair in angles.windows(2) {
            assert!((pair[1] - pair[0] - TAU / 7.0).abs() < 1e-4);
        }
    }

    #[test]
    fn shard_count_never_drops_below_minimum() {
        let mut config = SceneConfig::default();
        config.shard.count = Spread::new(1.0, 0.0);
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        run(&mut letter, &config, &mut rng, 37);
        assert_eq!(letter.shards().len(), 5);
    }

    #[test]
    fn dead_shards_leave_the_collection_in_order() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        let shard_config = &config.shard;
        let falling = Shard::new(Vec2::new(0.0, 1000.0), Vec2::Y, Color::BLACK, shard_config, &mut rng);
        let first = Shard::new(Vec2::new(-5.0, 0.0), Vec2::X, Color::BLACK, shard_config, &mut rng);
        let last = Shard::new(Vec2::new(5.0, 0.0), Vec2::X, Color::BLACK, shard_config, &mut rng);
        letter.phase = Phase::Contemplate(Contemplate {
            tick: 0,
            circle_size: 20.0,
            circle: Circle::Steady,
            shards: vec![first, falling, last],
        });
        run(&mut letter, &config, &mut rng, 1);
        let xs: Vec<f32> = letter.shards().iter().map(|shard| shard.position().x.signum()).collect();
        assert_eq!(xs, vec![-1.0, 1.0]);
    }

    #[test]
    fn circle_grows_then_fades_then_holds() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        run(&mut letter, &config, &mut rng, 37);
        // grow 36 ticks + 1 overshoot, fade 12 ticks
        let growing = run(&mut letter, &config, &mut rng, 37);
        assert!(growing.texts().is_empty());
        let fading = run(&mut letter, &config, &mut rng, 12);
        let glows: Vec<f32> = fading.texts().iter().map(|call| call.state.shadow_blur).collect();
        assert_eq!(glows, vec![18.0; 12]);
        let steady = run(&mut letter, &config, &mut rng, 1);
        assert_eq!(steady.texts()[0].state.shadow_blur, 10.0);
        assert_eq!(steady.save_depth(), 0);
    }

    #[test]
    fn phases_advance_in_order_to_done() {
        let config = SceneConfig::default();
        let mut rng = ScriptedSource::new(vec![0.3, 0.7, 0.1, 0.9, 0.5]);
        let mut letter = letter_at(&config, Vec2::new(-31.0, 0.0), &mut rng);
        let mut surface = RecordingSurface::new();
        let mut ctx = TickContext {
            config: &config,
            viewport: viewport(),
            rng: &mut rng,
        };
        let mut seen = vec![letter.phase()];
        for _ in 0..5_000 {
            letter.step(&mut ctx, &mut surface);
            if seen.last() != Some(&letter.phase()) {
                seen.push(letter.phase());
            }
        }
        assert_eq!(
            seen,
            vec![
                PhaseKind::Firework,
                PhaseKind::Contemplate,
                PhaseKind::Balloon,
                PhaseKind::Done
            ]
        );
    }

    #[test]
    fn done_letters_draw_nothing() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.5);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        letter.phase = Phase::Done;
        let surface = run(&mut letter, &config, &mut rng, 10);
        assert!(surface.calls().is_empty());
        assert!(letter.is_done());
    }

    #[test]
    fn balloon_inflates_above_the_letter_then_rises() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.5);
        let target = Vec2::new(0.0, 40.0);
        let mut letter = letter_at(&config, target, &mut rng);
        while letter.phase() != PhaseKind::Balloon {
            run(&mut letter, &config, &mut rng, 1);
        }
        assert_eq!(letter.balloon_center(), Some(target));
        // spawn floor(18 * 0.5) = 9, inflate floor(12 + 9) = 21, size floor(18 + 12) = 30
        run(&mut letter, &config, &mut rng, 9 + 21);
        let inflated = letter.balloon_center().unwrap();
        assert!((inflated - Vec2::new(0.0, 10.0)).length() < 1e-4);
        run(&mut letter, &config, &mut rng, 10);
        assert!(letter.balloon_center().unwrap().y < inflated.y);
    }

    #[test]
    fn reset_returns_to_a_fresh_firework_from_any_phase() {
        let config = SceneConfig::default();
        let mut rng = ConstantSource(0.0);
        let mut letter = letter_at(&config, Vec2::ZERO, &mut rng);
        for ticks in [0, 10, 60, 400, 2_000] {
            run(&mut letter, &config, &mut rng, ticks);
            let mut ctx = TickContext {
                config: &config,
                viewport: viewport(),
                rng: &mut rng,
            };
            letter.reset(&mut ctx);
            assert_eq!(letter.phase(), PhaseKind::Firework);
            assert!(!letter.is_launched());
            assert!(letter.shards().is_empty());
            assert_eq!(letter.firework_trail_len(), Some(1));
            letter.reset(&mut ctx);
            assert_eq!(letter.phase(), PhaseKind::Firework);
            assert!(!letter.is_launched());
        }
    }
}
