//! Frame driver: backdrop, scene tick, restart pause and resize coalescing.

use glam::{Affine2, Vec2};
use skyletters_platform::{LineCap, LineJoin, Paint, RadialGradient, Surface, TextMetrics, TickScheduler, Viewport};
use tracing::{debug, info};

use crate::config::{BackdropConfig, SceneConfig};
use crate::random::{Dice, RandomSource};
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Restart {
    Running,
    /// Everything is done; reset after this many more frames.
    Pausing { remaining: u32 },
}

pub struct Animation {
    scene: Scene,
    pending_viewport: Option<Viewport>,
    restart: Restart,
    frames: u64,
}

impl Animation {
    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn new<M: TextMetrics + ?Sized>(config: SceneConfig, viewport: Viewport, metrics: &M) -> Self {
        let dice = Dice::from_seed_option(config.seed);
        Self::with_rng(config, viewport, Box::new(dice), metrics)
    }

    pub fn with_rng<M: TextMetrics + ?Sized>(
        config: SceneConfig,
        viewport: Viewport,
        rng: Box<dyn RandomSource>,
        metrics: &M,
    ) -> Self {
        Self {
            scene: Scene::new(config, viewport, rng, metrics),
            pending_viewport: None,
            restart: Restart::Running,
            frames: 0,
        }
    }

    /// Record a host resize. Applied once, at the start of the next frame,
    /// however many notifications arrive in between.
    pub fn notify_resize(&mut self, viewport: Viewport) {
        self.pending_viewport = Some(viewport);
    }

    /// Paint one complete frame and ask for the next one.
    pub fn frame(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn TickScheduler) {
        self.frames += 1;
        if let Some(viewport) = self.pending_viewport.take() {
            info!(width = viewport.width, height = viewport.height, "viewport changed, rebuilding scene");
            self.scene.resize(viewport, &*surface);
            self.restart = Restart::Running;
        }

        let viewport = self.scene.viewport();
        paint_backdrop(surface, viewport, &self.scene.config().backdrop);

        surface.save();
        surface.translate(viewport.center());
        surface.set_line_cap(LineCap::Round);
        surface.set_line_join(LineJoin::Round);
        surface.set_font_size(self.scene.config().layout.char_size);
        let all_done = self.scene.tick(surface);
        surface.restore();

        self.restart = match self.restart {
            Restart::Running if all_done => {
                let pause = self.scene.config().timing.restart_pause_ticks;
                info!(frame = self.frames, pause, "all letters done, restarting after pause");
                Restart::Pausing { remaining: pause }
            }
            Restart::Running => Restart::Running,
            Restart::Pausing { remaining } if remaining <= 1 => {
                debug!(frame = self.frames, "restarting scene");
                self.scene.reset();
                Restart::Running
            }
            Restart::Pausing { remaining } => Restart::Pausing {
                remaining: remaining - 1,
            },
        };

        scheduler.request_next_tick();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_pausing(&self) -> bool {
        matches!(self.restart, Restart::Pausing { .. })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Dark base plus a soft warm glow centred on the viewport.
pub fn paint_backdrop(surface: &mut dyn Surface, viewport: Viewport, backdrop: &BackdropConfig) {
    let size = viewport.size();
    surface.save();
    surface.set_transform(Affine2::IDENTITY);
    surface.clear_rect(Vec2::ZERO, size);
    surface.set_fill(Paint::Solid(backdrop.base));
    surface.fill_rect(Vec2::ZERO, size);
    surface.set_fill(Paint::Radial(RadialGradient {
        center: viewport.center(),
        inner_radius: 0.0,
        outer_radius: viewport.width.max(viewport.height) * backdrop.glow_reach,
        stops: backdrop.glow.clone(),
    }));
    surface.fill_rect(Vec2::ZERO, size);
    surface.restore();
}
