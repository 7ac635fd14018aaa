//! egui/eframe host for the skyletters animation.

use skyletters_core::{Animation, ConfigError, SceneConfig};
use skyletters_platform::{SurfaceError, Viewport};
use tracing::info;

mod surface;
pub use surface::{radial_mesh, to_color32, EguiSurface, RepaintScheduler};

pub const WINDOW_TITLE: &str = "Skyletters";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Open the window and animate until it is closed. Failing to get a window
/// or graphics backend is fatal.
pub fn run(config: SceneConfig) -> Result<(), AppError> {
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([1280.0, 720.0]);
    info!(rows = config.strings.len(), "opening {WINDOW_TITLE} window");
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(SkylettersApp::new(config)))),
    )
    .map_err(|err| SurfaceError::Unavailable(err.to_string()))?;
    Ok(())
}

pub struct SkylettersApp {
    config: SceneConfig,
    animation: Option<Animation>,
    viewport: Option<Viewport>,
}

impl SkylettersApp {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            animation: None,
            viewport: None,
        }
    }
}

impl eframe::App for SkylettersApp {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(context, |ui| {
                let rect = ui.max_rect();
                let viewport = Viewport::new(rect.width(), rect.height(), context.pixels_per_point());
                let painter = ui.painter_at(rect);
                let mut surface = EguiSurface::new(&painter, rect.min);
                let mut scheduler = RepaintScheduler::new(context);

                if let Some(animation) = self.animation.as_mut() {
                    if self.viewport != Some(viewport) {
                        info!(width = viewport.width, height = viewport.height, "UI: window resized");
                        animation.notify_resize(viewport);
                    }
                }
                self.viewport = Some(viewport);
                let animation = self.animation.get_or_insert_with(|| {
                    info!(width = viewport.width, height = viewport.height, "UI: starting animation");
                    Animation::new(self.config.clone(), viewport, &surface)
                });
                animation.frame(&mut surface, &mut scheduler);
            });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 1.0]
    }
}
