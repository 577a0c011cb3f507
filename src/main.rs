//! maurer-rose - Animated Maurer rose viewer
//!
//! Draws a Maurer rose and the sine rose it is built on, nudging both
//! curve parameters by a random amount on every timer tick.
//!
//! The egui frame loop plays the part of the host event loop: each frame
//! it delivers any due tick, reports size changes of the drawing panel,
//! and paints.

use std::time::{Duration, Instant};

use eframe::egui;

mod animation;
mod render;
mod rose;
mod settings;

use animation::{Ticker, MAX_INTERVAL, MIN_INTERVAL};
use render::{CurveRenderer, CurveStyle, PainterSurface, Rgb, RoseRenderer};
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting maurer-rose");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Maurer Rose"),
        ..Default::default()
    };

    eframe::run_native(
        "maurer-rose",
        options,
        Box::new(|cc| Ok(Box::new(RoseApp::new(cc, settings)))),
    )
}

/// Stroke color presets as (maurer, sine)
const COLOR_PRESETS: &[(&str, Rgb, Rgb)] = &[
    ("Classic", Rgb::MEDIUM_VIOLET_RED, Rgb::ORANGE),
    ("Mono", Rgb(220, 220, 220), Rgb(120, 120, 120)),
    ("Ocean", Rgb(60, 120, 255), Rgb(0, 200, 180)),
];

/// Main application state
struct RoseApp {
    renderer: RoseRenderer,
    ticker: Ticker,
    settings: AppSettings,
    show_settings: bool,

    /// Panel size last reported to the renderer
    last_size: Option<(i32, i32)>,
    status: String,
}

impl RoseApp {
    fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let renderer = RoseRenderer::new(settings.initial_animation(), settings.render_style());
        let ticker = Ticker::new(settings.tick_interval(), settings.autostart, Instant::now());

        Self {
            renderer,
            ticker,
            show_settings: settings.show_settings,
            settings,
            last_size: None,
            status: String::new(),
        }
    }

    fn save_settings(&mut self) {
        self.settings.set_render_style(&self.renderer.style);
        self.settings.tick_interval_ms = self.ticker.interval().as_millis() as u64;
        self.settings.show_settings = self.show_settings;

        self.status = match self.settings.save() {
            Ok(()) => "Settings saved".to_string(),
            Err(e) => {
                log::warn!("Failed to save settings: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }

    fn stroke_controls(ui: &mut egui::Ui, label: &str, style: &mut CurveStyle) {
        ui.add(egui::Slider::new(&mut style.width, 0.5..=8.0).text(label));
    }

    fn settings_panel(&mut self, ctx: &egui::Context, now: Instant) {
        egui::SidePanel::left("settings_panel")
            .min_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Animation");
                ui.separator();

                let mut interval_ms = self.ticker.interval().as_millis() as u64;
                let range = MIN_INTERVAL.as_millis() as u64..=MAX_INTERVAL.as_millis() as u64;
                if ui
                    .add(
                        egui::Slider::new(&mut interval_ms, range)
                            .text("Interval (ms)")
                            .logarithmic(true),
                    )
                    .changed()
                {
                    self.ticker
                        .set_interval(Duration::from_millis(interval_ms), now);
                }

                ui.separator();

                ui.collapsing("Display", |ui| {
                    Self::stroke_controls(ui, "Rose width", &mut self.renderer.style.maurer);
                    Self::stroke_controls(ui, "Sine width", &mut self.renderer.style.sine);
                    ui.checkbox(&mut self.renderer.style.antialias, "Antialias");
                });

                ui.separator();

                ui.collapsing("Color", |ui| {
                    ui.horizontal(|ui| {
                        for (name, maurer, sine) in COLOR_PRESETS {
                            if ui.button(*name).clicked() {
                                self.renderer.style.maurer.color = *maurer;
                                self.renderer.style.sine.color = *sine;
                            }
                        }
                    });
                });

                ui.separator();

                if ui.button("💾 Save settings").clicked() {
                    self.save_settings();
                }
            });
    }
}

impl eframe::App for RoseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.ticker.poll(now) {
            self.renderer.tick();
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.ticker.is_running() {
                    "⏹ Stop"
                } else {
                    "▶ Play"
                };
                if ui.button(button_text).clicked() {
                    self.ticker.toggle(now);
                }

                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();

                let canvas = self.renderer.canvas();
                ui.label(format!(
                    "n = {:.3}   d = {:.3}   size = {}",
                    canvas.animation.n, canvas.animation.d, canvas.size_factor
                ));

                if !self.status.is_empty() {
                    ui.separator();
                    ui.small(&self.status);
                }
            });
        });

        if self.show_settings {
            self.settings_panel(ctx, now);
        }

        // Drawing surface
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;

            let size = (rect.width() as i32, rect.height() as i32);
            if self.last_size != Some(size) {
                self.renderer.resize(size.0, size.1);
                self.last_size = Some(size);
            }

            let mut surface = PainterSurface::new(&painter, rect.min);
            self.renderer.paint(&mut surface);
        });

        if let Some(wait) = self.ticker.until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
