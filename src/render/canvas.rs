//! The rose renderer
//!
//! Owns the current canvas snapshot and turns it into two polylines: a thin
//! Maurer rose, then the thick sine path drawn over it.

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::surface::{Rgb, Surface};
use crate::rose::{generate_points, AnimationState, CanvasState, CurveParams, CurveVariant, Point};

/// Stroke for one curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: Rgb,
    pub width: f32,
}

/// How the two curves are drawn
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub maurer: CurveStyle,
    pub sine: CurveStyle,
    pub antialias: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            maurer: CurveStyle {
                color: Rgb::MEDIUM_VIOLET_RED,
                width: 1.0,
            },
            sine: CurveStyle {
                color: Rgb::ORANGE,
                width: 3.0,
            },
            antialias: true,
        }
    }
}

/// Operations the host event loop drives
pub trait CurveRenderer {
    /// Advance the animation one step
    fn tick(&mut self);

    /// The drawing surface changed size
    fn resize(&mut self, width: i32, height: i32);

    /// Draw the current frame
    fn paint(&self, surface: &mut dyn Surface);
}

/// Maurer rose renderer
///
/// Generic over the RNG so tests can use a seeded one.
pub struct RoseRenderer<R: Rng = ThreadRng> {
    canvas: CanvasState,
    /// Drawing style
    pub style: RenderStyle,
    rng: R,
}

impl RoseRenderer<ThreadRng> {
    pub fn new(animation: AnimationState, style: RenderStyle) -> Self {
        Self::with_rng(animation, style, rand::thread_rng())
    }
}

impl<R: Rng> RoseRenderer<R> {
    pub fn with_rng(animation: AnimationState, style: RenderStyle, rng: R) -> Self {
        Self {
            canvas: CanvasState::new(animation),
            style,
            rng,
        }
    }

    /// Current snapshot
    pub fn canvas(&self) -> CanvasState {
        self.canvas
    }

    /// Both point buffers for the current snapshot, Maurer first
    pub fn frame_points(&self) -> [Vec<Point>; 2] {
        let params = CurveParams::from(self.canvas);
        [
            generate_points(params, CurveVariant::Maurer).collect(),
            generate_points(params, CurveVariant::SinePath).collect(),
        ]
    }
}

impl<R: Rng> CurveRenderer for RoseRenderer<R> {
    fn tick(&mut self) {
        let animation = self.canvas.animation.tick(&mut self.rng);
        log::trace!("tick: n = {:.4}, d = {:.4}", animation.n, animation.d);
        self.canvas = self.canvas.with_animation(animation);
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.canvas = self.canvas.resize(width, height);
        log::debug!(
            "resize: {}x{}, size factor {}",
            width,
            height,
            self.canvas.size_factor
        );
    }

    fn paint(&self, surface: &mut dyn Surface) {
        surface.set_antialias(self.style.antialias);

        let [maurer, sine] = self.frame_points();

        surface.set_stroke(self.style.maurer.color, self.style.maurer.width);
        surface.draw_polyline(&maurer);

        surface.set_stroke(self.style.sine.color, self.style.sine.width);
        surface.draw_polyline(&sine);
    }
}
