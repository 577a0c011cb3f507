//! Render module - drawing the rose
//!
//! This module provides:
//! - `CurveRenderer` trait the host drives (tick, resize, paint)
//! - `RoseRenderer`, the Maurer rose implementation
//! - `Surface` trait and its egui painter backend

mod canvas;
mod surface;

pub use canvas::{CurveRenderer, CurveStyle, RenderStyle, RoseRenderer};
pub use surface::{PainterSurface, Rgb};
