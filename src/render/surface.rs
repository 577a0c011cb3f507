//! Drawing surface abstraction
//!
//! The renderer only needs three capabilities from whatever it draws on:
//! pick a stroke, draw a connected polyline, and toggle antialiasing.
//! `PainterSurface` provides them on top of an egui painter.

use eframe::egui::{self, Color32, Pos2, Stroke};
use serde::{Deserialize, Serialize};

use crate::rose::Point;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const MEDIUM_VIOLET_RED: Rgb = Rgb(199, 21, 133);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

/// Something the curves can be drawn onto
pub trait Surface {
    /// Set color and width for subsequent polylines
    fn set_stroke(&mut self, color: Rgb, width: f32);

    /// Draw straight segments joining consecutive points
    fn draw_polyline(&mut self, points: &[Point]);

    /// Rendering quality hint
    ///
    /// Surfaces that cannot honor it may ignore it.
    fn set_antialias(&mut self, _enabled: bool) {}
}

/// Surface backed by an egui painter
///
/// Points are in control coordinates; `origin` is the top-left corner of
/// the control on screen.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    stroke: Stroke,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            stroke: Stroke::new(1.0, Color32::WHITE),
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32,
            self.origin.y + point.y as f32,
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn set_stroke(&mut self, color: Rgb, width: f32) {
        self.stroke = Stroke::new(width, Color32::from(color));
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::line(screen, self.stroke));
    }

    fn set_antialias(&mut self, enabled: bool) {
        // Feathering is egui's antialiasing for tessellated shapes
        self.painter
            .ctx()
            .tessellation_options_mut(|options| options.feathering = enabled);
    }
}

/// Records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub antialias: Option<bool>,
    pub polylines: Vec<(Rgb, f32, Vec<Point>)>,
    stroke: Option<(Rgb, f32)>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn set_stroke(&mut self, color: Rgb, width: f32) {
        self.stroke = Some((color, width));
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        let (color, width) = self.stroke.unwrap_or((Rgb(255, 255, 255), 1.0));
        self.polylines.push((color, width, points.to_vec()));
    }

    fn set_antialias(&mut self, enabled: bool) {
        self.antialias = Some(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_color32() {
        let color = Color32::from(Rgb::MEDIUM_VIOLET_RED);
        assert_eq!(color.r(), 199);
        assert_eq!(color.g(), 21);
        assert_eq!(color.b(), 133);
        assert_eq!(color.a(), 255);
    }

    #[test]
    fn test_recording_surface_uses_current_stroke() {
        let mut surface = RecordingSurface::default();
        surface.set_stroke(Rgb::ORANGE, 3.0);
        surface.draw_polyline(&[Point::new(0, 0), Point::new(1, 1)]);

        assert_eq!(surface.polylines.len(), 1);
        assert_eq!(surface.polylines[0].0, Rgb::ORANGE);
        assert_eq!(surface.polylines[0].1, 3.0);
    }
}
