//! Point generation for the rose curves
//!
//! Both curves come from the rose equation `r = sin(n·θ)`, sampled once per
//! degree for 362 samples and centred on the drawing surface:
//!
//! ```text
//! r = sin(n·k) · size_factor
//! x = trunc(r · sin(k)) + width / 2
//! y = trunc(r · cos(k)) + height / 2
//! ```
//!
//! For the Maurer rose `k = i·d`, so consecutive samples jump `d` degrees
//! around the rose and are joined by straight chords. For the sine path
//! `k = i`, which traces the smooth rose itself.
//!
//! `k` is never reduced modulo 360. As `d` drifts upwards, `i·d` reaches
//! tens of thousands of degrees and the trig functions lose a few ulps of
//! precision; the resulting jitter is part of the picture.

use std::f64::consts::PI;

use super::state::CanvasState;

/// Number of samples per curve (0 to 361 inclusive)
pub const SAMPLE_COUNT: usize = 362;

/// Angle between consecutive sample indices, in degrees
pub const ANGLE_STEP: f64 = 1.0;

/// An integer point in surface coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which of the two curves to generate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveVariant {
    /// Chords jumping `d` degrees per sample
    Maurer,
    /// The underlying rose, one degree per sample
    SinePath,
}

impl CurveVariant {
    /// Angle in degrees for sample `i`
    fn angle(self, i: f64, d: f64) -> f64 {
        match self {
            CurveVariant::Maurer => i * d,
            CurveVariant::SinePath => i,
        }
    }
}

fn degrees_to_radians(angle: f64) -> f64 {
    PI * angle / 180.0
}

/// Inputs to one curve generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    pub n: f64,
    pub d: f64,
    pub size_factor: i32,
    pub width: i32,
    pub height: i32,
}

impl From<CanvasState> for CurveParams {
    fn from(canvas: CanvasState) -> Self {
        Self {
            n: canvas.animation.n,
            d: canvas.animation.d,
            size_factor: canvas.size_factor,
            width: canvas.width,
            height: canvas.height,
        }
    }
}

impl CurveParams {
    /// Compute the point for a single sample index
    pub fn point_at(&self, variant: CurveVariant, index: usize) -> Point {
        let k = variant.angle(index as f64 * ANGLE_STEP, self.d);
        let r = degrees_to_radians(self.n * k).sin() * self.size_factor as f64;

        // `as` truncates toward zero
        let x = (r * degrees_to_radians(k).sin()) as i32 + self.width / 2;
        let y = (r * degrees_to_radians(k).cos()) as i32 + self.height / 2;

        Point::new(x, y)
    }
}

/// Lazy iterator over the points of one curve
///
/// Pure function of its inputs: cloning it or calling `generate_points`
/// again restarts the same sequence.
#[derive(Clone, Debug)]
pub struct CurvePoints {
    params: CurveParams,
    variant: CurveVariant,
    index: usize,
}

impl Iterator for CurvePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= SAMPLE_COUNT {
            return None;
        }
        let point = self.params.point_at(self.variant, self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SAMPLE_COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurvePoints {}

impl std::iter::FusedIterator for CurvePoints {}

/// Generate the points of one curve
pub fn generate_points(params: CurveParams, variant: CurveVariant) -> CurvePoints {
    CurvePoints {
        params,
        variant,
        index: 0,
    }
}
