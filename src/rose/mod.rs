//! Rose module - the curve math and animation state
//!
//! This module provides:
//! - Animation parameters `(n, d)` and their random drift
//! - Size factor and canvas snapshot
//! - Maurer rose and sine path point generation

mod curve;
mod state;

pub use curve::{generate_points, CurveParams, CurveVariant, Point};

#[cfg(test)]
pub use curve::SAMPLE_COUNT;
pub use state::{AnimationState, CanvasState, DEFAULT_D, DEFAULT_N};
