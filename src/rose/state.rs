//! Animation and canvas state
//!
//! State is updated by value: `tick` and `resize` consume a snapshot and
//! return the next one. Whoever drives the render loop owns the current
//! snapshot, and paint always reads a consistent `(n, d, size_factor)`.

use rand::Rng;

/// Default petal multiplier
pub const DEFAULT_N: f64 = 3.0;

/// Default angular step multiplier
pub const DEFAULT_D: f64 = 47.0;

/// The two drifting curve parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Petal-count-like multiplier
    pub n: f64,
    /// Angular step multiplier (degrees per sample)
    pub d: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_N, DEFAULT_D)
    }
}

impl AnimationState {
    pub fn new(n: f64, d: f64) -> Self {
        Self { n, d }
    }

    /// Advance by explicit increments
    ///
    /// Neither parameter is clamped or wrapped; both grow for as long as
    /// the animation runs.
    pub fn advance(self, dn: f64, dd: f64) -> Self {
        Self {
            n: self.n + dn,
            d: self.d + dd,
        }
    }

    /// Advance by two independent uniform draws from [0, 1)
    pub fn tick<R: Rng>(self, rng: &mut R) -> Self {
        let dn: f64 = rng.gen();
        let dd: f64 = rng.gen();
        self.advance(dn, dd)
    }
}

/// Radius scale for a drawing surface of the given size
///
/// Integer division at both steps: `((width + height) / 2) / 3`.
pub fn size_factor(width: i32, height: i32) -> i32 {
    ((height + width) / 2) / 3
}

/// Everything paint needs, captured at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasState {
    pub animation: AnimationState,
    pub size_factor: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(AnimationState::default())
    }
}

impl CanvasState {
    /// A canvas that has not been sized yet
    ///
    /// The size factor starts at 1 until the first resize arrives.
    pub fn new(animation: AnimationState) -> Self {
        Self {
            animation,
            size_factor: 1,
            width: 0,
            height: 0,
        }
    }

    /// Record new surface dimensions and recompute the size factor
    pub fn resize(self, width: i32, height: i32) -> Self {
        Self {
            size_factor: size_factor(width, height),
            width,
            height,
            ..self
        }
    }

    /// Replace the animation parameters, keeping the geometry
    pub fn with_animation(self, animation: AnimationState) -> Self {
        Self { animation, ..self }
    }
}
