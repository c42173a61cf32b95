//! Circular mask expansion.
//!
//! The mask is a circle centered on the revealed surface. At full expansion
//! its radius equals the surface's half diagonal, which reaches every corner.

use fabreveal_graphics::{Point, Size};

use crate::animation::{AnimationSpec, Easing, Tween};

/// Smallest fraction the mask is ever drawn at.
///
/// Starting from zero would spend a frame drawing nothing at all.
pub const MIN_EXPAND_FRACTION: f32 = 0.1;
pub const MAX_EXPAND_FRACTION: f32 = 1.0;

pub const EXPAND_DURATION_MILLIS: u64 = 300;

/// Clamps into `[MIN_EXPAND_FRACTION, MAX_EXPAND_FRACTION]`; NaN maps to the minimum.
pub fn clamp_fraction(fraction: f32) -> f32 {
    fraction.max(MIN_EXPAND_FRACTION).min(MAX_EXPAND_FRACTION)
}

/// The circle to draw for one mask frame, in the mask's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealCircle {
    pub center: Point,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularReveal {
    fraction: f32,
}

impl CircularReveal {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: clamp_fraction(fraction),
        }
    }

    pub fn collapsed() -> Self {
        Self::new(MIN_EXPAND_FRACTION)
    }

    pub fn full() -> Self {
        Self::new(MAX_EXPAND_FRACTION)
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn radius(&self, size: Size) -> f32 {
        Self::radius_for(self.fraction, size.width, size.height)
    }

    pub fn circle(&self, size: Size) -> RevealCircle {
        RevealCircle {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: self.radius(size),
        }
    }

    /// Radius covering `fraction` of the distance from the center of a
    /// `width` x `height` rectangle to its corners.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not finite.
    pub fn radius_for(fraction: f32, width: f32, height: f32) -> f32 {
        assert!(
            width.is_finite() && height.is_finite(),
            "reveal surface size must be finite, got {width}x{height}"
        );
        (width / 2.0).hypot(height / 2.0) * clamp_fraction(fraction)
    }

    /// Spec used when the host does not configure the expansion.
    pub fn default_spec() -> AnimationSpec {
        AnimationSpec::tween(EXPAND_DURATION_MILLIS, Easing::AccelerateDecelerateEasing)
    }

    /// Fraction driver growing the mask from its minimum to full coverage.
    pub fn expand(spec: AnimationSpec) -> Tween<f32> {
        Tween::new(MIN_EXPAND_FRACTION, MAX_EXPAND_FRACTION, spec)
    }

    /// Fraction driver shrinking the mask back to its minimum.
    pub fn contract(spec: AnimationSpec) -> Tween<f32> {
        Tween::new(MAX_EXPAND_FRACTION, MIN_EXPAND_FRACTION, spec)
    }

    /// Where `fraction` sits between the minimum and full expansion, in [0, 1].
    pub fn progress_of(fraction: f32) -> f32 {
        let span = MAX_EXPAND_FRACTION - MIN_EXPAND_FRACTION;
        (clamp_fraction(fraction) - MIN_EXPAND_FRACTION) / span
    }
}

impl Default for CircularReveal {
    fn default() -> Self {
        Self::collapsed()
    }
}

#[cfg(test)]
#[path = "tests/circular_reveal_tests.rs"]
mod tests;
