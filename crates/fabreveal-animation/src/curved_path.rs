//! Curved motion path for the floating action button.
//!
//! The button never travels in a straight line: the control points are pushed
//! out to 1.5x the larger x coordinate and 2.25x the larger y coordinate, so
//! the button swoops in an exaggerated arc between its endpoints.

use fabreveal_graphics::Point;

/// Horizontal stretch applied to the first control point.
pub const CONTROL0_X_SCALE: f32 = 1.5;
/// Vertical stretch applied to the second control point.
pub const CONTROL1_Y_SCALE: f32 = 2.25;

/// A point on a curved path together with the controls leading into it.
///
/// Anchors carry their own position as both controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub position: Point,
    pub control0: Point,
    pub control1: Point,
}

impl CurvePoint {
    pub const fn anchor(position: Point) -> Self {
        Self {
            position,
            control0: position,
            control1: position,
        }
    }

    pub const fn with_controls(position: Point, control0: Point, control1: Point) -> Self {
        Self {
            position,
            control0,
            control1,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Two-point cubic Bezier path: a plain start anchor and an end point
/// carrying both control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvedPath {
    start: CurvePoint,
    end: CurvePoint,
}

impl CurvedPath {
    pub fn build(from: Point, to: Point) -> Self {
        let control0 = Point::new(from.x.max(to.x) * CONTROL0_X_SCALE, (to.y + from.y) / 2.0);
        let control1 = Point::new((to.x + from.x) / 2.0, from.y.max(to.y) * CONTROL1_Y_SCALE);
        Self {
            start: CurvePoint::anchor(from),
            end: CurvePoint::with_controls(to, control0, control1),
        }
    }

    pub fn start(&self) -> CurvePoint {
        self.start
    }

    pub fn end(&self) -> CurvePoint {
        self.end
    }

    pub fn points(&self) -> [CurvePoint; 2] {
        [self.start, self.end]
    }

    pub fn evaluate(&self, t: f32) -> Point {
        evaluate(t, &self.start, &self.end)
    }

    /// Path back from this path's end to its start.
    ///
    /// The controls are rebuilt from the swapped endpoints, so the return
    /// trip is generally a different arc rather than this one played backwards.
    pub fn reversed(&self) -> Self {
        Self::build(self.end.position, self.start.position)
    }
}

/// Cubic Bezier interpolation between `start` and `end`, using the controls
/// stored on `end`.
///
/// `t` is not clamped; values outside [0, 1] extrapolate along the polynomial.
pub fn evaluate(t: f32, start: &CurvePoint, end: &CurvePoint) -> Point {
    let one_minus_t = 1.0 - t;
    let b0 = one_minus_t * one_minus_t * one_minus_t;
    let b1 = 3.0 * one_minus_t * one_minus_t * t;
    let b2 = 3.0 * one_minus_t * t * t;
    let b3 = t * t * t;

    let x = b0 * start.position.x + b1 * end.control0.x + b2 * end.control1.x + b3 * end.position.x;
    let y = b0 * start.position.y + b1 * end.control0.y + b2 * end.control1.y + b3 * end.position.y;
    Point::new(x, y)
}

#[cfg(test)]
#[path = "tests/curved_path_tests.rs"]
mod tests;
