//! Time-based tweens driven by a [`FrameClock`].
//!
//! Easing curves are plain functions of progress: there is no shared
//! interpolator object, so one [`Easing`] value can drive any number of
//! tweens at once.

use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use fabreveal_core::{FrameCallbackRegistration, FrameClock, NANOS_PER_MILLI};
use fabreveal_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            Lerp::lerp(&self.x, &target.x, fraction),
            Lerp::lerp(&self.y, &target.y, fraction),
        )
    }
}

/// Tension used by [`Easing::Overshoot`] when none is given.
pub const DEFAULT_OVERSHOOT_TENSION: f32 = 2.0;

/// Easing curves mapping linear progress in [0, 1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
    /// Cosine based: slow start, fast middle, slow end.
    AccelerateDecelerateEasing,
    /// Runs past the target and settles back onto it.
    Overshoot { tension: f32 },
}

impl Easing {
    pub const fn overshoot() -> Self {
        Easing::Overshoot {
            tension: DEFAULT_OVERSHOOT_TENSION,
        }
    }

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::AccelerateDecelerateEasing => accelerate_decelerate(fraction),
            Easing::Overshoot { tension } => overshoot(*tension, fraction),
        }
    }
}

fn accelerate_decelerate(fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }
    ((fraction + 1.0) * PI).cos() / 2.0 + 0.5
}

fn overshoot(tension: f32, fraction: f32) -> f32 {
    let t = fraction - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t whose x matches the input fraction,
    // kept inside [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn total_duration_nanos(&self) -> u64 {
        (self.delay_millis + self.duration_millis) * NANOS_PER_MILLI
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// A one-shot animation of a value from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
}

impl<T: Lerp + Clone + 'static> Tween<T> {
    pub fn new(from: T, to: T, spec: AnimationSpec) -> Self {
        Self { from, to, spec }
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Value after easing the given linear progress.
    ///
    /// Progress at or past 1.0 lands exactly on `to`.
    pub fn value_at(&self, linear_progress: f32) -> T {
        if linear_progress >= 1.0 {
            return self.to.clone();
        }
        let progress = self.spec.easing.transform(linear_progress.max(0.0));
        self.from.lerp(&self.to, progress)
    }

    /// Starts driving the tween on `clock`.
    ///
    /// `on_update` receives a value on every frame once the delay has passed,
    /// starting with `from` on the first frame and ending with `to`.
    /// `on_end` runs right after the final update. The animation stops
    /// silently if the returned handle is dropped first.
    pub fn start(
        self,
        clock: &FrameClock,
        mut on_update: impl FnMut(T) + 'static,
        on_end: impl FnOnce() + 'static,
    ) -> TweenHandle {
        let spec = self.spec;
        let sample = move |linear_progress: f32| on_update(self.value_at(linear_progress));
        let state = TweenState {
            clock: clock.clone(),
            spec,
            start_time_nanos: None,
            registration: None,
            sample: Some(Box::new(sample)),
            on_end: Some(Box::new(on_end)),
            finished: false,
        };
        let handle = TweenHandle {
            inner: Rc::new(RefCell::new(state)),
        };
        TweenHandle::schedule_frame(&handle.inner);
        handle
    }
}

struct TweenState {
    clock: FrameClock,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    sample: Option<Box<dyn FnMut(f32)>>,
    on_end: Option<Box<dyn FnOnce()>>,
    finished: bool,
}

/// Keeps a running [`Tween`] alive.
pub struct TweenHandle {
    inner: Rc<RefCell<TweenState>>,
}

impl TweenHandle {
    pub fn is_finished(&self) -> bool {
        self.inner.borrow().finished
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    fn schedule_frame(this: &Rc<RefCell<TweenState>>) {
        let clock = {
            let state = this.borrow();
            if state.registration.is_some() || state.finished {
                return;
            }
            state.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TweenState>>, frame_time_nanos: u64) {
        let linear_progress = {
            let mut state = this.borrow_mut();
            state.registration = None;

            let start_time = *state.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = state.spec.delay_millis * NANOS_PER_MILLI;

            if elapsed_nanos < delay_nanos {
                None
            } else {
                let duration_nanos = (state.spec.duration_millis * NANOS_PER_MILLI).max(1);
                let animation_elapsed = elapsed_nanos - delay_nanos;
                Some((animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0))
            }
        };

        let Some(linear_progress) = linear_progress else {
            Self::schedule_frame(this);
            return;
        };

        // Sample without holding the borrow; the update may inspect the handle.
        let sample = this.borrow_mut().sample.take();
        if let Some(mut sample) = sample {
            sample(linear_progress);
            this.borrow_mut().sample = Some(sample);
        }

        if linear_progress >= 1.0 {
            let on_end = {
                let mut state = this.borrow_mut();
                state.finished = true;
                state.sample = None;
                state.on_end.take()
            };
            log::trace!("tween finished at {frame_time_nanos}ns");
            if let Some(on_end) = on_end {
                on_end();
            }
        } else {
            Self::schedule_frame(this);
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
