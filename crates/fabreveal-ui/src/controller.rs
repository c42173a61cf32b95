//! Runs the reveal transitions on a host.
//!
//! Every stage is a single [`Tween`] on the host's frame clock. Its end
//! callback feeds [`RevealEvent::StageFinished`] back into the transition
//! table, which picks the next stage. Requests that arrive while a stage is
//! running are dropped, never queued.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use fabreveal_animation::{CircularReveal, CurvedPath, Tween, TweenHandle};
use fabreveal_core::FrameClock;
use fabreveal_graphics::{Point, Size};

use crate::config::{RevealConfig, DEFAULT_MASK_COLOR};
use crate::host::{RevealHost, RevealListener, RevealPart};
use crate::state_machine::{next_step, Phase, RevealEvent, RevealState, Step, TransitionStage};

struct ControllerInner<H> {
    host: H,
    clock: FrameClock,
    config: RevealConfig,
    phase: Phase,
    animation: Option<TweenHandle>,
    listener: Option<Box<dyn RevealListener>>,
    /// Bumped whenever the listener is replaced or cleared.
    listener_generation: u64,
}

impl<H: RevealHost> ControllerInner<H> {
    fn fab_rest_position(&self) -> Point {
        self.host.fab_bounds().origin()
    }

    /// Top-left of the button when it sits centered on the main surface.
    fn fab_center_position(&self) -> Point {
        let main = self.host.surface_bounds(RevealPart::Main);
        let fab = self.host.fab_bounds();
        Point::new(
            main.x + main.width / 2.0 - fab.width / 2.0,
            main.y + main.height / 2.0 - fab.height / 2.0,
        )
    }

    fn mask_size(&self) -> Size {
        self.host.surface_bounds(RevealPart::Main).size()
    }

    fn apply_initial_state(&mut self) {
        self.host.set_visible(RevealPart::Main, true);
        self.host.set_alpha(RevealPart::Main, 1.0);
        self.host.set_visible(RevealPart::Secondary, false);
        self.host.set_alpha(RevealPart::Secondary, 1.0);
        self.host.set_visible(RevealPart::Mask, false);
        self.host.set_visible(RevealPart::Fab, true);
    }

    fn settle(&mut self, state: RevealState) {
        match state {
            RevealState::SecondaryVisible => {
                self.host.set_visible(RevealPart::Main, false);
                self.host.set_alpha(RevealPart::Main, 1.0);
                self.host.set_visible(RevealPart::Secondary, true);
                self.host.set_visible(RevealPart::Mask, true);
            }
            RevealState::MainVisible => {
                self.host.set_visible(RevealPart::Main, true);
                self.host.set_visible(RevealPart::Secondary, false);
                self.host.set_alpha(RevealPart::Secondary, 1.0);
                self.host.set_visible(RevealPart::Mask, false);
            }
        }
    }
}

/// Drives a [`RevealHost`] between its main and secondary surfaces.
///
/// Cloning yields another handle to the same controller.
pub struct RevealController<H: RevealHost + 'static> {
    inner: Rc<RefCell<ControllerInner<H>>>,
}

impl<H: RevealHost + 'static> RevealController<H> {
    pub(crate) fn new(host: H, clock: FrameClock, config: RevealConfig) -> Self {
        let mut inner = ControllerInner {
            host,
            clock,
            config,
            phase: Phase::default(),
            animation: None,
            listener: None,
            listener_generation: 0,
        };
        inner.apply_initial_state();
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Settled state, or the state the running transition started from.
    pub fn state(&self) -> RevealState {
        self.inner.borrow().phase.state()
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    pub fn stage(&self) -> Option<TransitionStage> {
        self.inner.borrow().phase.stage()
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.borrow().phase.is_transitioning()
    }

    pub fn config(&self) -> RevealConfig {
        self.inner.borrow().config
    }

    pub fn host(&self) -> Ref<'_, H> {
        Ref::map(self.inner.borrow(), |inner| &inner.host)
    }

    pub fn host_mut(&self) -> RefMut<'_, H> {
        RefMut::map(self.inner.borrow_mut(), |inner| &mut inner.host)
    }

    pub fn set_listener(&self, listener: impl RevealListener + 'static) {
        let mut inner = self.inner.borrow_mut();
        inner.listener = Some(Box::new(listener));
        inner.listener_generation += 1;
    }

    pub fn clear_listener(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.listener = None;
        inner.listener_generation += 1;
    }

    /// Starts revealing the secondary surface.
    ///
    /// Returns `false` without side effects unless the main surface is
    /// settled on screen.
    pub fn request_reveal(&self) -> bool {
        Self::dispatch(&self.inner, RevealEvent::RevealRequested)
    }

    /// Starts restoring the main surface.
    ///
    /// Returns `false` without side effects unless the secondary surface is
    /// settled on screen.
    pub fn request_restore_main(&self) -> bool {
        Self::dispatch(&self.inner, RevealEvent::RestoreRequested)
    }

    /// Handle that does not keep the controller alive, for listeners that
    /// need to call back into it.
    pub fn downgrade(&self) -> WeakRevealController<H> {
        WeakRevealController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn dispatch(this: &Rc<RefCell<ControllerInner<H>>>, event: RevealEvent) -> bool {
        let phase = this.borrow().phase;
        let Some((next_phase, step)) = next_step(phase, event) else {
            if event != RevealEvent::StageFinished {
                log::debug!("ignoring {event:?} while {phase:?}");
            }
            return false;
        };
        log::debug!("{phase:?} -> {next_phase:?}: {step:?}");
        Self::run_step(this, next_phase, step);
        true
    }

    fn run_step(this: &Rc<RefCell<ControllerInner<H>>>, phase: Phase, step: Step) {
        let weak = Rc::downgrade(this);
        let settled = {
            let mut guard = this.borrow_mut();
            let inner = &mut *guard;
            inner.phase = phase;
            match step {
                Step::MoveFabToCenter => {
                    let path =
                        CurvedPath::build(inner.fab_rest_position(), inner.fab_center_position());
                    let animation = Self::move_fab(inner, weak, path, Some(RevealPart::Main));
                    inner.animation = Some(animation);
                    None
                }
                Step::ExpandMask => {
                    inner.host.set_visible(RevealPart::Fab, false);
                    let size = inner.mask_size();
                    let color = inner
                        .config
                        .mask_color
                        .or_else(|| inner.host.fab_tint())
                        .unwrap_or(DEFAULT_MASK_COLOR);
                    inner.host.prepare_mask(size.height, color);
                    inner.host.set_visible(RevealPart::Mask, true);
                    let tween = CircularReveal::expand(inner.config.expand);
                    let animation = Self::animate_mask(inner, weak, tween, size, None);
                    inner.animation = Some(animation);
                    None
                }
                Step::ContractMask => {
                    let size = inner.mask_size();
                    let tween = CircularReveal::contract(inner.config.contract);
                    let animation =
                        Self::animate_mask(inner, weak, tween, size, Some(RevealPart::Secondary));
                    inner.animation = Some(animation);
                    None
                }
                Step::MoveFabToOrigin => {
                    inner.host.set_visible(RevealPart::Fab, true);
                    inner.host.set_visible(RevealPart::Mask, false);
                    let path =
                        CurvedPath::build(inner.fab_center_position(), inner.fab_rest_position());
                    let animation = Self::move_fab(inner, weak, path, None);
                    inner.animation = Some(animation);
                    None
                }
                Step::Settle(state) => {
                    inner.animation = None;
                    inner.settle(state);
                    Some(state)
                }
            }
        };
        if let Some(state) = settled {
            Self::notify(this, state);
        }
    }

    /// Moves the button along `path`, fading `fading` out on the same progress.
    fn move_fab(
        inner: &ControllerInner<H>,
        weak: Weak<RefCell<ControllerInner<H>>>,
        path: CurvedPath,
        fading: Option<RevealPart>,
    ) -> TweenHandle {
        let progress = Tween::new(0.0f32, 1.0, inner.config.motion);
        let weak_end = weak.clone();
        progress.start(
            &inner.clock,
            move |t| {
                let Some(strong) = weak.upgrade() else {
                    return;
                };
                let mut inner = strong.borrow_mut();
                let position = path.evaluate(t);
                log::trace!("fab at ({:.1}, {:.1})", position.x, position.y);
                inner.host.set_fab_position(position);
                if let Some(part) = fading {
                    inner.host.set_alpha(part, 1.0 - t);
                }
            },
            move || Self::finish_stage(&weak_end),
        )
    }

    /// Drives the mask with `tween`, fading `fading` out as the mask shrinks.
    fn animate_mask(
        inner: &ControllerInner<H>,
        weak: Weak<RefCell<ControllerInner<H>>>,
        tween: Tween<f32>,
        size: Size,
        fading: Option<RevealPart>,
    ) -> TweenHandle {
        let weak_end = weak.clone();
        tween.start(
            &inner.clock,
            move |fraction| {
                let Some(strong) = weak.upgrade() else {
                    return;
                };
                let mut inner = strong.borrow_mut();
                let circle = CircularReveal::new(fraction).circle(size);
                log::trace!("mask radius {:.1}", circle.radius);
                inner.host.invalidate_mask(circle);
                if let Some(part) = fading {
                    inner.host.set_alpha(part, CircularReveal::progress_of(fraction));
                }
            },
            move || Self::finish_stage(&weak_end),
        )
    }

    fn finish_stage(weak: &Weak<RefCell<ControllerInner<H>>>) {
        if let Some(strong) = weak.upgrade() {
            Self::dispatch(&strong, RevealEvent::StageFinished);
        }
    }

    /// Calls the listener with no borrow held so it may re-enter the controller.
    fn notify(this: &Rc<RefCell<ControllerInner<H>>>, state: RevealState) {
        let (listener, generation) = {
            let mut inner = this.borrow_mut();
            (inner.listener.take(), inner.listener_generation)
        };
        let Some(mut listener) = listener else {
            return;
        };
        match state {
            RevealState::MainVisible => listener.on_main_visible(),
            RevealState::SecondaryVisible => listener.on_secondary_visible(),
        }
        // Only put it back if the callback did not install or clear one.
        let mut inner = this.borrow_mut();
        if inner.listener_generation == generation {
            inner.listener = Some(listener);
        }
    }
}

impl<H: RevealHost + 'static> Clone for RevealController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct WeakRevealController<H: RevealHost + 'static> {
    inner: Weak<RefCell<ControllerInner<H>>>,
}

impl<H: RevealHost + 'static> WeakRevealController<H> {
    pub fn upgrade(&self) -> Option<RevealController<H>> {
        self.inner.upgrade().map(|inner| RevealController { inner })
    }
}

impl<H: RevealHost + 'static> Clone for WeakRevealController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
