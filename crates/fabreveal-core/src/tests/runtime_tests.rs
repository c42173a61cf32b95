use super::*;
use crate::frame_clock::FrameCallbackRegistration;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn callbacks_run_once_with_frame_time() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in_callback = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| {
        seen_in_callback.borrow_mut().push(time);
    });

    assert!(runtime.needs_frame());
    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let fired = Rc::new(Cell::new(false));

    let fired_in_callback = Rc::clone(&fired);
    let registration = clock.with_frame_nanos(move |_| fired_in_callback.set(true));
    drop(registration);

    runtime.drain_frame_callbacks(1);
    assert!(!fired.get());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn registration_dropped_earlier_in_the_same_frame_skips_callback() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let fired = Rc::new(Cell::new(false));
    let later: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let later_in_callback = Rc::clone(&later);
    let _first = clock.with_frame_nanos(move |_| {
        later_in_callback.borrow_mut().take();
    });
    let fired_in_callback = Rc::clone(&fired);
    *later.borrow_mut() = Some(clock.with_frame_nanos(move |_| fired_in_callback.set(true)));

    runtime.drain_frame_callbacks(0);
    assert!(!fired.get());
    assert!(!runtime.has_frame_callbacks());

    // The skip only applies to the frame it was cancelled in.
    let fired_in_callback = Rc::clone(&fired);
    let _next = clock.with_frame_nanos(move |_| fired_in_callback.set(true));
    runtime.drain_frame_callbacks(16_000_000);
    assert!(fired.get());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let times = Rc::new(RefCell::new(Vec::new()));
    let nested = Rc::new(RefCell::new(None));

    let times_outer = Rc::clone(&times);
    let nested_slot = Rc::clone(&nested);
    let clock_inner = clock.clone();
    let _outer = clock.with_frame_nanos(move |time| {
        times_outer.borrow_mut().push(time);
        let times_inner = Rc::clone(&times_outer);
        let registration = clock_inner.with_frame_nanos(move |time| {
            times_inner.borrow_mut().push(time);
        });
        nested_slot.borrow_mut().replace(registration);
    });

    runtime.drain_frame_callbacks(10);
    assert_eq!(times.borrow().as_slice(), &[10]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(20);
    assert_eq!(times.borrow().as_slice(), &[10, 20]);
}

#[test]
fn scheduler_is_asked_once_per_pending_frame() {
    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let clock = runtime.frame_clock();

    let _a = clock.with_frame_nanos(|_| {});
    let _b = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 1);

    runtime.drain_frame_callbacks(1);
    let _c = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn registration_after_runtime_drop_is_inactive() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(!clock.is_running());
    let registration = clock.with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert_eq!(registration.id(), None);
}

#[test]
fn explicit_cancel_removes_callback() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let registration = clock.with_frame_nanos(|_| panic!("cancelled callback ran"));
    assert!(registration.id().is_some());

    registration.cancel();
    assert!(!runtime.has_frame_callbacks());
    assert!(!runtime.needs_frame());
    runtime.drain_frame_callbacks(1);
}

#[test]
fn clock_reports_last_drained_frame() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    assert_eq!(clock.last_frame_nanos(), None);

    runtime.drain_frame_callbacks(5_000);
    runtime.drain_frame_callbacks(21_000);
    assert_eq!(clock.last_frame_nanos(), Some(21_000));
    assert_eq!(runtime.frames_drained(), 2);
}

#[test]
fn frame_millis_converts_from_nanos() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let millis = Rc::new(Cell::new(0));

    let millis_in_callback = Rc::clone(&millis);
    let _registration = clock.with_frame_millis(move |value| millis_in_callback.set(value));
    runtime.drain_frame_callbacks(48_500_000);

    assert_eq!(millis.get(), 48);
}
