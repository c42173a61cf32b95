use super::*;

use fabreveal_core::Runtime;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(runtime: &Runtime, start: u64, max_frames: usize) -> u64 {
    let mut frame_time = start;
    for _ in 0..max_frames {
        if !runtime.has_frame_callbacks() {
            break;
        }
        runtime.drain_frame_callbacks(frame_time);
        frame_time += FRAME_NANOS;
    }
    frame_time
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::AccelerateDecelerateEasing,
        Easing::overshoot(),
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn accelerate_decelerate_is_symmetric_around_midpoint() {
    let easing = Easing::AccelerateDecelerateEasing;
    assert!((easing.transform(0.5) - 0.5).abs() < 1e-6);
    let early = easing.transform(0.25);
    let late = easing.transform(0.75);
    assert!(early < 0.25, "should start slow, got {early}");
    assert!((early + late - 1.0).abs() < 1e-5);
}

#[test]
fn overshoot_passes_the_target() {
    let easing = Easing::overshoot();
    let peak = (1..100)
        .map(|step| easing.transform(step as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "overshoot should exceed 1.0, peaked at {peak}");
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn total_duration_includes_delay() {
    let spec = AnimationSpec::linear(500).with_delay(150);
    assert_eq!(spec.total_duration_nanos(), 650_000_000);
}

#[test]
fn tween_value_at_hits_endpoints_exactly() {
    let tween = Tween::new(0.1f32, 1.0, AnimationSpec::default());
    assert_eq!(tween.value_at(0.0), 0.1);
    assert_eq!(tween.value_at(1.0), 1.0);
    assert_eq!(tween.value_at(1.5), 1.0);
    assert_eq!(tween.value_at(-1.0), 0.1);
}

#[test]
fn point_lerp_interpolates_both_axes() {
    let from = Point::new(0.0, 10.0);
    let to = Point::new(10.0, 30.0);
    assert_eq!(from.lerp(&to, 0.5), Point::new(5.0, 20.0));
}

#[test]
fn tween_reports_values_then_ends() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let samples = Rc::new(RefCell::new(Vec::new()));
    let ended = Rc::new(Cell::new(0));

    let samples_in_update = Rc::clone(&samples);
    let ended_in_callback = Rc::clone(&ended);
    let handle = Tween::new(0.0f32, 1.0, AnimationSpec::linear(100)).start(
        &clock,
        move |value| samples_in_update.borrow_mut().push(value),
        move || ended_in_callback.set(ended_in_callback.get() + 1),
    );

    run_frames(&runtime, 0, 32);

    let samples = samples.borrow();
    assert_eq!(samples.first().copied(), Some(0.0));
    assert_eq!(samples.last().copied(), Some(1.0));
    assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(samples.iter().any(|value| *value > 0.0 && *value < 1.0));
    assert_eq!(ended.get(), 1);
    assert!(handle.is_finished());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn tween_waits_for_delay() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let first_update = Rc::new(Cell::new(None::<u64>));
    let frame = Rc::new(Cell::new(0u64));

    let first_in_update = Rc::clone(&first_update);
    let frame_in_update = Rc::clone(&frame);
    let _handle = Tween::new(0.0f32, 1.0, AnimationSpec::linear(50).with_delay(100)).start(
        &clock,
        move |_| {
            if first_in_update.get().is_none() {
                first_in_update.set(Some(frame_in_update.get()));
            }
        },
        || {},
    );

    let mut time = 0;
    while runtime.has_frame_callbacks() {
        frame.set(time);
        runtime.drain_frame_callbacks(time);
        time += 10_000_000;
    }

    assert_eq!(first_update.get(), Some(100_000_000));
}

#[test]
fn dropping_handle_stops_tween() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let updates = Rc::new(Cell::new(0));
    let ended = Rc::new(Cell::new(false));

    let updates_in_callback = Rc::clone(&updates);
    let ended_in_callback = Rc::clone(&ended);
    let handle = Tween::new(0.0f32, 1.0, AnimationSpec::linear(100)).start(
        &clock,
        move |_| updates_in_callback.set(updates_in_callback.get() + 1),
        move || ended_in_callback.set(true),
    );

    runtime.drain_frame_callbacks(0);
    drop(handle);
    run_frames(&runtime, FRAME_NANOS, 32);

    assert_eq!(updates.get(), 1);
    assert!(!ended.get());
}
