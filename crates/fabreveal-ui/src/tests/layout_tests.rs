use super::*;

use fabreveal_core::Runtime;
use fabreveal_graphics::{Color, Point, Rect};
use fabreveal_animation::RevealCircle;

use crate::host::RevealPart;

struct NullHost;

impl RevealHost for NullHost {
    fn surface_bounds(&self, _part: RevealPart) -> Rect {
        Rect::new(0.0, 48.0, 360.0, 592.0)
    }

    fn fab_bounds(&self) -> Rect {
        Rect::new(296.0, 20.0, 48.0, 48.0)
    }

    fn set_fab_position(&mut self, _position: Point) {}

    fn set_alpha(&mut self, _part: RevealPart, _alpha: f32) {}

    fn set_visible(&mut self, _part: RevealPart, _visible: bool) {}

    fn prepare_mask(&mut self, _height: f32, _color: Color) {}

    fn invalidate_mask(&mut self, _circle: RevealCircle) {}
}

fn full_builder() -> RevealLayoutBuilder {
    let mut builder = RevealLayoutBuilder::default();
    builder.add_child(ChildKind::FloatingActionButton).unwrap();
    builder.add_child(ChildKind::Content).unwrap();
    builder.add_child(ChildKind::Content).unwrap();
    builder
}

#[test]
fn children_fill_slots_in_order() {
    let mut builder = RevealLayoutBuilder::default();
    assert!(!builder.has_mask());
    assert_eq!(builder.add_child(ChildKind::Content), Ok(ChildSlot::Main));
    assert!(builder.has_mask());
    assert_eq!(
        builder.add_child(ChildKind::FloatingActionButton),
        Ok(ChildSlot::Fab)
    );
    assert_eq!(builder.add_child(ChildKind::Content), Ok(ChildSlot::Secondary));
    assert!(builder.is_ready());
}

#[test]
fn second_fab_is_rejected() {
    let mut builder = RevealLayoutBuilder::default();
    builder.add_child(ChildKind::FloatingActionButton).unwrap();
    assert_eq!(
        builder.add_child(ChildKind::FloatingActionButton),
        Err(RevealError::DuplicateFab)
    );
}

#[test]
fn third_content_is_rejected() {
    let mut builder = full_builder();
    assert_eq!(
        builder.add_child(ChildKind::Content),
        Err(RevealError::TooManyContents { max: 2 })
    );
    assert!(builder.is_ready());
}

#[test]
fn build_requires_fab() {
    let mut builder = RevealLayoutBuilder::default();
    builder.add_child(ChildKind::Content).unwrap();
    builder.add_child(ChildKind::Content).unwrap();
    let runtime = Runtime::default();
    let result = builder.build(NullHost, runtime.frame_clock());
    assert!(matches!(result, Err(RevealError::MissingFab)));
}

#[test]
fn build_requires_both_contents() {
    let mut builder = RevealLayoutBuilder::default();
    builder.add_child(ChildKind::FloatingActionButton).unwrap();
    builder.add_child(ChildKind::Content).unwrap();
    let runtime = Runtime::default();
    let result = builder.build(NullHost, runtime.frame_clock());
    assert!(matches!(
        result,
        Err(RevealError::MissingContent {
            found: 1,
            required: 2
        })
    ));
}

#[test]
fn build_starts_on_main_surface() {
    let runtime = Runtime::default();
    let controller = full_builder()
        .build(NullHost, runtime.frame_clock())
        .unwrap();
    assert_eq!(controller.state(), crate::RevealState::MainVisible);
    assert!(!controller.is_transitioning());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn arrangement_pins_fab_to_top_end() {
    let container = Rect::new(0.0, 0.0, 360.0, 640.0);
    let arrangement = RevealArrangement::arrange(container, &RevealConfig::default());
    assert_eq!(arrangement.fab, Rect::new(296.0, 20.0, 48.0, 48.0));
    assert_eq!(arrangement.content, Rect::new(0.0, 48.0, 360.0, 592.0));
    assert_eq!(arrangement.mask, arrangement.content);
}

#[test]
fn arrangement_scales_with_density() {
    let container = Rect::new(10.0, 10.0, 1080.0, 1920.0);
    let config = RevealConfig::default().with_density(2.0);
    let arrangement = RevealArrangement::arrange(container, &config);
    assert_eq!(arrangement.fab, Rect::new(10.0 + 1080.0 - 32.0 - 96.0, 50.0, 96.0, 96.0));
    assert_eq!(arrangement.content, Rect::new(10.0, 106.0, 1080.0, 1824.0));
}

#[test]
fn arrangement_never_goes_negative() {
    let container = Rect::new(0.0, 0.0, 100.0, 20.0);
    let arrangement = RevealArrangement::arrange(container, &RevealConfig::default());
    assert_eq!(arrangement.content.height, 0.0);
}
