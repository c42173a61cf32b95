//! Seam between the controller and the host's view system.

use fabreveal_animation::RevealCircle;
use fabreveal_graphics::{Color, Point, Rect};

use crate::state_machine::RevealState;

/// Elements of the layout the controller shows, hides and fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPart {
    Main,
    Secondary,
    Fab,
    /// Circular mask drawn over the content area during the reveal.
    Mask,
}

/// Implemented by the widget embedding the reveal layout.
///
/// Every call happens on the thread draining the frame clock.
pub trait RevealHost {
    /// Laid-out bounds of a content surface.
    fn surface_bounds(&self, part: RevealPart) -> Rect;

    /// Laid-out bounds of the button, ignoring any position the controller set.
    fn fab_bounds(&self) -> Rect;

    fn fab_tint(&self) -> Option<Color> {
        None
    }

    fn set_fab_position(&mut self, position: Point);

    fn set_alpha(&mut self, part: RevealPart, alpha: f32);

    fn set_visible(&mut self, part: RevealPart, visible: bool);

    /// Sizes and colors the mask before it becomes visible.
    fn prepare_mask(&mut self, height: f32, color: Color);

    /// Redraw request for the mask with a new circle.
    fn invalidate_mask(&mut self, circle: RevealCircle);
}

/// Receives a callback whenever a transition settles.
pub trait RevealListener {
    fn on_main_visible(&mut self) {}

    fn on_secondary_visible(&mut self) {}
}

impl<F: FnMut(RevealState)> RevealListener for F {
    fn on_main_visible(&mut self) {
        self(RevealState::MainVisible)
    }

    fn on_secondary_visible(&mut self) {
        self(RevealState::SecondaryVisible)
    }
}
