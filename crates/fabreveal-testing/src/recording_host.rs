//! A [`RevealHost`] that keeps every call the controller makes.

use fabreveal_animation::RevealCircle;
use fabreveal_graphics::{Color, Point, Rect};
use fabreveal_ui::{RevealArrangement, RevealConfig, RevealHost, RevealPart};

/// One call received from the controller, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCall {
    FabMoved(Point),
    Alpha(RevealPart, f32),
    Visible(RevealPart, bool),
    MaskPrepared { height: f32, color: Color },
    MaskInvalidated(RevealCircle),
}

fn slot(part: RevealPart) -> usize {
    match part {
        RevealPart::Main => 0,
        RevealPart::Secondary => 1,
        RevealPart::Fab => 2,
        RevealPart::Mask => 3,
    }
}

/// Headless host with fixed geometry.
///
/// Parts start visible and opaque until the controller says otherwise.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    content: Rect,
    fab: Rect,
    tint: Option<Color>,
    fab_position: Point,
    alpha: [f32; 4],
    visible: [bool; 4],
    calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Both content surfaces share `content`; the button rests at `fab`.
    pub fn new(content: Rect, fab: Rect) -> Self {
        Self {
            content,
            fab,
            tint: None,
            fab_position: fab.origin(),
            alpha: [1.0; 4],
            visible: [true; 4],
            calls: Vec::new(),
        }
    }

    /// Geometry a reveal layout of `container` would produce under `config`.
    pub fn from_arrangement(container: Rect, config: &RevealConfig) -> Self {
        let arrangement = RevealArrangement::arrange(container, config);
        Self::new(arrangement.content, arrangement.fab)
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Simulates a relayout of the button between transitions.
    pub fn move_fab_bounds(&mut self, fab: Rect) {
        self.fab = fab;
        self.fab_position = fab.origin();
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Where the controller last put the button.
    pub fn fab_position(&self) -> Point {
        self.fab_position
    }

    pub fn alpha(&self, part: RevealPart) -> f32 {
        self.alpha[slot(part)]
    }

    pub fn is_visible(&self, part: RevealPart) -> bool {
        self.visible[slot(part)]
    }

    pub fn fab_trail(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::FabMoved(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn alpha_history(&self, part: RevealPart) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Alpha(target, alpha) if *target == part => Some(*alpha),
                _ => None,
            })
            .collect()
    }

    pub fn mask_circles(&self) -> Vec<RevealCircle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::MaskInvalidated(circle) => Some(*circle),
                _ => None,
            })
            .collect()
    }

    pub fn mask_radii(&self) -> Vec<f32> {
        self.mask_circles()
            .into_iter()
            .map(|circle| circle.radius)
            .collect()
    }

    /// Height and color of the most recent mask preparation.
    pub fn prepared_mask(&self) -> Option<(f32, Color)> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::MaskPrepared { height, color } => Some((*height, *color)),
            _ => None,
        })
    }

    /// Index of the first call equal to `call`.
    pub fn position_of(&self, call: HostCall) -> Option<usize> {
        self.calls.iter().position(|recorded| *recorded == call)
    }
}

impl RevealHost for RecordingHost {
    fn surface_bounds(&self, _part: RevealPart) -> Rect {
        self.content
    }

    fn fab_bounds(&self) -> Rect {
        self.fab
    }

    fn fab_tint(&self) -> Option<Color> {
        self.tint
    }

    fn set_fab_position(&mut self, position: Point) {
        self.fab_position = position;
        self.calls.push(HostCall::FabMoved(position));
    }

    fn set_alpha(&mut self, part: RevealPart, alpha: f32) {
        self.alpha[slot(part)] = alpha;
        self.calls.push(HostCall::Alpha(part, alpha));
    }

    fn set_visible(&mut self, part: RevealPart, visible: bool) {
        self.visible[slot(part)] = visible;
        self.calls.push(HostCall::Visible(part, visible));
    }

    fn prepare_mask(&mut self, height: f32, color: Color) {
        log::trace!("mask prepared: height {height}, color {color:?}");
        self.calls.push(HostCall::MaskPrepared { height, color });
    }

    fn invalidate_mask(&mut self, circle: RevealCircle) {
        self.calls.push(HostCall::MaskInvalidated(circle));
    }
}
