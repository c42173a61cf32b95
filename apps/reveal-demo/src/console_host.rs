//! Host that renders the reveal layout as log lines.

use fabreveal_animation::RevealCircle;
use fabreveal_graphics::{Color, Point, Rect};
use fabreveal_ui::{RevealArrangement, RevealConfig, RevealHost, RevealPart};

pub struct ConsoleHost {
    arrangement: RevealArrangement,
    tint: Color,
    fab_position: Point,
    frames_drawn: usize,
}

impl ConsoleHost {
    pub fn new(container: Rect, config: &RevealConfig, tint: Color) -> Self {
        let arrangement = RevealArrangement::arrange(container, config);
        log::info!(
            "layout: fab {:?}, content {:?}",
            arrangement.fab,
            arrangement.content
        );
        Self {
            arrangement,
            tint,
            fab_position: arrangement.fab.origin(),
            frames_drawn: 0,
        }
    }

    pub fn fab_position(&self) -> Point {
        self.fab_position
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl RevealHost for ConsoleHost {
    fn surface_bounds(&self, _part: RevealPart) -> Rect {
        self.arrangement.content
    }

    fn fab_bounds(&self) -> Rect {
        self.arrangement.fab
    }

    fn fab_tint(&self) -> Option<Color> {
        Some(self.tint)
    }

    fn set_fab_position(&mut self, position: Point) {
        self.fab_position = position;
        self.frames_drawn += 1;
        log::trace!("fab -> ({:.1}, {:.1})", position.x, position.y);
    }

    fn set_alpha(&mut self, part: RevealPart, alpha: f32) {
        log::trace!("{part:?} alpha {alpha:.2}");
    }

    fn set_visible(&mut self, part: RevealPart, visible: bool) {
        log::debug!("{part:?} {}", if visible { "shown" } else { "hidden" });
    }

    fn prepare_mask(&mut self, height: f32, color: Color) {
        log::info!("mask ready: height {height}, color {color:?}");
    }

    fn invalidate_mask(&mut self, circle: RevealCircle) {
        self.frames_drawn += 1;
        log::trace!("mask radius {:.1}", circle.radius);
    }
}
