//! Child validation and placement for the reveal layout.

use fabreveal_core::FrameClock;
use fabreveal_graphics::Rect;

use crate::config::RevealConfig;
use crate::controller::RevealController;
use crate::error::RevealError;
use crate::host::RevealHost;

/// The layout swaps between exactly this many content surfaces.
pub const MAX_CONTENT_CHILDREN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKind {
    FloatingActionButton,
    Content,
}

/// Role assigned to an accepted child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildSlot {
    Fab,
    Main,
    Secondary,
}

/// Collects the host's children and rejects configurations the controller
/// cannot drive.
#[derive(Debug, Clone, Default)]
pub struct RevealLayoutBuilder {
    config: RevealConfig,
    has_fab: bool,
    content_count: usize,
}

impl RevealLayoutBuilder {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            has_fab: false,
            content_count: 0,
        }
    }

    pub fn add_child(&mut self, kind: ChildKind) -> Result<ChildSlot, RevealError> {
        match kind {
            ChildKind::FloatingActionButton => {
                if self.has_fab {
                    return Err(RevealError::DuplicateFab);
                }
                self.has_fab = true;
                Ok(ChildSlot::Fab)
            }
            ChildKind::Content => {
                if self.content_count >= MAX_CONTENT_CHILDREN {
                    return Err(RevealError::TooManyContents {
                        max: MAX_CONTENT_CHILDREN,
                    });
                }
                self.content_count += 1;
                if self.content_count == 1 {
                    log::debug!("first content child added, allocating reveal mask");
                    Ok(ChildSlot::Main)
                } else {
                    Ok(ChildSlot::Secondary)
                }
            }
        }
    }

    /// The mask is allocated together with the first content child.
    pub fn has_mask(&self) -> bool {
        self.content_count > 0
    }

    pub fn is_ready(&self) -> bool {
        self.has_fab && self.content_count == MAX_CONTENT_CHILDREN
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Hands `host` to a controller in its initial state: main surface and
    /// button visible, secondary surface and mask hidden.
    pub fn build<H: RevealHost + 'static>(
        self,
        host: H,
        clock: FrameClock,
    ) -> Result<RevealController<H>, RevealError> {
        if !self.has_fab {
            return Err(RevealError::MissingFab);
        }
        if self.content_count < MAX_CONTENT_CHILDREN {
            return Err(RevealError::MissingContent {
                found: self.content_count,
                required: MAX_CONTENT_CHILDREN,
            });
        }
        Ok(RevealController::new(host, clock, self.config))
    }
}

/// Where the layout places its children inside its bounds.
///
/// The button is pinned to the top-end corner; the content surfaces and the
/// mask sit below a band one button tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealArrangement {
    pub fab: Rect,
    pub content: Rect,
    pub mask: Rect,
}

impl RevealArrangement {
    pub fn arrange(container: Rect, config: &RevealConfig) -> Self {
        let fab_size = config.fab_size_px();
        let margin_top = config.fab_margin_top.to_px(config.density);
        let margin_end = config.fab_margin_end.to_px(config.density);

        let fab = Rect::new(
            container.right() - margin_end - fab_size,
            container.y + margin_top,
            fab_size,
            fab_size,
        );
        let content = Rect::new(
            container.x,
            container.y + fab_size,
            container.width,
            (container.height - fab_size).max(0.0),
        );
        Self {
            fab,
            content,
            mask: content,
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
