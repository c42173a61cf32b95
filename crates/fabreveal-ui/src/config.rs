//! Tunables of the reveal layout.

use fabreveal_animation::{AnimationSpec, CircularReveal, Easing};
use fabreveal_graphics::{Color, Dp};

/// Duration shared by the button motion and the fades that run with it.
pub const ANIMATION_DURATION_MILLIS: u64 = 500;

pub const FAB_SIZE: Dp = Dp(48.0);
pub const FAB_MARGIN_TOP: Dp = Dp(20.0);
pub const FAB_MARGIN_END: Dp = Dp(16.0);

/// Mask color used when neither the config nor the host provides one.
pub const DEFAULT_MASK_COLOR: Color = Color::BLACK;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Button motion, and the main surface fade running alongside it.
    pub motion: AnimationSpec,
    /// Mask growth once the button has arrived.
    pub expand: AnimationSpec,
    /// Mask shrink, and the secondary surface fade running alongside it.
    pub contract: AnimationSpec,
    pub fab_size: Dp,
    pub fab_margin_top: Dp,
    pub fab_margin_end: Dp,
    /// Pixels per dp.
    pub density: f32,
    /// Overrides the button tint as the mask color.
    pub mask_color: Option<Color>,
}

impl RevealConfig {
    pub fn with_motion(mut self, spec: AnimationSpec) -> Self {
        self.motion = spec;
        self
    }

    pub fn with_expand(mut self, spec: AnimationSpec) -> Self {
        self.expand = spec;
        self
    }

    pub fn with_contract(mut self, spec: AnimationSpec) -> Self {
        self.contract = spec;
        self
    }

    pub fn with_fab_size(mut self, size: Dp) -> Self {
        self.fab_size = size;
        self
    }

    pub fn with_fab_margins(mut self, top: Dp, end: Dp) -> Self {
        self.fab_margin_top = top;
        self.fab_margin_end = end;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        debug_assert!(density.is_finite() && density > 0.0, "density must be positive");
        self.density = density;
        self
    }

    pub fn with_mask_color(mut self, color: Color) -> Self {
        self.mask_color = Some(color);
        self
    }

    pub fn fab_size_px(&self) -> f32 {
        self.fab_size.to_px(self.density)
    }

    /// Worst-case time from a reveal request to the secondary surface settling.
    pub fn reveal_duration_millis(&self) -> u64 {
        self.motion.delay_millis
            + self.motion.duration_millis
            + self.expand.delay_millis
            + self.expand.duration_millis
    }

    pub fn restore_duration_millis(&self) -> u64 {
        self.contract.delay_millis
            + self.contract.duration_millis
            + self.motion.delay_millis
            + self.motion.duration_millis
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        let motion = AnimationSpec::tween(ANIMATION_DURATION_MILLIS, Easing::FastOutSlowInEasing);
        Self {
            motion,
            expand: CircularReveal::default_spec(),
            contract: motion,
            fab_size: FAB_SIZE,
            fab_margin_top: FAB_MARGIN_TOP,
            fab_margin_end: FAB_MARGIN_END,
            density: 1.0,
            mask_color: None,
        }
    }
}
