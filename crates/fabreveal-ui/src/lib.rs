//! FAB reveal layout for hosts that bring their own view system.
//!
//! A [`RevealController`] owns a [`RevealHost`] and drives it through the
//! reveal transition: the floating action button swoops to the center of the
//! main surface, a circular mask expands over it and the secondary surface
//! takes its place. Restoring runs the same stages backwards.

mod config;
mod controller;
mod error;
mod host;
mod layout;
mod state_machine;

pub use config::*;
pub use controller::{RevealController, WeakRevealController};
pub use error::RevealError;
pub use host::{RevealHost, RevealListener, RevealPart};
pub use layout::{
    ChildKind, ChildSlot, RevealArrangement, RevealLayoutBuilder, MAX_CONTENT_CHILDREN,
};
pub use state_machine::{next_step, Phase, RevealEvent, RevealState, Step, TransitionStage};

pub use fabreveal_animation::{AnimationSpec, Easing, RevealCircle};
pub use fabreveal_core::FrameClock;
pub use fabreveal_graphics::{Color, Dp, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::RevealConfig;
    pub use crate::controller::RevealController;
    pub use crate::host::{RevealHost, RevealListener, RevealPart};
    pub use crate::layout::{ChildKind, RevealArrangement, RevealLayoutBuilder};
    pub use crate::state_machine::{RevealState, TransitionStage};
}
