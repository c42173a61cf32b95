//! Animation building blocks for the FAB reveal widget
//!
//! Time-based tweens with easing curves, plus the two geometric models the
//! reveal transition is made of: the curved path the button travels along
//! and the circular mask that uncovers the secondary surface.

mod animation;
mod circular_reveal;
mod curved_path;

pub use animation::*;
pub use circular_reveal::*;
pub use curved_path::*;
