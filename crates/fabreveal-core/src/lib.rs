#![doc = r"Single-threaded frame runtime for the FAB reveal widget."]

pub mod frame_clock;
pub mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{DefaultScheduler, FrameScheduler, Runtime, RuntimeHandle};

/// Identifier handed out for each registered frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
