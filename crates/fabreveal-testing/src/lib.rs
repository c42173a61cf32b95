//! Testing utilities for the FAB reveal layout

pub mod assertions;
pub mod frame_pump;
pub mod recording_host;

pub use frame_pump::{FramePump, FRAME_INTERVAL_NANOS};
pub use recording_host::{HostCall, RecordingHost};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::frame_pump::*;
    pub use crate::recording_host::*;
}
