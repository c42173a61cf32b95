//! Per-widget view of the runtime's frame callback queue.

use crate::runtime::RuntimeHandle;
use crate::{FrameCallbackId, NANOS_PER_MILLI};

/// Schedules one-shot callbacks on the next drained frame.
///
/// Cheap to clone; every clone feeds the same runtime.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// False once the owning runtime is gone; callbacks then never fire.
    pub fn is_running(&self) -> bool {
        self.runtime.is_alive()
    }

    /// Time of the most recent drain, if any frame has been drained yet.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.runtime.last_frame_time_nanos()
    }

    /// Queues `callback` for the next frame.
    ///
    /// Dropping the returned registration before that frame cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let slot = self
            .runtime
            .register_frame_callback(callback)
            .map(|id| (self.runtime.clone(), id));
        if slot.is_none() {
            log::debug!("frame callback dropped: runtime already gone");
        }
        FrameCallbackRegistration { slot }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / NANOS_PER_MILLI))
    }
}

/// Keeps a queued frame callback alive.
#[must_use = "dropping the registration cancels the callback"]
pub struct FrameCallbackRegistration {
    slot: Option<(RuntimeHandle, FrameCallbackId)>,
}

impl FrameCallbackRegistration {
    /// False when the runtime was already gone at registration time.
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.slot.as_ref().map(|(_, id)| *id)
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some((runtime, id)) = self.slot.take() {
            runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
