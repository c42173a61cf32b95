//! Frame callback queue shared by every animation of a widget.
//!
//! The host owns a [`Runtime`] and calls [`Runtime::drain_frame_callbacks`]
//! once per presented frame. Animations only ever see a [`RuntimeHandle`],
//! which holds a weak reference so that a dropped runtime silently stops
//! every pending animation.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::mem;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64)>;

/// Hook the runtime uses to ask the host for another frame.
pub trait FrameScheduler {
    fn schedule_frame(&self);
}

/// Scheduler for hosts that poll [`Runtime::needs_frame`] instead.
#[derive(Default)]
pub struct DefaultScheduler;

impl FrameScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

struct RuntimeInner {
    scheduler: Rc<dyn FrameScheduler>,
    queue: RefCell<VecDeque<(FrameCallbackId, FrameCallback)>>,
    next_id: Cell<FrameCallbackId>,
    frame_requested: Cell<bool>,
    last_frame: Cell<Option<u64>>,
    frames_drained: Cell<u64>,
    draining: Cell<bool>,
    // Ids cancelled after the current drain took them out of the queue.
    cancelled_in_drain: RefCell<Vec<FrameCallbackId>>,
}

impl RuntimeInner {
    fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Asks the scheduler for a frame unless one is already on its way.
    fn request_frame(&self) {
        if !self.frame_requested.replace(true) {
            self.scheduler.schedule_frame();
        }
    }

    fn push(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push_back((id, callback));
        self.request_frame();
        id
    }

    fn remove(&self, id: FrameCallbackId) {
        // The removed callback is dropped after the queue borrow is released,
        // since it may own registrations of its own.
        let removed = {
            let mut queue = self.queue.borrow_mut();
            let removed = queue
                .iter()
                .position(|(queued, _)| *queued == id)
                .and_then(|index| queue.remove(index));
            if queue.is_empty() {
                self.frame_requested.set(false);
            }
            removed
        };
        if removed.is_none() && self.draining.get() {
            self.cancelled_in_drain.borrow_mut().push(id);
        }
    }

    fn is_cancelled_in_drain(&self, id: FrameCallbackId) -> bool {
        self.cancelled_in_drain.borrow().contains(&id)
    }

    fn drain(&self, frame_time_nanos: u64) {
        if let Some(previous) = self.last_frame.replace(Some(frame_time_nanos)) {
            if frame_time_nanos < previous {
                log::warn!("frame time went backwards: {frame_time_nanos} < {previous}");
            }
        }
        self.frames_drained.set(self.frames_drained.get() + 1);
        self.frame_requested.set(false);

        let due = mem::take(&mut *self.queue.borrow_mut());
        log::trace!("frame at {frame_time_nanos}ns runs {} callbacks", due.len());
        let outer_drain = !self.draining.replace(true);
        for (id, callback) in due {
            if self.is_cancelled_in_drain(id) {
                log::trace!("skipping frame callback {id}, cancelled earlier this frame");
                continue;
            }
            callback(frame_time_nanos);
        }
        if outer_drain {
            self.draining.set(false);
            self.cancelled_in_drain.borrow_mut().clear();
        }

        if !self.is_idle() {
            self.request_frame();
        }
    }
}

/// Owner of the frame callback queue.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                scheduler,
                queue: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
                frame_requested: Cell::new(false),
                last_frame: Cell::new(None),
                frames_drained: Cell::new(0),
                draining: Cell::new(false),
                cancelled_in_drain: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Whether a frame was requested and not drained yet.
    pub fn needs_frame(&self) -> bool {
        self.inner.frame_requested.get()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.is_idle()
    }

    pub fn frames_drained(&self) -> u64 {
        self.inner.frames_drained.get()
    }

    /// Runs every callback queued before this call, in registration order.
    ///
    /// Callbacks queued while draining wait for the next frame. A callback
    /// cancelled by an earlier one in the same frame does not run.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain(frame_time_nanos);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Rc::new(DefaultScheduler))
    }
}

/// Weak handle to a [`Runtime`]; every operation is a no-op once it is gone.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    fn with_inner<R>(&self, f: impl FnOnce(&RuntimeInner) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| f(&inner))
    }

    /// Returns `None` once the owning [`Runtime`] has been dropped.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.with_inner(|inner| inner.push(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.with_inner(|inner| inner.remove(id));
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.with_inner(|inner| inner.drain(frame_time_nanos));
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.with_inner(|inner| !inner.is_idle()).unwrap_or(false)
    }

    pub fn last_frame_time_nanos(&self) -> Option<u64> {
        self.with_inner(|inner| inner.last_frame.get()).flatten()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
