//! Frame driver abstraction
//!
//! The host environment owns the repaint loop (a `requestAnimationFrame`
//! equivalent). The controller only needs two operations: request one
//! callback before the next repaint, and cancel a request that has not
//! fired yet. Every transition out of Running must cancel its outstanding
//! request, otherwise a stale callback keeps advancing elapsed time after a
//! logical pause.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for one pending frame request
    pub struct FrameRequestId;
}

/// Scheduler that invokes the simulation once per display repaint.
pub trait FrameDriver {
    /// Ask for one callback before the next repaint.
    fn request(&mut self) -> FrameRequestId;

    /// Cancel a pending request. Cancelling an already-fired or unknown
    /// handle is a no-op.
    fn cancel(&mut self, id: FrameRequestId);
}

/// A frame driver the caller pumps by hand.
///
/// Requests accumulate until [`take_ready`](Self::take_ready) drains them;
/// cancelled requests never fire. Used by tests and headless runs to model
/// the host repaint loop with synthetic timestamps.
#[derive(Default)]
pub struct ManualFrameDriver {
    pending: SlotMap<FrameRequestId, ()>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending requests, returning the handles that should fire.
    pub fn take_ready(&mut self) -> Vec<FrameRequestId> {
        let ready: Vec<_> = self.pending.keys().collect();
        self.pending.clear();
        ready
    }

    /// Number of requests currently pending.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total requests made over the driver's lifetime.
    pub fn requested_count(&self) -> usize {
        self.requested
    }

    /// Total requests cancelled before firing.
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameDriver for ManualFrameDriver {
    fn request(&mut self) -> FrameRequestId {
        self.requested += 1;
        self.pending.insert(())
    }

    fn cancel(&mut self, id: FrameRequestId) {
        if self.pending.remove(id).is_some() {
            self.cancelled += 1;
        }
    }
}
