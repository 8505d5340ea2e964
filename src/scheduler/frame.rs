/// Opaque token for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's "call me on the next display refresh" primitive.
///
/// A browser host maps this onto `requestAnimationFrame`/`cancelAnimationFrame`; headless
/// hosts use [`ManualFrames`] and call [`Scheduler::tick`](crate::Scheduler::tick) themselves.
pub trait FrameRequester {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Bookkeeping-only requester for hosts that own their own frame clock.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    requested: u64,
    cancelled: u64,
}

impl ManualFrames {
    /// Total requests made so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total cancellations received.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameRequester for ManualFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        self.requested += 1;
        FrameHandle(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if handle.0 != 0 && handle.0 <= self.next {
            self.cancelled += 1;
        }
    }
}
