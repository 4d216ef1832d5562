//! Frame scheduling
//!
//! A small request/cancel facility for per-frame callbacks. Callers request a
//! frame and keep the returned handle; the application loop takes the due
//! requests on every tick and hands each handle back to its owner. A handle
//! cancelled before its frame is serviced is never delivered.

/// Handle to a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Pending frame requests
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a callback on the next frame
    pub fn request(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    /// Cancel a pending request. Returns false if it was already serviced or cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        self.pending.len() != before
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take every request due on this frame.
    ///
    /// Requests made while servicing the returned handles are due on the following frame.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_take() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert_ne!(a, b);
        assert!(frames.has_pending());

        let due = frames.take_due();
        assert_eq!(due, vec![a, b]);
        assert!(!frames.has_pending());
    }

    #[test]
    fn test_cancel() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        assert!(frames.cancel(a));
        assert!(!frames.cancel(a));
        assert!(frames.take_due().is_empty());
    }

    #[test]
    fn test_requests_during_service_wait_for_next_frame() {
        let mut frames = FrameScheduler::new();
        frames.request();
        let due = frames.take_due();
        assert_eq!(due.len(), 1);

        let next = frames.request();
        assert_eq!(frames.take_due(), vec![next]);
    }
}
