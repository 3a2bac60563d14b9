//! Per-frame coalescing of pointer work.
//!
//! Pointer moves can arrive many times between two display frames. Only the
//! latest one matters, so the scheduler keeps a single pending slot: a new
//! request replaces the pending task instead of queueing behind it.

/// Single-slot scheduler flushed once per display frame.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    pending: Option<T>,
    superseded: u64,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self {
            pending: None,
            superseded: 0,
        }
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for the next frame.
    ///
    /// Returns `true` if a pending task was replaced.
    pub fn request(&mut self, task: T) -> bool {
        let replaced = self.pending.replace(task).is_some();
        if replaced {
            self.superseded += 1;
        }
        replaced
    }

    /// Take the task to run on this frame, if any.
    pub fn take_ready(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of tasks dropped because a newer one replaced them.
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut scheduler = FrameScheduler::new();
        assert!(!scheduler.request(10.0));
        assert!(scheduler.request(20.0));
        assert!(scheduler.request(30.0));

        assert_eq!(scheduler.superseded_count(), 2);
        assert_eq!(scheduler.take_ready(), Some(30.0));
        assert_eq!(scheduler.take_ready(), None);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = FrameScheduler::new();
        scheduler.request("move");
        assert!(scheduler.has_pending());
        assert_eq!(scheduler.cancel(), Some("move"));
        assert!(!scheduler.has_pending());
    }
}
