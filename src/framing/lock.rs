use std::sync::atomic::{AtomicBool, Ordering};

/// "Framing pass in progress" flag for one camera.
///
/// At most one framing pass may write a camera at a time. Hosts that frame
/// from change callbacks (frame-change handlers, property updates) would
/// otherwise re-enter the solver while it is moving the camera.
#[derive(Debug, Default)]
pub struct FramingLock {
    busy: AtomicBool,
}

impl FramingLock {
    /// Unlocked flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a pass, or `None` if one is already running.
    pub fn try_begin(&self) -> Option<FramingPass<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| FramingPass { lock: self })
    }

    /// Whether a pass is currently running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Guard for a running pass; releases the lock on drop, including on
/// unwind.
#[derive(Debug)]
pub struct FramingPass<'a> {
    lock: &'a FramingLock,
}

impl Drop for FramingPass<'_> {
    fn drop(&mut self) {
        self.lock.busy.store(false, Ordering::Release);
    }
}
