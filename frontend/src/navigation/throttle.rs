/// Coalesces bursts of scroll events onto animation frames.
///
/// `request` answers whether a frame callback has to be scheduled; it does so
/// once per frame. `on_frame` must run at the start of that callback.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn on_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_schedules_a_single_frame() {
        let mut throttle = FrameThrottle::new();
        let scheduled = (0..25).filter(|_| throttle.request()).count();
        assert_eq!(scheduled, 1);
        assert!(throttle.is_pending());
    }

    #[test]
    fn next_frame_can_be_scheduled_after_the_callback() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.request());
        throttle.on_frame();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
        assert!(!throttle.request());
    }
}
