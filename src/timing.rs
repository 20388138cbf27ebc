//! Elapsed-time windows shared by every simulation domain.

/// A monotonically increasing elapsed value clamped to `[0, max + epsilon]`.
///
/// `elapsed < max` means the window is still open. Arm a window by resetting
/// it to zero; construct it expired to start in the inactive state. The
/// clamp keeps long-lived timers from drifting toward infinity.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    elapsed: f32,
    max: f32,
}

impl Window {
    /// A window that starts open (elapsed = 0).
    pub fn armed(max: f32) -> Self {
        Self { elapsed: 0.0, max }
    }

    /// A window that starts in the expired/inactive state.
    pub fn expired(max: f32) -> Self {
        Self {
            elapsed: max + f32::EPSILON,
            max,
        }
    }

    /// Advance the window by one tick, clamping at `max + epsilon`.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.max + f32::EPSILON);
    }

    /// Reset elapsed to zero, re-opening the window.
    pub fn arm(&mut self) {
        self.elapsed = 0.0;
    }

    /// Force the window into the expired state (consume it).
    pub fn expire(&mut self) {
        self.elapsed = self.max + f32::EPSILON;
    }

    pub fn is_open(&self) -> bool {
        self.elapsed < self.max
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::Window;

    #[test]
    fn test_armed_window_is_open() {
        let w = Window::armed(0.5);
        assert!(w.is_open());
        assert_eq!(w.elapsed(), 0.0);
    }

    #[test]
    fn test_expired_window_is_closed() {
        let w = Window::expired(0.5);
        assert!(!w.is_open());
    }

    #[test]
    fn test_tick_closes_window_at_max() {
        let mut w = Window::armed(0.1);
        w.tick(0.05);
        assert!(w.is_open());
        w.tick(0.05);
        assert!(!w.is_open());
    }

    #[test]
    fn test_elapsed_clamped_to_max() {
        let mut w = Window::armed(0.2);
        for _ in 0..1000 {
            w.tick(1.0);
        }
        assert!(w.elapsed() <= w.max() + f32::EPSILON);
    }

    #[test]
    fn test_negative_dt_never_reopens() {
        let mut w = Window::expired(0.2);
        w.tick(-5.0);
        assert!(!w.is_open());
        assert!(w.elapsed() >= 0.0);
    }

    #[test]
    fn test_rearm_reopens() {
        let mut w = Window::expired(0.3);
        w.arm();
        assert!(w.is_open());
        w.tick(0.4);
        assert!(!w.is_open());
    }
}
