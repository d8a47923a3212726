//! Frame clock feeding [`VirtualCamera::update`](crate::camera::VirtualCamera::update).

use web_time::{Duration, Instant};

/// Longest frame delta (seconds) handed to the camera. A stall longer than
/// this (window dragged, breakpoint hit) advances motion by this much only.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame timing with FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a frame and return the seconds since the previous
    /// one, clamped to `[0, MAX_FRAME_DELTA]`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Fold one frame duration into the FPS estimate and return the
    /// clamped delta.
    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.clamp(0.0, MAX_FRAME_DELTA)
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_stall_is_clamped() {
        let mut timing = FrameTiming::new(0);
        let dt = timing.record(Duration::from_secs(3));
        assert_eq!(dt, MAX_FRAME_DELTA);
    }

    #[test]
    fn short_frames_pass_through() {
        let mut timing = FrameTiming::new(0);
        let dt = timing.record(Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(timing.record(Duration::ZERO), 0.0);
    }

    #[test]
    fn fps_converges_toward_frame_rate() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..500 {
            let _ = timing.record(Duration::from_millis(10));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0, "fps {}", timing.fps());
    }

    #[test]
    fn unlimited_target_always_renders() {
        let timing = FrameTiming::default();
        assert!(timing.should_render());
    }

    #[test]
    fn tick_is_never_negative() {
        let mut timing = FrameTiming::new(60);
        let dt = timing.tick();
        assert!((0.0..=MAX_FRAME_DELTA).contains(&dt));
    }
}
