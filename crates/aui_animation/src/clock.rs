//! Frame clock
//!
//! Measures the time between host frames. Widgets never own a clock; the
//! host ticks one of these per frame and hands the delta to every animated
//! widget.

use std::time::{Duration, Instant};

/// Host-side frame timing
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    target_fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            target_fps: 60,
        }
    }

    pub fn with_target_fps(fps: u32) -> Self {
        let mut clock = Self::new();
        clock.set_target_fps(fps);
        clock
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Nominal time between frames at the target rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    /// Forget the time spent while no frames were produced
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Milliseconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        dt.as_secs_f32() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval_follows_target_fps() {
        let clock = FrameClock::with_target_fps(50);
        assert_eq!(clock.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::with_target_fps(0);
        assert_eq!(clock.target_fps(), 1);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= 5.0, "dt={dt}");
        assert!(clock.tick() < dt);
    }
}
