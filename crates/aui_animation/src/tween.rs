//! Duration-based single-value tweens

use crate::easing::Easing;

/// Animates one `f32` from `from` to `to` over a fixed duration.
///
/// The tween never reads a clock. The owner advances it with
/// [`tick`](Tween::tick), passing the milliseconds elapsed since the
/// previous frame.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
    started: bool,
    playing: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
            started: false,
            playing: false,
        }
    }

    /// Restart from the beginning
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.started = true;
        self.playing = true;
    }

    /// Stop where it is. The current value stays readable.
    pub fn cancel(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the full duration has elapsed
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return if self.started { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Progress after the easing curve
    pub fn eased_progress(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let t = self.eased_progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    /// Advance by delta time (in milliseconds). Returns true while still playing.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
            tracing::trace!(to = self.to, "tween finished");
        }

        self.playing
    }
}
