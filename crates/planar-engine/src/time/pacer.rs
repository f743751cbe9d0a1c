use std::time::{Duration, Instant};

/// Caps the redraw rate at a target frames-per-second.
///
/// The runtime asks [`FramePacer::next_deadline`] when the loop goes idle and
/// sleeps until then (`ControlFlow::WaitUntil`); [`FramePacer::frame_due`]
/// decides whether a redraw should be requested now.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    /// `target_fps == 0` disables pacing (every wake-up redraws).
    pub fn new(target_fps: u32) -> Self {
        let interval = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self { interval, last_frame: None }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `true` when at least one interval has passed since the last frame.
    pub fn frame_due(&self, now: Instant) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Records that a frame was started at `now`.
    pub fn mark_frame(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// Instant at which the next frame becomes due.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        match self.last_frame {
            None => now,
            Some(last) => (last + self.interval).max(now),
        }
    }
}
