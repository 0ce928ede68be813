//! Clock and frame pacing for driving orbit animations.
//!
//! The math functions take `time` and `delta_time` as plain numbers. [`Clock`]
//! accumulates those numbers, and [`FrameGate`] decides when a frame is due,
//! so the math itself stays free of timing side effects.
//!
//! # Example
//!
//! ```ignore
//! use goldorbit::time::{Clock, FrameGate};
//!
//! let mut clock = Clock::new();
//! let mut gate = FrameGate::sixty_fps();
//!
//! // In your render loop:
//! if gate.ready(Instant::now()) {
//!     let (elapsed, delta) = clock.tick();
//!     let positions = calculate_orbits(n, elapsed, w, h, &options)?;
//!     sparks = update_particles(&sparks, delta);
//! }
//! ```

use std::time::{Duration, Instant};

/// Accumulated animation time.
///
/// Time can be advanced by real wall-clock time with [`tick`](Clock::tick),
/// or by explicit amounts with [`advance`](Clock::advance) for headless and
/// deterministic runs. Units are whatever the caller feeds in; `tick` uses
/// seconds.
#[derive(Debug, Clone)]
pub struct Clock {
    /// When the last tick happened.
    last_tick: Option<Instant>,
    /// Total scaled time.
    elapsed: f64,
    /// Scaled time of the last advance.
    delta: f64,
    /// Number of advances while running.
    frame_count: u64,
    paused: bool,
    /// Replaces the measured delta when set.
    fixed_delta: Option<f64>,
    /// Multiplier on every delta (1.0 = normal speed).
    time_scale: f64,
}

impl Clock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self {
            last_tick: None,
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance by wall-clock time since the previous tick.
    ///
    /// The first tick has a raw delta of zero. Returns `(elapsed, delta)`.
    pub fn tick(&mut self) -> (f64, f64) {
        let now = Instant::now();
        let raw = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(raw)
    }

    /// Advance by `raw_delta`, after applying the fixed delta and time scale.
    ///
    /// While paused the delta is zero and nothing accumulates.
    /// Returns `(elapsed, delta)`.
    pub fn advance(&mut self, raw_delta: f64) -> (f64, f64) {
        if self.paused {
            self.delta = 0.0;
            return (self.elapsed, self.delta);
        }

        self.delta = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed += self.delta;
        self.frame_count += 1;

        (self.elapsed, self.delta)
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Stop accumulating time.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause. Wall-clock time spent paused is skipped.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            if self.last_tick.is_some() {
                self.last_tick = Some(Instant::now());
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Use a constant delta instead of the measured one. `None` restores it.
    pub fn set_fixed_delta(&mut self, delta: Option<f64>) {
        self.fixed_delta = delta;
    }

    /// Set the time scale. Negative values clamp to 0; rewinding is done by
    /// passing negative deltas to [`advance`](Clock::advance) instead.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    /// Back to time zero, keeping the fixed delta and time scale.
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.elapsed = 0.0;
        self.delta = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets a frame through only when enough time has passed since the last one.
///
/// Wrap per-frame layout work in [`ready`](FrameGate::ready) to cap it at a
/// frame rate without touching the math.
#[derive(Debug, Clone)]
pub struct FrameGate {
    min_interval: Duration,
    last: Option<Instant>,
}

impl FrameGate {
    /// A gate that opens at most once per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// A gate for roughly 60 frames per second (16 ms).
    pub fn sixty_fps() -> Self {
        Self::new(Duration::from_millis(16))
    }

    #[inline]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Whether a frame is due at `now`. An accepted frame restarts the interval.
    ///
    /// The first call always returns `true`.
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
        };
        if due {
            self.last = Some(now);
        }
        due
    }

    /// Forget the last accepted frame so the next call is due.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::sixty_fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = Clock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_paused());
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn test_clock_advance() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(0.5), (0.5, 0.5));
        assert_eq!(clock.advance(0.25), (0.75, 0.25));
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_clock_tick_measures_wall_time() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(), (0.0, 0.0));
        thread::sleep(Duration::from_millis(10));
        let (elapsed, delta) = clock.tick();
        assert!(delta > 0.0);
        assert_eq!(elapsed, delta);
    }

    #[test]
    fn test_clock_pause() {
        let mut clock = Clock::new();
        clock.advance(1.0);
        clock.pause();

        assert_eq!(clock.advance(5.0), (1.0, 0.0));
        assert_eq!(clock.frame(), 1);

        clock.toggle_pause();
        assert!(!clock.is_paused());
        assert_eq!(clock.advance(1.0), (2.0, 1.0));
    }

    #[test]
    fn test_clock_scale_and_fixed_delta() {
        let mut clock = Clock::new();
        clock.set_time_scale(2.0);
        clock.set_fixed_delta(Some(0.5));
        assert_eq!(clock.advance(123.0), (1.0, 1.0));

        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn test_clock_negative_delta_rewinds() {
        let mut clock = Clock::new();
        clock.advance(10.0);
        assert_eq!(clock.advance(-4.0), (6.0, -4.0));
    }

    #[test]
    fn test_clock_reset() {
        let mut clock = Clock::new();
        clock.set_time_scale(3.0);
        clock.advance(1.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.time_scale(), 3.0);
    }

    #[test]
    fn test_frame_gate() {
        let mut gate = FrameGate::sixty_fps();
        let start = Instant::now();

        assert!(gate.ready(start));
        assert!(!gate.ready(start + Duration::from_millis(5)));
        assert!(!gate.ready(start + Duration::from_millis(15)));
        assert!(gate.ready(start + Duration::from_millis(16)));
        // Interval restarts from the accepted frame.
        assert!(!gate.ready(start + Duration::from_millis(20)));
        assert!(gate.ready(start + Duration::from_millis(40)));
    }

    #[test]
    fn test_frame_gate_ignores_earlier_instants() {
        let mut gate = FrameGate::new(Duration::from_millis(10));
        let start = Instant::now() + Duration::from_secs(1);
        assert!(gate.ready(start));
        assert!(!gate.ready(start - Duration::from_millis(500)));

        gate.reset();
        assert!(gate.ready(start - Duration::from_millis(500)));
    }
}
