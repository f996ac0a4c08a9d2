use folio_animation::FrameTime;

pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Per-scene frame clock driven by injected timestamps.
///
/// `elapsed` is the time since `start`, never decreasing. `delta` is the time
/// since the previous tick, clamped to `[0, max_delta]` so a suspended tab does
/// not produce one huge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    origin: Option<f64>,
    last: f64,
    elapsed: f32,
    max_delta: f32,
}

impl Clock {
    pub fn new(max_delta: f32) -> Self {
        let max_delta = if max_delta.is_finite() && max_delta > 0.0 {
            max_delta
        } else {
            log::warn!("clock max_delta {max_delta} is not positive; using {DEFAULT_MAX_DELTA}");
            DEFAULT_MAX_DELTA
        };
        Self {
            origin: None,
            last: 0.0,
            elapsed: 0.0,
            max_delta,
        }
    }

    /// Sets time zero. Ticks before `start` begin the clock at their own timestamp.
    pub fn start(&mut self, now: f64) {
        self.origin = Some(now);
        self.last = now;
        self.elapsed = 0.0;
    }

    pub fn is_started(&self) -> bool {
        self.origin.is_some()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    pub fn advance(&mut self, now: f64) -> FrameTime {
        if !now.is_finite() {
            return FrameTime::new(self.elapsed, 0.0);
        }
        let Some(origin) = self.origin else {
            self.start(now);
            return FrameTime::new(0.0, 0.0);
        };

        let delta = ((now - self.last) as f32).clamp(0.0, self.max_delta);
        if now > self.last {
            self.last = now;
        }
        self.elapsed = self.elapsed.max((self.last - origin) as f32);
        FrameTime::new(self.elapsed, delta)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELTA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_time_since_start() {
        let mut clock = Clock::default();
        clock.start(100.0);
        let t = clock.advance(100.5);
        assert!((t.elapsed - 0.5).abs() < 1e-6);
        assert!((t.delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn delta_is_clamped_after_suspend() {
        let mut clock = Clock::new(0.1);
        clock.start(0.0);
        clock.advance(1.0 / 60.0);
        let t = clock.advance(30.0);
        assert!((t.delta - 0.1).abs() < 1e-6);
        assert!((t.elapsed - 30.0).abs() < 1e-4);
    }

    #[test]
    fn backwards_time_never_rewinds() {
        let mut clock = Clock::default();
        clock.start(10.0);
        let a = clock.advance(12.0);
        let b = clock.advance(11.0);
        assert_eq!(b.delta, 0.0);
        assert_eq!(b.elapsed, a.elapsed);
        let c = clock.advance(12.05);
        assert!((c.delta - 0.05).abs() < 1e-5);
    }

    #[test]
    fn first_advance_starts_an_unstarted_clock() {
        let mut clock = Clock::default();
        assert!(!clock.is_started());
        assert_eq!(clock.advance(5.0), FrameTime::new(0.0, 0.0));
        assert!(clock.is_started());
        assert!((clock.advance(5.25).elapsed - 0.25).abs() < 1e-6);
    }

    #[test]
    fn invalid_max_delta_falls_back() {
        assert_eq!(Clock::new(f32::NAN).max_delta(), DEFAULT_MAX_DELTA);
        assert_eq!(Clock::new(-1.0).max_delta(), DEFAULT_MAX_DELTA);
    }
}
