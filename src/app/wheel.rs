use std::time::{Duration, Instant};

pub const DEFAULT_WHEEL_THRESHOLD: f64 = 30.0;
pub const DEFAULT_WHEEL_COOLDOWN: Duration = Duration::from_millis(90);

/// Tuning for [`WheelDebounce`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSettings {
    /// Accumulated delta magnitude needed before a step is emitted
    pub threshold: f64,
    /// Minimum time between two emitted steps
    pub cooldown: Duration,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_WHEEL_THRESHOLD,
            cooldown: DEFAULT_WHEEL_COOLDOWN,
        }
    }
}

/// Result of feeding one wheel delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Below the threshold, still accumulating
    Pending,
    /// Threshold reached but the previous step is too recent; the delta is kept
    Cooling,
    /// Move the carousel one item in this direction (`1` or `-1`)
    Step(isize),
}

/// Turns continuous wheel deltas into single carousel steps
///
/// One physical scroll gesture produces a burst of small deltas. They are summed
/// until the magnitude reaches the threshold, then exactly one step is emitted and
/// the sum resets. Steps closer together than the cooldown are held back.
#[derive(Debug, Clone)]
pub struct WheelDebounce {
    settings: WheelSettings,
    accumulated: f64,
    last_step: Option<Instant>,
}

impl WheelDebounce {
    pub fn new(settings: WheelSettings) -> Self {
        Self {
            settings,
            accumulated: 0.0,
            last_step: None,
        }
    }

    pub fn feed(&mut self, delta: f64, now: Instant) -> WheelOutcome {
        if !delta.is_finite() {
            return WheelOutcome::Pending;
        }
        self.accumulated += delta;

        if self.accumulated.abs() < self.settings.threshold {
            return WheelOutcome::Pending;
        }
        if let Some(last) = self.last_step
            && now.saturating_duration_since(last) < self.settings.cooldown
        {
            return WheelOutcome::Cooling;
        }

        let direction = if self.accumulated > 0.0 { 1 } else { -1 };
        self.accumulated = 0.0;
        self.last_step = Some(now);
        WheelOutcome::Step(direction)
    }

    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

impl Default for WheelDebounce {
    fn default() -> Self {
        Self::new(WheelSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_steps_once_threshold_is_crossed() {
        let mut wheel = WheelDebounce::default();
        let start = Instant::now();

        assert_eq!(wheel.feed(10.0, start), WheelOutcome::Pending);
        assert_eq!(wheel.feed(10.0, start + ms(5)), WheelOutcome::Pending);
        assert_eq!(wheel.feed(15.0, start + ms(10)), WheelOutcome::Step(1));
        assert!(wheel.accumulated().abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_deltas_step_backwards() {
        let mut wheel = WheelDebounce::default();
        let start = Instant::now();

        assert_eq!(wheel.feed(-20.0, start), WheelOutcome::Pending);
        assert_eq!(wheel.feed(-20.0, start), WheelOutcome::Step(-1));
    }

    #[test]
    fn test_exact_threshold_steps() {
        let mut wheel = WheelDebounce::default();
        assert_eq!(wheel.feed(30.0, Instant::now()), WheelOutcome::Step(1));
    }

    #[test]
    fn test_opposite_deltas_cancel_out() {
        let mut wheel = WheelDebounce::default();
        let start = Instant::now();

        assert_eq!(wheel.feed(25.0, start), WheelOutcome::Pending);
        assert_eq!(wheel.feed(-20.0, start), WheelOutcome::Pending);
        assert!((wheel.accumulated() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_second_burst_within_cooldown_is_held_back() {
        let mut wheel = WheelDebounce::default();
        let start = Instant::now();

        assert_eq!(wheel.feed(40.0, start), WheelOutcome::Step(1));
        assert_eq!(wheel.feed(40.0, start + ms(30)), WheelOutcome::Cooling);
        assert_eq!(wheel.feed(5.0, start + ms(60)), WheelOutcome::Cooling);
        assert!((wheel.accumulated() - 45.0).abs() < f64::EPSILON);

        // The held delta commits on the first event after the window
        assert_eq!(wheel.feed(1.0, start + ms(90)), WheelOutcome::Step(1));
        assert!(wheel.accumulated().abs() < f64::EPSILON);
    }

    #[test]
    fn test_bursts_outside_cooldown_each_step() {
        let mut wheel = WheelDebounce::default();
        let start = Instant::now();

        assert_eq!(wheel.feed(30.0, start), WheelOutcome::Step(1));
        assert_eq!(wheel.feed(30.0, start + ms(100)), WheelOutcome::Step(1));
        assert_eq!(wheel.feed(-30.0, start + ms(200)), WheelOutcome::Step(-1));
    }

    #[test]
    fn test_custom_settings() {
        let mut wheel = WheelDebounce::new(WheelSettings {
            threshold: 3.0,
            cooldown: Duration::ZERO,
        });
        let start = Instant::now();

        assert_eq!(wheel.feed(3.0, start), WheelOutcome::Step(1));
        assert_eq!(wheel.feed(3.0, start), WheelOutcome::Step(1));
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut wheel = WheelDebounce::default();
        assert_eq!(wheel.feed(f64::NAN, Instant::now()), WheelOutcome::Pending);
        assert_eq!(wheel.feed(f64::INFINITY, Instant::now()), WheelOutcome::Pending);
        assert!(wheel.accumulated().abs() < f64::EPSILON);
    }
}
