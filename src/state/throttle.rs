//! Rate limiting for high-frequency browser events such as `scroll`.
//!
//! Time is passed in by the caller in milliseconds, so the same logic works
//! with `Date.now()` in the browser and with fixed values in tests.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Handle the event now.
    Run,
    /// Skip it; a trailing call after `wait_ms` picks up the latest value.
    Defer { wait_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_run: None,
        }
    }

    /// Decides whether an event arriving at `now_ms` should run. A `Run`
    /// decision is recorded as the latest run.
    pub fn poll(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => ThrottleDecision::Defer {
                wait_ms: self.interval_ms - (now_ms - last),
            },
            _ => {
                self.last_run = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    /// Records a run that happened outside `poll`, e.g. a trailing call.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_run = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_runs() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.poll(1000.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_events_inside_interval_are_deferred() {
        let mut throttle = Throttle::new(16.0);
        throttle.poll(1000.0);
        assert_eq!(throttle.poll(1010.0), ThrottleDecision::Defer { wait_ms: 6.0 });
        assert_eq!(throttle.poll(1016.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_mark_restarts_interval() {
        let mut throttle = Throttle::new(50.0);
        throttle.poll(0.0);
        throttle.mark(40.0);
        assert_eq!(throttle.poll(60.0), ThrottleDecision::Defer { wait_ms: 30.0 });
        assert_eq!(throttle.poll(90.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_zero_interval_always_runs() {
        let mut throttle = Throttle::new(0.0);
        assert_eq!(throttle.poll(5.0), ThrottleDecision::Run);
        assert_eq!(throttle.poll(5.0), ThrottleDecision::Run);
    }
}
