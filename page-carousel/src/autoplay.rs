//! Auto-play cadence.
//!
//! A cooperative accumulator over the host's tick deltas. There is no
//! pause/resume: toggling auto-play or starting and ending a drag
//! restarts the accumulator from zero.

/// Fires page advances at a fixed interval of accumulated tick time.
pub(crate) struct AutoPlayTimer {
    interval: f32,
    accumulated: f32,
}

impl AutoPlayTimer {
    pub(crate) fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Restarts the accumulator from zero.
    pub(crate) fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Accumulates `dt` seconds; true when the interval elapsed.
    ///
    /// Any remainder past the interval is discarded on fire.
    pub(crate) fn advance_by(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_deltas_sum_to_the_interval() {
        let mut timer = AutoPlayTimer::new(3.0);
        assert!(!timer.advance_by(1.0));
        assert!(!timer.advance_by(1.5));
        assert!(timer.advance_by(0.5));
    }

    #[test]
    fn remainder_is_discarded_on_fire() {
        let mut timer = AutoPlayTimer::new(3.0);
        assert!(timer.advance_by(3.4));
        // A full interval is required again.
        assert!(!timer.advance_by(2.9));
        assert!(timer.advance_by(0.1));
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut timer = AutoPlayTimer::new(3.0);
        timer.advance_by(2.9);
        timer.reset();
        assert!(!timer.advance_by(2.9));
        assert!(timer.advance_by(0.1));
    }
}
