//! Easing curves and time-driven interpolation.
//!
//! Animations here never own a clock. The host delivers elapsed time through
//! [`EasedValue::update`] and reads the interpolated value back.

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
///
/// Every curve maps 0.0 to 0.0 and 1.0 to 1.0 and is monotonic in between,
/// so an interpolated value never overshoots its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// EasedValue - Timed Interpolation
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    // -------------------------------------------------------------------------
    // Easing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_linear() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn test_easing_ease_in() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_easing_ease_out() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_easing_ease_in_out() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    // -------------------------------------------------------------------------
    // EasedValue tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_eased_value_runs_to_target() {
        let mut v = EasedValue::new(14.0, 86.0, 0.12);
        assert_eq!(v.value(), 14.0);
        assert!(!v.is_complete());

        v.update(0.06);
        assert!(v.value() > 14.0 && v.value() < 86.0);

        v.update(0.1);
        assert!(v.is_complete());
        assert_eq!(v.value(), 86.0);
        assert_eq!(v.progress(), 1.0);
    }

    #[test]
    fn test_eased_value_zero_duration_is_immediately_complete() {
        let v = EasedValue::new(0.0, 10.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_eased_value_ignores_negative_dt() {
        let mut v = EasedValue::new(0.0, 10.0, 1.0).with_easing(Easing::Linear);
        v.update(0.5);
        v.update(-0.3);
        assert_eq!(v.elapsed, 0.5);
    }

    proptest! {
        #[test]
        fn prop_easing_is_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in ALL {
                prop_assert!(easing.apply(lo) <= easing.apply(hi) + 1e-12);
            }
        }

        #[test]
        fn prop_eased_value_stays_between_endpoints(
            from in -500.0f64..500.0,
            to in -500.0f64..500.0,
            dt in 0.0f64..2.0,
        ) {
            let mut v = EasedValue::new(from, to, 1.0);
            v.update(dt);
            let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
            prop_assert!(v.value() >= lo - 1e-9 && v.value() <= hi + 1e-9);
        }
    }
}
