//! Time calculation helpers for interpolated motions.
//!
//! Everything is a pure function of an explicit `now`, so motion state can
//! be exercised in tests without a live timer.

use std::time::{Duration, Instant};

/// Animation progress at `now`, clamped to [0.0, 1.0].
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Check if an animation that started at `start` has run its full duration.
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values, `t` in [0.0, 1.0].
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(300.0, 100.0, 0.5) - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        // now before start saturates to zero elapsed
        assert_eq!(progress(start + duration, start, duration), 0.0);
        assert_eq!(progress(start, start + 2 * duration, duration), 1.0);
    }

    #[test]
    fn test_is_complete() {
        let start = Instant::now();
        let duration = Duration::from_millis(400);
        assert!(!is_complete(start, start, duration));
        assert!(!is_complete(start, start + Duration::from_millis(399), duration));
        assert!(is_complete(start, start + duration, duration));
    }
}
