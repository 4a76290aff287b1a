//! Pure easing functions for interpolated motions.

use serde::{Deserialize, Serialize};

/// Easing curve applied to interpolation progress.
///
/// All curves map [0, 1] to [0, 1]. The motion core only offers the
/// ease-out family: every gesture it animates is a release, so motions
/// start fast and decelerate into their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Constant rate
    Linear,
    /// Quadratic ease-out: f(t) = 1 - (1-t)²
    Decelerate,
    /// Cubic ease-out: f(t) = 1 - (1-t)³
    Cubic,
    /// Quintic ease-out: f(t) = 1 - (1-t)⁵
    Quintic,
    /// Exponential ease-out: f(t) = 1 - 2^(-10t)
    Expo,
}

impl Default for EasingType {
    fn default() -> Self {
        Self::Decelerate
    }
}

impl EasingType {
    /// Apply the easing function to a progress value in [0, 1].
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Decelerate => decelerate(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::Expo => exponential_ease_out(t),
        }
    }
}

#[inline]
fn decelerate(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

#[inline]
fn cubic_ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[inline]
fn quintic_ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

#[inline]
fn exponential_ease_out(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::Linear,
        EasingType::Decelerate,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::Expo,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f32 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads_movement() {
        // Decelerating curves cover more than half the distance by t=0.5.
        for easing in [EasingType::Decelerate, EasingType::Cubic, EasingType::Quintic] {
            assert!(easing.apply(0.5) > 0.5, "{:?} at t=0.5", easing);
        }
    }

    #[test]
    fn test_apply_clamps_input() {
        assert_eq!(EasingType::Decelerate.apply(-1.0), 0.0);
        assert_eq!(EasingType::Decelerate.apply(2.0), 1.0);
    }
}
