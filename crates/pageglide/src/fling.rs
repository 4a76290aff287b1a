//! Physics-based fling decay.

use std::time::Instant;

/// Bounded fling simulator with exponential friction decay.
///
/// Velocity decays as `v(t) = v0·e^(-kt)`, so the position follows the
/// closed form `x(t) = x0 + v0/k·(1 - e^(-kt))` per axis, clamped to the
/// content bounds. All queries are functions of the supplied `now`, so the
/// decay can be exercised in tests without a live timer.
///
/// [`compute_scroll_offset`](Self::compute_scroll_offset) keeps the polling
/// contract of a classic over-scroller: it returns `true` while frames are
/// being delivered, including the frame that lands on the resting position,
/// and `false` on every call after that.
#[derive(Debug, Clone)]
pub struct FlingScroller {
    started_at: Instant,
    start_x: f32,
    start_y: f32,
    velocity_x: f32,
    velocity_y: f32,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    friction: f32,
    stop_velocity: f32,
    curr_x: f32,
    curr_y: f32,
    finished: bool,
}

impl Default for FlingScroller {
    fn default() -> Self {
        Self {
            started_at: Instant::now(),
            start_x: 0.0,
            start_y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            friction: 1.0,
            stop_velocity: 0.0,
            curr_x: 0.0,
            curr_y: 0.0,
            finished: true,
        }
    }
}

impl FlingScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the scroller with a new decay starting at `now`.
    ///
    /// `friction` is the decay coefficient per second; `stop_velocity` is
    /// the speed below which the decay is considered at rest.
    #[allow(clippy::too_many_arguments)]
    pub fn fling(
        &mut self,
        now: Instant,
        start_x: f32,
        start_y: f32,
        velocity_x: f32,
        velocity_y: f32,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        friction: f32,
        stop_velocity: f32,
    ) {
        self.started_at = now;
        self.start_x = start_x;
        self.start_y = start_y;
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
        // closed form divides by the coefficient
        self.friction = friction.max(f32::EPSILON);
        self.stop_velocity = stop_velocity;
        self.curr_x = start_x.clamp(min_x, max_x);
        self.curr_y = start_y.clamp(min_y, max_y);
        self.finished = false;
    }

    /// Advance the decay to `now`, updating the current position.
    ///
    /// Returns `true` while the decay is live; the call that reaches the
    /// resting position still returns `true`, every later call returns
    /// `false`.
    pub fn compute_scroll_offset(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }

        let t = now.saturating_duration_since(self.started_at).as_secs_f32();
        let decay = (-self.friction * t).exp();
        let travel = (1.0 - decay) / self.friction;

        let raw_x = self.start_x + self.velocity_x * travel;
        let raw_y = self.start_y + self.velocity_y * travel;
        self.curr_x = raw_x.clamp(self.min_x, self.max_x);
        self.curr_y = raw_y.clamp(self.min_y, self.max_y);

        let speed = (self.velocity_x * self.velocity_x + self.velocity_y * self.velocity_y).sqrt()
            * decay;
        let x_done = self.velocity_x == 0.0 || raw_x < self.min_x || raw_x > self.max_x;
        let y_done = self.velocity_y == 0.0 || raw_y < self.min_y || raw_y > self.max_y;
        if speed < self.stop_velocity || (x_done && y_done) {
            self.finished = true;
        }

        true
    }

    /// Terminate the decay without relocating anything.
    pub fn force_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current X position, valid after a `compute_scroll_offset` call.
    #[inline]
    pub fn curr_x(&self) -> f32 {
        self.curr_x
    }

    /// Current Y position, valid after a `compute_scroll_offset` call.
    #[inline]
    pub fn curr_y(&self) -> f32 {
        self.curr_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_scroller_delivers_nothing() {
        let mut scroller = FlingScroller::new();
        assert!(!scroller.compute_scroll_offset(Instant::now()));
    }

    #[test]
    fn test_decay_converges_within_bounds() {
        let mut scroller = FlingScroller::new();
        let start = Instant::now();
        scroller.fling(start, 0.0, 2000.0, 0.0, -4000.0, 0.0, 0.0, 0.0, 2000.0, 4.5, 50.0);

        assert!(scroller.compute_scroll_offset(start + Duration::from_secs(2)));
        let rest = scroller.curr_y();
        assert!((0.0..2000.0).contains(&rest), "rest={rest}");
        assert!(scroller.is_finished());
        assert!(!scroller.compute_scroll_offset(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_total_travel_matches_closed_form() {
        // With v0 = 900 and k = 4.5 the total travel is v0/k = 200.
        let mut scroller = FlingScroller::new();
        let start = Instant::now();
        scroller.fling(start, 100.0, 0.0, 900.0, 0.0, 0.0, 1000.0, 0.0, 0.0, 4.5, 0.0);

        assert!(scroller.compute_scroll_offset(start + Duration::from_secs(5)));
        assert!((scroller.curr_x() - 300.0).abs() < 1.0, "x={}", scroller.curr_x());
    }

    #[test]
    fn test_boundary_pins_position() {
        let mut scroller = FlingScroller::new();
        let start = Instant::now();
        scroller.fling(start, 0.0, 2000.0, 0.0, -4000.0, 0.0, 0.0, 1500.0, 2000.0, 4.5, 50.0);

        assert!(scroller.compute_scroll_offset(start + Duration::from_secs(1)));
        assert_eq!(scroller.curr_y(), 1500.0);
        assert!(scroller.is_finished());
    }

    #[test]
    fn test_force_finished_stops_delivery() {
        let mut scroller = FlingScroller::new();
        let start = Instant::now();
        scroller.fling(start, 0.0, 0.0, 500.0, 500.0, 0.0, 100.0, 0.0, 100.0, 4.5, 50.0);
        scroller.force_finished();
        assert!(!scroller.compute_scroll_offset(start + Duration::from_millis(16)));
    }

    #[test]
    fn test_zero_velocity_settles_immediately() {
        let mut scroller = FlingScroller::new();
        let start = Instant::now();
        scroller.fling(start, 40.0, 60.0, 0.0, 0.0, 0.0, 100.0, 0.0, 100.0, 4.5, 50.0);

        // One final frame at the start position, then finished.
        assert!(scroller.compute_scroll_offset(start));
        assert_eq!(scroller.curr_x(), 40.0);
        assert_eq!(scroller.curr_y(), 60.0);
        assert!(!scroller.compute_scroll_offset(start + Duration::from_millis(16)));
    }
}
