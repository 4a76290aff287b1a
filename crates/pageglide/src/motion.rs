//! Motion state machine for the viewer surface.
//!
//! A viewer has three sources of viewport motion: value-interpolated
//! animations (axis pans, zoom), physics-based fling decay, and page-snap
//! settling. [`MotionController`] coordinates them so that at most one
//! drives the viewport at any instant, and so that every motion fires its
//! settle side effects exactly once no matter how it ends (completes, is
//! cancelled, or is superseded by a new gesture).
//!
//! Per motion instance the lifecycle is `Idle → Running → {Completed |
//! Cancelled} → Idle`; starting a new motion forces the prior one through
//! `Cancelled` before the new one is constructed, so side effects of the
//! two never interleave.

use std::time::{Duration, Instant};

use crate::config::MotionConfig;
use crate::easing::EasingType;
use crate::fling::FlingScroller;
use crate::timing::{is_complete, lerp, progress};
use crate::view::{Axis, DocumentView, Point};

/// What an in-flight interpolation drives.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MotionKind {
    AxisX,
    AxisY,
    Zoom { center: Point },
}

/// A single in-flight interpolated motion.
#[derive(Debug, Clone, Copy)]
struct ActiveMotion {
    kind: MotionKind,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingType,
}

/// Drives the viewport of a [`DocumentView`] from A to B.
///
/// The controller owns all transient motion state; the viewer keeps
/// ownership of offsets, zoom and layout. The host's input layer calls the
/// `start_*` operations, and its draw loop calls [`tick`](Self::tick) and
/// [`step_fling`](Self::step_fling) once per frame while
/// [`needs_tick`](Self::needs_tick) reports pending work.
///
/// Single-threaded by design: all stepping happens on the thread that owns
/// the viewer's draw cycle, and cancellation takes effect before the
/// cancelling call returns.
#[derive(Debug)]
pub struct MotionController {
    config: MotionConfig,
    motion: Option<ActiveMotion>,
    scroller: FlingScroller,
    flinging: bool,
    page_flinging: bool,
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            motion: None,
            scroller: FlingScroller::new(),
            flinging: false,
            page_flinging: false,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(MotionConfig::default())
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Update configuration; applies to motions started afterwards.
    pub fn set_config(&mut self, config: MotionConfig) {
        self.config = config;
    }

    /// Begin a decelerating interpolation of one scroll axis.
    ///
    /// Any motion already in flight is cancelled first, with its
    /// cancellation side effects, before the new motion is constructed.
    /// `from`/`to` are arbitrary offsets; out-of-range values pass through
    /// to the viewer untouched.
    pub fn start_axis_motion<V: DocumentView>(
        &mut self,
        view: &mut V,
        axis: Axis,
        from: f32,
        to: f32,
    ) {
        self.stop_all(view);
        tracing::debug!("Starting {:?} axis motion: {} -> {}", axis, from, to);
        let kind = match axis {
            Axis::Horizontal => MotionKind::AxisX,
            Axis::Vertical => MotionKind::AxisY,
        };
        self.motion = Some(ActiveMotion {
            kind,
            from,
            to,
            started_at: Instant::now(),
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Begin a decelerating zoom interpolation about a fixed pinch center.
    pub fn start_zoom_motion<V: DocumentView>(
        &mut self,
        view: &mut V,
        center: Point,
        from: f32,
        to: f32,
    ) {
        self.stop_all(view);
        tracing::debug!("Starting zoom motion: {} -> {}", from, to);
        self.motion = Some(ActiveMotion {
            kind: MotionKind::Zoom { center },
            from,
            to,
            started_at: Instant::now(),
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Begin a physics fling from `(start_x, start_y)` with the given
    /// initial velocity, bounded to `[min, max]` per axis.
    ///
    /// Produces no movement by itself; movement comes from the host calling
    /// [`step_fling`](Self::step_fling) once per display refresh.
    #[allow(clippy::too_many_arguments)]
    pub fn start_fling<V: DocumentView>(
        &mut self,
        view: &mut V,
        start_x: f32,
        start_y: f32,
        velocity_x: f32,
        velocity_y: f32,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    ) {
        self.stop_all(view);
        tracing::debug!("Starting fling: velocity ({}, {})", velocity_x, velocity_y);
        self.flinging = true;
        self.scroller.fling(
            Instant::now(),
            start_x,
            start_y,
            velocity_x,
            velocity_y,
            min_x,
            max_x,
            min_y,
            max_y,
            self.config.fling_friction,
            self.config.min_fling_velocity,
        );
    }

    /// Animate the viewport to a page boundary along the scroll axis.
    ///
    /// Rides the same interpolation engine as a drag-release pan, from the
    /// viewer's current offset on the scroll axis to `target_offset`, and
    /// is tagged so completion bookkeeping knows it represents a page
    /// transition. The tag is set after delegation: the supersede-cancel
    /// inside [`start_axis_motion`](Self::start_axis_motion) clears it.
    pub fn start_page_fling<V: DocumentView>(&mut self, view: &mut V, target_offset: f32) {
        if view.is_swipe_vertical() {
            let from = view.current_y_offset();
            self.start_axis_motion(view, Axis::Vertical, from, target_offset);
        } else {
            let from = view.current_x_offset();
            self.start_axis_motion(view, Axis::Horizontal, from, target_offset);
        }
        self.page_flinging = true;
    }

    /// Advance the active interpolation to `now`.
    ///
    /// While in flight, applies the per-kind update: the driven axis moves
    /// to the interpolated value while the other axis holds its current
    /// live value, with a cheap visible-region load; zoom applies the
    /// interpolated level about the pinch center. Once the full duration
    /// has elapsed, the end value goes through the same update path and the
    /// per-kind completion effects fire exactly once. No-op when nothing is
    /// animating.
    pub fn tick<V: DocumentView>(&mut self, view: &mut V, now: Instant) {
        let Some(motion) = self.motion else { return };

        let t = motion.easing.apply(progress(motion.started_at, now, motion.duration));
        let value = lerp(motion.from, motion.to, t);
        apply_update(view, motion.kind, value);

        if is_complete(motion.started_at, now, motion.duration) {
            self.motion = None;
            self.complete_motion(view, motion.kind);
        }
    }

    /// Advance the physics decay by one frame.
    ///
    /// Must be invoked once per display refresh while a fling is active.
    /// While the decay has remaining travel the viewport moves with a cheap
    /// visible-region load. On the first call after the decay has come to
    /// rest, the settle sequence (full reload, indicator hide, page-snap
    /// request) fires exactly once; later calls are no-ops.
    pub fn step_fling<V: DocumentView>(&mut self, view: &mut V, now: Instant) {
        if self.scroller.compute_scroll_offset(now) {
            view.move_to(self.scroller.curr_x(), self.scroller.curr_y());
            view.load_page_by_offset();
        } else if self.flinging {
            // fling finished
            tracing::debug!("Fling finished, settling");
            self.flinging = false;
            view.load_pages();
            hide_handle(view);
            view.perform_page_snap();
        }
    }

    /// Cancel whatever is in flight.
    ///
    /// The active interpolation fires its cancellation side effects; the
    /// decay is force-stopped without firing its natural-end effects. Takes
    /// effect before returning, so a motion started right after never
    /// interleaves with the cancelled one.
    pub fn stop_all<V: DocumentView>(&mut self, view: &mut V) {
        if let Some(motion) = self.motion.take() {
            tracing::debug!("Cancelling active motion");
            self.cancel_motion(view, motion.kind);
        }
        self.stop_fling();
    }

    /// Stop an active fling without relocating the viewport.
    pub fn stop_fling(&mut self) {
        self.flinging = false;
        self.scroller.force_finished();
    }

    /// Whether a fling or page fling is in flight.
    ///
    /// The gesture layer uses this to decide whether a touch should be
    /// treated as "stop motion" rather than a content tap.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.flinging || self.page_flinging
    }

    /// Whether an interpolated motion is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Whether the host loop should keep scheduling high-rate frames.
    #[inline]
    pub fn needs_tick(&self) -> bool {
        self.motion.is_some() || self.flinging
    }

    fn complete_motion<V: DocumentView>(&mut self, view: &mut V, kind: MotionKind) {
        match kind {
            MotionKind::AxisX | MotionKind::AxisY => {
                view.load_pages();
                self.page_flinging = false;
                hide_handle(view);
            }
            MotionKind::Zoom { .. } => {
                view.load_pages();
                view.perform_page_snap();
                hide_handle(view);
            }
        }
    }

    fn cancel_motion<V: DocumentView>(&mut self, view: &mut V, kind: MotionKind) {
        match kind {
            MotionKind::AxisX | MotionKind::AxisY => {
                view.load_pages();
                self.page_flinging = false;
                hide_handle(view);
            }
            // A cancelled zoom does not request a page snap.
            MotionKind::Zoom { .. } => {
                view.load_pages();
                hide_handle(view);
            }
        }
    }
}

fn apply_update<V: DocumentView>(view: &mut V, kind: MotionKind, value: f32) {
    match kind {
        MotionKind::AxisX => {
            let y = view.current_y_offset();
            view.move_to(value, y);
            view.load_page_by_offset();
        }
        MotionKind::AxisY => {
            let x = view.current_x_offset();
            view.move_to(x, value);
            view.load_page_by_offset();
        }
        MotionKind::Zoom { center } => {
            view.zoom_centered_to(value, center);
        }
    }
}

fn hide_handle<V: DocumentView>(view: &mut V) {
    if let Some(handle) = view.scroll_handle() {
        handle.hide_delayed();
    }
}
