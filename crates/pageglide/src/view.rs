//! Interfaces the motion core consumes from the owning viewer surface.

/// A point in viewer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scroll axis driven by a single-axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Capability set the motion core needs from the viewer surface.
///
/// The viewer owns current offsets, zoom and page layout; the motion core
/// only drives them over time. Offsets and zoom factors are passed through
/// verbatim, including out-of-range values: clamping is the viewer's
/// responsibility.
pub trait DocumentView {
    /// Move the viewport to an absolute offset.
    fn move_to(&mut self, x: f32, y: f32);

    /// Apply a zoom level, keeping `center` fixed on screen.
    fn zoom_centered_to(&mut self, zoom: f32, center: Point);

    /// Cheap visible-region load for the current offset.
    fn load_page_by_offset(&mut self);

    /// Full-quality reload of the visible pages.
    fn load_pages(&mut self);

    /// Align the viewport to the nearest page boundary.
    fn perform_page_snap(&mut self);

    /// Whether the document scrolls vertically (page flings follow this).
    fn is_swipe_vertical(&self) -> bool;

    fn current_x_offset(&self) -> f32;

    fn current_y_offset(&self) -> f32;

    /// The scroll-position indicator, if the viewer has one attached.
    fn scroll_handle(&mut self) -> Option<&mut dyn ScrollHandle>;
}

/// Scroll-position indicator widget attached to a viewer.
///
/// Owned and updated by the viewer; the motion core only asks it to hide
/// once a motion settles.
pub trait ScrollHandle {
    /// Update the indicator to a relative position in [0, 1].
    fn set_scroll(&mut self, position: f32);

    /// Update the displayed page number.
    fn set_page_num(&mut self, page: usize);

    /// Whether the indicator is currently visible.
    fn shown(&self) -> bool;

    fn show(&mut self);

    fn hide(&mut self);

    /// Hide after a short idle delay.
    fn hide_delayed(&mut self);
}
