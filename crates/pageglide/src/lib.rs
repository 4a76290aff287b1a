//! Motion and interaction core for paged document viewers.
//!
//! `pageglide` turns discrete gestures (drag-release pans, flings,
//! pinch-zooms, programmatic "scroll to page" requests) into continuous,
//! time-based updates of a viewer's scroll offset and zoom level. The
//! viewer surface stays in charge of layout and content; this crate owns
//! how the viewport gets from A to B.
//!
//! The host implements [`DocumentView`] (and optionally [`ScrollHandle`]
//! for a scroll indicator), constructs a [`MotionController`], and drives
//! it from its draw loop:
//!
//! ```ignore
//! let mut controller = MotionController::new(MotionConfig::load()?);
//!
//! // input layer
//! controller.start_fling(&mut view, x, y, vx, vy, min_x, max_x, min_y, max_y);
//!
//! // draw loop, once per frame
//! let now = Instant::now();
//! controller.tick(&mut view, now);
//! controller.step_fling(&mut view, now);
//! ```

pub mod config;
pub mod easing;
pub mod error;
pub mod fling;
pub mod motion;
pub mod timing;
pub mod view;

pub use config::MotionConfig;
pub use easing::EasingType;
pub use error::{Error, Result};
pub use fling::FlingScroller;
pub use motion::MotionController;
pub use view::{Axis, DocumentView, Point, ScrollHandle};
