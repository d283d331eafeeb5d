#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Axis-aligned 2D rectangle math.
//!
//! The central type is [`Rect`], an axis-aligned box stored as its two corner
//! points, built on top of [`glam`]'s [`Vec2`]. Alongside its constructors,
//! queries and transforms, the crate provides envelope computation over
//! collections: [`common_bounds`] for rectangles and [`bounding_box`] for
//! points.
//!
//! All operations are pure functions over plain `Copy` values; transforms
//! return new rectangles and never touch their input.

mod envelope;
mod rect;

pub use envelope::{bounding_box, common_bounds};
pub use rect::Rect;

pub use glam::Vec2;

/// The `rect2d` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{Rect, Vec2, bounding_box, common_bounds};
}
