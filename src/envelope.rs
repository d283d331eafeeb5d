use glam::Vec2;

use crate::Rect;

/// Returns the smallest rectangle containing every rectangle in `rects`.
///
/// The result's minimum corner is the componentwise minimum over all input
/// minima, and its maximum corner the componentwise maximum over all input
/// maxima, so every corner of every input satisfies [`Rect::contains`] against
/// the result. A single-element slice comes back unchanged.
///
/// An empty slice returns [`Rect::EMPTY`], the inverted rect with infinite
/// corners that the accumulation starts from.
///
/// # Examples
///
/// ```
/// # use rect2d::{Rect, common_bounds};
/// let a = Rect::new(0., 0., 1., 1.);
/// let b = Rect::new(-3., 2., 0.5, 4.);
/// assert_eq!(common_bounds(&[a, b]), Rect::new(-3., 0., 1., 4.));
/// ```
pub fn common_bounds(rects: &[Rect]) -> Rect {
    rects.iter().fold(Rect::EMPTY, |bounds, rect| Rect {
        min: bounds.min.min(rect.min),
        max: bounds.max.max(rect.max),
    })
}

/// Returns the smallest rectangle containing every point in `points`.
///
/// The same componentwise min/max accumulation as [`common_bounds`], applied
/// to the points themselves. A single point yields the degenerate rect with
/// both corners on that point; an empty slice returns [`Rect::EMPTY`].
///
/// # Examples
///
/// ```
/// # use rect2d::{Rect, Vec2, bounding_box};
/// let points = [Vec2::new(0., 0.), Vec2::new(1., 2.), Vec2::new(-3., -4.)];
/// assert_eq!(bounding_box(&points), Rect::new(-3., -4., 1., 2.));
/// ```
pub fn bounding_box(points: &[Vec2]) -> Rect {
    points.iter().fold(Rect::EMPTY, |bounds, &point| Rect {
        min: bounds.min.min(point),
        max: bounds.max.max(point),
    })
}
