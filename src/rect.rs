use glam::Vec2;

/// A rectangle defined by two opposite corners.
///
/// The rectangle is axis aligned, and defined by its minimum and maximum
/// coordinates, stored in [`Rect::min`] and [`Rect::max`], respectively.
/// Construction never normalizes the corners: the values are stored exactly as
/// given, so an inverted rect (`min` greater than `max` on one or both axes)
/// is a legal value, and every derived quantity follows directly from the raw
/// fields. An inverted axis yields a negative [`diagonal`] component and makes
/// [`contains`] false for every point. Use [`Rect::from_opposite_corners`]
/// when the ordering of the two corners is not known up front.
///
/// [`diagonal`]: Rect::diagonal
/// [`contains`]: Rect::contains
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum corner point of the rect.
    pub min: Vec2,
    /// The maximum corner point of the rect.
    pub max: Vec2,
}

impl Rect {
    /// An empty rect, with its minimum corner at `+infinity` and its maximum
    /// corner at `-infinity`.
    ///
    /// Folding corners into this rect with componentwise min/max leaves any
    /// other operand unchanged, which makes it the seed value for
    /// [`common_bounds`] and [`bounding_box`], and the result both return for
    /// an empty input.
    ///
    /// [`common_bounds`]: crate::common_bounds
    /// [`bounding_box`]: crate::bounding_box
    pub const EMPTY: Self = Self {
        min: Vec2::INFINITY,
        max: Vec2::NEG_INFINITY,
    };

    /// Create a new rectangle from the coordinates of its two corners.
    ///
    /// Equivalent to [`Rect::from_corners`] with `(x0, y0)` as the minimum
    /// corner and `(x1, y1)` as the maximum corner, and like it, stores the
    /// coordinates without reordering them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::Rect;
    /// let r = Rect::new(0., 4., 10., 6.); // w=10 h=2
    /// ```
    #[inline]
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::from_corners(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Create a new rectangle from its minimum and maximum corner points.
    ///
    /// The corners are stored verbatim. Passing corners with `min` greater
    /// than `max` on an axis produces an inverted rect; see the type docs for
    /// what that implies.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// // Unit rect from [0,0] to [1,1]
    /// let r = Rect::from_corners(Vec2::ZERO, Vec2::ONE); // w=1 h=1
    /// ```
    #[inline]
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a new rectangle from two opposite corner points in any order.
    ///
    /// The two points do not need to be the minimum and/or maximum corners;
    /// each coordinate is sorted into the right field, so the result is never
    /// inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::from_opposite_corners(Vec2::ONE, Vec2::ZERO);
    /// assert_eq!(r.min, Vec2::ZERO);
    /// assert_eq!(r.max, Vec2::ONE);
    /// ```
    #[inline]
    pub fn from_opposite_corners(p0: Vec2, p1: Vec2) -> Self {
        Self {
            min: p0.min(p1),
            max: p0.max(p1),
        }
    }

    /// Create a new rectangle from its center and half-extent along each axis.
    ///
    /// `span` is the distance from the center to each corner, not the full
    /// size. A negative span component produces an inverted rect, consistent
    /// with the arithmetic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::from_center_span(Vec2::new(1., 2.), Vec2::new(3., 4.));
    /// assert_eq!(r, Rect::new(-2., -2., 4., 6.));
    /// ```
    #[inline]
    pub fn from_center_span(center: Vec2, span: Vec2) -> Self {
        Self::from_corners(center - span, center + span)
    }

    /// Create a new square rectangle from its center and inner radius.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::from_center_radius(Vec2::new(1., 2.), 3.);
    /// assert_eq!(r, Rect::new(-2., -1., 4., 5.));
    /// ```
    #[inline]
    pub fn from_center_radius(center: Vec2, radius: f32) -> Self {
        Self::from_center_span(center, Vec2::splat(radius))
    }

    /// Check if the rectangle is empty, i.e. has zero or negative extent on
    /// some axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::from_corners(Vec2::ZERO, Vec2::new(0., 1.)); // w=0 h=1
    /// assert!(r.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.cmpge(self.max).any()
    }

    /// Rectangle width (max.x - min.x); negative for a rect inverted on x.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height (max.y - min.y); negative for a rect inverted on y.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// The center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::new(0., 0., 5., 1.); // w=5 h=1
    /// assert_eq!(r.center(), Vec2::new(2.5, 0.5));
    /// ```
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// The diagonal of the rectangle, the vector from `min` to `max`.
    ///
    /// The diagonal is signed: for an inverted rect the affected components
    /// come out negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::new(-8., -7., -2., -1.);
    /// assert_eq!(r.diagonal(), Vec2::new(6., 6.));
    /// ```
    #[inline]
    pub fn diagonal(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if a point lies within this rectangle, inclusive of its edges.
    ///
    /// A rect inverted on an axis contains no points at all: nothing can be
    /// both above `min` and below `max` there.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::Rect;
    /// let r = Rect::new(0., 0., 5., 1.); // w=5 h=1
    /// assert!(r.contains(r.center()));
    /// assert!(r.contains(r.min));
    /// assert!(r.contains(r.max));
    /// ```
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point.cmpge(self.min) & point.cmple(self.max)).all()
    }

    /// Build a new rectangle scaled by `factor` about this rectangle's center.
    ///
    /// A factor of `1.` returns the rect unchanged, `0.` collapses it onto its
    /// center point, and `2.` doubles the extent on each axis while keeping
    /// the center fixed. Negative factors get no special handling; they flip
    /// the rect quadrant-wise around the center.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::new(0., 1., 2., 3.);
    /// assert_eq!(r.expand(2.), Rect::new(-1., 0., 3., 4.));
    /// assert_eq!(r.expand(2.).center(), r.center());
    /// ```
    #[inline]
    pub fn expand(&self, factor: f32) -> Self {
        let center = self.center();
        let span = self.diagonal() * (factor / 2.);
        Self::from_corners(center - span, center + span)
    }

    /// Build a new rectangle padded by `amount` on each side.
    ///
    /// The padding is independent per axis: `amount.x` is added on the left
    /// and right, `amount.y` on the bottom and top. Negative components shrink
    /// that axis instead, with no clamping when the sides cross.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::new(0., 0., 1., 1.);
    /// assert_eq!(r.grow(Vec2::new(2., 0.)), Rect::new(-2., 0., 3., 1.));
    /// ```
    #[inline]
    pub fn grow(&self, amount: Vec2) -> Self {
        Self::from_corners(self.min - amount, self.max + amount)
    }

    /// Build a new rectangle shifted by `displacement`, with the same size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rect2d::{Rect, Vec2};
    /// let r = Rect::new(0., 1., 2., 3.);
    /// assert_eq!(r.translate(Vec2::new(1., 1.)), Rect::new(1., 2., 3., 4.));
    /// ```
    #[inline]
    pub fn translate(&self, displacement: Vec2) -> Self {
        Self::from_corners(self.min + displacement, self.max + displacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constructors_agree() {
        let r = Rect::new(0., 1., 2., 3.);
        assert_eq!(r, Rect::from_corners(Vec2::new(0., 1.), Vec2::new(2., 3.)));
        assert_eq!(r.min, Vec2::new(0., 1.));
        assert_eq!(r.max, Vec2::new(2., 3.));
    }

    #[test]
    fn corners_are_stored_verbatim() {
        let r = Rect::from_corners(Vec2::ONE, Vec2::ZERO);
        assert_eq!(r.min, Vec2::ONE);
        assert_eq!(r.max, Vec2::ZERO);
        assert!(r.is_empty());
    }

    #[test]
    fn opposite_corners_are_sorted() {
        let r = Rect::from_opposite_corners(Vec2::new(5., -1.), Vec2::new(2., 3.));
        assert_eq!(r, Rect::new(2., -1., 5., 3.));
        assert!(!r.is_empty());
    }

    #[test]
    fn center() {
        assert_eq!(Rect::new(0., 0., 0., 0.).center(), Vec2::ZERO);
        assert_eq!(Rect::new(0., 0., 1., 1.).center(), Vec2::splat(0.5));
        assert_eq!(Rect::new(0., 1., 2., 3.).center(), Vec2::new(1., 2.));
        assert_eq!(Rect::new(-8., -7., -2., -1.).center(), Vec2::new(-5., -4.));
    }

    #[test]
    fn diagonal_is_signed() {
        assert_eq!(Rect::new(0., 0., 0., 0.).diagonal(), Vec2::ZERO);
        assert_eq!(Rect::new(0., 0., 1., 1.).diagonal(), Vec2::ONE);
        assert_eq!(Rect::new(-8., -7., -2., -1.).diagonal(), Vec2::new(6., 6.));
        assert_eq!(Rect::new(1., 1., 0., 0.).diagonal(), Vec2::new(-1., -1.));
    }

    #[test]
    fn width_height() {
        let r = Rect::new(0., -1., 5., 1.);
        assert_abs_diff_eq!(r.width(), 5.);
        assert_abs_diff_eq!(r.height(), 2.);
        assert_abs_diff_eq!(Rect::new(3., 0., 1., 0.).width(), -2.);
    }

    #[test]
    fn contains_includes_boundary() {
        let unit = Rect::new(0., 0., 1., 1.);
        assert!(unit.contains(Vec2::ZERO));
        assert!(unit.contains(Vec2::ONE));
        assert!(unit.contains(Vec2::splat(0.5)));
        assert!(!unit.contains(Vec2::splat(-1.)));

        let zero = Rect::new(0., 0., 0., 0.);
        assert!(zero.contains(Vec2::ZERO));
        assert!(!zero.contains(Vec2::splat(0.5)));

        let r = Rect::new(-8., -7., -0.5, -0.5);
        assert!(r.contains(Vec2::splat(-1.)));
        assert!(!r.contains(Vec2::ZERO));
    }

    #[test]
    fn inverted_rect_contains_nothing() {
        let r = Rect::new(1., 0., 0., 1.); // min.x > max.x
        assert!(!r.contains(Vec2::splat(0.5)));
        assert!(!r.contains(Vec2::ZERO));
        assert!(!r.contains(Vec2::ONE));
    }

    #[test]
    fn expand_scales_about_the_center() {
        let r = Rect::new(0., 1., 2., 3.);
        assert_eq!(r.expand(1.), r);

        let collapsed = r.expand(0.);
        assert_eq!(collapsed.min, r.center());
        assert_eq!(collapsed.max, r.center());

        let doubled = r.expand(2.);
        assert_eq!(doubled, Rect::new(-1., 0., 3., 4.));
        assert_eq!(doubled.center(), r.center());
        assert_eq!(doubled.diagonal(), r.diagonal() * 2.);
    }

    #[test]
    fn grow_pads_each_axis_independently() {
        let r = Rect::new(0., 0., 1., 1.);
        assert_eq!(r.grow(Vec2::new(2., 0.)), Rect::new(-2., 0., 3., 1.));
        assert_eq!(r.grow(Vec2::new(0., 2.)), Rect::new(0., -2., 1., 3.));
        assert_eq!(r.grow(Vec2::new(-0.25, 0.)), Rect::new(0.25, 0., 0.75, 1.));
    }

    #[test]
    fn grow_twice_is_grow_by_the_sum() {
        let r = Rect::new(0., 0., 1., 1.);
        let (a, b) = (Vec2::new(1., 2.), Vec2::new(3., -1.));
        assert_eq!(r.grow(a).grow(b), r.grow(a + b));
    }

    #[test]
    fn translate_preserves_size() {
        let r = Rect::new(0., 1., 2., 3.);
        assert_eq!(r.translate(Vec2::ZERO), r);
        assert_eq!(r.translate(Vec2::new(1., 1.)), Rect::new(1., 2., 3., 4.));

        let (a, b) = (Vec2::new(1., -2.), Vec2::new(-0.5, 4.));
        assert_eq!(r.translate(a).translate(b), r.translate(a + b));
        assert_eq!(r.translate(a).diagonal(), r.diagonal());
    }

    #[test]
    fn from_center_span_cases() {
        let r = Rect::from_center_span(Vec2::new(1., 2.), Vec2::new(3., 4.));
        assert_eq!(r, Rect::new(-2., -2., 4., 6.));
        assert_eq!(r.center(), Vec2::new(1., 2.));

        // A negative span component inverts that axis.
        let inverted = Rect::from_center_span(Vec2::ZERO, Vec2::new(-1., 1.));
        assert_eq!(inverted, Rect::new(1., -1., -1., 1.));
        assert!(inverted.is_empty());
    }

    #[test]
    fn from_center_radius_is_square() {
        let r = Rect::from_center_radius(Vec2::new(1., 2.), 3.);
        assert_eq!(r, Rect::new(-2., -1., 4., 5.));
        assert_abs_diff_eq!(r.width(), r.height());
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::EMPTY.is_empty());
        assert!(!Rect::EMPTY.contains(Vec2::ZERO));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn serde_round_trip() {
        let r = Rect::new(0., 1., 2., 3.);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(serde_json::from_str::<Rect>(&json).unwrap(), r);
    }
}
