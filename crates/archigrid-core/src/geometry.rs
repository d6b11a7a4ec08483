//! Geometric primitives for grid layout.
//!
//! This module provides the geometric types used throughout Archigrid for
//! sizing elements and describing their final placement.
//!
//! # Overview
//!
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Padding values for four sides
//! - [`Rect`] - An integer rectangle, the unit of layout output
//!
//! # Coordinate System
//!
//! Archigrid uses the host diagram's screen coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Places `other` to the right of this size, separated by `gap`.
    ///
    /// The width grows by `gap + other.width` and the height becomes the
    /// taller of the two. An empty (zero) size absorbs the gap so the first
    /// merge of a row never adds leading space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archigrid_core::geometry::Size;
    /// let row = Size::default()
    ///     .merge_horizontal(Size::new(120.0, 55.0), 30.0)
    ///     .merge_horizontal(Size::new(100.0, 70.0), 30.0);
    ///
    /// assert_eq!(row.width(), 250.0);
    /// assert_eq!(row.height(), 70.0);
    /// ```
    pub fn merge_horizontal(self, other: Size, gap: f32) -> Self {
        if self.is_zero() {
            return other;
        }
        Self {
            width: self.width + gap + other.width,
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle with integer coordinates.
///
/// `Rect` is what the layout engine hands back to the host model: the top-left
/// corner plus width and height, in whole diagram units. Intermediate
/// computations are carried out in `f32` and rounded through
/// [`Rect::from_f32`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from floating point values, rounding each to the
    /// nearest integer.
    pub fn from_f32(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            width: width.round() as i32,
            height: height.round() as i32,
        }
    }

    /// Returns the left edge
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the top edge
    pub fn y(self) -> i32 {
        self.y
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns the right edge (`x + width`)
    pub fn right(self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge (`y + height`)
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Returns the horizontal center
    pub fn center_x(self) -> f32 {
        self.x as f32 + self.width as f32 / 2.0
    }

    /// Returns the vertical center
    pub fn center_y(self) -> f32 {
        self.y as f32 + self.height as f32 / 2.0
    }

    /// Returns a copy moved vertically to `y`
    pub fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy moved horizontally to `x`
    pub fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy with a new horizontal extent, keeping the vertical one
    pub fn with_horizontal(self, x: i32, width: i32) -> Self {
        Self { x, width, ..self }
    }

    /// Returns a copy with a new vertical extent, keeping the horizontal one
    pub fn with_vertical(self, y: i32, height: i32) -> Self {
        Self { y, height, ..self }
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archigrid_core::geometry::Rect;
    /// let a = Rect::new(0, 0, 100, 30);
    /// let b = Rect::new(10, 40, 120, 80);
    ///
    /// assert_eq!(a.union(b), Rect::new(0, 0, 130, 120));
    /// ```
    pub fn union(self, other: Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Grows the rectangle outward by the given insets, rounding each side.
    pub fn expand(self, insets: Insets) -> Self {
        Self::from_f32(
            self.x as f32 - insets.left(),
            self.y as f32 - insets.top(),
            self.width as f32 + insets.horizontal_sum(),
            self.height as f32 + insets.vertical_sum(),
        )
    }

    /// Returns true if `other` lies entirely inside this rectangle (edges may touch).
    pub fn contains(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the horizontal spans of the two rectangles share more than an edge.
    pub fn overlaps_horizontally(self, other: Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    /// Rounds every component to the nearest multiple of `unit`.
    ///
    /// A `unit` of zero is treated as one. Snapping is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archigrid_core::geometry::Rect;
    /// let rect = Rect::new(85, 31, 121, 55);
    /// assert_eq!(rect.snap_to_grid(12), Rect::new(84, 36, 120, 60));
    /// ```
    pub fn snap_to_grid(self, unit: u32) -> Self {
        let unit = unit.max(1) as f64;
        let snap = |value: i32| ((value as f64 / unit).round() * unit) as i32;
        Self {
            x: snap(self.x),
            y: snap(self.y),
            width: snap(self.width),
            height: snap(self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_size_new() {
        let size = Size::new(120.0, 55.0);
        assert_eq!(size.width(), 120.0);
        assert_eq!(size.height(), 55.0);
    }

    #[test]
    fn test_size_merge_horizontal_skips_leading_gap() {
        let single = Size::default().merge_horizontal(Size::new(120.0, 55.0), 30.0);
        assert_eq!(single, Size::new(120.0, 55.0));

        let pair = single.merge_horizontal(Size::new(120.0, 55.0), 30.0);
        assert_eq!(pair.width(), 270.0);
        assert_eq!(pair.height(), 55.0);
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::default().is_zero());
        assert!(!Size::new(1.0, 0.0).is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(36.0, 12.0, 12.0, 12.0);
        assert_eq!(insets.horizontal_sum(), 24.0);
        assert_eq!(insets.vertical_sum(), 48.0);
    }

    #[test]
    fn test_rect_from_f32_rounds() {
        let rect = Rect::from_f32(10.4, 10.6, 119.5, 54.49);
        assert_eq!(rect, Rect::new(10, 11, 120, 54));
    }

    #[test]
    fn test_rect_edges_and_centers() {
        let rect = Rect::new(10, 20, 120, 55);
        assert_eq!(rect.right(), 130);
        assert_eq!(rect.bottom(), 75);
        assert_approx_eq!(f32, rect.center_x(), 70.0);
        assert_approx_eq!(f32, rect.center_y(), 47.5);
    }

    #[test]
    fn test_rect_with_setters_preserve_other_axis() {
        let rect = Rect::new(10, 20, 120, 55);
        assert_eq!(rect.with_y(99), Rect::new(10, 99, 120, 55));
        assert_eq!(rect.with_x(-4), Rect::new(-4, 20, 120, 55));
        assert_eq!(rect.with_horizontal(0, 300), Rect::new(0, 20, 300, 55));
        assert_eq!(rect.with_vertical(5, 200), Rect::new(10, 5, 120, 200));
    }

    #[test]
    fn test_rect_union_and_expand() {
        let a = Rect::new(100, 100, 120, 55);
        let b = Rect::new(250, 180, 120, 55);
        let union = a.union(b);
        assert_eq!(union, Rect::new(100, 100, 270, 135));

        let wrapped = union.expand(Insets::new(36.0, 12.0, 12.0, 12.0));
        assert_eq!(wrapped, Rect::new(88, 64, 294, 183));
        assert!(wrapped.contains(a));
        assert!(wrapped.contains(b));
        assert!(!a.contains(wrapped));
    }

    #[test]
    fn test_rect_overlaps_horizontally() {
        let a = Rect::new(0, 0, 100, 10);
        let touching = Rect::new(100, 50, 100, 10);
        let overlapping = Rect::new(99, 50, 100, 10);

        assert!(!a.overlaps_horizontally(touching));
        assert!(a.overlaps_horizontally(overlapping));
    }

    #[test]
    fn test_snap_to_grid_zero_unit_is_identity() {
        let rect = Rect::new(13, -7, 121, 55);
        assert_eq!(rect.snap_to_grid(0), rect);
        assert_eq!(rect.snap_to_grid(1), rect);
    }

    proptest! {
        #[test]
        fn snap_to_grid_is_idempotent(
            x in -5000i32..5000,
            y in -5000i32..5000,
            width in 0i32..2000,
            height in 0i32..2000,
            unit in 0u32..64,
        ) {
            let once = Rect::new(x, y, width, height).snap_to_grid(unit);
            prop_assert_eq!(once.snap_to_grid(unit), once);
        }

        #[test]
        fn snap_to_grid_lands_on_multiples(
            x in -5000i32..5000,
            y in -5000i32..5000,
            unit in 1u32..64,
        ) {
            let snapped = Rect::new(x, y, 120, 55).snap_to_grid(unit);
            prop_assert_eq!(snapped.x() % unit as i32, 0);
            prop_assert_eq!(snapped.y() % unit as i32, 0);
            prop_assert!((snapped.x() - x).abs() <= unit as i32 / 2 + 1);
        }
    }
}
