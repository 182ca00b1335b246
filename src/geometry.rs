//! Points, sizes, and rectangles in logical units, and their grid alignment.
//!
//! [`Point`] and [`Size`] snap per-axis through [`PixelAlign`] — the x and y
//! (or width and height) components never interact. [`Rect`] instead snaps
//! each edge in its own direction, either outward to enclose the input
//! ([`Rect::expanded_to_pixel`]) or inward to be enclosed by it
//! ([`Rect::contracted_to_pixel`]).
//!
//! All types are plain `Copy` values with no invariants enforced: a rect
//! whose `right` is less than its `left` passes through every operation
//! edge-by-edge, uncanonicalized.

use crate::scale::ScaleSource;
use crate::snap::{PixelAlign, Rounding};

/// A position in logical units. Axes are independent for all operations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height in logical units. Axes are independent for all operations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl PixelAlign for Point {
    fn snapped_to_pixel(self, scale: impl ScaleSource, rounding: Rounding) -> Self {
        let scale = scale.scale();
        Self {
            x: self.x.snapped_to_pixel(scale, rounding),
            y: self.y.snapped_to_pixel(scale, rounding),
        }
    }
}

impl PixelAlign for Size {
    fn snapped_to_pixel(self, scale: impl ScaleSource, rounding: Rounding) -> Self {
        let scale = scale.scale();
        Self {
            width: self.width.snapped_to_pixel(scale, rounding),
            height: self.height.snapped_to_pixel(scale, rounding),
        }
    }
}

/// An axis-aligned rectangle in logical units, stored by its edges.
///
/// Nothing requires `right >= left` or `bottom >= top`: snapping operates on
/// each edge independently and never canonicalizes, so degenerate and
/// inverted rects pass through unchanged in shape.
///
/// ```
/// use pixelsnap::{Rect, Scale};
///
/// let r = Rect::new(0.1, 0.1, 0.9, 0.9);
/// assert_eq!(r.expanded_to_pixel(Scale::new(2.0)), Rect::new(0.0, 0.0, 1.0, 1.0));
/// assert_eq!(r.contracted_to_pixel(Scale::new(2.0)), Rect::new(0.5, 0.5, 0.5, 0.5));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Minimum x edge.
    pub left: f64,
    /// Minimum y edge.
    pub top: f64,
    /// Maximum x edge.
    pub right: f64,
    /// Maximum y edge.
    pub bottom: f64,
}

impl Rect {
    /// Create a rect from its edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rect from a top-left origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    /// Top-left corner.
    pub const fn origin(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Extent as a size. Negative for inverted rects.
    pub const fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// `right - left`.
    pub const fn width(self) -> f64 {
        self.right - self.left
    }

    /// `bottom - top`.
    pub const fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// The smallest pixel-aligned rect that encloses this one.
    ///
    /// Left and top are floored, right and bottom are ceiled, each edge
    /// independently. The result never shrinks below the input. Identity
    /// when the scale does not snap.
    pub fn expanded_to_pixel(self, scale: impl ScaleSource) -> Self {
        let scale = scale.scale();
        Self {
            left: self.left.floored_to_pixel(scale),
            top: self.top.floored_to_pixel(scale),
            right: self.right.ceiled_to_pixel(scale),
            bottom: self.bottom.ceiled_to_pixel(scale),
        }
    }

    /// The largest pixel-aligned rect enclosed by this one.
    ///
    /// Left and top are ceiled, right and bottom are floored. The result
    /// never grows beyond the input; a rect smaller than one pixel can
    /// contract to zero or negative size, which is returned as-is rather
    /// than guarded. Identity when the scale does not snap.
    pub fn contracted_to_pixel(self, scale: impl ScaleSource) -> Self {
        let scale = scale.scale();
        Self {
            left: self.left.ceiled_to_pixel(scale),
            top: self.top.ceiled_to_pixel(scale),
            right: self.right.floored_to_pixel(scale),
            bottom: self.bottom.floored_to_pixel(scale),
        }
    }
}
