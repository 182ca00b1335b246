//! Scalar pixel snapping — the core every higher operation reduces to.
//!
//! A coordinate in logical units is multiplied by the scale factor, rounded
//! to an integer pixel index in the requested direction, and divided back.
//! With a non-positive scale there is no grid, and every operation returns
//! its input unchanged.
//!
//! # Example
//!
//! ```
//! use pixelsnap::{PixelAlign, Scale};
//!
//! // At 2x the grid spacing is 0.5 logical units.
//! assert_eq!(0.6_f64.floored_to_pixel(Scale::new(2.0)), 0.5);
//! assert_eq!(0.4_f64.ceiled_to_pixel(Scale::new(2.0)), 0.5);
//! assert_eq!(0.4_f64.rounded_to_pixel(Scale::new(2.0)), 0.5);
//!
//! // No grid: identity, regardless of direction.
//! assert_eq!(0.6_f64.floored_to_pixel(Scale::NONE), 0.6);
//! ```

use num_traits::Float;

use crate::scale::{Scale, ScaleSource};

/// Which grid line to pick when a coordinate falls between two.
///
/// Applied to the coordinate *after* scaling to pixel space, so `Down` and
/// `Up` are in pixel-index order, not magnitude order (for negative
/// coordinates `Down` still moves toward negative infinity).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward negative infinity (floor).
    Down,
    /// Toward positive infinity (ceil).
    Up,
    /// To the nearest pixel, ties away from zero.
    ///
    /// Away-from-zero (not banker's rounding) keeps negative coordinates
    /// symmetric with positive ones: `0.25 @ 2x → 0.5` and
    /// `-0.25 @ 2x → -0.5`.
    Nearest,
}

impl Rounding {
    /// Round an already-scaled (pixel-space) value to an integer.
    pub fn apply<T: Float>(self, value: T) -> T {
        match self {
            Self::Down => value.floor(),
            Self::Up => value.ceil(),
            Self::Nearest => value.round(),
        }
    }
}

fn snap_scaled<T: Float>(value: T, pixels_per_point: T, rounding: Rounding) -> T {
    if pixels_per_point > T::zero() {
        rounding.apply(value * pixels_per_point) / pixels_per_point
    } else {
        value
    }
}

/// Snap a scalar coordinate to the pixel grid in the given direction.
///
/// The free-function form of [`PixelAlign::snapped_to_pixel`]; the trait
/// methods all funnel here.
pub fn snap(value: f64, scale: impl ScaleSource, rounding: Rounding) -> f64 {
    snap_scaled(value, scale.scale().pixels_per_point(), rounding)
}

/// Alignment of a value to the pixel grid of a [`Scale`].
///
/// Implemented per-axis for [`Point`](crate::Point) and
/// [`Size`](crate::Size); axes never interact. For rectangles, see
/// [`Rect::expanded_to_pixel`](crate::Rect::expanded_to_pixel) and
/// [`Rect::contracted_to_pixel`](crate::Rect::contracted_to_pixel), which
/// snap edges in opposing directions instead of uniformly.
///
/// Every method is the identity when the scale does not snap
/// ([`Scale::snaps`] is false). NaN and infinite inputs propagate per IEEE
/// 754 arithmetic; they are never rejected.
pub trait PixelAlign: Sized {
    /// Snap to the grid in an explicit direction.
    fn snapped_to_pixel(self, scale: impl ScaleSource, rounding: Rounding) -> Self;

    /// Snap to the nearest grid line at or below (toward -∞).
    fn floored_to_pixel(self, scale: impl ScaleSource) -> Self {
        self.snapped_to_pixel(scale, Rounding::Down)
    }

    /// Snap to the nearest grid line at or above (toward +∞).
    fn ceiled_to_pixel(self, scale: impl ScaleSource) -> Self {
        self.snapped_to_pixel(scale, Rounding::Up)
    }

    /// Snap to the nearest grid line, ties away from zero.
    fn rounded_to_pixel(self, scale: impl ScaleSource) -> Self {
        self.snapped_to_pixel(scale, Rounding::Nearest)
    }
}

impl PixelAlign for f64 {
    fn snapped_to_pixel(self, scale: impl ScaleSource, rounding: Rounding) -> Self {
        snap_scaled(self, scale.scale().pixels_per_point(), rounding)
    }
}

impl PixelAlign for f32 {
    fn snapped_to_pixel(self, scale: impl ScaleSource, rounding: Rounding) -> Self {
        snap_scaled(self, scale.scale().pixels_per_point() as f32, rounding)
    }
}
