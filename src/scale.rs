//! Scale factors and the capability for reading one from an environment.
//!
//! A [`Scale`] is pixels per logical unit. A positive factor defines a pixel
//! grid with spacing `1 / factor` logical units; zero (or any non-positive
//! value) means "no pixel grid" and every snapping operation becomes the
//! identity. That convention lets callers pass "scale unknown" straight
//! through without special-casing at each call site.
//!
//! [`ScaleSource`] abstracts where the factor comes from — a literal, a
//! physical display, a rendering surface. The core never queries a live
//! environment itself; it only reads this one number.

/// Pixels per logical unit.
///
/// A factor of `2.0` is a typical HiDPI display: two device pixels per
/// logical unit, grid spacing 0.5. [`Scale::NONE`] (zero) disables snapping.
///
/// ```
/// use pixelsnap::Scale;
///
/// let hidpi = Scale::new(2.0);
/// assert!(hidpi.snaps());
/// assert_eq!(hidpi.grid_spacing(), Some(0.5));
///
/// assert!(!Scale::NONE.snaps());
/// assert_eq!(Scale::NONE.grid_spacing(), None);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scale(f64);

impl Scale {
    /// No pixel grid. Every snapping operation returns its input unchanged.
    pub const NONE: Self = Self(0.0);

    /// Create a scale from a pixels-per-logical-unit factor.
    ///
    /// Non-positive factors are accepted and mean "snapping disabled";
    /// they are not an error.
    pub const fn new(pixels_per_point: f64) -> Self {
        Self(pixels_per_point)
    }

    /// The raw factor: device pixels per logical unit.
    pub const fn pixels_per_point(self) -> f64 {
        self.0
    }

    /// Whether this scale defines a pixel grid.
    ///
    /// False for zero and negative factors (and for NaN, which fails the
    /// comparison) — all of which make snapping the identity.
    pub fn snaps(self) -> bool {
        self.0 > 0.0
    }

    /// Grid spacing in logical units (`1 / factor`), or `None` when
    /// snapping is disabled.
    pub fn grid_spacing(self) -> Option<f64> {
        if self.snaps() { Some(1.0 / self.0) } else { None }
    }
}

impl From<f64> for Scale {
    fn from(pixels_per_point: f64) -> Self {
        Self::new(pixels_per_point)
    }
}

/// A capability that yields the current scale factor when read.
///
/// Snapping entry points take `impl ScaleSource`, so a call site can pass a
/// literal [`Scale`], a bare `f64`, or a closure bound to an environment
/// object (a display, a window's backing surface). The read happens once per
/// operation; the core imposes no other contract on it.
///
/// ```
/// use pixelsnap::{PixelAlign, Scale, ScaleSource};
///
/// // A literal:
/// assert_eq!(0.6_f64.floored_to_pixel(2.0), 0.5);
///
/// // An environment adapter:
/// let backing_surface = || Scale::new(2.0);
/// assert_eq!(0.6_f64.floored_to_pixel(backing_surface), 0.5);
/// ```
pub trait ScaleSource {
    /// Read the current pixels-per-logical-unit factor.
    fn scale(&self) -> Scale;
}

impl ScaleSource for Scale {
    fn scale(&self) -> Scale {
        *self
    }
}

impl ScaleSource for f64 {
    fn scale(&self) -> Scale {
        Scale::new(*self)
    }
}

impl<F: Fn() -> Scale> ScaleSource for F {
    fn scale(&self) -> Scale {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_factor_snaps() {
        assert!(Scale::new(1.0).snaps());
        assert!(Scale::new(2.0).snaps());
        assert!(Scale::new(0.5).snaps());
    }

    #[test]
    fn non_positive_factor_does_not_snap() {
        assert!(!Scale::NONE.snaps());
        assert!(!Scale::new(0.0).snaps());
        assert!(!Scale::new(-1.0).snaps());
        assert!(!Scale::new(f64::NAN).snaps());
    }

    #[test]
    fn grid_spacing_is_reciprocal() {
        assert_eq!(Scale::new(2.0).grid_spacing(), Some(0.5));
        assert_eq!(Scale::new(0.5).grid_spacing(), Some(2.0));
        assert_eq!(Scale::new(1.0).grid_spacing(), Some(1.0));
    }

    #[test]
    fn grid_spacing_none_when_disabled() {
        assert_eq!(Scale::NONE.grid_spacing(), None);
        assert_eq!(Scale::new(-2.0).grid_spacing(), None);
    }

    #[test]
    fn from_f64() {
        let s: Scale = 2.0.into();
        assert_eq!(s.pixels_per_point(), 2.0);
    }

    #[test]
    fn literal_sources_yield_themselves() {
        assert_eq!(Scale::new(3.0).scale(), Scale::new(3.0));
        assert_eq!(ScaleSource::scale(&2.0_f64), Scale::new(2.0));
    }

    #[test]
    fn closure_source_is_read_at_call_time() {
        use core::cell::Cell;
        let current = Cell::new(1.0);
        let surface = || Scale::new(current.get());
        assert_eq!(surface.scale(), Scale::new(1.0));
        current.set(2.0);
        assert_eq!(surface.scale(), Scale::new(2.0));
    }
}
