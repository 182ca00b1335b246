//! Deterministic pixel-grid alignment for points, sizes, and rectangles.
//!
//! Layout happens in logical units; displays have pixels. Given a scale
//! factor (pixels per logical unit), this crate computes the nearest
//! grid-representable value for a coordinate, rounding in a chosen
//! direction. Pure geometry — no rendering, no allocations, `no_std`
//! compatible.
//!
//! # Modules
//!
//! - [`scale`] — [`Scale`] factors and the [`ScaleSource`] capability for
//!   reading one from an environment
//! - [`snap`] — scalar snapping core: [`Rounding`] directions and the
//!   [`PixelAlign`] trait
//! - [`geometry`] — [`Point`], [`Size`], [`Rect`] and rect expansion /
//!   contraction
//!
//! # Example
//!
//! ```
//! use pixelsnap::{PixelAlign, Rect, Scale};
//!
//! let hidpi = Scale::new(2.0); // grid spacing 0.5 logical units
//!
//! // Scalars snap directionally:
//! assert_eq!(0.6_f64.floored_to_pixel(hidpi), 0.5);
//!
//! // Rects snap per edge, outward or inward:
//! let dirty = Rect::new(0.1, 0.1, 0.9, 0.9);
//! assert_eq!(dirty.expanded_to_pixel(hidpi), Rect::new(0.0, 0.0, 1.0, 1.0));
//!
//! // A zero scale means "no grid" and every operation is the identity:
//! assert_eq!(0.6_f64.floored_to_pixel(Scale::NONE), 0.6);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod scale;
pub mod snap;

pub use geometry::{Point, Rect, Size};
pub use scale::{Scale, ScaleSource};
pub use snap::{PixelAlign, Rounding, snap};
