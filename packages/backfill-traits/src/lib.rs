//! Shared types for backfill.
//!
//! This crate holds the data the geometry engine consumes: resolved CSS value objects
//! (lengths, angles, colors, positions), the per-element style model (borders, radii,
//! gradients, shadows, border images) and the element bounds with its reentrant lock.
//!
//! Everything here is produced by the host's CSS parsing and layout-query collaborators
//! and read by `backfill-paint`.

mod angle;
mod bounds;
mod cache;
mod color;
mod error;
mod length;
mod position;
pub mod style;

pub use angle::{Angle, AngleUnit};
pub use bounds::{Bounds, BoundsInfo, BoundsLock, BoundsSource};
pub use cache::{StyleValueCache, ValueCache};
pub use color::Color;
pub use error::ValueParseError;
pub use length::{Length, LengthUnit};
pub use position::{HorizontalKeyword, Position, PositionComponent, VerticalKeyword};

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        // Adding zero turns -0.0 into 0.0
        normalized + 0.0
    }
}
