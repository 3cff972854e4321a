//! Tilegrid - Tile shape layout engine for tilemap charts
//!
//! A tilemap is a heatmap variant where the tile shapes are configurable:
//! hexagons, diamonds, circles or plain heatmap squares. This crate computes
//! the pixel-space geometry for every point of such a series:
//!
//! - Per-shape translators that turn grid `(x, y)` coordinates into polygon
//!   paths or circle descriptors
//! - Axis padding negotiation, so tiles near the data boundary are not
//!   clipped by the plot area
//! - Halo outlines for hover/selection highlighting
//! - Data-label anchor alignment per shape
//!
//! The crate owns no axis state and performs no rendering or hit-testing; it
//! produces renderer-agnostic geometry descriptors for a host pipeline.
//!
//! # Example
//!
//! ```ignore
//! use tilegrid::*;
//!
//! let mut series = TilemapSeries::new(TilemapOptions::default())?;
//! series.set_points(vec![
//!     TilePoint::new(0.0, 0.0, 3.0),
//!     TilePoint::new(1.0, 0.0, 7.0),
//! ]);
//!
//! let x_axis = Axis::horizontal(0.0, 10.0, 400.0);
//! let y_axis = Axis::vertical(0.0, 10.0, 300.0);
//! let xt = finalize_translation(&x_axis, &[&series]);
//! let yt = finalize_translation(&y_axis, &[&series]);
//!
//! series.translate(&xt, &yt);
//! for point in series.points() {
//!     // point.geometry is ready for the renderer
//! }
//! ```

// Core primitives
mod error;
mod path;

// Axis translation and padding negotiation
mod axis;

// Series state
mod point;
mod series;

// Shape translators
pub mod shape;

// Data-label alignment delegates
mod label;

// Re-exports
pub use axis::*;
pub use error::*;
pub use path::*;
pub use point::*;
pub use series::*;
pub use shape::{TilePadding, TileShape};
