//! Per-point tile state.
//!
//! A [`TilePoint`] carries the grid coordinates and value supplied by the
//! host, plus the geometry derived from them on each translate pass. Derived
//! fields have no identity outside a pass: every pass overwrites all of them,
//! so nothing stale survives an option or shape change.

use crate::path::Path;
use glam::Vec2;

/// Renderer-consumable geometry for one tile.
#[derive(Debug, Clone, PartialEq)]
pub enum TileGeometry {
    /// A polygon outline as explicit path commands.
    Path(Path),
    /// A circle, center and radius in pixels.
    Circle {
        /// Center point
        center: Vec2,
        /// Radius in pixels
        radius: f32,
    },
}

/// Pixel coordinates cached by a translate pass for the halo generator.
///
/// Stored in f64 so halo expansion works on the exact translated values
/// rather than the f32 geometry handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HaloAnchor {
    /// Flat-top hexagon edge coordinates, left to right / top to bottom.
    Hexagon {
        /// Left vertex x
        x1: f64,
        /// Left edge x of the flat top and bottom
        x2: f64,
        /// Right edge x of the flat top and bottom
        x3: f64,
        /// Right vertex x
        x4: f64,
        /// Top edge y
        y1: f64,
        /// Center y
        y2: f64,
        /// Bottom edge y
        y3: f64,
    },
    /// Diamond corner coordinates.
    Diamond {
        /// Left corner x
        x1: f64,
        /// Center x
        x2: f64,
        /// Right corner x
        x3: f64,
        /// Top corner y
        y1: f64,
        /// Center y
        y2: f64,
        /// Bottom corner y
        y3: f64,
    },
    /// Circle radius in pixels.
    Circle {
        /// Shared series radius
        radius: f64,
    },
    /// Padded heatmap cell rect: position and size in pixels.
    Cell {
        /// Left edge x
        x: f64,
        /// Top edge y
        y: f64,
        /// Cell width
        width: f64,
        /// Cell height
        height: f64,
    },
}

/// A single tile in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePoint {
    /// Grid column.
    pub x: f64,
    /// Grid row (may be fractional for offset grids).
    pub y: f64,
    /// The data value; drives color, not geometry.
    pub value: f64,
    /// Per-point override of the series point padding.
    pub point_padding: Option<f64>,

    /// Pixel center of the tile, set by translate.
    ///
    /// Used by hosts for tooltip positioning and spatial indexing.
    pub plot: Option<Vec2>,
    /// Tile geometry, set by translate.
    pub geometry: Option<TileGeometry>,
    /// Cached coordinates for halo generation, set by translate.
    pub halo_anchor: Option<HaloAnchor>,
}

impl TilePoint {
    /// Create a new point at the given grid position.
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self {
            x,
            y,
            value,
            point_padding: None,
            plot: None,
            geometry: None,
            halo_anchor: None,
        }
    }

    /// Override the series-level point padding for this point only.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.point_padding = Some(padding);
        self
    }
}
