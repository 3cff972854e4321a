//! Tilemap series facade.
//!
//! The series holds the option set, the tile shape resolved from it, and the
//! point vec. Every geometry operation forwards to the resolved shape; the
//! shape reference is stable across redraws until the options change, which
//! is what the per-pass caches in the shape translators rely on.

use crate::axis::{AxisOrientation, AxisTranslation, SeriesPixelPadding};
use crate::error::TilegridResult;
use crate::path::Path;
use crate::point::TilePoint;
use crate::shape::{TilePadding, TileShape};
use glam::Vec2;

/// Hover halo defaults for a tilemap series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloOptions {
    /// Whether the hover halo is drawn at all.
    pub enabled: bool,
    /// Halo size in pixels.
    pub size: f64,
    /// Halo opacity.
    pub opacity: f64,
}

impl Default for HaloOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 2.0,
            opacity: 0.5,
        }
    }
}

/// Options for a tilemap series.
#[derive(Debug, Clone, PartialEq)]
pub struct TilemapOptions {
    /// How many x-axis units each column spans.
    pub colsize: f64,
    /// How many y-axis units each row spans.
    pub rowsize: f64,
    /// The pixel padding between tiles.
    pub point_padding: f64,
    /// The tile shape name: `hexagon`, `diamond`, `circle` or `square`.
    pub tile_shape: String,
    /// Hover halo defaults.
    pub halo: HaloOptions,
}

impl Default for TilemapOptions {
    fn default() -> Self {
        Self {
            colsize: 1.0,
            rowsize: 1.0,
            point_padding: 2.0,
            tile_shape: "hexagon".into(),
            halo: HaloOptions::default(),
        }
    }
}

/// A tilemap series: a heatmap with configurable tile shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct TilemapSeries {
    options: TilemapOptions,
    shape: TileShape,
    points: Vec<TilePoint>,
}

impl TilemapSeries {
    /// Create a series from options, resolving the tile shape.
    ///
    /// Fails when the configured shape name is unknown.
    pub fn new(options: TilemapOptions) -> TilegridResult<Self> {
        let shape = TileShape::from_name(&options.tile_shape)?;
        Ok(Self {
            options,
            shape,
            points: Vec::new(),
        })
    }

    /// Replace the series options, re-resolving the tile shape.
    ///
    /// On error the previous options and shape are kept.
    pub fn set_options(&mut self, options: TilemapOptions) -> TilegridResult<()> {
        let shape = TileShape::from_name(&options.tile_shape)?;
        self.options = options;
        self.shape = shape;
        Ok(())
    }

    /// The series options.
    pub fn options(&self) -> &TilemapOptions {
        &self.options
    }

    /// The resolved tile shape.
    pub fn shape(&self) -> TileShape {
        self.shape
    }

    /// Replace the series' points.
    pub fn set_points(&mut self, points: Vec<TilePoint>) {
        self.points = points;
    }

    /// Add points to the series.
    pub fn with_points(mut self, points: Vec<TilePoint>) -> Self {
        self.points = points;
        self
    }

    /// The series' points.
    pub fn points(&self) -> &[TilePoint] {
        &self.points
    }

    /// Mutable access to the series' points.
    pub fn points_mut(&mut self) -> &mut [TilePoint] {
        &mut self.points
    }

    /// Grid-unit padding the tile shape requires, if any.
    pub fn series_padding(&self) -> Option<TilePadding> {
        self.shape.series_padding(&self.options)
    }

    /// Pixel padding this series requires on the given axis.
    ///
    /// Translates the shape's grid-unit padding through the baseline
    /// translation formula, so nonlinear scales are accounted for. Shapes
    /// without padding report [`SeriesPixelPadding::NONE`].
    pub fn series_pixel_padding(&self, translation: &AxisTranslation) -> SeriesPixelPadding {
        let Some(pad) = self.series_padding() else {
            return SeriesPixelPadding::NONE;
        };

        let is_x = translation.orientation() == AxisOrientation::Horizontal;

        // How far outside the data bounds the shape draws, as the pixel
        // distance between two translated grid offsets
        let coord1 = translation
            .translate(if is_x { pad.x_pad * 2.0 } else { pad.y_pad })
            .round();
        let coord2 = translation.translate(if is_x { pad.x_pad } else { 0.0 }).round();
        let padding = (coord1 - coord2).abs();
        let padding = if padding.is_finite() { padding } else { 0.0 };

        SeriesPixelPadding {
            padding,
            // The x axis draws outside on both ends and reserves the margin
            // twice; the y axis only draws outside the min end, plus a
            // slight allowance at max
            axis_length_factor: if is_x { 2.0 } else { 1.1 },
        }
    }

    /// Run the translate pass, recomputing geometry for every point.
    pub fn translate(&mut self, x_axis: &AxisTranslation, y_axis: &AxisTranslation) {
        self.shape
            .translate(&self.options, &mut self.points, x_axis, y_axis);

        tracing::trace!(
            "Translated {} {} tiles",
            self.points.len(),
            self.shape.name()
        );
    }

    /// Build the hover halo outline for a point of this series.
    pub fn halo_path(&self, point: &TilePoint, size: f64) -> Path {
        self.shape.halo_path(point, size)
    }

    /// Compute the data-label anchor for a point of this series.
    pub fn align_data_label(&self, point: &TilePoint, label_size: Vec2) -> Option<Vec2> {
        self.shape.align_data_label(point, label_size)
    }
}
