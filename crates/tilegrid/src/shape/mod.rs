//! Tile shape translators.
//!
//! Each shape implements the same four operations: a series padding query,
//! the translate pass, halo outline generation and data-label alignment.
//! The set of shapes is closed, so they are dispatched through the
//! [`TileShape`] enum rather than trait objects.

mod circle;
mod diamond;
mod hexagon;
mod square;

use crate::axis::AxisTranslation;
use crate::error::{TilegridError, TilegridResult};
use crate::label;
use crate::path::Path;
use crate::point::TilePoint;
use crate::series::TilemapOptions;
use glam::Vec2;

/// Grid-unit padding a shape requires around the data bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePadding {
    /// Horizontal padding in grid units.
    pub x_pad: f64,
    /// Vertical padding in grid units.
    pub y_pad: f64,
}

/// The tile topology of a tilemap series.
///
/// Resolved once from the option name at series setup and shared read-only
/// by every point of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShape {
    /// Flat-top hexagons, interlocking by thirds of a column.
    Hexagon,
    /// Diamonds (rotated squares), interlocking by half rows.
    Diamond,
    /// Circles sized to touch without overlapping.
    Circle,
    /// Plain heatmap cells, no interlocking.
    Square,
}

impl TileShape {
    /// Resolve a shape from its option name.
    ///
    /// Unknown names are a configuration error and fail immediately.
    pub fn from_name(name: &str) -> TilegridResult<Self> {
        match name {
            "hexagon" => Ok(Self::Hexagon),
            "diamond" => Ok(Self::Diamond),
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            other => Err(TilegridError::UnknownShape(other.to_string())),
        }
    }

    /// The option name of this shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hexagon => "hexagon",
            Self::Diamond => "diamond",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Grid-unit padding this shape draws outside the data bounds.
    ///
    /// `None` means the shape stays inside its cell (square tiles).
    pub fn series_padding(&self, options: &TilemapOptions) -> Option<TilePadding> {
        match self {
            Self::Hexagon => Some(TilePadding {
                x_pad: options.colsize / 3.0,
                y_pad: options.rowsize / 2.0,
            }),
            Self::Diamond | Self::Circle => Some(TilePadding {
                x_pad: options.colsize,
                y_pad: options.rowsize / 2.0,
            }),
            Self::Square => None,
        }
    }

    /// Run the translate pass for this shape over the series' points.
    pub fn translate(
        &self,
        options: &TilemapOptions,
        points: &mut [TilePoint],
        x_axis: &AxisTranslation,
        y_axis: &AxisTranslation,
    ) {
        match self {
            Self::Hexagon => hexagon::translate(options, points, x_axis, y_axis),
            Self::Diamond => diamond::translate(options, points, x_axis, y_axis),
            Self::Circle => circle::translate(options, points, x_axis, y_axis),
            Self::Square => square::translate(options, points, x_axis, y_axis),
        }
    }

    /// Build the hover halo outline for a translated point.
    ///
    /// Returns an empty path when `size` is zero or the point has not been
    /// translated.
    pub fn halo_path(&self, point: &TilePoint, size: f64) -> Path {
        match self {
            Self::Hexagon => hexagon::halo_path(point, size),
            Self::Diamond => diamond::halo_path(point, size),
            Self::Circle => circle::halo_path(point, size),
            Self::Square => square::halo_path(point, size),
        }
    }

    /// Compute the top-left anchor for a data label of the given size.
    ///
    /// Returns `None` when the label should not be drawn.
    pub fn align_data_label(&self, point: &TilePoint, label_size: Vec2) -> Option<Vec2> {
        match self {
            // Scatter-style alignment for the interlocking shapes
            Self::Hexagon | Self::Diamond | Self::Circle => {
                label::align_scatter(point, label_size)
            }
            // Heatmap cell alignment for squares
            Self::Square => label::align_cell(point, label_size),
        }
    }
}

/// Clamp a translated pixel coordinate to the band around the axis.
///
/// Points far outside the visible range would otherwise feed runaway values
/// into path data.
pub(crate) fn clamp_to_band(px: f64, len: f64) -> f64 {
    px.clamp(-len, 2.0 * len)
}

/// Effective padding for one point: the per-point override if set, else the
/// series default.
pub(crate) fn effective_padding(options: &TilemapOptions, point: &TilePoint) -> f64 {
    point.point_padding.unwrap_or(options.point_padding)
}

/// Padding for a shape's middle vertices, scaled so insetting preserves the
/// corner angles instead of shrinking axis-aligned.
///
/// A degenerate vertical span yields zero padding rather than propagating
/// non-finite values into path data.
pub(crate) fn mid_point_padding(padding: f64, dx_mid: f64, dy_mid: f64) -> f64 {
    if dy_mid.abs() < f64::EPSILON {
        return 0.0;
    }
    padding * dx_mid.abs() / dy_mid.abs()
}

/// Whether a grid column gets the interlocking half-row shift.
pub(crate) fn is_odd_column(x: f64) -> bool {
    x % 2.0 != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(TileShape::from_name("hexagon").unwrap(), TileShape::Hexagon);
        assert_eq!(TileShape::from_name("square").unwrap(), TileShape::Square);
        assert!(matches!(
            TileShape::from_name("triangle"),
            Err(TilegridError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_series_padding_by_shape() {
        let options = TilemapOptions {
            colsize: 3.0,
            rowsize: 2.0,
            ..Default::default()
        };

        let hex = TileShape::Hexagon.series_padding(&options).unwrap();
        assert!((hex.x_pad - 1.0).abs() < 1e-9);
        assert!((hex.y_pad - 1.0).abs() < 1e-9);

        let dia = TileShape::Diamond.series_padding(&options).unwrap();
        assert!((dia.x_pad - 3.0).abs() < 1e-9);

        assert_eq!(
            TileShape::Circle.series_padding(&options),
            TileShape::Diamond.series_padding(&options)
        );
        assert!(TileShape::Square.series_padding(&options).is_none());
    }

    #[test]
    fn test_clamp_to_band() {
        assert_eq!(clamp_to_band(50.0, 100.0), 50.0);
        assert_eq!(clamp_to_band(-500.0, 100.0), -100.0);
        assert_eq!(clamp_to_band(500.0, 100.0), 200.0);
    }

    #[test]
    fn test_mid_point_padding_degenerate() {
        assert_eq!(mid_point_padding(2.0, 10.0, 0.0), 0.0);
        assert!((mid_point_padding(2.0, 10.0, 5.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_odd_column() {
        assert!(is_odd_column(1.0));
        assert!(is_odd_column(3.0));
        assert!(!is_odd_column(0.0));
        assert!(!is_odd_column(2.0));
        // Fractional columns interlock too
        assert!(is_odd_column(1.5));
    }
}
