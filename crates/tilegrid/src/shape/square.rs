//! Square tiles.
//!
//! Squares are plain heatmap cells: axis-aligned rectangles spanning half a
//! column and half a row to either side of the point, with no interlocking
//! offset and no extra axis padding. Translate and halo generation follow
//! the base heatmap cell algorithm.

use super::{clamp_to_band, effective_padding};
use crate::axis::AxisTranslation;
use crate::path::{Path, PathBuilder};
use crate::point::{HaloAnchor, TileGeometry, TilePoint};
use crate::series::TilemapOptions;
use glam::Vec2;

pub(crate) fn translate(
    options: &TilemapOptions,
    points: &mut [TilePoint],
    x_axis: &AxisTranslation,
    y_axis: &AxisTranslation,
) {
    let x_pad = options.colsize / 2.0;
    let y_pad = options.rowsize / 2.0;
    let x_len = x_axis.len();
    let y_len = y_axis.len();

    for point in points.iter_mut() {
        debug_assert!(point.x.is_finite() && point.y.is_finite());

        let x1 = clamp_to_band((x_len - x_axis.translate(point.x - x_pad)).round(), x_len);
        let x2 = clamp_to_band((x_len - x_axis.translate(point.x + x_pad)).round(), x_len);
        let y1 = clamp_to_band(y_axis.translate(point.y - y_pad).round(), y_len);
        let y2 = clamp_to_band(y_axis.translate(point.y + y_pad).round(), y_len);

        let padding = effective_padding(options, point);

        point.plot = Some(Vec2::new(
            ((x1 + x2) / 2.0) as f32,
            ((y1 + y2) / 2.0) as f32,
        ));

        // Cell rect inset by the point padding on all sides
        let x = x1.min(x2) + padding;
        let y = y1.min(y2) + padding;
        let width = ((x2 - x1).abs() - padding * 2.0).max(0.0);
        let height = ((y2 - y1).abs() - padding * 2.0).max(0.0);

        point.halo_anchor = Some(HaloAnchor::Cell {
            x,
            y,
            width,
            height,
        });

        let mut builder = PathBuilder::new();
        builder.rect(
            Vec2::new(x as f32, y as f32),
            Vec2::new(width as f32, height as f32),
        );
        point.geometry = Some(TileGeometry::Path(builder.build()));
    }
}

pub(crate) fn halo_path(point: &TilePoint, size: f64) -> Path {
    if size <= 0.0 {
        return Path::new();
    }
    let Some(HaloAnchor::Cell {
        x,
        y,
        width,
        height,
    }) = point.halo_anchor
    else {
        return Path::new();
    };

    // Cell outline expanded by the halo size on all sides
    let mut builder = PathBuilder::new();
    builder.rect(
        Vec2::new((x - size) as f32, (y - size) as f32),
        Vec2::new((width + size * 2.0) as f32, (height + size * 2.0) as f32),
    );
    builder.build()
}
