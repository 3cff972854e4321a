//! Diamond tiles.
//!
//! A diamond spans a full column to either side of its center and half a
//! row up and down, with every second column shifted by half a row so the
//! tiles interlock into a lattice.

use super::{clamp_to_band, effective_padding, is_odd_column, mid_point_padding};
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
    let x_pad = options.colsize;
    let y_pad = options.rowsize / 2.0;
    let x_len = x_axis.len();
    let y_len = y_axis.len();

    for point in points.iter_mut() {
        debug_assert!(point.x.is_finite() && point.y.is_finite());

        let x1 = clamp_to_band((x_len - x_axis.translate(point.x - x_pad)).round(), x_len);
        let x2 = clamp_to_band((x_len - x_axis.translate(point.x)).round(), x_len);
        let x3 = clamp_to_band((x_len - x_axis.translate(point.x + x_pad)).round(), x_len);
        let mut y1 = clamp_to_band(y_axis.translate(point.y - y_pad).round(), y_len);
        let mut y2 = clamp_to_band(y_axis.translate(point.y).round(), y_len);
        let mut y3 = clamp_to_band(y_axis.translate(point.y + y_pad).round(), y_len);

        let padding = effective_padding(options, point);
        // The left/right corners are midpoints of the shape's edges, so they
        // take the angle-preserving padding
        let mid_padding = mid_point_padding(padding, x2 - x1, y3 - y2);
        let x_point_padding = if x_axis.reversed() {
            -mid_padding
        } else {
            mid_padding
        };
        let y_point_padding = if y_axis.reversed() { -padding } else { padding };

        // Shift y-values for every second grid column, reversing the shift
        // for reversed y-axes
        if is_odd_column(point.x) {
            let y_shift = (y3 - y1).abs() / 2.0 * if y_axis.reversed() { -1.0 } else { 1.0 };
            y1 += y_shift;
            y2 += y_shift;
            y3 += y_shift;
        }

        point.plot = Some(Vec2::new(x2 as f32, y2 as f32));

        // Apply point padding to the translated coordinates
        let x1 = x1 + x_point_padding;
        let x3 = x3 - x_point_padding;
        let y1 = y1 - y_point_padding;
        let y3 = y3 + y_point_padding;

        point.halo_anchor = Some(HaloAnchor::Diamond {
            x1,
            x2,
            x3,
            y1,
            y2,
            y3,
        });

        let mut builder = PathBuilder::new();
        builder.polygon(&[
            Vec2::new(x2 as f32, y1 as f32),
            Vec2::new(x3 as f32, y2 as f32),
            Vec2::new(x2 as f32, y3 as f32),
            Vec2::new(x1 as f32, y2 as f32),
        ]);
        point.geometry = Some(TileGeometry::Path(builder.build()));
    }
}

pub(crate) fn halo_path(point: &TilePoint, size: f64) -> Path {
    if size <= 0.0 {
        return Path::new();
    }
    let Some(HaloAnchor::Diamond {
        x1,
        x2,
        x3,
        y1,
        y2,
        y3,
    }) = point.halo_anchor
    else {
        return Path::new();
    };

    let mut builder = PathBuilder::new();
    builder.polygon(&[
        Vec2::new(x2 as f32, (y1 + size) as f32),
        Vec2::new((x3 + size) as f32, y2 as f32),
        Vec2::new(x2 as f32, (y3 - size) as f32),
        Vec2::new((x1 - size) as f32, y2 as f32),
    ]);
    builder.build()
}
