//! Circle tiles.
//!
//! All circles in a series share one radius, computed from the column and
//! row pixel spacing so neighboring circles never overlap. The radius is
//! computed once per pass and cached; a per-point padding override forces a
//! recompute for that point and the one after it, so the override cannot
//! leak a stale radius across the padding boundary.

use super::{clamp_to_band, is_odd_column};
use crate::axis::AxisTranslation;
use crate::path::{Path, PathBuilder};
use crate::point::{HaloAnchor, TileGeometry, TilePoint};
use crate::series::TilemapOptions;
use glam::Vec2;

/// Radius cache invalidation state.
///
/// `ForceRecomputeOnce` is entered when a point carries its own padding and
/// left again by the first recompute for a point without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RadiusMode {
    Normal,
    ForceRecomputeOnce,
}

/// The per-pass radius cache.
#[derive(Debug, Clone, Copy)]
struct RadiusCache {
    radius: f64,
    /// Optimal y radius in pixels; also the odd-column shift distance.
    y_radius_px: f64,
}

pub(crate) fn translate(
    options: &TilemapOptions,
    points: &mut [TilePoint],
    x_axis: &AxisTranslation,
    y_axis: &AxisTranslation,
) {
    let y_radius = options.rowsize / 2.0;
    let colsize = options.colsize;
    let x_len = x_axis.len();
    let y_len = y_axis.len();

    let mut cache: Option<RadiusCache> = None;
    let mut mode = RadiusMode::Normal;

    for point in points.iter_mut() {
        debug_assert!(point.x.is_finite() && point.y.is_finite());

        let x = clamp_to_band((x_len - x_axis.translate(point.x)).round(), x_len);
        let mut y = clamp_to_band(y_axis.translate(point.y).round(), y_len);

        let has_per_point_padding = point.point_padding.is_some();
        let padding = point.point_padding.unwrap_or(options.point_padding);
        if has_per_point_padding {
            mode = RadiusMode::ForceRecomputeOnce;
        }

        // Find the radius if not cached. Use the smallest of the column
        // distance and the two derived radii to avoid overlap: the ideal x
        // radius is half the hypotenuse of the triangle formed by the column
        // pixel spacing and the y radius, since that hypotenuse is the
        // center distance between a circle and its diagonal neighbor.
        let entry = match (cache, mode) {
            (Some(entry), RadiusMode::Normal) => entry,
            _ => {
                let colsize_px = (clamp_to_band(
                    (x_len - x_axis.translate(point.x + colsize)).floor(),
                    x_len,
                ) - x)
                    .abs();
                let y_radius_px =
                    (clamp_to_band(y_axis.translate(point.y + y_radius).floor(), y_len) - y).abs();
                let x_radius_px =
                    ((colsize_px * colsize_px + y_radius_px * y_radius_px).sqrt() / 2.0).floor();

                let entry = RadiusCache {
                    radius: colsize_px.min(x_radius_px).min(y_radius_px) - padding,
                    y_radius_px,
                };
                cache = Some(entry);

                // A point with its own padding also invalidates the next
                // point's radius; the flag clears on the first recompute for
                // a point without an override
                if !has_per_point_padding {
                    mode = RadiusMode::Normal;
                }
                entry
            }
        };

        // Shift y-values for every second grid column, by the optimal y
        // radius, reversed for reversed y-axes
        if is_odd_column(point.x) {
            y += entry.y_radius_px * if y_axis.reversed() { -1.0 } else { 1.0 };
        }

        point.plot = Some(Vec2::new(x as f32, y as f32));
        point.halo_anchor = Some(HaloAnchor::Circle {
            radius: entry.radius,
        });
        point.geometry = Some(TileGeometry::Circle {
            center: Vec2::new(x as f32, y as f32),
            radius: entry.radius as f32,
        });
    }
}

pub(crate) fn halo_path(point: &TilePoint, size: f64) -> Path {
    if size <= 0.0 {
        return Path::new();
    }
    let (Some(plot), Some(HaloAnchor::Circle { radius })) = (point.plot, point.halo_anchor) else {
        return Path::new();
    };

    // Circular outline around the tile, the scatter-marker halo
    let mut builder = PathBuilder::new();
    builder.circle(plot, (radius + size) as f32);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisTranslation};

    fn axes() -> (AxisTranslation, AxisTranslation) {
        (
            AxisTranslation::baseline(&Axis::horizontal(0.0, 10.0, 100.0)),
            AxisTranslation::baseline(&Axis::vertical(0.0, 10.0, 100.0)),
        )
    }

    fn options() -> TilemapOptions {
        TilemapOptions {
            tile_shape: "circle".into(),
            ..Default::default()
        }
    }

    fn circle_of(point: &TilePoint) -> (Vec2, f32) {
        match &point.geometry {
            Some(TileGeometry::Circle { center, radius }) => (*center, *radius),
            _ => panic!("expected circle geometry"),
        }
    }

    #[test]
    fn test_adjacent_circles_do_not_overlap() {
        let (xt, yt) = axes();
        let mut points = vec![
            TilePoint::new(0.0, 5.0, 1.0),
            TilePoint::new(1.0, 5.0, 1.0),
        ];
        let opts = TilemapOptions {
            point_padding: 0.0,
            ..options()
        };
        translate(&opts, &mut points, &xt, &yt);

        let (c0, r0) = circle_of(&points[0]);
        let (c1, r1) = circle_of(&points[1]);
        assert_eq!(r0, r1);

        let center_distance = (c1 - c0).length();
        assert!(r0 * 2.0 <= center_distance + 1e-3);
    }

    #[test]
    fn test_odd_column_shifted_by_y_radius() {
        let (xt, yt) = axes();
        let mut points = vec![
            TilePoint::new(0.0, 5.0, 1.0),
            TilePoint::new(1.0, 5.0, 1.0),
        ];
        translate(&options(), &mut points, &xt, &yt);

        let (c0, _) = circle_of(&points[0]);
        let (c1, _) = circle_of(&points[1]);
        // rowsize 1 is 10px here, so the y radius is 5px
        assert!((c1.y - c0.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_radius_monotonic_in_padding() {
        let (xt, yt) = axes();
        let mut last_radius = f32::INFINITY;
        for padding in [0.0, 1.0, 2.0, 3.0] {
            let opts = TilemapOptions {
                point_padding: padding,
                ..options()
            };
            let mut points = vec![TilePoint::new(5.0, 5.0, 1.0)];
            translate(&opts, &mut points, &xt, &yt);
            let (_, radius) = circle_of(&points[0]);
            assert!(radius < last_radius);
            last_radius = radius;
        }
    }

    #[test]
    fn test_per_point_padding_recomputes_next_point_too() {
        let (xt, yt) = axes();
        let mut points = vec![
            TilePoint::new(0.0, 5.0, 1.0),
            TilePoint::new(2.0, 5.0, 1.0).with_padding(4.0),
            TilePoint::new(4.0, 5.0, 1.0),
            TilePoint::new(6.0, 5.0, 1.0),
        ];
        translate(&options(), &mut points, &xt, &yt);

        let (_, r0) = circle_of(&points[0]);
        let (_, r1) = circle_of(&points[1]);
        let (_, r2) = circle_of(&points[2]);
        let (_, r3) = circle_of(&points[3]);

        // The override shrinks its own point, and the series radius is
        // restored on the very next point rather than leaking
        assert!(r1 < r0);
        assert_eq!(r2, r0);
        assert_eq!(r3, r0);
    }

    #[test]
    fn test_consecutive_overrides_stay_forced() {
        let (xt, yt) = axes();
        let mut points = vec![
            TilePoint::new(0.0, 5.0, 1.0).with_padding(3.0),
            TilePoint::new(2.0, 5.0, 1.0).with_padding(4.0),
            TilePoint::new(4.0, 5.0, 1.0),
        ];
        translate(&options(), &mut points, &xt, &yt);

        let (_, r0) = circle_of(&points[0]);
        let (_, r1) = circle_of(&points[1]);
        let (_, r2) = circle_of(&points[2]);
        assert!(r1 < r0);
        assert!(r2 > r1);
    }

    #[test]
    fn test_halo_is_expanded_circle() {
        let (xt, yt) = axes();
        let mut points = vec![TilePoint::new(5.0, 5.0, 1.0)];
        translate(&options(), &mut points, &xt, &yt);

        assert!(halo_path(&points[0], 0.0).is_empty());

        let (center, radius) = circle_of(&points[0]);
        let halo = halo_path(&points[0], 2.0);
        let (min, max) = halo.bounds().unwrap();
        let halo_radius = (max.x - min.x) / 2.0;
        assert!(halo_radius >= radius + 2.0 - 1e-3);
        assert!(((min + max) * 0.5 - center).length() < 1e-3);
    }

    #[test]
    fn test_translate_idempotent() {
        let (xt, yt) = axes();
        let mut points = vec![
            TilePoint::new(0.0, 5.0, 1.0),
            TilePoint::new(1.0, 5.0, 1.0).with_padding(3.0),
        ];
        translate(&options(), &mut points, &xt, &yt);
        let first: Vec<_> = points.clone();

        translate(&options(), &mut points, &xt, &yt);
        assert_eq!(points, first);
    }
}
