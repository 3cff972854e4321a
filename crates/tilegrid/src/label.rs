//! Data-label alignment delegates.
//!
//! The engine does not lay out label text; it only decides where a label box
//! of a given size should be anchored for each shape, the same split the
//! shapes use for translate: scatter-style for the interlocking shapes,
//! cell-style for heatmap squares.

use crate::point::{TileGeometry, TilePoint};
use glam::Vec2;

/// Scatter-style alignment: center the label box on the plot position.
pub(crate) fn align_scatter(point: &TilePoint, label_size: Vec2) -> Option<Vec2> {
    let plot = point.plot?;
    Some(plot - label_size * 0.5)
}

/// Cell-style alignment: center the label inside the cell rect, hiding it
/// when the box does not fit.
pub(crate) fn align_cell(point: &TilePoint, label_size: Vec2) -> Option<Vec2> {
    let Some(TileGeometry::Path(path)) = &point.geometry else {
        return None;
    };
    let (min, max) = path.bounds()?;
    let cell = max - min;
    if label_size.x > cell.x || label_size.y > cell.y {
        return None;
    }
    Some(min + (cell - label_size) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathBuilder;

    #[test]
    fn test_align_scatter_centers_on_plot() {
        let mut point = TilePoint::new(0.0, 0.0, 1.0);
        point.plot = Some(Vec2::new(50.0, 40.0));

        let anchor = align_scatter(&point, Vec2::new(20.0, 10.0)).unwrap();
        assert_eq!(anchor, Vec2::new(40.0, 35.0));
    }

    #[test]
    fn test_align_scatter_untranslated() {
        let point = TilePoint::new(0.0, 0.0, 1.0);
        assert!(align_scatter(&point, Vec2::new(20.0, 10.0)).is_none());
    }

    #[test]
    fn test_align_cell_fits_and_hides() {
        let mut point = TilePoint::new(0.0, 0.0, 1.0);
        let mut builder = PathBuilder::new();
        builder.rect(Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0));
        point.geometry = Some(TileGeometry::Path(builder.build()));

        let anchor = align_cell(&point, Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(anchor, Vec2::new(20.0, 15.0));

        // Too large to fit
        assert!(align_cell(&point, Vec2::new(40.0, 10.0)).is_none());
    }
}
