//! Axis translation and tile padding negotiation.
//!
//! The engine does not own axis state; the host describes each axis with
//! [`Axis`] and finalizes it into an [`AxisTranslation`], the pure pixel
//! translation formula the shape translators consume. Finalization asks every
//! attached series how many pixels of margin its tile shape draws outside the
//! nominal data bounds and reserves that margin from the translation's
//! working length, so edge tiles are not clipped by the plot area.

use crate::series::TilemapSeries;

/// Scale type for axis transformation.
///
/// Determines how data values are mapped to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScaleType {
    /// Linear scale (default).
    #[default]
    Linear,

    /// Logarithmic scale.
    ///
    /// Useful for data spanning multiple orders of magnitude.
    /// Data must be > 0.
    Logarithmic {
        /// Log base (typically 10 or e)
        base: f64,
    },
}

impl ScaleType {
    /// Create a base-10 logarithmic scale.
    pub fn log10() -> Self {
        Self::Logarithmic { base: 10.0 }
    }

    /// Create a natural logarithmic scale.
    pub fn ln() -> Self {
        Self::Logarithmic {
            base: std::f64::consts::E,
        }
    }

    /// Transform a data value to normalized coordinates [0, 1].
    ///
    /// Given a value in the range [min, max], returns a normalized value.
    pub fn normalize(&self, value: f64, min: f64, max: f64) -> f64 {
        if (max - min).abs() < f64::EPSILON {
            return 0.5;
        }

        match self {
            Self::Linear => (value - min) / (max - min),

            Self::Logarithmic { base } => {
                if value <= 0.0 || min <= 0.0 || max <= 0.0 {
                    // Fall back to linear for invalid log values
                    return (value - min) / (max - min);
                }
                let log_value = value.log(*base);
                let log_min = min.log(*base);
                let log_max = max.log(*base);
                (log_value - log_min) / (log_max - log_min)
            }
        }
    }
}

/// Axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// X axis
    Horizontal,
    /// Y axis
    Vertical,
}

/// Host-side description of one chart axis.
///
/// `len` is the canonical pixel length of the axis. It is never mutated by
/// padding negotiation; the reserved tile margin only affects the working
/// length inside [`AxisTranslation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// Axis orientation.
    pub orientation: AxisOrientation,
    /// Scale type for value transformation.
    pub scale: ScaleType,
    /// Minimum data value.
    pub min: f64,
    /// Maximum data value.
    pub max: f64,
    /// Pixel length of the axis.
    pub len: f64,
    /// Whether increasing data values map to decreasing pixel coordinates.
    pub reversed: bool,
}

impl Axis {
    /// Create a horizontal (X) axis.
    pub fn horizontal(min: f64, max: f64, len: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            scale: ScaleType::Linear,
            min,
            max,
            len,
            reversed: false,
        }
    }

    /// Create a vertical (Y) axis.
    pub fn vertical(min: f64, max: f64, len: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            scale: ScaleType::Linear,
            min,
            max,
            len,
            reversed: false,
        }
    }

    /// Set the scale type.
    pub fn with_scale(mut self, scale: ScaleType) -> Self {
        self.scale = scale;
        self
    }

    /// Mark the axis as reversed.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

/// Pixel padding requirement reported by a series for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPixelPadding {
    /// Extra pixel margin the series draws outside the data bounds.
    pub padding: f64,
    /// How the padding scales the reserved axis length.
    ///
    /// 2.0 reserves the margin on both ends (horizontal axes draw outside on
    /// both sides); values near 1.0 reserve mostly the min end.
    pub axis_length_factor: f64,
}

impl SeriesPixelPadding {
    /// The no-padding sentinel.
    pub const NONE: Self = Self {
        padding: 0.0,
        axis_length_factor: 1.0,
    };
}

/// A finalized axis translation formula.
///
/// Translation maps a data value to a pixel offset measured from the axis's
/// far end, computed against the working length (the canonical length minus
/// any reserved tile margin). [`AxisTranslation::len`] still reports the
/// canonical length, so downstream consumers combine the two the same way on
/// padded and unpadded axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTranslation {
    orientation: AxisOrientation,
    scale: ScaleType,
    min: f64,
    max: f64,
    reversed: bool,
    len: f64,
    working_len: f64,
    min_pixel_padding: f64,
}

impl AxisTranslation {
    /// Build the baseline translation: full length, no reserved padding.
    pub fn baseline(axis: &Axis) -> Self {
        Self {
            orientation: axis.orientation,
            scale: axis.scale,
            min: axis.min,
            max: axis.max,
            reversed: axis.reversed,
            len: axis.len,
            working_len: axis.len,
            min_pixel_padding: 0.0,
        }
    }

    /// Build a translation with pixel padding reserved from the length.
    fn with_reserved(axis: &Axis, padding: &SeriesPixelPadding) -> Self {
        let reserved = (padding.padding * padding.axis_length_factor).round();
        Self {
            working_len: axis.len - reserved,
            min_pixel_padding: padding.padding,
            ..Self::baseline(axis)
        }
    }

    /// Translate a data value to a pixel offset from the axis's far end.
    ///
    /// Combine with [`AxisTranslation::len`] (`len - translate(value)`) to
    /// measure from the near end instead.
    pub fn translate(&self, value: f64) -> f64 {
        let mut normalized = self.scale.normalize(value, self.min, self.max);
        if self.reversed {
            normalized = 1.0 - normalized;
        }
        // The reserved length splits into min_pixel_padding at the min end
        // and the remainder at the max end, so edge tiles on both ends keep
        // their margin from the plot edge.
        let offset = self.len - self.working_len - self.min_pixel_padding;
        (1.0 - normalized) * self.working_len + offset
    }

    /// The canonical pixel length of the axis.
    pub fn len(&self) -> f64 {
        self.len
    }

    /// Whether the axis is reversed.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Axis orientation.
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// The pixel padding reserved at the axis minimum.
    pub fn min_pixel_padding(&self) -> f64 {
        self.min_pixel_padding
    }
}

/// Finalize an axis translation against the series attached to the axis.
///
/// Queries every series for its required pixel padding, picks the largest,
/// and reserves it from the translation's working length. Series whose shape
/// needs no margin contribute [`SeriesPixelPadding::NONE`]. When no series
/// requires padding the baseline translation is returned unchanged, without
/// a second formula pass.
pub fn finalize_translation(axis: &Axis, series: &[&TilemapSeries]) -> AxisTranslation {
    let baseline = AxisTranslation::baseline(axis);

    let mut chosen = SeriesPixelPadding::NONE;
    for s in series {
        let candidate = s.series_pixel_padding(&baseline);
        if candidate.padding > chosen.padding {
            chosen = candidate;
        }
    }

    if chosen.padding == 0.0 {
        return baseline;
    }

    tracing::trace!(
        "Axis padding: reserving {}px (length factor {})",
        chosen.padding,
        chosen.axis_length_factor
    );

    AxisTranslation::with_reserved(axis, &chosen)
}
