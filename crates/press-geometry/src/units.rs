//! Unit conversion and axis-fitting helpers.
//!
//! All internal geometry is carried in points (1/72 inch), the native
//! PDF unit. Catalog data and job specs are commonly authored in inches
//! or millimeters, so conversions live at the boundary.

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm).
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Points per inch.
pub const POINTS_PER_IN: f64 = 72.0;

/// Convert millimeters to points.
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters.
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}

/// Convert inches to points.
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_IN
}

/// Convert points to inches.
#[inline]
pub fn pt_to_in(pt: f64) -> f64 {
    pt / POINTS_PER_IN
}

/// Orientation of a rectangular sheet or page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    pub fn flip(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Apply this orientation to a portrait-authored `(width, height)` pair.
    pub fn apply(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

/// Number of equally sized items (plus inter-item gutter) that fit along
/// an axis of length `available`.
///
/// `⌊(available + gutter) / (item + gutter)⌋`, clamped to zero when the
/// item itself (with one gutter counted) does not fit at all.
pub fn max_units_along_axis(available: f64, item: f64, gutter: f64) -> u32 {
    if item <= 0.0 {
        return 0;
    }
    let n = (available + gutter) / (item + gutter);
    if n.is_finite() && n >= 1.0 {
        n.floor() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_pt_roundtrip() {
        let mm = 210.0;
        let pt = mm_to_pt(mm);
        assert!((pt_to_mm(pt) - mm).abs() < 1e-9);
    }

    #[test]
    fn inch_conversion() {
        assert!((in_to_pt(1.0) - 72.0).abs() < 1e-9);
        assert!((pt_to_in(72.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn axis_fit_exact() {
        assert_eq!(max_units_along_axis(100.0, 20.0, 0.0), 5);
    }

    #[test]
    fn axis_fit_with_gutter() {
        // 4 items of 20 with 3 gutters of 5 between them = 95, fits in 100.
        // A 5th item would need another 25 (20 + gutter), total 120 > 100.
        assert_eq!(max_units_along_axis(100.0, 20.0, 5.0), 4);
    }

    #[test]
    fn axis_fit_nothing_fits() {
        assert_eq!(max_units_along_axis(10.0, 20.0, 0.0), 0);
    }

    #[test]
    fn orientation_apply() {
        assert_eq!(Orientation::Portrait.apply(10.0, 20.0), (10.0, 20.0));
        assert_eq!(Orientation::Landscape.apply(10.0, 20.0), (20.0, 10.0));
    }
}
