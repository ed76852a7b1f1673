//! Named press-sheet sizes.

/// A named record `(long_side, short_side)` in inches, as the spec's data
/// model describes it. `dimensions` applies an orientation to get the
/// actual width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressSheetSize {
    pub name: &'static str,
    pub long_side_in: f64,
    pub short_side_in: f64,
}

impl PressSheetSize {
    pub const fn new(name: &'static str, long_side_in: f64, short_side_in: f64) -> Self {
        Self { name, long_side_in, short_side_in }
    }

    /// `(width, height)` in inches for the given orientation. Portrait
    /// runs the short side horizontally, landscape the long side.
    pub fn dimensions_in(&self, orientation: press_geometry::Orientation) -> (f64, f64) {
        match orientation {
            press_geometry::Orientation::Portrait => (self.short_side_in, self.long_side_in),
            press_geometry::Orientation::Landscape => (self.long_side_in, self.short_side_in),
        }
    }

    pub const SHEET_11X17: PressSheetSize = PressSheetSize::new("11x17", 17.0, 11.0);
    pub const SHEET_12X18: PressSheetSize = PressSheetSize::new("12x18", 18.0, 12.0);
    pub const SHEET_13X19: PressSheetSize = PressSheetSize::new("13x19", 19.0, 13.0);
    pub const SHEET_19X25: PressSheetSize = PressSheetSize::new("19x25", 25.0, 19.0);
    pub const SHEET_23X35: PressSheetSize = PressSheetSize::new("23x35", 35.0, 23.0);
    pub const SHEET_25X38: PressSheetSize = PressSheetSize::new("25x38", 38.0, 25.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_geometry::Orientation;

    #[test]
    fn orientation_swaps_axes() {
        let sheet = PressSheetSize::SHEET_11X17;
        assert_eq!(sheet.dimensions_in(Orientation::Portrait), (11.0, 17.0));
        assert_eq!(sheet.dimensions_in(Orientation::Landscape), (17.0, 11.0));
    }
}
