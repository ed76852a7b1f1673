//! Rectangle-on-sheet fitting: how many copies of a finished piece fit
//! on a parent sheet, trying both orthogonal orientations.

use press_geometry::max_units_along_axis;

/// Number of `item_w x item_h` rectangles that fit on a `parent_w x
/// parent_h` sheet, the better of the two axis-aligned orientations.
/// Zero means the item does not fit on the sheet at all.
pub fn best_n_up(parent_w_in: f64, parent_h_in: f64, item_w_in: f64, item_h_in: f64) -> u32 {
    let upright = max_units_along_axis(parent_w_in, item_w_in, 0.0)
        * max_units_along_axis(parent_h_in, item_h_in, 0.0);
    let rotated = max_units_along_axis(parent_w_in, item_h_in, 0.0)
        * max_units_along_axis(parent_h_in, item_w_in, 0.0);
    upright.max(rotated)
}
