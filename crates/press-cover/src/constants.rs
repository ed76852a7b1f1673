//! Fixed geometry and color constants for the cover template.

/// Distance of the dashed hinge-safe guide from each spine line.
pub const HINGE_OFFSET_IN: f64 = 1.0 / 8.0;

/// Inset of the dashed back/front panel safety rectangle from the trim
/// edge and the spine lines.
pub const SAFETY_MARGIN_IN: f64 = 0.25;

pub const SPINE_LINE_WIDTH_PT: f64 = 1.0;
pub const GUIDE_LINE_WIDTH_PT: f64 = 0.5;
pub const TRIM_LINE_WIDTH_PT: f64 = 0.75;

pub const CYAN: (f64, f64, f64) = (0.0, 1.0, 1.0);
pub const BLACK: (f64, f64, f64) = (0.0, 0.0, 0.0);
pub const GLUE_PINK: (f64, f64, f64) = (0.98, 0.85, 0.90);
