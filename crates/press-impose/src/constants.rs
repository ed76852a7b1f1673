//! Magic numbers centralized in one place, the way the rest of the
//! workspace expects constants to be named and documented.

/// Line width for crop marks (points).
pub const CROP_MARK_WIDTH: f64 = 0.25;

/// Length of each crop mark leg (points).
pub const CROP_MARK_LENGTH: f64 = 12.0;

/// Gap between a crop mark and the trim edge it marks (points).
pub const CROP_MARK_GAP: f64 = 3.0;

/// Control point factor for approximating a quarter-circle with a cubic
/// Bezier curve: `4 * (sqrt(2) - 1) / 3`.
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

/// Target QR symbol size for the job slug (centimeters, converted to
/// points at draw time).
pub const SLUG_QR_SIZE_CM: f64 = 2.0;

/// Font size used for slug and spine-indicator text (points).
pub const SLUG_FONT_SIZE: f64 = 6.0;

/// Approximate character advance width ratio for Helvetica, used to
/// center short runs of text without shaping.
pub const HELVETICA_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Byte-size threshold (times the per-slot replication factor) beyond
/// which the engine splits output across multiple documents.
pub const CHUNK_BYTE_SIZE_LIMIT: u64 = 1_900_000_000;

/// Output-page ceiling per chunk in repeat mode (highest duplication).
pub const CHUNK_PAGE_LIMIT_REPEAT: usize = 50;

/// Output-page ceiling per chunk in every other mode.
pub const CHUNK_PAGE_LIMIT_DEFAULT: usize = 100;
