//! Pricing and production-rate constants for the cost model. These are
//! the few numbers the spec fixes directly; everything SKU- or
//! paper-specific lives in the catalog instead.

pub const CLICK_RATE_COLOR: f64 = 0.039;
pub const CLICK_RATE_BW: f64 = 0.009;

pub const LAMINATION_COST_GLOSS: f64 = 0.30;
pub const LAMINATION_COST_MATTE: f64 = 0.60;

/// Coated/uncoated caliper-formula factor, divided into `gsm` to get
/// inches of thickness per sheet.
pub const GSM_CALIPER_DIVISOR: f64 = 25_400.0;

pub const LABOR_SETUP_MINUTES: f64 = 20.0;
pub const BINDING_SETUP_PERFECT_MINUTES: f64 = 15.0;
pub const BINDING_SETUP_SADDLE_MINUTES: f64 = 10.0;

pub const PRESS_SHEETS_PER_MINUTE: f64 = 15.0;
pub const LAMINATION_METERS_PER_MINUTE: f64 = 5.0;
pub const METERS_PER_INCH: f64 = 0.0254;

pub const BOOKS_PER_HOUR_PERFECT: f64 = 300.0;
pub const BOOKS_PER_HOUR_SADDLE: f64 = 400.0;
pub const BINDING_INEFFICIENCY_FACTOR: f64 = 1.20;

pub const TRIMMING_BASE_MINUTES: f64 = 10.0;
pub const TRIMMING_BATCH_SIZE: u32 = 250;
pub const TRIMMING_MINUTES_PER_BATCH: f64 = 5.0;

pub const WASTAGE_FACTOR: f64 = 0.15;

/// Shipping packer constants.
pub const MAX_BOX_WEIGHT_LB: f64 = 40.0;
pub const GRAMS_PER_LB: f64 = 453.592;
pub const SQ_IN_PER_SQ_M: f64 = 1550.0031;
