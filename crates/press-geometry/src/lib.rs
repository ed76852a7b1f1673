//! Units, rectangles, and the shared error type for the print production
//! toolkit.
//!
//! Every other crate in the workspace (`press-catalog`, `press-impose`,
//! `press-cover`, `press-cost`) builds on the conversions and the `Rect`
//! type defined here rather than rolling its own.

mod error;
mod rect;
mod units;

pub use error::PrintError;
pub use rect::Rect;
pub use units::{
    in_to_pt, max_units_along_axis, mm_to_pt, pt_to_in, pt_to_mm, Orientation,
};
