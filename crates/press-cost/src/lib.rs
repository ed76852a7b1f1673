//! Print-job cost estimator: a pure function from a job specification
//! and the shared paper/box/carrier catalogs to a full cost breakdown,
//! plus the shipping bin-packer it calls into.

mod constants;
pub mod estimate;
pub mod fitting;
pub mod shipping;
pub mod spine;
pub mod types;

pub use estimate::estimate;
pub use types::{Binding, CostBreakdown, JobSpec, LaborMinutes, Lamination, PrintColor, ShippingPlan};
