//! Cost job specification and breakdown types.

/// Color of the printing applied to the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintColor {
    Bw,
    Color,
}

impl PrintColor {
    pub fn click_rate(self) -> f64 {
        match self {
            PrintColor::Bw => crate::constants::CLICK_RATE_BW,
            PrintColor::Color => crate::constants::CLICK_RATE_COLOR,
        }
    }
}

/// Lamination finish applied to the cover, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lamination {
    None,
    Gloss,
    Matte,
}

/// Binding method, which determines the page-count parity constraint,
/// the spine-width formula, and the labor model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Binding {
    PerfectBound,
    SaddleStitch,
    None,
}

/// A full book-printing job, expressed in the vocabulary a customer-
/// facing quoting tool would use: quantities, SKUs, and finishing
/// options rather than press-floor geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSpec {
    pub quantity: u32,
    pub finished_width_in: f64,
    pub finished_height_in: f64,
    pub bw_pages: u32,
    pub bw_paper_sku: String,
    pub color_pages: u32,
    pub color_paper_sku: String,
    pub has_cover: bool,
    pub cover_paper_sku: String,
    pub cover_print_color: PrintColor,
    pub cover_prints_both_sides: bool,
    pub lamination: Lamination,
    pub binding: Binding,
    pub labor_rate_per_hour: f64,
    pub markup_percent: f64,
    pub spoilage_percent: f64,
    pub calculate_shipping: bool,
    pub override_shipping_box: Option<String>,
}

/// Per-category labor minutes, kept alongside the rolled-up labor cost
/// so a quote can show its work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaborMinutes {
    pub setup: f64,
    pub printing: f64,
    pub laminating: f64,
    pub binding: f64,
    pub trimming: f64,
    pub wastage: f64,
}

impl LaborMinutes {
    pub fn total(&self) -> f64 {
        self.setup + self.printing + self.laminating + self.binding + self.trimming + self.wastage
    }
}

/// The shipping plan chosen by the packer, or `None` when shipping was
/// not requested or no box could hold even one book.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShippingPlan {
    pub box_name: String,
    pub books_per_box: u32,
    pub box_count: u32,
    pub book_weight_lb: f64,
    pub handling_cost: f64,
    pub carrier_cost: f64,
}

/// The full cost quote. `error` is set (and every cost field left at
/// its default) when the job cannot be produced as specified.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub paper_cost: f64,
    pub click_cost: f64,
    pub lamination_cost: f64,
    pub labor_cost: f64,
    pub shipping_cost: f64,
    pub subtotal: f64,
    pub markup: f64,
    pub total: f64,
    pub price_per_unit: f64,

    pub bw_press_sheets: u32,
    pub color_press_sheets: u32,
    pub cover_sheets: u32,
    pub bw_n_up: u32,
    pub color_n_up: u32,
    pub cover_n_up: u32,
    pub total_clicks: u32,

    pub labor_minutes: LaborMinutes,
    pub production_time_hours: f64,

    pub shipping_plan: Option<ShippingPlan>,
    pub error: Option<String>,
}

impl CostBreakdown {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()), ..Default::default() }
    }
}
