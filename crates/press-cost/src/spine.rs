//! Spine-width fitting used to size the cover sheet for a perfect-bound
//! job. This is a different formula from `press-cover`'s spine math
//! (which works from interior PPI): here thickness comes straight from
//! the interior stocks' basis weight, since the cost estimator only
//! knows the job by paper SKU.

use press_catalog::PaperStock;

use crate::constants::GSM_CALIPER_DIVISOR;
use crate::types::Binding;

/// `gsm * factor / 25400`, in inches, for one sheet of `stock`.
pub fn caliper_in(stock: &PaperStock) -> f64 {
    stock.gsm * stock.coating.caliper_factor() / GSM_CALIPER_DIVISOR
}

/// Number of physical leaves (sheet-halves) contributed by `pages`
/// pages printed duplex, two pages to a leaf.
pub fn leaves(pages: u32) -> u32 {
    pages.div_ceil(2)
}

/// Spine width for cover fitting: zero unless the job is perfect-bound,
/// in which case it's the combined thickness of the bw and color
/// interior stocks.
pub fn spine_width_in(binding: Binding, bw_stock: &PaperStock, bw_pages: u32, color_stock: &PaperStock, color_pages: u32) -> f64 {
    if binding != Binding::PerfectBound {
        return 0.0;
    }
    leaves(bw_pages) as f64 * caliper_in(bw_stock) + leaves(color_pages) as f64 * caliper_in(color_stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_catalog::Coating;

    fn stock(gsm: f64, coating: Coating) -> PaperStock {
        PaperStock {
            sku: "TEST".into(),
            name: "Test".into(),
            gsm,
            coating,
            finish: "smooth".into(),
            parent_width_in: 25.0,
            parent_height_in: 38.0,
            cost_per_sheet: 0.05,
            usage_tag: "interior".into(),
        }
    }

    #[test]
    fn saddle_stitch_has_no_flat_spine() {
        let bw = stock(118.0, Coating::Uncoated);
        let color = stock(150.0, Coating::Coated);
        assert_eq!(spine_width_in(Binding::SaddleStitch, &bw, 32, &color, 0), 0.0);
    }

    #[test]
    fn perfect_bound_combines_both_stocks() {
        let bw = stock(118.0, Coating::Uncoated);
        let color = stock(150.0, Coating::Coated);
        let spine = spine_width_in(Binding::PerfectBound, &bw, 180, &color, 20);
        let expected = leaves(180) as f64 * caliper_in(&bw) + leaves(20) as f64 * caliper_in(&color);
        assert!((spine - expected).abs() < 1e-12);
    }

    #[test]
    fn leaves_rounds_odd_pages_up() {
        assert_eq!(leaves(17), 9);
        assert_eq!(leaves(18), 9);
    }
}
