//! The 13-step cost estimation algorithm: a pure function from a job
//! specification and the shared catalogs to a cost breakdown.

use press_catalog::Catalogs;

use crate::constants::*;
use crate::fitting::best_n_up;
use crate::shipping::{self, BookComponent, BookDimensions};
use crate::spine;
use crate::types::{Binding, CostBreakdown, JobSpec, LaborMinutes, Lamination, PrintColor};

/// Run the full estimate. Never panics on a malformed job: every
/// failure path returns a breakdown with `error` set instead.
pub fn estimate(job: &JobSpec, catalogs: &Catalogs) -> CostBreakdown {
    let total_interior_pages = job.bw_pages + job.color_pages;

    // 1. Validate.
    if job.binding == Binding::SaddleStitch && total_interior_pages % 4 != 0 {
        return CostBreakdown::with_error(
            "Saddle stitch requires the total interior page count to be a multiple of 4.",
        );
    }

    let bw_stock = match catalogs.paper.lookup(&job.bw_paper_sku) {
        Ok(s) => s,
        Err(e) => return CostBreakdown::with_error(e.to_string()),
    };
    let color_stock = match catalogs.paper.lookup(&job.color_paper_sku) {
        Ok(s) => s,
        Err(e) => return CostBreakdown::with_error(e.to_string()),
    };
    let cover_stock = if job.has_cover {
        match catalogs.paper.lookup(&job.cover_paper_sku) {
            Ok(s) => Some(s),
            Err(e) => return CostBreakdown::with_error(e.to_string()),
        }
    } else {
        None
    };

    // 2. Spoilage multiplier.
    let spoilage_multiplier = 1.0 + job.spoilage_percent / 100.0;

    // 3. Imposition n-up per interior paper.
    let bw_n_up = if job.bw_pages > 0 {
        best_n_up(bw_stock.parent_width_in, bw_stock.parent_height_in, job.finished_width_in, job.finished_height_in)
    } else {
        1
    };
    if bw_n_up == 0 {
        return CostBreakdown::with_error(format!(
            "{} does not fit a finished page on its parent sheet.",
            job.bw_paper_sku
        ));
    }
    let color_n_up = if job.color_pages > 0 {
        best_n_up(
            color_stock.parent_width_in,
            color_stock.parent_height_in,
            job.finished_width_in,
            job.finished_height_in,
        )
    } else {
        1
    };
    if color_n_up == 0 {
        return CostBreakdown::with_error(format!(
            "{} does not fit a finished page on its parent sheet.",
            job.color_paper_sku
        ));
    }

    // 4. Spine width and cover n-up.
    let spine_width_in = spine::spine_width_in(job.binding, bw_stock, job.bw_pages, color_stock, job.color_pages);
    let (cover_n_up, cover_sheets) = match &cover_stock {
        Some(stock) => {
            let spread_width_in = 2.0 * job.finished_width_in + spine_width_in;
            let n_up = if spread_width_in <= stock.parent_width_in && job.finished_height_in <= stock.parent_height_in {
                1
            } else if spread_width_in <= stock.parent_height_in && job.finished_height_in <= stock.parent_width_in {
                1
            } else {
                0
            };
            if n_up == 0 {
                return CostBreakdown::with_error(format!(
                    "the cover spread does not fit on {}.",
                    job.cover_paper_sku
                ));
            }
            let sheets = ((job.quantity as f64 / n_up as f64) * spoilage_multiplier).ceil() as u32;
            (n_up, sheets)
        }
        None => (0, 0),
    };

    // 5. Press sheets per interior paper class.
    let bw_leaves = job.bw_pages.div_ceil(2);
    let color_leaves = job.color_pages.div_ceil(2);
    let bw_press_sheets = press_sheets(job.quantity, bw_leaves, bw_n_up, spoilage_multiplier);
    let color_press_sheets = press_sheets(job.quantity, color_leaves, color_n_up, spoilage_multiplier);

    // 6. Clicks.
    let bw_clicks = bw_press_sheets * 2;
    let color_clicks = color_press_sheets * 2;
    let cover_clicks = cover_sheets * if job.cover_prints_both_sides { 2 } else { 1 };
    let total_clicks = bw_clicks + color_clicks + cover_clicks;
    let click_cost = bw_clicks as f64 * CLICK_RATE_BW
        + color_clicks as f64 * CLICK_RATE_COLOR
        + cover_clicks as f64 * job.cover_print_color.click_rate();

    // 7. Paper cost.
    let paper_cost = bw_press_sheets as f64 * bw_stock.cost_per_sheet
        + color_press_sheets as f64 * color_stock.cost_per_sheet
        + cover_stock.map_or(0.0, |s| cover_sheets as f64 * s.cost_per_sheet);

    // 8. Lamination.
    let lamination_cost = if job.has_cover {
        match job.lamination {
            Lamination::None => 0.0,
            Lamination::Gloss => job.quantity as f64 * LAMINATION_COST_GLOSS,
            Lamination::Matte => job.quantity as f64 * LAMINATION_COST_MATTE,
        }
    } else {
        0.0
    };

    // 9. Labor time.
    let labor_minutes = labor_minutes(job, cover_stock.map(|s| s.parent_height_in), bw_press_sheets + color_press_sheets, cover_sheets);
    let labor_cost = labor_minutes.total() / 60.0 * job.labor_rate_per_hour;

    // 10. Subtotal.
    let subtotal = paper_cost + click_cost + lamination_cost + labor_cost;

    // 11. Markup.
    let markup = subtotal * job.markup_percent / 100.0;

    // 12. Shipping.
    let shipping_plan = if job.calculate_shipping {
        let mut components = vec![BookComponent {
            area_in2: job.finished_width_in * job.finished_height_in,
            gsm: bw_stock.gsm,
        }];
        if job.color_pages > 0 {
            components.push(BookComponent {
                area_in2: job.finished_width_in * job.finished_height_in,
                gsm: color_stock.gsm,
            });
        }
        if let Some(stock) = cover_stock {
            components.push(BookComponent {
                area_in2: (2.0 * job.finished_width_in + spine_width_in) * job.finished_height_in,
                gsm: stock.gsm,
            });
        }
        let weight = shipping::book_weight_lb(&components);
        shipping::pack_shipment(
            &catalogs.boxes,
            &catalogs.carrier_rates,
            job.quantity,
            weight,
            BookDimensions {
                width_in: job.finished_width_in,
                height_in: job.finished_height_in,
                spine_in: spine_width_in,
            },
            job.override_shipping_box.as_deref(),
        )
    } else {
        None
    };
    let shipping_cost = shipping_plan.as_ref().map_or(0.0, |p| p.handling_cost + p.carrier_cost);

    // 13. Total.
    let total = subtotal + markup + shipping_cost;
    let price_per_unit = total / job.quantity as f64;

    CostBreakdown {
        paper_cost,
        click_cost,
        lamination_cost,
        labor_cost,
        shipping_cost,
        subtotal,
        markup,
        total,
        price_per_unit,
        bw_press_sheets,
        color_press_sheets,
        cover_sheets,
        bw_n_up,
        color_n_up,
        cover_n_up,
        total_clicks,
        labor_minutes,
        production_time_hours: labor_minutes.total() / 60.0,
        shipping_plan,
        error: None,
    }
}

fn press_sheets(quantity: u32, leaves: u32, n_up: u32, spoilage_multiplier: f64) -> u32 {
    if leaves == 0 {
        return 0;
    }
    ((quantity as f64 * leaves as f64 / n_up as f64) * spoilage_multiplier).ceil() as u32
}

fn labor_minutes(job: &JobSpec, cover_parent_height_in: Option<f64>, total_interior_press_sheets: u32, cover_sheets: u32) -> LaborMinutes {
    let binding_setup = match job.binding {
        Binding::PerfectBound => BINDING_SETUP_PERFECT_MINUTES,
        Binding::SaddleStitch => BINDING_SETUP_SADDLE_MINUTES,
        Binding::None => 0.0,
    };
    let setup = LABOR_SETUP_MINUTES + binding_setup;

    let printing = total_interior_press_sheets as f64 / PRESS_SHEETS_PER_MINUTE;

    let laminating = match (job.lamination, cover_parent_height_in) {
        (Lamination::None, _) | (_, None) => 0.0,
        (_, Some(parent_height_in)) => {
            cover_sheets as f64 * parent_height_in * METERS_PER_INCH / LAMINATION_METERS_PER_MINUTE
        }
    };

    let books_per_hour = match job.binding {
        Binding::PerfectBound => BOOKS_PER_HOUR_PERFECT,
        Binding::SaddleStitch => BOOKS_PER_HOUR_SADDLE,
        Binding::None => 0.0,
    };
    let binding = if books_per_hour > 0.0 {
        (job.quantity as f64 / books_per_hour) * 60.0 * BINDING_INEFFICIENCY_FACTOR
    } else {
        0.0
    };

    let trimming_batches = job.quantity.div_ceil(TRIMMING_BATCH_SIZE);
    let trimming = TRIMMING_BASE_MINUTES + trimming_batches as f64 * TRIMMING_MINUTES_PER_BATCH;

    let wastage = WASTAGE_FACTOR * (setup + printing + laminating + binding + trimming);

    LaborMinutes { setup, printing, laminating, binding, trimming, wastage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_catalog::{Coating, PaperStock};

    fn stock(sku: &str, gsm: f64, coating: Coating, parent_w: f64, parent_h: f64, cost: f64) -> PaperStock {
        PaperStock {
            sku: sku.into(),
            name: sku.into(),
            gsm,
            coating,
            finish: "smooth".into(),
            parent_width_in: parent_w,
            parent_height_in: parent_h,
            cost_per_sheet: cost,
            usage_tag: "interior".into(),
        }
    }

    fn test_catalogs() -> Catalogs {
        let mut catalogs = Catalogs::default();
        catalogs.paper.insert(stock("BW80", 118.0, Coating::Uncoated, 25.0, 38.0, 0.08));
        catalogs.paper.insert(stock("COLOR100", 150.0, Coating::Coated, 25.0, 38.0, 0.12));
        catalogs.paper.insert(stock("COVER100SILK", 270.0, Coating::Coated, 26.0, 40.0, 0.20));
        catalogs
    }

    fn base_job() -> JobSpec {
        JobSpec {
            quantity: 1000,
            finished_width_in: 6.0,
            finished_height_in: 9.0,
            bw_pages: 200,
            bw_paper_sku: "BW80".into(),
            color_pages: 0,
            color_paper_sku: "BW80".into(),
            has_cover: true,
            cover_paper_sku: "COVER100SILK".into(),
            cover_print_color: PrintColor::Color,
            cover_prints_both_sides: false,
            lamination: Lamination::Gloss,
            binding: Binding::PerfectBound,
            labor_rate_per_hour: 25.0,
            markup_percent: 35.0,
            spoilage_percent: 5.0,
            calculate_shipping: false,
            override_shipping_box: None,
        }
    }

    #[test]
    fn scenario_d_saddle_stitch_guard() {
        let mut job = base_job();
        job.binding = Binding::SaddleStitch;
        job.bw_pages = 18;
        let breakdown = estimate(&job, &test_catalogs());
        assert_eq!(
            breakdown.error.as_deref(),
            Some("Saddle stitch requires the total interior page count to be a multiple of 4.")
        );
    }

    #[test]
    fn happy_path_produces_a_positive_quote() {
        let breakdown = estimate(&base_job(), &test_catalogs());
        assert!(breakdown.error.is_none());
        assert!(breakdown.total > 0.0);
        assert!((breakdown.price_per_unit - breakdown.total / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn higher_quantity_never_lowers_total_cost() {
        let catalogs = test_catalogs();
        let mut small = base_job();
        small.quantity = 100;
        let mut large = base_job();
        large.quantity = 1000;
        let small_total = estimate(&small, &catalogs).total;
        let large_total = estimate(&large, &catalogs).total;
        assert!(large_total > small_total);
    }

    #[test]
    fn unknown_sku_surfaces_as_readable_error() {
        let mut job = base_job();
        job.bw_paper_sku = "NOPE".into();
        let breakdown = estimate(&job, &test_catalogs());
        assert!(breakdown.error.unwrap().contains("NOPE"));
    }

    #[test]
    fn pure_function_is_idempotent() {
        let catalogs = test_catalogs();
        let job = base_job();
        let a = estimate(&job, &catalogs);
        let b = estimate(&job, &catalogs);
        assert_eq!(a, b);
    }
}
