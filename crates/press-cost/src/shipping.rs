//! 3D bin-packing for finished books: chooses the admissible shipping
//! box, fit to the book by pairing each book axis with its best-matching
//! box axis, that minimizes handling-plus-carrier cost for the full
//! shipment.

use press_catalog::{CarrierRateTable, FlatBox, ShippingBoxCatalog};

use crate::constants::{GRAMS_PER_LB, MAX_BOX_WEIGHT_LB, SQ_IN_PER_SQ_M};
use crate::types::ShippingPlan;

/// One paper component contributing weight to a single book: its area
/// in square inches and the gsm of the stock it's printed on.
pub struct BookComponent {
    pub area_in2: f64,
    pub gsm: f64,
}

/// Total weight of one finished book in pounds, summed over its paper
/// components.
pub fn book_weight_lb(components: &[BookComponent]) -> f64 {
    let grams: f64 = components.iter().map(|c| (c.area_in2 / SQ_IN_PER_SQ_M) * c.gsm).sum();
    grams / GRAMS_PER_LB
}

/// Trimmed book dimensions in inches: width, height, and spine
/// thickness, the three axes tried against each candidate box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookDimensions {
    pub width_in: f64,
    pub height_in: f64,
    pub spine_in: f64,
}

impl BookDimensions {
    fn axes(self) -> [f64; 3] {
        [self.width_in, self.height_in, self.spine_in]
    }
}

/// Books per box for one candidate box. Of the six ways to assign the
/// book's three axes onto the box's three axes, the one that wastes the
/// least space pairs each book axis with the box axis closest to it in
/// size — so axes are matched by descending length rather than searched
/// combinatorially, then capped by the 40 lb per-box weight limit.
fn books_per_box(book: BookDimensions, book_weight_lb: f64, candidate: &FlatBox<'_>) -> u32 {
    let mut box_axes = [candidate.width_in, candidate.length_in, candidate.height_in];
    let mut book_axes = book.axes();
    box_axes.sort_by(|a, b| b.total_cmp(a));
    book_axes.sort_by(|a, b| b.total_cmp(a));

    let by_volume: u32 = box_axes
        .iter()
        .zip(book_axes.iter())
        .map(|(b, i)| (b / i).floor().max(0.0) as u32)
        .product();

    if book_weight_lb <= 0.0 {
        return by_volume;
    }
    let weight_cap = (MAX_BOX_WEIGHT_LB / book_weight_lb).floor() as u32;
    by_volume.min(weight_cap)
}

/// Choose the minimum-total-cost box (or the single named `override_box`
/// if given) for shipping `quantity` copies of a book weighing
/// `book_weight_lb` with dimensions `book`. Returns `None` if no
/// candidate box can hold even a single book.
pub fn pack_shipment(
    boxes: &ShippingBoxCatalog,
    carrier: &CarrierRateTable,
    quantity: u32,
    book_weight_lb: f64,
    book: BookDimensions,
    override_box: Option<&str>,
) -> Option<ShippingPlan> {
    let candidates: Vec<FlatBox<'_>> = match override_box {
        Some(name) => boxes.by_name(name),
        None => boxes.flat_boxes(),
    };

    candidates
        .iter()
        .filter_map(|candidate| {
            let per_box = books_per_box(book, book_weight_lb, candidate);
            if per_box == 0 {
                return None;
            }
            let box_count = quantity.div_ceil(per_box);
            let handling_cost = box_count as f64 * candidate.cost;
            let carrier_cost = carrier.rate_for(quantity as f64 * book_weight_lb);
            Some((
                handling_cost + carrier_cost,
                ShippingPlan {
                    box_name: candidate.name.to_string(),
                    books_per_box: per_box,
                    box_count,
                    book_weight_lb,
                    handling_cost,
                    carrier_cost,
                },
            ))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, plan)| plan)
}
