//! Carrier shipping rate table: a monotonically non-decreasing step
//! function of total weight, with a linear tail beyond the last tier.

/// `(max_weight_lb, cost)` tiers, rising, plus an overflow slope applied
/// beyond the last tier's weight.
#[derive(Debug, Clone)]
pub struct CarrierRateTable {
    tiers: Vec<(f64, f64)>,
    overflow_per_lb: f64,
}

impl CarrierRateTable {
    /// Build a table from ascending `(max_weight_lb, cost)` tiers and an
    /// overflow rate. Panics if the tiers are not strictly increasing in
    /// both weight and cost — monotonicity is a caller-visible invariant,
    /// not just a convention, so a malformed table fails at construction
    /// rather than silently misquoting a price.
    pub fn new(tiers: Vec<(f64, f64)>, overflow_per_lb: f64) -> Self {
        for pair in tiers.windows(2) {
            assert!(
                pair[1].0 > pair[0].0 && pair[1].1 >= pair[0].1,
                "carrier rate tiers must be strictly increasing in weight and non-decreasing in cost"
            );
        }
        Self { tiers, overflow_per_lb }
    }

    /// Cost for a given total shipment weight in pounds.
    pub fn rate_for(&self, weight_lb: f64) -> f64 {
        match self.tiers.iter().find(|(max_w, _)| weight_lb <= *max_w) {
            Some((_, cost)) => *cost,
            None => {
                let (last_w, last_cost) = self.tiers.last().copied().unwrap_or((0.0, 0.0));
                last_cost + (weight_lb - last_w).max(0.0) * self.overflow_per_lb
            }
        }
    }
}

impl Default for CarrierRateTable {
    /// Illustrative tiers; see `SPEC_FULL.md` Open Question 1 — exact
    /// carrier pricing is data, not logic, and belongs in a loaded rate
    /// sheet for a production deployment.
    fn default() -> Self {
        Self::new(
            vec![
                (5.0, 8.50),
                (10.0, 12.00),
                (20.0, 18.50),
                (35.0, 26.00),
                (50.0, 35.00),
            ],
            0.75,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_monotonic() {
        let table = CarrierRateTable::default();
        let mut last = f64::MIN;
        for w in (1..400).map(|w| w as f64) {
            let rate = table.rate_for(w);
            assert!(rate >= last, "rate decreased at weight {w}");
            last = rate;
        }
    }

    #[test]
    fn overflow_tail_is_linear() {
        let table = CarrierRateTable::default();
        let at_cap = table.rate_for(50.0);
        let past_cap = table.rate_for(60.0);
        assert!((past_cap - (at_cap + 10.0 * 0.75)).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn non_monotonic_tiers_panic_at_construction() {
        CarrierRateTable::new(vec![(10.0, 5.0), (5.0, 8.0)], 0.5);
    }
}
