//! Spine width and full-spread geometry for a perfect- or saddle-bound
//! cover wrap.

use press_geometry::PrintError;

/// Inputs to the spine calculation: interior page count and PPI (pages
/// per inch, from the interior stock's quick-type lookup) plus the
/// cover stock's caliper (inches per sheet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineInputs {
    pub interior_pages: u32,
    pub interior_ppi: f64,
    pub cover_caliper_in: f64,
}

/// The computed spine width and full cover spread, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverSpread {
    pub spine_width_in: f64,
    pub spread_width_in: f64,
    pub spread_height_in: f64,
    /// Set when the interior page count is odd, which leaves the spine
    /// centerline off the true fold line by half a page's thickness.
    pub odd_page_count: bool,
}

/// `spine = pages / ppi + 2 * caliper`.
pub fn spine_width_in(inputs: SpineInputs) -> Result<f64, PrintError> {
    if inputs.interior_ppi <= 0.0 {
        return Err(PrintError::InvalidGeometry("interior PPI must be positive".into()));
    }
    Ok(inputs.interior_pages as f64 / inputs.interior_ppi + 2.0 * inputs.cover_caliper_in)
}

/// Full spread = back panel + spine + front panel, plus bleed on every
/// outer edge.
pub fn compute_spread(
    inputs: SpineInputs,
    trim_width_in: f64,
    trim_height_in: f64,
    bleed_in: f64,
) -> Result<CoverSpread, PrintError> {
    if trim_width_in <= 0.0 || trim_height_in <= 0.0 {
        return Err(PrintError::InvalidGeometry("trim dimensions must be positive".into()));
    }
    let spine = spine_width_in(inputs)?;
    Ok(CoverSpread {
        spine_width_in: spine,
        spread_width_in: 2.0 * trim_width_in + spine + 2.0 * bleed_in,
        spread_height_in: trim_height_in + 2.0 * bleed_in,
        odd_page_count: inputs.interior_pages % 2 == 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_e_spine_width() {
        let spine = spine_width_in(SpineInputs {
            interior_pages: 96,
            interior_ppi: 400.0,
            cover_caliper_in: 0.0095,
        })
        .unwrap();
        assert!((spine - 0.259).abs() < 1e-9);
    }

    #[test]
    fn spread_width_recovers_spine_width() {
        let inputs =
            SpineInputs { interior_pages: 200, interior_ppi: 440.0, cover_caliper_in: 0.0078 };
        let spread = compute_spread(inputs, 6.0, 9.0, 0.125).unwrap();
        let recovered = spread.spread_width_in - 2.0 * 0.125 - 2.0 * 6.0;
        assert!((recovered - spread.spine_width_in).abs() < 1e-6);
    }

    #[test]
    fn odd_page_count_is_flagged() {
        let spread = compute_spread(
            SpineInputs { interior_pages: 97, interior_ppi: 400.0, cover_caliper_in: 0.0095 },
            6.0,
            9.0,
            0.0,
        )
        .unwrap();
        assert!(spread.odd_page_count);
    }

    #[test]
    fn zero_ppi_is_rejected() {
        let err = spine_width_in(SpineInputs {
            interior_pages: 100,
            interior_ppi: 0.0,
            cover_caliper_in: 0.01,
        })
        .unwrap_err();
        assert!(matches!(err, PrintError::InvalidGeometry(_)));
    }
}
