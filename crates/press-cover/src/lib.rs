//! Cover geometry and template engine: spine width and full-spread
//! math from interior page count, interior PPI, and cover caliper, plus
//! a two-page PDF template emitter marking trim, spine, hinge, and
//! glue-safe areas.

pub mod constants;
pub mod spine;
pub mod template;

pub use spine::{compute_spread, spine_width_in, CoverSpread, SpineInputs};
pub use template::{emit_cover_template, CoverTemplateSpec};

use press_catalog::{CoverPaperType, CoverWeight, InteriorPaperType, InteriorWeight};
use press_geometry::PrintError;

/// Everything needed to build a cover template from catalog SKUs rather
/// than raw PPI/caliper numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverJob {
    pub interior_pages: u32,
    pub interior_paper: InteriorPaperType,
    pub interior_weight: InteriorWeight,
    pub cover_paper: CoverPaperType,
    pub cover_weight: CoverWeight,
    pub trim_width_in: f64,
    pub trim_height_in: f64,
    pub bleed_in: f64,
}

/// Look up the interior PPI and cover caliper from `catalogs`, compute
/// the spread, and emit the two-page template PDF in one call.
pub fn build_cover(
    job: &CoverJob,
    catalogs: &press_catalog::Catalogs,
) -> Result<(Vec<u8>, CoverSpread), PrintError> {
    let ppi = catalogs.lookup_interior_ppi(job.interior_paper, job.interior_weight)?;
    let caliper = catalogs.lookup_cover_caliper(job.cover_paper, job.cover_weight)?;

    let spread = compute_spread(
        SpineInputs { interior_pages: job.interior_pages, interior_ppi: ppi, cover_caliper_in: caliper },
        job.trim_width_in,
        job.trim_height_in,
        job.bleed_in,
    )?;

    let pdf = emit_cover_template(&CoverTemplateSpec {
        trim_width_in: job.trim_width_in,
        trim_height_in: job.trim_height_in,
        bleed_in: job.bleed_in,
        spread,
    })?;

    Ok((pdf, spread))
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_catalog::Catalogs;

    #[test]
    fn scenario_e_end_to_end() {
        let catalogs = Catalogs::default();
        let job = CoverJob {
            interior_pages: 96,
            interior_paper: InteriorPaperType::Opaque,
            interior_weight: InteriorWeight::Lb80,
            cover_paper: CoverPaperType::Silk,
            cover_weight: CoverWeight::Lb100,
            trim_width_in: 6.0,
            trim_height_in: 9.0,
            bleed_in: 0.125,
        };
        let (pdf, spread) = build_cover(&job, &catalogs).unwrap();
        assert!((spread.spine_width_in - 0.259).abs() < 1e-9);
        assert!(!pdf.is_empty());
    }

    #[test]
    fn unknown_sku_combo_surfaces_as_an_error() {
        let catalogs = Catalogs { interior_ppi: Default::default(), ..Catalogs::default() };
        let job = CoverJob {
            interior_pages: 96,
            interior_paper: InteriorPaperType::Opaque,
            interior_weight: InteriorWeight::Lb80,
            cover_paper: CoverPaperType::Silk,
            cover_weight: CoverWeight::Lb100,
            trim_width_in: 6.0,
            trim_height_in: 9.0,
            bleed_in: 0.125,
        };
        assert!(build_cover(&job, &catalogs).is_err());
    }
}
