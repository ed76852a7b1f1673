//! Read-only lookup tables for press sheets, paper stocks, cover stocks,
//! shipping boxes, and carrier rates.
//!
//! Every table here is pure data addressed by a typed key: string SKU for
//! paper stock, enum quick-types for interior/cover paper and shipping
//! boxes. Nothing in this crate mutates after construction — `Catalogs`
//! is built once per process and shared by reference.

mod boxes;
mod carrier;
mod paper;
mod sheet;

pub use boxes::{FlatBox, ShippingBox, ShippingBoxCatalog};
pub use carrier::CarrierRateTable;
pub use paper::{
    Coating, CoverPaperType, CoverWeight, InteriorPaperType, InteriorWeight, PaperCatalog,
    PaperStock,
};
pub use sheet::PressSheetSize;

/// The full set of catalogs used by the imposition, cover, and cost
/// crates. Construct one with [`Catalogs::default`] or assemble a custom
/// set (e.g. loaded from a pricing spreadsheet) with the same shape.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub paper: PaperCatalog,
    pub interior_ppi: std::collections::HashMap<(InteriorPaperType, InteriorWeight), f64>,
    pub cover_caliper: std::collections::HashMap<(CoverPaperType, CoverWeight), f64>,
    pub boxes: ShippingBoxCatalog,
    pub carrier_rates: CarrierRateTable,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            paper: PaperCatalog::default(),
            interior_ppi: paper::default_interior_ppi(),
            cover_caliper: paper::default_cover_caliper(),
            boxes: ShippingBoxCatalog::default(),
            carrier_rates: CarrierRateTable::default(),
        }
    }
}

impl Catalogs {
    /// The default table is total over the enum product, but a custom
    /// `Catalogs` may be partial — a missing combination is an error, not
    /// a silent zero.
    pub fn lookup_interior_ppi(
        &self,
        kind: InteriorPaperType,
        weight: InteriorWeight,
    ) -> Result<f64, press_geometry::PrintError> {
        self.interior_ppi.get(&(kind, weight)).copied().ok_or_else(|| {
            press_geometry::PrintError::UnknownPaperSku(format!(
                "interior paper {kind:?}/{weight:?} has no PPI entry"
            ))
        })
    }

    pub fn lookup_cover_caliper(
        &self,
        kind: CoverPaperType,
        weight: CoverWeight,
    ) -> Result<f64, press_geometry::PrintError> {
        self.cover_caliper.get(&(kind, weight)).copied().ok_or_else(|| {
            press_geometry::PrintError::UnknownPaperSku(format!(
                "cover paper {kind:?}/{weight:?} has no caliper entry"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogs_cover_scenario_e() {
        let catalogs = Catalogs::default();
        let ppi = catalogs
            .lookup_interior_ppi(InteriorPaperType::Opaque, InteriorWeight::Lb80)
            .unwrap();
        assert_eq!(ppi, 400.0);
        let caliper = catalogs
            .lookup_cover_caliper(CoverPaperType::Silk, CoverWeight::Lb100)
            .unwrap();
        assert!((caliper - 0.0095).abs() < 1e-6);
    }

    #[test]
    fn unknown_combo_is_an_error_not_zero() {
        let catalogs = Catalogs {
            interior_ppi: std::collections::HashMap::new(),
            ..Catalogs::default()
        };
        assert!(catalogs
            .lookup_interior_ppi(InteriorPaperType::Opaque, InteriorWeight::Lb80)
            .is_err());
    }
}
