//! Paper stock table (keyed by SKU) and the interior/cover "quick-type"
//! tables (keyed by enum) used when a job references paper by weight and
//! finish rather than by exact SKU.

use press_geometry::PrintError;
use std::collections::HashMap;

/// Surface finish of a paper stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coating {
    Coated,
    Uncoated,
}

impl Coating {
    /// The caliper-formula factor from the spec's spine math:
    /// `caliper = gsm * factor / 25400` inches.
    pub fn caliper_factor(self) -> f64 {
        match self {
            Coating::Coated => 0.9,
            Coating::Uncoated => 1.3,
        }
    }
}

/// A single paper stock, the unique-keyed record from the catalog format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperStock {
    pub sku: String,
    pub name: String,
    pub gsm: f64,
    pub coating: Coating,
    pub finish: String,
    pub parent_width_in: f64,
    pub parent_height_in: f64,
    pub cost_per_sheet: f64,
    pub usage_tag: String,
}

/// Paper stocks keyed by SKU. A missing SKU is an error, never a silent
/// default.
#[derive(Debug, Clone, Default)]
pub struct PaperCatalog {
    stocks: HashMap<String, PaperStock>,
}

impl PaperCatalog {
    pub fn insert(&mut self, stock: PaperStock) {
        self.stocks.insert(stock.sku.clone(), stock);
    }

    pub fn lookup(&self, sku: &str) -> Result<&PaperStock, PrintError> {
        self.stocks
            .get(sku)
            .ok_or_else(|| PrintError::UnknownPaperSku(sku.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaperStock> {
        self.stocks.values()
    }
}

/// Interior paper quick-type, used to look up pages-per-inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteriorPaperType {
    Opaque,
    Gloss,
    Matte,
    Recycled,
}

/// Interior paper basis weight, in pounds (text weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteriorWeight {
    Lb50,
    Lb60,
    Lb70,
    Lb80,
    Lb100,
}

/// Cover paper quick-type, used to look up caliper in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverPaperType {
    Silk,
    Gloss,
    Matte,
    Uncoated,
}

/// Cover paper basis weight, in pounds (cover weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverWeight {
    Lb80,
    Lb100,
    Lb120,
    Lb140,
}

/// Illustrative PPI table. Real values are commercial pricing data and
/// belong in a loaded spreadsheet, not in source; this set exists so
/// Scenario E (96pp at 400 PPI) and the crate's own tests are reproducible
/// out of the box.
pub fn default_interior_ppi() -> HashMap<(InteriorPaperType, InteriorWeight), f64> {
    use InteriorPaperType::*;
    use InteriorWeight::*;
    HashMap::from([
        ((Opaque, Lb50), 550.0),
        ((Opaque, Lb60), 480.0),
        ((Opaque, Lb70), 440.0),
        ((Opaque, Lb80), 400.0),
        ((Opaque, Lb100), 330.0),
        ((Gloss, Lb60), 500.0),
        ((Gloss, Lb80), 420.0),
        ((Gloss, Lb100), 350.0),
        ((Matte, Lb60), 490.0),
        ((Matte, Lb80), 410.0),
        ((Matte, Lb100), 340.0),
        ((Recycled, Lb60), 460.0),
        ((Recycled, Lb80), 390.0),
    ])
}

/// Illustrative caliper table (inches per sheet). See
/// [`default_interior_ppi`] for the same caveat.
pub fn default_cover_caliper() -> HashMap<(CoverPaperType, CoverWeight), f64> {
    use CoverPaperType::*;
    use CoverWeight::*;
    HashMap::from([
        ((Silk, Lb80), 0.0075),
        ((Silk, Lb100), 0.0095),
        ((Silk, Lb120), 0.0115),
        ((Silk, Lb140), 0.0135),
        ((Gloss, Lb80), 0.0070),
        ((Gloss, Lb100), 0.0090),
        ((Gloss, Lb120), 0.0110),
        ((Matte, Lb80), 0.0078),
        ((Matte, Lb100), 0.0098),
        ((Matte, Lb120), 0.0118),
        ((Uncoated, Lb80), 0.0090),
        ((Uncoated, Lb100), 0.0110),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caliper_formula_matches_factor() {
        // 100# silk cover: gsm ~ 270.35 for 100# cover, but the table
        // stores the resulting caliper directly per the catalog format, so
        // this test only checks the factor values used to derive it.
        assert_eq!(Coating::Coated.caliper_factor(), 0.9);
        assert_eq!(Coating::Uncoated.caliper_factor(), 1.3);
    }

    #[test]
    fn missing_sku_is_an_error() {
        let catalog = PaperCatalog::default();
        assert!(catalog.lookup("nope").is_err());
    }

    #[test]
    fn insert_and_lookup_round_trips() {
        let mut catalog = PaperCatalog::default();
        catalog.insert(PaperStock {
            sku: "OP80T".to_string(),
            name: "Opaque 80# Text".to_string(),
            gsm: 118.0,
            coating: Coating::Uncoated,
            finish: "smooth".to_string(),
            parent_width_in: 25.0,
            parent_height_in: 38.0,
            cost_per_sheet: 0.08,
            usage_tag: "interior".to_string(),
        });
        assert_eq!(catalog.lookup("OP80T").unwrap().gsm, 118.0);
    }
}
