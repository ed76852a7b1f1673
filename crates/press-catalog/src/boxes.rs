//! Shipping box catalog, including multi-depth flattening.

/// Depth declaration for a shipping box: either a single fixed height or
/// an ordered list of depths a box SKU ships in (each flattened to its
/// own virtual box by [`ShippingBox::flatten`]).
#[derive(Debug, Clone, PartialEq)]
pub enum BoxDepth {
    Single(f64),
    MultiDepth(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingBox {
    pub name: String,
    pub width_in: f64,
    pub length_in: f64,
    pub depth: BoxDepth,
    pub cost: f64,
}

/// A box with one concrete height, after multi-depth flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatBox<'a> {
    pub name: &'a str,
    pub width_in: f64,
    pub length_in: f64,
    pub height_in: f64,
    pub cost: f64,
}

impl ShippingBox {
    /// Flatten a multi-depth declaration into one [`FlatBox`] per depth,
    /// each retaining this box's name (the packer treats each depth as an
    /// independently admissible box).
    pub fn flatten(&self) -> Vec<FlatBox<'_>> {
        match &self.depth {
            BoxDepth::Single(h) => vec![FlatBox {
                name: &self.name,
                width_in: self.width_in,
                length_in: self.length_in,
                height_in: *h,
                cost: self.cost,
            }],
            BoxDepth::MultiDepth(depths) => depths
                .iter()
                .map(|h| FlatBox {
                    name: &self.name,
                    width_in: self.width_in,
                    length_in: self.length_in,
                    height_in: *h,
                    cost: self.cost,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShippingBoxCatalog {
    pub boxes: Vec<ShippingBox>,
}

impl ShippingBoxCatalog {
    /// All admissible boxes with multi-depth entries flattened to
    /// individual candidates.
    pub fn flat_boxes(&self) -> Vec<FlatBox<'_>> {
        self.boxes.iter().flat_map(ShippingBox::flatten).collect()
    }

    pub fn by_name<'a>(&'a self, name: &str) -> Vec<FlatBox<'a>> {
        self.boxes
            .iter()
            .filter(|b| b.name == name)
            .flat_map(ShippingBox::flatten)
            .collect()
    }

    /// An illustrative catalog covering Scenario F (Standard Small Box
    /// 11.75 x 8.75 x 4.75).
    pub fn default_table() -> Self {
        Self {
            boxes: vec![
                ShippingBox {
                    name: "Standard Small Box".to_string(),
                    width_in: 11.75,
                    length_in: 8.75,
                    depth: BoxDepth::Single(4.75),
                    cost: 0.85,
                },
                ShippingBox {
                    name: "Standard Medium Box".to_string(),
                    width_in: 14.0,
                    length_in: 11.0,
                    depth: BoxDepth::MultiDepth(vec![6.0, 9.0, 12.0]),
                    cost: 1.15,
                },
                ShippingBox {
                    name: "Standard Large Box".to_string(),
                    width_in: 18.0,
                    length_in: 14.0,
                    depth: BoxDepth::Single(12.0),
                    cost: 1.60,
                },
            ],
        }
    }
}

impl Default for ShippingBoxCatalog {
    fn default() -> Self {
        Self::default_table()
    }
}
