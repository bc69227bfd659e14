use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Price excluding tax, in euros.
    pub unit_price: f64,
    /// Fraction, e.g. `0.055` for 5.5 %.
    pub tax_rate: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    /// `data:image/...;base64,...` URL, uploaded from the product dialog.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub laboratory_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn unit_price_ttc(&self) -> f64 {
        crate::pricing::round_cents(self.unit_price * (1.0 + self.tax_rate))
    }

    /// Products a bakery can put in a new order.
    pub fn is_orderable(&self) -> bool {
        self.active && self.available
    }
}
