use common::model::product::Product;
use common::validation::{validate_product, ValidationError};

use crate::helpers::parse_decimal;

use super::messages::Field;

pub struct ProductsPage {
    /// Only laboratories edit; everyone else browses.
    pub editable: bool,
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub search: String,
    pub loading: bool,
    pub form: Option<ProductForm>,
    pub deleting: Option<Product>,
}

impl ProductsPage {
    pub fn new(editable: bool) -> Self {
        Self {
            editable,
            products: Vec::new(),
            total: 0,
            page: 1,
            search: String::new(),
            loading: true,
            form: None,
            deleting: None,
        }
    }
}

/// Product being edited. Price and tax stay as typed text until saved; the tax
/// is entered as a percentage ("5,5") and stored as a fraction (0.055).
pub struct ProductForm {
    pub product: Product,
    pub price: String,
    pub tax_percent: String,
    pub ingredients: String,
    pub reading_image: bool,
    pub error: Option<String>,
    pub saving: bool,
}

impl ProductForm {
    pub fn new(product: Product) -> Self {
        let is_new = product.id.is_empty();
        Self {
            price: if is_new { String::new() } else { product.unit_price.to_string() },
            tax_percent: if is_new {
                "5.5".to_string()
            } else {
                format!("{}", (product.tax_rate * 1000.0).round() / 10.0)
            },
            ingredients: product.ingredients.join(", "),
            product,
            reading_image: false,
            error: None,
            saving: false,
        }
    }

    pub fn apply(&mut self, field: Field) {
        match field {
            Field::Name(v) => self.product.name = v,
            Field::Description(v) => self.product.description = v,
            Field::Category(v) => self.product.category = v,
            Field::Price(v) => self.price = v,
            Field::TaxPercent(v) => self.tax_percent = v,
            Field::Ingredients(v) => self.ingredients = v,
            Field::Available(v) => self.product.available = v,
        }
    }

    pub fn validated(&self) -> Result<Product, ValidationError> {
        let mut product = self.product.clone();
        product.name = product.name.trim().to_string();
        product.category = product.category.trim().to_string();
        product.description = product.description.trim().to_string();
        product.unit_price = parse_decimal(&self.price).ok_or(ValidationError::InvalidPrice)?;
        product.tax_rate = parse_decimal(&self.tax_percent)
            .map(|percent| percent / 100.0)
            .ok_or(ValidationError::InvalidTaxRate)?;
        product.ingredients = self
            .ingredients
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();
        validate_product(&product)?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        let mut form = ProductForm::new(Product::default());
        form.apply(Field::Name("Pain de seigle".to_string()));
        form.apply(Field::Category("Pains".to_string()));
        form.apply(Field::Price("2,40".to_string()));
        form.apply(Field::Ingredients("seigle, eau ,, sel".to_string()));
        form
    }

    #[test]
    fn percent_becomes_a_fraction() {
        let product = filled().validated().unwrap();
        assert_eq!(product.unit_price, 2.4);
        assert!((product.tax_rate - 0.055).abs() < 1e-12);
        assert_eq!(product.ingredients, vec!["seigle", "eau", "sel"]);
    }

    #[test]
    fn missing_price_is_reported() {
        let mut form = filled();
        form.apply(Field::Price(String::new()));
        assert_eq!(form.validated().err(), Some(ValidationError::InvalidPrice));
    }

    #[test]
    fn tax_over_one_hundred_percent_is_refused() {
        let mut form = filled();
        form.apply(Field::TaxPercent("150".to_string()));
        assert_eq!(form.validated().err(), Some(ValidationError::InvalidTaxRate));
    }

    #[test]
    fn existing_tax_is_shown_as_percent() {
        let form = ProductForm::new(Product {
            id: "p1".to_string(),
            tax_rate: 0.055,
            unit_price: 1.2,
            ..Product::default()
        });
        assert_eq!(form.tax_percent, "5.5");
        assert_eq!(form.price, "1.2");
    }
}
