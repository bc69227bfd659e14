//! State of the orders page and the two forms it hosts.

use std::collections::BTreeMap;

use common::model::order::{Order, OrderItem, OrderStatus, OrderTotals};
use common::model::product::Product;
use common::model::reclamation::{Discrepancy, IssueType};
use common::pricing::{compute_totals, line_for_product};
use common::requests::{CreateOrderRequest, ReclamationRequest};
use common::validation::{validate_order_lines, validate_reclamation, ValidationError};

pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub search: String,
    pub status_filter: Option<OrderStatus>,
    pub loading: bool,
    /// Order whose status change or claim is in flight.
    pub busy: Option<String>,
    pub dialog: Option<OrderDialog>,
}

pub enum OrderDialog {
    View(Order),
    Create(CreateForm),
    Reclamation(ReclamationForm),
}

impl OrdersPage {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            total: 0,
            page: 1,
            search: String::new(),
            status_filter: None,
            loading: true,
            busy: None,
            dialog: None,
        }
    }

    /// Swaps in the server's copy of an order after an update.
    pub fn replace(&mut self, order: Order) {
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == order.id) {
            *slot = order;
        }
    }
}

/// New order built from the bakery's product catalog.
#[derive(Default)]
pub struct CreateForm {
    pub catalog: Vec<Product>,
    pub loading: bool,
    pub quantities: BTreeMap<String, u32>,
    pub scheduled_date: String,
    pub address: String,
    pub notes: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CreateForm {
    pub fn set_quantity(&mut self, product_id: String, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(&product_id);
        } else {
            self.quantities.insert(product_id, quantity);
        }
    }

    pub fn quantity(&self, product_id: &str) -> u32 {
        self.quantities.get(product_id).copied().unwrap_or(0)
    }

    /// Priced lines in catalog order, one per product with a quantity.
    pub fn lines(&self) -> Vec<OrderItem> {
        self.catalog
            .iter()
            .filter_map(|product| {
                let quantity = self.quantity(&product.id);
                (quantity > 0).then(|| line_for_product(product, quantity))
            })
            .collect()
    }

    pub fn totals(&self) -> OrderTotals {
        compute_totals(&self.lines())
    }

    /// Lines from several laboratories are sent as one order; the laboratory of
    /// the first line is recorded.
    pub fn to_request(&self) -> Result<CreateOrderRequest, ValidationError> {
        let items = self.lines();
        let quantities: Vec<u32> = items.iter().map(|i| i.quantity).collect();
        validate_order_lines(&quantities)?;

        let laboratory_id = self
            .catalog
            .iter()
            .find(|p| self.quantity(&p.id) > 0)
            .and_then(|p| p.laboratory_id.clone());
        let totals = compute_totals(&items);

        Ok(CreateOrderRequest {
            laboratory_id,
            scheduled_date: non_blank(&self.scheduled_date),
            address: non_blank(&self.address),
            notes: non_blank(&self.notes),
            items,
            totals,
            delivery_user_id: None,
        })
    }
}

/// One editable row of a reclamation: an order line plus what was received.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscrepancyLine {
    pub product_id: String,
    pub product_name: String,
    pub ordered_quantity: u32,
    pub received_quantity: u32,
    pub ordered_price: f64,
    pub received_price: Option<f64>,
    pub issue: Option<IssueType>,
    pub condition: String,
}

pub struct ReclamationForm {
    pub order: Order,
    pub description: String,
    pub lines: Vec<DiscrepancyLine>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ReclamationForm {
    pub fn new(order: Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| DiscrepancyLine {
                product_id: item.product_id.clone(),
                product_name: item.name.clone(),
                ordered_quantity: item.quantity,
                received_quantity: item.quantity,
                ordered_price: item.unit_price_ht,
                received_price: None,
                issue: None,
                condition: String::new(),
            })
            .collect();
        Self {
            order,
            description: String::new(),
            lines,
            error: None,
            submitting: false,
        }
    }

    /// Rows flagged with an issue become discrepancies.
    pub fn discrepancies(&self) -> Vec<Discrepancy> {
        self.lines
            .iter()
            .filter_map(|line| {
                line.issue.map(|issue_type| Discrepancy {
                    product_id: line.product_id.clone(),
                    product_name: line.product_name.clone(),
                    ordered_quantity: line.ordered_quantity,
                    received_quantity: line.received_quantity,
                    ordered_price: Some(line.ordered_price),
                    received_price: line.received_price,
                    condition: non_blank(&line.condition),
                    issue_type,
                })
            })
            .collect()
    }

    pub fn to_request(&self) -> Result<ReclamationRequest, ValidationError> {
        let discrepancies = self.discrepancies();
        validate_reclamation(&self.description, &discrepancies)?;
        Ok(ReclamationRequest {
            description: self.description.trim().to_string(),
            discrepancies,
        })
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut DiscrepancyLine> {
        self.lines.get_mut(index)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64, tax: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: price,
            tax_rate: tax,
            available: true,
            active: true,
            laboratory_id: Some("lab-1".to_string()),
            ..Product::default()
        }
    }

    fn delivered_order() -> Order {
        serde_json::from_str(
            r#"{"_id":"o1","referenceId":"CMD-001","status":"DELIVERED","items":[
                {"productId":"p1","name":"Baguette","unitPriceHT":1.2,"taxRate":0.055,"quantity":3},
                {"productId":"p2","name":"Croissant","unitPriceHT":0.9,"taxRate":0.1,"quantity":2}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn create_form_prices_selected_products_only() {
        let mut form = CreateForm {
            catalog: vec![
                product("p1", "Baguette", 1.2, 0.055),
                product("p2", "Croissant", 0.9, 0.1),
            ],
            ..CreateForm::default()
        };
        form.set_quantity("p2".to_string(), 4);

        let lines = form.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Croissant");
        assert_eq!(form.totals().total_ht, 3.6);

        form.set_quantity("p2".to_string(), 0);
        assert!(form.lines().is_empty());
    }

    #[test]
    fn empty_order_is_refused() {
        let form = CreateForm {
            catalog: vec![product("p1", "Baguette", 1.2, 0.055)],
            ..CreateForm::default()
        };
        assert_eq!(form.to_request().err(), Some(ValidationError::EmptyOrder));
    }

    #[test]
    fn create_request_carries_laboratory_and_totals() {
        let mut form = CreateForm {
            catalog: vec![product("p1", "Baguette", 1.2, 0.055)],
            address: "  ".to_string(),
            ..CreateForm::default()
        };
        form.set_quantity("p1".to_string(), 10);
        let request = form.to_request().unwrap();
        assert_eq!(request.laboratory_id.as_deref(), Some("lab-1"));
        assert_eq!(request.address, None);
        assert_eq!(request.totals.total_ht, 12.0);
        assert_eq!(request.totals.total_tax, 0.66);
    }

    #[test]
    fn only_flagged_lines_become_discrepancies() {
        let mut form = ReclamationForm::new(delivered_order());
        assert!(form.discrepancies().is_empty());

        let line = form.line_mut(1).unwrap();
        line.received_quantity = 0;
        line.issue = Some(IssueType::Missing);

        let discrepancies = form.discrepancies();
        assert_eq!(discrepancies.len(), 1);
        assert_eq!(discrepancies[0].product_name, "Croissant");
        assert_eq!(discrepancies[0].quantity_gap(), -2);
    }

    #[test]
    fn reclamation_needs_a_description() {
        let mut form = ReclamationForm::new(delivered_order());
        form.lines[0].issue = Some(IssueType::Damaged);
        assert!(form.to_request().is_err());

        form.description = "Sacs déchirés".to_string();
        assert_eq!(form.to_request().unwrap().discrepancies.len(), 1);
    }
}
