//! # Order pricing and corrected-order recomputation
//!
//! Line arithmetic (HT = price excluding tax, TTC = price including tax):
//!
//! - `total_price_ht = unit_price_ht × quantity`
//! - `tax_amount = total_price_ht × tax_rate`
//! - `total_price_ttc = total_price_ht + tax_amount`
//!
//! Each amount is rounded to the cent as soon as it is produced, and order totals
//! are the sums of the rounded line amounts, so the order TTC always equals the
//! sum of the line TTCs shown in the tables.
//!
//! When an administrator resolves a reclamation with `UPDATE_ORDER`, the order
//! lines are rebuilt from the corrected quantities (a line corrected to zero is
//! dropped) and the totals recomputed. Every other resolution keeps the order as
//! it was and carries no corrected lines.

use crate::model::order::{Order, OrderItem, OrderTotals};
use crate::model::reclamation::{Discrepancy, IssueType, Resolution};
use serde::{Deserialize, Serialize};

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Refreshes the computed fields of one line in place.
pub fn compute_line(item: &mut OrderItem) {
    let total_ht = round_cents(item.unit_price_ht * f64::from(item.quantity));
    let tax_amount = round_cents(total_ht * item.tax_rate);

    item.unit_price_ttc = round_cents(item.unit_price_ht * (1.0 + item.tax_rate));
    item.total_price_ht = total_ht;
    item.tax_amount = tax_amount;
    item.total_price_ttc = round_cents(total_ht + tax_amount);
}

/// Sums already computed lines.
pub fn compute_totals(items: &[OrderItem]) -> OrderTotals {
    let (ht, tax, ttc) = items.iter().fold((0.0, 0.0, 0.0), |(ht, tax, ttc), item| {
        (
            ht + item.total_price_ht,
            tax + item.tax_amount,
            ttc + item.total_price_ttc,
        )
    });
    OrderTotals {
        total_ht: round_cents(ht),
        total_tax: round_cents(tax),
        total_ttc: round_cents(ttc),
    }
}

/// Refreshes every line and returns the matching order totals.
pub fn recompute(items: &mut [OrderItem]) -> OrderTotals {
    items.iter_mut().for_each(compute_line);
    compute_totals(items)
}

/// Builds a priced line for a product added to a new order.
pub fn line_for_product(product: &crate::model::product::Product, quantity: u32) -> OrderItem {
    let mut item = OrderItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        unit_price_ht: product.unit_price,
        unit_price_ttc: 0.0,
        tax_rate: product.tax_rate,
        quantity,
        total_price_ht: 0.0,
        tax_amount: 0.0,
        total_price_ttc: 0.0,
    };
    compute_line(&mut item);
    item
}

/// Corrected values for one order line. Corrections are positional: the
/// correction at index `i` applies to the order line at index `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCorrection {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    #[serde(rename = "unitPriceHT", default)]
    pub unit_price_ht: Option<f64>,
}

impl LineCorrection {
    fn unchanged(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            product_name: item.name.clone(),
            quantity: item.quantity,
            unit_price_ht: None,
        }
    }

    /// The received quantity replaces the ordered one, and a price mismatch
    /// also replaces the unit price.
    fn reported(item: &OrderItem, discrepancy: &Discrepancy) -> Self {
        Self {
            quantity: discrepancy.received_quantity,
            unit_price_ht: match discrepancy.issue_type {
                IssueType::PriceMismatch => discrepancy.received_price,
                _ => None,
            },
            ..Self::unchanged(item)
        }
    }
}

/// Matched by product id, or by name when either side carries no id.
fn reports_on(discrepancy: &Discrepancy, item: &OrderItem) -> bool {
    if !discrepancy.product_id.is_empty() && !item.product_id.is_empty() {
        discrepancy.product_id == item.product_id
    } else {
        discrepancy.product_name == item.name
    }
}

/// Starting point of a review: one correction per order line at the ordered
/// quantity, overridden by what the reclamation reports as received.
///
/// Each discrepancy is used for one line at most. When several lines carry the
/// same product, a discrepancy goes to the first free line whose quantity equals
/// its ordered quantity, and otherwise to the first free line of that product.
pub fn corrections_for_order(order: &Order) -> Vec<LineCorrection> {
    let discrepancies = order
        .reclamation
        .as_ref()
        .map(|r| r.discrepancies.as_slice())
        .unwrap_or_default();

    let mut line_of: Vec<Option<usize>> = vec![None; order.items.len()];
    for (reported, discrepancy) in discrepancies.iter().enumerate() {
        let free: Vec<usize> = (0..order.items.len())
            .filter(|&index| line_of[index].is_none() && reports_on(discrepancy, &order.items[index]))
            .collect();
        let target = free
            .iter()
            .copied()
            .find(|&index| order.items[index].quantity == discrepancy.ordered_quantity)
            .or_else(|| free.first().copied());
        if let Some(index) = target {
            line_of[index] = Some(reported);
        }
    }

    order
        .items
        .iter()
        .zip(line_of)
        .map(|(item, reported)| match reported {
            Some(index) => LineCorrection::reported(item, &discrepancies[index]),
            None => LineCorrection::unchanged(item),
        })
        .collect()
}

/// Applies `corrections` line by line to a copy of `items`, drops lines
/// corrected to zero and recomputes every remaining line. Lines without a
/// correction are kept as ordered.
pub fn corrected_items(items: &[OrderItem], corrections: &[LineCorrection]) -> Vec<OrderItem> {
    let mut corrected: Vec<OrderItem> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut item = item.clone();
            if let Some(correction) = corrections.get(index) {
                item.quantity = correction.quantity;
                if let Some(price) = correction.unit_price_ht {
                    item.unit_price_ht = price;
                }
            }
            item
        })
        .filter(|item| item.quantity > 0)
        .collect();
    recompute(&mut corrected);
    corrected
}

/// What a resolution does to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOutcome {
    pub resolution: Resolution,
    pub corrected_items: Option<Vec<OrderItem>>,
    pub corrected_totals: Option<OrderTotals>,
}

impl ResolutionOutcome {
    /// Amount the bakery is no longer charged (positive) once the order is corrected.
    pub fn ttc_reduction(&self, original: &OrderTotals) -> Option<f64> {
        self.corrected_totals
            .map(|totals| round_cents(original.total_ttc - totals.total_ttc))
    }
}

pub fn resolve(
    order: &Order,
    resolution: Resolution,
    corrections: &[LineCorrection],
) -> ResolutionOutcome {
    if !resolution.recomputes_order() {
        return ResolutionOutcome {
            resolution,
            corrected_items: None,
            corrected_totals: None,
        };
    }

    let items = corrected_items(&order.items, corrections);
    let totals = compute_totals(&items);
    ResolutionOutcome {
        resolution,
        corrected_items: Some(items),
        corrected_totals: Some(totals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::OrderStatus;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn item(id: &str, name: &str, unit: f64, rate: f64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: id.to_string(),
            name: name.to_string(),
            unit_price_ht: unit,
            unit_price_ttc: 0.0,
            tax_rate: rate,
            quantity,
            total_price_ht: 0.0,
            tax_amount: 0.0,
            total_price_ttc: 0.0,
        }
    }

    fn bakery_order() -> Order {
        Order {
            id: "o1".to_string(),
            reference_id: "CMD-001".to_string(),
            bakery_id: None,
            bakery_name: Some("Au Bon Pain".to_string()),
            laboratory_id: None,
            delivery_user: None,
            scheduled_date: None,
            actual_delivery_date: None,
            status: OrderStatus::Delivered,
            address: None,
            items: vec![
                item("p1", "Baguette", 1.20, 0.10, 2),
                item("p2", "Croissant", 1.00, 0.05, 3),
            ],
            notes: None,
            has_conflict: true,
            reclamation: None,
            totals: OrderTotals::default(),
        }
    }

    fn reported(order: &mut Order, discrepancies: Vec<Discrepancy>) {
        order.reclamation = Some(crate::model::reclamation::Reclamation {
            reported_by: None,
            reported_at: None,
            description: "Livraison incomplète".to_string(),
            discrepancies,
            status: Default::default(),
            resolution: None,
            resolution_note: None,
            corrected_items: None,
            corrected_totals: None,
        });
    }

    fn missing(id: &str, name: &str, ordered: u32, received: u32) -> Discrepancy {
        Discrepancy {
            product_id: id.to_string(),
            product_name: name.to_string(),
            ordered_quantity: ordered,
            received_quantity: received,
            ordered_price: None,
            received_price: None,
            condition: None,
            issue_type: IssueType::Missing,
        }
    }

    #[test]
    fn baguette_and_croissant_totals() {
        let mut items = bakery_order().items;
        let totals = recompute(&mut items);

        assert_close(items[0].total_price_ht, 2.40);
        assert_close(items[0].tax_amount, 0.24);
        assert_close(items[1].total_price_ht, 3.00);
        assert_close(items[1].tax_amount, 0.15);
        assert_close(totals.total_ht, 5.40);
        assert_close(totals.total_tax, 0.39);
        assert_close(totals.total_ttc, 5.79);
    }

    #[test]
    fn recompute_is_idempotent_and_additive() {
        let mut items = vec![
            item("a", "Pain de campagne", 3.35, 0.055, 7),
            item("b", "Éclair", 2.15, 0.10, 13),
            item("c", "Brioche", 4.99, 0.055, 1),
        ];
        let first = recompute(&mut items);
        let second = recompute(&mut items);
        assert_eq!(first, second);

        let line_sum: f64 = items.iter().map(|i| i.total_price_ttc).sum();
        assert_close(first.total_ttc, round_cents(line_sum));
        assert_close(first.total_ttc, round_cents(first.total_ht + first.total_tax));
    }

    #[test]
    fn zero_quantity_correction_drops_the_line() {
        let order = bakery_order();
        let mut corrections = corrections_for_order(&order);
        corrections[1].quantity = 0;
        let items = corrected_items(&order.items, &corrections);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Baguette");
        assert_close(compute_totals(&items).total_ttc, 2.64);
    }

    #[test]
    fn empty_order_has_zero_totals() {
        assert_eq!(compute_totals(&[]), OrderTotals::default());
    }

    #[test]
    fn update_order_recomputes_from_received_quantities() {
        let mut order = bakery_order();
        reported(&mut order, vec![missing("p1", "Baguette", 2, 1)]);
        let outcome = resolve(&order, Resolution::UpdateOrder, &corrections_for_order(&order));

        let totals = outcome.corrected_totals.unwrap();
        assert_close(totals.total_ht, 4.20);
        assert_close(totals.total_tax, 0.27);
        assert_close(totals.total_ttc, 4.47);

        let original = {
            let mut items = order.items.clone();
            recompute(&mut items)
        };
        assert_close(outcome.ttc_reduction(&original).unwrap(), 1.32);
    }

    #[test]
    fn price_mismatch_replaces_unit_price() {
        let mut order = bakery_order();
        reported(
            &mut order,
            vec![Discrepancy {
                product_id: String::new(),
                ordered_price: Some(1.00),
                received_price: Some(0.80),
                issue_type: IssueType::PriceMismatch,
                ..missing("", "Croissant", 3, 3)
            }],
        );
        let items = corrected_items(&order.items, &corrections_for_order(&order));
        assert_close(items[1].total_price_ht, 2.40);
    }

    #[test]
    fn lines_of_the_same_product_are_corrected_separately() {
        let mut order = bakery_order();
        order.items = vec![
            item("p1", "Baguette", 1.20, 0.10, 2),
            item("p1", "Baguette", 1.00, 0.10, 5),
        ];

        let untouched = resolve(&order, Resolution::UpdateOrder, &corrections_for_order(&order));
        let quantities: Vec<u32> = untouched
            .corrected_items
            .unwrap()
            .iter()
            .map(|i| i.quantity)
            .collect();
        assert_eq!(quantities, vec![2, 5]);

        let mut corrections = corrections_for_order(&order);
        corrections[1].quantity = 0;
        let outcome = resolve(&order, Resolution::UpdateOrder, &corrections);
        let items = outcome.corrected_items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_close(outcome.corrected_totals.unwrap().total_ttc, 2.64);
    }

    #[test]
    fn discrepancy_goes_to_the_line_with_the_reported_quantity() {
        let mut order = bakery_order();
        order.items = vec![
            item("p1", "Baguette", 1.20, 0.10, 2),
            item("p1", "Baguette", 1.00, 0.10, 5),
        ];
        reported(&mut order, vec![missing("p1", "Baguette", 5, 3)]);

        let quantities: Vec<u32> = corrections_for_order(&order).iter().map(|c| c.quantity).collect();
        assert_eq!(quantities, vec![2, 3]);
    }

    #[test]
    fn reject_leaves_corrected_totals_untouched() {
        let order = bakery_order();
        let matching = vec![LineCorrection {
            product_id: "p1".to_string(),
            product_name: "Baguette".to_string(),
            quantity: 2,
            unit_price_ht: None,
        }];
        let outcome = resolve(&order, Resolution::Reject, &matching);
        assert_eq!(outcome.resolution, Resolution::Reject);
        assert!(outcome.corrected_items.is_none());
        assert!(outcome.corrected_totals.is_none());

        for resolution in Resolution::ALL {
            if resolution != Resolution::UpdateOrder {
                assert!(resolve(&order, resolution, &matching).corrected_totals.is_none());
            }
        }
    }

    #[test]
    fn review_starts_from_reported_quantities() {
        let mut order = bakery_order();
        reported(&mut order, vec![missing("p2", "Croissant", 3, 1)]);

        let corrections = corrections_for_order(&order);
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].quantity, 2);
        assert_eq!(corrections[1].quantity, 1);
    }
}
