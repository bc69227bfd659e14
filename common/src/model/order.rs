use crate::model::reclamation::Reclamation;
use serde::{Deserialize, Serialize};

/// Placeholder shown when an optional field is missing from the remote record.
pub const UNDEFINED_LABEL: &str = "Non défini";
/// Placeholder shown when no delivery person is attached to an order.
pub const UNASSIGNED_LABEL: &str = "Non assigné";

/// Lifecycle of an order, from the bakery request to the delivered goods.
///
/// The allowed moves between these states live in `crate::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InProgress,
    ReadyForDelivery,
    Dispatched,
    Delivering,
    Delivered,
    Cancelled,
}

/// One product line of an order.
///
/// Prices are expressed in euros. `tax_rate` is a fraction (`0.055`, `0.10`...).
/// The computed fields are refreshed by `crate::pricing::compute_line`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: String,
    pub name: String,
    #[serde(rename = "unitPriceHT")]
    pub unit_price_ht: f64,
    #[serde(rename = "unitPriceTTC", default)]
    pub unit_price_ttc: f64,
    pub tax_rate: f64,
    pub quantity: u32,
    #[serde(rename = "totalPriceHT", default)]
    pub total_price_ht: f64,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(rename = "totalPriceTTC", default)]
    pub total_price_ttc: f64,
}

/// Sums over every line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    #[serde(rename = "totalHT", default)]
    pub total_ht: f64,
    #[serde(rename = "totalTax", default)]
    pub total_tax: f64,
    #[serde(rename = "totalTTC", default)]
    pub total_ttc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryUser {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
}

/// An order as returned by `GET /orders`. Deliveries are the same record seen
/// from the delivery side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub reference_id: String,
    #[serde(default)]
    pub bakery_id: Option<String>,
    #[serde(default)]
    pub bakery_name: Option<String>,
    #[serde(default)]
    pub laboratory_id: Option<String>,
    #[serde(default)]
    pub delivery_user: Option<DeliveryUser>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub actual_delivery_date: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub has_conflict: bool,
    #[serde(default)]
    pub reclamation: Option<Reclamation>,
    #[serde(flatten)]
    pub totals: OrderTotals,
}

impl Order {
    pub fn bakery_label(&self) -> &str {
        non_empty(self.bakery_name.as_deref()).unwrap_or(UNDEFINED_LABEL)
    }

    pub fn address_label(&self) -> &str {
        non_empty(self.address.as_deref()).unwrap_or(UNDEFINED_LABEL)
    }

    pub fn delivery_user_label(&self) -> &str {
        self.delivery_user
            .as_ref()
            .and_then(|user| non_empty(Some(user.name.as_str())))
            .unwrap_or(UNASSIGNED_LABEL)
    }

    /// An order ready to leave without a delivery person can be claimed by any driver.
    pub fn is_dispatch_mode(&self) -> bool {
        self.delivery_user.is_none() && self.status == OrderStatus::ReadyForDelivery
    }

    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.delivery_user
            .as_ref()
            .is_some_and(|user| user.id == user_id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_json(extra: &str) -> String {
        format!(
            r#"{{"_id":"o1","referenceId":"CMD-001","status":"READY_FOR_DELIVERY"{}}}"#,
            extra
        )
    }

    #[test]
    fn missing_optional_fields_fall_back_to_placeholders() {
        let order: Order = serde_json::from_str(&order_json("")).unwrap();
        assert_eq!(order.bakery_label(), UNDEFINED_LABEL);
        assert_eq!(order.address_label(), UNDEFINED_LABEL);
        assert_eq!(order.delivery_user_label(), UNASSIGNED_LABEL);
        assert!(order.items.is_empty());
        assert_eq!(order.totals, OrderTotals::default());
    }

    #[test]
    fn unassigned_ready_order_is_in_dispatch_mode() {
        let order: Order = serde_json::from_str(&order_json("")).unwrap();
        assert!(order.is_dispatch_mode());

        let assigned: Order = serde_json::from_str(&order_json(
            r#","deliveryUser":{"_id":"d7","name":"Marc"}"#,
        ))
        .unwrap();
        assert!(!assigned.is_dispatch_mode());
        assert!(assigned.is_assigned_to("d7"));
        assert_eq!(assigned.delivery_user_label(), "Marc");
    }

    #[test]
    fn line_items_use_ht_ttc_field_names() {
        let order: Order = serde_json::from_str(&order_json(
            r#","items":[{"name":"Baguette","unitPriceHT":1.2,"taxRate":0.1,"quantity":2}],"totalHT":2.4"#,
        ))
        .unwrap();
        assert_eq!(order.items[0].unit_price_ht, 1.2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.totals.total_ht, 2.4);

        let json = serde_json::to_value(&order.items[0]).unwrap();
        assert!(json.get("totalPriceTTC").is_some());
        assert!(json.get("unitPriceHT").is_some());
    }
}
