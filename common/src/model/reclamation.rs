use crate::model::order::{OrderItem, OrderTotals};
use serde::{Deserialize, Serialize};

/// Where a reclamation stands in the review process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReclamationStatus {
    #[default]
    Reported,
    UnderReview,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Missing,
    Damaged,
    WrongProduct,
    QuantityMismatch,
    PriceMismatch,
    QualityIssue,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 7] = [
        IssueType::Missing,
        IssueType::Damaged,
        IssueType::WrongProduct,
        IssueType::QuantityMismatch,
        IssueType::PriceMismatch,
        IssueType::QualityIssue,
        IssueType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueType::Missing => "Produit manquant",
            IssueType::Damaged => "Produit endommagé",
            IssueType::WrongProduct => "Mauvais produit",
            IssueType::QuantityMismatch => "Quantité incorrecte",
            IssueType::PriceMismatch => "Prix incorrect",
            IssueType::QualityIssue => "Problème de qualité",
            IssueType::Other => "Autre",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            IssueType::Missing => "MISSING",
            IssueType::Damaged => "DAMAGED",
            IssueType::WrongProduct => "WRONG_PRODUCT",
            IssueType::QuantityMismatch => "QUANTITY_MISMATCH",
            IssueType::PriceMismatch => "PRICE_MISMATCH",
            IssueType::QualityIssue => "QUALITY_ISSUE",
            IssueType::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<IssueType> {
        IssueType::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// How an administrator closes a reclamation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    AcceptAsIs,
    PartialRefund,
    FullRefund,
    ReplaceOrder,
    UpdateOrder,
    Reject,
}

impl Resolution {
    pub const ALL: [Resolution; 6] = [
        Resolution::AcceptAsIs,
        Resolution::PartialRefund,
        Resolution::FullRefund,
        Resolution::ReplaceOrder,
        Resolution::UpdateOrder,
        Resolution::Reject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resolution::AcceptAsIs => "Accepter en l'état",
            Resolution::PartialRefund => "Remboursement partiel",
            Resolution::FullRefund => "Remboursement total",
            Resolution::ReplaceOrder => "Remplacer la commande",
            Resolution::UpdateOrder => "Corriger la commande",
            Resolution::Reject => "Rejeter",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Resolution::AcceptAsIs => "ACCEPT_AS_IS",
            Resolution::PartialRefund => "PARTIAL_REFUND",
            Resolution::FullRefund => "FULL_REFUND",
            Resolution::ReplaceOrder => "REPLACE_ORDER",
            Resolution::UpdateOrder => "UPDATE_ORDER",
            Resolution::Reject => "REJECT",
        }
    }

    pub fn from_code(code: &str) -> Option<Resolution> {
        Resolution::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Only a corrected order carries recomputed lines and totals.
    pub fn recomputes_order(self) -> bool {
        self == Resolution::UpdateOrder
    }
}

/// Gap between what was ordered and what the bakery received for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    #[serde(default)]
    pub product_id: String,
    pub product_name: String,
    pub ordered_quantity: u32,
    pub received_quantity: u32,
    #[serde(default)]
    pub ordered_price: Option<f64>,
    #[serde(default)]
    pub received_price: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    pub issue_type: IssueType,
}

impl Discrepancy {
    pub fn quantity_gap(&self) -> i64 {
        i64::from(self.received_quantity) - i64::from(self.ordered_quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reclamation {
    #[serde(default)]
    pub reported_by: Option<String>,
    #[serde(default)]
    pub reported_at: Option<String>,
    pub description: String,
    #[serde(default)]
    pub discrepancies: Vec<Discrepancy>,
    #[serde(default)]
    pub status: ReclamationStatus,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    #[serde(default)]
    pub resolution_note: Option<String>,
    #[serde(default)]
    pub corrected_items: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub corrected_totals: Option<OrderTotals>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_codes_match_wire_names() {
        for resolution in Resolution::ALL {
            let json = serde_json::to_string(&resolution).unwrap();
            assert_eq!(json, format!("\"{}\"", resolution.code()));
            assert_eq!(Resolution::from_code(resolution.code()), Some(resolution));
        }
    }

    #[test]
    fn reclamation_defaults_to_reported_without_resolution() {
        let reclamation: Reclamation = serde_json::from_str(
            r#"{"description":"Il manque des croissants","discrepancies":[
                {"productName":"Croissant","orderedQuantity":10,"receivedQuantity":7,"issueType":"MISSING"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reclamation.status, ReclamationStatus::Reported);
        assert!(reclamation.resolution.is_none());
        assert_eq!(reclamation.discrepancies[0].quantity_gap(), -3);
    }
}
