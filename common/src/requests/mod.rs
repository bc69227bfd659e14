//! Request payloads sent to the remote API and to the same-origin proxy routes.

use crate::model::announcement::{Category, Priority};
use crate::model::order::{OrderItem, OrderStatus, OrderTotals};
use crate::model::reclamation::{Discrepancy, Resolution};
use crate::model::user::Role;
use crate::pricing::LineCorrection;
use crate::session::UserInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/users/login`, stored verbatim as the session.
pub type LoginResponse = UserInfo;

/// Body of `PATCH /orders/{id}/status` and of the `PUT /api/delivery/{id}/status` proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body of the dispatch-mode claim: a delivery person takes an unassigned order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDeliveryRequest {
    pub delivery_user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub laboratory_id: Option<String>,
    pub scheduled_date: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(flatten)]
    pub totals: OrderTotals,
    /// `None` leaves the order in dispatch mode.
    pub delivery_user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReclamationRequest {
    pub description: String,
    pub discrepancies: Vec<Discrepancy>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConflictRequest {
    pub resolution: Resolution,
    pub resolution_note: Option<String>,
    pub corrections: Vec<LineCorrection>,
    pub corrected_items: Option<Vec<OrderItem>>,
    pub corrected_totals: Option<OrderTotals>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementPayload {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub category: Category,
    pub pinned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_update_omits_empty_fields() {
        let body = StatusUpdateRequest {
            status: OrderStatus::Delivering,
            actual_delivery_date: None,
            note: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"DELIVERING"}"#);
    }

    #[test]
    fn status_update_rejects_unknown_status() {
        assert!(serde_json::from_str::<StatusUpdateRequest>(r#"{"status":"SHIPPED"}"#).is_err());
    }
}
