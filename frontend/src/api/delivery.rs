//! Calls to the dashboard backend's proxy routes (`/api/delivery/...`).

use super::{Api, ApiError};
use common::model::order::{Order, OrderStatus};
use common::requests::{ClaimDeliveryRequest, StatusUpdateRequest};

pub async fn update_status(api: &Api, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    let body = StatusUpdateRequest {
        status,
        actual_delivery_date: (status == OrderStatus::Delivered)
            .then(|| js_sys::Date::new_0().to_iso_string().into()),
        note: None,
    };
    api.put_local(&format!("api/delivery/{}/status", id), &body)
        .await
}

/// Takes an order left in dispatch mode.
pub async fn claim(api: &Api, id: &str, delivery_user_id: &str) -> Result<Order, ApiError> {
    let body = ClaimDeliveryRequest {
        delivery_user_id: delivery_user_id.to_string(),
    };
    api.put_local(&format!("api/delivery/{}/claim", id), &body)
        .await
}
