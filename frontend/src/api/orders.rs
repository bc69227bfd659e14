use super::{Api, ApiError};
use common::model::order::{Order, OrderStatus};
use common::pagination::{PageQuery, Paginated};
use common::requests::{
    CreateOrderRequest, ReclamationRequest, ResolveConflictRequest, StatusUpdateRequest,
};

/// `GET /orders`: the remote API scopes the list to the caller's role.
pub async fn list(api: &Api, query: &PageQuery) -> Result<Paginated<Order>, ApiError> {
    api.get(&format!("orders?{}", query.to_query_string())).await
}

/// Every page of `GET /orders` for `query`, concatenated.
pub async fn list_all(api: &Api, mut query: PageQuery) -> Result<Vec<Order>, ApiError> {
    let mut orders = Vec::new();
    loop {
        let page = list(api, &query).await?;
        let next = query.following(&page);
        orders.extend(page.results);
        match next {
            Some(following) => query = following,
            None => return Ok(orders),
        }
    }
}

pub async fn create(api: &Api, order: &CreateOrderRequest) -> Result<Order, ApiError> {
    api.post("orders", order).await
}

/// `PATCH /orders/{id}/status`. The remote API validates the transition.
pub async fn update_status(api: &Api, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    let body = StatusUpdateRequest {
        status,
        actual_delivery_date: None,
        note: None,
    };
    api.patch(&format!("orders/{}/status", id), &body).await
}

pub async fn file_reclamation(
    api: &Api,
    id: &str,
    reclamation: &ReclamationRequest,
) -> Result<Order, ApiError> {
    api.post(&format!("orders/{}/reclamation", id), reclamation)
        .await
}

pub async fn conflicts(api: &Api) -> Result<Vec<Order>, ApiError> {
    api.get("orders/conflicts").await
}

pub async fn start_review(api: &Api, id: &str) -> Result<Order, ApiError> {
    api.patch(&format!("orders/{}/conflict/review", id), &serde_json::json!({}))
        .await
}

pub async fn resolve_conflict(
    api: &Api,
    id: &str,
    request: &ResolveConflictRequest,
) -> Result<Order, ApiError> {
    api.patch(&format!("orders/{}/conflict/resolve", id), request)
        .await
}
