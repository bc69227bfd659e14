use super::{Api, ApiError};
use common::model::announcement::Announcement;
use common::requests::{AnnouncementPayload, CommentPayload};

pub async fn list(api: &Api) -> Result<Vec<Announcement>, ApiError> {
    api.get("api/announcements").await
}

pub async fn create(api: &Api, payload: &AnnouncementPayload) -> Result<Announcement, ApiError> {
    api.post("api/announcements", payload).await
}

pub async fn update(
    api: &Api,
    id: &str,
    payload: &AnnouncementPayload,
) -> Result<Announcement, ApiError> {
    api.put(&format!("api/announcements/{}", id), payload)
        .await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("api/announcements/{}", id)).await
}

pub async fn comment(api: &Api, id: &str, content: &str) -> Result<Announcement, ApiError> {
    let body = CommentPayload {
        content: content.trim().to_string(),
    };
    api.post(&format!("api/announcements/{}/comments", id), &body)
        .await
}

pub async fn mark_read(api: &Api, id: &str) -> Result<(), ApiError> {
    api.post_unit(&format!("api/announcements/{}/read", id), &serde_json::json!({}))
        .await
}
