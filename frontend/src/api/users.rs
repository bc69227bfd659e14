use super::{Api, ApiError};
use common::model::user::User;
use common::requests::UserPayload;

pub async fn list(api: &Api) -> Result<Vec<User>, ApiError> {
    api.get("api/users").await
}

pub async fn create(api: &Api, user: &UserPayload) -> Result<User, ApiError> {
    api.post("api/users", user).await
}

pub async fn update(api: &Api, id: &str, user: &UserPayload) -> Result<User, ApiError> {
    api.put(&format!("api/users/{}", id), user).await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("api/users/{}", id)).await
}
