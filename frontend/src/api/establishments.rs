//! Laboratories (`/api/laboratory-info`) and bakeries (`/api/bakery-info`)
//! share one record type and one set of calls.

use super::{Api, ApiError};
use common::model::establishment::Establishment;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Laboratory,
    Bakery,
}

impl Kind {
    fn path(self) -> &'static str {
        match self {
            Kind::Laboratory => "api/laboratory-info",
            Kind::Bakery => "api/bakery-info",
        }
    }

    pub fn new_label(self) -> &'static str {
        match self {
            Kind::Laboratory => "Nouveau laboratoire",
            Kind::Bakery => "Nouvelle boulangerie",
        }
    }
}

pub async fn list(api: &Api, kind: Kind) -> Result<Vec<Establishment>, ApiError> {
    api.get(kind.path()).await
}

pub async fn create(api: &Api, kind: Kind, site: &Establishment) -> Result<Establishment, ApiError> {
    api.post(kind.path(), site).await
}

pub async fn update(api: &Api, kind: Kind, site: &Establishment) -> Result<Establishment, ApiError> {
    api.put(&format!("{}/{}", kind.path(), site.id), site).await
}

pub async fn delete(api: &Api, kind: Kind, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("{}/{}", kind.path(), id)).await
}
