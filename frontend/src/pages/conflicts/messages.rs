use common::model::order::Order;
use common::model::reclamation::Resolution;

use crate::api::ApiError;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Order>, ApiError>),
    Search(String),
    StartReview(String),
    Reviewed(Result<Order, ApiError>),
    OpenResolve(Order),
    Close,
    SetResolution(Resolution),
    SetNote(String),
    SetQuantity { index: usize, quantity: u32 },
    Submit,
    Resolved(Result<Order, ApiError>),
}
