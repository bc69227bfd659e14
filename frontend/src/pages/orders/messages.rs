use common::model::order::{Order, OrderStatus};
use common::model::product::Product;
use common::model::reclamation::IssueType;
use common::pagination::Paginated;

use crate::api::ApiError;

pub enum Msg {
    Load,
    Loaded(Result<Paginated<Order>, ApiError>),
    Search(String),
    FilterStatus(Option<OrderStatus>),
    SetPage(u32),

    Transition { id: String, to: OrderStatus },
    Claim(String),
    Updated(Result<Order, ApiError>),

    OpenView(Order),
    CloseDialog,

    OpenCreate,
    CatalogLoaded(Result<Vec<Product>, ApiError>),
    SetQuantity { product_id: String, quantity: u32 },
    SetScheduledDate(String),
    SetAddress(String),
    SetNotes(String),
    SubmitCreate,
    Created(Result<Order, ApiError>),

    OpenReclamation(Order),
    SetDescription(String),
    SetReceived { index: usize, quantity: u32 },
    SetReceivedPrice { index: usize, price: Option<f64> },
    SetIssue { index: usize, issue: Option<IssueType> },
    SetCondition { index: usize, condition: String },
    SubmitReclamation,
}
