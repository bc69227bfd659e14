use common::model::product::Product;
use common::pagination::Paginated;

use crate::api::ApiError;

pub enum Msg {
    Load,
    Loaded(Result<Paginated<Product>, ApiError>),
    Search(String),
    SetPage(u32),
    OpenCreate,
    OpenEdit(Product),
    Close,
    Edit(Field),
    ImagePicked(web_sys::File),
    ImageRead(Result<String, String>),
    RemoveImage,
    Save,
    Saved(Result<Product, ApiError>),
    ToggleAvailable(Product),
    AskDelete(Product),
    ConfirmDelete,
    Deleted(String, Result<(), ApiError>),
}

pub enum Field {
    Name(String),
    Description(String),
    Category(String),
    Price(String),
    TaxPercent(String),
    Ingredients(String),
    Available(bool),
}
