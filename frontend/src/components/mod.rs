pub mod card_grid;
pub mod dialog;
pub mod layout;
pub mod markdown;
pub mod order_lines;
pub mod pagination;
pub mod search_box;
pub mod status;
