//! Orders page, shared by every role.
//!
//! The remote API already scopes `GET /orders` to the caller, so the page only
//! differs per role in what it offers:
//! - bakery: create an order from the catalog, cancel or reopen, and file a
//!   reclamation on a delivered order;
//! - laboratory: move orders through production;
//! - delivery: claim orders left in dispatch mode and drive the delivery
//!   statuses through the dashboard's proxy routes;
//! - admin: every transition.
//!
//! Submodules follow the usual split: `messages`, `state`, `update`, `view`.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::PageProps;
pub use messages::Msg;
pub use state::OrdersPage;

impl Component for OrdersPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        OrdersPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
