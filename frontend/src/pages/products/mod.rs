//! Product catalog.
//!
//! Laboratories manage their own products (create, edit, delete, toggle
//! availability, upload a picture); bakeries and admins browse the catalog
//! read-only. The list is paginated and searched on the server.

use common::model::user::Role;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::PageProps;
pub use messages::Msg;
pub use state::ProductsPage;

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        ProductsPage::new(ctx.props().session.user.role == Role::Laboratory)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
