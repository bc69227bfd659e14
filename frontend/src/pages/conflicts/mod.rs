//! Admin review of delivery conflicts.
//!
//! Lists the orders flagged with a conflict, lets the admin take a reported
//! reclamation under review, and resolve it. Choosing "Corriger la commande"
//! opens per-line quantities whose corrected totals are recomputed on every
//! keystroke with `common::pricing`, the same code the bakery sees.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use super::PageProps;
pub use messages::Msg;
pub use state::ConflictsPage;

impl Component for ConflictsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        ConflictsPage::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
