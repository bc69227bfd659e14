//! Bakery view of its own reclamations.
//!
//! Shows where each complaint stands and, once an order has been corrected, the
//! corrected lines and totals. While a reclamation is still open, the estimate
//! of a corrected order is computed from the reported quantities with the same
//! `common::pricing::resolve` the admin uses.

use common::format::{date, euros};
use common::model::order::Order;
use common::model::reclamation::Resolution;
use common::pagination::PageQuery;
use common::pricing::{corrections_for_order, resolve};
use common::search::filter;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::api::{orders, ApiError};
use crate::components::order_lines::{items_table, totals_summary};
use crate::components::search_box::SearchBox;
use crate::components::status::{reclamation_badge, status_badge};
use crate::helpers::report_failure;

const FETCH_LIMIT: u32 = 100;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Order>, ApiError>),
    Search(String),
    Toggle(String),
}

pub struct ReclamationsPage {
    orders: Vec<Order>,
    search: String,
    loading: bool,
    expanded: Option<String>,
}

impl Component for ReclamationsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            orders: Vec::new(),
            search: String::new(),
            loading: true,
            expanded: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                let api = ctx.props().api();
                let link = ctx.link().clone();
                let query = PageQuery {
                    limit: FETCH_LIMIT,
                    ..PageQuery::default()
                };
                spawn_local(async move {
                    let result = orders::list_all(&api, query).await;
                    link.send_message(Msg::Loaded(result));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(orders) => {
                        self.orders = orders
                            .into_iter()
                            .filter(|o| o.reclamation.is_some())
                            .collect();
                    }
                    Err(e) => report_failure(
                        &e,
                        "Erreur lors du chargement des réclamations",
                        &ctx.props().on_unauthorized,
                    ),
                }
                true
            }
            Msg::Search(term) => {
                self.search = term;
                true
            }
            Msg::Toggle(id) => {
                self.expanded = if self.expanded.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = filter(&self.orders, &self.search);

        html! {
            <section class="page reclamations-page">
                <div class="toolbar">
                    <SearchBox placeholder="Référence..." on_search={link.callback(Msg::Search)} />
                </div>
                {
                    if self.loading {
                        html! { <p class="loading">{ "Chargement..." }</p> }
                    } else if visible.is_empty() {
                        html! { <p class="empty">{ "Aucune réclamation" }</p> }
                    } else {
                        html! {
                            <div class="conflict-list">
                                { for visible.into_iter().map(|order| self.card(link, order)) }
                            </div>
                        }
                    }
                }
            </section>
        }
    }
}

impl ReclamationsPage {
    fn card(&self, link: &yew::html::Scope<Self>, order: &Order) -> Html {
        let Some(reclamation) = &order.reclamation else {
            return html! {};
        };
        let expanded = self.expanded.as_deref() == Some(order.id.as_str());
        let toggle = {
            let id = order.id.clone();
            link.callback(move |_| Msg::Toggle(id.clone()))
        };

        let corrected = match (&reclamation.corrected_items, &reclamation.corrected_totals) {
            (Some(items), Some(totals)) => html! {
                <>
                    <h4>{ "Commande corrigée" }</h4>
                    { items_table(items) }
                    { totals_summary(totals) }
                </>
            },
            _ if reclamation.resolution.is_none() => {
                let estimate = resolve(order, Resolution::UpdateOrder, &corrections_for_order(order));
                match estimate.corrected_totals {
                    Some(totals) => html! {
                        <>
                            <h4>{ "Estimation si la commande est corrigée" }</h4>
                            { totals_summary(&totals) }
                        </>
                    },
                    None => html! {},
                }
            }
            _ => html! {},
        };

        html! {
            <article class="card conflict-card" key={order.id.clone()}>
                <header>
                    <h3>{ order.reference_id.clone() }</h3>
                    { status_badge(order.status) }
                    { reclamation_badge(reclamation.status) }
                    <button class="icon-btn" onclick={toggle}>
                        <span class="material-icons">{ if expanded { "expand_less" } else { "expand_more" } }</span>
                    </button>
                </header>
                <p class="muted">{ "Signalé le " }{ date(reclamation.reported_at.as_deref()) }</p>
                <p>{ reclamation.description.clone() }</p>
                if let Some(resolution) = reclamation.resolution {
                    <p><strong>{ "Décision : " }</strong>{ resolution.label() }</p>
                }
                if let Some(note) = &reclamation.resolution_note {
                    <p class="notes">{ note.clone() }</p>
                }
                if expanded {
                    <h4>{ "Commande initiale" }</h4>
                    { items_table(&order.items) }
                    { totals_summary(&order.totals) }
                    { corrected }
                } else {
                    <p class="strong">{ euros(order.totals.total_ttc) }</p>
                }
            </article>
        }
    }
}
