use common::format::{date, euros};
use common::model::order::Order;
use common::model::reclamation::{ReclamationStatus, Resolution};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::search_box::SearchBox;
use crate::components::status::{reclamation_badge, status_badge};
use crate::helpers::{input_value, select_value, textarea_value};
use crate::components::order_lines::{items_table, totals_summary};

use super::messages::Msg;
use super::state::{ConflictsPage, ResolveForm};

pub fn view(page: &ConflictsPage, ctx: &Context<ConflictsPage>) -> Html {
    let link = ctx.link();
    let visible = page.visible();

    html! {
        <section class="page conflicts-page">
            <div class="toolbar">
                <SearchBox placeholder="Référence, boulangerie..." on_search={link.callback(Msg::Search)} />
                <button class="icon-btn" title="Actualiser" onclick={link.callback(|_| Msg::Load)}>
                    <span class="material-icons">{ "refresh" }</span>
                </button>
            </div>
            {
                if page.loading {
                    html! { <p class="loading">{ "Chargement..." }</p> }
                } else if visible.is_empty() {
                    html! { <p class="empty">{ "Aucun litige en cours" }</p> }
                } else {
                    html! {
                        <div class="conflict-list">
                            { for visible.into_iter().map(|order| conflict_card(page, link, order)) }
                        </div>
                    }
                }
            }
            if let Some(form) = &page.resolving {
                { resolve_dialog(form, link) }
            }
        </section>
    }
}

fn conflict_card(page: &ConflictsPage, link: &Scope<ConflictsPage>, order: &Order) -> Html {
    let busy = page.busy.as_deref() == Some(order.id.as_str());
    let Some(reclamation) = &order.reclamation else {
        return html! {};
    };

    let action = match reclamation.status {
        ReclamationStatus::Reported => {
            let id = order.id.clone();
            html! {
                <button class="btn" disabled={busy} onclick={link.callback(move |_| Msg::StartReview(id.clone()))}>
                    { "Prendre en charge" }
                </button>
            }
        }
        ReclamationStatus::UnderReview => {
            let order = order.clone();
            html! {
                <button class="btn btn-primary" onclick={link.callback(move |_| Msg::OpenResolve(order.clone()))}>
                    { "Résoudre" }
                </button>
            }
        }
        ReclamationStatus::Resolved => html! {},
    };

    html! {
        <article class="card conflict-card" key={order.id.clone()}>
            <header>
                <h3>{ order.reference_id.clone() }</h3>
                { status_badge(order.status) }
                { reclamation_badge(reclamation.status) }
            </header>
            <p class="muted">
                { order.bakery_label() }{ " · signalé le " }{ date(reclamation.reported_at.as_deref()) }
            </p>
            <p>{ reclamation.description.clone() }</p>
            <table class="data-table compact">
                <thead>
                    <tr>
                        <th>{ "Produit" }</th>
                        <th>{ "Problème" }</th>
                        <th class="num">{ "Commandé" }</th>
                        <th class="num">{ "Reçu" }</th>
                        <th class="num">{ "Écart" }</th>
                        <th>{ "État" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for reclamation.discrepancies.iter().map(|d| html! {
                        <tr>
                            <td>{ d.product_name.clone() }</td>
                            <td>{ d.issue_type.label() }</td>
                            <td class="num">{ d.ordered_quantity.to_string() }</td>
                            <td class="num">{ d.received_quantity.to_string() }</td>
                            <td class="num">{ format!("{:+}", d.quantity_gap()) }</td>
                            <td>{ d.condition.clone().unwrap_or_default() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <footer>
                <span class="strong">{ euros(order.totals.total_ttc) }</span>
                { action }
            </footer>
        </article>
    }
}

fn resolve_dialog(form: &ResolveForm, link: &Scope<ConflictsPage>) -> Html {
    let outcome = form.outcome();
    let reduction = outcome.ttc_reduction(&form.order.totals);
    let current = form.resolution.code();

    let actions = html! {
        <button class="btn btn-primary" disabled={form.submitting} onclick={link.callback(|_| Msg::Submit)}>
            { "Valider la résolution" }
        </button>
    };

    html! {
        <Dialog
            title={format!("Résolution - {}", form.order.reference_id)}
            on_close={link.callback(|_| Msg::Close)}
            actions={actions}
            wide={true}
        >
            if let Some(reclamation) = form.reclamation() {
                <p class="muted">{ reclamation.description.clone() }</p>
            }
            <div class="form-grid">
                <label>
                    { "Décision" }
                    <select onchange={link.batch_callback(|e: Event| {
                        Resolution::from_code(&select_value(&e)).map(Msg::SetResolution)
                    })}>
                        { for Resolution::ALL.iter().map(|r| html! {
                            <option value={r.code()} selected={current == r.code()}>{ r.label() }</option>
                        }) }
                    </select>
                </label>
                <label class="full">
                    { "Note" }
                    <textarea value={form.note.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetNote(textarea_value(&e)))} />
                </label>
            </div>
            <h4>{ "Commande initiale" }</h4>
            { totals_summary(&form.order.totals) }
            if form.resolution.recomputes_order() {
                <h4>{ "Quantités corrigées" }</h4>
                <table class="data-table compact">
                    <thead>
                        <tr>
                            <th>{ "Produit" }</th>
                            <th class="num">{ "Commandé" }</th>
                            <th class="num">{ "Quantité retenue" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for form.corrections.iter().enumerate().map(|(index, correction)| {
                            let ordered = form
                                .order
                                .items
                                .get(index)
                                .map(|item| item.quantity.to_string())
                                .unwrap_or_default();
                            html! {
                                <tr>
                                    <td>{ correction.product_name.clone() }</td>
                                    <td class="num">{ ordered }</td>
                                    <td class="num">
                                        <input type="number" min="0" class="qty"
                                            value={correction.quantity.to_string()}
                                            oninput={link.callback(move |e: InputEvent| Msg::SetQuantity {
                                                index,
                                                quantity: input_value(&e).trim().parse().unwrap_or(0),
                                            })} />
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if let Some(items) = &outcome.corrected_items {
                    { items_table(items) }
                }
                if let Some(totals) = &outcome.corrected_totals {
                    <h4>{ "Commande corrigée" }</h4>
                    { totals_summary(totals) }
                }
                if let Some(amount) = reduction {
                    <p class="strong">{ format!("Écart TTC : {}", euros(amount)) }</p>
                }
            }
        </Dialog>
    }
}
