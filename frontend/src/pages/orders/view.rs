//! Rendering of the orders page: filter bar, table, pager and the three
//! dialogs (details, new order, reclamation).

use common::format::{date, euros};
use common::model::order::{Order, OrderStatus};
use common::model::reclamation::IssueType;
use common::model::user::Role;
use common::pagination::total_pages;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::order_lines::{items_table, totals_summary};
use crate::components::pagination::pager;
use crate::components::search_box::SearchBox;
use crate::components::status::{reclamation_badge, status_actions, status_badge};
use crate::config::PAGE_SIZE;
use crate::helpers::{input_value, parse_decimal, select_value, textarea_value};

use super::messages::Msg;
use super::state::{CreateForm, OrderDialog, OrdersPage, ReclamationForm};

pub fn view(page: &OrdersPage, ctx: &Context<OrdersPage>) -> Html {
    let link = ctx.link();
    let role = ctx.props().session.user.role;

    html! {
        <section class="page orders-page">
            { toolbar(page, link, role) }
            {
                if page.loading {
                    html! { <p class="loading">{ "Chargement..." }</p> }
                } else if page.orders.is_empty() {
                    html! { <p class="empty">{ "Aucune commande" }</p> }
                } else {
                    orders_table(page, ctx)
                }
            }
            { pager(page.page, total_pages(page.total, PAGE_SIZE), link.callback(Msg::SetPage)) }
            { dialog(page, ctx) }
        </section>
    }
}

fn toolbar(page: &OrdersPage, link: &Scope<OrdersPage>, role: Role) -> Html {
    let on_filter = link.callback(|e: Event| Msg::FilterStatus(OrderStatus::from_code(&select_value(&e))));
    let current = page.status_filter.map(OrderStatus::code).unwrap_or("");

    html! {
        <div class="toolbar">
            <SearchBox
                placeholder="Référence, boulangerie, adresse..."
                on_search={link.callback(Msg::Search)}
            />
            <select class="status-filter" onchange={on_filter}>
                <option value="" selected={current.is_empty()}>{ "Tous les statuts" }</option>
                { for OrderStatus::ALL.iter().map(|status| html! {
                    <option value={status.code()} selected={current == status.code()}>{ status.label() }</option>
                }) }
            </select>
            if role == Role::Bakery {
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    <span class="material-icons">{ "add" }</span>
                    { "Nouvelle commande" }
                </button>
            }
        </div>
    }
}

fn orders_table(page: &OrdersPage, ctx: &Context<OrdersPage>) -> Html {
    let role = ctx.props().session.user.role;
    let show_courier = matches!(role, Role::Admin | Role::Delivery);

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{ "Référence" }</th>
                    <th>{ "Boulangerie" }</th>
                    <th>{ "Livraison prévue" }</th>
                    if show_courier {
                        <th>{ "Livreur" }</th>
                    }
                    <th>{ "Statut" }</th>
                    <th class="num">{ "Total TTC" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for page.orders.iter().map(|order| order_row(page, ctx, order, show_courier)) }
            </tbody>
        </table>
    }
}

fn order_row(page: &OrdersPage, ctx: &Context<OrdersPage>, order: &Order, show_courier: bool) -> Html {
    let link = ctx.link();
    let session = &ctx.props().session;
    let role = session.user.role;
    let busy = page.busy.as_deref() == Some(order.id.as_str());

    let view_order = {
        let order = order.clone();
        link.callback(move |_| Msg::OpenView(order.clone()))
    };

    let actions = match role {
        Role::Delivery if order.is_dispatch_mode() => {
            let id = order.id.clone();
            html! {
                <button class="btn btn-primary" disabled={busy} onclick={link.callback(move |_| Msg::Claim(id.clone()))}>
                    { "Prendre en charge" }
                </button>
            }
        }
        Role::Delivery if !order.is_assigned_to(&session.user.id) => html! {},
        _ => {
            let id = order.id.clone();
            status_actions(
                role,
                order.status,
                busy,
                link.callback(move |to| Msg::Transition { id: id.clone(), to }),
            )
        }
    };

    let can_reclaim =
        role == Role::Bakery && order.status == OrderStatus::Delivered && order.reclamation.is_none();

    html! {
        <tr key={order.id.clone()} class={classes!(order.has_conflict.then_some("row-conflict"))}>
            <td>{ order.reference_id.clone() }</td>
            <td>{ order.bakery_label() }</td>
            <td>{ date(order.scheduled_date.as_deref()) }</td>
            if show_courier {
                <td>{ order.delivery_user_label() }</td>
            }
            <td>
                { status_badge(order.status) }
                if let Some(reclamation) = &order.reclamation {
                    { " " }{ reclamation_badge(reclamation.status) }
                }
            </td>
            <td class="num">{ euros(order.totals.total_ttc) }</td>
            <td class="row-actions">
                <button class="icon-btn" title="Voir" onclick={view_order}>
                    <span class="material-icons">{ "visibility" }</span>
                </button>
                { actions }
                if can_reclaim {
                    <button
                        class="btn btn-warning"
                        onclick={{
                            let order = order.clone();
                            link.callback(move |_| Msg::OpenReclamation(order.clone()))
                        }}
                    >
                        { "Signaler un problème" }
                    </button>
                }
            </td>
        </tr>
    }
}

fn dialog(page: &OrdersPage, ctx: &Context<OrdersPage>) -> Html {
    let link = ctx.link();
    let on_close = link.callback(|_| Msg::CloseDialog);
    match &page.dialog {
        None => html! {},
        Some(OrderDialog::View(order)) => html! {
            <Dialog title={format!("Commande {}", order.reference_id)} on_close={on_close} wide={true}>
                { order_details(order) }
            </Dialog>
        },
        Some(OrderDialog::Create(form)) => {
            let actions = html! {
                <button class="btn btn-primary" disabled={form.submitting || form.loading}
                    onclick={link.callback(|_| Msg::SubmitCreate)}>
                    { "Passer la commande" }
                </button>
            };
            html! {
                <Dialog title="Nouvelle commande" on_close={on_close} actions={actions} wide={true}>
                    { create_form(form, link) }
                </Dialog>
            }
        }
        Some(OrderDialog::Reclamation(form)) => {
            let actions = html! {
                <button class="btn btn-warning" disabled={form.submitting}
                    onclick={link.callback(|_| Msg::SubmitReclamation)}>
                    { "Envoyer la réclamation" }
                </button>
            };
            html! {
                <Dialog title={format!("Réclamation - {}", form.order.reference_id)}
                    on_close={on_close} actions={actions} wide={true}>
                    { reclamation_form(form, link) }
                </Dialog>
            }
        }
    }
}

fn order_details(order: &Order) -> Html {
    html! {
        <div class="order-details">
            <dl class="facts">
                <dt>{ "Boulangerie" }</dt><dd>{ order.bakery_label() }</dd>
                <dt>{ "Adresse" }</dt><dd>{ order.address_label() }</dd>
                <dt>{ "Livraison prévue" }</dt><dd>{ date(order.scheduled_date.as_deref()) }</dd>
                <dt>{ "Livrée le" }</dt><dd>{ date(order.actual_delivery_date.as_deref()) }</dd>
                <dt>{ "Livreur" }</dt><dd>{ order.delivery_user_label() }</dd>
                <dt>{ "Statut" }</dt><dd>{ status_badge(order.status) }</dd>
            </dl>
            if let Some(notes) = order.notes.as_ref().filter(|n| !n.trim().is_empty()) {
                <p class="notes">{ notes.clone() }</p>
            }
            { items_table(&order.items) }
            { totals_summary(&order.totals) }
            if let Some(reclamation) = &order.reclamation {
                <div class="reclamation-summary">
                    <h3>{ "Réclamation " }{ reclamation_badge(reclamation.status) }</h3>
                    <p>{ reclamation.description.clone() }</p>
                    if let Some(resolution) = reclamation.resolution {
                        <p><strong>{ "Décision : " }</strong>{ resolution.label() }</p>
                    }
                    if let Some(totals) = &reclamation.corrected_totals {
                        <h4>{ "Montants corrigés" }</h4>
                        { totals_summary(totals) }
                    }
                </div>
            }
        </div>
    }
}

fn create_form(form: &CreateForm, link: &Scope<OrdersPage>) -> Html {
    if form.loading {
        return html! { <p class="loading">{ "Chargement du catalogue..." }</p> };
    }

    html! {
        <div class="order-form">
            <table class="data-table compact">
                <thead>
                    <tr>
                        <th>{ "Produit" }</th>
                        <th>{ "Catégorie" }</th>
                        <th class="num">{ "PU HT" }</th>
                        <th class="num">{ "Quantité" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for form.catalog.iter().map(|product| {
                        let product_id = product.id.clone();
                        let oninput = link.callback(move |e: InputEvent| Msg::SetQuantity {
                            product_id: product_id.clone(),
                            quantity: input_value(&e).trim().parse().unwrap_or(0),
                        });
                        html! {
                            <tr key={product.id.clone()}>
                                <td>{ product.name.clone() }</td>
                                <td>{ product.category.clone() }</td>
                                <td class="num">{ euros(product.unit_price) }</td>
                                <td class="num">
                                    <input type="number" min="0" step="1" class="qty"
                                        value={form.quantity(&product.id).to_string()}
                                        oninput={oninput} />
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            <div class="form-grid">
                <label>
                    { "Date de livraison souhaitée" }
                    <input type="date" value={form.scheduled_date.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetScheduledDate(input_value(&e)))} />
                </label>
                <label>
                    { "Adresse de livraison" }
                    <input type="text" value={form.address.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetAddress(input_value(&e)))} />
                </label>
                <label class="full">
                    { "Notes" }
                    <textarea value={form.notes.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetNotes(textarea_value(&e)))} />
                </label>
            </div>
            { totals_summary(&form.totals()) }
            if let Some(error) = &form.error {
                <p class="form-error">{ error.clone() }</p>
            }
        </div>
    }
}

fn reclamation_form(form: &ReclamationForm, link: &Scope<OrdersPage>) -> Html {
    html! {
        <div class="reclamation-form">
            <label class="full">
                { "Description du problème" }
                <textarea value={form.description.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetDescription(textarea_value(&e)))} />
            </label>
            <table class="data-table compact">
                <thead>
                    <tr>
                        <th>{ "Produit" }</th>
                        <th class="num">{ "Commandé" }</th>
                        <th class="num">{ "Reçu" }</th>
                        <th>{ "Problème" }</th>
                        <th>{ "Prix reçu HT" }</th>
                        <th>{ "État" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for form.lines.iter().enumerate().map(|(index, line)| {
                        let current_issue = line.issue.map(IssueType::code).unwrap_or("");
                        html! {
                            <tr class={classes!(line.issue.is_some().then_some("row-flagged"))}>
                                <td>{ line.product_name.clone() }</td>
                                <td class="num">{ line.ordered_quantity.to_string() }</td>
                                <td class="num">
                                    <input type="number" min="0" class="qty"
                                        value={line.received_quantity.to_string()}
                                        oninput={link.callback(move |e: InputEvent| Msg::SetReceived {
                                            index,
                                            quantity: input_value(&e).trim().parse().unwrap_or(0),
                                        })} />
                                </td>
                                <td>
                                    <select onchange={link.callback(move |e: Event| Msg::SetIssue {
                                        index,
                                        issue: IssueType::from_code(&select_value(&e)),
                                    })}>
                                        <option value="" selected={current_issue.is_empty()}>{ "Aucun" }</option>
                                        { for IssueType::ALL.iter().map(|issue| html! {
                                            <option value={issue.code()} selected={current_issue == issue.code()}>
                                                { issue.label() }
                                            </option>
                                        }) }
                                    </select>
                                </td>
                                <td>
                                    if line.issue == Some(IssueType::PriceMismatch) {
                                        <input type="text" inputmode="decimal"
                                            placeholder={euros(line.ordered_price)}
                                            oninput={link.callback(move |e: InputEvent| Msg::SetReceivedPrice {
                                                index,
                                                price: parse_decimal(&input_value(&e)),
                                            })} />
                                    }
                                </td>
                                <td>
                                    <input type="text" value={line.condition.clone()}
                                        oninput={link.callback(move |e: InputEvent| Msg::SetCondition {
                                            index,
                                            condition: input_value(&e),
                                        })} />
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            if let Some(error) = &form.error {
                <p class="form-error">{ error.clone() }</p>
            }
        </div>
    }
}
