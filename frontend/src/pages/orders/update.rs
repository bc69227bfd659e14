//! Message handling for the orders page.
//!
//! Every remote call is spawned with `spawn_local` and answers with a
//! `...ed(Result<_, ApiError>)` message; failures become toasts through
//! `report_failure`, which also routes a 401 to the login page.

use common::model::order::OrderStatus;
use common::model::user::Role;
use common::pagination::PageQuery;
use common::status::check_transition;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{delivery, orders, products};
use crate::config::PAGE_SIZE;
use crate::helpers::{report_failure, show_error, show_toast};

use super::messages::Msg;
use super::state::{CreateForm, OrderDialog, OrdersPage, ReclamationForm};

pub fn update(page: &mut OrdersPage, ctx: &Context<OrdersPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            page.loading = true;
            let query = PageQuery {
                limit: PAGE_SIZE,
                ..PageQuery::page(page.page)
            }
            .with_search(&page.search)
            .with_status(page.status_filter.map(OrderStatus::code));
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::list(&api, &query).await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(result) => {
            page.loading = false;
            match result {
                Ok(list) => {
                    page.total = list.total;
                    page.orders = list.results;
                }
                Err(e) => {
                    page.orders.clear();
                    report_failure(&e, "Erreur lors du chargement des commandes", &props.on_unauthorized);
                }
            }
            true
        }
        Msg::Search(term) => {
            if term == page.search {
                return false;
            }
            page.search = term;
            page.page = 1;
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::FilterStatus(status) => {
            page.status_filter = status;
            page.page = 1;
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::SetPage(number) => {
            if number == page.page {
                return false;
            }
            page.page = number;
            ctx.link().send_message(Msg::Load);
            false
        }

        Msg::Transition { id, to } => {
            let role = props.session.user.role;
            let Some(from) = page.orders.iter().find(|o| o.id == id).map(|o| o.status) else {
                return false;
            };
            if let Err(e) = check_transition(role, from, to) {
                show_error(&e.to_string());
                return false;
            }
            page.busy = Some(id.clone());
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = if role == Role::Delivery {
                    delivery::update_status(&api, &id, to).await
                } else {
                    orders::update_status(&api, &id, to).await
                };
                link.send_message(Msg::Updated(result));
            });
            true
        }
        Msg::Claim(id) => {
            page.busy = Some(id.clone());
            let api = props.api();
            let user_id = props.session.user.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = delivery::claim(&api, &id, &user_id).await;
                link.send_message(Msg::Updated(result));
            });
            true
        }
        Msg::Updated(result) => {
            page.busy = None;
            match result {
                Ok(order) => {
                    show_toast(&format!(
                        "Commande {} : {}",
                        order.reference_id,
                        order.status.label()
                    ));
                    if let Some(OrderDialog::View(shown)) = &mut page.dialog {
                        if shown.id == order.id {
                            *shown = order.clone();
                        }
                    }
                    page.replace(order);
                }
                Err(e) => {
                    if let Some(OrderDialog::Reclamation(form)) = &mut page.dialog {
                        form.submitting = false;
                    }
                    report_failure(&e, "Erreur lors de la mise à jour de la commande", &props.on_unauthorized);
                }
            }
            true
        }

        Msg::OpenView(order) => {
            page.dialog = Some(OrderDialog::View(order));
            true
        }
        Msg::CloseDialog => {
            page.dialog = None;
            true
        }

        Msg::OpenCreate => {
            page.dialog = Some(OrderDialog::Create(CreateForm {
                loading: true,
                ..CreateForm::default()
            }));
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = products::catalog(&api).await;
                link.send_message(Msg::CatalogLoaded(result));
            });
            true
        }
        Msg::CatalogLoaded(result) => {
            let Some(OrderDialog::Create(form)) = &mut page.dialog else {
                return false;
            };
            form.loading = false;
            match result {
                Ok(catalog) => form.catalog = catalog,
                Err(e) => report_failure(&e, "Erreur lors du chargement du catalogue", &props.on_unauthorized),
            }
            true
        }
        Msg::SetQuantity { product_id, quantity } => {
            if let Some(OrderDialog::Create(form)) = &mut page.dialog {
                form.set_quantity(product_id, quantity);
                form.error = None;
            }
            true
        }
        Msg::SetScheduledDate(value) => {
            if let Some(OrderDialog::Create(form)) = &mut page.dialog {
                form.scheduled_date = value;
            }
            true
        }
        Msg::SetAddress(value) => {
            if let Some(OrderDialog::Create(form)) = &mut page.dialog {
                form.address = value;
            }
            true
        }
        Msg::SetNotes(value) => {
            if let Some(OrderDialog::Create(form)) = &mut page.dialog {
                form.notes = value;
            }
            true
        }
        Msg::SubmitCreate => {
            let Some(OrderDialog::Create(form)) = &mut page.dialog else {
                return false;
            };
            if form.submitting {
                return false;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(e) => {
                    form.error = Some(e.to_string());
                    return true;
                }
            };
            form.submitting = true;
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::create(&api, &request).await;
                link.send_message(Msg::Created(result));
            });
            true
        }
        Msg::Created(result) => {
            match result {
                Ok(order) => {
                    show_toast(&format!("Commande {} créée", order.reference_id));
                    page.dialog = None;
                    page.page = 1;
                    ctx.link().send_message(Msg::Load);
                }
                Err(e) => {
                    if let Some(OrderDialog::Create(form)) = &mut page.dialog {
                        form.submitting = false;
                    }
                    report_failure(&e, "Erreur lors de la création de la commande", &props.on_unauthorized);
                }
            }
            true
        }

        Msg::OpenReclamation(order) => {
            page.dialog = Some(OrderDialog::Reclamation(ReclamationForm::new(order)));
            true
        }
        Msg::SetDescription(value) => {
            if let Some(OrderDialog::Reclamation(form)) = &mut page.dialog {
                form.description = value;
                form.error = None;
            }
            true
        }
        Msg::SetReceived { index, quantity } => {
            if let Some(line) = reclamation_line(page, index) {
                line.received_quantity = quantity;
            }
            true
        }
        Msg::SetReceivedPrice { index, price } => {
            if let Some(line) = reclamation_line(page, index) {
                line.received_price = price;
            }
            true
        }
        Msg::SetIssue { index, issue } => {
            if let Some(line) = reclamation_line(page, index) {
                line.issue = issue;
            }
            true
        }
        Msg::SetCondition { index, condition } => {
            if let Some(line) = reclamation_line(page, index) {
                line.condition = condition;
            }
            true
        }
        Msg::SubmitReclamation => {
            let Some(OrderDialog::Reclamation(form)) = &mut page.dialog else {
                return false;
            };
            if form.submitting {
                return false;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(e) => {
                    form.error = Some(e.to_string());
                    return true;
                }
            };
            form.submitting = true;
            let id = form.order.id.clone();
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::file_reclamation(&api, &id, &request).await;
                if result.is_ok() {
                    link.send_message(Msg::CloseDialog);
                }
                link.send_message(Msg::Updated(result));
            });
            true
        }
    }
}

fn reclamation_line(
    page: &mut OrdersPage,
    index: usize,
) -> Option<&mut super::state::DiscrepancyLine> {
    match &mut page.dialog {
        Some(OrderDialog::Reclamation(form)) => {
            form.error = None;
            form.line_mut(index)
        }
        _ => None,
    }
}
