use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::orders;
use crate::helpers::{report_failure, show_error, show_toast};

use super::messages::Msg;
use super::state::{ConflictsPage, ResolveForm};

pub fn update(page: &mut ConflictsPage, ctx: &Context<ConflictsPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            page.loading = true;
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::conflicts(&api).await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(result) => {
            page.loading = false;
            match result {
                Ok(conflicts) => page.conflicts = conflicts,
                Err(e) => report_failure(&e, "Erreur lors du chargement des litiges", &props.on_unauthorized),
            }
            true
        }
        Msg::Search(term) => {
            page.search = term;
            true
        }
        Msg::StartReview(id) => {
            page.busy = Some(id.clone());
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::start_review(&api, &id).await;
                link.send_message(Msg::Reviewed(result));
            });
            true
        }
        Msg::Reviewed(result) => {
            page.busy = None;
            match result {
                Ok(order) => {
                    show_toast(&format!("Litige {} en cours d'examen", order.reference_id));
                    page.replace(order);
                }
                Err(e) => report_failure(&e, "Erreur lors de la prise en charge du litige", &props.on_unauthorized),
            }
            true
        }
        Msg::OpenResolve(order) => match ResolveForm::open(order) {
            Some(form) => {
                page.resolving = Some(form);
                true
            }
            None => {
                show_error("Le litige doit d'abord être pris en charge");
                false
            }
        },
        Msg::Close => {
            page.resolving = None;
            true
        }
        Msg::SetResolution(resolution) => {
            if let Some(form) = &mut page.resolving {
                form.resolution = resolution;
            }
            true
        }
        Msg::SetNote(note) => {
            if let Some(form) = &mut page.resolving {
                form.note = note;
            }
            true
        }
        Msg::SetQuantity { index, quantity } => {
            if let Some(form) = &mut page.resolving {
                form.set_quantity(index, quantity);
            }
            true
        }
        Msg::Submit => {
            let Some(form) = &mut page.resolving else {
                return false;
            };
            if form.submitting {
                return false;
            }
            form.submitting = true;
            let request = form.to_request();
            let id = form.order.id.clone();
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = orders::resolve_conflict(&api, &id, &request).await;
                link.send_message(Msg::Resolved(result));
            });
            true
        }
        Msg::Resolved(result) => {
            match result {
                Ok(order) => {
                    show_toast(&format!("Litige {} résolu", order.reference_id));
                    page.resolving = None;
                    page.replace(order);
                }
                Err(e) => {
                    if let Some(form) = &mut page.resolving {
                        form.submitting = false;
                    }
                    report_failure(&e, "Erreur lors de la résolution du litige", &props.on_unauthorized);
                }
            }
            true
        }
    }
}
