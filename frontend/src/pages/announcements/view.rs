use common::format::date;
use common::model::announcement::{Announcement, Category, Priority};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::markdown;
use crate::components::search_box::SearchBox;
use crate::helpers::{input_checked, input_value, select_value, textarea_value};

use super::{AnnouncementForm, AnnouncementsPage, Field, Msg};

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge badge-neutral",
        Priority::Normal => "badge badge-info",
        Priority::High => "badge badge-warning",
        Priority::Urgent => "badge badge-danger",
    }
}

pub fn view(page: &AnnouncementsPage, ctx: &Context<AnnouncementsPage>) -> Html {
    let link = ctx.link();
    let admin = AnnouncementsPage::is_admin(ctx);
    let visible = page.visible();
    let current = page.category.map(Category::as_str).unwrap_or("");

    html! {
        <section class="page announcements-page">
            <div class="toolbar">
                <SearchBox placeholder="Titre, contenu, auteur..." on_search={link.callback(Msg::Search)} />
                <select onchange={link.callback(|e: Event| Msg::FilterCategory(Category::parse(&select_value(&e))))}>
                    <option value="" selected={current.is_empty()}>{ "Toutes les catégories" }</option>
                    { for Category::ALL.iter().map(|c| html! {
                        <option value={c.as_str()} selected={current == c.as_str()}>{ c.label() }</option>
                    }) }
                </select>
                if admin {
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        <span class="material-icons">{ "campaign" }</span>
                        { "Nouvelle annonce" }
                    </button>
                }
            </div>
            if page.loading {
                <p class="loading">{ "Chargement..." }</p>
            } else if visible.is_empty() {
                <p class="empty">{ "Aucune annonce" }</p>
            } else {
                <div class="announcement-list">
                    { for visible.into_iter().map(|a| announcement_card(page, ctx, a, admin)) }
                </div>
            }
            if let Some(form) = &page.form {
                { form_dialog(form, link) }
            }
            if let Some(announcement) = &page.deleting {
                <Dialog
                    title="Supprimer l'annonce"
                    on_close={link.callback(|_| Msg::Close)}
                    actions={html! {
                        <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                            { "Supprimer" }
                        </button>
                    }}
                >
                    <p>{ format!("Supprimer « {} » ?", announcement.title) }</p>
                </Dialog>
            }
        </section>
    }
}

fn announcement_card(
    page: &AnnouncementsPage,
    ctx: &Context<AnnouncementsPage>,
    announcement: &Announcement,
    admin: bool,
) -> Html {
    let link = ctx.link();
    let user_id = &ctx.props().session.user.id;
    let open = page.open.as_deref() == Some(announcement.id.as_str());
    let unread = !announcement.is_read_by(user_id);
    let toggle = {
        let id = announcement.id.clone();
        link.callback(move |_| Msg::Open(id.clone()))
    };

    let admin_actions = if admin {
        let (pin, edit, remove) = (announcement.clone(), announcement.clone(), announcement.clone());
        html! {
            <div class="row-actions">
                <button class="icon-btn" title={if announcement.pinned { "Désépingler" } else { "Épingler" }}
                    onclick={link.callback(move |_| Msg::TogglePin(pin.clone()))}>
                    <span class="material-icons">{ if announcement.pinned { "push_pin" } else { "outlined_flag" } }</span>
                </button>
                <button class="icon-btn" title="Modifier" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                    <span class="material-icons">{ "edit" }</span>
                </button>
                <button class="icon-btn danger" title="Supprimer" onclick={link.callback(move |_| Msg::AskDelete(remove.clone()))}>
                    <span class="material-icons">{ "delete" }</span>
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <article
            key={announcement.id.clone()}
            class={classes!("card", "announcement", announcement.pinned.then_some("pinned"), unread.then_some("unread"))}
        >
            <header onclick={toggle}>
                if announcement.pinned {
                    <span class="material-icons pin">{ "push_pin" }</span>
                }
                <h3>{ announcement.title.clone() }</h3>
                <span class={priority_class(announcement.priority)}>{ announcement.priority.label() }</span>
                <span class="badge badge-neutral">{ announcement.category.label() }</span>
                if unread {
                    <span class="dot" title="Non lue" />
                }
            </header>
            <p class="muted">
                { announcement.author.clone().unwrap_or_default() }{ " · " }{ date(announcement.created_at.as_deref()) }
                { format!(" · {} commentaire(s)", announcement.comments.len()) }
            </p>
            { admin_actions }
            if open {
                <div class="markdown">{ markdown::render(&announcement.content) }</div>
                { comments(page, link, announcement) }
            }
        </article>
    }
}

fn comments(page: &AnnouncementsPage, link: &Scope<AnnouncementsPage>, announcement: &Announcement) -> Html {
    let send = {
        let id = announcement.id.clone();
        link.callback(move |e: SubmitEvent| {
            e.prevent_default();
            Msg::SendComment(id.clone())
        })
    };

    html! {
        <div class="comments">
            { for announcement.comments.iter().map(|c| html! {
                <div class="comment">
                    <p class="muted">
                        <strong>{ c.author.clone() }</strong>
                        { format!(" ({}) · {}", c.role.label(), date(c.created_at.as_deref())) }
                    </p>
                    <p>{ c.content.clone() }</p>
                </div>
            }) }
            <form class="comment-form" onsubmit={send}>
                <input type="text" placeholder="Ajouter un commentaire..." value={page.comment.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetComment(input_value(&e)))} />
                <button class="btn" type="submit" disabled={page.sending_comment || page.comment.trim().is_empty()}>
                    { "Envoyer" }
                </button>
            </form>
        </div>
    }
}

fn form_dialog(form: &AnnouncementForm, link: &Scope<AnnouncementsPage>) -> Html {
    let payload = &form.payload;
    let title = if form.id.is_some() { "Modifier l'annonce" } else { "Nouvelle annonce" };
    let actions = html! {
        <button class="btn btn-primary" disabled={form.saving} onclick={link.callback(|_| Msg::Save)}>
            { "Publier" }
        </button>
    };
    let priority = payload.priority.as_str();
    let category = payload.category.as_str();

    html! {
        <Dialog title={title} on_close={link.callback(|_| Msg::Close)} actions={actions} wide={true}>
            <div class="form-grid">
                <label class="full">
                    { "Titre" }
                    <input type="text" value={payload.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Title(input_value(&e))))} />
                </label>
                <label>
                    { "Priorité" }
                    <select onchange={link.batch_callback(|e: Event| {
                        Priority::parse(&select_value(&e)).map(|p| Msg::Edit(Field::Priority(p)))
                    })}>
                        { for Priority::ALL.iter().map(|p| html! {
                            <option value={p.as_str()} selected={priority == p.as_str()}>{ p.label() }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Catégorie" }
                    <select onchange={link.batch_callback(|e: Event| {
                        Category::parse(&select_value(&e)).map(|c| Msg::Edit(Field::Category(c)))
                    })}>
                        { for Category::ALL.iter().map(|c| html! {
                            <option value={c.as_str()} selected={category == c.as_str()}>{ c.label() }</option>
                        }) }
                    </select>
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={payload.pinned}
                        onchange={link.callback(|e: Event| Msg::Edit(Field::Pinned(input_checked(&e))))} />
                    { "Épingler en haut du tableau" }
                </label>
                <div class="full tab-bar">
                    <button class={classes!("tab-btn", (!form.preview).then_some("active"))}
                        onclick={link.callback(|_| Msg::Edit(Field::Preview(false)))}>{ "Rédaction" }</button>
                    <button class={classes!("tab-btn", form.preview.then_some("active"))}
                        onclick={link.callback(|_| Msg::Edit(Field::Preview(true)))}>{ "Aperçu" }</button>
                </div>
                if form.preview {
                    <div class="full markdown preview">{ markdown::render(&payload.content) }</div>
                } else {
                    <label class="full">
                        { "Contenu (markdown)" }
                        <textarea rows="10" value={payload.content.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Content(textarea_value(&e))))} />
                    </label>
                }
            </div>
            if let Some(error) = &form.error {
                <p class="form-error">{ error.clone() }</p>
            }
        </Dialog>
    }
}
