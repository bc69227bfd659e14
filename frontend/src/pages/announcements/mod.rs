//! Announcement board.
//!
//! Everyone reads, comments and marks announcements as read; admins also
//! publish, edit, pin and delete them. The board is ordered pinned first, then
//! newest first (`sort_for_display`), and bodies are markdown.

use common::model::announcement::{sort_for_display, Announcement, Category, Priority};
use common::model::user::Role;
use common::requests::AnnouncementPayload;
use common::search::filter;
use common::validation::validate_announcement;
use yew::platform::spawn_local;
use yew::prelude::*;

mod view;

use super::PageProps;
use crate::api::{announcements, ApiError};
use crate::helpers::{report_failure, show_toast};

pub enum Msg {
    Load,
    Loaded(Result<Vec<Announcement>, ApiError>),
    Search(String),
    FilterCategory(Option<Category>),
    Open(String),
    MarkedRead(String, Result<(), ApiError>),
    SetComment(String),
    SendComment(String),
    Commented(Result<Announcement, ApiError>),
    OpenCreate,
    OpenEdit(Announcement),
    Close,
    Edit(Field),
    Save,
    Saved(Result<Announcement, ApiError>),
    TogglePin(Announcement),
    AskDelete(Announcement),
    ConfirmDelete,
    Deleted(String, Result<(), ApiError>),
}

pub enum Field {
    Title(String),
    Content(String),
    Priority(Priority),
    Category(Category),
    Pinned(bool),
    Preview(bool),
}

pub struct AnnouncementForm {
    pub id: Option<String>,
    pub payload: AnnouncementPayload,
    pub preview: bool,
    pub error: Option<String>,
    pub saving: bool,
}

impl AnnouncementForm {
    fn blank() -> Self {
        Self {
            id: None,
            payload: AnnouncementPayload {
                title: String::new(),
                content: String::new(),
                priority: Priority::Normal,
                category: Category::General,
                pinned: false,
            },
            preview: false,
            error: None,
            saving: false,
        }
    }

    fn from_announcement(a: &Announcement) -> Self {
        Self {
            id: Some(a.id.clone()),
            payload: payload_of(a),
            ..Self::blank()
        }
    }
}

fn payload_of(a: &Announcement) -> AnnouncementPayload {
    AnnouncementPayload {
        title: a.title.clone(),
        content: a.content.clone(),
        priority: a.priority,
        category: a.category,
        pinned: a.pinned,
    }
}

pub struct AnnouncementsPage {
    items: Vec<Announcement>,
    search: String,
    category: Option<Category>,
    loading: bool,
    open: Option<String>,
    comment: String,
    sending_comment: bool,
    form: Option<AnnouncementForm>,
    deleting: Option<Announcement>,
}

impl AnnouncementsPage {
    fn visible(&self) -> Vec<&Announcement> {
        filter(&self.items, &self.search)
            .into_iter()
            .filter(|a| self.category.map_or(true, |c| a.category == c))
            .collect()
    }

    fn upsert(&mut self, announcement: Announcement) {
        match self.items.iter_mut().find(|a| a.id == announcement.id) {
            Some(slot) => *slot = announcement,
            None => self.items.push(announcement),
        }
        sort_for_display(&mut self.items);
    }

    fn is_admin(ctx: &Context<Self>) -> bool {
        ctx.props().session.user.role == Role::Admin
    }
}

impl Component for AnnouncementsPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            items: Vec::new(),
            search: String::new(),
            category: None,
            loading: true,
            open: None,
            comment: String::new(),
            sending_comment: false,
            form: None,
            deleting: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Load => {
                self.loading = true;
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(announcements::list(&api).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(mut items) => {
                        sort_for_display(&mut items);
                        self.items = items;
                    }
                    Err(e) => report_failure(&e, "Erreur lors du chargement des annonces", &props.on_unauthorized),
                }
                true
            }
            Msg::Search(term) => {
                self.search = term;
                true
            }
            Msg::FilterCategory(category) => {
                self.category = category;
                true
            }
            Msg::Open(id) => {
                if self.open.as_deref() == Some(id.as_str()) {
                    self.open = None;
                    return true;
                }
                self.comment.clear();
                let user_id = props.session.user.id.clone();
                let unread = self
                    .items
                    .iter()
                    .any(|a| a.id == id && !a.is_read_by(&user_id));
                if unread {
                    let api = props.api();
                    let link = ctx.link().clone();
                    let read_id = id.clone();
                    spawn_local(async move {
                        let result = announcements::mark_read(&api, &read_id).await;
                        link.send_message(Msg::MarkedRead(read_id, result));
                    });
                }
                self.open = Some(id);
                true
            }
            Msg::MarkedRead(id, result) => match result {
                Ok(()) => {
                    let user_id = &props.session.user.id;
                    if let Some(a) = self.items.iter_mut().find(|a| a.id == id) {
                        if !a.is_read_by(user_id) {
                            a.read_by.push(user_id.clone());
                        }
                    }
                    true
                }
                Err(e) => {
                    report_failure(&e, "Impossible de marquer l'annonce comme lue", &props.on_unauthorized);
                    false
                }
            },
            Msg::SetComment(text) => {
                self.comment = text;
                true
            }
            Msg::SendComment(id) => {
                if self.sending_comment || self.comment.trim().is_empty() {
                    return false;
                }
                self.sending_comment = true;
                let content = self.comment.clone();
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Commented(announcements::comment(&api, &id, &content).await));
                });
                true
            }
            Msg::Commented(result) => {
                self.sending_comment = false;
                match result {
                    Ok(announcement) => {
                        self.comment.clear();
                        self.upsert(announcement);
                    }
                    Err(e) => report_failure(&e, "Erreur lors de l'envoi du commentaire", &props.on_unauthorized),
                }
                true
            }
            Msg::OpenCreate => {
                self.form = Some(AnnouncementForm::blank());
                true
            }
            Msg::OpenEdit(announcement) => {
                self.form = Some(AnnouncementForm::from_announcement(&announcement));
                true
            }
            Msg::Close => {
                self.form = None;
                self.deleting = None;
                true
            }
            Msg::Edit(field) => {
                if let Some(form) = &mut self.form {
                    form.error = None;
                    let payload = &mut form.payload;
                    match field {
                        Field::Title(v) => payload.title = v,
                        Field::Content(v) => payload.content = v,
                        Field::Priority(v) => payload.priority = v,
                        Field::Category(v) => payload.category = v,
                        Field::Pinned(v) => payload.pinned = v,
                        Field::Preview(v) => form.preview = v,
                    }
                }
                true
            }
            Msg::Save => {
                let Some(form) = &mut self.form else {
                    return false;
                };
                if form.saving {
                    return false;
                }
                if let Err(e) = validate_announcement(&form.payload.title, &form.payload.content) {
                    form.error = Some(e.to_string());
                    return true;
                }
                form.saving = true;
                save(ctx, form.id.clone(), form.payload.clone());
                true
            }
            Msg::Saved(result) => {
                match result {
                    Ok(announcement) => {
                        show_toast("Annonce enregistrée");
                        self.form = None;
                        self.upsert(announcement);
                    }
                    Err(e) => {
                        if let Some(form) = &mut self.form {
                            form.saving = false;
                        }
                        report_failure(&e, "Erreur lors de l'enregistrement de l'annonce", &props.on_unauthorized);
                    }
                }
                true
            }
            Msg::TogglePin(announcement) => {
                if !Self::is_admin(ctx) {
                    return false;
                }
                let mut payload = payload_of(&announcement);
                payload.pinned = !payload.pinned;
                save(ctx, Some(announcement.id), payload);
                false
            }
            Msg::AskDelete(announcement) => {
                self.deleting = Some(announcement);
                true
            }
            Msg::ConfirmDelete => {
                let Some(announcement) = self.deleting.take() else {
                    return false;
                };
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = announcements::delete(&api, &announcement.id).await;
                    link.send_message(Msg::Deleted(announcement.id, result));
                });
                true
            }
            Msg::Deleted(id, result) => {
                match result {
                    Ok(()) => {
                        self.items.retain(|a| a.id != id);
                        show_toast("Annonce supprimée");
                    }
                    Err(e) => report_failure(&e, "Erreur lors de la suppression de l'annonce", &props.on_unauthorized),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn save(ctx: &Context<AnnouncementsPage>, id: Option<String>, payload: AnnouncementPayload) {
    let api = ctx.props().api();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = match id {
            Some(id) => announcements::update(&api, &id, &payload).await,
            None => announcements::create(&api, &payload).await,
        };
        link.send_message(Msg::Saved(result));
    });
}
