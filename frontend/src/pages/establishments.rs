//! Admin management of laboratories and bakeries. Both lists share this page;
//! `kind` picks the endpoint and the wording, and laboratories additionally
//! show their hygiene grade and last inspection.

use common::format::date;
use common::model::establishment::{Establishment, HygieneRating};
use common::search::filter;
use common::session::UserInfo;
use common::validation::validate_establishment;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::establishments::{self, Kind};
use crate::api::{Api, ApiError};
use crate::components::card_grid::CardGrid;
use crate::components::dialog::Dialog;
use crate::components::search_box::SearchBox;
use crate::helpers::{date_input_value, input_checked, input_value, report_failure, select_value, show_toast};

#[derive(Properties, PartialEq, Clone)]
pub struct EstablishmentsProps {
    pub session: UserInfo,
    pub on_unauthorized: Callback<()>,
    pub kind: Kind,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<Establishment>, ApiError>),
    Search(String),
    OpenCreate,
    OpenEdit(Establishment),
    Close,
    Edit(Field),
    Save,
    Saved(Result<Establishment, ApiError>),
    AskDelete(Establishment),
    ConfirmDelete,
    Deleted(String, Result<(), ApiError>),
}

pub enum Field {
    Name(String),
    Chef(String),
    Address(String),
    PostalCode(String),
    City(String),
    Phone(String),
    Email(String),
    Capacity(String),
    Hygiene(HygieneRating),
    LastInspection(String),
    Active(bool),
}

pub struct SiteForm {
    pub site: Establishment,
    pub capacity: String,
    pub error: Option<String>,
    pub saving: bool,
}

impl SiteForm {
    fn new(site: Establishment) -> Self {
        Self {
            capacity: site.capacity.map(|c| c.to_string()).unwrap_or_default(),
            site,
            error: None,
            saving: false,
        }
    }

    fn apply(&mut self, field: Field) {
        let site = &mut self.site;
        match field {
            Field::Name(v) => site.name = v,
            Field::Chef(v) => site.chef = optional(v),
            Field::Address(v) => site.address = optional(v),
            Field::PostalCode(v) => site.postal_code = optional(v),
            Field::City(v) => site.city = optional(v),
            Field::Phone(v) => site.phone = optional(v),
            Field::Email(v) => site.email = optional(v),
            Field::Capacity(v) => self.capacity = v,
            Field::Hygiene(v) => site.hygiene_rating = v,
            Field::LastInspection(v) => site.last_inspection = optional(v),
            Field::Active(v) => site.active = v,
        }
    }

    /// Validated copy of the record, ready to send.
    pub fn validated(&self) -> Result<Establishment, String> {
        let mut site = self.site.clone();
        site.name = site.name.trim().to_string();
        site.capacity = match self.capacity.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| "La capacité doit être un nombre entier".to_string())?,
            ),
        };
        validate_establishment(&site).map_err(|e| e.to_string())?;
        Ok(site)
    }
}

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

pub struct EstablishmentsPage {
    sites: Vec<Establishment>,
    search: String,
    loading: bool,
    form: Option<SiteForm>,
    deleting: Option<Establishment>,
}

impl EstablishmentsPage {
    fn api(ctx: &Context<Self>) -> Api {
        Api::new(&ctx.props().session)
    }
}

impl Component for EstablishmentsPage {
    type Message = Msg;
    type Properties = EstablishmentsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            sites: Vec::new(),
            search: String::new(),
            loading: true,
            form: None,
            deleting: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.kind != ctx.props().kind {
            self.sites.clear();
            self.form = None;
            self.deleting = None;
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        let props = ctx.props();
        let kind = props.kind;
        match msg {
            Msg::Load => {
                self.loading = true;
                let api = Self::api(ctx);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(establishments::list(&api, kind).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(sites) => self.sites = sites,
                    Err(e) => report_failure(
                        &e,
                        "Erreur lors du chargement de la liste",
                        &props.on_unauthorized,
                    ),
                }
                true
            }
            Msg::Search(term) => {
                self.search = term;
                true
            }
            Msg::OpenCreate => {
                self.form = Some(SiteForm::new(Establishment {
                    active: true,
                    ..Establishment::default()
                }));
                true
            }
            Msg::OpenEdit(site) => {
                self.form = Some(SiteForm::new(site));
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
                    form.apply(field);
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
                let site = match form.validated() {
                    Ok(site) => site,
                    Err(e) => {
                        form.error = Some(e);
                        return true;
                    }
                };
                form.saving = true;
                let api = Self::api(ctx);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = if site.id.is_empty() {
                        establishments::create(&api, kind, &site).await
                    } else {
                        establishments::update(&api, kind, &site).await
                    };
                    link.send_message(Msg::Saved(result));
                });
                true
            }
            Msg::Saved(result) => {
                match result {
                    Ok(site) => {
                        show_toast(&format!("{} enregistré", site.name));
                        match self.sites.iter_mut().find(|s| s.id == site.id) {
                            Some(slot) => *slot = site,
                            None => self.sites.push(site),
                        }
                        self.form = None;
                    }
                    Err(e) => {
                        if let Some(form) = &mut self.form {
                            form.saving = false;
                        }
                        report_failure(
                            &e,
                            "Erreur lors de l'enregistrement",
                            &props.on_unauthorized,
                        );
                    }
                }
                true
            }
            Msg::AskDelete(site) => {
                self.deleting = Some(site);
                true
            }
            Msg::ConfirmDelete => {
                let Some(site) = self.deleting.take() else {
                    return false;
                };
                let api = Self::api(ctx);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = establishments::delete(&api, kind, &site.id).await;
                    link.send_message(Msg::Deleted(site.id, result));
                });
                true
            }
            Msg::Deleted(id, result) => {
                match result {
                    Ok(()) => {
                        self.sites.retain(|s| s.id != id);
                        show_toast("Suppression effectuée");
                    }
                    Err(e) => report_failure(&e, "Erreur lors de la suppression", &props.on_unauthorized),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let kind = ctx.props().kind;
        let visible = filter(&self.sites, &self.search);

        html! {
            <section class="page establishments-page">
                <div class="toolbar">
                    <SearchBox placeholder="Nom, chef, ville..." on_search={link.callback(Msg::Search)} />
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        <span class="material-icons">{ "add" }</span>
                        { kind.new_label() }
                    </button>
                </div>
                if self.loading {
                    <p class="loading">{ "Chargement..." }</p>
                } else {
                    <CardGrid>
                        { for visible.into_iter().map(|site| site_card(site, kind, link)) }
                    </CardGrid>
                }
                if let Some(form) = &self.form {
                    { form_dialog(form, kind, link) }
                }
                if let Some(site) = &self.deleting {
                    <Dialog
                        title="Confirmer la suppression"
                        on_close={link.callback(|_| Msg::Close)}
                        actions={html! {
                            <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                                { "Supprimer" }
                            </button>
                        }}
                    >
                        <p>{ format!("Supprimer définitivement « {} » ?", site.name) }</p>
                    </Dialog>
                }
            </section>
        }
    }
}

fn site_card(site: &Establishment, kind: Kind, link: &yew::html::Scope<EstablishmentsPage>) -> Html {
    let edit = {
        let site = site.clone();
        link.callback(move |_| Msg::OpenEdit(site.clone()))
    };
    let remove = {
        let site = site.clone();
        link.callback(move |_| Msg::AskDelete(site.clone()))
    };
    let place = [site.postal_code.as_deref(), site.city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        <article class={classes!("card", (!site.active).then_some("inactive"))} key={site.id.clone()}>
            <header>
                <h3>{ site.name.clone() }</h3>
                if kind == Kind::Laboratory {
                    <span class={site.hygiene_rating.badge_class()} title="Note d'hygiène">
                        { site.hygiene_rating.as_str() }
                    </span>
                }
            </header>
            if let Some(chef) = &site.chef {
                <p><span class="material-icons inline">{ "person" }</span>{ chef.clone() }</p>
            }
            <p class="muted">{ site.address.clone().unwrap_or_default() }</p>
            <p class="muted">{ place }</p>
            if let Some(phone) = &site.phone {
                <p><span class="material-icons inline">{ "call" }</span>{ phone.clone() }</p>
            }
            if let Some(email) = &site.email {
                <p><span class="material-icons inline">{ "mail" }</span>{ email.clone() }</p>
            }
            if let Some(capacity) = site.capacity {
                <p>{ format!("Capacité : {}", capacity) }</p>
            }
            if kind == Kind::Laboratory {
                <p class="muted">{ format!("Dernière inspection : {}", date(site.last_inspection.as_deref())) }</p>
            }
            <footer class="row-actions">
                <button class="icon-btn" title="Modifier" onclick={edit}>
                    <span class="material-icons">{ "edit" }</span>
                </button>
                <button class="icon-btn danger" title="Supprimer" onclick={remove}>
                    <span class="material-icons">{ "delete" }</span>
                </button>
            </footer>
        </article>
    }
}

fn text_field(
    label: &'static str,
    value: Option<&str>,
    link: &yew::html::Scope<EstablishmentsPage>,
    field: fn(String) -> Field,
) -> Html {
    html! {
        <label>
            { label }
            <input type="text" value={value.unwrap_or_default().to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field(input_value(&e))))} />
        </label>
    }
}

fn form_dialog(form: &SiteForm, kind: Kind, link: &yew::html::Scope<EstablishmentsPage>) -> Html {
    let site = &form.site;
    let title = if site.id.is_empty() {
        kind.new_label().to_string()
    } else {
        format!("Modifier {}", site.name)
    };
    let actions = html! {
        <button class="btn btn-primary" disabled={form.saving} onclick={link.callback(|_| Msg::Save)}>
            { "Enregistrer" }
        </button>
    };

    html! {
        <Dialog title={title} on_close={link.callback(|_| Msg::Close)} actions={actions}>
            <div class="form-grid">
                { text_field("Nom", Some(site.name.as_str()), link, Field::Name) }
                { text_field("Chef", site.chef.as_deref(), link, Field::Chef) }
                { text_field("Adresse", site.address.as_deref(), link, Field::Address) }
                { text_field("Code postal", site.postal_code.as_deref(), link, Field::PostalCode) }
                { text_field("Ville", site.city.as_deref(), link, Field::City) }
                { text_field("Téléphone", site.phone.as_deref(), link, Field::Phone) }
                { text_field("Email", site.email.as_deref(), link, Field::Email) }
                { text_field("Capacité", Some(form.capacity.as_str()), link, Field::Capacity) }
                if kind == Kind::Laboratory {
                    <label>
                        { "Note d'hygiène" }
                        <select onchange={link.batch_callback(|e: Event| {
                            HygieneRating::parse(&select_value(&e)).map(|r| Msg::Edit(Field::Hygiene(r)))
                        })}>
                            { for HygieneRating::ALL.iter().map(|rating| html! {
                                <option value={rating.as_str()} selected={*rating == site.hygiene_rating}>
                                    { rating.as_str() }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label>
                        { "Dernière inspection" }
                        <input type="date" value={date_input_value(site.last_inspection.as_deref())}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(Field::LastInspection(input_value(&e))))} />
                    </label>
                }
                <label class="checkbox">
                    <input type="checkbox" checked={site.active}
                        onchange={link.callback(|e: Event| Msg::Edit(Field::Active(input_checked(&e))))} />
                    { "Actif" }
                </label>
            </div>
            if let Some(error) = &form.error {
                <p class="form-error">{ error.clone() }</p>
            }
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SiteForm {
        SiteForm::new(Establishment {
            name: " Labo Nord ".to_string(),
            address: Some("3 rue du Four".to_string()),
            active: true,
            ..Establishment::default()
        })
    }

    #[test]
    fn blank_fields_become_none() {
        let mut form = form();
        form.apply(Field::City("  ".to_string()));
        assert_eq!(form.site.city, None);
        form.apply(Field::City("Lille".to_string()));
        assert_eq!(form.site.city.as_deref(), Some("Lille"));
    }

    #[test]
    fn capacity_must_be_a_positive_integer() {
        let mut form = form();
        form.apply(Field::Capacity("douze".to_string()));
        assert!(form.validated().is_err());
        form.apply(Field::Capacity("0".to_string()));
        assert!(form.validated().is_err());
        form.apply(Field::Capacity("120".to_string()));
        let site = form.validated().unwrap();
        assert_eq!(site.capacity, Some(120));
        assert_eq!(site.name, "Labo Nord");
    }
}
