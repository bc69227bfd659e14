//! Admin management of dashboard accounts.

use common::model::user::{Role, User};
use common::requests::UserPayload;
use common::search::filter;
use common::validation::validate_user;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::api::{users, ApiError};
use crate::components::dialog::Dialog;
use crate::components::search_box::SearchBox;
use crate::helpers::{input_checked, input_value, report_failure, select_value, show_toast};

pub enum Msg {
    Load,
    Loaded(Result<Vec<User>, ApiError>),
    Search(String),
    OpenCreate,
    OpenEdit(User),
    Close,
    Edit(Field),
    Save,
    Saved(Result<User, ApiError>),
    ToggleActive(User),
    AskDelete(User),
    ConfirmDelete,
    Deleted(String, Result<(), ApiError>),
}

pub enum Field {
    Name(String),
    Email(String),
    Role(Role),
    Active(bool),
    Password(String),
}

/// Create or edit form. `id` is `None` for a new account.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub password: String,
    pub error: Option<String>,
    pub saving: bool,
}

impl UserForm {
    fn blank() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            role: Role::Bakery,
            active: true,
            password: String::new(),
            error: None,
            saving: false,
        }
    }

    fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            active: user.active,
            ..Self::blank()
        }
    }

    /// A password is required for a new account; when editing, a blank one
    /// keeps the current password.
    pub fn to_payload(&self) -> Result<UserPayload, String> {
        let password = match (&self.id, self.password.trim()) {
            (Some(_), "") => None,
            (_, password) => Some(password),
        };
        validate_user(&self.name, &self.email, password).map_err(|e| e.to_string())?;
        Ok(UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            active: self.active,
            password: password.map(str::to_string),
        })
    }
}

pub struct UsersPage {
    users: Vec<User>,
    search: String,
    loading: bool,
    form: Option<UserForm>,
    deleting: Option<User>,
}

impl Component for UsersPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            users: Vec::new(),
            search: String::new(),
            loading: true,
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
                    link.send_message(Msg::Loaded(users::list(&api).await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(list) => self.users = list,
                    Err(e) => report_failure(&e, "Erreur lors du chargement des utilisateurs", &props.on_unauthorized),
                }
                true
            }
            Msg::Search(term) => {
                self.search = term;
                true
            }
            Msg::OpenCreate => {
                self.form = Some(UserForm::blank());
                true
            }
            Msg::OpenEdit(user) => {
                self.form = Some(UserForm::from_user(&user));
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
                    match field {
                        Field::Name(v) => form.name = v,
                        Field::Email(v) => form.email = v,
                        Field::Role(v) => form.role = v,
                        Field::Active(v) => form.active = v,
                        Field::Password(v) => form.password = v,
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
                let payload = match form.to_payload() {
                    Ok(payload) => payload,
                    Err(e) => {
                        form.error = Some(e);
                        return true;
                    }
                };
                form.saving = true;
                let id = form.id.clone();
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match id {
                        Some(id) => users::update(&api, &id, &payload).await,
                        None => users::create(&api, &payload).await,
                    };
                    link.send_message(Msg::Saved(result));
                });
                true
            }
            Msg::Saved(result) => {
                match result {
                    Ok(user) => {
                        show_toast(&format!("Utilisateur {} enregistré", user.name));
                        match self.users.iter_mut().find(|u| u.id == user.id) {
                            Some(slot) => *slot = user,
                            None => self.users.push(user),
                        }
                        self.form = None;
                    }
                    Err(e) => {
                        if let Some(form) = &mut self.form {
                            form.saving = false;
                        }
                        report_failure(&e, "Erreur lors de l'enregistrement de l'utilisateur", &props.on_unauthorized);
                    }
                }
                true
            }
            Msg::ToggleActive(user) => {
                let payload = UserPayload {
                    name: user.name.clone(),
                    email: user.email.clone(),
                    role: user.role,
                    active: !user.active,
                    password: None,
                };
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = users::update(&api, &user.id, &payload).await;
                    link.send_message(Msg::Saved(result));
                });
                false
            }
            Msg::AskDelete(user) => {
                self.deleting = Some(user);
                true
            }
            Msg::ConfirmDelete => {
                let Some(user) = self.deleting.take() else {
                    return false;
                };
                let api = props.api();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = users::delete(&api, &user.id).await;
                    link.send_message(Msg::Deleted(user.id, result));
                });
                true
            }
            Msg::Deleted(id, result) => {
                match result {
                    Ok(()) => {
                        self.users.retain(|u| u.id != id);
                        show_toast("Utilisateur supprimé");
                    }
                    Err(e) => report_failure(&e, "Erreur lors de la suppression de l'utilisateur", &props.on_unauthorized),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let me = &ctx.props().session.user.id;
        let visible = filter(&self.users, &self.search);

        html! {
            <section class="page users-page">
                <div class="toolbar">
                    <SearchBox placeholder="Nom, email, rôle..." on_search={link.callback(Msg::Search)} />
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        <span class="material-icons">{ "person_add" }</span>
                        { "Nouvel utilisateur" }
                    </button>
                </div>
                if self.loading {
                    <p class="loading">{ "Chargement..." }</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "Nom" }</th>
                                <th>{ "Email" }</th>
                                <th>{ "Rôle" }</th>
                                <th>{ "Actif" }</th>
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.into_iter().map(|user| {
                                let (edit, toggle, remove) = {
                                    let (a, b, c) = (user.clone(), user.clone(), user.clone());
                                    (
                                        link.callback(move |_| Msg::OpenEdit(a.clone())),
                                        link.callback(move |_| Msg::ToggleActive(b.clone())),
                                        link.callback(move |_| Msg::AskDelete(c.clone())),
                                    )
                                };
                                let is_me = &user.id == me;
                                html! {
                                    <tr key={user.id.clone()}>
                                        <td>{ user.name.clone() }</td>
                                        <td>{ user.email.clone() }</td>
                                        <td><span class="badge badge-neutral">{ user.role.label() }</span></td>
                                        <td>
                                            <input type="checkbox" checked={user.active} disabled={is_me} onchange={toggle} />
                                        </td>
                                        <td class="row-actions">
                                            <button class="icon-btn" title="Modifier" onclick={edit}>
                                                <span class="material-icons">{ "edit" }</span>
                                            </button>
                                            <button class="icon-btn danger" title="Supprimer" disabled={is_me} onclick={remove}>
                                                <span class="material-icons">{ "delete" }</span>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
                if let Some(form) = &self.form {
                    { self.form_dialog(form, link) }
                }
                if let Some(user) = &self.deleting {
                    <Dialog
                        title="Supprimer l'utilisateur"
                        on_close={link.callback(|_| Msg::Close)}
                        actions={html! {
                            <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                                { "Supprimer" }
                            </button>
                        }}
                    >
                        <p>{ format!("Supprimer définitivement {} ({}) ?", user.name, user.email) }</p>
                    </Dialog>
                }
            </section>
        }
    }
}

impl UsersPage {
    fn form_dialog(&self, form: &UserForm, link: &yew::html::Scope<Self>) -> Html {
        let title = if form.id.is_some() { "Modifier l'utilisateur" } else { "Nouvel utilisateur" };
        let actions = html! {
            <button class="btn btn-primary" disabled={form.saving} onclick={link.callback(|_| Msg::Save)}>
                { "Enregistrer" }
            </button>
        };
        let current_role = form.role.as_str();

        html! {
            <Dialog title={title} on_close={link.callback(|_| Msg::Close)} actions={actions}>
                <div class="form-grid">
                    <label>
                        { "Nom" }
                        <input type="text" value={form.name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Name(input_value(&e))))} />
                    </label>
                    <label>
                        { "Email" }
                        <input type="email" value={form.email.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Email(input_value(&e))))} />
                    </label>
                    <label>
                        { "Rôle" }
                        <select onchange={link.batch_callback(|e: Event| {
                            Role::parse(&select_value(&e)).map(|role| Msg::Edit(Field::Role(role)))
                        })}>
                            { for Role::ALL.iter().map(|role| html! {
                                <option value={role.as_str()} selected={current_role == role.as_str()}>
                                    { role.label() }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label>
                        { if form.id.is_some() { "Nouveau mot de passe (optionnel)" } else { "Mot de passe" } }
                        <input type="password" autocomplete="new-password" value={form.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Password(input_value(&e))))} />
                    </label>
                    <label class="checkbox">
                        <input type="checkbox" checked={form.active}
                            onchange={link.callback(|e: Event| Msg::Edit(Field::Active(input_checked(&e))))} />
                        { "Compte actif" }
                    </label>
                </div>
                if let Some(error) = &form.error {
                    <p class="form-error">{ error.clone() }</p>
                }
            </Dialog>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_needs_a_password() {
        let form = UserForm {
            name: "Léa".to_string(),
            email: "lea@fournil.fr".to_string(),
            ..UserForm::blank()
        };
        assert!(form.to_payload().is_err());

        let form = UserForm {
            password: "secret1".to_string(),
            ..form
        };
        assert_eq!(form.to_payload().unwrap().password.as_deref(), Some("secret1"));
    }

    #[test]
    fn editing_keeps_password_when_blank() {
        let form = UserForm {
            id: Some("u1".to_string()),
            name: "Léa".to_string(),
            email: "lea@fournil.fr".to_string(),
            ..UserForm::blank()
        };
        assert_eq!(form.to_payload().unwrap().password, None);
    }
}
