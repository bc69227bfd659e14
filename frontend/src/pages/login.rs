use common::session::UserInfo;
use common::validation::validate_login;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{auth, ApiError};
use crate::helpers::{input_value, show_error, show_toast};

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Answered(Result<UserInfo, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<UserInfo>,
}

pub struct LoginPage {
    email: String,
    password: String,
    error: Option<String>,
    submitting: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                self.error = None;
                true
            }
            Msg::SetPassword(password) => {
                self.password = password;
                self.error = None;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if let Err(e) = validate_login(&self.email, &self.password) {
                    self.error = Some(e.to_string());
                    return true;
                }
                self.submitting = true;
                let (email, password) = (self.email.clone(), self.password.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = auth::login(&email, &password).await;
                    link.send_message(Msg::Answered(result));
                });
                true
            }
            Msg::Answered(result) => {
                self.submitting = false;
                match result {
                    Ok(info) => {
                        show_toast(&format!("Bienvenue {}", info.user.name));
                        ctx.props().on_login.emit(info);
                    }
                    Err(ApiError::Unauthorized) | Err(ApiError::Status(400..=403, _)) => {
                        self.error = Some("Email ou mot de passe incorrect".to_string());
                    }
                    Err(_) => show_error("Connexion impossible, réessayez plus tard"),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-page">
                <form class="login-card" onsubmit={onsubmit}>
                    <div class="brand">
                        <span class="material-icons">{ "bakery_dining" }</span>
                        <h1>{ "Fournil Pro" }</h1>
                    </div>
                    <label>
                        { "Email" }
                        <input
                            type="email"
                            autocomplete="username"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                        />
                    </label>
                    <label>
                        { "Mot de passe" }
                        <input
                            type="password"
                            autocomplete="current-password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                        />
                    </label>
                    if let Some(error) = &self.error {
                        <p class="form-error">{ error.clone() }</p>
                    }
                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Connexion..." } else { "Se connecter" } }
                    </button>
                </form>
            </div>
        }
    }
}
