//! Root component: session gate, client-side routing and theme.
//!
//! - Without a stored session the login page is shown at `/login`.
//! - With one, the path `/{role}/{section}` picks the page; unknown paths and
//!   sections of another role fall back to the role's home section.
//! - Navigation pushes history entries; a `popstate` listener follows the
//!   browser's back and forward buttons.
//! - A 401 from any call shows "Session expirée" and returns to the login page.
//!   The stored token is left untouched; only "logout" removes it.

use common::session::{resolve_path, section_path, Section, UserInfo};
use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::api::establishments::Kind;
use crate::components::layout::Layout;
use crate::helpers::show_error;
use crate::pages::announcements::AnnouncementsPage;
use crate::pages::conflicts::ConflictsPage;
use crate::pages::establishments::EstablishmentsPage;
use crate::pages::login::LoginPage;
use crate::pages::orders::OrdersPage;
use crate::pages::products::ProductsPage;
use crate::pages::reclamations::ReclamationsPage;
use crate::pages::users::UsersPage;
use crate::storage::{self, Theme};

const LOGIN_PATH: &str = "/login";

pub enum Msg {
    LoggedIn(UserInfo),
    Logout,
    Unauthorized,
    Navigate(Section),
    PopState,
    ToggleTheme,
}

pub struct App {
    session: Option<UserInfo>,
    section: Section,
    theme: Theme,
    popstate: Option<Closure<dyn FnMut()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme = storage::load_theme();
        storage::apply_theme(theme);

        let session = storage::load_session();
        let section = match &session {
            Some(info) => {
                let section = resolve_path(info.user.role, &current_path());
                replace_path(&section_path(info.user.role, section));
                section
            }
            None => {
                replace_path(LOGIN_PATH);
                Section::Orders
            }
        };

        Self {
            session,
            section,
            theme,
            popstate: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::LoggedIn(info) => {
                storage::save_session(&info);
                let role = info.user.role;
                self.section = common::session::home_section(role);
                push_path(&section_path(role, self.section));
                self.session = Some(info);
                true
            }
            Msg::Logout => {
                storage::clear_session();
                self.session = None;
                push_path(LOGIN_PATH);
                true
            }
            Msg::Unauthorized => {
                if self.session.take().is_some() {
                    show_error("Session expirée");
                    log!("Session rejected by the API, back to login");
                    push_path(LOGIN_PATH);
                }
                true
            }
            Msg::Navigate(section) => {
                let Some(info) = &self.session else {
                    return false;
                };
                if section == self.section {
                    return false;
                }
                self.section = section;
                push_path(&section_path(info.user.role, section));
                true
            }
            Msg::PopState => {
                let path = current_path();
                match &self.session {
                    Some(info) => {
                        let section = resolve_path(info.user.role, &path);
                        if path != section_path(info.user.role, section) {
                            replace_path(&section_path(info.user.role, section));
                        }
                        self.section = section;
                    }
                    None if path != LOGIN_PATH => replace_path(LOGIN_PATH),
                    None => {}
                }
                true
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                storage::apply_theme(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(session) = &self.session else {
            return html! { <LoginPage on_login={link.callback(Msg::LoggedIn)} /> };
        };

        let on_unauthorized = link.callback(|_| Msg::Unauthorized);
        html! {
            <Layout
                session={session.clone()}
                section={self.section}
                theme={self.theme}
                on_navigate={link.callback(Msg::Navigate)}
                on_logout={link.callback(|_| Msg::Logout)}
                on_toggle_theme={link.callback(|_| Msg::ToggleTheme)}
            >
                { page(self.section, session, on_unauthorized) }
            </Layout>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::PopState));
            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                    .ok();
            }
            self.popstate = Some(listener);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// The page for `section`. Keys force a fresh page when the section changes.
fn page(section: Section, session: &UserInfo, on_unauthorized: Callback<()>) -> Html {
    let session = session.clone();
    let key = section.slug();
    match section {
        Section::Orders => html! {
            <OrdersPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
        Section::Conflicts => html! {
            <ConflictsPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
        Section::Reclamations => html! {
            <ReclamationsPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
        Section::Users => html! {
            <UsersPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
        Section::Laboratories => html! {
            <EstablishmentsPage key={key} session={session} on_unauthorized={on_unauthorized} kind={Kind::Laboratory} />
        },
        Section::Bakeries => html! {
            <EstablishmentsPage key={key} session={session} on_unauthorized={on_unauthorized} kind={Kind::Bakery} />
        },
        Section::Products => html! {
            <ProductsPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
        Section::Announcements => html! {
            <AnnouncementsPage key={key} session={session} on_unauthorized={on_unauthorized} />
        },
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}

fn replace_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}
