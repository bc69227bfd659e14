//! Dashboard shell: side navigation for the signed-in role, header with the
//! theme toggle and logout, and the active page as children.

use common::session::{sections_for, Section, UserInfo};
use yew::prelude::*;

use crate::storage::Theme;

pub enum Msg {
    ToggleMenu,
    Navigate(Section),
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub session: UserInfo,
    pub section: Section,
    pub theme: Theme,
    pub on_navigate: Callback<Section>,
    pub on_logout: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub struct Layout {
    menu_open: bool,
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::Navigate(section) => {
                self.menu_open = false;
                ctx.props().on_navigate.emit(section);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let role = props.session.user.role;
        let link = ctx.link();

        html! {
            <div class={classes!("shell", self.menu_open.then_some("menu-open"))}>
                <aside class="sidebar">
                    <div class="brand">
                        <span class="material-icons">{ "bakery_dining" }</span>
                        <span>{ "Fournil Pro" }</span>
                    </div>
                    <nav>
                        { for sections_for(role).iter().map(|&section| {
                            let active = section == props.section;
                            html! {
                                <a
                                    class={classes!("nav-item", active.then_some("active"))}
                                    onclick={link.callback(move |e: MouseEvent| {
                                        e.prevent_default();
                                        Msg::Navigate(section)
                                    })}
                                >
                                    <span class="material-icons">{ section.icon() }</span>
                                    <span>{ section.label(role) }</span>
                                </a>
                            }
                        }) }
                    </nav>
                </aside>
                <div class="main">
                    <header class="topbar">
                        <button class="icon-btn menu-toggle" onclick={link.callback(|_| Msg::ToggleMenu)}>
                            <span class="material-icons">{ "menu" }</span>
                        </button>
                        <h1>{ props.section.label(role) }</h1>
                        <div class="topbar-user">
                            <span class="user-name">{ props.session.user.name.clone() }</span>
                            <span class="badge badge-neutral">{ role.label() }</span>
                            <button
                                class="icon-btn"
                                title="Changer de thème"
                                onclick={props.on_toggle_theme.reform(|_| ())}
                            >
                                <span class="material-icons">{ props.theme.icon() }</span>
                            </button>
                            <button
                                class="icon-btn"
                                title="Se déconnecter"
                                onclick={props.on_logout.reform(|_| ())}
                            >
                                <span class="material-icons">{ "logout" }</span>
                            </button>
                        </div>
                    </header>
                    <main class="content">{ props.children.clone() }</main>
                </div>
            </div>
        }
    }
}
