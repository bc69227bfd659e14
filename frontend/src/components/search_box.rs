//! Search input that reports its value once typing pauses.
//!
//! Each keystroke bumps a generation counter and schedules a check after
//! `SEARCH_DEBOUNCE_MS`; only the check whose generation is still current
//! emits `on_search`. Nothing else is coalesced.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::helpers::input_value;

pub enum Msg {
    Input(String),
    Settled(u32),
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    #[prop_or(AttrValue::from("Rechercher..."))]
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

pub struct SearchBox {
    value: String,
    generation: u32,
}

impl Component for SearchBox {
    type Message = Msg;
    type Properties = SearchBoxProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            value: String::new(),
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::Input(value) => {
                self.value = value;
                self.generation = self.generation.wrapping_add(1);
                let generation = self.generation;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                    link.send_message(Msg::Settled(generation));
                });
                true
            }
            Msg::Settled(generation) => {
                if generation == self.generation {
                    ctx.props().on_search.emit(self.value.trim().to_string());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="search-box">
                <span class="material-icons">{ "search" }</span>
                <input
                    type="search"
                    value={self.value.clone()}
                    placeholder={ctx.props().placeholder.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| Msg::Input(input_value(&e)))}
                />
            </div>
        }
    }
}
