//! Modal sheet sliding in from the top of the page.
//!
//! Pages render a `Dialog` only while their dialog state is `Some`; once mounted
//! the sheet gets the `show` class after a short delay so the CSS transition
//! runs. Closing is the parent's job through `on_close`.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

pub struct Dialog {
    id: String,
    node_ref: NodeRef,
    reveal: Option<Timeout>,
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: String,
    #[prop_or_default]
    pub children: Html,
    /// Buttons rendered in the footer.
    #[prop_or_default]
    pub actions: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
}

impl Component for Dialog {
    type Message = ();
    type Properties = DialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("dialog-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            reveal: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = props.on_close.reform(|_| ());
        let sheet_class = if props.wide { "top-sheet wide" } else { "top-sheet" };

        html! {
            <div class="sheet-backdrop">
                <div class={sheet_class} id={self.id.clone()} ref={self.node_ref.clone()}>
                    <header class="sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Fermer" onclick={close}>
                            <span class="material-icons">{ "close" }</span>
                        </button>
                    </header>
                    <div class="sheet-body">{ props.children.clone() }</div>
                    <footer class="sheet-actions">{ props.actions.clone() }</footer>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let node_ref = self.node_ref.clone();
            self.reveal = Some(Timeout::new(50, move || {
                if let Some(sheet) = node_ref.cast::<web_sys::Element>() {
                    sheet.class_list().add_1("show").ok();
                }
            }));
        }
    }
}
