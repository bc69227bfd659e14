use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Minimum card width in pixels; the grid fits as many columns as it can.
    #[prop_or(260)]
    pub min_width: u32,
    pub children: Children,
}

/// Responsive grid of cards (products, laboratories, bakeries, announcements).
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 16px;",
            props.min_width
        );

        if props.children.is_empty() {
            return html! { <p class="empty">{ "Aucun élément" }</p> };
        }

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
