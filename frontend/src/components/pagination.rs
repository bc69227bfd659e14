use yew::prelude::*;

/// Previous/next pager with the "page x / y" indicator. Renders nothing for a
/// single page.
pub fn pager(page: u32, total_pages: u32, on_page: Callback<u32>) -> Html {
    if total_pages <= 1 {
        return html! {};
    }
    let previous = {
        let on_page = on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page.saturating_sub(1).max(1)))
    };
    let next = Callback::from(move |_: MouseEvent| on_page.emit((page + 1).min(total_pages)));

    html! {
        <nav class="pager">
            <button class="icon-btn" disabled={page <= 1} onclick={previous}>
                <span class="material-icons">{ "chevron_left" }</span>
            </button>
            <span>{ format!("Page {} / {}", page, total_pages) }</span>
            <button class="icon-btn" disabled={page >= total_pages} onclick={next}>
                <span class="material-icons">{ "chevron_right" }</span>
            </button>
        </nav>
    }
}
