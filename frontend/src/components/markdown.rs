//! Markdown rendering for announcement bodies.

use pulldown_cmark::{html, Event, Parser};
use yew::{AttrValue, Html};

/// Converts markdown to HTML. Raw HTML in the source is shown as text, never
/// interpreted.
pub fn to_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn render(source: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(to_html(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_and_lists() {
        let out = to_html("**Fermeture** lundi\n\n- four 1\n- four 2");
        assert!(out.contains("<strong>Fermeture</strong>"));
        assert!(out.contains("<li>four 1</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let out = to_html("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
