//! Small utilities shared by the pages.
//!
//! - **User feedback**: `show_toast` injects a temporary notification at the
//!   bottom of the screen; `report_failure` turns an `ApiError` into either a
//!   toast or, for an expired session, a call to the app's unauthorized handler.
//! - **Form input**: reading the current value out of input, select and
//!   textarea events.
//! - **Files**: reading a picked image into a base64 `data:` URL.

use base64::{engine::general_purpose, Engine as _};
use gloo_console::error;
use gloo_file::{futures::read_as_bytes, Blob};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::ApiError;

/// Largest image accepted for a product picture.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Displays a notification that removes itself after three seconds.
pub fn show_toast(message: &str) {
    toast(message, ToastKind::Info);
}

pub fn show_error(message: &str) {
    toast(message, ToastKind::Error);
}

fn toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        html_toast.set_class_name(match kind {
            ToastKind::Info => "toast",
            ToastKind::Error => "toast toast-error",
        });

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Surfaces a failed call: a 401 goes to `on_unauthorized`, anything else is
/// logged to the console and shown as `message`.
pub fn report_failure(err: &ApiError, message: &str, on_unauthorized: &Callback<()>) {
    match err {
        ApiError::Unauthorized => on_unauthorized.emit(()),
        other => {
            error!(format!("{}: {}", message, other));
            show_error(message);
        }
    }
}

pub fn input_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn input_checked(e: &Event) -> bool {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

pub fn select_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

pub fn textarea_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Parses a French or English decimal ("1,20" or "1.20").
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse::<f64>().ok()
}

/// First file picked in a file input change event.
pub fn selected_file(e: &Event) -> Option<web_sys::File> {
    e.target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Reads an image file into a `data:<mime>;base64,...` URL.
pub async fn read_image_data_url(file: web_sys::File) -> Result<String, String> {
    let mime = file.type_();
    if !mime.starts_with("image/") {
        return Err("Le fichier doit être une image".to_string());
    }
    let blob = Blob::from(web_sys::Blob::from(file));
    let bytes = read_as_bytes(&blob)
        .await
        .map_err(|e| format!("Lecture du fichier impossible: {}", e))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image trop volumineuse (2 Mo maximum)".to_string());
    }
    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(&bytes)
    ))
}

/// Value of a `<input type="date">` from an ISO timestamp.
pub fn date_input_value(value: Option<&str>) -> String {
    value.map(|v| v.chars().take(10).collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_accept_comma() {
        assert_eq!(parse_decimal("1,20"), Some(1.2));
        assert_eq!(parse_decimal(" 0.055 "), Some(0.055));
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn date_input_keeps_the_day() {
        assert_eq!(date_input_value(Some("2024-03-18T06:30:00.000Z")), "2024-03-18");
        assert_eq!(date_input_value(None), "");
    }
}
