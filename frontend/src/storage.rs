//! Browser local storage: the session record and the theme preference.

use common::session::{UserInfo, SESSION_KEY};
use gloo_console::error;
use web_sys::Storage;

use crate::config::THEME_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            error!(format!("Could not persist {} in local storage", key));
        }
    }
}

pub fn load_session() -> Option<UserInfo> {
    UserInfo::from_storage(read(SESSION_KEY).as_deref())
}

pub fn save_session(info: &UserInfo) {
    match serde_json::to_string(info) {
        Ok(json) => write(SESSION_KEY, &json),
        Err(e) => error!(format!("Could not serialize session: {}", e)),
    }
}

/// Removes the session. Only an explicit logout does this.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        storage.remove_item(SESSION_KEY).ok();
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }
}

pub fn load_theme() -> Theme {
    match read(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Persists the preference and sets `data-theme` on `<html>` for the stylesheet.
pub fn apply_theme(theme: Theme) {
    write(THEME_KEY, theme.as_str());
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_attribute("data-theme", theme.as_str()).ok();
    }
}
