//! Compile-time settings of the dashboard.

/// Base URL of the remote bakery API. Override at build time with
/// `BAKERY_API_URL=https://api.example.fr trunk build`.
pub const API_BASE_URL: &str = match option_env!("BAKERY_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Local storage key holding the light/dark preference.
pub const THEME_KEY: &str = "theme";

/// Delay between the last keystroke in a search box and the list refresh.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const PAGE_SIZE: u32 = common::pagination::DEFAULT_PAGE_SIZE;
