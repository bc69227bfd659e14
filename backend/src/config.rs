//! Runtime configuration of the dashboard server, read from the environment.
//!
//! | variable                 | default                 |
//! |--------------------------|-------------------------|
//! | `BAKERY_API_URL`         | `http://localhost:5000` |
//! | `DASHBOARD_HOST`         | `127.0.0.1`             |
//! | `DASHBOARD_PORT`         | `8080`                  |
//! | `DASHBOARD_OPEN_BROWSER` | `true`                  |

use log::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the remote bakery API the proxy routes forward to.
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    /// Opens the dashboard in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match read("DASHBOARD_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("Invalid DASHBOARD_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = read("DASHBOARD_OPEN_BROWSER")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Self {
            api_base_url: read("BAKERY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            host: read("DASHBOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
    }

    #[test]
    fn overrides_are_trimmed_and_parsed() {
        let config = config(&[
            ("BAKERY_API_URL", " https://api.fournil.fr/ "),
            ("DASHBOARD_PORT", "9090"),
            ("DASHBOARD_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.api_base_url, "https://api.fournil.fr");
        assert_eq!(config.port, 9090);
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(config(&[("DASHBOARD_PORT", "http")]).port, 8080);
    }
}
