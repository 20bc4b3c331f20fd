//! Host configuration, read from the environment (and `.env` if present).
//!
//! | Variable | Default |
//! |---|---|
//! | `PLACES_HOST` | `127.0.0.1` |
//! | `PLACES_PORT` | `8080` |
//! | `PLACES_OPEN_BROWSER` | `true` (`0`, `false`, `no`, `off` disable it) |

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("PLACES_HOST")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PLACES_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("PLACES_PORT={raw:?} is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = lookup("PLACES_OPEN_BROWSER").map_or(true, |raw| {
            !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            )
        });

        Self {
            host,
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

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PLACES_HOST", "0.0.0.0"),
            ("PLACES_PORT", "9000"),
            ("PLACES_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config(&[("PLACES_PORT", "eighty")]).port, 8080);
        assert_eq!(config(&[("PLACES_PORT", "70000")]).port, 8080);
    }

    #[test]
    fn browser_flag_values() {
        assert!(!config(&[("PLACES_OPEN_BROWSER", "0")]).open_browser);
        assert!(!config(&[("PLACES_OPEN_BROWSER", "Off")]).open_browser);
        assert!(config(&[("PLACES_OPEN_BROWSER", "1")]).open_browser);
    }
}
