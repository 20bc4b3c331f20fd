//! Build-time configuration for the frontend bundle.
//!
//! The wasm bundle has no process environment at runtime, so the backend URL
//! is captured when the crate is compiled (`PLACES_API_URL=... trunk build`).
//! An unset or empty value means "same origin as the page".

/// Name of the compile-time variable holding the backend base URL.
pub const API_URL_VAR: &str = "PLACES_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; request paths start with `/`.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let config = Self::new(option_env!("PLACES_API_URL").unwrap_or_default());
        log::debug!("{API_URL_VAR} = {:?}", config.base_url);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_and_whitespace() {
        assert_eq!(ApiConfig::new(" http://localhost:3000/ ").base_url, "http://localhost:3000");
        assert_eq!(ApiConfig::new("https://api.example.org//").base_url, "https://api.example.org");
    }

    #[test]
    fn empty_means_same_origin() {
        assert_eq!(ApiConfig::new("").base_url, "");
        assert_eq!(ApiConfig::new("/").base_url, "");
    }
}
