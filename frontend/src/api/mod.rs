//! Client for the backend's `/places` resource.
//!
//! Every call funnels through `PlacesApi::http`, which
//! - prefixes the configured base URL,
//! - sends `Content-Type: application/json` unless the call overrides it,
//! - turns any non-2xx status into `ApiError::Http`, carrying the body text
//!   verbatim or `HTTP {status}` when the body is empty,
//! - treats 204 and empty bodies as success without attempting to parse them.

#[cfg(test)]
pub mod fake;
pub mod transport;

use std::rc::Rc;

use common::model::place::{Place, PlaceDraft, PlaceId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
use transport::{GlooTransport, HttpRequest, Method, Transport};

const PLACES_PATH: &str = "/places";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response. Display shows only the message so it can be put in
    /// front of the user as is.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("не удалось разобрать ответ сервера: {0}")]
    Decode(String),
    #[error("не удалось сформировать запрос: {0}")]
    Encode(String),
    #[error("сервер вернул пустой ответ")]
    EmptyBody,
}

impl ApiError {
    fn from_status(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        ApiError::Http { status, message }
    }

    /// User-facing text, or `fallback` when the error has nothing to say.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Cheap to clone; components receive it through props.
#[derive(Clone)]
pub struct PlacesApi {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
}

impl PartialEq for PlacesApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl std::fmt::Debug for PlacesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PlacesApi {
    pub fn new(config: &ApiConfig, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: Rc::from(config.base_url.as_str()),
            transport,
        }
    }

    /// Browser client pointed at the build-time configured backend.
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env(), Rc::new(GlooTransport))
    }

    pub async fn list(&self) -> Result<Vec<Place>, ApiError> {
        self.http(Method::Get, PLACES_PATH, None, &[])
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    pub async fn create(&self, payload: &PlaceDraft) -> Result<Place, ApiError> {
        let body = encode(payload)?;
        self.http(Method::Post, PLACES_PATH, Some(body), &[])
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    /// Replaces the whole record; every draft field is sent.
    pub async fn update(&self, id: PlaceId, payload: &PlaceDraft) -> Result<Place, ApiError> {
        let body = encode(payload)?;
        self.http(Method::Put, &place_path(id), Some(body), &[])
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    pub async fn remove(&self, id: PlaceId) -> Result<(), ApiError> {
        self.http::<serde::de::IgnoredAny>(Method::Delete, &place_path(id), None, &[])
            .await
            .map(|_| ())
    }

    /// Shared request path. `headers` override the JSON default by name.
    /// Returns `None` for 204 or an empty body.
    pub async fn http<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Option<T>, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: merge_headers(headers),
            body,
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, response.body));
        }

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn place_path(id: PlaceId) -> String {
    format!("{PLACES_PATH}/{id}")
}

fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|err| ApiError::Encode(err.to_string()))
}

fn merge_headers(overrides: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
    for (name, value) in overrides {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        headers.push((name.to_string(), value.to_string()));
    }
    headers
}
