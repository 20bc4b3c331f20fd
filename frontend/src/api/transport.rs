//! HTTP transport seam for the places API.
//!
//! `PlacesApi` never talks to the browser directly: it builds an
//! `HttpRequest`, hands it to a `Transport`, and interprets the
//! `HttpResponse`. In the browser the transport is `GlooTransport`; tests
//! substitute a recording fake.

use async_trait::async_trait;
use gloo_net::http::{Method as GlooMethod, RequestBuilder};

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully resolved request: absolute URL, final header set, optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[cfg(test)]
impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body text. The body is empty for 204 responses.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Delete => GlooMethod::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder.body(body)?.send().await?,
            None => builder.send().await?,
        };

        let status = response.status();
        // 204 carries no body; reading it is pointless.
        let body = if status == 204 {
            String::new()
        } else {
            response.text().await.unwrap_or_default()
        };

        Ok(HttpResponse { status, body })
    }
}
