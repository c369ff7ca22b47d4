//! # HTTP transport abstraction
//!
//! [`HttpClient`] is the seam between the typed client and the actual
//! network. [`ReqwestHttp`] is the production implementation — reqwest
//! speaks `fetch` on wasm and plain HTTP elsewhere, so the same client
//! drives the browser build and native tests alike. Returning `Err` from
//! [`send`](HttpClient::send) means no response arrived at all; HTTP error
//! statuses come back as an `Ok` response and are classified by the caller.

use serde_json::Value;

use crate::error::ApiError;

/// Method subset the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One request to the backend, fully described.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token, when a credential is available.
    pub bearer: Option<String>,
    /// JSON body for POST/PUT.
    pub body: Option<Value>,
}

/// Status and raw body of a response that did arrive.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport able to exchange one [`HttpRequest`] for an [`HttpResponse`].
pub trait HttpClient {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// Production transport backed by [`reqwest`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
