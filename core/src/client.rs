//! JSON request client for the message board API.
//!
//! # Design
//! `RequestClient` holds only its configuration and a `Transport`, and keeps
//! no state between calls. Building a request and parsing a response are pure
//! functions, so the success/failure contract is testable without a server;
//! `get` and `post` both funnel through `request`, which is the only place a
//! transport is driven.
//!
//! A response body is parsed as JSON when it can be and kept as raw text when
//! it can't. A non-2xx status becomes an `ApiError` whose message comes from
//! the body's `error` field, then its `message` field, then `HTTP <status>`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

/// Body fields consulted, in order, for the message of a failed response.
const ERROR_FIELDS: [&str; 2] = ["error", "message"];

/// Stateless JSON client bound to one base URL.
#[derive(Debug, Clone)]
pub struct RequestClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> RequestClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        self.build(HttpMethod::Get, path, None, &[])
    }

    pub fn build_post<B>(&self, path: &str, body: &B) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.build_post_with_headers(path, body, &[])
    }

    /// Like `build_post`, with extra headers. A header whose name matches a
    /// default (case-insensitively) replaces it; others are appended.
    pub fn build_post_with_headers<B>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        Ok(self.build(HttpMethod::Post, path, Some(body), headers))
    }

    fn build(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        extra: &[(&str, &str)],
    ) -> HttpRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        for (name, value) in extra {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => slot.1 = (*value).to_string(),
                None => headers.push(((*name).to_string(), (*value).to_string())),
            }
        }

        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body,
        }
    }

    /// Execute a built request and apply the response contract.
    pub async fn request(&self, request: HttpRequest) -> Result<Value, ApiError> {
        tracing::debug!(method = ?request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        parse_response(response)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(self.build_get(path)).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_post(path, body)?;
        self.request(request).await
    }

    pub async fn post_with_headers<B>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_post_with_headers(path, body, headers)?;
        self.request(request).await
    }

    /// `get`, then decode the result into `R`.
    pub async fn get_as<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        decode(self.get(path).await?)
    }

    /// `post`, then decode the result into `R`.
    pub async fn post_as<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        decode(self.post(path, body).await?)
    }
}

/// Turn a response into the caller's result: the parsed body on 2xx, an
/// `ApiError` otherwise.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    let data = parse_body(&response.body);
    if !response.is_success() {
        return Err(ApiError::new(error_message(response.status, &data)));
    }
    Ok(data)
}

/// Parse body text as JSON. Empty text is `null`; text that isn't JSON is
/// returned as a JSON string holding the raw text.
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Message for a failed response: the first non-empty string among the
/// body's `error` and `message` fields, else `HTTP <status>`.
pub fn error_message(status: u16, data: &Value) -> String {
    ERROR_FIELDS
        .iter()
        .find_map(|field| {
            data.get(*field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::new(format!("unexpected response: {e}")))
}
