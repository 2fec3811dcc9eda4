use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::BackendConfig;
use crate::error::SyncError;
use crate::event::Event;
use crate::model::Todo;

use super::AppHttp;

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// What the `send` callback of the HTTP capability receives.
pub type RawResult = crux_http::Result<crux_http::Response<Vec<u8>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request against the `todos` REST resource, not yet handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRequest {
    method: HttpMethod,
    url: Url,
    body: Option<Vec<u8>>,
}

impl TodoRequest {
    /// `GET /todos`
    pub fn list(config: &BackendConfig) -> Result<Self, SyncError> {
        Ok(Self {
            method: HttpMethod::Get,
            url: config.collection_url()?,
            body: None,
        })
    }

    /// `POST /todos` with the full record.
    pub fn create(config: &BackendConfig, todo: &Todo) -> Result<Self, SyncError> {
        Ok(Self {
            method: HttpMethod::Post,
            url: config.collection_url()?,
            body: Some(encode(todo)?),
        })
    }

    /// `PUT /todos/{id}` with the full record.
    pub fn update(config: &BackendConfig, todo: &Todo) -> Result<Self, SyncError> {
        Ok(Self {
            method: HttpMethod::Put,
            url: config.item_url(&todo.id)?,
            body: Some(encode(todo)?),
        })
    }

    /// `DELETE /todos/{id}`
    pub fn delete(config: &BackendConfig, id: &str) -> Result<Self, SyncError> {
        Ok(Self {
            method: HttpMethod::Delete,
            url: config.item_url(id)?,
            body: None,
        })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Hands the request to the shell; `callback` turns the raw outcome into
    /// the event that settles it.
    pub fn send<F>(self, http: &AppHttp, callback: F)
    where
        F: FnOnce(RawResult) -> Event + Send + 'static,
    {
        debug!(method = self.method.as_str(), url = %self.url, "sending request");

        let url = self.url.as_str();
        let builder = match self.method {
            HttpMethod::Get => http.get(url),
            HttpMethod::Post => http.post(url),
            HttpMethod::Put => http.put(url),
            HttpMethod::Delete => http.delete(url),
        };

        let builder = match self.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        builder
            .header("Content-Type", JSON_CONTENT_TYPE)
            .send(callback);
    }
}

fn encode(todo: &Todo) -> Result<Vec<u8>, SyncError> {
    serde_json::to_vec(todo).map_err(|e| SyncError::Encode {
        message: e.to_string(),
    })
}

/// Reduces a raw outcome to the response body.
///
/// Only a transport failure is an error. The status code is logged and
/// otherwise ignored; whether the body is usable is up to the caller.
pub fn settle(result: RawResult) -> Result<Vec<u8>, SyncError> {
    let mut response = result.map_err(SyncError::transport)?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "backend answered with a non-success status");
    }

    Ok(response.take_body().unwrap_or_default())
}

pub fn decode_todos(body: &[u8]) -> Result<Vec<Todo>, SyncError> {
    serde_json::from_slice(body).map_err(SyncError::malformed)
}

/// Create and update responses are only checked for being JSON.
pub fn decode_ack(body: &[u8]) -> Result<serde_json::Value, SyncError> {
    serde_json::from_slice(body).map_err(SyncError::malformed)
}
