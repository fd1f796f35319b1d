// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An authenticated JSON-over-HTTP client.
//!
//! The sample clients send a handful of REST requests. [ReqwestClient] adds
//! the authentication headers, sends the request, and converts the response
//! (or the error) into the types used by the sample clients.

use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::ClientConfig;
use gax::Result;
use gax::error::Error;
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;
use tracing::Instrument;

pub use reqwest::Method;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl ReqwestClient {
    /// Creates a client for `default_endpoint`, unless the configuration
    /// overrides the endpoint.
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> crate::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Starts a request for `path`, relative to the endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends the request, with `body` as its JSON payload, if present.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
    ) -> Result<O> {
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let request = builder.build().map_err(Error::ser)?;
        let span = tracing::debug_span!(
            "http_request",
            method = %request.method(),
            path = request.url().path(),
        );
        async move {
            let response = self.request_attempt::<O>(request).await;
            match &response {
                Ok(_) => tracing::debug!("request succeeded"),
                Err(e) => tracing::debug!(error = %e, "request failed"),
            }
            response
        }
        .instrument(span)
        .await
    }

    async fn make_credentials(config: &ClientConfig) -> crate::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        google_cloud_auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut request: reqwest::Request,
    ) -> Result<O> {
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;

        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        request.headers_mut().extend(auth_headers);

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The request body for methods without one.
#[derive(serde::Serialize)]
pub struct NoBody;

async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body, parsing it as JSON fails with EOF.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (_, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
