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

use std::sync::Arc;

/// Implements a client for the Cloud Translation API (Basic edition).
///
/// # Example
/// ```
/// # use translate_samples::client::Translation;
/// # async fn sample() -> anyhow::Result<()> {
/// use google_cloud_auth::credentials::api_key_credentials::Builder as ApiKey;
/// let client = Translation::builder()
///     .with_credentials(ApiKey::new("my-api-key").build())
///     .build()
///     .await?;
/// let detections = client.detect_language().set_text("Hello.").send().await?;
/// println!("{detections:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Translation` use the `with_*` methods in the type returned
/// by [builder()][Translation::builder]. The API accepts API keys as well as
/// the default credentials.
///
/// # Pooling and Cloning
///
/// `Translation` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Translation` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct Translation {
    inner: Arc<dyn super::stub::dynamic::Translation>,
}

impl Translation {
    /// Returns a builder for [Translation].
    pub fn builder() -> super::builder::translation::ClientBuilder {
        gaxi::client_builder::internal::new_builder(super::builder::translation::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Translation + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<Arc<dyn super::stub::dynamic::Translation>> {
        if gaxi::observability::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::Translation> {
        super::transport::Translation::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::Translation> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Translation::new)
    }

    /// Detects the language of some text.
    ///
    /// Returns the detections for all the texts in the request, most
    /// requests contain a single text.
    pub fn detect_language(&self) -> super::builder::translation::DetectLanguage {
        super::builder::translation::DetectLanguage::new(self.inner.clone())
    }
}
