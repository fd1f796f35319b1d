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

/// Implements a client for the HMAC keys resource of the Cloud Storage JSON
/// API.
///
/// # Example
/// ```
/// # use storage_samples::client::HmacKeys;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = HmacKeys::builder().build().await?;
/// let metadata = client
///     .update_hmac_key()
///     .set_project_id("my-project")
///     .set_access_id("GOOG1EXAMPLE")
///     .set_state("INACTIVE")
///     .send()
///     .await?;
/// println!("{metadata:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `HmacKeys` use the `with_*` methods in the type returned
/// by [builder()][HmacKeys::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `HmacKeys` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `HmacKeys` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct HmacKeys {
    inner: Arc<dyn super::stub::dynamic::HmacKeys>,
}

impl HmacKeys {
    /// Returns a builder for [HmacKeys].
    pub fn builder() -> super::builder::hmac_keys::ClientBuilder {
        gaxi::client_builder::internal::new_builder(super::builder::hmac_keys::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::HmacKeys + 'static,
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
    ) -> gaxi::client_builder::Result<Arc<dyn super::stub::dynamic::HmacKeys>> {
        if gaxi::observability::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::HmacKeys> {
        super::transport::HmacKeys::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::HmacKeys> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::HmacKeys::new)
    }

    /// Updates the state of an HMAC key.
    ///
    /// A key must be `INACTIVE` before it can be deleted.
    pub fn update_hmac_key(&self) -> super::builder::hmac_keys::UpdateHmacKey {
        super::builder::hmac_keys::UpdateHmacKey::new(self.inner.clone())
    }
}
