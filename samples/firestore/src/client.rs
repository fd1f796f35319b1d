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

/// Implements a client for the Cloud Firestore API, limited to queries.
///
/// # Example
/// ```
/// # use firestore_samples::client::Firestore;
/// # use firestore_samples::collection::CollectionReference;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Firestore::builder().build().await?;
/// let cities = CollectionReference::parse("my-project", "cities")?;
/// let results = client
///     .run_query()
///     .set_parent(cities.parent())
///     .set_structured_query(cities.query().set_limit(10))
///     .send()
///     .await?;
/// for document in results.into_iter().filter_map(|r| r.document) {
///     println!("{}", document.id());
/// }
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Firestore` use the `with_*` methods in the type returned
/// by [builder()][Firestore::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `Firestore` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Firestore` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct Firestore {
    inner: Arc<dyn super::stub::dynamic::Firestore>,
}

impl Firestore {
    /// Returns a builder for [Firestore].
    pub fn builder() -> super::builder::firestore::ClientBuilder {
        gaxi::client_builder::internal::new_builder(super::builder::firestore::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Firestore + 'static,
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
    ) -> gaxi::client_builder::Result<Arc<dyn super::stub::dynamic::Firestore>> {
        if gaxi::observability::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::Firestore> {
        super::transport::Firestore::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<impl super::stub::Firestore> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Firestore::new)
    }

    /// Runs a query.
    ///
    /// The service streams the results, this client collects them before
    /// returning. Some results carry no document, only a read time.
    pub fn run_query(&self) -> super::builder::firestore::RunQuery {
        super::builder::firestore::RunQuery::new(self.inner.clone())
    }
}
