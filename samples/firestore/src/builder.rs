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

pub mod firestore {
    use crate::Result;
    use crate::model::{RunQueryRequest, RunQueryResponse, StructuredQuery};
    use std::sync::Arc;

    /// A builder for [Firestore][crate::client::Firestore].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use firestore_samples::*;
    /// # use builder::firestore::ClientBuilder;
    /// # use client::Firestore;
    /// let builder : ClientBuilder = Firestore::builder();
    /// let client = builder
    ///     .with_endpoint("https://firestore.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gaxi::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::Firestore;
        pub struct Factory;
        impl gaxi::client_builder::internal::ClientFactory for Factory {
            type Client = Firestore;
            async fn build(
                self,
                config: gaxi::client_builder::internal::ClientConfig,
            ) -> gaxi::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Firestore] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::Firestore>,
        request: R,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::Firestore>) -> Self {
            Self {
                stub,
                request: R::default(),
            }
        }
    }

    /// The request builder for [Firestore::run_query][crate::client::Firestore::run_query] calls.
    #[derive(Clone, Debug)]
    pub struct RunQuery(RequestBuilder<RunQueryRequest>);

    impl RunQuery {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::Firestore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<RunQueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Vec<RunQueryResponse>> {
            (*self.0.stub).run_query(self.0.request).await
        }

        /// Sets the value of [parent][RunQueryRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [structured_query][RunQueryRequest::structured_query].
        pub fn set_structured_query<T: Into<StructuredQuery>>(mut self, v: T) -> Self {
            self.0.request.structured_query = Some(v.into());
            self
        }
    }
}
