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

pub mod hmac_keys {
    use crate::Result;
    use crate::model::{HmacKeyMetadata, UpdateHmacKeyRequest};
    use std::sync::Arc;

    /// A builder for [HmacKeys][crate::client::HmacKeys].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use storage_samples::*;
    /// # use builder::hmac_keys::ClientBuilder;
    /// # use client::HmacKeys;
    /// let builder : ClientBuilder = HmacKeys::builder();
    /// let client = builder
    ///     .with_endpoint("https://storage.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gaxi::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::HmacKeys;
        pub struct Factory;
        impl gaxi::client_builder::internal::ClientFactory for Factory {
            type Client = HmacKeys;
            async fn build(
                self,
                config: gaxi::client_builder::internal::ClientConfig,
            ) -> gaxi::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::HmacKeys] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::HmacKeys>,
        request: R,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::HmacKeys>) -> Self {
            Self {
                stub,
                request: R::default(),
            }
        }
    }

    /// The request builder for [HmacKeys::update_hmac_key][crate::client::HmacKeys::update_hmac_key] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateHmacKey(RequestBuilder<UpdateHmacKeyRequest>);

    impl UpdateHmacKey {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::HmacKeys>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<UpdateHmacKeyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<HmacKeyMetadata> {
            (*self.0.stub).update_hmac_key(self.0.request).await
        }

        /// Sets the value of [project_id][UpdateHmacKeyRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [access_id][UpdateHmacKeyRequest::access_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_access_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.access_id = v.into();
            self
        }

        /// Sets the value of [state][UpdateHmacKeyRequest::state].
        pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.state = v.into();
            self
        }
    }
}
