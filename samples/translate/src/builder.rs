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

pub mod translation {
    use crate::Result;
    use crate::model::{DetectLanguageRequest, Detection};
    use std::sync::Arc;

    /// A builder for [Translation][crate::client::Translation].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use translate_samples::*;
    /// # use builder::translation::ClientBuilder;
    /// # use client::Translation;
    /// let builder : ClientBuilder = Translation::builder();
    /// let client = builder
    ///     .with_endpoint("https://translation.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gaxi::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::Translation;
        pub struct Factory;
        impl gaxi::client_builder::internal::ClientFactory for Factory {
            type Client = Translation;
            async fn build(
                self,
                config: gaxi::client_builder::internal::ClientConfig,
            ) -> gaxi::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Translation] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::Translation>,
        request: R,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::Translation>) -> Self {
            Self {
                stub,
                request: R::default(),
            }
        }
    }

    /// The request builder for [Translation::detect_language][crate::client::Translation::detect_language] calls.
    #[derive(Clone, Debug)]
    pub struct DetectLanguage(RequestBuilder<DetectLanguageRequest>);

    impl DetectLanguage {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::Translation>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<DetectLanguageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Vec<Detection>> {
            (*self.0.stub).detect_language(self.0.request).await
        }

        /// Sets a single text to examine, replacing any prior values.
        pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.q = vec![v.into()];
            self
        }

        /// Sets the value of [q][DetectLanguageRequest::q].
        ///
        /// This is a **required** field for requests.
        pub fn set_q<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.q = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }
}
