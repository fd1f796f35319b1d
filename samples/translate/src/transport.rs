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

use crate::Result;
use crate::model::{DetectLanguageRequest, DetectLanguageResponse, Detection};
use gaxi::http::{Method, ReqwestClient};

/// Implements [Translation](super::stub::Translation) using the Cloud
/// Translation v2 REST API.
#[derive(Clone, Debug)]
pub struct Translation {
    inner: ReqwestClient,
}

impl Translation {
    pub async fn new(
        config: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Translation for Translation {
    async fn detect_language(&self, req: DetectLanguageRequest) -> Result<Vec<Detection>> {
        if req.q.is_empty() {
            return Err(gaxi::path_parameter::missing("q"));
        }
        let builder = self
            .inner
            .builder(Method::POST, "/language/translate/v2/detect".to_string());
        let response: DetectLanguageResponse = self.inner.execute(builder, Some(req)).await?;
        Ok(response.into_detections())
    }
}
