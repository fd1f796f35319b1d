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
use crate::model::{HmacKeyMetadata, UpdateHmacKeyRequest};
use gaxi::http::{Method, ReqwestClient};
use gaxi::path_parameter::{encode_path_segment, required};

/// Implements [HmacKeys](super::stub::HmacKeys) using the Cloud Storage JSON
/// API.
#[derive(Clone, Debug)]
pub struct HmacKeys {
    inner: ReqwestClient,
}

impl HmacKeys {
    pub async fn new(
        config: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::HmacKeys for HmacKeys {
    async fn update_hmac_key(&self, req: UpdateHmacKeyRequest) -> Result<HmacKeyMetadata> {
        let project = required(&req.project_id, "project_id")?;
        let access_id = required(&req.access_id, "access_id")?;
        let path = format!(
            "/storage/v1/projects/{}/hmacKeys/{}",
            encode_path_segment(project),
            encode_path_segment(access_id)
        );
        let builder = self.inner.builder(Method::PUT, path);
        self.inner.execute(builder, Some(req)).await
    }
}
