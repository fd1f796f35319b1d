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
use crate::model::{RunQueryRequest, RunQueryResponse};
use gaxi::http::{Method, ReqwestClient};
use gaxi::path_parameter::{encode_resource_name, required};

/// Implements [Firestore](super::stub::Firestore) using the Firestore v1
/// REST API.
#[derive(Clone, Debug)]
pub struct Firestore {
    inner: ReqwestClient,
}

impl Firestore {
    pub async fn new(
        config: gaxi::client_builder::internal::ClientConfig,
    ) -> gaxi::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Firestore for Firestore {
    async fn run_query(&self, req: RunQueryRequest) -> Result<Vec<RunQueryResponse>> {
        let parent = required(&req.parent, "parent")?;
        let path = format!("/v1/{}:runQuery", encode_resource_name(parent));
        let builder = self.inner.builder(Method::POST, path);
        // The response is a JSON array with one element per result.
        self.inner.execute(builder, Some(req)).await
    }
}
