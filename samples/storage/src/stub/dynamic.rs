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

/// A dyn-compatible version of [super::HmacKeys].
#[async_trait::async_trait]
pub trait HmacKeys: std::fmt::Debug + Send + Sync {
    async fn update_hmac_key(&self, req: UpdateHmacKeyRequest) -> Result<HmacKeyMetadata>;
}

/// All implementations of [super::HmacKeys] also implement [HmacKeys].
#[async_trait::async_trait]
impl<T: super::HmacKeys> HmacKeys for T {
    async fn update_hmac_key(&self, req: UpdateHmacKeyRequest) -> Result<HmacKeyMetadata> {
        T::update_hmac_key(self, req).await
    }
}
