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

/// Implements a [HmacKeys](super::stub::HmacKeys) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct HmacKeys<T>
where
    T: super::stub::HmacKeys + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> HmacKeys<T>
where
    T: super::stub::HmacKeys + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::HmacKeys for HmacKeys<T>
where
    T: super::stub::HmacKeys + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn update_hmac_key(&self, req: UpdateHmacKeyRequest) -> Result<HmacKeyMetadata> {
        self.inner.update_hmac_key(req).await
    }
}
