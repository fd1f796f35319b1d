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
use crate::model::{DetectLanguageRequest, Detection};

/// Implements a [Translation](super::stub::Translation) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Translation<T>
where
    T: super::stub::Translation + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Translation<T>
where
    T: super::stub::Translation + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Translation for Translation<T>
where
    T: super::stub::Translation + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn detect_language(&self, req: DetectLanguageRequest) -> Result<Vec<Detection>> {
        self.inner.detect_language(req).await
    }
}
