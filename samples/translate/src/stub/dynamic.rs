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

/// A dyn-compatible version of [super::Translation].
#[async_trait::async_trait]
pub trait Translation: std::fmt::Debug + Send + Sync {
    async fn detect_language(&self, req: DetectLanguageRequest) -> Result<Vec<Detection>>;
}

/// All implementations of [super::Translation] also implement [Translation].
#[async_trait::async_trait]
impl<T: super::Translation> Translation for T {
    async fn detect_language(&self, req: DetectLanguageRequest) -> Result<Vec<Detection>> {
        T::detect_language(self, req).await
    }
}
