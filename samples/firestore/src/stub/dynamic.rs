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

/// A dyn-compatible version of [super::Firestore].
#[async_trait::async_trait]
pub trait Firestore: std::fmt::Debug + Send + Sync {
    async fn run_query(&self, req: RunQueryRequest) -> Result<Vec<RunQueryResponse>>;
}

/// All implementations of [super::Firestore] also implement [Firestore].
#[async_trait::async_trait]
impl<T: super::Firestore> Firestore for T {
    async fn run_query(&self, req: RunQueryRequest) -> Result<Vec<RunQueryResponse>> {
        T::run_query(self, req).await
    }
}
