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

/// Implements a [Firestore](super::stub::Firestore) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Firestore<T>
where
    T: super::stub::Firestore + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Firestore<T>
where
    T: super::stub::Firestore + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Firestore for Firestore<T>
where
    T: super::stub::Firestore + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn run_query(&self, req: RunQueryRequest) -> Result<Vec<RunQueryResponse>> {
        self.inner.run_query(req).await
    }
}
