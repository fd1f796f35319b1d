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

//! Traits to mock the clients in this crate.
//!
//! Application developers may need to mock the clients in this crate to test
//! their own code. The traits defined here are the seams for those mocks.

use crate::Result;
use crate::model::{DetectLanguageRequest, Detection};
use gaxi::unimplemented::unimplemented_stub;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::Translation].
///
/// The trait provides a default implementation of each method, returning an
/// error. Mocks only need to implement the methods used by the code under
/// test.
pub trait Translation: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Translation::detect_language].
    fn detect_language(
        &self,
        _req: DetectLanguageRequest,
    ) -> impl std::future::Future<Output = Result<Vec<Detection>>> + Send {
        unimplemented_stub::<Vec<Detection>>()
    }
}
