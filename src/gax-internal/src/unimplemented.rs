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

//! Default implementations for the stub traits.

/// The error returned by stub methods without an implementation.
#[derive(thiserror::Error, Debug)]
#[error("this method is not implemented by the stub")]
pub struct Unimplemented;

/// Returns an error for methods a stub does not implement.
///
/// The `stub` traits in each sample client provide default implementations
/// calling this function, so mocks and decorators only implement the methods
/// they need.
pub fn unimplemented_stub<T: Send>() -> impl Future<Output = gax::Result<T>> + Send {
    std::future::ready(Err(gax::error::Error::binding(Unimplemented)))
}
