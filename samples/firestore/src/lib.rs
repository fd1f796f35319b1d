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

//! Samples for the Cloud Firestore API.
//!
//! The crate includes a minimal client for the Firestore `runQuery` RPC.
//! Only the fields used by the samples are modeled.

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// The traits implemented by this client library.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Resource names for collections.
pub mod collection;

/// Starts a query at a field value using a cursor.
pub mod query_cursor_start_at_field_value_single;

mod tracing;
mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://firestore.googleapis.com";

/// The collection used by the samples.
pub const DEFAULT_COLLECTION: &str = "samples/rust/cities";
