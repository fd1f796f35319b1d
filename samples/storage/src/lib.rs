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

//! Samples for the Cloud Storage API.
//!
//! Bucket and object samples use [StorageControl] from `google-cloud-storage`.
//! The HMAC key API is not part of that client, so this crate includes a
//! minimal JSON client for it.
//!
//! [StorageControl]: google_cloud_storage::client::StorageControl

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums used by the HMAC keys client.
pub mod model;

/// Request builders.
pub mod builder;

/// The traits implemented by this client library.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

pub mod deactivate_hmac_key;
pub mod disable_default_event_based_hold;
pub mod get_bucket_default_acl;
pub mod list_objects_with_prefix;

mod tracing;
mod transport;

/// The default host used by the HMAC keys client.
const DEFAULT_HOST: &str = "https://storage.googleapis.com";

/// Formats the resource name of a bucket as expected by [StorageControl].
///
/// ```
/// # use storage_samples::bucket_name;
/// assert_eq!(bucket_name("my-bucket"), "projects/_/buckets/my-bucket");
/// ```
///
/// [StorageControl]: google_cloud_storage::client::StorageControl
pub fn bucket_name(bucket_id: &str) -> String {
    format!("projects/_/buckets/{bucket_id}")
}
