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

//! Implementation details for the hand-written sample clients.
//!
//! Most samples use the published Google Cloud client libraries. A few
//! operations have no published client: Firestore queries, Cloud Storage HMAC
//! keys, and Cloud Translation v2 with API keys. The samples call those
//! through small REST bindings built on the helpers in this crate. Errors are
//! reported with the [gax::error::Error] type, the same type returned by the
//! published clients.
//!
//! This crate also contains the bounded polling loop used to wait for
//! BigQuery jobs and long-running operations.

/// Implements truncated exponential backoff, used between polling attempts.
pub mod exponential_backoff;

/// Waits for long-running operations with a bounded number of attempts.
pub mod polling;

/// Provide types for client construction.
pub mod client_builder;

/// Helpers to build the request path from request fields.
pub mod path_parameter;

/// The authenticated HTTP transport shared by the hand-written clients.
pub mod http;

/// Logging and tracing configuration.
pub mod observability;

/// The default implementation for stub methods that a client does not use.
pub mod unimplemented;
