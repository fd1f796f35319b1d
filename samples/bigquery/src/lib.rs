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

//! Samples for the BigQuery API.
//!
//! Each sample loads a public file from Cloud Storage into a BigQuery table
//! and waits for the load job to finish. The samples use the
//! [JobService][google_cloud_bigquery_v2::client::JobService] client to start
//! the job, and the bounded polling loop in [load_job] to wait for it.

/// Waits for load jobs.
pub mod load_job;

/// Loads a CSV file, replacing the table contents.
pub mod import_from_storage_csv_truncate;

/// Loads a newline-delimited JSON file with an explicit schema.
pub mod import_from_storage_json;

/// The table used by the samples when none is specified.
pub const DEFAULT_TABLE_ID: &str = "us_states";
