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

//! Samples for the Video Stitcher API.
//!
//! The samples use the
//! [VideoStitcherService][google_cloud_video_stitcher_v1::client::VideoStitcherService]
//! client. Deleting a slate starts a long-running operation, the samples wait
//! for it with the bounded polling loop from `gaxi::polling`.

/// Deletes a slate and waits for the deletion to finish.
pub mod delete_slate;

/// Formats the resource name of a slate.
///
/// # Example
/// ```
/// # use videostitcher_samples::slate_name;
/// assert_eq!(
///     slate_name("my-project", "us-central1", "my-slate"),
///     "projects/my-project/locations/us-central1/slates/my-slate");
/// ```
pub fn slate_name(project_id: &str, location: &str, slate_id: &str) -> String {
    format!("projects/{project_id}/locations/{location}/slates/{slate_id}")
}
