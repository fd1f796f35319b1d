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

use crate::slate_name;
use gaxi::polling::{PollingError, PollingPolicy, PollingStatus, poll_until_done_with_tokio};
use google_cloud_longrunning::model::Operation;
use google_cloud_longrunning::model::operation::Result as OperationResult;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;

/// The outcome of a slate deletion.
#[derive(Clone, Debug, PartialEq)]
pub enum Deletion {
    /// The operation completed without errors.
    Deleted,
    /// The operation completed with an error, contains the error message.
    Failed(String),
    /// The operation did not complete within the polling budget.
    TimedOut,
}

/// Summarizes a completed operation.
pub fn outcome(operation: &Operation) -> Deletion {
    match &operation.result {
        Some(OperationResult::Error(status)) => Deletion::Failed(status.message.clone()),
        _ => Deletion::Deleted,
    }
}

/// Deletes the slate called `name` and waits until the operation is done.
///
/// Errors starting the deletion or fetching the operation are returned to
/// the caller. Running out of attempts is reported as [Deletion::TimedOut].
pub async fn delete_and_wait(
    client: &VideoStitcherService,
    name: &str,
    policy: &PollingPolicy,
) -> gax::Result<Deletion> {
    let operation = client.delete_slate().set_name(name).send().await?;
    if operation.done {
        return Ok(outcome(&operation));
    }
    let operation_name = operation.name;
    tracing::info!(%operation_name, "slate deletion started");

    let result = poll_until_done_with_tokio(policy, async |attempt: u32| {
        tracing::debug!(attempt, %operation_name, "checking slate deletion");
        match client.get_operation().set_name(&operation_name).send().await {
            Ok(op) if op.done => PollingStatus::Complete(op),
            Ok(_) => PollingStatus::Pending,
            Err(e) => PollingStatus::Failed(e),
        }
    })
    .await;

    match result {
        Ok(op) => Ok(outcome(&op)),
        Err(PollingError::Exhausted { attempts }) => {
            tracing::warn!(%operation_name, attempts, "slate deletion did not complete");
            Ok(Deletion::TimedOut)
        }
        Err(PollingError::Failed(e)) => Err(e),
    }
}

// [START videostitcher_delete_slate]
pub async fn sample(
    client: &VideoStitcherService,
    project_id: &str,
    location: &str,
    slate_id: &str,
) -> anyhow::Result<()> {
    let name = slate_name(project_id, location, slate_id);
    match delete_and_wait(client, &name, &PollingPolicy::default()).await? {
        Deletion::Deleted => println!("Deleted slate {slate_id}"),
        Deletion::Failed(message) => println!("Error deleting slate: {message}"),
        Deletion::TimedOut => println!("Slate deletion did not complete in time"),
    }
    Ok(())
}
// [END videostitcher_delete_slate]
