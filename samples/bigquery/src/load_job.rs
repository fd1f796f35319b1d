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

//! Runs a load job and waits for it to finish.
//!
//! Load jobs run in the background. After inserting the job the samples
//! re-fetch it until its state is `DONE`, waiting a bit longer after each
//! attempt. Once the job is done it may still have failed, in which case
//! `status.error_result` describes the problem.

use gaxi::polling::{PollingError, PollingPolicy, PollingStatus, poll_until_done_with_tokio};
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{Job, JobConfiguration, JobReference};

/// The outcome of a load job, as reported to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadReport {
    /// The job completed without errors.
    Succeeded,
    /// The job completed with an error, contains the error message.
    Failed(String),
    /// The job did not complete within the polling budget.
    TimedOut,
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => write!(f, "Data imported successfully"),
            Self::Failed(message) => write!(f, "Error running job: {message}"),
            Self::TimedOut => write!(f, "Job did not complete in time"),
        }
    }
}

/// Returns true once the service reports the job as `DONE`.
pub fn is_done(job: &Job) -> bool {
    job.status.as_ref().is_some_and(|s| s.state == "DONE")
}

/// Summarizes a completed job.
pub fn report(job: &Job) -> LoadReport {
    match job.status.as_ref().and_then(|s| s.error_result.as_ref()) {
        Some(e) => LoadReport::Failed(e.message.clone()),
        None => LoadReport::Succeeded,
    }
}

/// Inserts a job with `configuration` and waits until it is done.
///
/// The job id is generated locally. Each attempt prints a progress line and
/// re-fetches the job. Errors fetching the job stop the loop and are returned
/// to the caller. Running out of attempts is reported as
/// [LoadReport::TimedOut].
pub async fn run_load_job(
    client: &JobService,
    project_id: &str,
    configuration: JobConfiguration,
    policy: &PollingPolicy,
) -> gax::Result<LoadReport> {
    let job_id = uuid::Uuid::new_v4().to_string();
    let job = client
        .insert_job()
        .set_project_id(project_id)
        .set_job(
            Job::new()
                .set_job_reference(
                    JobReference::new()
                        .set_project_id(project_id)
                        .set_job_id(&job_id),
                )
                .set_configuration(configuration),
        )
        .send()
        .await?;
    tracing::info!(%job_id, "load job started");
    // The service assigns the location, use it to re-fetch the job.
    let location = job
        .job_reference
        .and_then(|r| r.location)
        .unwrap_or_default();

    let result = poll_until_done_with_tokio(policy, async |attempt: u32| {
        println!("Waiting for job to complete");
        tracing::debug!(attempt, %job_id, "checking load job");
        let response = client
            .get_job()
            .set_project_id(project_id)
            .set_job_id(&job_id)
            .set_location(&location)
            .send()
            .await;
        match response {
            Ok(job) if is_done(&job) => PollingStatus::Complete(job),
            Ok(_) => PollingStatus::Pending,
            Err(e) => PollingStatus::Failed(e),
        }
    })
    .await;

    match result {
        Ok(job) => Ok(report(&job)),
        Err(PollingError::Exhausted { attempts }) => {
            tracing::warn!(%job_id, attempts, "load job did not complete");
            Ok(LoadReport::TimedOut)
        }
        Err(PollingError::Failed(e)) => Err(e),
    }
}
