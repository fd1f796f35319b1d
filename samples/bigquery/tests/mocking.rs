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

//! Verify the load job samples using a mocked client.

#[cfg(test)]
mod tests {
    use bigquery::client::JobService;
    use bigquery::model::{
        ErrorProto, GetJobRequest, InsertJobRequest, Job, JobConfiguration, JobConfigurationLoad,
        JobStatus, TableFieldSchema, TableReference, TableSchema,
    };
    use bigquery_samples::load_job::{LoadReport, run_load_job};
    use bigquery_samples::{import_from_storage_csv_truncate, import_from_storage_json};
    use gax::Result;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gaxi::polling::PollingPolicy;
    use google_cloud_bigquery_v2 as bigquery;

    mockall::mock! {
        #[derive(Debug)]
        JobService {}
        impl bigquery::stub::JobService for JobService {
            async fn insert_job(&self, req: InsertJobRequest, _options: RequestOptions) -> Result<Response<Job>>;
            async fn get_job(&self, req: GetJobRequest, _options: RequestOptions) -> Result<Response<Job>>;
        }
    }

    fn inserted(req: InsertJobRequest, _options: RequestOptions) -> Result<Response<Job>> {
        let reference = req
            .job
            .and_then(|j| j.job_reference)
            .unwrap_or_default()
            .set_location("US");
        let job = Job::new()
            .set_job_reference(reference)
            .set_status(JobStatus::new().set_state("PENDING"));
        Ok(Response::from(job))
    }

    fn with_state(state: &str) -> Result<Response<Job>> {
        Ok(Response::from(
            Job::new().set_status(JobStatus::new().set_state(state)),
        ))
    }

    fn load_configuration(req: &InsertJobRequest) -> Option<&JobConfigurationLoad> {
        req.job
            .as_ref()
            .and_then(|j| j.configuration.as_ref())
            .and_then(|c| c.load.as_ref())
    }

    fn destination() -> TableReference {
        TableReference::new()
            .set_project_id("test-project")
            .set_dataset_id("test-dataset")
            .set_table_id("test-table")
    }

    #[tokio::test(start_paused = true)]
    async fn load_job_succeeds_after_polling() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_insert_job()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                let reference = r.job.as_ref().and_then(|j| j.job_reference.as_ref());
                r.project_id == "test-project"
                    && reference.is_some_and(|j| {
                        j.project_id == "test-project" && !j.job_id.is_empty()
                    })
            })
            .returning(inserted);
        mock.expect_get_job()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| with_state("RUNNING"));
        mock.expect_get_job()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.project_id == "test-project" && r.location == "US" && !r.job_id.is_empty()
            })
            .returning(|_, _| with_state("DONE"));

        let client = JobService::from_stub(mock);
        let report = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::default(),
        )
        .await?;
        assert_eq!(report, LoadReport::Succeeded);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn load_job_reports_job_error() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_insert_job().once().returning(inserted);
        mock.expect_get_job().once().returning(|_, _| {
            let status = JobStatus::new()
                .set_state("DONE")
                .set_error_result(ErrorProto::new().set_message("invalid CSV header"));
            Ok(Response::from(Job::new().set_status(status)))
        });

        let client = JobService::from_stub(mock);
        let report = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::default(),
        )
        .await?;
        assert_eq!(report, LoadReport::Failed("invalid CSV header".to_string()));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn load_job_times_out() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_insert_job().once().returning(inserted);
        mock.expect_get_job()
            .times(3)
            .returning(|_, _| with_state("RUNNING"));

        let client = JobService::from_stub(mock);
        let report = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::new(3),
        )
        .await?;
        assert_eq!(report, LoadReport::TimedOut);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn load_job_default_budget() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_insert_job().once().returning(inserted);
        mock.expect_get_job()
            .times(11)
            .returning(|_, _| with_state("RUNNING"));

        let client = JobService::from_stub(mock);
        let report = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::default(),
        )
        .await?;
        assert_eq!(report, LoadReport::TimedOut);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn load_job_get_error_stops_polling() {
        let mut mock = MockJobService::new();
        mock.expect_insert_job().once().returning(inserted);
        mock.expect_get_job().once().returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::PermissionDenied)
                    .set_message("uh-oh"),
            ))
        });

        let client = JobService::from_stub(mock);
        let err = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[tokio::test]
    async fn load_job_insert_error() {
        let mut mock = MockJobService::new();
        mock.expect_insert_job().once().returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("dataset not found"),
            ))
        });
        mock.expect_get_job().never();

        let client = JobService::from_stub(mock);
        let err = run_load_job(
            &client,
            "test-project",
            JobConfiguration::new(),
            &PollingPolicy::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn csv_truncate_configuration() -> anyhow::Result<()> {
        let want = JobConfigurationLoad::new()
            .set_source_uris(["gs://cloud-samples-data/bigquery/us-states/us-states.csv"])
            .set_destination_table(destination())
            .set_source_format("CSV")
            .set_skip_leading_rows(1)
            .set_write_disposition("WRITE_TRUNCATE");
        let mut mock = MockJobService::new();
        mock.expect_insert_job()
            .once()
            .withf(move |r, _| load_configuration(r) == Some(&want))
            .returning(inserted);
        mock.expect_get_job()
            .once()
            .returning(|_, _| with_state("DONE"));

        let client = JobService::from_stub(mock);
        import_from_storage_csv_truncate::sample(
            &client,
            "test-project",
            "test-dataset",
            "test-table",
        )
        .await?;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn json_configuration() -> anyhow::Result<()> {
        let want = JobConfigurationLoad::new()
            .set_source_uris(["gs://cloud-samples-data/bigquery/us-states/us-states.json"])
            .set_destination_table(destination())
            .set_schema(TableSchema::new().set_fields([
                TableFieldSchema::new().set_name("name").set_type("STRING"),
                TableFieldSchema::new()
                    .set_name("post_abbr")
                    .set_type("STRING"),
            ]))
            .set_source_format("NEWLINE_DELIMITED_JSON");
        let mut mock = MockJobService::new();
        mock.expect_insert_job()
            .once()
            .withf(move |r, _| load_configuration(r) == Some(&want))
            .returning(inserted);
        mock.expect_get_job()
            .once()
            .returning(|_, _| with_state("DONE"));

        let client = JobService::from_stub(mock);
        import_from_storage_json::sample(&client, "test-project", "test-dataset", "test-table")
            .await?;
        Ok(())
    }
}
