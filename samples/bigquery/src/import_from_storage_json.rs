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

// [START bigquery_load_table_gcs_json]
use crate::load_job::run_load_job;
use gaxi::polling::PollingPolicy;
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{
    JobConfiguration, JobConfigurationLoad, TableFieldSchema, TableReference, TableSchema,
};

const SOURCE_URI: &str = "gs://cloud-samples-data/bigquery/us-states/us-states.json";

/// Loads a newline-delimited JSON file from Cloud Storage into a table.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
) -> anyhow::Result<()> {
    let schema = TableSchema::new().set_fields([
        TableFieldSchema::new().set_name("name").set_type("STRING"),
        TableFieldSchema::new()
            .set_name("post_abbr")
            .set_type("STRING"),
    ]);
    let configuration = JobConfiguration::new().set_load(
        JobConfigurationLoad::new()
            .set_source_uris([SOURCE_URI])
            .set_destination_table(
                TableReference::new()
                    .set_project_id(project_id)
                    .set_dataset_id(dataset_id)
                    .set_table_id(table_id),
            )
            .set_schema(schema)
            .set_source_format("NEWLINE_DELIMITED_JSON"),
    );
    let report = run_load_job(client, project_id, configuration, &PollingPolicy::default()).await?;
    println!("{report}");
    Ok(())
}
// [END bigquery_load_table_gcs_json]
