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

//! Run the BigQuery samples from the command line.

use bigquery_samples::{
    DEFAULT_TABLE_ID, import_from_storage_csv_truncate, import_from_storage_json,
};
use clap::{Args, Parser, Subcommand};
use google_cloud_bigquery_v2::client::JobService;

/// Load data from Cloud Storage into BigQuery.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Replace the contents of a table with a CSV file.
    ImportFromStorageCsvTruncate(Destination),
    /// Load a newline-delimited JSON file into a table.
    ImportFromStorageJson(Destination),
}

/// The destination table.
#[derive(Clone, Debug, Args)]
struct Destination {
    /// The project running the load job and owning the dataset.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    /// The dataset containing the destination table.
    #[arg(long)]
    dataset_id: String,

    /// The destination table, created if needed.
    #[arg(long, default_value = DEFAULT_TABLE_ID)]
    table_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gaxi::observability::enable_tracing()?;
    tracing::debug!("Configuration: {cli:?}");

    let client = JobService::builder().build().await?;
    match cli.command {
        Command::ImportFromStorageCsvTruncate(d) => {
            import_from_storage_csv_truncate::sample(
                &client,
                &d.project_id,
                &d.dataset_id,
                &d.table_id,
            )
            .await
        }
        Command::ImportFromStorageJson(d) => {
            import_from_storage_json::sample(&client, &d.project_id, &d.dataset_id, &d.table_id)
                .await
        }
    }
}
