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

//! Run the Firestore samples from the command line.

use clap::{Args, Parser, Subcommand};
use firestore_samples::client::Firestore;
use firestore_samples::query_cursor_start_at_field_value_single;

/// Query Firestore collections.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Start a query at a population of one million.
    QueryCursorStartAtFieldValueSingle(Project),
}

#[derive(Clone, Debug, Args)]
struct Project {
    /// The project containing the default Firestore database.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gaxi::observability::enable_tracing()?;
    tracing::debug!("Configuration: {cli:?}");

    let client = Firestore::builder().build().await?;
    match cli.command {
        Command::QueryCursorStartAtFieldValueSingle(p) => {
            query_cursor_start_at_field_value_single::sample(&client, &p.project_id).await
        }
    }
}
