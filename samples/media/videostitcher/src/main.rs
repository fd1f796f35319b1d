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

//! Run the Video Stitcher samples from the command line.

use clap::{Args, Parser, Subcommand};
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use videostitcher_samples::delete_slate;

/// Manage Video Stitcher slates.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Delete a slate and wait for the deletion to finish.
    DeleteSlate(Slate),
}

#[derive(Clone, Debug, Args)]
struct Slate {
    /// The project containing the slate.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    /// The location of the slate, for example `us-central1`.
    #[arg(long)]
    location: String,

    /// The slate id.
    #[arg(long)]
    slate_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gaxi::observability::enable_tracing()?;
    tracing::debug!("Configuration: {cli:?}");

    let client = VideoStitcherService::builder().build().await?;
    match cli.command {
        Command::DeleteSlate(s) => {
            delete_slate::sample(&client, &s.project_id, &s.location, &s.slate_id).await
        }
    }
}
