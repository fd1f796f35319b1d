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

//! Run the Cloud Storage samples from the command line.

use clap::{Args, Parser, Subcommand};
use google_cloud_storage::client::StorageControl;
use storage_samples::client::HmacKeys;
use storage_samples::{
    deactivate_hmac_key, disable_default_event_based_hold, get_bucket_default_acl,
    list_objects_with_prefix,
};

/// Manage Cloud Storage buckets, objects, and HMAC keys.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Deactivate an HMAC key.
    DeactivateHmacKey(HmacKey),
    /// Disable the default event-based hold on a bucket.
    DisableDefaultEventBasedHold(Bucket),
    /// Print the default object ACL of a bucket.
    GetBucketDefaultAcl(Bucket),
    /// List the objects in a bucket whose names start with a prefix.
    ListObjectsWithPrefix(Prefix),
}

#[derive(Clone, Debug, Args)]
struct HmacKey {
    /// The project owning the HMAC key.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    /// The access id of the HMAC key.
    access_id: String,
}

#[derive(Clone, Debug, Args)]
struct Bucket {
    /// The bucket name, without any `gs://` prefix.
    bucket: String,
}

#[derive(Clone, Debug, Args)]
struct Prefix {
    /// The bucket name, without any `gs://` prefix.
    bucket: String,

    /// Only objects starting with this prefix are listed.
    prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gaxi::observability::enable_tracing()?;
    tracing::debug!("Configuration: {cli:?}");

    match cli.command {
        Command::DeactivateHmacKey(k) => {
            let client = HmacKeys::builder().build().await?;
            deactivate_hmac_key::sample(&client, &k.project_id, &k.access_id).await
        }
        Command::DisableDefaultEventBasedHold(b) => {
            let client = StorageControl::builder().build().await?;
            disable_default_event_based_hold::sample(&client, &b.bucket).await
        }
        Command::GetBucketDefaultAcl(b) => {
            let client = StorageControl::builder().build().await?;
            get_bucket_default_acl::sample(&client, &b.bucket).await
        }
        Command::ListObjectsWithPrefix(p) => {
            let client = StorageControl::builder().build().await?;
            list_objects_with_prefix::sample(&client, &p.bucket, &p.prefix).await
        }
    }
}
