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

//! Run the Cloud Translation samples from the command line.

use clap::{Args, Parser, Subcommand};
use google_cloud_auth::credentials::api_key_credentials::Builder as ApiKey;
use translate_samples::client::Translation;
use translate_samples::detect_language;

/// Detect languages with the Cloud Translation API.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Detect which language text was written in.
    Detect(Detect),
}

#[derive(Clone, Debug, Args)]
struct Detect {
    /// Your API key.
    #[arg(short = 'k', long)]
    api_key: String,

    /// The text to examine.
    text: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gaxi::observability::enable_tracing()?;

    match cli.command {
        Command::Detect(d) => {
            // The configuration includes the API key, only log the text.
            tracing::debug!("Detecting the language of {:?}", d.text);
            let client = Translation::builder()
                .with_credentials(ApiKey::new(d.api_key).build())
                .build()
                .await?;
            detect_language::sample(&client, &d.text).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test_case(&["translate-samples", "detect", "-k", "my-key", "Hello."]; "short")]
    #[test_case(&["translate-samples", "detect", "--api-key", "my-key", "Hello."]; "long")]
    #[test_case(&["translate-samples", "detect", "Hello.", "--api-key=my-key"]; "trailing")]
    fn parse(args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        let Command::Detect(d) = cli.command;
        assert_eq!(d.api_key, "my-key");
        assert_eq!(d.text, "Hello.");
        Ok(())
    }

    #[test]
    fn api_key_is_required() {
        let got = Cli::try_parse_from(["translate-samples", "detect", "Hello."]);
        assert!(got.is_err(), "{got:?}");
    }
}
