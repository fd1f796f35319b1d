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

// [START translate_detect_language]
use crate::client::Translation;

#[derive(thiserror::Error, Debug)]
#[error("the service returned no detections for the text")]
pub struct NoDetections;

pub async fn sample(client: &Translation, text: &str) -> anyhow::Result<()> {
    let detections = client.detect_language().set_text(text).send().await?;
    let Some(detection) = detections.into_iter().next() else {
        return Err(gax::error::Error::binding(NoDetections).into());
    };
    println!("Language code: {}", detection.language);
    println!("Confidence: {}", detection.confidence);
    Ok(())
}
// [END translate_detect_language]
