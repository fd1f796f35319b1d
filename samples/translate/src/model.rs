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

//! The subset of the Cloud Translation v2 resources used by the samples.

use serde::{Deserialize, Serialize};

/// The request message for
/// [Translation::detect_language][crate::client::Translation::detect_language].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct DetectLanguageRequest {
    /// The texts to examine. The service returns one list of detections for
    /// each text.
    pub q: Vec<String>,
}

impl DetectLanguageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [q][DetectLanguageRequest::q].
    pub fn set_q<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.q = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A language detected in some text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Detection {
    /// The BCP-47 code of the detected language, for example `en`.
    pub language: String,

    /// The confidence of the detection, between 0 and 1.
    pub confidence: f64,

    /// Deprecated by the service, always `false`.
    pub is_reliable: bool,
}

impl Detection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language][Detection::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = v.into();
        self
    }

    /// Sets the value of [confidence][Detection::confidence].
    pub fn set_confidence(mut self, v: f64) -> Self {
        self.confidence = v;
        self
    }
}

/// The response for the `detect` RPC, as sent by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DetectLanguageResponse {
    pub data: DetectionsList,
}

/// The detections for each text in the request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DetectionsList {
    pub detections: Vec<Vec<Detection>>,
}

impl DetectLanguageResponse {
    /// Returns all the detections, in the order of the request texts.
    pub fn into_detections(self) -> Vec<Detection> {
        self.data.detections.into_iter().flatten().collect()
    }
}
