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

//! The HMAC key resources of the Cloud Storage JSON API.
//!
//! Field names follow the JSON representation of the REST API. Request
//! messages serialize only the fields sent in the request body, fields that
//! are part of the request path are skipped.

use serde::{Deserialize, Serialize};

/// The values for [HmacKeyMetadata::state].
pub mod hmac_key_state {
    pub const ACTIVE: &str = "ACTIVE";
    pub const INACTIVE: &str = "INACTIVE";
    pub const DELETED: &str = "DELETED";
}

/// Metadata of an HMAC key.
///
/// The key secret is only returned when the key is created, and it is not
/// modeled here.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HmacKeyMetadata {
    /// The ID of the HMAC key, including the project and access id.
    pub id: String,
    pub access_id: String,
    pub project_id: String,

    /// The email of the service account the key authenticates as.
    pub service_account_email: String,

    /// One of the [hmac_key_state] values.
    pub state: String,

    pub time_created: String,
    pub updated: String,
    pub etag: String,
}

impl HmacKeyMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [access_id][HmacKeyMetadata::access_id].
    pub fn set_access_id<T: Into<String>>(mut self, v: T) -> Self {
        self.access_id = v.into();
        self
    }

    /// Sets the value of [state][HmacKeyMetadata::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }
}

/// The request message for
/// [HmacKeys::update_hmac_key][crate::client::HmacKeys::update_hmac_key].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateHmacKeyRequest {
    #[serde(skip)]
    pub project_id: String,

    #[serde(skip)]
    pub access_id: String,

    /// The new state, one of the [hmac_key_state] values.
    pub state: String,
}

impl UpdateHmacKeyRequest {
    pub fn new() -> Self {
        Self::default()
    }
}
