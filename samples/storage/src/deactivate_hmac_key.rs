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

// [START storage_deactivate_hmac_key]
use crate::client::HmacKeys;
use crate::model::hmac_key_state;

pub async fn sample(client: &HmacKeys, project_id: &str, access_id: &str) -> anyhow::Result<()> {
    let metadata = client
        .update_hmac_key()
        .set_project_id(project_id)
        .set_access_id(access_id)
        .set_state(hmac_key_state::INACTIVE)
        .send()
        .await?;
    println!("The HMAC key is now inactive.");
    println!("HMAC key Metadata: {metadata:?}");
    Ok(())
}
// [END storage_deactivate_hmac_key]
