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

//! Verify the Cloud Storage samples using mocked clients.

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_storage as gcs;
    use google_cloud_storage::client::StorageControl;
    use storage_samples::client::HmacKeys;
    use storage_samples::model::{HmacKeyMetadata, UpdateHmacKeyRequest, hmac_key_state};
    use storage_samples::{
        Result, deactivate_hmac_key, disable_default_event_based_hold, get_bucket_default_acl,
        list_objects_with_prefix,
    };

    mockall::mock! {
        #[derive(Debug)]
        HmacKeys {}
        impl storage_samples::stub::HmacKeys for HmacKeys {
            async fn update_hmac_key(&self, req: UpdateHmacKeyRequest) -> Result<HmacKeyMetadata>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        StorageControl {}
        impl gcs::stub::StorageControl for StorageControl {
            async fn get_bucket(&self, req: gcs::model::GetBucketRequest, _options: RequestOptions) -> Result<Response<gcs::model::Bucket>>;
            async fn update_bucket(&self, req: gcs::model::UpdateBucketRequest, _options: RequestOptions) -> Result<Response<gcs::model::Bucket>>;
            async fn list_objects(&self, req: gcs::model::ListObjectsRequest, _options: RequestOptions) -> Result<Response<gcs::model::ListObjectsResponse>>;
        }
    }

    const BUCKET: &str = "projects/_/buckets/test-bucket";

    fn not_found() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::NotFound)
                .set_message("not found"),
        )
    }

    fn page(names: &[&str], next: &str) -> Result<Response<gcs::model::ListObjectsResponse>> {
        let objects = names
            .iter()
            .map(|n| gcs::model::Object::new().set_name(*n));
        Ok(Response::from(
            gcs::model::ListObjectsResponse::new()
                .set_objects(objects)
                .set_next_page_token(next),
        ))
    }

    #[tokio::test]
    async fn deactivate_hmac_key() -> anyhow::Result<()> {
        let mut mock = MockHmacKeys::new();
        mock.expect_update_hmac_key()
            .once()
            .withf(|r| {
                r.project_id == "test-project"
                    && r.access_id == "GOOG1EXAMPLE"
                    && r.state == hmac_key_state::INACTIVE
            })
            .returning(|r| {
                Ok(HmacKeyMetadata::new()
                    .set_access_id(r.access_id)
                    .set_state(r.state))
            });

        let client = HmacKeys::from_stub(mock);
        deactivate_hmac_key::sample(&client, "test-project", "GOOG1EXAMPLE").await?;
        Ok(())
    }

    #[tokio::test]
    async fn deactivate_hmac_key_error() {
        let mut mock = MockHmacKeys::new();
        mock.expect_update_hmac_key()
            .once()
            .returning(|_| Err(not_found()));

        let client = HmacKeys::from_stub(mock);
        let err = deactivate_hmac_key::sample(&client, "test-project", "GOOG1EXAMPLE")
            .await
            .unwrap_err();
        let err = err.downcast_ref::<Error>();
        assert_eq!(
            err.and_then(|e| e.status()).map(|s| s.code),
            Some(Code::NotFound)
        );
    }

    #[tokio::test]
    async fn disable_default_event_based_hold() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_bucket()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == BUCKET)
            .returning(|r, _| {
                Ok(Response::from(
                    gcs::model::Bucket::new()
                        .set_name(r.name)
                        .set_metageneration(7)
                        .set_default_event_based_hold(true),
                ))
            });
        mock.expect_update_bucket()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                let mask = r.update_mask.as_ref().map(|m| m.paths.clone());
                r.if_metageneration_match == Some(7)
                    && mask == Some(vec!["default_event_based_hold".to_string()])
                    && r.bucket
                        .as_ref()
                        .is_some_and(|b| b.name == BUCKET && !b.default_event_based_hold)
            })
            .returning(|r, _| Ok(Response::from(r.bucket.unwrap_or_default())));

        let client = StorageControl::from_stub(mock);
        disable_default_event_based_hold::sample(&client, "test-bucket").await?;
        Ok(())
    }

    #[tokio::test]
    async fn disable_default_event_based_hold_get_error() {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .once()
            .returning(|_, _| Err(not_found()));
        mock.expect_update_bucket().never();

        let client = StorageControl::from_stub(mock);
        let err = disable_default_event_based_hold::sample(&client, "test-bucket")
            .await
            .unwrap_err();
        let status = err.downcast_ref::<Error>().and_then(|e| e.status());
        assert_eq!(status.map(|s| s.code), Some(Code::NotFound));
    }

    #[tokio::test]
    async fn get_bucket_default_acl() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .once()
            .withf(|r, _| r.name == BUCKET)
            .returning(|r, _| {
                Ok(Response::from(
                    gcs::model::Bucket::new().set_name(r.name).set_default_object_acl([
                        gcs::model::ObjectAccessControl::new()
                            .set_entity("project-owners-123")
                            .set_role("OWNER"),
                        gcs::model::ObjectAccessControl::new()
                            .set_entity("allUsers")
                            .set_role("READER"),
                    ]),
                ))
            });

        let client = StorageControl::from_stub(mock);
        get_bucket_default_acl::sample(&client, "test-bucket").await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_objects_with_prefix_all_pages() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_objects()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.parent == BUCKET && r.prefix == "logs/" && r.page_token.is_empty())
            .returning(|_, _| page(&["logs/1", "logs/2"], "page-2"));
        mock.expect_list_objects()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.prefix == "logs/" && r.page_token == "page-2")
            .returning(|_, _| page(&["logs/3"], ""));

        let client = StorageControl::from_stub(mock);
        list_objects_with_prefix::sample(&client, "test-bucket", "logs/").await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_objects_with_prefix_error_stops() {
        let mut mock = MockStorageControl::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_objects()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| page(&["logs/1"], "page-2"));
        mock.expect_list_objects()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Err(not_found()));

        let client = StorageControl::from_stub(mock);
        let err = list_objects_with_prefix::sample(&client, "test-bucket", "logs/")
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<Error>().is_some(), "{err:?}");
    }
}
