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

//! Verify the slate deletion sample using a mocked client.

#[cfg(test)]
mod tests {
    use gax::Result;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gaxi::polling::PollingPolicy;
    use google_cloud_longrunning::model::operation::Result as OperationResult;
    use google_cloud_longrunning::model::{GetOperationRequest, Operation};
    use google_cloud_video_stitcher_v1 as stitcher;
    use stitcher::client::VideoStitcherService;
    use stitcher::model::DeleteSlateRequest;
    use videostitcher_samples::delete_slate::{self, Deletion, delete_and_wait};

    mockall::mock! {
        #[derive(Debug)]
        VideoStitcherService {}
        impl stitcher::stub::VideoStitcherService for VideoStitcherService {
            async fn delete_slate(&self, req: DeleteSlateRequest, _options: RequestOptions) -> Result<Response<Operation>>;
            async fn get_operation(&self, req: GetOperationRequest, _options: RequestOptions) -> Result<Response<Operation>>;
        }
    }

    const SLATE: &str = "projects/test-project/locations/us-central1/slates/test-slate";
    const OPERATION: &str = "projects/test-project/locations/us-central1/operations/op-1";

    fn pending() -> Result<Response<Operation>> {
        Ok(Response::from(Operation::new().set_name(OPERATION)))
    }

    fn done() -> Result<Response<Operation>> {
        Ok(Response::from(
            Operation::new().set_name(OPERATION).set_done(true),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn deleted_after_polling() -> anyhow::Result<()> {
        let mut mock = MockVideoStitcherService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_delete_slate()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == SLATE)
            .returning(|_, _| pending());
        mock.expect_get_operation()
            .times(2)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == OPERATION)
            .returning(|_, _| pending());
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| done());

        let client = VideoStitcherService::from_stub(mock);
        let got = delete_and_wait(&client, SLATE, &PollingPolicy::default()).await?;
        assert_eq!(got, Deletion::Deleted);
        Ok(())
    }

    #[tokio::test]
    async fn done_immediately() -> anyhow::Result<()> {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate().once().returning(|_, _| done());
        mock.expect_get_operation().never();

        let client = VideoStitcherService::from_stub(mock);
        let got = delete_and_wait(&client, SLATE, &PollingPolicy::default()).await?;
        assert_eq!(got, Deletion::Deleted);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn operation_error() -> anyhow::Result<()> {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate().once().returning(|_, _| pending());
        mock.expect_get_operation().once().returning(|_, _| {
            let status = google_cloud_rpc::model::Status::new()
                .set_code(9)
                .set_message("slate is in use");
            let operation = Operation::new()
                .set_name(OPERATION)
                .set_done(true)
                .set_result(OperationResult::Error(Box::new(status)));
            Ok(Response::from(operation))
        });

        let client = VideoStitcherService::from_stub(mock);
        let got = delete_and_wait(&client, SLATE, &PollingPolicy::default()).await?;
        assert_eq!(got, Deletion::Failed("slate is in use".to_string()));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out() -> anyhow::Result<()> {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate().once().returning(|_, _| pending());
        mock.expect_get_operation()
            .times(4)
            .returning(|_, _| pending());

        let client = VideoStitcherService::from_stub(mock);
        let got = delete_and_wait(&client, SLATE, &PollingPolicy::new(4)).await?;
        assert_eq!(got, Deletion::TimedOut);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn get_operation_error_stops_polling() {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate().once().returning(|_, _| pending());
        mock.expect_get_operation().once().returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::PermissionDenied)
                    .set_message("uh-oh"),
            ))
        });

        let client = VideoStitcherService::from_stub(mock);
        let err = delete_and_wait(&client, SLATE, &PollingPolicy::default())
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[tokio::test]
    async fn delete_error() {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate().once().returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("slate not found"),
            ))
        });
        mock.expect_get_operation().never();

        let client = VideoStitcherService::from_stub(mock);
        let err = delete_slate::sample(&client, "test-project", "us-central1", "test-slate")
            .await
            .unwrap_err();
        let status = err.downcast_ref::<Error>().and_then(|e| e.status());
        assert_eq!(status.map(|s| s.code), Some(Code::NotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn sample_formats_slate_name() -> anyhow::Result<()> {
        let mut mock = MockVideoStitcherService::new();
        mock.expect_delete_slate()
            .once()
            .withf(|r, _| r.name == SLATE)
            .returning(|_, _| done());

        let client = VideoStitcherService::from_stub(mock);
        delete_slate::sample(&client, "test-project", "us-central1", "test-slate").await?;
        Ok(())
    }
}
