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

//! Verify the query cursor sample using a mocked client.

#[cfg(test)]
mod tests {
    use firestore_samples::client::Firestore;
    use firestore_samples::model::{
        Direction, Document, RunQueryRequest, RunQueryResponse, Value,
    };
    use firestore_samples::{Result, query_cursor_start_at_field_value_single};
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};

    mockall::mock! {
        #[derive(Debug)]
        Firestore {}
        impl firestore_samples::stub::Firestore for Firestore {
            async fn run_query(&self, req: RunQueryRequest) -> Result<Vec<RunQueryResponse>>;
        }
    }

    fn city(id: &str) -> RunQueryResponse {
        RunQueryResponse::new().set_document(Document::new().set_name(format!(
            "projects/test-project/databases/(default)/documents/samples/rust/cities/{id}"
        )))
    }

    #[tokio::test]
    async fn query_cursor_request() -> anyhow::Result<()> {
        let mut mock = MockFirestore::new();
        mock.expect_run_query()
            .once()
            .withf(|r| {
                let Some(query) = r.structured_query.as_ref() else {
                    return false;
                };
                let Some(cursor) = query.start_at.as_ref() else {
                    return false;
                };
                let order = query
                    .order_by
                    .iter()
                    .map(|o| {
                        (
                            o.field.as_ref().map(|f| f.field_path.as_str()),
                            o.direction,
                        )
                    })
                    .collect::<Vec<_>>();
                r.parent == "projects/test-project/databases/(default)/documents/samples/rust"
                    && query.from.len() == 1
                    && query.from[0].collection_id == "cities"
                    && order == [(Some("population"), Direction::Ascending)]
                    && cursor.values == [Value::IntegerValue(1_000_000)]
                    && cursor.before
            })
            .returning(|_| Ok(vec![city("BJ"), RunQueryResponse::new(), city("TOK")]));

        let client = Firestore::from_stub(mock);
        query_cursor_start_at_field_value_single::sample(&client, "test-project").await?;
        Ok(())
    }

    #[tokio::test]
    async fn query_cursor_empty() -> anyhow::Result<()> {
        let mut mock = MockFirestore::new();
        mock.expect_run_query().once().returning(|_| Ok(Vec::new()));

        let client = Firestore::from_stub(mock);
        query_cursor_start_at_field_value_single::sample(&client, "test-project").await?;
        Ok(())
    }

    #[tokio::test]
    async fn query_cursor_error() {
        let mut mock = MockFirestore::new();
        mock.expect_run_query().once().returning(|_| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::FailedPrecondition)
                    .set_message("missing index"),
            ))
        });

        let client = Firestore::from_stub(mock);
        let err = query_cursor_start_at_field_value_single::sample(&client, "test-project")
            .await
            .unwrap_err();
        let err = err.downcast_ref::<Error>();
        assert_eq!(
            err.and_then(|e| e.status()).map(|s| s.code),
            Some(Code::FailedPrecondition)
        );
    }

    #[tokio::test]
    async fn query_cursor_requires_project() {
        let mut mock = MockFirestore::new();
        mock.expect_run_query().never();

        let client = Firestore::from_stub(mock);
        let err = query_cursor_start_at_field_value_single::sample(&client, "")
            .await
            .unwrap_err();
        assert!(
            err.downcast_ref::<Error>().is_some_and(|e| e.is_binding()),
            "{err:?}"
        );
    }
}
