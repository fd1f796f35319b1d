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

// [START firestore_query_cursor_start_at_field_value_single]
use crate::DEFAULT_COLLECTION;
use crate::client::Firestore;
use crate::collection::CollectionReference;
use crate::model::{Cursor, Direction, FieldReference, Order};

const START_POPULATION: i64 = 1_000_000;

/// Lists the cities with a population of at least one million.
///
/// The query orders the collection by population and starts the results
/// at the first document with the given value, inclusive.
pub async fn sample(client: &Firestore, project_id: &str) -> anyhow::Result<()> {
    let cities = CollectionReference::parse(project_id, DEFAULT_COLLECTION)?;
    let query = cities
        .query()
        .set_order_by([Order::new()
            .set_field(FieldReference::new().set_field_path("population"))
            .set_direction(Direction::Ascending)])
        .set_start_at(
            Cursor::new()
                .set_values([START_POPULATION])
                .set_before(true),
        );
    let results = client
        .run_query()
        .set_parent(cities.parent())
        .set_structured_query(query)
        .send()
        .await?;
    for document in results.into_iter().filter_map(|r| r.document) {
        println!(
            "Document {} returned by start at population {START_POPULATION} field query cursor.",
            document.id()
        );
    }
    Ok(())
}
// [END firestore_query_cursor_start_at_field_value_single]
