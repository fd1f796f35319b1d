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

use crate::model::{CollectionSelector, StructuredQuery};

const DEFAULT_DATABASE: &str = "(default)";

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("{0} is not a collection path, expected an odd number of non-empty segments")]
    InvalidCollectionPath(String),
}

/// Identifies a collection in the default database.
///
/// Collections may be nested under documents, for example
/// `samples/rust/cities` is the `cities` collection under the `samples/rust`
/// document.
///
/// # Example
/// ```
/// # use firestore_samples::collection::CollectionReference;
/// let cities = CollectionReference::parse("my-project", "samples/rust/cities")?;
/// assert_eq!(cities.parent(), "projects/my-project/databases/(default)/documents/samples/rust");
/// assert_eq!(cities.collection_id(), "cities");
/// # Ok::<(), gax::error::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionReference {
    parent: String,
    collection_id: String,
}

impl CollectionReference {
    /// Parses a slash-separated collection path.
    pub fn parse(project_id: &str, path: &str) -> gax::Result<Self> {
        let project_id = gaxi::path_parameter::required(project_id, "project_id")?;
        let segments = path.split('/').collect::<Vec<_>>();
        if segments.len() % 2 == 0 || segments.iter().any(|s| s.is_empty()) {
            return Err(gax::error::Error::binding(Error::InvalidCollectionPath(
                path.to_string(),
            )));
        }
        let Some((collection_id, documents)) = segments.split_last() else {
            return Err(gax::error::Error::binding(Error::InvalidCollectionPath(
                path.to_string(),
            )));
        };
        let root = format!("projects/{project_id}/databases/{DEFAULT_DATABASE}/documents");
        let parent = if documents.is_empty() {
            root
        } else {
            format!("{root}/{}", documents.join("/"))
        };
        Ok(Self {
            parent,
            collection_id: collection_id.to_string(),
        })
    }

    /// The resource name of the parent document, or the database root.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    /// Starts a query over the documents in this collection.
    pub fn query(&self) -> StructuredQuery {
        StructuredQuery::new()
            .set_from([CollectionSelector::new().set_collection_id(&self.collection_id)])
    }
}
