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

//! The subset of the Firestore v1 resources used by the samples.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Firestore document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// The resource name of the document, for example
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    pub name: String,

    /// The document's fields.
    pub fields: HashMap<String, Value>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub create_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub update_time: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Document::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [fields][Document::fields].
    pub fn set_fields<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// The document id, that is, the last component of its name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }
}

/// A message that can hold any of the supported value types.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integers are sent as decimal strings.
    IntegerValue(#[serde(with = "int64")] i64),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(LatLng),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::IntegerValue(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::DoubleValue(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::BooleanValue(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::StringValue(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::StringValue(v)
    }
}

/// A latitude and longitude pair, in degrees.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ArrayValue {
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MapValue {
    pub fields: HashMap<String, Value>,
}

mod int64 {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(v: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(v)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            String(String),
            Number(i64),
        }
        match Repr::deserialize(deserializer)? {
            Repr::String(s) => s.parse().map_err(D::Error::custom),
            Repr::Number(n) => Ok(n),
        }
    }
}

/// A Firestore query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StructuredQuery {
    /// The collections to query.
    pub from: Vec<CollectionSelector>,

    /// The order to apply to the query results.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<Order>,

    /// A potential prefix of a position in the result set to start the
    /// query at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<Cursor>,

    /// The maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl StructuredQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [from][StructuredQuery::from].
    pub fn set_from<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CollectionSelector>,
    {
        self.from = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [order_by][StructuredQuery::order_by].
    pub fn set_order_by<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Order>,
    {
        self.order_by = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [start_at][StructuredQuery::start_at].
    pub fn set_start_at<T: Into<Cursor>>(mut self, v: T) -> Self {
        self.start_at = Some(v.into());
        self
    }

    /// Sets the value of [limit][StructuredQuery::limit].
    pub fn set_limit(mut self, v: i32) -> Self {
        self.limit = Some(v);
        self
    }
}

/// A selection of a collection, such as `messages as m1`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CollectionSelector {
    pub collection_id: String,

    /// When true, selects all descendant collections with the same id.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub all_descendants: bool,
}

impl CollectionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [collection_id][CollectionSelector::collection_id].
    pub fn set_collection_id<T: Into<String>>(mut self, v: T) -> Self {
        self.collection_id = v.into();
        self
    }
}

/// An order on a field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldReference>,
    pub direction: Direction,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [field][Order::field].
    pub fn set_field<T: Into<FieldReference>>(mut self, v: T) -> Self {
        self.field = Some(v.into());
        self
    }

    /// Sets the value of [direction][Order::direction].
    pub fn set_direction<T: Into<Direction>>(mut self, v: T) -> Self {
        self.direction = v.into();
        self
    }
}

/// A sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Direction {
    #[default]
    DirectionUnspecified,
    Ascending,
    Descending,
}

/// A reference to a field in a document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldReference {
    pub field_path: String,
}

impl FieldReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [field_path][FieldReference::field_path].
    pub fn set_field_path<T: Into<String>>(mut self, v: T) -> Self {
        self.field_path = v.into();
        self
    }
}

/// A position in a query result set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cursor {
    /// The values that represent a position, in the order they appear in the
    /// order by clause of a query.
    pub values: Vec<Value>,

    /// If the position is just before or just after the given values.
    pub before: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [values][Cursor::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [before][Cursor::before].
    pub fn set_before(mut self, v: bool) -> Self {
        self.before = v;
        self
    }
}

/// The request message for [Firestore::run_query][crate::client::Firestore::run_query].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunQueryRequest {
    /// The parent resource name, sent in the request path.
    #[serde(skip)]
    pub parent: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_query: Option<StructuredQuery>,
}

impl RunQueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parent][RunQueryRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [structured_query][RunQueryRequest::structured_query].
    pub fn set_structured_query<T: Into<StructuredQuery>>(mut self, v: T) -> Self {
        self.structured_query = Some(v.into());
        self
    }
}

/// One element in the response for
/// [Firestore::run_query][crate::client::Firestore::run_query].
///
/// Some elements carry no document, only progress information.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub read_time: String,

    /// The number of results skipped since the last response.
    pub skipped_results: i32,
}

impl RunQueryResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [document][RunQueryResponse::document].
    pub fn set_document<T: Into<Document>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }
}
