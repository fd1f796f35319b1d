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

//! Helpers to format request paths.
//!
//! Resource names supplied by the application are embedded in the URL path.
//! Missing values are reported as [binding errors], and values are
//! percent-encoded so they cannot change the structure of the path.
//!
//! [binding errors]: gax::error::Error::is_binding

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Creates the error for a missing path parameter.
pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns `value`, or a binding error if it is empty.
pub fn required<'a>(value: &'a str, name: &str) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

// Unreserved characters per RFC 3986 are left as-is, as are the delimiters
// Google resource names use, e.g. `databases/(default)` or `{parent}:runQuery`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'(')
    .remove(b')')
    .remove(b':')
    .remove(b'@');

/// Percent-encodes a single path segment, including any `/` characters.
///
/// # Example
/// ```
/// # use cloud_samples_gax_internal::path_parameter::encode_path_segment;
/// assert_eq!(encode_path_segment("my-bucket"), "my-bucket");
/// assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Percent-encodes a resource name, preserving the `/` separators.
///
/// # Example
/// ```
/// # use cloud_samples_gax_internal::path_parameter::encode_resource_name;
/// assert_eq!(
///     encode_resource_name("projects/p/locations/us central1"),
///     "projects/p/locations/us%20central1");
/// ```
pub fn encode_resource_name(value: &str) -> String {
    value
        .split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}
