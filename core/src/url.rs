// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Pure URL composition helpers shared by resource kinds and the signer.

use std::borrow::Cow;
use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Inputs of one resource call.
///
/// A `BTreeMap` keeps keys sorted, so the query string produced from it is
/// the same for every call with the same inputs.
pub type Inputs = BTreeMap<String, Value>;

/// Unreserved characters as defined by RFC 3986 are left alone.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Render an input value the way it should appear in a query string or path.
///
/// - strings are used as is
/// - `null` becomes the empty string
/// - everything else uses its JSON text
pub fn value_to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        v => Cow::Owned(v.to_string()),
    }
}

/// Append `pairs` to `url` as url-encoded query parameters.
///
/// The first parameter is introduced with `?` if `url` has no query yet and
/// with `&` otherwise. An empty `pairs` leaves `url` untouched.
pub fn append_query<I, K, V>(url: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k.as_ref(), v.as_ref());
    }
    let query = serializer.finish();
    if query.is_empty() {
        return url.to_string();
    }

    let sep = match url.find('?') {
        None => "?",
        Some(_) if url.ends_with('?') || url.ends_with('&') => "",
        Some(_) => "&",
    };

    let mut s = String::with_capacity(url.len() + sep.len() + query.len());
    s.push_str(url);
    s.push_str(sep);
    s.push_str(&query);
    s
}

/// Encode every input as a query parameter of `url`.
pub fn parameterize(url: &str, inputs: &Inputs) -> String {
    append_query(
        url,
        inputs.iter().map(|(k, v)| (k.as_str(), value_to_string(v))),
    )
}

/// Look up a scoping input, treating a missing key and `null` alike.
pub fn scope_value<'a>(inputs: &'a Inputs, key: &str) -> Option<Cow<'a, str>> {
    match inputs.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(value_to_string(v)),
    }
}

/// Insert `/{name}/{value}` into the path of `url` right after the version
/// segment.
///
/// With `version` set, the first `/{version}` segment after the authority
/// marks the spot. Without it, or if that segment is missing, the first
/// path segment is taken as the version, which matches every URL shaped
/// `host/version/path`. A url that already carries the same scope at that
/// position is returned unchanged.
pub fn insert_scope(url: &str, version: Option<&str>, name: &str, value: &str) -> String {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let scope = format!("{name}/{}", utf8_percent_encode(value, PATH_SEGMENT));
    let pos = scope_position(path, version);

    let (head, tail) = path.split_at(pos);
    if tail == scope || tail.starts_with(&format!("{scope}/")) {
        return url.to_string();
    }

    let mut s = String::with_capacity(url.len() + scope.len() + 2);
    s.push_str(head);
    if !head.ends_with('/') {
        s.push('/');
    }
    s.push_str(&scope);
    if !tail.is_empty() {
        s.push('/');
        s.push_str(tail);
    }
    if let Some(query) = query {
        s.push('?');
        s.push_str(query);
    }
    s
}

/// Byte offset in `path` right behind the version segment.
fn scope_position(path: &str, version: Option<&str>) -> usize {
    // Skip `scheme://` so the authority is never mistaken for a segment.
    let authority_start = path.find("://").map(|i| i + 3).unwrap_or(0);
    let Some(path_start) = path[authority_start..].find('/').map(|i| authority_start + i) else {
        return path.len();
    };
    let segments = &path[path_start..];

    if let Some(version) = version {
        let marker = format!("/{version}/");
        if let Some(i) = segments.find(&marker) {
            return path_start + i + marker.len();
        }
        if segments.ends_with(&marker[..marker.len() - 1]) {
            return path.len();
        }
    }

    match segments[1..].find('/') {
        Some(i) => path_start + 1 + i + 1,
        None => path.len(),
    }
}
