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

//! Map an HTTP response onto the error taxonomy.

use http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::constants::X_MASHERY_ERROR_CODE;
use crate::{Error, Result};

/// Classify a response.
///
/// | status | outcome |
/// |---|---|
/// | `< 300` | body parsed as JSON |
/// | `403` | [`crate::ErrorKind::Forbidden`] |
/// | `404` | [`crate::ErrorKind::NotFound`] |
/// | other, with `x-mashery-error-code` | [`crate::ErrorKind::Service`] carrying the header value |
/// | other, without it | [`crate::ErrorKind::Query`] carrying the parsed body |
///
/// A body that must be parsed but is not JSON yields [`crate::ErrorKind::Parse`].
pub fn classify(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Result<Value> {
    if status.as_u16() < 300 {
        return parse_body(body);
    }

    match status {
        StatusCode::FORBIDDEN => Err(Error::forbidden()),
        StatusCode::NOT_FOUND => Err(Error::not_found()),
        _ => match headers.get(X_MASHERY_ERROR_CODE) {
            Some(code) => Err(Error::service(String::from_utf8_lossy(code.as_bytes()))),
            None => Err(Error::query(parse_body(body)?)),
        },
    }
}

fn parse_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        Error::parse(format!("response body is not valid json: {e}"))
            .with_source(anyhow::Error::from(e))
    })
}
