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

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The error type for mashery operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
    payload: Option<Value>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key or secret is missing, so the request cannot be signed.
    Signature,

    /// The service answered with HTTP 403.
    Forbidden,

    /// The service answered with HTTP 404.
    NotFound,

    /// The service reported a fault via the `x-mashery-error-code` header.
    Service,

    /// The service rejected the request and described why in the body.
    Query,

    /// The request never produced an HTTP response (connection refused, timeout, ...).
    Transport,

    /// A body that should have been JSON was not.
    Parse,

    /// The composed request could not be turned into a valid HTTP request.
    RequestInvalid,

    /// Configuration error (empty host, empty version, ...)
    ConfigInvalid,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            payload: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The code reported by the service, set for [`ErrorKind::Service`].
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The parsed response body, set for [`ErrorKind::Query`].
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Consume the error and take the query payload out of it.
    pub fn into_payload(self) -> Option<Value> {
        self.payload
    }

    /// Check if this error was derived from an HTTP status.
    pub fn is_status_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Forbidden | ErrorKind::NotFound | ErrorKind::Service | ErrorKind::Query
        )
    }

    /// Check if retrying the same request could succeed.
    ///
    /// Only transport failures qualify. Status errors are terminal.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Transport
    }
}

// Convenience constructors
impl Error {
    /// Create a signature error
    pub fn signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Signature, message)
    }

    /// Create a forbidden error
    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden, "access to the resource is forbidden")
    }

    /// Create a not found error
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "resource not found")
    }

    /// Create a service error carrying the code reported by the service.
    pub fn service(code: impl Into<String>) -> Self {
        let code = code.into();
        let mut err = Self::new(ErrorKind::Service, format!("service error code {code}"));
        err.code = Some(code);
        err
    }

    /// Create a query error carrying the response body.
    pub fn query(payload: Value) -> Self {
        let mut err = Self::new(ErrorKind::Query, payload.to_string());
        err.payload = Some(payload);
        err
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Signature => write!(f, "signature error"),
            ErrorKind::Forbidden => write!(f, "forbidden"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Service => write!(f, "service error"),
            ErrorKind::Query => write!(f, "query error"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
