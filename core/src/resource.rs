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

use std::fmt::Debug;

use crate::constants::*;
use crate::url::{insert_scope, parameterize, scope_value, Inputs};
use crate::Endpoint;

/// ResourceKind describes how URLs of one kind of endpoint are shaped.
///
/// Both methods must be pure. `scope` must be idempotent: applying it twice
/// with the same inputs yields the same URL as applying it once.
pub trait ResourceKind: Debug + Send + Sync + 'static {
    /// Narrow `url` to the context named by `inputs`, or return it unchanged
    /// if the inputs carry no context.
    fn scope(&self, url: &str, inputs: &Inputs) -> String;

    /// Encode `inputs` into the query string of `url`.
    fn parameterize(&self, url: &str, inputs: &Inputs) -> String;
}

/// Unscoped resources ignore the publication id for routing.
///
/// The id, if present, still travels as a plain query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unscoped;

impl ResourceKind for Unscoped {
    fn scope(&self, url: &str, _: &Inputs) -> String {
        url.to_string()
    }

    fn parameterize(&self, url: &str, inputs: &Inputs) -> String {
        parameterize(url, inputs)
    }
}

/// PublicationScoped resources live under `/pub/{publication-id}` when the
/// `publication-id` input is present and not null.
///
/// ```text
/// https://api.mashery.com/v1/locations
/// https://api.mashery.com/v1/pub/42/locations
/// ```
#[derive(Debug, Clone, Default)]
pub struct PublicationScoped {
    version: Option<String>,
}

impl PublicationScoped {
    /// Scope right after the first path segment, which is the version for
    /// every resource built from an [`Endpoint`] whose host has no path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope right after the version segment of `endpoint`.
    ///
    /// Use this when the host itself carries a path, e.g.
    /// `https://example.com/api`.
    pub fn for_endpoint(endpoint: &Endpoint) -> Self {
        Self {
            version: Some(endpoint.version().to_string()),
        }
    }
}

impl ResourceKind for PublicationScoped {
    fn scope(&self, url: &str, inputs: &Inputs) -> String {
        match scope_value(inputs, PUBLICATION_ID) {
            Some(id) => insert_scope(url, self.version.as_deref(), "pub", &id),
            None => url.to_string(),
        }
    }

    fn parameterize(&self, url: &str, inputs: &Inputs) -> String {
        parameterize(url, inputs)
    }
}

/// Resource is one concrete endpoint: a kind plus the absolute URL it lives at.
#[derive(Debug, Clone)]
pub struct Resource<K: ResourceKind> {
    kind: K,
    base_url: String,
}

impl<K: ResourceKind> Resource<K> {
    /// Create a resource under the default endpoint.
    ///
    /// `relative_path` is appended verbatim, so it should start with `/`.
    pub fn new(kind: K, relative_path: &str) -> Self {
        Self::with_endpoint(kind, &Endpoint::default(), relative_path)
    }

    /// Create a resource under `endpoint`.
    pub fn with_endpoint(kind: K, endpoint: &Endpoint, relative_path: &str) -> Self {
        Self {
            kind,
            base_url: format!("{}{}", endpoint.root(), relative_path),
        }
    }

    /// The absolute, version-qualified URL of this resource.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The kind of this resource.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Scope then parameterize the base URL. The result is not signed yet.
    pub fn url(&self, inputs: &Inputs) -> String {
        let scoped = self.kind.scope(&self.base_url, inputs);
        self.kind.parameterize(&scoped, inputs)
    }
}
