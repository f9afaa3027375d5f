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

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::utils::Redact;
use crate::{Context, Error, Result};

/// Config carries all the configuration for the mashery client.
#[derive(Clone, Default)]
pub struct Config {
    /// `key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MASHERY_API_KEY`]
    pub key: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MASHERY_API_SECRET`]
    pub secret: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MASHERY_API_HOST`]
    /// - default: [`DEFAULT_HOST`]
    pub host: Option<String>,
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MASHERY_API_VERSION`]
    /// - default: [`DEFAULT_VERSION`]
    pub version: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MASHERY_API_KEY) {
            self.key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MASHERY_API_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MASHERY_API_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MASHERY_API_VERSION) {
            self.version.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::from(&self.secret))
            .field("host", &self.host)
            .field("version", &self.version)
            .finish()
    }
}

/// Endpoint is the root every resource URL is built under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    version: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Endpoint {
    /// Create an endpoint from an explicit host and version.
    ///
    /// A trailing `/` on host and surrounding `/` on version are dropped.
    pub fn new(host: &str, version: &str) -> Result<Self> {
        let host = host.trim_end_matches('/');
        let version = version.trim_matches('/');
        if host.is_empty() {
            return Err(Error::config_invalid("endpoint host must not be empty"));
        }
        if version.is_empty() {
            return Err(Error::config_invalid("endpoint version must not be empty"));
        }

        Ok(Self {
            host: host.to_string(),
            version: version.to_string(),
        })
    }

    /// Build an endpoint from config, falling back to the defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.host.as_deref().unwrap_or(DEFAULT_HOST),
            config.version.as_deref().unwrap_or(DEFAULT_VERSION),
        )
    }

    /// Host part, e.g. `https://api.mashery.com`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Version segment, e.g. `v1`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `host/version`, the prefix every base URL starts with.
    pub fn root(&self) -> String {
        format!("{}/{}", self.host, self.version)
    }
}
