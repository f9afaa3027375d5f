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
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::*;
use crate::{Config, Context, Credential, Result};

/// ProvideCredential is the trait used to find a credential to push into a
/// [`crate::CredentialStore`].
///
/// Returning `Ok(None)` means "nothing here", letting a chain move on.
#[async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Load a credential from the current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>>;
}

/// StaticCredentialProvider returns the credential it was built with.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            credential: Credential::new(key, secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

/// EnvCredentialProvider loads the credential from environment variables.
///
/// - `MASHERY_API_KEY`
/// - `MASHERY_API_SECRET`
///
/// Both must be present and non-empty.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let key = ctx.env_var(MASHERY_API_KEY).filter(|v| !v.is_empty());
        let secret = ctx.env_var(MASHERY_API_SECRET).filter(|v| !v.is_empty());

        match (key, secret) {
            (Some(key), Some(secret)) => Ok(Some(Credential::new(key, secret))),
            _ => Ok(None),
        }
    }
}

/// ConfigCredentialProvider loads the credential from [`Config`], with env
/// values filling fields the config leaves unset.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(key), Some(secret)) = (config.key, config.secret) {
            return Ok(Some(Credential::new(key, secret)));
        }

        Ok(None)
    }
}

/// ProvideCredentialChain tries providers in order and returns the first
/// credential found.
///
/// An error from any provider stops the chain.
#[derive(Debug, Default)]
pub struct ProvideCredentialChain {
    providers: Vec<Box<dyn ProvideCredential>>,
}

impl ProvideCredentialChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if the chain holds no provider.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl ProvideCredential for ProvideCredentialChain {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");
            if let Some(cred) = provider.provide_credential(ctx).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}
