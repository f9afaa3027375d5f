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
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::utils::Redact;
use crate::{Context, Error, ProvideCredential, Result};

/// Credential used to sign requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Developer key, sent in clear as `dev_key`.
    pub key: String,
    /// Shared secret, only ever used as digest input.
    pub secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

#[derive(Default)]
struct Slots {
    key: Option<String>,
    secret: Option<String>,
}

/// CredentialStore holds the key and secret shared by every request made
/// through one client.
///
/// Both values start unset. They are expected to be configured once at
/// startup and only read afterwards, but the store is guarded by a lock so a
/// late reconfiguration never tears a read.
///
/// Clones share the same slots.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Slots>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `cred`.
    pub fn with_credential(cred: Credential) -> Self {
        let store = Self::new();
        store.set(cred);
        store
    }

    /// Set the key.
    pub fn set_key(&self, key: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .key = Some(key.into());
    }

    /// Set the secret.
    pub fn set_secret(&self, secret: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .secret = Some(secret.into());
    }

    /// Set both key and secret at once.
    pub fn set(&self, cred: Credential) {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        slots.key = Some(cred.key);
        slots.secret = Some(cred.secret);
    }

    /// Forget both values.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Slots::default();
    }

    /// Returns true when both key and secret are present.
    pub fn is_configured(&self) -> bool {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slots.key.is_some() && slots.secret.is_some()
    }

    /// Read the credential.
    ///
    /// Fails with [`crate::ErrorKind::Signature`] if either value is unset.
    pub fn credential(&self) -> Result<Credential> {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        match (&slots.key, &slots.secret) {
            (Some(key), Some(secret)) => Ok(Credential::new(key.clone(), secret.clone())),
            (None, _) => Err(Error::signature("api key is not configured")),
            (_, None) => Err(Error::signature("api secret is not configured")),
        }
    }

    /// Ask `provider` for a credential and install it.
    ///
    /// Returns `true` if a credential was found. The store is left untouched
    /// when the provider has nothing to offer.
    pub async fn load(&self, ctx: &Context, provider: &dyn ProvideCredential) -> Result<bool> {
        match provider.provide_credential(ctx).await? {
            Some(cred) => {
                debug!("credential loaded: {cred:?}");
                self.set(cred);
                Ok(true)
            }
            None => {
                debug!("no credential found by {provider:?}");
                Ok(false)
            }
        }
    }
}

impl Debug for CredentialStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("CredentialStore")
            .field("key", &Redact::from(&slots.key))
            .field("secret", &Redact::from(&slots.secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, StaticCredentialProvider};

    #[test]
    fn test_unset_store_fails_with_signature() {
        let store = CredentialStore::new();
        assert!(!store.is_configured());
        assert_eq!(store.credential().unwrap_err().kind(), ErrorKind::Signature);

        store.set_key("key");
        assert_eq!(store.credential().unwrap_err().kind(), ErrorKind::Signature);

        store.set_secret("secret");
        assert!(store.is_configured());
        assert_eq!(store.credential().unwrap(), Credential::new("key", "secret"));
    }

    #[test]
    fn test_only_secret_is_not_enough() {
        let store = CredentialStore::new();
        store.set_secret("secret");
        assert_eq!(store.credential().unwrap_err().kind(), ErrorKind::Signature);
    }

    #[test]
    fn test_clones_share_state() {
        let store = CredentialStore::new();
        let other = store.clone();
        other.set(Credential::new("key", "secret"));
        assert!(store.is_configured());

        store.clear();
        assert!(!other.is_configured());
    }

    #[test]
    fn test_debug_redacts() {
        let store = CredentialStore::with_credential(Credential::new(
            "key",
            "a-very-long-secret-value",
        ));
        let s = format!("{store:?}");
        assert!(!s.contains("a-very-long-secret-value"));
        assert!(s.contains("a-v***lue"));
    }

    #[tokio::test]
    async fn test_load_from_provider() {
        let ctx = Context::new();
        let store = CredentialStore::new();

        let loaded = store
            .load(&ctx, &StaticCredentialProvider::new("key", "secret"))
            .await
            .unwrap();
        assert!(loaded);
        assert_eq!(store.credential().unwrap().key, "key");
    }
}
