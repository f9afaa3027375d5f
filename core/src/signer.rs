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

//! Mashery request signing.

use log::debug;

use crate::constants::*;
use crate::hash::hex_md5;
use crate::time::{now, unix_seconds, DateTime};
use crate::url::append_query;
use crate::utils::Redact;
use crate::{CredentialStore, Result};

/// RequestSigner appends `dev_key` and `sig` to a URL.
///
/// `sig` is the lowercase hex MD5 of `key + secret + timestamp`, where the
/// timestamp is whole seconds since the Unix epoch. Two requests signed in
/// the same second carry the same signature.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    store: CredentialStore,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer reading credentials from `store`.
    pub fn new(store: CredentialStore) -> Self {
        Self { store, time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The store this signer reads credentials from.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Sign `url`.
    ///
    /// Fails with [`crate::ErrorKind::Signature`] if key or secret is unset.
    pub fn sign(&self, url: &str) -> Result<String> {
        let cred = self.store.credential()?;
        let ts = unix_seconds(self.time.unwrap_or_else(now));
        let sig = signature(&cred.key, &cred.secret, ts);
        debug!("signing with key {:?} at {ts}", Redact::from(&cred.key));

        Ok(append_query(url, [(DEV_KEY, cred.key.as_str()), (SIG, sig.as_str())]))
    }
}

/// Compute the signature for `key` and `secret` at `timestamp` seconds.
pub fn signature(key: &str, secret: &str, timestamp: i64) -> String {
    let mut s = String::with_capacity(key.len() + secret.len() + 20);
    s.push_str(key);
    s.push_str(secret);
    s.push_str(&timestamp.to_string());

    hex_md5(s.as_bytes())
}
