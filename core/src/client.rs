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

use bytes::Bytes;
use http::header::ACCEPT;
use http::{Method, Request};
use log::debug;
use serde_json::Value;

use crate::classify::classify;
use crate::constants::SIG;
use crate::url::Inputs;
use crate::utils::redact_query;
use crate::{
    Config, Context, CredentialStore, Endpoint, RequestSigner, Resource, ResourceKind, Result,
};

/// Client turns resource calls into signed GET requests and their responses
/// into parsed JSON or a typed error.
///
/// Every [`Client::fetch`] is one independent round trip: no retry, no
/// caching. Clients are cheap to clone and share their credential store.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    endpoint: Endpoint,
    signer: RequestSigner,
}

impl Client {
    /// Create a client over the default endpoint.
    pub fn new(ctx: Context, store: CredentialStore) -> Self {
        Self::with_signer(ctx, Endpoint::default(), RequestSigner::new(store))
    }

    /// Create a client from config.
    ///
    /// Key and secret found in the config, or in the env the context exposes,
    /// are pushed into a fresh store.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let config = config.clone().from_env(&ctx);
        let endpoint = Endpoint::from_config(&config)?;

        let store = CredentialStore::new();
        if let Some(key) = config.key {
            store.set_key(key);
        }
        if let Some(secret) = config.secret {
            store.set_secret(secret);
        }

        Ok(Self::with_signer(ctx, endpoint, RequestSigner::new(store)))
    }

    /// Create a client from its parts.
    pub fn with_signer(ctx: Context, endpoint: Endpoint, signer: RequestSigner) -> Self {
        Self {
            ctx,
            endpoint,
            signer,
        }
    }

    /// The endpoint resources created through [`Client::resource`] use.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The credential store requests are signed from.
    pub fn store(&self) -> &CredentialStore {
        self.signer.store()
    }

    /// Create a resource under this client's endpoint.
    pub fn resource<K: ResourceKind>(&self, kind: K, relative_path: &str) -> Resource<K> {
        Resource::with_endpoint(kind, &self.endpoint, relative_path)
    }

    /// Build the final, signed URL for a call without sending it.
    pub fn signed_url<K: ResourceKind>(
        &self,
        resource: &Resource<K>,
        inputs: &Inputs,
    ) -> Result<String> {
        self.signer.sign(&resource.url(inputs))
    }

    /// Fetch `resource` with `inputs`.
    ///
    /// Returns the parsed response body on a status below 300. Every other
    /// outcome is an error, see [`classify()`](crate::classify()).
    pub async fn fetch<K: ResourceKind>(
        &self,
        resource: &Resource<K>,
        inputs: &Inputs,
    ) -> Result<Value> {
        let url = self.signed_url(resource, inputs)?;
        debug!("fetch: GET {}", redact_query(&url, &[SIG]));

        let req = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(ACCEPT, "application/json")
            .body(Bytes::new())?;

        let resp = self.ctx.http_send(req).await?;
        debug!("fetch: got response status {}", resp.status());

        let (parts, body) = resp.into_parts();
        classify(parts.status, &parts.headers, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::{Credential, ErrorKind, HttpSend, PublicationScoped, StaticEnv, Unscoped};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default, Clone)]
    struct Recorder {
        seen: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    #[async_trait]
    impl HttpSend for Recorder {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.seen.lock().unwrap().push(req);
            Ok(http::Response::new(Bytes::from_static(b"{}")))
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_signed_get() {
        let recorder = Recorder::default();
        let ctx = Context::new().with_http_send(recorder.clone());
        let client = Client::new(
            ctx,
            CredentialStore::with_credential(Credential::new("key", "secret")),
        );

        let resource = client.resource(Unscoped, "/things");
        client.fetch(&resource, &Inputs::new()).await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let req = &seen[0];
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.headers()[ACCEPT], "application/json");
        let uri = req.uri().to_string();
        assert!(uri.starts_with(&format!(
            "{DEFAULT_HOST}/{DEFAULT_VERSION}/things?dev_key=key&sig="
        )));
    }

    #[tokio::test]
    async fn test_fetch_unsigned_never_sends() {
        let recorder = Recorder::default();
        let ctx = Context::new().with_http_send(recorder.clone());
        let client = Client::new(ctx, CredentialStore::new());

        let resource = client.resource(Unscoped, "/things");
        let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Signature);
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_request_invalid() {
        let ctx = Context::new().with_http_send(Recorder::default());
        let client = Client::new(
            ctx,
            CredentialStore::with_credential(Credential::new("key", "secret")),
        );

        let resource = client.resource(Unscoped, "/has space");
        let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_from_config_reads_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (MASHERY_API_KEY.to_string(), "env_key".to_string()),
                (MASHERY_API_SECRET.to_string(), "env_secret".to_string()),
                (MASHERY_API_HOST.to_string(), "https://example.com".to_string()),
            ]),
        });

        let client = Client::from_config(ctx, &Config::new().with_version("v9")).unwrap();
        assert_eq!(client.endpoint().root(), "https://example.com/v9");
        assert_eq!(
            client.store().credential().unwrap(),
            Credential::new("env_key", "env_secret")
        );
    }

    #[test]
    fn test_from_config_without_credentials_defers_failure() {
        let client = Client::from_config(Context::new(), &Config::new()).unwrap();
        assert!(!client.store().is_configured());

        let resource = client.resource(Unscoped, "/things");
        let err = client.signed_url(&resource, &Inputs::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Signature);
    }

    #[test]
    fn test_resource_scopes_under_configured_version() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (MASHERY_API_KEY.to_string(), "key".to_string()),
                (MASHERY_API_SECRET.to_string(), "secret".to_string()),
                (MASHERY_API_VERSION.to_string(), "v2".to_string()),
            ]),
        });
        let client = Client::from_config(ctx, &Config::new()).unwrap();

        let resource = client.resource(PublicationScoped::new(), "/locations/7");
        let inputs: Inputs = serde_json::from_value(serde_json::json!({"publication-id": 42}))
            .unwrap();
        let url = client.signed_url(&resource, &inputs).unwrap();
        assert!(url.starts_with(&format!(
            "{DEFAULT_HOST}/v2/pub/42/locations/7?publication-id=42&dev_key=key&sig="
        )));
    }
}
