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

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderValue, StatusCode};
use mashery_core::constants::X_MASHERY_ERROR_CODE;
use mashery_core::{
    Client, Context, Credential, CredentialStore, Endpoint, ErrorKind, HttpSend, Inputs,
    PublicationScoped, RequestSigner, Result, Unscoped,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Mock transport answering every request with the same canned response.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: &'static str,
    urls: Arc<Mutex<Vec<String>>>,
}

impl MockHttpSend {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            headers: vec![],
            body,
            urls: Arc::default(),
        }
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.urls.lock().unwrap().push(req.uri().to_string());

        let mut resp = http::Response::new(Bytes::from_static(self.body.as_bytes()));
        *resp.status_mut() = self.status;
        for (k, v) in &self.headers {
            resp.headers_mut().insert(*k, HeaderValue::from_static(*v));
        }
        Ok(resp)
    }
}

/// Mock transport that never gets a response.
#[derive(Debug)]
struct RefusingHttpSend;

#[async_trait]
impl HttpSend for RefusingHttpSend {
    async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(mashery_core::Error::transport("connection refused"))
    }
}

fn client(http: impl HttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(http);
    let endpoint = Endpoint::new("https://api.example.com", "v1").unwrap();
    let store = CredentialStore::with_credential(Credential::new("key", "secret"));
    Client::with_signer(ctx, endpoint, RequestSigner::new(store))
}

fn inputs(v: Value) -> Inputs {
    serde_json::from_value(v).unwrap()
}

#[tokio::test]
async fn test_success_returns_body() -> Result<()> {
    let http = MockHttpSend::new(200, r#"{"a":1}"#);
    let client = client(http.clone());

    let resource = client.resource(Unscoped, "/locations");
    let body = client.fetch(&resource, &Inputs::new()).await?;

    assert_eq!(body, json!({"a": 1}));
    assert_eq!(http.urls().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_forbidden() {
    let client = client(MockHttpSend::new(403, ""));

    let resource = client.resource(Unscoped, "/locations");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_not_found() {
    let client = client(MockHttpSend::new(404, "gone"));

    let resource = client.resource(Unscoped, "/locations/1");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_service_error_code() {
    let client = client(MockHttpSend::new(500, "").with_header(X_MASHERY_ERROR_CODE, "99"));

    let resource = client.resource(Unscoped, "/locations");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.code(), Some("99"));
}

#[tokio::test]
async fn test_query_error_payload() {
    let client = client(MockHttpSend::new(400, r#"{"msg":"bad"}"#));

    let resource = client.resource(Unscoped, "/locations");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Query);
    assert_eq!(err.payload(), Some(&json!({"msg": "bad"})));
}

#[tokio::test]
async fn test_publication_scope_applied_once() -> Result<()> {
    let http = MockHttpSend::new(200, "[]");
    let client = client(http.clone());

    let kind = PublicationScoped::for_endpoint(client.endpoint());
    let resource = client.resource(kind, "/locations");
    client
        .fetch(&resource, &inputs(json!({"publication-id": 42})))
        .await?;

    let urls = http.urls();
    let (path, query) = urls[0].split_once('?').unwrap();
    assert_eq!(path, "https://api.example.com/v1/pub/42/locations");
    assert_eq!(urls[0].matches("/pub/42").count(), 1);
    assert!(query.starts_with("publication-id=42&dev_key=key&sig="));
    Ok(())
}

#[tokio::test]
async fn test_signature_params_come_last() -> Result<()> {
    let http = MockHttpSend::new(200, "{}");
    let client = client(http.clone());

    let resource = client.resource(Unscoped, "/search");
    client
        .fetch(&resource, &inputs(json!({"q": "coffee shop", "limit": 5})))
        .await?;

    let url = &http.urls()[0];
    let (_, query) = url.split_once('?').unwrap();
    let keys: Vec<String> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, vec!["limit", "q", "dev_key", "sig"]);
    Ok(())
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let client = client(RefusingHttpSend);

    let resource = client.resource(Unscoped, "/locations");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_success_body() {
    let client = client(MockHttpSend::new(200, "<html></html>"));

    let resource = client.resource(Unscoped, "/locations");
    let err = client.fetch(&resource, &Inputs::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_every_call_is_a_fresh_request() -> Result<()> {
    let http = MockHttpSend::new(200, "{}");
    let client = client(http.clone());

    let resource = client.resource(Unscoped, "/locations");
    client.fetch(&resource, &Inputs::new()).await?;
    client.fetch(&resource, &Inputs::new()).await?;

    assert_eq!(http.urls().len(), 2);
    Ok(())
}
