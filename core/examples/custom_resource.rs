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

use async_trait::async_trait;
use bytes::Bytes;
use mashery_core::url::{append_query, parameterize, scope_value, Inputs};
use mashery_core::{Client, Context, Credential, CredentialStore, HttpSend, ResourceKind, Result};
use serde_json::json;

// A resource scoped by region through a query parameter instead of the path.
#[derive(Debug)]
struct RegionScoped;

impl ResourceKind for RegionScoped {
    fn scope(&self, url: &str, inputs: &Inputs) -> String {
        match scope_value(inputs, "region") {
            // Already scoped, nothing to do.
            Some(_) if url.contains("scope=region") => url.to_string(),
            Some(region) => append_query(url, [("scope", "region"), ("in", region.as_ref())]),
            None => url.to_string(),
        }
    }

    fn parameterize(&self, url: &str, inputs: &Inputs) -> String {
        let rest: Inputs = inputs
            .iter()
            .filter(|(k, _)| k.as_str() != "region")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        parameterize(url, &rest)
    }
}

// Echo the requested URL back instead of going to the network.
#[derive(Debug)]
struct EchoHttpSend;

#[async_trait]
impl HttpSend for EchoHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let body = json!({ "url": req.uri().to_string() }).to_string();
        Ok(http::Response::new(Bytes::from(body)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_http_send(EchoHttpSend);
    let store = CredentialStore::with_credential(Credential::new("demo-key", "demo-secret"));
    let client = Client::new(ctx, store);

    let stores = client.resource(RegionScoped, "/stores");
    let inputs: Inputs = serde_json::from_value(json!({"region": "emea", "open": true}))?;

    match client.fetch(&stores, &inputs).await {
        Ok(body) => println!("fetched: {body}"),
        Err(e) => eprintln!("fetch failed: {e}"),
    }

    Ok(())
}
