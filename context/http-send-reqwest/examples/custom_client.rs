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

use std::time::Duration;

use mashery_core::{Client, Config, Context, Inputs, OsEnv, PublicationScoped};
use mashery_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("mashery-example/1.0")
        .build()?;

    // Key and secret come from MASHERY_API_KEY and MASHERY_API_SECRET.
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);
    let client = Client::from_config(ctx, &Config::new())?;

    let mut inputs = Inputs::new();
    inputs.insert("publication-id".to_string(), 1.into());

    let kind = PublicationScoped::for_endpoint(client.endpoint());
    let locations = client.resource(kind, "/locations");

    match client.fetch(&locations, &inputs).await {
        Ok(body) => println!("{body:#}"),
        Err(e) if e.is_status_error() => eprintln!("service rejected the call: {e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
