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

use anyhow::Result;
use mashery::{ErrorKind, Inputs, PublicationScoped};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = mashery::default_client()?;
    let kind = PublicationScoped::for_endpoint(client.endpoint());
    let locations = client.resource(kind, "/locations");

    let inputs: Inputs = serde_json::from_value(json!({
        "publication-id": 1,
        "limit": 10,
    }))?;

    match client.fetch(&locations, &inputs).await {
        Ok(body) => println!("{body:#}"),
        Err(e) => match e.kind() {
            ErrorKind::Signature => eprintln!("set MASHERY_API_KEY and MASHERY_API_SECRET first"),
            ErrorKind::Query => eprintln!("query rejected: {:?}", e.payload()),
            ErrorKind::Service => eprintln!("service fault, code {:?}", e.code()),
            _ => return Err(e.into()),
        },
    }

    Ok(())
}
