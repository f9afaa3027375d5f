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

//! Core components for calling Mashery-fronted resource APIs.
//!
//! This crate turns a logical resource call into a signed, scoped,
//! parameterized GET request, sends it through a pluggable transport, and
//! maps the response to parsed JSON or a typed error.
//!
//! ## Overview
//!
//! - **Context**: holds the [`HttpSend`] and [`Env`] implementations in use
//! - **ResourceKind**: how a kind of endpoint scopes and parameterizes its URL
//! - **RequestSigner**: appends `dev_key` and `sig` from a [`CredentialStore`]
//! - **Client**: composes, signs, sends and classifies
//!
//! ## Example
//!
//! ```no_run
//! use mashery_core::{Client, Context, Credential, CredentialStore, Inputs, PublicationScoped};
//! use serde_json::json;
//!
//! # async fn example() -> mashery_core::Result<()> {
//! let store = CredentialStore::with_credential(Credential::new("my-key", "my-secret"));
//! // Configure a real transport with `with_http_send`.
//! let client = Client::new(Context::new(), store);
//!
//! let locations = client.resource(PublicationScoped::new(), "/locations");
//! let inputs: Inputs = serde_json::from_value(json!({"publication-id": 42})).unwrap();
//!
//! let body = client.fetch(&locations, &inputs).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is an [`Error`] whose [`ErrorKind`] tells what went wrong.
//! Nothing is retried or swallowed.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod hash;
pub mod time;
pub mod url;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod config;
pub use config::{Config, Endpoint};
mod credential;
pub use credential::{Credential, CredentialStore};
mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, EnvCredentialProvider, ProvideCredential, ProvideCredentialChain,
    StaticCredentialProvider,
};
mod resource;
pub use resource::{PublicationScoped, Resource, ResourceKind, Unscoped};
mod signer;
pub use signer::{signature, RequestSigner};
mod classify;
pub use classify::classify;
mod client;
pub use client::Client;
pub use url::Inputs;
