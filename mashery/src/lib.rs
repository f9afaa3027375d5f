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

//! Call Mashery-fronted resource APIs without effort.
//!
//! This crate re-exports [`mashery_core`] and, with the `default-context`
//! feature (on by default), wires in a reqwest transport and the OS
//! environment.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> mashery::Result<()> {
//! use mashery::{Inputs, PublicationScoped};
//!
//! // Reads MASHERY_API_KEY, MASHERY_API_SECRET and friends.
//! let client = mashery::default_client()?;
//! let locations = client.resource(PublicationScoped::new(), "/locations");
//!
//! let body = client.fetch(&locations, &Inputs::new()).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

pub use mashery_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_client, default_context};
