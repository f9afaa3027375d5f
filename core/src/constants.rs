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

//! Names and defaults shared across the crate.

/// Env value holding the developer key.
pub const MASHERY_API_KEY: &str = "MASHERY_API_KEY";
/// Env value holding the shared secret.
pub const MASHERY_API_SECRET: &str = "MASHERY_API_SECRET";
/// Env value overriding [`DEFAULT_HOST`].
pub const MASHERY_API_HOST: &str = "MASHERY_API_HOST";
/// Env value overriding [`DEFAULT_VERSION`].
pub const MASHERY_API_VERSION: &str = "MASHERY_API_VERSION";

/// Host every resource URL is rooted at unless configured otherwise.
pub const DEFAULT_HOST: &str = "https://api.mashery.com";
/// Protocol version segment placed between the host and the resource path.
pub const DEFAULT_VERSION: &str = "v1";

/// Query parameter carrying the developer key.
pub const DEV_KEY: &str = "dev_key";
/// Query parameter carrying the signature.
pub const SIG: &str = "sig";

/// Reserved input naming the publication a request is scoped to.
pub const PUBLICATION_ID: &str = "publication-id";

/// Header carrying the service-side fault code.
pub const X_MASHERY_ERROR_CODE: &str = "x-mashery-error-code";
