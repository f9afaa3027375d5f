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

use mashery_core::{Client, Config, Context, OsEnv, Result};
use mashery_http_send_reqwest::ReqwestHttpSend;

/// Create a context using reqwest for HTTP and the OS for env values.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(reqwest::Client::new()))
        .with_env(OsEnv)
}

/// Create a client over [`default_context`], configured from env.
///
/// Missing credentials are not an error here: the first `fetch` fails with
/// [`mashery_core::ErrorKind::Signature`] instead.
pub fn default_client() -> Result<Client> {
    Client::from_config(default_context(), &Config::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mashery_core::constants::*;
    use mashery_core::{Credential, ErrorKind};

    #[test]
    fn test_default_client_reads_env() {
        temp_env::with_vars(
            [
                (MASHERY_API_KEY, Some("env_key")),
                (MASHERY_API_SECRET, Some("env_secret")),
                (MASHERY_API_HOST, Some("https://example.com")),
                (MASHERY_API_VERSION, None),
            ],
            || {
                let client = default_client().expect("client must build");
                assert_eq!(
                    client.endpoint().root(),
                    format!("https://example.com/{DEFAULT_VERSION}")
                );
                assert_eq!(
                    client.store().credential().unwrap(),
                    Credential::new("env_key", "env_secret")
                );
            },
        );
    }

    #[test]
    fn test_default_client_without_env() {
        temp_env::with_vars_unset(
            [
                MASHERY_API_KEY,
                MASHERY_API_SECRET,
                MASHERY_API_HOST,
                MASHERY_API_VERSION,
            ],
            || {
                let client = default_client().expect("client must build");
                assert_eq!(
                    client.endpoint().root(),
                    format!("{DEFAULT_HOST}/{DEFAULT_VERSION}")
                );
                let err = client.store().credential().unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Signature);
            },
        );
    }

    #[test]
    fn test_default_client_rejects_empty_host() {
        temp_env::with_var(MASHERY_API_HOST, Some(""), || {
            let err = default_client().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        });
    }
}
