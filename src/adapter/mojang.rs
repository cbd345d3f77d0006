//! Mojang profile lookup adapter.
//!
//! Implements [`IdentityVerifier`] against
//! `GET /users/profiles/minecraft/{username}`. A recognized name returns a
//! JSON profile carrying an `id` field; unknown names return 404 (or 204 on
//! older deployments). Transport failures and unexpected statuses resolve
//! to "not recognized" rather than an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::IdentityConfig;
use crate::error::Result;
use crate::port::IdentityVerifier;

#[derive(Debug, Deserialize)]
struct Profile {
    id: String,
    name: String,
}

pub struct MojangVerifier {
    client: Client,
    base_url: String,
}

impl MojangVerifier {
    /// Build a verifier with a bounded per-request timeout.
    pub fn new(config: &IdentityConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn lookup(&self, name: &str) -> Option<Profile> {
        let url = format!("{}/users/profiles/minecraft/{}", self.base_url, name);
        debug!(url = %url, "Identity lookup");

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(name = %name, error = %e, "Identity lookup failed, treating as unknown");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(name = %name, status = %response.status(), "Identity provider does not recognize name");
            return None;
        }

        match response.json::<Profile>().await {
            Ok(profile) if !profile.id.is_empty() => Some(profile),
            Ok(_) => None,
            Err(e) => {
                warn!(name = %name, error = %e, "Malformed identity response, treating as unknown");
                None
            }
        }
    }
}

#[async_trait]
impl IdentityVerifier for MojangVerifier {
    async fn canonical_name(&self, name: &str) -> Option<String> {
        self.lookup(name).await.map(|profile| profile.name)
    }
}
