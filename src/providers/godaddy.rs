//! Secondary registrar adapter: the GoDaddy availability API.
//!
//! Same capability contract as the primary, different wire format: a JSON
//! array of fully-qualified names POSTed to `/v1/domains/available`, with
//! an `sso-key` authorization header.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{AvailabilityProvider, ProviderKind};
use crate::candidates::Candidate;
use crate::config::{GodaddyCredentials, MAX_PROVIDER_BATCH};
use crate::error_handling::{categorize_reqwest_error, ProviderError};

const PRODUCTION_URL: &str = "https://api.godaddy.com/v1/domains/available";
const OTE_URL: &str = "https://api.ote-godaddy.com/v1/domains/available";

#[derive(Debug, Deserialize)]
struct AvailableResponse {
    domains: Vec<DomainAvailability>,
}

#[derive(Debug, Deserialize)]
struct DomainAvailability {
    domain: String,
    available: bool,
}

/// Secondary registrar provider: GoDaddy bulk availability.
pub struct GodaddyProvider {
    client: Arc<reqwest::Client>,
    credentials: Option<GodaddyCredentials>,
}

impl GodaddyProvider {
    /// Creates the provider; `credentials: None` makes it unusable.
    pub fn new(client: Arc<reqwest::Client>, credentials: Option<GodaddyCredentials>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn endpoint(credentials: &GodaddyCredentials) -> &'static str {
        if credentials.ote {
            OTE_URL
        } else {
            PRODUCTION_URL
        }
    }

    async fn check_chunk(
        &self,
        credentials: &GodaddyCredentials,
        chunk: &[Candidate],
        tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        let fqdns: Vec<String> = chunk.iter().map(|c| c.fqdn(tld)).collect();

        let response = self
            .client
            .post(Self::endpoint(credentials))
            .query(&[("checkType", "FAST")])
            .header(
                reqwest::header::AUTHORIZATION,
                format!(
                    "sso-key {}:{}",
                    credentials.api_key, credentials.api_secret
                ),
            )
            .json(&fqdns)
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status = response.status();
        match status.as_u16() {
            crate::config::HTTP_STATUS_UNAUTHORIZED | crate::config::HTTP_STATUS_FORBIDDEN => {
                return Err(ProviderError::Unauthorized(format!(
                    "GoDaddy returned HTTP {status}"
                )));
            }
            crate::config::HTTP_STATUS_TOO_MANY_REQUESTS => {
                return Err(ProviderError::RateLimited(format!(
                    "GoDaddy returned HTTP {status}"
                )));
            }
            _ if !status.is_success() => {
                return Err(ProviderError::NetworkError(format!(
                    "GoDaddy returned HTTP {status}"
                )));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(categorize_reqwest_error)?;
        parse_available_response(&body)
    }
}

#[async_trait]
impl AvailabilityProvider for GodaddyProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Godaddy
    }

    fn is_usable(&self) -> bool {
        self.credentials.is_some()
    }

    async fn check_batch(
        &self,
        candidates: &[Candidate],
        tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProviderError::CredentialsMissing("GoDaddy"))?;

        let mut availability = HashMap::new();
        for chunk in candidates.chunks(MAX_PROVIDER_BATCH) {
            availability.extend(self.check_chunk(credentials, chunk, tld).await?);
        }
        Ok(availability)
    }
}

/// Parses a bulk availability response into per-candidate availability,
/// keyed by the bare name (TLD stripped). A body without the expected
/// `domains` array is malformed.
fn parse_available_response(body: &str) -> Result<HashMap<String, bool>, ProviderError> {
    let parsed: AvailableResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::MalformedResponse(format!("expected domains array: {e}"))
    })?;

    Ok(parsed
        .domains
        .into_iter()
        .map(|entry| {
            let name = entry
                .domain
                .split('.')
                .next()
                .unwrap_or(&entry.domain)
                .to_string();
            (name, entry.available)
        })
        .collect())
}
