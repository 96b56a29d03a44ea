//! Primary registrar adapter: the Namecheap batch availability API.
//!
//! One `namecheap.domains.check` call covers a whole batch of candidates.
//! The response is XML with one self-closing `DomainCheckResult` element
//! per domain; the attributes are scanned directly rather than running a
//! full XML parse, which is all the fixed response shape needs.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;

use super::{AvailabilityProvider, ProviderKind};
use crate::candidates::Candidate;
use crate::config::{NamecheapCredentials, MAX_PROVIDER_BATCH};
use crate::error_handling::{categorize_reqwest_error, ProviderError};

const PRODUCTION_URL: &str = "https://api.namecheap.com/xml.response";
const SANDBOX_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

/// Namecheap API error numbers that indicate bad credentials or an
/// unwhitelisted client IP, per the upstream error catalogue.
const AUTH_ERROR_NUMBERS: &[&str] = &["1010101", "1010102", "1010104", "1011102", "1011150"];

/// Primary registrar provider: Namecheap `domains.check`.
pub struct NamecheapProvider {
    client: Arc<reqwest::Client>,
    credentials: Option<NamecheapCredentials>,
}

impl NamecheapProvider {
    /// Creates the provider; `credentials: None` makes it unusable.
    pub fn new(client: Arc<reqwest::Client>, credentials: Option<NamecheapCredentials>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn endpoint(credentials: &NamecheapCredentials) -> &'static str {
        if credentials.sandbox {
            SANDBOX_URL
        } else {
            PRODUCTION_URL
        }
    }

    async fn check_chunk(
        &self,
        credentials: &NamecheapCredentials,
        chunk: &[Candidate],
        tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        let domain_list = chunk
            .iter()
            .map(|c| c.fqdn(tld))
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(Self::endpoint(credentials))
            .query(&[
                ("ApiUser", credentials.api_user.as_str()),
                ("ApiKey", credentials.api_key.as_str()),
                ("UserName", credentials.username.as_str()),
                ("ClientIp", credentials.client_ip.as_str()),
                ("Command", "namecheap.domains.check"),
                ("DomainList", domain_list.as_str()),
            ])
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status = response.status();
        match status.as_u16() {
            crate::config::HTTP_STATUS_UNAUTHORIZED | crate::config::HTTP_STATUS_FORBIDDEN => {
                return Err(ProviderError::Unauthorized(format!(
                    "Namecheap returned HTTP {status}"
                )));
            }
            crate::config::HTTP_STATUS_TOO_MANY_REQUESTS => {
                return Err(ProviderError::RateLimited(format!(
                    "Namecheap returned HTTP {status}"
                )));
            }
            _ if !status.is_success() => {
                return Err(ProviderError::NetworkError(format!(
                    "Namecheap returned HTTP {status}"
                )));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(categorize_reqwest_error)?;
        parse_check_response(&body)
    }
}

#[async_trait]
impl AvailabilityProvider for NamecheapProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Namecheap
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
            .ok_or(ProviderError::CredentialsMissing("Namecheap"))?;

        // Batches over the provider limit go out as sequential chunks; a
        // failing chunk fails the whole attempt (all-or-nothing)
        let mut availability = HashMap::new();
        for chunk in candidates.chunks(MAX_PROVIDER_BATCH) {
            availability.extend(self.check_chunk(credentials, chunk, tld).await?);
        }
        Ok(availability)
    }
}

fn domain_result_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<DomainCheckResult\s+([^>]+?)/?>").expect("static regex must compile")
    })
}

fn attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(\w+)="([^"]*)""#).expect("static regex must compile"))
}

fn error_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<Error\s+Number="([^"]+)"[^>]*>([^<]*)</Error>"#)
            .expect("static regex must compile")
    })
}

/// Parses a `namecheap.domains.check` XML response into per-candidate
/// availability, keyed by the bare name (TLD stripped).
///
/// `Status="ERROR"` responses with a credentials/IP error number map to
/// [`ProviderError::Unauthorized`]; other API errors and responses without
/// any `DomainCheckResult` element are malformed and fall through the
/// chain.
fn parse_check_response(xml: &str) -> Result<HashMap<String, bool>, ProviderError> {
    if xml.contains(r#"Status="ERROR""#) {
        if let Some(captures) = error_re().captures(xml) {
            let number = &captures[1];
            let message = captures[2].trim().to_string();
            if AUTH_ERROR_NUMBERS.contains(&number)
                || message.to_lowercase().contains("api key")
                || message.to_lowercase().contains("invalid request ip")
            {
                return Err(ProviderError::Unauthorized(format!(
                    "Namecheap error {number}: {message}"
                )));
            }
            return Err(ProviderError::MalformedResponse(format!(
                "Namecheap error {number}: {message}"
            )));
        }
        return Err(ProviderError::MalformedResponse(
            "Namecheap returned an error status without error details".into(),
        ));
    }

    let mut availability = HashMap::new();
    for element in domain_result_re().captures_iter(xml) {
        let mut domain = None;
        let mut available = None;
        for attr in attr_re().captures_iter(&element[1]) {
            match &attr[1] {
                "Domain" => domain = Some(attr[2].to_string()),
                "Available" => available = Some(attr[2].eq_ignore_ascii_case("true")),
                _ => {}
            }
        }
        if let (Some(domain), Some(available)) = (domain, available) {
            // Key by the bare name; the caller supplied the TLD
            let name = domain.split('.').next().unwrap_or(&domain).to_string();
            availability.insert(name, available);
        }
    }

    if availability.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "expected DomainCheckResult elements were absent".into(),
        ));
    }
    Ok(availability)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <CommandResponse Type="namecheap.domains.check">
    <DomainCheckResult Domain="fittrack.com" Available="false" ErrorNo="0" Description="" IsPremiumName="false" />
    <DomainCheckResult Domain="trailforge.com" Available="true" ErrorNo="0" Description="" IsPremiumName="false" />
  </CommandResponse>
</ApiResponse>"#;

    #[test]
    fn test_parse_ok_response() {
        let availability = parse_check_response(OK_RESPONSE).unwrap();
        assert_eq!(availability.get("fittrack"), Some(&false));
        assert_eq!(availability.get("trailforge"), Some(&true));
        assert_eq!(availability.len(), 2);
    }

    #[test]
    fn test_parse_tolerates_attribute_order() {
        let xml = r#"<ApiResponse Status="OK"><CommandResponse>
            <DomainCheckResult Available="true" ErrorNo="0" Domain="nestkit.com" />
        </CommandResponse></ApiResponse>"#;
        let availability = parse_check_response(xml).unwrap();
        assert_eq!(availability.get("nestkit"), Some(&true));
    }

    #[test]
    fn test_parse_auth_error_maps_to_unauthorized() {
        let xml = r#"<ApiResponse Status="ERROR">
            <Errors><Error Number="1011102">API Key is invalid or API access has not been enabled</Error></Errors>
        </ApiResponse>"#;
        match parse_check_response(xml) {
            Err(ProviderError::Unauthorized(msg)) => {
                assert!(msg.contains("1011102"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_api_error_is_malformed() {
        let xml = r#"<ApiResponse Status="ERROR">
            <Errors><Error Number="2030280">TLD is not supported</Error></Errors>
        </ApiResponse>"#;
        assert!(matches!(
            parse_check_response(xml),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_missing_results_is_malformed() {
        let xml = r#"<ApiResponse Status="OK"><CommandResponse /></ApiResponse>"#;
        assert!(matches!(
            parse_check_response(xml),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_provider_without_credentials_is_unusable() {
        let client = Arc::new(reqwest::Client::new());
        let provider = NamecheapProvider::new(client, None);
        assert!(!provider.is_usable());
        assert_eq!(provider.kind(), ProviderKind::Namecheap);
    }
}
