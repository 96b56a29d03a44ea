//! Provider credential loading and format checks.
//!
//! Credentials come from environment-style key/value pairs. A provider is
//! usable only when every required field is present and passes its format
//! check; anything else routes the resolver to the fallback/mock path
//! rather than a crash. Loaders accept a lookup closure so tests can supply
//! credentials without mutating the process environment.

use std::env;
use std::net::IpAddr;

use crate::config::constants::MIN_API_KEY_LEN;

/// Credentials for the Namecheap batch availability API.
#[derive(Debug, Clone)]
pub struct NamecheapCredentials {
    pub api_user: String,
    pub api_key: String,
    pub username: String,
    pub client_ip: String,
    /// Use the sandbox endpoint instead of production.
    pub sandbox: bool,
}

impl NamecheapCredentials {
    /// Loads credentials from the process environment.
    ///
    /// Required keys: `NAMECHEAP_API_USER`, `NAMECHEAP_API_KEY`,
    /// `NAMECHEAP_CLIENT_IP`. `NAMECHEAP_USERNAME` defaults to the API user
    /// and `NAMECHEAP_SANDBOX=true` selects the sandbox endpoint.
    ///
    /// Returns `None` when any required key is absent or malformed.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads credentials through a key lookup function.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_user = non_empty(lookup("NAMECHEAP_API_USER")?)?;
        let api_key = lookup("NAMECHEAP_API_KEY")?;
        if api_key.len() < MIN_API_KEY_LEN {
            log::warn!("NAMECHEAP_API_KEY fails the length check; treating Namecheap as unusable");
            return None;
        }
        let client_ip = lookup("NAMECHEAP_CLIENT_IP")?;
        if client_ip.parse::<IpAddr>().is_err() {
            log::warn!("NAMECHEAP_CLIENT_IP is not a valid IP address; treating Namecheap as unusable");
            return None;
        }
        let username = lookup("NAMECHEAP_USERNAME")
            .and_then(non_empty)
            .unwrap_or_else(|| api_user.clone());
        let sandbox = lookup("NAMECHEAP_SANDBOX")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Some(Self {
            api_user,
            api_key,
            username,
            client_ip,
            sandbox,
        })
    }
}

/// Credentials for the GoDaddy availability API.
#[derive(Debug, Clone)]
pub struct GodaddyCredentials {
    pub api_key: String,
    pub api_secret: String,
    /// Use the OTE (test) endpoint instead of production.
    pub ote: bool,
}

impl GodaddyCredentials {
    /// Loads credentials from the process environment.
    ///
    /// Required keys: `GODADDY_API_KEY`, `GODADDY_API_SECRET`.
    /// `GODADDY_OTE=true` selects the test environment.
    ///
    /// Returns `None` when any required key is absent or malformed.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads credentials through a key lookup function.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GODADDY_API_KEY")?;
        if api_key.len() < MIN_API_KEY_LEN {
            log::warn!("GODADDY_API_KEY fails the length check; treating GoDaddy as unusable");
            return None;
        }
        let api_secret = non_empty(lookup("GODADDY_API_SECRET")?)?;
        let ote = lookup("GODADDY_OTE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Some(Self {
            api_key,
            api_secret,
            ote,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_namecheap_complete_credentials() {
        let creds = NamecheapCredentials::from_lookup(lookup_from(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "abcdef0123456789"),
            ("NAMECHEAP_CLIENT_IP", "203.0.113.7"),
        ]))
        .expect("credentials should load");
        assert_eq!(creds.api_user, "alice");
        // Username falls back to the API user when unset
        assert_eq!(creds.username, "alice");
        assert!(!creds.sandbox);
    }

    #[test]
    fn test_namecheap_missing_key_is_unusable() {
        assert!(NamecheapCredentials::from_lookup(lookup_from(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_CLIENT_IP", "203.0.113.7"),
        ]))
        .is_none());
    }

    #[test]
    fn test_namecheap_short_key_fails_format_check() {
        assert!(NamecheapCredentials::from_lookup(lookup_from(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "short"),
            ("NAMECHEAP_CLIENT_IP", "203.0.113.7"),
        ]))
        .is_none());
    }

    #[test]
    fn test_namecheap_bad_client_ip_fails_format_check() {
        assert!(NamecheapCredentials::from_lookup(lookup_from(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "abcdef0123456789"),
            ("NAMECHEAP_CLIENT_IP", "not-an-ip"),
        ]))
        .is_none());
    }

    #[test]
    fn test_namecheap_sandbox_flag() {
        let creds = NamecheapCredentials::from_lookup(lookup_from(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "abcdef0123456789"),
            ("NAMECHEAP_CLIENT_IP", "203.0.113.7"),
            ("NAMECHEAP_SANDBOX", "TRUE"),
        ]))
        .unwrap();
        assert!(creds.sandbox);
    }

    #[test]
    fn test_godaddy_complete_credentials() {
        let creds = GodaddyCredentials::from_lookup(lookup_from(&[
            ("GODADDY_API_KEY", "dLDk3skw9dka_2sk"),
            ("GODADDY_API_SECRET", "s3cr3tv4lue"),
        ]))
        .expect("credentials should load");
        assert_eq!(creds.api_secret, "s3cr3tv4lue");
        assert!(!creds.ote);
    }

    #[test]
    fn test_godaddy_short_key_fails_format_check() {
        assert!(GodaddyCredentials::from_lookup(lookup_from(&[
            ("GODADDY_API_KEY", "tiny"),
            ("GODADDY_API_SECRET", "s3cr3tv4lue"),
        ]))
        .is_none());
    }

    #[test]
    fn test_godaddy_empty_secret_is_unusable() {
        assert!(GodaddyCredentials::from_lookup(lookup_from(&[
            ("GODADDY_API_KEY", "dLDk3skw9dka_2sk"),
            ("GODADDY_API_SECRET", "   "),
        ]))
        .is_none());
    }
}
