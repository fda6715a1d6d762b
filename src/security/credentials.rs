//! Upload credential parsing and verification.

use std::collections::HashMap;

/// Secrets uploads are checked against.
///
/// Captured once at startup from `AUTH_USER`/`AUTH_PASS`. An unset
/// variable yields the empty string, which an uploaded empty credential
/// will match; this mirrors the deployment contract and is deliberately
/// not hardened here.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub user: String,
    pub password: String,
}

impl AuthConfig {
    /// Read the secrets from the process environment.
    pub fn from_env() -> Self {
        Self {
            user: std::env::var("AUTH_USER").unwrap_or_default(),
            password: std::env::var("AUTH_PASS").unwrap_or_default(),
        }
    }

    /// Compare an uploaded credential pair for exact equality. Absent
    /// values count as the empty string.
    pub fn matches(&self, user: Option<&str>, password: Option<&str>) -> bool {
        user.unwrap_or("") == self.user && password.unwrap_or("") == self.password
    }
}

/// Parse a `k1=v1;k2=v2;...` credential string into a map.
///
/// Segments without `=` are skipped. Each remaining segment splits on the
/// first `=` only, so values may themselves contain `=`. Duplicate keys
/// overwrite earlier ones. Malformed input never errors; absent keys
/// simply fail later lookups.
pub fn parse_credentials(input: &str) -> HashMap<String, String> {
    let mut creds = HashMap::new();
    for segment in input.split(';') {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        creds.insert(key.to_owned(), value.to_owned());
    }
    creds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_pairs() {
        let creds = parse_credentials("user=alice;password=secret");
        assert_eq!(creds.get("user").map(String::as_str), Some("alice"));
        assert_eq!(creds.get("password").map(String::as_str), Some("secret"));
        assert_eq!(creds.len(), 2);
    }

    #[test]
    fn skips_segments_without_equals() {
        let creds = parse_credentials("junk;user=alice;;more junk");
        assert_eq!(creds.len(), 1);
        assert_eq!(creds.get("user").map(String::as_str), Some("alice"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let creds = parse_credentials("password=a=b=c");
        assert_eq!(creds.get("password").map(String::as_str), Some("a=b=c"));
    }

    #[test]
    fn last_duplicate_key_wins() {
        let creds = parse_credentials("user=first;user=second");
        assert_eq!(creds.get("user").map(String::as_str), Some("second"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(parse_credentials("").is_empty());
    }

    #[test]
    fn matches_requires_both_values() {
        let auth = AuthConfig {
            user: "alice".into(),
            password: "secret".into(),
        };
        assert!(auth.matches(Some("alice"), Some("secret")));
        assert!(!auth.matches(Some("alice"), Some("wrong")));
        assert!(!auth.matches(None, Some("secret")));
        assert!(!auth.matches(Some("alice"), None));
    }

    #[test]
    fn empty_secrets_match_empty_credentials() {
        let auth = AuthConfig::default();
        assert!(auth.matches(None, None));
        assert!(auth.matches(Some(""), Some("")));
        assert!(!auth.matches(Some("anyone"), Some("")));
    }
}
