//! Calendar backend configuration.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use integration_gcal::{DEFAULT_BASE_URL, GcalConfig};

/// Google Calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarAppConfig {
    /// API base URL (overridable for tests and proxies)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Calendar to book into
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// Pre-obtained OAuth bearer token
    ///
    /// Never serialized back out; absent means the calendar integration
    /// cannot start.
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for CalendarAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            calendar_id: default_calendar_id(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CalendarAppConfig {
    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_gcal_config(&self) -> GcalConfig {
        GcalConfig {
            base_url: self.base_url.clone(),
            calendar_id: self.calendar_id.clone(),
            access_token: self
                .access_token
                .clone()
                .unwrap_or_else(|| SecretString::from(String::new())),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn calendar_config_default() {
        let config = CalendarAppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.calendar_id, "primary");
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn calendar_config_deserialize() {
        let json = r#"{"calendar_id":"team@example.com","access_token":"ya29.token","timeout_secs":10}"#;
        let config: CalendarAppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.calendar_id, "team@example.com");
        assert_eq!(
            config.access_token.as_ref().unwrap().expose_secret(),
            "ya29.token"
        );
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn access_token_is_never_serialized() {
        let config = CalendarAppConfig {
            access_token: Some(SecretString::from("ya29.secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("access_token"));
    }

    #[test]
    fn to_gcal_config_copies_fields() {
        let config = CalendarAppConfig {
            base_url: "http://localhost:9999".to_string(),
            calendar_id: "team".to_string(),
            access_token: Some(SecretString::from("tok")),
            timeout_secs: 5,
        };
        let gcal = config.to_gcal_config();
        assert_eq!(gcal.base_url, "http://localhost:9999");
        assert_eq!(gcal.calendar_id, "team");
        assert_eq!(gcal.access_token.expose_secret(), "tok");
        assert_eq!(gcal.timeout_secs, 5);
    }

    #[test]
    fn to_gcal_config_with_missing_token_is_empty() {
        let gcal = CalendarAppConfig::default().to_gcal_config();
        assert!(gcal.access_token.expose_secret().is_empty());
    }
}
