use std::time::Duration;

pub const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_LOOKUP_URL: &str = "https://api.api-aries.online/v1/lookup/iplookup/";
pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps";

#[derive(Debug, Clone)]
pub struct Config {
    pub ip_echo_url: String,
    pub lookup_url: String,
    pub maps_url: String,
    /// Sent as the `Type` header when set.
    pub token_type: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_echo_url: DEFAULT_IP_ECHO_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            maps_url: DEFAULT_MAPS_URL.to_string(),
            token_type: None,
            timeout: None,
        }
    }
}
