use crate::types::Config;
use crate::utils::send_request;
use crate::errors::LookupError;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// Resolves the caller's externally visible address through the echo service.
#[derive(Clone)]
pub struct PublicIp {
    client: Client,
    config: Arc<Config>,
}

impl PublicIp {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn fetch(&self) -> Result<String, LookupError> {
        let body = send_request(&self.client, &self.config.ip_echo_url, &[], &[]).await?;
        extract_ip(&body)
    }
}

/// Reads the `ip` field of an echo response. Empty strings count as missing.
pub fn extract_ip(body: &Value) -> Result<String, LookupError> {
    body.get("ip")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_owned)
        .ok_or(LookupError::MissingIp)
}
