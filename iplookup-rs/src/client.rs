use crate::errors::LookupError;
use crate::location::attach_maps_link;
use crate::public_ip::PublicIp;
use crate::types::Config;
use crate::utils::send_request;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct IpLookup {
    pub token: String,
    pub config: Arc<Config>,
    pub public_ip: PublicIp,
    client: Client,
}

impl IpLookup {
    pub fn init(token: &str, config: Option<Config>) -> Result<Self, LookupError> {
        let config = Arc::new(config.unwrap_or_default());

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            token: token.to_string(),
            public_ip: PublicIp::new(client.clone(), config.clone()),
            config,
            client,
        })
    }

    /// Looks up `ip` and returns the response with a map link attached when possible.
    pub async fn lookup(&self, ip: &str) -> Result<Value, LookupError> {
        let mut headers = vec![("APITOKEN", self.token.as_str())];
        if let Some(token_type) = self.config.token_type.as_deref() {
            headers.push(("Type", token_type));
        }

        let mut data = send_request(
            &self.client,
            &self.config.lookup_url,
            &[("ip", ip)],
            &headers,
        )
        .await?;
        if matches!(data, Value::Null | Value::Bool(_) | Value::Number(_)) {
            return Err(LookupError::Other(format!(
                "expected a JSON object from the lookup API, got `{data}`"
            )));
        }
        attach_maps_link(&mut data, &self.config.maps_url);
        Ok(data)
    }
}
