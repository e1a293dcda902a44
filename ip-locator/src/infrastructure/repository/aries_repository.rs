use iplookup_rs::IpLookup;
use serde_json::Value;

use crate::config::AppConfig;
use crate::domain::{errors::AppError, ports::geolocation::GeolocationRepository};

/// Geolocation backed by the api-aries IP lookup API and the ipify echo service.
#[derive(Clone)]
pub struct AriesRepository {
    lookup: IpLookup,
}

impl AriesRepository {
    pub fn new(config: &AppConfig) -> Result<Self, iplookup_rs::LookupError> {
        let lookup = IpLookup::init(&config.api_token, Some(config.lookup_config()))?;
        Ok(Self { lookup })
    }
}

impl GeolocationRepository for AriesRepository {
    async fn public_ip(&self) -> Result<String, AppError> {
        self.lookup.public_ip.fetch().await.map_err(AppError::PublicIp)
    }

    async fn locate(&self, ip: &str) -> Result<Value, AppError> {
        self.lookup.lookup(ip).await.map_err(AppError::Lookup)
    }
}
