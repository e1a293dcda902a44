use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use iplookup_rs::types::{DEFAULT_IP_ECHO_URL, DEFAULT_LOOKUP_URL, DEFAULT_MAPS_URL};
use serde::Deserialize;

const ENV_PREFIX: &str = "IPLOCATOR";

const DEFAULT_CONFIG_FILE: &str = "ip-locator";

// Placeholder credential; see https://support.api-aries.online/hc/articles/1/3/8/ip-lookup-api
const DEFAULT_API_TOKEN: &str = "111-111-111-111";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_token: String,
    pub token_type: Option<String>,
    pub ip_echo_url: String,
    pub lookup_url: String,
    pub maps_url: String,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Layers defaults, then the config file, then `IPLOCATOR_*` environment variables.
    ///
    /// Without an explicit `path`, `ip-locator.toml` in the working directory is
    /// read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::layered(file, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn layered<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        Self::builder()?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api_token", DEFAULT_API_TOKEN)?
            .set_default("ip_echo_url", DEFAULT_IP_ECHO_URL)?
            .set_default("lookup_url", DEFAULT_LOOKUP_URL)?
            .set_default("maps_url", DEFAULT_MAPS_URL)
    }

    pub fn lookup_config(&self) -> iplookup_rs::Config {
        iplookup_rs::Config {
            ip_echo_url: self.ip_echo_url.clone(),
            lookup_url: self.lookup_url.clone(),
            maps_url: self.maps_url.clone(),
            token_type: self.token_type.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
