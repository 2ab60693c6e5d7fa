use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivatorConfig {
    /// Southbound activation endpoint
    #[serde(default = "default_southbound_url")]
    pub southbound_url: String,

    /// Log level (trace, debug, info, warn, error), used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report ERROR instead of UNKNOWN when the southbound call gets no response
    #[serde(default)]
    pub distinguish_transport_errors: bool,
}

fn default_southbound_url() -> String {
    "https://o334q.wiremockapi.cloud/activate".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ActivatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("PIN_ACTIVATOR"))
            .build()?
            .try_deserialize()
    }
}
