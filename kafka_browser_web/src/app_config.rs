use anyhow::Context;
use config::Config;
use kafka_browser::consumer::SecurityProtocol;
use kafka_browser::queries::peek_messages::PeekLimit;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub kafka: KafkaConfig,
}

#[derive(Deserialize, Debug)]
pub struct KafkaConfig {
    #[serde(default)]
    pub security_protocol: SecurityProtocol,
    #[serde(default)]
    pub retries: u32,
    #[serde(default = "default_peek_max_messages")]
    pub peek_max_messages: u64,
    #[serde(default = "default_peek_max_wait_ms")]
    pub peek_max_wait_ms: u64,
    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("appsettings"))
            .add_source(config::Environment::with_prefix("App").separator("__"))
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }
}

impl KafkaConfig {
    pub fn peek_limit(&self) -> PeekLimit {
        PeekLimit {
            max_messages: self.peek_max_messages,
            max_wait: Duration::from_millis(self.peek_max_wait_ms),
        }
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_millis(self.metadata_timeout_ms)
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            security_protocol: SecurityProtocol::default(),
            retries: 0,
            peek_max_messages: default_peek_max_messages(),
            peek_max_wait_ms: default_peek_max_wait_ms(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
        }
    }
}

fn default_peek_max_messages() -> u64 {
    100
}

fn default_peek_max_wait_ms() -> u64 {
    3000
}

fn default_metadata_timeout_ms() -> u64 {
    5000
}
