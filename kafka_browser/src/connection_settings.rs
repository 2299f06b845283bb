use crate::consumer::SecurityProtocol;
use anyhow::bail;
use rdkafka::ClientConfig;

#[derive(Debug, Clone)]
pub struct KafkaConnectionSettings {
    pub brokers: Vec<String>,
    pub security_protocol: SecurityProtocol,
    pub retries: u32,
}

impl KafkaConnectionSettings {
    pub fn new(brokers: Vec<String>, security_protocol: SecurityProtocol, retries: u32) -> Self {
        Self {
            brokers,
            security_protocol,
            retries,
        }
    }
}

impl TryFrom<&KafkaConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &KafkaConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.brokers.join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("security.protocol", value.security_protocol.to_string());

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_brokers_are_rejected() {
        let settings = KafkaConnectionSettings::new(vec![], SecurityProtocol::Plaintext, 0);

        let result = ClientConfig::try_from(&settings);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No brokers specified"));
    }

    #[test]
    fn brokers_are_joined_in_input_order() {
        let settings = KafkaConnectionSettings::new(
            vec!["b:9093".to_owned(), "a:9092".to_owned()],
            SecurityProtocol::Plaintext,
            0,
        );

        let config = ClientConfig::try_from(&settings).unwrap();

        assert_eq!(config.get("bootstrap.servers"), Some("b:9093,a:9092"));
        assert_eq!(config.get("security.protocol"), Some("plaintext"));
    }

    #[test]
    fn ssl_protocol_is_applied() {
        let settings = KafkaConnectionSettings::new(
            vec!["localhost:9092".to_owned()],
            SecurityProtocol::Ssl,
            0,
        );

        let config = ClientConfig::try_from(&settings).unwrap();

        assert_eq!(config.get("security.protocol"), Some("ssl"));
    }
}
