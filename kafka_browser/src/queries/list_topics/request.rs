use crate::connection_settings::KafkaConnectionSettings;
use std::time::Duration;

#[derive(Debug)]
pub struct ListTopicsQueryInternal {
    pub connection_settings: KafkaConnectionSettings,
    pub metadata_timeout: Duration,
}
