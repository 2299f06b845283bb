use crate::connection_settings::KafkaConnectionSettings;
use crate::queries::peek_messages::{PeekLimit, StartFrom};
use std::time::Duration;

#[derive(Debug)]
pub struct PeekMessagesQueryInternal {
    pub connection_settings: KafkaConnectionSettings,
    pub topic: String,
    pub start_from: StartFrom,
    pub limit: PeekLimit,
    pub metadata_timeout: Duration,
}
