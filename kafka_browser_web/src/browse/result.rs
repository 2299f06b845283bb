use chrono::{DateTime, Utc};
use kafka_browser::queries::peek_messages::PeekedMessage;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResult {
    pub brokers: Option<String>,
    pub topic: Option<String>,
    pub errors: Vec<String>,
    pub messages: Vec<MessageDto>,
    pub available_topics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub key: Option<String>,
    pub value: Option<String>,
    pub partition: i32,
    pub offset: i64,
    pub timestamp: DateTime<Utc>,
}

impl From<PeekedMessage> for MessageDto {
    fn from(value: PeekedMessage) -> Self {
        Self {
            key: value.key,
            value: value.value,
            partition: *value.partition_offset.partition(),
            offset: *value.partition_offset.offset(),
            timestamp: value.timestamp,
        }
    }
}
