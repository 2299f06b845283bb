use crate::consumer::PartitionOffset;
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct PeekMessagesQueryInternalResponse {
    pub messages: Vec<PeekedMessage>,
    pub outcome: PeekOutcome,
}

#[derive(Debug)]
pub struct PeekedMessage {
    pub partition_offset: PartitionOffset,
    pub timestamp: DateTime<Utc>,
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug)]
pub enum PeekOutcome {
    MessageLimit,
    WaitTimeout,
    EndOfTopic,
    Cancelled,
    BrokerError(anyhow::Error),
}
