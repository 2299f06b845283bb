use crate::consumer::{AutoOffsetReset, ConsumerWrapper, PartitionOffset};
use crate::queries::peek_messages::{
    PeekMessagesQueryInternal, PeekMessagesQueryInternalResponse, PeekOutcome, PeekedMessage,
    StartFrom,
};
use anyhow::{bail, Context};
use rdkafka::consumer::Consumer;
use rdkafka::error::KafkaError;
use rdkafka::message::BorrowedMessage;
use rdkafka::Message;
use std::collections::HashSet;
use std::time::Duration;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};
use uuid::Uuid;

#[tracing::instrument(skip_all)]
pub async fn peek_messages(
    query: PeekMessagesQueryInternal,
    cancellation_token: CancellationToken,
) -> Result<PeekMessagesQueryInternalResponse, anyhow::Error> {
    if query.limit.max_messages == 0 {
        return Ok(PeekMessagesQueryInternalResponse {
            messages: vec![],
            outcome: PeekOutcome::MessageLimit,
        });
    }

    let partitions_count = fetch_partitions_count(&query).await?;
    if partitions_count == 0 {
        bail!("Topic {} wasn't found", query.topic)
    }

    let offset_reset = match query.start_from {
        StartFrom::Beginning => AutoOffsetReset::Earliest,
        StartFrom::Latest => AutoOffsetReset::Latest,
    };
    let group = format!("kafka-browser-{}", Uuid::now_v7());
    let consumer =
        ConsumerWrapper::create_for_peeking(&query.connection_settings, &group, offset_reset)
            .context("While creating consumer")?;

    consumer
        .subscribe(&[&query.topic])
        .context("While subscribing to topic")?;

    debug!(
        "Peeking topic {} with {} partitions as group {}",
        query.topic, partitions_count, group
    );

    let deadline = tokio::time::Instant::now() + query.limit.max_wait;
    let mut messages = Vec::new();
    let mut eof_partitions = HashSet::new();

    let outcome = loop {
        let message_result = select! {
            message = consumer.recv() => message,
            _ = tokio::time::sleep_until(deadline) => break PeekOutcome::WaitTimeout,
            _ = cancellation_token.cancelled() => {
                info!("Peeking was cancelled");
                break PeekOutcome::Cancelled;
            }
        };

        match message_result {
            Ok(message) => {
                trace!(
                    "New message. Topic: '{}', partition: {}, offset: {}",
                    message.topic(),
                    message.partition(),
                    message.offset(),
                );

                messages.push(convert_message(&message));
                if messages.len() as u64 >= query.limit.max_messages {
                    break PeekOutcome::MessageLimit;
                }
            }
            Err(KafkaError::PartitionEOF(partition)) => {
                debug!("Partition {} of topic {} is exhausted", partition, query.topic);

                eof_partitions.insert(partition);
                if eof_partitions.len() >= partitions_count {
                    break PeekOutcome::EndOfTopic;
                }
            }
            Err(e) => {
                error!("Error while reading message from kafka consumer: {:?}", e);

                break PeekOutcome::BrokerError(
                    anyhow::Error::from(e).context("While reading message from consumer"),
                );
            }
        }
    };

    Ok(PeekMessagesQueryInternalResponse { messages, outcome })
}

async fn fetch_partitions_count(query: &PeekMessagesQueryInternal) -> Result<usize, anyhow::Error> {
    let settings = query.connection_settings.clone();
    let topic = query.topic.clone();
    let timeout = query.metadata_timeout;

    let handle = tokio::task::spawn_blocking(move || {
        let client = ConsumerWrapper::create_for_metadata(&settings)
            .context("While creating metadata client")?;

        client
            .get_topic_partitions_count(&topic, timeout)
            .context("While fetching partitions count")
    });

    handle.await.context("While joining blocking handle")?
}

fn convert_message(message: &BorrowedMessage<'_>) -> PeekedMessage {
    let milliseconds = message.timestamp().to_millis().unwrap_or(0).unsigned_abs();
    let timestamp = chrono::DateTime::UNIX_EPOCH + Duration::from_millis(milliseconds);

    PeekedMessage {
        partition_offset: PartitionOffset::new(message.partition(), message.offset()),
        timestamp,
        key: message_part_to_string(message.key_view::<[u8]>()),
        value: message_part_to_string(message.payload_view::<[u8]>()),
    }
}

fn message_part_to_string(part: Option<Result<&[u8], ()>>) -> Option<String> {
    let bytes = part?.ok()?;

    Some(String::from_utf8_lossy(bytes).to_string())
}
