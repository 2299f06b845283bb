use crate::consumer::ConsumerWrapper;
use crate::queries::list_topics::request::ListTopicsQueryInternal;
use crate::queries::list_topics::response::{
    KafkaTopicMetadata, ListTopicsQueryInternalResponse,
};
use anyhow::{anyhow, Context};
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use tracing::debug;

#[tracing::instrument(skip_all)]
pub async fn list_topics(
    query: ListTopicsQueryInternal,
) -> Result<ListTopicsQueryInternalResponse, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let mut last_error = None;

        for attempt in 0..=query.connection_settings.retries {
            if attempt > 0 {
                debug!(
                    "Listing topics, retry {} of {}",
                    attempt, query.connection_settings.retries
                );
            }

            match fetch_topics(&query) {
                Ok(topics) => return Ok(ListTopicsQueryInternalResponse { topics }),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Topic listing was never attempted")))
    });

    handle.await.context("While joining blocking handle")?
}

fn fetch_topics(query: &ListTopicsQueryInternal) -> Result<Vec<KafkaTopicMetadata>, anyhow::Error> {
    let client = ConsumerWrapper::create_for_metadata(&query.connection_settings)
        .context("While creating metadata client")?;

    let metadata = client
        .fetch_metadata(None, Timeout::After(query.metadata_timeout))
        .context("While fetching cluster metadata")?;

    let topics = metadata
        .topics()
        .iter()
        .map(|topic| KafkaTopicMetadata {
            topic_name: topic.name().to_owned(),
            partitions_count: topic.partitions().len(),
        })
        .collect::<Vec<_>>();

    Ok(topics)
}
